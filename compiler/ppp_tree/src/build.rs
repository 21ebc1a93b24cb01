//! Tree building by stack reduction.
//!
//! Source is prefix notation, so reading tokens last-to-first turns it into
//! postfix: every operand is reduced before the operator that consumes it.
//! Tokens from all lines form one stream; a line's operator may take its
//! operands from later lines.

use ppp_diagnostic::{Diagnostic, ErrorCode};
use ppp_ir::{Arity, ExprArena, ExprId, ExprShape, Forest, Token};

/// Tree building failure. Fatal: no forest is produced.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum BuildError {
    /// An operator found fewer completed subtrees than its arity.
    #[error(
        "`{}` expects {}, but {} given",
        .token.text,
        operand_count(.expected),
        given_count(.actual)
    )]
    MissingOperands {
        token: Token,
        expected: usize,
        actual: usize,
    },
}

fn operand_count(n: &usize) -> String {
    match n {
        1 => "1 operand".to_string(),
        n => format!("{n} operands"),
    }
}

fn given_count(n: &usize) -> String {
    match n {
        1 => "1 was".to_string(),
        n => format!("{n} were"),
    }
}

impl BuildError {
    /// Convert to a renderable diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::MissingOperands { token, .. } => Diagnostic::error(ErrorCode::E1001)
                .with_message(self.to_string())
                .with_token_label(token, token.kind.label())
                .with_note("operands follow their operator, and may continue on later lines"),
        }
    }
}

/// Reduce a token stream (source order) into a forest.
///
/// Tokens are consumed from the end. A leaf is pushed for every operand; an
/// operator pops its children off the completed-subtree stack, first pop
/// becoming the left child. Whatever remains on that stack when the input
/// is exhausted are the roots, kept in completion order.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn build(mut tokens: Vec<Token>) -> Result<Forest, BuildError> {
    let mut arena = ExprArena::with_capacity(tokens.len());
    let mut completed: Vec<ExprId> = Vec::new();

    while let Some(token) = tokens.pop() {
        let available = completed.len();
        let arity = token.kind.arity();
        let shape = match arity {
            Arity::Nullary => Some(ExprShape::Leaf),
            Arity::Unary => completed.pop().map(ExprShape::Unary),
            Arity::Binary => match (completed.pop(), completed.pop()) {
                (Some(left), Some(right)) => Some(ExprShape::Binary(left, right)),
                _ => None,
            },
        };
        let Some(shape) = shape else {
            return Err(BuildError::MissingOperands {
                token,
                expected: arity.operands(),
                actual: available,
            });
        };

        let id = arena.alloc(token, shape);
        tracing::trace!(?id, token = ?arena.get(id).token, ?shape, "node");
        completed.push(id);
    }

    tracing::debug!(nodes = arena.len(), trees = completed.len(), "forest built");
    Ok(Forest::new(arena, completed))
}

#[cfg(test)]
mod tests;

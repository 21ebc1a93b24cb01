//! Linear, execution-ordered instruction sequence.

use std::fmt;

use crate::token::Token;

/// Tokens in postfix order: every operator follows both of its operands.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Program {
    ops: Vec<Token>,
}

impl Program {
    pub fn new(ops: Vec<Token>) -> Self {
        Program { ops }
    }

    pub fn ops(&self) -> &[Token] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Lexemes of every instruction, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops.iter().map(|op| op.text.as_str()).collect()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

//! Type checker errors.

use std::fmt;

use ppp_diagnostic::{Diagnostic, ErrorCode};
use ppp_ir::{Token, ValueType};

/// Which operand slot of a node an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Slot {
    Left,
    Right,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Left => f.write_str("left"),
            Slot::Right => f.write_str("right"),
        }
    }
}

/// A type checker error. Checking continues past every one of these.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TypeError {
    /// A child's result type does not fit the slot it fills.
    #[error(
        "type mismatch: `{}` expects {expected} as its {slot} operand, found {found}",
        .node.text
    )]
    Mismatch {
        node: Token,
        slot: Slot,
        expected: ValueType,
        found: ValueType,
        operand: Token,
    },

    /// Division or modulo whose divisor is the literal `0`.
    #[error("division by zero: the divisor of `{}` is the literal 0", .node.text)]
    DivideByZero { node: Token, divisor: Token },
}

impl TypeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TypeError::Mismatch { .. } => ErrorCode::E2001,
            TypeError::DivideByZero { .. } => ErrorCode::E2002,
        }
    }

    /// The node the error is reported against.
    pub fn node(&self) -> &Token {
        match self {
            TypeError::Mismatch { node, .. } | TypeError::DivideByZero { node, .. } => node,
        }
    }

    /// Convert to a renderable diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            TypeError::Mismatch {
                node,
                expected,
                found,
                operand,
                ..
            } => {
                let diag = diag
                    .with_token_label(node, format!("{} expects {expected}", node.kind.label()))
                    .with_token_secondary_label(operand, format!("this is {}", article(*found)));
                if *found == ValueType::None {
                    diag.with_note(format!(
                        "{} does not produce a value",
                        operand.kind.label()
                    ))
                } else {
                    diag
                }
            }
            TypeError::DivideByZero { node, divisor } => diag
                .with_token_label(node, node.kind.label())
                .with_token_secondary_label(divisor, "divisor is zero"),
        }
    }
}

fn article(ty: ValueType) -> String {
    match ty {
        ValueType::None => "no value".to_string(),
        ValueType::Integer => "an integer".to_string(),
        other => format!("a {other}"),
    }
}

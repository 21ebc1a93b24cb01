//! Runtime errors. Every one of them stops the machine.

use std::io;

use ppp_diagnostic::{Diagnostic, ErrorCode};
use ppp_ir::Token;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero { op: Token },

    #[error("modulo by zero")]
    ModuloByZero { op: Token },

    #[error("integer overflow in {}", .op.kind)]
    IntegerOverflow { op: Token },

    #[error("shift amount {amount} out of range (0-63)")]
    InvalidShift { op: Token, amount: i64 },

    #[error("stack underflow: {} needs a value but the stack is empty", .op.kind)]
    StackUnderflow { op: Token },

    #[error("unsupported operation: {} cannot be executed", .op.kind)]
    UnsupportedOperation { op: Token },

    #[error("cannot write program output: {source}")]
    Output {
        op: Token,
        #[source]
        source: io::Error,
    },
}

impl RuntimeError {
    /// The instruction that failed.
    pub fn op(&self) -> &Token {
        match self {
            RuntimeError::DivisionByZero { op }
            | RuntimeError::ModuloByZero { op }
            | RuntimeError::IntegerOverflow { op }
            | RuntimeError::InvalidShift { op, .. }
            | RuntimeError::StackUnderflow { op }
            | RuntimeError::UnsupportedOperation { op }
            | RuntimeError::Output { op, .. } => op,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeError::DivisionByZero { .. } => ErrorCode::E6001,
            RuntimeError::ModuloByZero { .. } => ErrorCode::E6002,
            RuntimeError::IntegerOverflow { .. } => ErrorCode::E6003,
            RuntimeError::InvalidShift { .. } => ErrorCode::E6004,
            RuntimeError::StackUnderflow { .. } => ErrorCode::E6005,
            RuntimeError::UnsupportedOperation { .. } => ErrorCode::E6006,
            RuntimeError::Output { .. } => ErrorCode::E6007,
        }
    }

    /// Convert to a renderable diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let op = self.op();
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_token_label(op, op.kind.label());
        match self {
            RuntimeError::DivisionByZero { .. } | RuntimeError::ModuloByZero { .. } => {
                diag.with_note("the divisor evaluated to zero at runtime")
            }
            RuntimeError::IntegerOverflow { .. } => {
                diag.with_note(format!("values must stay within {}..={}", i64::MIN, i64::MAX))
            }
            RuntimeError::UnsupportedOperation { .. } => {
                diag.with_note(format!("{} has no runtime semantics", op.kind.label()))
            }
            RuntimeError::InvalidShift { .. }
            | RuntimeError::StackUnderflow { .. }
            | RuntimeError::Output { .. } => diag,
        }
    }
}

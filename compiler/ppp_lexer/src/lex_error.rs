//! Scanner error types.

use ppp_diagnostic::{Diagnostic, ErrorCode};
use ppp_ir::Position;

/// A scanner error. Scanning continues past every one of these, so a
/// single run reports all of them.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// Missing closing `"` before end of line.
    #[error("unterminated string literal")]
    UnterminatedString { pos: Position, width: u32 },

    /// A character that starts no token.
    #[error("invalid character `{found}`")]
    InvalidCharacter { found: char, pos: Position },

    /// Integer literal outside the signed 64-bit range.
    #[error("integer literal `{text}` is out of range")]
    IntegerOutOfRange { text: String, pos: Position },
}

impl LexError {
    pub fn pos(&self) -> Position {
        match self {
            LexError::UnterminatedString { pos, .. }
            | LexError::InvalidCharacter { pos, .. }
            | LexError::IntegerOutOfRange { pos, .. } => *pos,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::InvalidCharacter { .. } => ErrorCode::E0002,
            LexError::IntegerOutOfRange { .. } => ErrorCode::E0003,
        }
    }

    /// Convert to a renderable diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::UnterminatedString { pos, width } => diag
                .with_label(*pos, *width, "string starts here")
                .with_note("string literals must close on the line they open"),
            LexError::InvalidCharacter { found, pos } => {
                let diag = diag.with_label(*pos, 1, "not a valid token");
                if *found == '_' {
                    diag.with_note("`_` only appears in `_*`, `_<` and `_>`")
                } else {
                    diag
                }
            }
            LexError::IntegerOutOfRange { text, pos } => diag
                .with_label(
                    *pos,
                    crate::convert::width_of(text),
                    "does not fit in 64 bits",
                )
                .with_note(format!("the largest integer literal is {}", i64::MAX)),
        }
    }
}

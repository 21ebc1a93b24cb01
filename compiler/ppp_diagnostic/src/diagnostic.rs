//! Core diagnostic types for structured error reporting.

use std::fmt;

use ppp_ir::{Position, Token};

use crate::ErrorCode;

/// A labeled source location.
///
/// Points at `width` characters starting at `pos`; the emitter draws a caret
/// run under them and prints `message` beside it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub pos: Position,
    pub width: u32,
    pub message: String,
    /// Whether this is the main error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(pos: Position, width: u32, message: impl Into<String>) -> Self {
        Label {
            pos,
            width: width.max(1),
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(pos: Position, width: u32, message: impl Into<String>) -> Self {
        Label {
            pos,
            width: width.max(1),
            message: message.into(),
            is_primary: false,
        }
    }
}

/// An error diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, pos: Position, width: u32, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(pos, width, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(
        mut self,
        pos: Position,
        width: u32,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::secondary(pos, width, message));
        self
    }

    /// Add a primary label spanning a token's lexeme.
    pub fn with_token_label(self, token: &Token, message: impl Into<String>) -> Self {
        self.with_label(token.pos, token.width(), message)
    }

    /// Add a secondary label spanning a token's lexeme.
    pub fn with_token_secondary_label(self, token: &Token, message: impl Into<String>) -> Self {
        self.with_secondary_label(token.pos, token.width(), message)
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Get the primary position (first primary label's position).
    pub fn primary_pos(&self) -> Option<Position> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.pos)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(pos) = self.primary_pos() {
            write!(f, " at {pos}")?;
        }
        Ok(())
    }
}

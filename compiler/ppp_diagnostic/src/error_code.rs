//! Error codes for all PPP diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `--explain` lookups.

use std::fmt;

/// Error codes for all PPP diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Tree builder errors
/// - E2xxx: Type checker errors
/// - E6xxx: Stack machine errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Integer literal out of range
    E0003,

    // Tree Builder Errors (E1xxx)
    /// Operator has fewer operands than its arity requires
    E1001,

    // Type Errors (E2xxx)
    /// Operand type mismatch
    E2001,
    /// Division or modulo by a literal zero
    E2002,

    // Stack Machine Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Modulo by zero
    E6002,
    /// Integer overflow
    E6003,
    /// Shift amount out of range
    E6004,
    /// Operand stack underflow
    E6005,
    /// Token has no runtime semantics
    E6006,
    /// Program output could not be written
    E6007,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()`; `test_all_variants_listed` catches omissions.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
        }
    }

    /// Check if this is a scanner error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a tree builder error (E1xxx range).
    pub fn is_build_error(&self) -> bool {
        matches!(self, ErrorCode::E1001)
    }

    /// Check if this is a type error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6002
                | ErrorCode::E6003
                | ErrorCode::E6004
                | ErrorCode::E6005
                | ErrorCode::E6006
                | ErrorCode::E6007
        )
    }

    /// Name of the pipeline stage that reports this code.
    pub fn phase(&self) -> &'static str {
        if self.is_lexer_error() {
            "scanner"
        } else if self.is_build_error() {
            "tree builder"
        } else if self.is_type_error() {
            "type checker"
        } else {
            "stack machine"
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

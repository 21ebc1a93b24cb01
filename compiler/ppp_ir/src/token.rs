//! Token types produced by the scanner.
//!
//! A [`Token`] is created once by the scanner and never mutated afterward.
//! Its `text` doubles as display text and, for integer literals, as the
//! encoded value (decoded on demand by [`Token::int_value`]).

use std::fmt;

use crate::types::{Arity, TypeSignature, ValueType};

/// A 1-based line/column location in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds for PPP.
///
/// The set is closed: the scanner only ever produces these, and every
/// per-kind table below is an exhaustive match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal: `42`
    IntLiteral,
    /// String literal: `"hello"` (text excludes the quotes)
    StrLiteral,
    /// Identifier: `x`, `count`
    Ident,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `=`
    Assign,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `!` or `not`
    Not,
    /// `_*`
    BitAnd,
    /// `_<`
    Shl,
    /// `_>`
    Shr,

    /// `.` or `print`
    Print,
    /// `:`
    PrintLine,
    /// `?` or `if`
    If,
    /// `@` or `while`
    While,
    /// `$` or `loop`
    Loop,
    /// `do`
    Do,
    /// `done`
    Done,
    /// `;`
    EndOfLine,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 23] = [
        TokenKind::IntLiteral,
        TokenKind::StrLiteral,
        TokenKind::Ident,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Assign,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Not,
        TokenKind::BitAnd,
        TokenKind::Shl,
        TokenKind::Shr,
        TokenKind::Print,
        TokenKind::PrintLine,
        TokenKind::If,
        TokenKind::While,
        TokenKind::Loop,
        TokenKind::Do,
        TokenKind::Done,
        TokenKind::EndOfLine,
    ];

    /// Number of operand subtrees a token of this kind reduces.
    pub const fn arity(self) -> Arity {
        match self {
            TokenKind::IntLiteral
            | TokenKind::StrLiteral
            | TokenKind::Ident
            | TokenKind::EndOfLine => Arity::Nullary,

            TokenKind::Not | TokenKind::Print | TokenKind::PrintLine => Arity::Unary,

            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Mod
            | TokenKind::Assign
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::BitAnd
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Loop
            | TokenKind::Do
            | TokenKind::Done => Arity::Binary,
        }
    }

    /// The `(result, expected-left, expected-right)` signature of this kind.
    ///
    /// Slots the arity does not use are `ValueType::None`.
    pub const fn signature(self) -> TypeSignature {
        use ValueType::{Integer, None, String, Unknown};

        match self {
            TokenKind::IntLiteral => TypeSignature::leaf(Integer),
            TokenKind::StrLiteral => TypeSignature::leaf(String),
            TokenKind::Ident => TypeSignature::leaf(Unknown),
            TokenKind::EndOfLine => TypeSignature::leaf(None),

            TokenKind::Not => TypeSignature::unary(Integer, Integer),
            TokenKind::Print | TokenKind::PrintLine => TypeSignature::unary(None, Integer),

            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Mod
            | TokenKind::BitAnd
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::Less
            | TokenKind::Greater => TypeSignature::binary(Integer, Integer, Integer),

            TokenKind::Assign => TypeSignature::binary(None, Unknown, Integer),
            TokenKind::If | TokenKind::While | TokenKind::Loop => {
                TypeSignature::binary(None, Integer, None)
            }
            TokenKind::Do | TokenKind::Done => TypeSignature::binary(None, None, None),
        }
    }

    /// Human-readable category, used in diagnostics and dumps.
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "integer literal",
            TokenKind::StrLiteral => "string literal",
            TokenKind::Ident => "identifier",
            TokenKind::Add => "add",
            TokenKind::Sub => "subtract",
            TokenKind::Mul => "multiply",
            TokenKind::Div => "divide",
            TokenKind::Mod => "modulo",
            TokenKind::Assign => "assign",
            TokenKind::Less => "less-than",
            TokenKind::Greater => "greater-than",
            TokenKind::Not => "logical-not",
            TokenKind::BitAnd => "bit-and",
            TokenKind::Shl => "bit-left-shift",
            TokenKind::Shr => "bit-right-shift",
            TokenKind::Print => "print",
            TokenKind::PrintLine => "print-line",
            TokenKind::If => "conditional",
            TokenKind::While => "while",
            TokenKind::Loop => "loop",
            TokenKind::Do => "do",
            TokenKind::Done => "done",
            TokenKind::EndOfLine => "end-of-line marker",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its lexeme and source position.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Decode an integer literal.
    ///
    /// Returns `None` for every other kind, and for literal text that does
    /// not fit in an `i64` (the scanner rejects those before they get here).
    pub fn int_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::IntLiteral => self.text.parse().ok(),
            _ => None,
        }
    }

    /// Width of the lexeme in characters, at least 1 (used for carets).
    pub fn width(&self) -> u32 {
        let chars = match self.kind {
            TokenKind::StrLiteral => self.text.chars().count() + 2,
            _ => self.text.chars().count(),
        };
        u32::try_from(chars).unwrap_or(u32::MAX).max(1)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.pos)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StrLiteral => write!(f, "\"{}\"", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

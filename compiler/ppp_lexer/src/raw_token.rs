//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to [`ppp_ir::TokenKind`]. Input is fed one line at a time, so
//! no pattern needs to handle newlines.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    // Keywords
    #[token("print")]
    Print,
    #[token("not")]
    Not,
    #[token("while")]
    While,
    #[token("loop")]
    Loop,
    #[token("if")]
    If,
    #[token("do")]
    Do,
    #[token("done")]
    Done,

    // Literals
    #[regex(r#""[^"\n]*""#)]
    String,
    /// A string with no closing quote before end of line.
    #[regex(r#""[^"\n]*"#)]
    UnterminatedString,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[A-Za-z]+")]
    Ident,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("_*")]
    UnderStar,
    #[token("_<")]
    UnderLt,
    #[token("_>")]
    UnderGt,

    // Statement markers
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("@")]
    At,
    #[token("$")]
    Dollar,
    #[token(";")]
    Semi,
}

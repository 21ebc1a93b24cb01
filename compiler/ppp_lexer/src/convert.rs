//! Token Conversion
//!
//! Converts raw logos tokens into [`Token`]s, decoding literal payloads.

use ppp_ir::{Position, Token, TokenKind};

use crate::lex_error::LexError;
use crate::raw_token::RawToken;

/// Convert one raw token.
///
/// Returns `Ok(None)` for trivia (comments).
pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    pos: Position,
) -> Result<Option<Token>, LexError> {
    let kind = match raw {
        RawToken::Comment => return Ok(None),
        RawToken::UnterminatedString => {
            return Err(LexError::UnterminatedString {
                pos,
                width: width_of(slice),
            })
        }

        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            return Ok(Some(Token::new(TokenKind::StrLiteral, content, pos)));
        }
        RawToken::Int => {
            if slice.parse::<i64>().is_err() {
                return Err(LexError::IntegerOutOfRange {
                    text: slice.to_owned(),
                    pos,
                });
            }
            TokenKind::IntLiteral
        }
        RawToken::Ident => TokenKind::Ident,

        // Keywords
        RawToken::Print => TokenKind::Print,
        RawToken::Not | RawToken::Bang => TokenKind::Not,
        RawToken::While | RawToken::At => TokenKind::While,
        RawToken::Loop | RawToken::Dollar => TokenKind::Loop,
        RawToken::If | RawToken::Question => TokenKind::If,
        RawToken::Do => TokenKind::Do,
        RawToken::Done => TokenKind::Done,

        // Operators
        RawToken::Plus => TokenKind::Add,
        RawToken::Minus => TokenKind::Sub,
        RawToken::Star => TokenKind::Mul,
        RawToken::Slash => TokenKind::Div,
        RawToken::Percent => TokenKind::Mod,
        RawToken::Eq => TokenKind::Assign,
        RawToken::Lt => TokenKind::Less,
        RawToken::Gt => TokenKind::Greater,
        RawToken::UnderStar => TokenKind::BitAnd,
        RawToken::UnderLt => TokenKind::Shl,
        RawToken::UnderGt => TokenKind::Shr,

        // Statement markers
        RawToken::Dot => TokenKind::Print,
        RawToken::Colon => TokenKind::PrintLine,
        RawToken::Semi => TokenKind::EndOfLine,
    };
    Ok(Some(Token::new(kind, slice, pos)))
}

pub(crate) fn width_of(slice: &str) -> u32 {
    u32::try_from(slice.chars().count())
        .unwrap_or(u32::MAX)
        .max(1)
}

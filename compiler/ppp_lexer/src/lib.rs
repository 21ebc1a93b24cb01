//! Scanner for PPP using logos.
//!
//! Source is scanned line by line. Positions are 1-based; columns count
//! characters, not bytes. Scanning never stops at the first problem: every
//! error in the file is collected alongside the tokens that did scan.

mod convert;
mod lex_error;
mod raw_token;

use logos::Logos;
use ppp_ir::{Position, Token};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

pub use lex_error::LexError;

/// Output of scanning a whole file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens if scanning was clean, otherwise every error.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scan a whole source file.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();

    for (index, line) in source.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
        lex_line(line, line_no, &mut output);
    }

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}

fn lex_line(line: &str, line_no: u32, output: &mut LexOutput) {
    let mut logos = RawToken::lexer(line);
    // Characters before `byte_mark`, so columns are found incrementally.
    let mut byte_mark = 0;
    let mut char_mark = 0;

    while let Some(result) = logos.next() {
        let span = logos.span();
        char_mark += line[byte_mark..span.start].chars().count();
        byte_mark = span.start;
        let column = u32::try_from(char_mark + 1).unwrap_or(u32::MAX);
        let pos = Position::new(line_no, column);
        let slice = logos.slice();

        match result {
            Ok(raw) => match convert_token(raw, slice, pos) {
                Ok(Some(token)) => output.tokens.push(token),
                Ok(None) => {}
                Err(err) => output.errors.push(err),
            },
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{fffd}');
                output
                    .errors
                    .push(LexError::InvalidCharacter { found, pos });
            }
        }
    }
}

#[cfg(test)]
mod tests;

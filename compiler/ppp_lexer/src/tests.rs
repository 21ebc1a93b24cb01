#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use ppp_ir::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_result().unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_arithmetic_line() {
    let tokens = lex(": + 3 4").into_result().unwrap();
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::PrintLine, ":"),
            (TokenKind::Add, "+"),
            (TokenKind::IntLiteral, "3"),
            (TokenKind::IntLiteral, "4"),
        ]
    );
}

#[test]
fn test_positions_are_one_based() {
    let tokens = lex("+ 3 4\n\n  - 6 3").into_result().unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 3),
            Position::new(1, 5),
            Position::new(3, 3),
            Position::new(3, 5),
            Position::new(3, 7),
        ]
    );
}

#[test]
fn test_columns_count_characters() {
    let tokens = lex("\"héllo\" 1").into_result().unwrap();
    assert_eq!(tokens[0].text, "héllo");
    assert_eq!(tokens[1].pos, Position::new(1, 9));
}

#[test]
fn test_operators() {
    assert_eq!(
        kinds("+ - * / % = < > ! _* _< _>"),
        vec![
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
        ]
    );
}

#[test]
fn test_markers_and_keywords() {
    assert_eq!(
        kinds(". : ? @ $ ; print not while loop if do done"),
        vec![
            TokenKind::Print,
            TokenKind::PrintLine,
            TokenKind::If,
            TokenKind::While,
            TokenKind::Loop,
            TokenKind::EndOfLine,
            TokenKind::Print,
            TokenKind::Not,
            TokenKind::While,
            TokenKind::Loop,
            TokenKind::If,
            TokenKind::Do,
            TokenKind::Done,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = lex("doing printer x").into_result().unwrap();
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Ident));
    assert_eq!(tokens[0].text, "doing");
}

#[test]
fn test_string_excludes_quotes() {
    let tokens = lex(". \"hi there\"").into_result().unwrap();
    assert_eq!(tokens[1].kind, TokenKind::StrLiteral);
    assert_eq!(tokens[1].text, "hi there");
    assert_eq!(tokens[1].width(), 10);
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("+ 1 2 # add them\n# whole line"),
        vec![TokenKind::Add, TokenKind::IntLiteral, TokenKind::IntLiteral]
    );
}

#[test]
fn test_crlf_lines() {
    let tokens = lex("1\r\n2\r\n").into_result().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].pos, Position::new(2, 1));
}

#[test]
fn test_empty_source() {
    let output = lex("");
    assert!(output.tokens.is_empty());
    assert!(!output.has_errors());
}

#[test]
fn test_unterminated_string() {
    let output = lex("+ 1 \"abc");
    assert_eq!(
        output.errors,
        vec![LexError::UnterminatedString {
            pos: Position::new(1, 5),
            width: 4,
        }]
    );
    assert_eq!(output.tokens.len(), 2);
}

#[test]
fn test_invalid_characters_accumulate() {
    let output = lex("+ 1 & 2\n~ 3");
    assert_eq!(
        output.errors,
        vec![
            LexError::InvalidCharacter {
                found: '&',
                pos: Position::new(1, 5),
            },
            LexError::InvalidCharacter {
                found: '~',
                pos: Position::new(2, 1),
            },
        ]
    );
    assert_eq!(output.tokens.len(), 4);
}

#[test]
fn test_lone_underscore_is_invalid() {
    let output = lex("_ 1");
    assert_eq!(output.errors.len(), 1);
    assert!(matches!(
        output.errors[0],
        LexError::InvalidCharacter { found: '_', .. }
    ));
}

#[test]
fn test_integer_out_of_range() {
    let output = lex(": 9223372036854775808");
    assert_eq!(
        output.errors,
        vec![LexError::IntegerOutOfRange {
            text: "9223372036854775808".into(),
            pos: Position::new(1, 3),
        }]
    );
}

#[test]
fn test_max_integer_is_accepted() {
    let tokens = lex("9223372036854775807").into_result().unwrap();
    assert_eq!(tokens[0].int_value(), Some(i64::MAX));
}

proptest! {
    #[test]
    fn prop_integer_literals_decode(n in 0..=i64::MAX) {
        let tokens = lex(&n.to_string()).into_result().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].int_value(), Some(n));
    }

    #[test]
    fn prop_token_count_matches_words(words in proptest::collection::vec("[a-z]{1,6}|[0-9]{1,6}|[-+*/%]", 0..20)) {
        let source = words.join(" ");
        let output = lex(&source);
        prop_assert!(!output.has_errors());
        prop_assert_eq!(output.tokens.len(), words.len());
    }
}

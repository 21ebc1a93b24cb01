#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::build;
use ppp_ir::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn program(source: &str) -> Program {
    linearize(build(ppp_lexer::lex(source).into_result().unwrap()).unwrap())
}

#[test]
fn test_binary_postfix() {
    assert_eq!(program("+ 3 4").texts(), vec!["3", "4", "+"]);
    assert_eq!(program("- 6 3").texts(), vec!["6", "3", "-"]);
}

#[test]
fn test_nested_postfix() {
    assert_eq!(
        program(": + 3 * 4 5").texts(),
        vec!["3", "4", "5", "*", "+", ":"]
    );
}

#[test]
fn test_trees_in_source_line_order() {
    assert_eq!(
        program(": 1\n: 2\n: 3").texts(),
        vec!["1", ":", "2", ":", "3", ":"]
    );
}

#[test]
fn test_display_quotes_strings() {
    assert_eq!(program(". \"hi\"").to_string(), "\"hi\" .");
}

#[test]
fn test_empty_forest() {
    assert!(program("").is_empty());
}

#[test]
fn test_deep_chain_linearizes() {
    let source = format!("{}0", "! ".repeat(50_000));
    let program = program(&source);
    assert_eq!(program.len(), 50_001);
    assert_eq!(program.ops()[0].kind, TokenKind::IntLiteral);
    assert!(program.ops()[1..].iter().all(|op| op.kind == TokenKind::Not));
}

/// Random prefix expression over integer leaves and binary operators.
fn expr() -> impl Strategy<Value = String> {
    let leaf = (0u32..100).prop_map(|n| n.to_string());
    leaf.prop_recursive(6, 64, 2, |inner| {
        (
            prop::sample::select(vec!["+", "-", "*", "_*", "<"]),
            inner.clone(),
            inner,
        )
            .prop_map(|(op, a, b)| format!("{op} {a} {b}"))
    })
}

proptest! {
    #[test]
    fn prop_operators_follow_their_operands(source in expr()) {
        let tokens = ppp_lexer::lex(&source).into_result().unwrap();
        let count = tokens.len();
        let program = linearize(build(tokens).unwrap());
        prop_assert_eq!(program.len(), count);

        // Simulated stack depth never drops below one operand per pending
        // operator, and ends with exactly one value.
        let mut depth = 0usize;
        for op in program.ops() {
            let arity = op.kind.arity().operands();
            prop_assert!(depth >= arity, "operator {:?} ran before its operands", op);
            depth = depth - arity + 1;
        }
        prop_assert_eq!(depth, 1);
    }
}

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use ppp_ir::{Position, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn forest(source: &str) -> Forest {
    build(ppp_lexer::lex(source).into_result().unwrap()).unwrap()
}

fn rendered(source: &str) -> Vec<String> {
    let forest = forest(source);
    forest.roots().map(|root| forest.render(root)).collect()
}

#[test]
fn test_binary_left_is_first_source_operand() {
    let forest = forest("- 6 3");
    let root = forest.roots().next().unwrap();
    let node = forest.node(root);
    assert_eq!(node.token.kind, TokenKind::Sub);
    assert_eq!(forest.node(node.left().unwrap()).token.text, "6");
    assert_eq!(forest.node(node.right().unwrap()).token.text, "3");
}

#[test]
fn test_nested_expressions() {
    assert_eq!(rendered(": + 3 * 4 5"), vec!["(: (+ 3 (* 4 5)))"]);
    assert_eq!(rendered("! < 1 2"), vec!["(! (< 1 2))"]);
}

#[test]
fn test_roots_follow_source_lines() {
    assert_eq!(
        rendered(": + 1 2\n: - 5 3\n7"),
        vec!["(: (+ 1 2))", "(: (- 5 3))", "7"]
    );
}

#[test]
fn test_operands_may_come_from_later_lines() {
    assert_eq!(rendered("+ 1\n2"), vec!["(+ 1 2)"]);
}

#[test]
fn test_every_token_lands_in_one_tree() {
    let forest = forest("+ 1 2 ; x \"s\"");
    assert_eq!(forest.arena().len(), 6);
    assert_eq!(forest.tree_count(), 4);
}

#[test]
fn test_empty_input_builds_empty_forest() {
    let forest = build(Vec::new()).unwrap();
    assert!(forest.is_empty());
}

#[test]
fn test_lone_binary_operator() {
    let token = Token::new(TokenKind::Add, "+", Position::new(1, 1));
    let err = build(vec![token.clone()]).unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingOperands {
            token,
            expected: 2,
            actual: 0,
        }
    );
    assert_eq!(err.to_string(), "`+` expects 2 operands, but 0 were given");
}

#[test]
fn test_binary_operator_with_one_operand() {
    let err = build(ppp_lexer::lex("* 4").into_result().unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "`*` expects 2 operands, but 1 was given");
}

#[test]
fn test_unary_operator_without_operand() {
    let err = build(ppp_lexer::lex(":").into_result().unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "`:` expects 1 operand, but 0 were given");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.primary_pos(), Some(Position::new(1, 1)));
}

#[test]
fn test_deep_chain_builds() {
    let source = format!("{}1", "! ".repeat(50_000));
    let forest = forest(&source);
    assert_eq!(forest.tree_count(), 1);
    assert_eq!(forest.arena().len(), 50_001);
}

proptest! {
    #[test]
    fn prop_op_a_b_builds_left_a_right_b(a in 0i64..1000, b in 0i64..1000) {
        for op in ["+", "-", "*", "/", "%", "<", ">", "_*", "_<", "_>"] {
            let forest = forest(&format!("{op} {a} {b}"));
            prop_assert_eq!(forest.tree_count(), 1);
            let root = forest.node(forest.roots().next().unwrap());
            prop_assert_eq!(forest.node(root.left().unwrap()).token.int_value(), Some(a));
            prop_assert_eq!(forest.node(root.right().unwrap()).token.int_value(), Some(b));
        }
    }

    #[test]
    fn prop_lone_operator_reports_full_arity(op in "[-+*/%<>]") {
        let err = build(ppp_lexer::lex(&op).into_result().unwrap()).unwrap_err();
        let BuildError::MissingOperands { expected, actual, .. } = err;
        prop_assert_eq!(expected, 2);
        prop_assert_eq!(actual, 0);
    }
}

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use ppp_ir::Position;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn compile(source: &str) -> Program {
    let tokens = ppp_lexer::lex(source).into_result().unwrap();
    ppp_tree::linearize(ppp_tree::build(tokens).unwrap())
}

/// Run `source`, returning the final stack and everything printed.
fn run(source: &str) -> (Result<Vec<i64>, RuntimeError>, String) {
    let mut out = Vec::new();
    let result = Machine::new(&mut out).run(&compile(source));
    (result, String::from_utf8(out).unwrap())
}

fn stack(source: &str) -> Vec<i64> {
    run(source).0.unwrap()
}

#[test]
fn test_add() {
    assert_eq!(stack("+ 3 4"), vec![7]);
}

#[test]
fn test_subtract_is_left_minus_right() {
    assert_eq!(stack("- 6 3"), vec![3]);
    assert_eq!(stack("/ 12 4"), vec![3]);
    assert_eq!(stack("% 7 3"), vec![1]);
    assert_eq!(stack("_< 1 3"), vec![8]);
}

#[test]
fn test_nested() {
    assert_eq!(stack("+ 3 * 4 5"), vec![23]);
    assert_eq!(stack("- * 2 5 / 9 3"), vec![7]);
}

#[test]
fn test_comparisons_and_not() {
    assert_eq!(stack("< 1 2"), vec![1]);
    assert_eq!(stack("> 1 2"), vec![0]);
    assert_eq!(stack("! 0"), vec![1]);
    assert_eq!(stack("not 5"), vec![0]);
}

#[test]
fn test_print_line_peeks() {
    let (result, out) = run(": + 3 4");
    assert_eq!(result.unwrap(), vec![7]);
    assert_eq!(out, "7\n");
}

#[test]
fn test_print_without_newline() {
    let (result, out) = run(". 1\n. 2\n: 3");
    assert_eq!(result.unwrap(), vec![1, 2, 3]);
    assert_eq!(out, "123\n");
}

#[test]
fn test_lines_run_in_source_order() {
    let (_, out) = run(": 1\n: - 0 2\n: * 3 3");
    assert_eq!(out, "1\n-2\n9\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(stack(""), Vec::<i64>::new());
}

#[test]
fn test_computed_zero_divisor() {
    let (result, out) = run(": / 1 - 2 2");
    let err = result.unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    assert_eq!(err.op().pos, Position::new(1, 3));
    assert_eq!(out, "");

    let (result, _) = run("% 1 - 2 2");
    assert!(matches!(
        result,
        Err(RuntimeError::ModuloByZero { .. })
    ));
}

#[test]
fn test_overflow() {
    let (result, _) = run("* 9223372036854775807 2");
    assert!(matches!(result, Err(RuntimeError::IntegerOverflow { .. })));
}

#[test]
fn test_invalid_shift() {
    let (result, _) = run("_> 1 64");
    assert!(matches!(
        result,
        Err(RuntimeError::InvalidShift { amount: 64, .. })
    ));
}

#[test]
fn test_output_before_failure_is_kept() {
    let (result, out) = run(": 5\n: / 1 - 1 1");
    assert!(result.is_err());
    assert_eq!(out, "5\n");
}

#[test]
fn test_unsupported_operations() {
    for source in ["= x 1", "? 1 ; ", "\"s\"", "x", ";", "do ; ;"] {
        let (result, _) = run(source);
        let err = result.unwrap_err();
        assert!(
            matches!(err, RuntimeError::UnsupportedOperation { .. }),
            "{source}: {err:?}"
        );
        assert_eq!(err.code(), ppp_diagnostic::ErrorCode::E6006);
    }
}

#[test]
fn test_stack_underflow() {
    let program = Program::new(vec![Token::new(TokenKind::Add, "+", Position::new(1, 1))]);
    let err = Machine::new(Vec::new()).run(&program).unwrap_err();
    assert!(matches!(err, RuntimeError::StackUnderflow { .. }));

    let program = Program::new(vec![Token::new(
        TokenKind::PrintLine,
        ":",
        Position::new(1, 1),
    )]);
    let err = Machine::new(Vec::new()).run(&program).unwrap_err();
    assert_eq!(err.code(), ppp_diagnostic::ErrorCode::E6005);
}

/// A writer that always fails.
struct Closed;

impl Write for Closed {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_output_failure() {
    let err = Machine::new(Closed).run(&compile(": 1")).unwrap_err();
    assert!(matches!(err, RuntimeError::Output { .. }));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ppp_diagnostic::ErrorCode::E6007);
    assert!(diag.message.starts_with("cannot write program output"));
}

#[test]
fn test_diagnostic_points_at_operator() {
    let (result, _) = run("\n  / 4 - 3 3");
    let diag = result.unwrap_err().to_diagnostic();
    assert_eq!(diag.code, ppp_diagnostic::ErrorCode::E6001);
    assert_eq!(diag.primary_pos(), Some(Position::new(2, 3)));
    assert_eq!(diag.labels[0].message, "divide");
}

proptest! {
    #[test]
    fn prop_binary_matches_native(a in 0i64..100_000, b in 0i64..100_000) {
        prop_assert_eq!(stack(&format!("+ {a} {b}")), vec![a + b]);
        prop_assert_eq!(stack(&format!("- {a} {b}")), vec![a - b]);
        prop_assert_eq!(stack(&format!("* {a} {b}")), vec![a * b]);
        prop_assert_eq!(stack(&format!("< {a} {b}")), vec![i64::from(a < b)]);
    }

    #[test]
    fn prop_print_line_writes_top(a in 0i64..1_000_000) {
        let (result, out) = run(&format!(": {a}"));
        prop_assert_eq!(result.unwrap(), vec![a]);
        prop_assert_eq!(out, format!("{a}\n"));
    }
}

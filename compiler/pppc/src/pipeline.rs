//! Phase chaining.
//!
//! Each function runs the pipeline up to one phase and converts any failure
//! into diagnostics. Scanner and type errors arrive as complete batches;
//! tree building and execution stop at their first error.

use std::io::Write;

use ppp_diagnostic::Diagnostic;
use ppp_eval::Machine;
use ppp_ir::{Forest, Program, Token};

/// Scan `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<Diagnostic>> {
    ppp_lexer::lex(source)
        .into_result()
        .map_err(|errors| errors.iter().map(ppp_lexer::LexError::to_diagnostic).collect())
}

/// Scan and build the expression forest.
pub fn build(source: &str) -> Result<Forest, Vec<Diagnostic>> {
    let tokens = lex(source)?;
    ppp_tree::build(tokens).map_err(|err| vec![err.to_diagnostic()])
}

/// Scan, build and type check.
pub fn check(source: &str) -> Result<Forest, Vec<Diagnostic>> {
    let forest = build(source)?;
    ppp_types::check(&forest)
        .map_err(|errors| errors.iter().map(ppp_types::TypeError::to_diagnostic).collect::<Vec<_>>())?;
    Ok(forest)
}

/// Every front-end phase: the checked, linearized program.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn compile(source: &str) -> Result<Program, Vec<Diagnostic>> {
    check(source).map(ppp_tree::linearize)
}

/// Interpret a program, writing printed values to `out`.
pub fn execute<W: Write>(program: &Program, out: W) -> Result<Vec<i64>, Diagnostic> {
    Machine::new(out)
        .run(program)
        .map_err(|err| err.to_diagnostic())
}

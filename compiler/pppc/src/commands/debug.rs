//! Debug dumps of intermediate representations.
//!
//! `tree` and `ops` stop before type checking, so ill-typed programs can
//! still be inspected.

use std::process::ExitCode;

use crate::commands::{read_source, report};
use crate::config::RunConfig;
use crate::pipeline;

/// Print one token per line: position, kind, lexeme.
pub fn lex_file(config: &RunConfig) -> ExitCode {
    let Some(source) = read_source(&config.path) else {
        return ExitCode::FAILURE;
    };

    match pipeline::lex(source.text()) {
        Ok(tokens) => {
            for token in &tokens {
                println!(
                    "{:<8} {:<20} {token}",
                    token.pos.to_string(),
                    token.kind.label()
                );
            }
            ExitCode::SUCCESS
        }
        Err(diagnostics) => {
            report(&diagnostics, &source, config.color);
            ExitCode::FAILURE
        }
    }
}

/// Print every tree as an s-expression, in execution order.
pub fn tree_file(config: &RunConfig) -> ExitCode {
    let Some(source) = read_source(&config.path) else {
        return ExitCode::FAILURE;
    };

    match pipeline::build(source.text()) {
        Ok(forest) => {
            for root in forest.roots() {
                println!("{}", forest.render(root));
            }
            ExitCode::SUCCESS
        }
        Err(diagnostics) => {
            report(&diagnostics, &source, config.color);
            ExitCode::FAILURE
        }
    }
}

/// Print the linearized program on one line.
pub fn ops_file(config: &RunConfig) -> ExitCode {
    let Some(source) = read_source(&config.path) else {
        return ExitCode::FAILURE;
    };

    match pipeline::build(source.text()) {
        Ok(forest) => {
            println!("{}", ppp_tree::linearize(forest));
            ExitCode::SUCCESS
        }
        Err(diagnostics) => {
            report(&diagnostics, &source, config.color);
            ExitCode::FAILURE
        }
    }
}

//! The `run` command: compile and interpret a file.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::commands::{read_source, report};
use crate::config::RunConfig;
use crate::pipeline;

/// Compile `config.path`, print the banner, then interpret it.
///
/// Nothing is printed to stdout unless every front-end phase succeeds.
pub fn run_file(config: &RunConfig) -> ExitCode {
    let Some(source) = read_source(&config.path) else {
        return ExitCode::FAILURE;
    };

    let program = match pipeline::compile(source.text()) {
        Ok(program) => program,
        Err(diagnostics) => {
            report(&diagnostics, &source, config.color);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "== ppp: {} ==", source.name()) {
        eprintln!("error: cannot write to stdout: {e}");
        return ExitCode::FAILURE;
    }

    match pipeline::execute(&program, &mut out) {
        Ok(stack) => {
            tracing::debug!(?stack, "final stack");
            ExitCode::SUCCESS
        }
        Err(diagnostic) => {
            drop(out);
            report(&[diagnostic], &source, config.color);
            ExitCode::FAILURE
        }
    }
}

//! The `check` command: run the front end without executing.

use std::process::ExitCode;

use crate::commands::{read_source, report};
use crate::config::RunConfig;
use crate::pipeline;

pub fn check_file(config: &RunConfig) -> ExitCode {
    let Some(source) = read_source(&config.path) else {
        return ExitCode::FAILURE;
    };

    match pipeline::check(source.text()) {
        Ok(forest) => {
            println!(
                "{}: ok ({} tree{})",
                source.name(),
                forest.tree_count(),
                if forest.tree_count() == 1 { "" } else { "s" }
            );
            ExitCode::SUCCESS
        }
        Err(diagnostics) => {
            report(&diagnostics, &source, config.color);
            ExitCode::FAILURE
        }
    }
}

//! Command handlers for the `ppp` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading the
//! source file and reporting diagnostics live here.

use std::io::{self, IsTerminal};
use std::path::Path;

use ppp_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ppp_diagnostic::{Diagnostic, SourceLines};

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, ops_file, tree_file};
pub use explain::explain_error;
pub use run::run_file;

/// Read a source file, reporting failure on stderr.
pub(crate) fn read_source(path: &Path) -> Option<SourceLines> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(SourceLines::new(path.display().to_string(), text)),
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", path.display());
            None
        }
    }
}

/// Render diagnostics to stderr against `source`, followed by a summary.
pub(crate) fn report(diagnostics: &[Diagnostic], source: &SourceLines, color: ColorMode) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), color, is_tty)
        .with_source(source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
}

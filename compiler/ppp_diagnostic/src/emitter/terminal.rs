//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When a [`SourceLines`] context is attached, each label is rendered under
//! its source line with a caret run; otherwise labels fall back to a
//! `line:column` reference.

use std::io::Write;

use crate::{Diagnostic, Label, SourceLines};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Whitespace that lines a caret up under 1-based `column` of `line_text`.
///
/// Tabs in the line prefix are copied so the caret moves with them;
/// everything else becomes a space. Columns past the end pad with spaces.
fn caret_indent(line_text: &str, column: u32) -> String {
    let target = column.saturating_sub(1) as usize;
    let mut indent: String = line_text
        .chars()
        .take(target)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let filled = indent.chars().count();
    indent.push_str(&" ".repeat(target - filled));
    indent
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always or never)"
            )),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'src SourceLines>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is consulted only for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text labels are rendered against.
    #[must_use]
    pub fn with_source(mut self, source: &'src SourceLines) -> Self {
        self.source = Some(source);
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_gutter(&mut self, gutter: usize, line: Option<u32>) {
        let number = line.map(|n| n.to_string()).unwrap_or_default();
        let text = format!("{number:>gutter$} |");
        self.write_colored(&text, colors::SECONDARY);
    }

    /// Render one label under its source line:
    ///
    /// ```text
    /// 3 | + 1 "a"
    ///   |     ^^^ expected integer
    /// ```
    fn write_snippet(&mut self, gutter: usize, line_text: &str, label: &Label) {
        self.write_gutter(gutter, Some(label.pos.line));
        let _ = writeln!(self.writer, " {line_text}");

        self.write_gutter(gutter, None);
        let indent = caret_indent(line_text, label.pos.column);
        let marker = if label.is_primary { "^" } else { "-" };
        let run = marker.repeat(label.width as usize);
        let _ = write!(self.writer, " {indent}");
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        if label.message.is_empty() {
            self.write_colored(&run, color);
        } else {
            self.write_colored(&format!("{run} {}", label.message), color);
        }
        let _ = writeln!(self.writer);
    }

    /// Fallback when the label's line is unavailable.
    fn write_reference(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {}: ", label.pos);
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let gutter = diagnostic
            .labels
            .iter()
            .map(|l| l.pos.line.to_string().len())
            .max()
            .unwrap_or(1);

        if let (Some(source), Some(pos)) = (self.source, diagnostic.primary_pos()) {
            let _ = write!(self.writer, "{:gutter$}", "");
            self.write_colored("-->", colors::SECONDARY);
            let _ = writeln!(self.writer, " {}:{pos}", source.name());
            self.write_gutter(gutter, None);
            let _ = writeln!(self.writer);
        }

        for label in &diagnostic.labels {
            match self.source.and_then(|s| s.line(label.pos.line)) {
                Some(line_text) => self.write_snippet(gutter, line_text, label),
                None => self.write_reference(label),
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{:gutter$} = ", "");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        match error_count {
            0 => {}
            1 => {
                self.write_colored("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to previous error");
            }
            n => {
                self.write_colored("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to {n} previous errors");
            }
        }
    }
}

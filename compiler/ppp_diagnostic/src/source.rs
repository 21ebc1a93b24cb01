//! Read-only view of program text for diagnostic rendering.

/// Pre-computed line table over a source file.
///
/// Stores the byte offset of each line start so that rendering a label
/// needs one index lookup instead of a scan from the top of the file.
#[derive(Clone, Debug, Default)]
pub struct SourceLines {
    name: String,
    text: String,
    /// Byte offset of each line start; `offsets[0] = 0`.
    offsets: Vec<usize>,
}

impl SourceLines {
    /// Build the line table for `text`, displayed as `name` in diagnostics.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut offsets = vec![0];
        offsets.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        SourceLines {
            name: name.into(),
            text,
            offsets,
        }
    }

    /// Display name (usually the file path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of a 1-based line, without its terminator.
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = usize::try_from(line).ok()?.checked_sub(1)?;
        let start = *self.offsets.get(idx)?;
        let end = self
            .offsets
            .get(idx + 1)
            .map_or(self.text.len(), |next| next - 1);
        let raw = self.text.get(start..end)?;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }

    /// Number of lines (a trailing newline opens one final empty line).
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

use crate::span::Span;
use std::path::{Path, PathBuf};

/// A utility struct to convert byte offsets to line and column numbers.
///
/// The node model works with byte offsets, but diagnostics report
/// 1-based line/column pairs which are more human-readable.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset to a 1-indexed line number.
    #[must_use]
    pub fn line(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a byte offset to a 1-indexed byte column within its line.
    #[must_use]
    pub fn column(&self, offset: usize) -> usize {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        offset - self.line_starts[line] + 1
    }
}

/// The verbatim text of one translation unit, as the host read it.
///
/// This is the source-text boundary of the checks: fix-it synthesis
/// copies characters out of it, and diagnostics resolve their line and
/// column against it. The checks never mutate it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    line_index: LineIndex,
}

impl SourceFile {
    /// Creates a source file from its path and full text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            path: path.into(),
            text,
            line_index,
        }
    }

    /// Path of the file, used to label diagnostics.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full original text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the verbatim characters covered by `span`, or `None` when
    /// the span is out of bounds or not aligned to character boundaries.
    /// Callers treat `None` as "not syntactically recoverable".
    #[must_use]
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.start..span.end)
    }

    /// Resolves a byte offset to a 1-based `(line, column)` pair.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        (self.line_index.line(offset), self.line_index.column(offset))
    }
}

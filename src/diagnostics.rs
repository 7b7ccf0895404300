//! Diagnostics and the sink through which the host consumes them.

use crate::fix::FixEdit;
use crate::source::SourceFile;
use serde::Serialize;
use std::path::PathBuf;

/// A single reported violation, with zero or more fix-its.
///
/// Line and column are resolved when the diagnostic is created, so the
/// value stays meaningful after the source file handle is gone. The
/// checks never merge or deduplicate diagnostics; that is host policy.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Name of the check that produced the diagnostic.
    pub check: &'static str,
    /// Severity level; these checks only warn.
    pub severity: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
    /// File the diagnostic is anchored in.
    pub file: PathBuf,
    /// 1-based anchor line.
    pub line: usize,
    /// 1-based anchor column.
    pub col: usize,
    /// Anchor byte offset in the original text.
    pub offset: usize,
    /// Fix-its, disjoint and ordered by start position. Empty when the
    /// violation is real but cannot be fixed automatically.
    pub fixits: Vec<FixEdit>,
}

impl Diagnostic {
    /// Creates a warning anchored at byte `offset`, resolving line and
    /// column against `source`.
    #[must_use]
    pub fn warning(
        check: &'static str,
        message: impl Into<String>,
        source: &SourceFile,
        offset: usize,
    ) -> Self {
        let (line, col) = source.line_col(offset);
        Self {
            check,
            severity: "warning",
            message: message.into(),
            file: source.path().to_path_buf(),
            line,
            col,
            offset,
            fixits: Vec::new(),
        }
    }

    /// Attaches fix-its. Edits of one diagnostic must be disjoint and
    /// ordered by start position.
    #[must_use]
    pub fn with_fixits(mut self, fixits: Vec<FixEdit>) -> Self {
        debug_assert!(
            fixits_ordered_and_disjoint(&fixits),
            "fix-its of one diagnostic must be ordered and disjoint"
        );
        self.fixits = fixits;
        self
    }

    /// Whether the diagnostic carries an automatic fix.
    #[must_use]
    pub fn has_fixits(&self) -> bool {
        !self.fixits.is_empty()
    }
}

fn fixits_ordered_and_disjoint(fixits: &[FixEdit]) -> bool {
    fixits
        .windows(2)
        .all(|pair| pair[0].span.start <= pair[1].span.start && !pair[0].overlaps(&pair[1]))
}

/// Boundary the checks report into. The host implements this; `report`
/// is called exactly once per successful match.
pub trait DiagnosticSink {
    /// Consumes one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that collects diagnostics in report order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    /// Everything reported so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

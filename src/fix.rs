//! Fix-it edits and the rewriter that applies them to source text.
//!
//! A [`FixEdit`] is either an insertion at a point or a replacement of a
//! span; both are anchored with half-open byte ranges into the original
//! text. The [`SourceRewriter`] validates a batch of edits (bounds,
//! UTF-8 boundaries, pairwise overlap) and applies them in one pass,
//! from the end of the text towards the start, so earlier offsets never
//! shift under later edits.

use crate::diagnostics::Diagnostic;
use crate::span::Span;
use serde::Serialize;

/// A single textual edit: replace the spanned text with `text`.
/// An empty span makes the edit a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixEdit {
    /// The replaced range; empty for insertions.
    pub span: Span,
    /// Replacement content.
    pub text: String,
}

impl FixEdit {
    /// Creates a replacement of `span` with `text`.
    #[must_use]
    pub fn replacement(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Creates an insertion of `text` immediately before `offset`.
    #[must_use]
    pub fn insertion(offset: usize, text: impl Into<String>) -> Self {
        Self {
            span: Span::at(offset),
            text: text.into(),
        }
    }

    /// Whether this edit inserts without replacing anything.
    #[must_use]
    pub const fn is_insertion(&self) -> bool {
        self.span.is_empty()
    }

    /// Whether this edit's range collides with another edit's range.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.span.overlaps(&other.span)
    }
}

/// Error raised when a batch of fix-its cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    /// Two edits in the batch target overlapping ranges.
    #[error("overlapping fix-its at indices {first} and {second}")]
    Overlapping {
        /// Index of the first conflicting edit.
        first: usize,
        /// Index of the second conflicting edit.
        second: usize,
    },
    /// An edit reaches past the end of the source.
    #[error("fix-it {index} out of bounds: span ends at {end}, source length is {len}")]
    OutOfBounds {
        /// Index of the offending edit.
        index: usize,
        /// End offset of the edit.
        end: usize,
        /// Length of the source text.
        len: usize,
    },
    /// An edit boundary falls inside a multi-byte character.
    #[error("fix-it {index} splits a UTF-8 character")]
    NotCharBoundary {
        /// Index of the offending edit.
        index: usize,
    },
}

/// Applies fix-it edits to source text using byte ranges.
///
/// Edits are validated as a batch and then applied in descending start
/// order, which preserves the byte offsets of all pending edits while
/// the string is modified.
#[derive(Debug, Clone)]
pub struct SourceRewriter {
    source: String,
    edits: Vec<FixEdit>,
}

impl SourceRewriter {
    /// Creates a rewriter over the given source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Queues one edit.
    pub fn add_edit(&mut self, edit: FixEdit) {
        self.edits.push(edit);
    }

    /// Queues multiple edits.
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = FixEdit>) {
        self.edits.extend(edits);
    }

    /// Whether any edits are queued.
    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Validates the queued edits without applying them.
    ///
    /// # Errors
    /// Returns the first bounds, boundary, or overlap violation found.
    pub fn validate(&self) -> Result<(), FixError> {
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.span.end > self.source.len() {
                return Err(FixError::OutOfBounds {
                    index: i,
                    end: edit.span.end,
                    len: self.source.len(),
                });
            }
            if !self.source.is_char_boundary(edit.span.start)
                || !self.source.is_char_boundary(edit.span.end)
            {
                return Err(FixError::NotCharBoundary { index: i });
            }
        }

        for i in 0..self.edits.len() {
            for j in (i + 1)..self.edits.len() {
                if self.edits[i].overlaps(&self.edits[j]) {
                    return Err(FixError::Overlapping {
                        first: i,
                        second: j,
                    });
                }
            }
        }

        Ok(())
    }

    /// Applies all queued edits and returns the rewritten source.
    ///
    /// # Errors
    /// Returns an error when validation fails; the source is unchanged
    /// in that case.
    pub fn apply(self) -> Result<String, FixError> {
        self.validate()?;

        let mut result = self.source;
        let mut edits = self.edits;
        // Stable ascending sort, applied back to front. A replacement
        // sorts after insertions sharing its start, so the pass applies
        // it first and never re-reads a range an insertion has already
        // shifted. Insertions at the same point apply in reverse queue
        // order, keeping an outer wrap outside an inner one.
        edits.sort_by_key(|edit| (edit.span.start, !edit.is_insertion()));

        for edit in edits.into_iter().rev() {
            result.replace_range(edit.span.start..edit.span.end, &edit.text);
        }

        Ok(result)
    }
}

/// Applies every fix-it of every diagnostic in `diagnostics` to `source`
/// through one rewriter pass.
///
/// # Errors
/// Returns an error when the combined batch has conflicting or
/// out-of-range edits; diagnostics from one run over disjoint usages
/// apply cleanly.
pub fn apply_fixits(source: &str, diagnostics: &[Diagnostic]) -> Result<String, FixError> {
    let mut rewriter = SourceRewriter::new(source);
    for diagnostic in diagnostics {
        rewriter.add_edits(diagnostic.fixits.iter().cloned());
    }
    rewriter.apply()
}

use serde::Serialize;

/// A half-open byte range `[start, end)` over the original source text.
///
/// Spans come from the host fully resolved: they cover whole tokens, so
/// `end` already points one past the last byte of the spanned text. Both
/// node locations and fix-it edits are anchored with spans; an empty
/// span marks a pure insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span from byte offsets. `start` must not exceed `end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} > end {end}");
        Self { start, end }
    }

    /// Creates an empty span at `offset`, used as an insertion point.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length of the spanned text in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two spans share at least one byte. Empty spans never
    /// overlap a range they merely touch, but do conflict with a range
    /// that strictly contains their insertion point.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

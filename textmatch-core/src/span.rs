//! Half-open offset ranges over a character source.

use std::fmt;

/// Sentinel `end` meaning "unspecified length".
///
/// Matching is then bounded by the source length or the first NUL code unit,
/// whichever comes first.
pub const NPOS: usize = usize::MAX;

/// A half-open `[start, end)` range of code-unit offsets.
///
/// Ordering is lexicographic on `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. `end` must not precede `start`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span end precedes start: {}..{}", start, end);
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    /// Length in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Smallest span covering both.
    #[inline]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Slice `text` by this span.
    #[inline]
    pub fn slice<'a, T>(&self, text: &'a [T]) -> &'a [T] {
        &text[self.start..self.end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Anything produced by a successful match.
pub trait Spanned {
    /// Offsets the match covers.
    fn span(&self) -> Span;
}

impl Spanned for Span {
    #[inline]
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_start_then_end() {
        let mut spans = vec![Span::new(4, 9), Span::new(0, 4), Span::new(4, 5)];
        spans.sort();
        assert_eq!(spans, vec![Span::new(0, 4), Span::new(4, 5), Span::new(4, 9)]);
    }

    #[test]
    fn test_len_and_contains() {
        let s = Span::new(2, 5);
        assert_eq!(s.len(), 3);
        assert!(s.contains(2));
        assert!(!s.contains(5));
        assert!(Span::empty(7).is_empty());
    }

    #[test]
    fn test_cover_and_display() {
        assert_eq!(Span::new(3, 4).cover(Span::new(1, 2)), Span::new(1, 4));
        assert_eq!(Span::new(6, 12).to_string(), "6..12");
    }
}

//! The matcher contract shared by grammar rules and validating grammars.

use std::ops::{BitOr, BitOrAssign};

use crate::error::{check_range, Error};
use crate::source::Source;
use crate::span::{Span, Spanned};

/// Per-call match options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchFlags(u8);

impl MatchFlags {
    pub const NONE: MatchFlags = MatchFlags(0);
    /// Compare characters through the classifier's case folding.
    pub const CASE_INSENSITIVE: MatchFlags = MatchFlags(0x01);
    /// Let space classes match CR and LF.
    pub const MULTILINE: MatchFlags = MatchFlags(0x02);

    #[inline]
    pub fn contains(self, other: MatchFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn case_insensitive(self) -> bool {
        self.contains(Self::CASE_INSENSITIVE)
    }

    #[inline]
    pub fn multiline(self) -> bool {
        self.contains(Self::MULTILINE)
    }
}

impl BitOr for MatchFlags {
    type Output = MatchFlags;

    #[inline]
    fn bitor(self, rhs: MatchFlags) -> MatchFlags {
        MatchFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MatchFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: MatchFlags) {
        self.0 |= rhs.0;
    }
}

/// Result of a successful grammar-rule match.
///
/// Results are values: matching the same rule twice, even re-entrantly from a
/// shared sub-rule, never disturbs an earlier result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub span: Span,
    /// Index of the matched set member, branch alternative or literal.
    pub hit_offset: Option<usize>,
    /// Results of matched children: one per child for sequences, the chosen
    /// alternative for branches, declaration order for permutations, one per
    /// repetition for iterations.
    pub children: Vec<Match>,
}

impl Match {
    #[inline]
    pub(crate) fn leaf(start: usize, end: usize) -> Self {
        Self { span: Span::new(start, end), hit_offset: None, children: Vec::new() }
    }

    #[inline]
    pub(crate) fn hit(start: usize, end: usize, hit: usize) -> Self {
        Self { span: Span::new(start, end), hit_offset: Some(hit), children: Vec::new() }
    }
}

impl Spanned for Match {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

/// Something that recognizes a structure at a given offset of a source.
///
/// `end` may be [`NPOS`](crate::span::NPOS). `recognize` clamps out-of-range
/// offsets to the source; `try_recognize` reports them instead.
pub trait Recognizer<S: Source + ?Sized> {
    type Output: Spanned;

    /// Match starting exactly at `start`.
    fn recognize(&self, src: &S, start: usize, end: usize, flags: MatchFlags) -> Option<Self::Output>;

    /// Like [`recognize`](Self::recognize), but rejects `start > end` and an
    /// explicit `end` past the source.
    fn try_recognize(
        &self,
        src: &S,
        start: usize,
        end: usize,
        flags: MatchFlags,
    ) -> Result<Option<Self::Output>, Error> {
        let end = check_range(src.len(), start, end)?;
        Ok(self.recognize(src, start, end, flags))
    }

    /// First match at or after `start`, stepping one character at a time.
    fn search(&self, src: &S, start: usize, end: usize, flags: MatchFlags) -> Option<Self::Output> {
        let end = src.limit(end);
        let mut pos = start;
        while pos <= end {
            if let Some(found) = self.recognize(src, pos, end, flags) {
                return Some(found);
            }
            match src.glyph(pos, end) {
                Some(g) => pos += g.width,
                None => break,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let f = MatchFlags::CASE_INSENSITIVE | MatchFlags::MULTILINE;
        assert!(f.case_insensitive());
        assert!(f.multiline());
        assert!(!MatchFlags::NONE.case_insensitive());
        let mut g = MatchFlags::default();
        g |= MatchFlags::MULTILINE;
        assert!(g.multiline() && !g.case_insensitive());
    }
}

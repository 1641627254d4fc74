//! Character sources.
//!
//! A [`Source`] is any random-access run of code units. Matchers never index a
//! source directly; they ask it for the next [`Glyph`] at an offset, so the same
//! grammar runs over Latin-1 bytes, UTF-16, UTF-8 and entity-encoded SGML.
//!
//! Every source is optionally NUL terminated: a zero code unit ends the input
//! just like the `end` bound does.

use crate::sgml;

/// One logical character: one or two scalars (base plus combining mark) and the
/// number of code units it occupies in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    chars: [char; 2],
    len: u8,
    /// Code units consumed.
    pub width: usize,
}

impl Glyph {
    #[inline]
    pub fn new(c: char, width: usize) -> Self {
        Self { chars: [c, '\0'], len: 1, width }
    }

    #[inline]
    pub fn pair(base: char, mark: char, width: usize) -> Self {
        Self { chars: [base, mark], len: 2, width }
    }

    /// Build from a decoded string of one or two scalars.
    pub fn from_decoded(s: &str, width: usize) -> Option<Self> {
        let mut it = s.chars();
        let first = it.next()?;
        match (it.next(), it.next()) {
            (None, _) => Some(Self::new(first, width)),
            (Some(second), None) => Some(Self::pair(first, second, width)),
            _ => None,
        }
    }

    /// Decoded scalars.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars[..self.len as usize]
    }

    /// The scalar, when the glyph is a single one.
    #[inline]
    pub fn as_char(&self) -> Option<char> {
        if self.len == 1 {
            Some(self.chars[0])
        } else {
            None
        }
    }
}

/// Random-access sequence of code units.
pub trait Source {
    /// Number of code units.
    fn len(&self) -> usize;

    /// Raw code unit at `pos`. Callers guarantee `pos < len()`.
    fn unit(&self, pos: usize) -> u32;

    /// Decode the character starting at `pos`.
    ///
    /// Callers guarantee `pos < end <= len()` and a non-zero unit at `pos`.
    fn decode(&self, pos: usize, end: usize) -> Glyph;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve `end` against the source length.
    #[inline]
    fn limit(&self, end: usize) -> usize {
        end.min(self.len())
    }

    /// Next character at `pos`, or `None` at the end bound or a NUL.
    #[inline]
    fn glyph(&self, pos: usize, end: usize) -> Option<Glyph> {
        let end = self.limit(end);
        if pos < end && self.unit(pos) != 0 {
            Some(self.decode(pos, end))
        } else {
            None
        }
    }

    /// True at the end bound or a NUL.
    #[inline]
    fn at_end(&self, pos: usize, end: usize) -> bool {
        pos >= self.limit(end) || self.unit(pos) == 0
    }
}

/// CR or LF code unit.
#[inline]
pub fn is_line_break(unit: u32) -> bool {
    unit == u32::from(b'\n') || unit == u32::from(b'\r')
}

/// Narrow text; each byte is one Latin-1 character.
impl Source for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn unit(&self, pos: usize) -> u32 {
        u32::from(self[pos])
    }

    #[inline]
    fn decode(&self, pos: usize, _end: usize) -> Glyph {
        Glyph::new(char::from(self[pos]), 1)
    }
}

/// Wide text in UTF-16. Surrogate pairs decode as one glyph of width 2, lone
/// surrogates as U+FFFD.
impl Source for [u16] {
    #[inline]
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    #[inline]
    fn unit(&self, pos: usize) -> u32 {
        u32::from(self[pos])
    }

    fn decode(&self, pos: usize, end: usize) -> Glyph {
        let upper = end.min(pos + 2).min(<[u16]>::len(self));
        match char::decode_utf16(self[pos..upper].iter().copied()).next() {
            Some(Ok(c)) => Glyph::new(c, c.len_utf16()),
            _ => Glyph::new(char::REPLACEMENT_CHARACTER, 1),
        }
    }
}

impl Source for [char] {
    #[inline]
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    #[inline]
    fn unit(&self, pos: usize) -> u32 {
        u32::from(self[pos])
    }

    #[inline]
    fn decode(&self, pos: usize, _end: usize) -> Glyph {
        Glyph::new(self[pos], 1)
    }
}

/// UTF-8 text, byte offsets. A position inside a multi-byte sequence (or a
/// sequence cut by `end`) decodes as U+FFFD of width 1.
impl Source for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn unit(&self, pos: usize) -> u32 {
        u32::from(self.as_bytes()[pos])
    }

    fn decode(&self, pos: usize, end: usize) -> Glyph {
        match self.get(pos..).and_then(|rest| rest.chars().next()) {
            Some(c) if pos + c.len_utf8() <= end => Glyph::new(c, c.len_utf8()),
            _ => Glyph::new(char::REPLACEMENT_CHARACTER, 1),
        }
    }
}

/// SGML/HTML text: UTF-8 with `&name;`, `&#NNN;` and `&#xHH;` references
/// decoded as single characters. Offsets are bytes of the encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sgml<'a>(pub &'a str);

impl<'a> Sgml<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Source for Sgml<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn unit(&self, pos: usize) -> u32 {
        u32::from(self.0.as_bytes()[pos])
    }

    fn decode(&self, pos: usize, end: usize) -> Glyph {
        if self.0.as_bytes()[pos] == b'&' {
            if let Some(glyph) = sgml::entity_at(self.0, pos, end) {
                return glyph;
            }
        }
        self.0.decode(pos, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::NPOS;

    #[test]
    fn test_nul_terminates() {
        let text: &[u8] = b"ab\0cd";
        assert!(text.glyph(1, NPOS).is_some());
        assert!(text.glyph(2, NPOS).is_none());
        assert!(text.at_end(2, NPOS));
        assert!(!text.at_end(1, NPOS));
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        let wide: Vec<u16> = "a\u{1F600}b".encode_utf16().collect();
        let g = wide.as_slice().glyph(1, NPOS).unwrap();
        assert_eq!(g.as_char(), Some('\u{1F600}'));
        assert_eq!(g.width, 2);
        // Cut in half by `end`.
        let g = wide.as_slice().glyph(1, 2).unwrap();
        assert_eq!(g.as_char(), Some(char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn test_utf8_offsets() {
        let text = "ž!";
        let g = text.glyph(0, NPOS).unwrap();
        assert_eq!((g.as_char(), g.width), (Some('ž'), 2));
        let g = text.glyph(1, NPOS).unwrap();
        assert_eq!(g.as_char(), Some(char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn test_sgml_entities_decode_as_one_glyph() {
        let text = Sgml("a&scaron;&#231;&#xE8;&smacr;&bogus;");
        let g = text.glyph(1, NPOS).unwrap();
        assert_eq!((g.as_char(), g.width), (Some('š'), 8));
        let g = text.glyph(9, NPOS).unwrap();
        assert_eq!((g.as_char(), g.width), (Some('ç'), 6));
        let g = text.glyph(15, NPOS).unwrap();
        assert_eq!((g.as_char(), g.width), (Some('è'), 6));
        let g = text.glyph(21, NPOS).unwrap();
        assert_eq!((g.chars(), g.width), (&['s', '\u{304}'][..], 7));
        let g = text.glyph(28, NPOS).unwrap();
        assert_eq!((g.as_char(), g.width), (Some('&'), 1));
    }

    #[test]
    fn test_sgml_entity_cut_by_end_is_literal() {
        let text = Sgml("&amp;");
        let g = text.glyph(0, 3).unwrap();
        assert_eq!((g.as_char(), g.width), (Some('&'), 1));
    }
}

//! SGML/HTML entity comparison and transcoding.
//!
//! One logical character may be spelled literally or as a reference:
//! `&scaron;`, `&#231;`, `&#xE8;`/`&#XE8;`. A reference runs from `&` to the
//! first `;`, and is abandoned at whitespace, NUL, another `&` or the end bound.
//! Unknown names and malformed numbers are not references; the `&` is then an
//! ordinary character and the rest of the text follows it verbatim.
//!
//! The comparator ([`entity_at`]) backs the [`Sgml`](crate::source::Sgml)
//! source. [`decode`] and [`encode`] transcode whole strings with the same
//! table, and [`decode_into`] records offset [`Mapping`] breakpoints around
//! every decoded reference.

use std::fmt::Write;
use std::ops::BitOr;

use crate::entities::{ENTITIES, NAMES};
use crate::error::{Error, ErrorCode};
use crate::mapping::Mapping;
use crate::source::Glyph;
use crate::span::Span;

// ============================================================================
// Escape flags
// ============================================================================

/// ASCII delimiters selected for encoding, or left undecoded when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Escape(u32);

impl Escape {
    pub const NONE: Escape = Escape(0);
    pub const QUOT: Escape = Escape(0x0001);
    pub const APOS: Escape = Escape(0x0002);
    pub const AMP: Escape = Escape(0x0004);
    pub const LT_GT: Escape = Escape(0x0008);
    pub const BSOL: Escape = Escape(0x0010);
    pub const DOLLAR: Escape = Escape(0x0020);
    pub const PERCNT: Escape = Escape(0x0040);
    pub const COMMAT: Escape = Escape(0x0080);
    pub const NUM: Escape = Escape(0x0100);
    pub const LPAR_RPAR: Escape = Escape(0x0200);
    pub const LCUB_RCUB: Escape = Escape(0x0400);
    pub const LSQB_RSQB: Escape = Escape(0x0800);
    /// Look up every ASCII character in the entity table, not just delimiters.
    pub const FULL: Escape = Escape(0x8000_0000);

    pub const QUOT_APOS: Escape = Escape(Self::QUOT.0 | Self::APOS.0);
    pub const SGML: Escape = Escape(Self::AMP.0 | Self::LT_GT.0);
    pub const ML_ATTRIB: Escape = Escape(Self::AMP.0 | Self::QUOT_APOS.0);
    pub const C: Escape = Escape(Self::AMP.0 | Self::BSOL.0 | Self::QUOT_APOS.0);
    /// Markup text: `&`, `<`, `>` and `"`.
    pub const TEXT: Escape = Escape(Self::SGML.0 | Self::QUOT.0);

    #[inline]
    pub fn contains(self, other: Escape) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `c` is a delimiter selected by these flags.
    pub fn covers(self, c: char) -> bool {
        let flag = match c {
            '"' => Self::QUOT,
            '\'' => Self::APOS,
            '&' => Self::AMP,
            '<' | '>' => Self::LT_GT,
            '\\' => Self::BSOL,
            '$' => Self::DOLLAR,
            '%' => Self::PERCNT,
            '@' => Self::COMMAT,
            '#' => Self::NUM,
            '(' | ')' => Self::LPAR_RPAR,
            '{' | '}' => Self::LCUB_RCUB,
            '[' | ']' => Self::LSQB_RSQB,
            _ => return false,
        };
        self.contains(flag)
    }
}

impl BitOr for Escape {
    type Output = Escape;

    #[inline]
    fn bitor(self, rhs: Escape) -> Escape {
        Escape(self.0 | rhs.0)
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// Characters a named entity decodes to.
#[inline]
pub fn entity(name: &str) -> Option<&'static str> {
    ENTITIES.get(name).copied()
}

/// Canonical entity name for a decoded character sequence.
#[inline]
pub fn entity_name(decoded: &str) -> Option<&'static str> {
    NAMES.get(decoded).copied()
}

/// Decode the reference starting at `pos` (which holds `&`).
///
/// Returns `None` when the text there is not a complete, known reference.
pub fn entity_at(text: &str, pos: usize, end: usize) -> Option<Glyph> {
    let bytes = text.as_bytes();
    let end = end.min(bytes.len());
    if pos >= end || bytes[pos] != b'&' {
        return None;
    }
    let close = reference_end(&bytes[pos + 1..end])? + pos + 1;
    let name = text.get(pos + 1..close)?;
    let width = close + 1 - pos;
    match name.strip_prefix('#') {
        Some(number) => numeric(number).map(|c| Glyph::new(c, width)),
        None => Glyph::from_decoded(entity(name)?, width),
    }
}

/// Offset of the terminating `;`.
fn reference_end(rest: &[u8]) -> Option<usize> {
    for (i, &b) in rest.iter().enumerate() {
        match b {
            b';' => return Some(i),
            0 | b'&' => return None,
            b if b.is_ascii_whitespace() => return None,
            _ => {}
        }
    }
    None
}

/// `NNN`, `xHH` or `XHH`.
fn numeric(number: &str) -> Option<char> {
    let (digits, radix) = match number.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let value = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(value).filter(|&c| c != '\0')
}

// ============================================================================
// Decoding
// ============================================================================

/// A run of SGML text: verbatim text or one decoded reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Reference { span: Span, glyph: Glyph },
}

/// Splits SGML text into [`Segment`]s.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    src: &'a str,
    pos: usize,
    keep: Escape,
}

impl<'a> Segments<'a> {
    /// References decoding to a delimiter covered by `keep` stay verbatim.
    pub fn new(src: &'a str, keep: Escape) -> Self {
        Self { src, pos: 0, keep }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }
        if bytes[start] == b'&' {
            if let Some(glyph) = entity_at(self.src, start, bytes.len()) {
                if !glyph.chars().first().is_some_and(|&c| self.keep.covers(c)) {
                    self.pos += glyph.width;
                    return Some(Segment::Reference { span: Span::new(start, self.pos), glyph });
                }
            }
        }
        self.pos = memchr::memchr(b'&', &bytes[start + 1..]).map_or(bytes.len(), |i| start + 1 + i);
        Some(Segment::Text(&self.src[start..self.pos]))
    }
}

/// Decode every known reference.
pub fn decode(src: &str) -> String {
    decode_with(src, Escape::NONE)
}

/// Decode, leaving references to `keep` delimiters verbatim.
pub fn decode_with(src: &str, keep: Escape) -> String {
    let mut dst = String::with_capacity(src.len());
    for segment in Segments::new(src, keep) {
        match segment {
            Segment::Text(text) => dst.push_str(text),
            Segment::Reference { glyph, .. } => dst.extend(glyph.chars()),
        }
    }
    dst
}

/// Append the decoding of `src` to `dst`, pushing a breakpoint onto `map`
/// before and after every decoded reference.
///
/// Breakpoints are `(source byte, decoded byte)` pairs shifted by `offset`,
/// with decoded offsets counted from the start of `dst`.
pub fn decode_into(
    dst: &mut String,
    src: &str,
    keep: Escape,
    offset: Mapping,
    map: &mut Vec<Mapping>,
) -> Result<(), Error> {
    dst.reserve(src.len());
    for segment in Segments::new(src, keep) {
        match segment {
            Segment::Text(text) => dst.push_str(text),
            Segment::Reference { span, glyph } => {
                map.push(shifted(offset, span.start, dst.len())?);
                dst.extend(glyph.chars());
                map.push(shifted(offset, span.end, dst.len())?);
            }
        }
    }
    Ok(())
}

fn shifted(offset: Mapping, from: usize, to: usize) -> Result<Mapping, Error> {
    offset
        .checked_add(Mapping::new(from, to))
        .ok_or_else(|| Error::new(ErrorCode::OffsetOverflow, from, to))
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode for markup text: `&`, `<`, `>`, `"` and all non-ASCII characters.
pub fn encode(src: &str) -> String {
    encode_with(src, Escape::TEXT)
}

/// Encode `&`, the delimiters in `what` and all non-ASCII characters.
pub fn encode_with(src: &str, what: Escape) -> String {
    let mut dst = String::with_capacity(src.len());
    encode_into(&mut dst, src, what);
    dst
}

/// Append the encoding of `src` to `dst`.
///
/// A base character with combining marks becomes one entity when the table
/// has the composed sequence, otherwise each scalar is encoded on its own.
pub fn encode_into(dst: &mut String, src: &str, what: Escape) {
    dst.reserve(src.len());
    let verbatim = |c: char| c.is_ascii() && c != '&' && !what.contains(Escape::FULL) && !what.covers(c);
    let mut rest = src;
    while let Some(first) = rest.chars().next() {
        let n = cluster_len(rest);
        let (cluster, tail) = rest.split_at(n);
        rest = tail;
        if n == first.len_utf8() {
            if verbatim(first) {
                dst.push(first);
            } else {
                encode_char(dst, first);
            }
        } else if let Some(name) = entity_name(cluster) {
            push_entity(dst, name);
        } else {
            cluster.chars().for_each(|c| encode_char(dst, c));
        }
    }
}

fn encode_char(dst: &mut String, c: char) {
    let mut buf = [0u8; 4];
    if let Some(name) = entity_name(c.encode_utf8(&mut buf)) {
        push_entity(dst, name);
    } else if c.is_ascii() {
        dst.push(c);
    } else {
        let _ = write!(dst, "&#x{:x};", u32::from(c));
    }
}

#[inline]
fn push_entity(dst: &mut String, name: &str) {
    dst.push('&');
    dst.push_str(name);
    dst.push(';');
}

/// Bytes of the leading base character plus its combining marks.
fn cluster_len(s: &str) -> usize {
    s.char_indices()
        .skip(1)
        .find(|&(_, c)| !is_combining(c))
        .map_or(s.len(), |(i, _)| i)
}

fn is_combining(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036f}'
            | '\u{1ab0}'..='\u{1aff}'
            | '\u{1dc0}'..='\u{1dff}'
            | '\u{20d0}'..='\u{20ff}'
            | '\u{fe20}'..='\u{fe2f}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "Th&iacute;&scaron; i&sdot; &#97; te&smacr;t.&unknown;&#x1F600;&#X1f605;";

    #[test]
    fn test_decode() {
        assert_eq!(decode(MIXED), "Thíš i⋅ a tes̄t.&unknown;😀😅");
    }

    #[test]
    fn test_decode_truncated_reference_is_verbatim() {
        assert_eq!(decode(&MIXED[..9]), "Th&iacute");
        assert_eq!(decode("a & b;"), "a & b;");
        assert_eq!(decode("&amp&lt;"), "&amp<");
        assert_eq!(decode("&#;&#x;&#12a;&#x110000;&#0;"), "&#;&#x;&#12a;&#x110000;&#0;");
    }

    #[test]
    fn test_decode_keeps_selected_delimiters() {
        let text = "The &quot;quoted&quot; &amp; text.";
        assert_eq!(decode_with(text, Escape::C), text);
        assert_eq!(decode_with(text, Escape::AMP), "The \"quoted\" &amp; text.");
    }

    #[test]
    fn test_decode_into_mapping() {
        let mut dst = String::new();
        let mut map = Vec::new();
        decode_into(&mut dst, MIXED, Escape::NONE, Mapping::default(), &mut map).unwrap();
        assert_eq!(dst, decode(MIXED));
        let pairs: Vec<(usize, usize)> = map.iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(
            pairs,
            vec![
                (2, 2), (10, 4), (10, 4), (18, 6), (20, 8), (26, 11), (27, 12),
                (32, 13), (35, 16), (42, 19), (53, 30), (62, 34), (62, 34), (71, 38),
            ]
        );
    }

    #[test]
    fn test_decode_into_overflow() {
        let mut dst = String::new();
        let mut map = Vec::new();
        let offset = Mapping::new(usize::MAX, 0);
        let err = decode_into(&mut dst, "x&amp;", Escape::NONE, offset, &mut map).unwrap_err();
        assert_eq!(err.code, ErrorCode::OffsetOverflow);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_with("$\"<>&", Escape::NONE), "$\"<>&amp;");
        assert_eq!(encode("$\"<>&"), "$&quot;&lt;&gt;&amp;");
        assert_eq!(encode_with("⌘‰\u{362}", Escape::NONE), "&#x2318;&permil;&#x362;");
        assert_eq!(encode("tes\u{304}t"), "te&smacr;t");
        assert_eq!(encode("Koščku"), "Ko&scaron;&ccaron;ku");
        assert_eq!(encode_with("(a)[b]{c}", Escape::LPAR_RPAR | Escape::LSQB_RSQB), "&lpar;a&rpar;&lsqb;b&rsqb;{c}");
    }

    #[test]
    fn test_round_trip() {
        for text in ["Thíš i⋅ a tes̄t.&unknown;😀😅", "a\u{304}\u{301}b", "&amp;", "\u{a0}<x>\u{80}"] {
            assert_eq!(decode(&encode(text)), text);
        }
    }
}

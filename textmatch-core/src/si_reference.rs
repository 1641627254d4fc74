//! Slovenian payment reference: `SI`, a two-digit model and up to three
//! numeric parts separated by `-`.
//!
//! Each model prescribes how many parts it takes and which of them carry a
//! MOD 11 control digit. Model `99` carries no reference at all.

use crate::iban::{digit_at, letter_at, separator_end, GroupSeparator};
use crate::matcher::{MatchFlags, Recognizer};
use crate::source::Source;
use crate::span::{Span, Spanned};

/// Longest single part.
pub const MAX_PART: usize = 12;

/// Longest combined length of two or three parts.
pub const MAX_TOTAL: usize = 20;

/// One numeric part of the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiPart {
    pub span: Span,
    pub digits: String,
}

/// A recognized SI reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiReferenceMatch {
    pub span: Span,
    pub model: String,
    pub part1: Option<SiPart>,
    pub part2: Option<SiPart>,
    pub part3: Option<SiPart>,
    pub is_valid: bool,
}

impl SiReferenceMatch {
    /// Matched parts in order.
    pub fn parts(&self) -> impl Iterator<Item = &SiPart> {
        [&self.part1, &self.part2, &self.part3].into_iter().map_while(Option::as_ref)
    }
}

impl Spanned for SiReferenceMatch {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

/// SI reference recognizer. The separator may follow the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiReference<P = GroupSeparator> {
    separator: Option<P>,
}

impl SiReference {
    pub fn new() -> Self {
        Self { separator: Some(GroupSeparator) }
    }

    pub fn compact() -> Self {
        Self { separator: None }
    }
}

impl Default for SiReference {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SiReference<P> {
    pub fn with_separator(separator: P) -> Self {
        Self { separator: Some(separator) }
    }
}

fn part_at<S: Source + ?Sized>(src: &S, start: usize, end: usize) -> Option<SiPart> {
    let mut digits = String::new();
    let mut pos = start;
    while let Some((c, next)) = digit_at(src, pos, end) {
        digits.push(c);
        pos = next;
    }
    (!digits.is_empty()).then(|| SiPart { span: Span::new(start, pos), digits })
}

fn delimited_part<S: Source + ?Sized>(src: &S, after: &SiPart, end: usize) -> Option<SiPart> {
    let g = src.glyph(after.span.end, end)?;
    if g.as_char()? != '-' {
        return None;
    }
    part_at(src, after.span.end + g.width, end)
}

impl<S: Source + ?Sized, P: Recognizer<S>> Recognizer<S> for SiReference<P> {
    type Output = SiReferenceMatch;

    fn recognize(&self, src: &S, start: usize, end: usize, flags: MatchFlags) -> Option<SiReferenceMatch> {
        let end = src.limit(end);
        let (s, pos) = letter_at(src, start, end, flags)?;
        let (i, pos) = letter_at(src, pos, end, flags)?;
        if (s, i) != ('S', 'I') {
            return None;
        }
        let (m0, pos) = digit_at(src, pos, end)?;
        let (m1, model_end) = digit_at(src, pos, end)?;
        let model: String = [m0, m1].iter().collect();

        let mut found = SiReferenceMatch {
            span: Span::new(start, model_end),
            model,
            part1: None,
            part2: None,
            part3: None,
            is_valid: false,
        };
        if found.model == "99" {
            found.is_valid = true;
            return Some(found);
        }

        let pos = separator_end(self.separator.as_ref(), src, model_end, end, flags).unwrap_or(model_end);
        found.part1 = part_at(src, pos, end);
        found.part2 = found.part1.as_ref().and_then(|p| delimited_part(src, p, end));
        found.part3 = found.part2.as_ref().and_then(|p| delimited_part(src, p, end));
        let last_end = found.parts().last().map(|p| p.span.end);
        if let Some(last_end) = last_end {
            found.span.end = last_end;
        }

        let parts: Vec<&str> = found.parts().map(|p| p.digits.as_str()).collect();
        let is_valid = lengths_ok(&found.model, &parts) && model_ok(&found.model, &parts);
        found.is_valid = is_valid;
        Some(found)
    }
}

fn lengths_ok(model: &str, parts: &[&str]) -> bool {
    match parts {
        [] => false,
        [p1] => p1.len() <= if model == "12" { MAX_PART + 1 } else { MAX_PART },
        _ => parts.iter().all(|p| p.len() <= MAX_PART) && parts.iter().map(|p| p.len()).sum::<usize>() <= MAX_TOTAL,
    }
}

fn model_ok(model: &str, parts: &[&str]) -> bool {
    match (model, parts) {
        ("00", [_, ..]) => true,
        ("01", [_, ..]) => check11(parts),
        ("02", [_, p2, p3]) => check11(&[p2]) && check11(&[p3]),
        ("03", [p1, p2, p3]) => check11(&[p1]) && check11(&[p2]) && check11(&[p3]),
        ("04", [p1, _, p3]) => check11(&[p1]) && check11(&[p3]),
        ("05" | "55", [p1, ..]) => check11(&[p1]),
        ("06", [_, p2]) => check11(&[p2]),
        ("06", [_, p2, p3]) => check11(&[p2, p3]),
        ("07", [_, p2, ..]) => check11(&[p2]),
        ("08", [p1, p2, p3]) => check11(&[p1, p2]) && check11(&[p3]),
        ("09", [p1]) => check11(&[p1]),
        ("09", [p1, p2, ..]) => check11(&[p1, p2]),
        ("10", [p1, p2]) => check11(&[p1]) && check11(&[p2]),
        ("10", [p1, p2, p3]) => check11(&[p1]) && check11(&[p2, p3]),
        ("11" | "18" | "19" | "28" | "38" | "40" | "41" | "48" | "49" | "51" | "58", [p1, p2, ..]) => {
            check11(&[p1]) && check11(&[p2])
        }
        ("12", [p1]) => check11(&[p1]),
        ("21" | "31", [p1, _]) => check11(&[p1]),
        _ => false,
    }
}

/// MOD 11 over the concatenated parts: the last digit is the control digit of
/// the preceding ones, weighted 2, 3, 4, … from the right. Any byte that is
/// not an ASCII digit fails the check.
pub fn check11<T: AsRef<str>>(parts: &[T]) -> bool {
    let mut digits = parts.iter().flat_map(|p| p.as_ref().bytes()).rev().map(digit);
    let Some(Some(last)) = digits.next() else {
        return false;
    };
    let mut sum = 0u32;
    for (d, w) in digits.zip(2u32..) {
        let Some(d) = d else {
            return false;
        };
        sum = (sum + d * w) % 11;
    }
    let control = match 11 - sum {
        c if c >= 10 => 0,
        c => c,
    };
    control == last
}

#[inline]
fn digit(b: u8) -> Option<u32> {
    b.checked_sub(b'0').filter(|v| *v < 10).map(u32::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::NPOS;

    fn si(text: &str) -> SiReferenceMatch {
        SiReference::new().recognize(text, 0, NPOS, MatchFlags::NONE).unwrap()
    }

    #[test]
    fn test_check11() {
        assert!(check11(&["12343"]));
        assert!(!check11(&["12344"]));
        assert!(check11(&["12", "3455"]));
        assert!(check11(&["1", "234", "55"]));
        assert!(check11(&["0"]));
        assert!(check11(&["51"]));
        assert!(!check11::<&str>(&[]));
    }

    #[test]
    fn test_check11_rejects_non_digits() {
        assert!(!check11(&["1/"]));
        assert!(!check11(&["/0"]));
        assert!(!check11(&["12", "3a55"]));
        assert!(!check11(&["1234\u{17e}"]));
    }

    #[test]
    fn test_models() {
        for valid in [
            "SI01 12343",
            "SI12 12345679",
            "SI12 1234567890120",
            "SI01 12-3455",
            "SI01 1-234-55",
            "SI04 12343-1-51",
            "SI02 7-12343-51",
            "SI10 12343-51",
            "SI11 12343-51",
            "SI21 124-7",
            "SI00 123",
        ] {
            assert!(si(valid).is_valid, "{valid}");
        }
        for invalid in [
            "SI01 12344",
            "SI11 12343",
            "SI13 12343",
            "SI02 12343",
            "SI00 1234567890123",
            "SI00 123456789012-123456789",
            "SI00",
        ] {
            assert!(!si(invalid).is_valid, "{invalid}");
        }
    }

    #[test]
    fn test_parts() {
        let m = si("SI04 12343-1-51 ");
        assert_eq!(m.model, "04");
        assert_eq!(m.span, Span::new(0, 15));
        let parts: Vec<&str> = m.parts().map(|p| p.digits.as_str()).collect();
        assert_eq!(parts, ["12343", "1", "51"]);
        assert_eq!(m.part3.unwrap().span, Span::new(13, 15));

        let m = si("SI01 12-");
        assert_eq!(m.span, Span::new(0, 7));
        assert!(m.part2.is_none());
    }

    #[test]
    fn test_model_99_takes_nothing() {
        let m = si("SI99 12345");
        assert!(m.is_valid);
        assert_eq!(m.span, Span::new(0, 4));
        assert!(m.part1.is_none());
    }

    #[test]
    fn test_structure() {
        let r = SiReference::new();
        assert!(r.recognize("SI1", 0, NPOS, MatchFlags::NONE).is_none());
        assert!(r.recognize("si01 12343", 0, NPOS, MatchFlags::NONE).is_none());
        assert!(r.recognize("si01 12343", 0, NPOS, MatchFlags::CASE_INSENSITIVE).unwrap().is_valid);
        assert!(SiReference::compact().recognize("SI0112343", 0, NPOS, MatchFlags::NONE).unwrap().is_valid);
        let m = SiReference::compact().recognize("SI01 12343", 0, NPOS, MatchFlags::NONE).unwrap();
        assert_eq!(m.span, Span::new(0, 4));
        assert!(!m.is_valid);
    }
}

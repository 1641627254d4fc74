//! International Bank Account Number (ISO 13616).
//!
//! Structure is two country letters, two check digits and an alphanumeric
//! BBAN, optionally split into groups by a separator. For a known country the
//! BBAN is read up to the length its table entry prescribes; otherwise up to
//! the ISO 13616 maximum.
//!
//! Validity additionally requires the exact national length, the fixed check
//! digits some countries mandate, and MOD 97-10 of the rearranged number.

use phf::phf_map;

use crate::matcher::{MatchFlags, Recognizer};
use crate::source::Source;
use crate::span::{Span, Spanned};

/// Longest BBAN ISO 13616 allows.
const MAX_BBAN: usize = 30;

// ============================================================================
// Shared pieces of the validating grammars
// ============================================================================

/// Group separator: a space or a no-break space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupSeparator;

impl<S: Source + ?Sized> Recognizer<S> for GroupSeparator {
    type Output = Span;

    fn recognize(&self, src: &S, start: usize, end: usize, _flags: MatchFlags) -> Option<Span> {
        let g = src.glyph(start, end)?;
        match g.as_char()? {
            ' ' | '\u{a0}' => Some(Span::new(start, start + g.width)),
            _ => None,
        }
    }
}

/// The character at `pos` when it is a single scalar.
#[inline]
pub(crate) fn char_at<S: Source + ?Sized>(src: &S, pos: usize, end: usize) -> Option<(char, usize)> {
    let g = src.glyph(pos, end)?;
    Some((g.as_char()?, pos + g.width))
}

/// An ASCII letter, uppercased when matching case-insensitively.
#[inline]
pub(crate) fn letter_at<S: Source + ?Sized>(src: &S, pos: usize, end: usize, flags: MatchFlags) -> Option<(char, usize)> {
    let (c, next) = char_at(src, pos, end)?;
    let c = if flags.case_insensitive() { c.to_ascii_uppercase() } else { c };
    c.is_ascii_uppercase().then_some((c, next))
}

#[inline]
pub(crate) fn digit_at<S: Source + ?Sized>(src: &S, pos: usize, end: usize) -> Option<(char, usize)> {
    char_at(src, pos, end).filter(|(c, _)| c.is_ascii_digit())
}

/// A digit or an uppercase letter (any case when matching case-insensitively).
#[inline]
pub(crate) fn alnum_at<S: Source + ?Sized>(src: &S, pos: usize, end: usize, flags: MatchFlags) -> Option<(char, usize)> {
    digit_at(src, pos, end).or_else(|| letter_at(src, pos, end, flags))
}

/// Skip a separator at `pos`, but only when an alphanumeric follows it.
pub(crate) fn separator_end<S, P>(
    separator: Option<&P>,
    src: &S,
    pos: usize,
    end: usize,
    flags: MatchFlags,
) -> Option<usize>
where
    S: Source + ?Sized,
    P: Recognizer<S>,
{
    let next = separator?.recognize(src, pos, end, flags)?.span().end;
    (next > pos && alnum_at(src, next, end, flags).is_some()).then_some(next)
}

/// ISO 7064 MOD 97-10 remainder. Letters count as two digits, `A` = 10.
pub(crate) fn mod97(chars: impl IntoIterator<Item = char>) -> u32 {
    chars.into_iter().fold(0, |r, c| match c {
        '0'..='9' => (r * 10 + (c as u32 - '0' as u32)) % 97,
        'A'..='Z' => (r * 100 + (c as u32 - 'A' as u32 + 10)) % 97,
        _ => r,
    })
}

// ============================================================================
// Country table
// ============================================================================

/// National IBAN format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Total length, country code included.
    pub length: usize,
    /// Check digits every IBAN of this country carries.
    pub check_digits: Option<&'static str>,
}

const fn len(length: usize) -> Country {
    Country { length, check_digits: None }
}

const fn fixed(length: usize, check_digits: &'static str) -> Country {
    Country { length, check_digits: Some(check_digits) }
}

static COUNTRIES: phf::Map<&'static str, Country> = phf_map! {
    "AD" => len(24), "AE" => len(23), "AL" => len(28), "AO" => len(25),
    "AT" => len(20), "AZ" => len(28), "BA" => fixed(20, "39"), "BE" => len(16),
    "BF" => len(28), "BG" => len(22), "BH" => len(22), "BI" => len(27),
    "BJ" => len(28), "BR" => len(29), "BY" => len(28), "CF" => len(27),
    "CG" => len(27), "CH" => len(21), "CI" => len(28), "CM" => len(27),
    "CR" => len(22), "CV" => len(25), "CY" => len(28), "CZ" => len(24),
    "DE" => len(22), "DJ" => len(27), "DK" => len(18), "DO" => len(28),
    "DZ" => len(26), "EE" => len(20), "EG" => len(29), "ES" => len(24),
    "FI" => len(18), "FO" => len(18), "FR" => len(27), "GA" => len(27),
    "GB" => len(22), "GE" => len(22), "GI" => len(23), "GL" => len(18),
    "GQ" => len(27), "GR" => len(27), "GT" => len(28), "GW" => len(25),
    "HN" => len(28), "HR" => len(21), "HU" => len(28), "IE" => len(22),
    "IL" => len(23), "IQ" => len(23), "IR" => len(26), "IS" => len(26),
    "IT" => len(27), "JO" => len(30), "KM" => len(27), "KW" => len(30),
    "KZ" => len(20), "LB" => len(28), "LC" => len(32), "LI" => len(21),
    "LT" => len(20), "LU" => len(20), "LV" => len(21), "LY" => len(25),
    "MA" => len(28), "MC" => len(27), "MD" => len(24), "ME" => fixed(22, "25"),
    "MG" => len(27), "MK" => fixed(19, "07"), "ML" => len(28), "MR" => fixed(27, "13"),
    "MT" => len(31), "MU" => len(30), "MZ" => len(25), "NE" => len(28),
    "NI" => len(32), "NL" => len(18), "NO" => len(15), "PK" => len(24),
    "PL" => len(28), "PS" => len(29), "PT" => fixed(25, "50"), "QA" => len(29),
    "RO" => len(24), "RS" => fixed(22, "35"), "RU" => len(33), "SA" => len(24),
    "SC" => len(31), "SD" => len(18), "SE" => len(24), "SI" => fixed(19, "56"),
    "SK" => len(24), "SM" => len(27), "SN" => len(28), "ST" => len(25),
    "SV" => len(28), "TD" => len(27), "TG" => len(28), "TL" => fixed(23, "38"),
    "TN" => fixed(24, "59"), "TR" => len(26), "UA" => len(29), "VA" => len(22),
    "VG" => len(24), "XK" => len(20),
};

/// National format for an uppercase country code.
#[inline]
pub fn country(code: &str) -> Option<&'static Country> {
    COUNTRIES.get(code)
}

// ============================================================================
// Recognizer
// ============================================================================

/// A recognized IBAN. Fields are normalized to uppercase without separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbanMatch {
    pub span: Span,
    pub country: String,
    pub check_digits: String,
    pub bban: String,
    pub is_valid: bool,
}

impl Spanned for IbanMatch {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

/// IBAN recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iban<P = GroupSeparator> {
    separator: Option<P>,
}

impl Iban {
    /// Groups separated by spaces or no-break spaces.
    pub fn new() -> Self {
        Self { separator: Some(GroupSeparator) }
    }

    /// No separators allowed.
    pub fn compact() -> Self {
        Self { separator: None }
    }
}

impl Default for Iban {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Iban<P> {
    pub fn with_separator(separator: P) -> Self {
        Self { separator: Some(separator) }
    }
}

impl<S: Source + ?Sized, P: Recognizer<S>> Recognizer<S> for Iban<P> {
    type Output = IbanMatch;

    fn recognize(&self, src: &S, start: usize, end: usize, flags: MatchFlags) -> Option<IbanMatch> {
        let end = src.limit(end);
        let (c0, pos) = letter_at(src, start, end, flags)?;
        let (c1, pos) = letter_at(src, pos, end, flags)?;
        let (d0, pos) = digit_at(src, pos, end)?;
        let (d1, mut pos) = digit_at(src, pos, end)?;
        let country: String = [c0, c1].iter().collect();
        let check_digits: String = [d0, d1].iter().collect();

        let format = COUNTRIES.get(country.as_str());
        let limit = format.map_or(MAX_BBAN, |f| f.length.saturating_sub(4));
        let mut bban = String::with_capacity(limit);
        while bban.len() < limit {
            if let Some(next) = separator_end(self.separator.as_ref(), src, pos, end, flags) {
                pos = next;
                continue;
            }
            match alnum_at(src, pos, end, flags) {
                Some((c, next)) => {
                    bban.push(c);
                    pos = next;
                }
                None => break,
            }
        }
        if bban.is_empty() {
            return None;
        }

        let is_valid = format.is_some_and(|f| {
            f.length == bban.len() + 4 && f.check_digits.map_or(true, |fixed| fixed == check_digits)
        }) && mod97(bban.chars().chain(country.chars()).chain(check_digits.chars())) == 1;

        Some(IbanMatch { span: Span::new(start, pos), country, check_digits, bban, is_valid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::NPOS;

    fn iban(text: &str) -> Option<IbanMatch> {
        Iban::new().recognize(text, 0, NPOS, MatchFlags::NONE)
    }

    #[test]
    fn test_slovenian_iban() {
        let m = iban("SI56023120015226972").unwrap();
        assert!(m.is_valid);
        assert_eq!(m.country, "SI");
        assert_eq!(m.check_digits, "56");
        assert_eq!(m.bban, "023120015226972");
        assert_eq!(m.span, Span::new(0, 19));
    }

    #[test]
    fn test_known_vectors() {
        for valid in [
            "BE71 0961 2345 6769",
            "GB29 NWBK 6016 1331 9268 19",
            "DE89 3704 0044 0532 0130 00",
            "CR05 0152 0200 1026 2840 66",
            "SE45 5000 0000 0583 9825 7466",
            "IE29 AIBK 9311 5212 3456 78",
        ] {
            let m = iban(valid).unwrap();
            assert!(m.is_valid, "{valid}");
            assert_eq!(m.span.end, valid.len(), "{valid}");
        }
        for invalid in ["CR99 0000 0000 0000 8888 88", "IE12 BOFI 9000 0112 3456 78", "SE87 3000 0000 0101 2345 6789"] {
            let m = iban(invalid).unwrap();
            assert!(!m.is_valid, "{invalid}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let text = "si56 0231 2001 5226 972";
        assert!(iban(text).is_none());
        let m = Iban::new().recognize(text, 0, NPOS, MatchFlags::CASE_INSENSITIVE).unwrap();
        assert!(m.is_valid);
        assert_eq!(m.country, "SI");
    }

    #[test]
    fn test_separators() {
        let text = "SI56\u{a0}0231\u{a0}2001\u{a0}5226\u{a0}972 and more";
        let m = iban(text).unwrap();
        assert!(m.is_valid);
        assert_eq!(m.span, Span::new(0, 27));

        let m = Iban::compact().recognize("SI56 0231 2001 5226 972", 0, NPOS, MatchFlags::NONE);
        assert!(m.is_none());
    }

    #[test]
    fn test_trailing_separator_is_not_consumed() {
        let m = iban("XX12 AB34 , rest").unwrap();
        assert_eq!(m.span, Span::new(0, 9));
        assert_eq!(m.bban, "AB34");
        assert!(!m.is_valid);
    }

    #[test]
    fn test_short_bban_is_invalid() {
        let m = iban("SI56 0231 2001").unwrap();
        assert_eq!(m.bban, "02312001");
        assert!(!m.is_valid);
        assert!(iban("SI56").is_none());
        assert!(iban("S156").is_none());
    }

    #[test]
    fn test_search_and_wide_source() {
        let text = "IBAN: SI56 0231 2001 5226 972, thanks";
        let m = Iban::new().search(text, 0, NPOS, MatchFlags::NONE).unwrap();
        assert_eq!(m.span, Span::new(6, 29));

        let wide: Vec<u16> = "SI56023120015226972".encode_utf16().collect();
        assert!(Iban::new().recognize(wide.as_slice(), 0, NPOS, MatchFlags::NONE).unwrap().is_valid);
    }

    #[test]
    fn test_mod97() {
        assert_eq!(mod97("3214282912345698765432161182".chars()), 1);
        assert_eq!(mod97("RF".chars()), (2715 % 97) as u32);
    }
}

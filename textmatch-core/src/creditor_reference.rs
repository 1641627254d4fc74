//! Structured creditor reference (ISO 11649): `RF`, two check digits and up
//! to 21 alphanumerics, usually printed in groups of four.

use crate::iban::{alnum_at, digit_at, letter_at, mod97, separator_end, GroupSeparator};
use crate::matcher::{MatchFlags, Recognizer};
use crate::source::Source;
use crate::span::{Span, Spanned};

/// Width the reference is left-padded to with `0`.
pub const REFERENCE_WIDTH: usize = 21;

const GROUP: usize = 4;

/// A recognized creditor reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditorReferenceMatch {
    pub span: Span,
    pub check_digits: String,
    /// Uppercase reference, left-padded with `0` to [`REFERENCE_WIDTH`].
    pub reference: String,
    pub is_valid: bool,
}

impl Spanned for CreditorReferenceMatch {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

/// Creditor reference recognizer. A separator may precede every group of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditorReference<P = GroupSeparator> {
    separator: Option<P>,
}

impl CreditorReference {
    pub fn new() -> Self {
        Self { separator: Some(GroupSeparator) }
    }

    pub fn compact() -> Self {
        Self { separator: None }
    }
}

impl Default for CreditorReference {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CreditorReference<P> {
    pub fn with_separator(separator: P) -> Self {
        Self { separator: Some(separator) }
    }
}

impl<S: Source + ?Sized, P: Recognizer<S>> Recognizer<S> for CreditorReference<P> {
    type Output = CreditorReferenceMatch;

    fn recognize(&self, src: &S, start: usize, end: usize, flags: MatchFlags) -> Option<CreditorReferenceMatch> {
        let end = src.limit(end);
        let (r, pos) = letter_at(src, start, end, flags)?;
        let (f, pos) = letter_at(src, pos, end, flags)?;
        if (r, f) != ('R', 'F') {
            return None;
        }
        let (d0, pos) = digit_at(src, pos, end)?;
        let (d1, mut pos) = digit_at(src, pos, end)?;
        let check_digits: String = [d0, d1].iter().collect();

        let mut chars = String::with_capacity(REFERENCE_WIDTH);
        'groups: loop {
            if let Some(next) = separator_end(self.separator.as_ref(), src, pos, end, flags) {
                pos = next;
            }
            for _ in 0..GROUP {
                match alnum_at(src, pos, end, flags) {
                    Some((c, next)) => {
                        if chars.len() == REFERENCE_WIDTH {
                            return None;
                        }
                        chars.push(c);
                        pos = next;
                    }
                    None => break 'groups,
                }
            }
        }
        if chars.is_empty() {
            return None;
        }

        let mut reference = "0".repeat(REFERENCE_WIDTH - chars.len());
        reference.push_str(&chars);
        let is_valid = mod97(reference.chars().chain("RF".chars()).chain(check_digits.chars())) == 1;

        Some(CreditorReferenceMatch { span: Span::new(start, pos), check_digits, reference, is_valid })
    }
}

//! Character classification and case folding.
//!
//! Grammars never consult process-wide locale state. Each [`Grammar`] carries
//! its own classifier.
//!
//! [`Grammar`]: crate::grammar::Grammar

use unicode_xid::UnicodeXID;

/// Classification rules used by class primitives and case-insensitive matching.
pub trait Classifier {
    fn is_space(&self, c: char) -> bool;

    fn is_punct(&self, c: char) -> bool;

    /// Map `c` to its case-insensitive comparison form.
    fn fold(&self, c: char) -> char;
}

/// Unicode rules.
///
/// Whitespace is the Unicode `White_Space` property. Punctuation is ASCII
/// punctuation plus any non-ASCII character that is neither an identifier
/// character, whitespace nor a control. Folding is simple lowercase mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultClassifier;

impl Classifier for DefaultClassifier {
    #[inline]
    fn is_space(&self, c: char) -> bool {
        c.is_whitespace()
    }

    #[inline]
    fn is_punct(&self, c: char) -> bool {
        if c.is_ascii() {
            c.is_ascii_punctuation()
        } else {
            !c.is_xid_continue() && !c.is_whitespace() && !c.is_control()
        }
    }

    #[inline]
    fn fold(&self, c: char) -> char {
        if c.is_ascii() {
            return c.to_ascii_lowercase();
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }
}

/// "C" locale rules: only ASCII characters are classified or folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiClassifier;

impl Classifier for AsciiClassifier {
    #[inline]
    fn is_space(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
    }

    #[inline]
    fn is_punct(&self, c: char) -> bool {
        c.is_ascii_punctuation()
    }

    #[inline]
    fn fold(&self, c: char) -> char {
        c.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classifier() {
        let c = DefaultClassifier;
        assert!(c.is_space('\u{a0}'));
        assert!(c.is_punct('.'));
        assert!(c.is_punct('‰'));
        assert!(c.is_punct('«'));
        assert!(!c.is_punct('ž'));
        assert!(!c.is_punct('\u{304}'));
        assert_eq!(c.fold('Ž'), 'ž');
        assert_eq!(c.fold('T'), 't');
        // İ lowercases to two scalars; left alone.
        assert_eq!(c.fold('İ'), 'İ');
    }

    #[test]
    fn test_ascii_classifier() {
        let c = AsciiClassifier;
        assert!(!c.is_space('\u{a0}'));
        assert!(!c.is_punct('‰'));
        assert_eq!(c.fold('Ž'), 'Ž');
        assert_eq!(c.fold('Q'), 'q');
    }
}

//! Grammar rules over plain and SGML-encoded sources.

mod common;

use common::{span, SGML_TEXT};
use pretty_assertions::assert_eq;
use textmatch_core::{ErrorCode, Grammar, Match, MatchFlags, Recognizer, Sgml, NPOS};

const CI: MatchFlags = MatchFlags::CASE_INSENSITIVE;
const NONE: MatchFlags = MatchFlags::NONE;

fn spans(m: &Match) -> Vec<(usize, usize)> {
    m.children.iter().map(|c| (c.span.start, c.span.end)).collect()
}

#[test]
fn test_sgml_char() {
    let src = Sgml(SGML_TEXT);
    let mut g = Grammar::new();
    let v = g.sgml_char("v");
    let zcaron = g.sgml_char("&Zcaron;");

    assert!(g.matches(v, &src, 0, NPOS, NONE).is_none());
    assert_eq!(g.matches(v, &src, 0, NPOS, CI).unwrap().span, span(0, 1));

    assert!(g.matches(zcaron, &src, 4, NPOS, NONE).is_none());
    assert_eq!(g.matches(zcaron, &src, 4, NPOS, CI).unwrap().span, span(4, 12));
}

#[test]
fn test_space_over_entities() {
    let src = Sgml(SGML_TEXT);
    let mut g = Grammar::new();
    let space = g.space();

    assert!(g.matches(space, &src, 0, NPOS, NONE).is_none());
    assert_eq!(g.matches(space, &src, 1, NPOS, NONE).unwrap().span, span(1, 2));
    assert_eq!(g.matches(space, &src, 79, NPOS, NONE).unwrap().span, span(79, 85));

    assert!(g.matches(space, &src, 63, NPOS, NONE).is_none());
    assert_eq!(g.matches(space, &src, 63, NPOS, MatchFlags::MULTILINE).unwrap().span, span(63, 64));
}

#[test]
fn test_sgml_string_branch() {
    let src = Sgml(SGML_TEXT);
    let mut g = Grammar::new();
    let words = g.sgml_string_branch(&["apple", "orange", "Ko&Zcaron;u&Scaron;&ccaron;Ku"]);

    assert!(g.matches(words, &src, 2, NPOS, NONE).is_none());
    let m = g.matches(words, &src, 2, NPOS, CI).unwrap();
    assert_eq!(m.hit_offset, Some(2));
    assert_eq!(m.span, span(2, 31));
}

#[test]
fn test_noop() {
    let mut g = Grammar::new();
    let noop = g.noop();
    assert_eq!(g.matches(noop, &Sgml(SGML_TEXT), 0, NPOS, NONE).unwrap().span, span(0, 0));
    assert_eq!(g.matches(noop, "", 0, NPOS, NONE).unwrap().span, span(0, 0));
}

#[test]
fn test_word_sequence_across_line_break() {
    let src = Sgml(SGML_TEXT);
    let mut g = Grammar::new();
    let separator = g.space_or_punct();
    let letter = g.invert(separator).unwrap();
    let word = g.iterations(letter, 1, usize::MAX);
    let space = g.space();
    let gap = g.iterations(space, 1, usize::MAX);
    let bol = g.bol();
    let eol = g.eol();
    let fant = g.literal("fant");
    let line_end = g.sequence([fant, eol, gap, bol, word]);

    let m = g.matches(line_end, &src, 59, NPOS, MatchFlags::MULTILINE).unwrap();
    assert_eq!(spans(&m), [(59, 63), (63, 63), (63, 64), (64, 64), (64, 66)]);
    assert!(g.matches(line_end, &src, 59, NPOS, NONE).is_none());
}

#[test]
fn test_search_and_end_limit() {
    let src = Sgml(SGML_TEXT);
    let mut g = Grammar::new();
    let digits = g.set("0123456789");
    let number = g.iterations(digits, 1, usize::MAX);
    let rule = g.rule(number);

    let m = rule.search(&src, 0, NPOS, NONE).unwrap();
    assert_eq!(m.span, span(85, 95));
    assert_eq!(m.children.len(), 10);
    assert_eq!(m.children[0].hit_offset, Some(1));

    let m = rule.search(&src, 0, 90, NONE).unwrap();
    assert_eq!(m.span, span(85, 90));
}

#[test]
fn test_try_recognize_reports_bad_ranges() {
    let mut g = Grammar::new();
    let any = g.any();
    let rule = g.rule(any);

    let err = rule.try_recognize("abc", 2, 1, NONE).unwrap_err();
    assert_eq!(err.code, ErrorCode::StartPastEnd);
    let err = rule.try_recognize("abc", 0, 4, NONE).unwrap_err();
    assert_eq!(err.code, ErrorCode::EndPastInput);

    assert_eq!(rule.try_recognize("abc", 3, NPOS, NONE).unwrap(), None);
    assert_eq!(rule.try_recognize("abc", 1, NPOS, NONE).unwrap().unwrap().span, span(1, 2));
}

#[test]
fn test_same_rule_in_narrow_wide_and_utf8() {
    let mut g = Grammar::new();
    let koz = g.sgml_literal("ko&zcaron;");

    let utf8 = "v kožu";
    assert_eq!(g.matches(koz, utf8, 2, NPOS, NONE).unwrap().span, span(2, 6));

    let wide: Vec<u16> = utf8.encode_utf16().collect();
    assert_eq!(g.matches(koz, wide.as_slice(), 2, NPOS, NONE).unwrap().span, span(2, 5));

    let chars: Vec<char> = utf8.chars().collect();
    assert_eq!(g.matches(koz, chars.as_slice(), 2, NPOS, NONE).unwrap().span, span(2, 5));

    assert!(g.matches(koz, b"v koz".as_slice(), 2, NPOS, NONE).is_none());
}

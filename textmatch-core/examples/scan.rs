//! Scan text for payment identifiers.
//!
//! Usage: cargo run --example scan -- [TEXT]
//!
//! Without an argument a built-in SGML snippet is scanned.

use textmatch_core::{CreditorReference, Iban, MatchFlags, Recognizer, Sgml, SiReference, Source, Spanned, NPOS};

const SAMPLE: &str = "Pla&ccaron;ilo na SI56&nbsp;0231&nbsp;2001&nbsp;5226&nbsp;972, \
sklic SI12 1234567890120 ali RF18 5390 0754 7034.";

fn report<S, R>(label: &str, src: &S, text: &str, recognizer: &R, valid: impl Fn(&R::Output) -> bool)
where
    S: Source + ?Sized,
    R: Recognizer<S>,
{
    let mut pos = 0;
    while let Some(found) = recognizer.search(src, pos, NPOS, MatchFlags::CASE_INSENSITIVE) {
        let span = found.span();
        let verdict = if valid(&found) { "valid" } else { "invalid" };
        println!("{label:>4} {verdict:<7} {span}  {}", &text[span.start..span.end]);
        pos = span.end;
    }
}

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_string());
    let src = Sgml(&text);

    report("IBAN", &src, &text, &Iban::new(), |m| m.is_valid);
    report("RF", &src, &text, &CreditorReference::new(), |m| m.is_valid);
    report("SI", &src, &text, &SiReference::new(), |m| m.is_valid);
}

//! Quality-weighted value lists, as in `Accept`, `Accept-Language` and
//! `Accept-Encoding`.

use std::fmt;

use crate::http::{is_space, Cursor, Element, Parameter};
use crate::span::{Span, Spanned};

/// A q-value in `[0, 1]`, kept in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    pub const MIN: Weight = Weight(0);
    pub const MAX: Weight = Weight(1000);

    #[inline]
    pub fn from_millis(millis: u16) -> Option<Weight> {
        (millis <= Self::MAX.0).then_some(Weight(millis))
    }

    #[inline]
    pub fn millis(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 1000.0
    }

    /// `digits[.digits]` at `start`, or `.digits`. Digits past the third
    /// decimal are read but ignored. Returns the weight and where it ends;
    /// `None` when there is no number or it exceeds 1.
    pub fn parse(text: &[u8], start: usize, end: usize) -> Option<(Weight, usize)> {
        let mut c = Cursor::new(text, start, end);
        let whole = c.skip_while(|b| b.is_ascii_digit());
        let mut fraction = Span::empty(c.pos);
        if c.eat(b'.') {
            fraction = c.skip_while(|b| b.is_ascii_digit());
        }
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut millis: u32 = 0;
        for &b in whole.slice(text) {
            millis = millis.saturating_mul(10).saturating_add(u32::from(b - b'0'));
        }
        millis = millis.saturating_mul(1000);
        let mut scale = 100;
        for &b in fraction.slice(text).iter().take(3) {
            millis = millis.saturating_add(u32::from(b - b'0') * scale);
            scale /= 10;
        }

        let weight = u16::try_from(millis).ok().and_then(Weight::from_millis)?;
        Some((weight, c.pos))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::MAX
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0 / 1000, self.0 % 1000) {
            (whole, 0) => write!(f, "{whole}"),
            (whole, frac) => {
                let digits = format!("{frac:03}");
                write!(f, "{whole}.{}", digits.trim_end_matches('0'))
            }
        }
    }
}

/// One list item: a value (or `*`) with its weight and other parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedValue<T> {
    pub span: Span,
    /// `None` for `*`.
    pub value: Option<T>,
    pub weight: Weight,
    /// Parameters other than `q`.
    pub params: Vec<Parameter>,
}

impl<T> Spanned for WeightedValue<T> {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

/// Outcome of parsing one list item.
enum Item<T> {
    Parsed(WeightedValue<T>),
    /// Well-formed value with an unusable weight; the item ends somewhere
    /// after this offset.
    BadWeight(usize),
}

impl<T: Element> WeightedValue<T> {
    fn parse_item(text: &[u8], start: usize, end: usize) -> Option<Item<T>> {
        let mut c = Cursor::new(text, start, end);
        let value = match T::parse(text, start, end) {
            Some(value) => {
                c.pos = value.span().end;
                Some(value)
            }
            None => {
                if !c.eat(b'*') {
                    return None;
                }
                None
            }
        };

        let mut item = WeightedValue { span: Span::new(start, c.pos), value, weight: Weight::MAX, params: Vec::new() };
        loop {
            let mut look = c;
            look.skip_while(is_space);
            if !look.eat(b';') {
                break;
            }
            look.skip_while(is_space);

            let mut q = look;
            if q.eat(b'q') || q.eat(b'Q') {
                q.skip_while(is_space);
                if q.eat(b'=') {
                    q.skip_while(is_space);
                    match Weight::parse(text, q.pos, q.end()) {
                        Some((weight, next)) if ends_weight(text, next, q.end()) => {
                            item.weight = weight;
                            c.pos = next;
                            item.span.end = next;
                            continue;
                        }
                        _ => return Some(Item::BadWeight(q.pos)),
                    }
                }
            }

            match Parameter::parse(text, look.pos, look.end()) {
                Some(param) => {
                    c.pos = param.span.end;
                    item.span.end = param.span.end;
                    item.params.push(param);
                }
                None => break,
            }
        }
        Some(Item::Parsed(item))
    }
}

/// A weight must be followed by a delimiter: `;`, `,`, whitespace or the end.
fn ends_weight(text: &[u8], pos: usize, end: usize) -> bool {
    match Cursor::new(text, pos, end).peek() {
        None => true,
        Some(b) => b == b';' || b == b',' || is_space(b),
    }
}

impl<T: Element> Element for WeightedValue<T> {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        match Self::parse_item(text, start, end)? {
            Item::Parsed(item) => Some(item),
            Item::BadWeight(_) => None,
        }
    }
}

/// Weighted values ordered by descending weight. Items of equal weight keep
/// the order they were inserted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedCollection<T> {
    items: Vec<WeightedValue<T>>,
}

impl<T> Default for WeightedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> WeightedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highest weighted item.
    #[inline]
    pub fn first(&self) -> Option<&WeightedValue<T>> {
        self.items.first()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedValue<T>> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[WeightedValue<T>] {
        &self.items
    }

    /// Add one item after every item of the same or higher weight.
    pub fn push(&mut self, item: WeightedValue<T>) {
        let at = self.items.partition_point(|x| x.weight >= item.weight);
        self.items.insert(at, item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Element> WeightedCollection<T> {
    /// Parse a comma separated list from `text[start..end]` and add its items.
    ///
    /// An item with a malformed or out of range weight, or one with anything
    /// but a delimiter right after it, is dropped and parsing resumes at the
    /// next comma. Anything else that does not parse ends the
    /// list.
    pub fn insert(&mut self, text: &[u8], start: usize, end: usize) {
        let mut c = Cursor::new(text, start, end);
        loop {
            c.skip_while(is_space);
            if c.eat(b',') {
                c.skip_while(is_space);
            }
            if c.peek().is_none() {
                break;
            }
            match WeightedValue::<T>::parse_item(text, c.pos, c.end()) {
                Some(Item::Parsed(item)) => {
                    c.pos = item.span.end;
                    self.push(item);
                }
                Some(Item::BadWeight(at)) => match memchr::memchr(b',', &text[at..c.end()]) {
                    Some(i) => c.pos = at + i,
                    None => break,
                },
                None => break,
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a WeightedCollection<T> {
    type Item = &'a WeightedValue<T>;
    type IntoIter = std::slice::Iter<'a, WeightedValue<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for WeightedCollection<T> {
    type Item = WeightedValue<T>;
    type IntoIter = std::vec::IntoIter<WeightedValue<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

//! HTTP/1.x request grammar.
//!
//! Every element parses a byte buffer in place and reports [`Span`]s into it;
//! nothing is copied. A zero byte ends the input just like the `end` bound.
//!
//! Line breaks are CRLF or a bare LF. Linear whitespace is a run of blanks,
//! optionally preceded by a line break (a folded line).

use std::fmt;
use std::marker::PhantomData;

use crate::matcher::{MatchFlags, Recognizer};
use crate::source::Source;
use crate::span::{Span, Spanned};

// ============================================================================
// Byte classes
// ============================================================================

#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0b' | b'\x0c')
}

#[inline]
fn is_ctl(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}

#[inline]
fn is_separator(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}'
    )
}

/// Byte allowed in a token.
#[inline]
pub fn is_token_byte(b: u8) -> bool {
    !is_ctl(b) && !is_separator(b) && !is_space(b)
}

#[inline]
fn is_cookie_octet(b: u8) -> bool {
    !is_ctl(b) && !is_space(b) && !matches!(b, b'"' | b',' | b';' | b'\\')
}

// ============================================================================
// Cursor
// ============================================================================

/// Read position over a bounded, optionally NUL terminated buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    text: &'a [u8],
    pub(crate) pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(crate) fn new(text: &'a [u8], start: usize, end: usize) -> Self {
        Self { text, pos: start, end: end.min(text.len()) }
    }

    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        let at = self.pos.checked_add(offset)?;
        if at < self.end {
            Some(self.text[at]).filter(|&b| b != 0)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Length of the line break at the cursor.
    #[inline]
    fn line_break(&self) -> Option<usize> {
        match self.peek()? {
            b'\n' => Some(1),
            b'\r' if self.peek_at(1) == Some(b'\n') => Some(2),
            _ => None,
        }
    }

    /// One stretch of linear whitespace.
    fn eat_lws(&mut self) -> bool {
        let mut at = self.pos;
        if let Some(n) = self.line_break() {
            at += n;
        }
        let mut look = Cursor { pos: at, ..*self };
        if !look.peek().is_some_and(is_blank) {
            return false;
        }
        look.skip_while(is_blank);
        self.pos = look.pos;
        true
    }

    #[inline]
    fn skip_lws(&mut self) {
        while self.eat_lws() {}
    }

    #[inline]
    pub(crate) fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> Span {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        Span::new(start, self.pos)
    }

    /// A non-empty run of bytes matching `pred`.
    #[inline]
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<Span> {
        let span = self.skip_while(pred);
        (!span.is_empty()).then_some(span)
    }
}

// ============================================================================
// Elements
// ============================================================================

/// A grammar element parsed at a given offset.
pub trait Element: Sized + Spanned {
    /// Parse starting exactly at `start`. `end` may be [`NPOS`](crate::span::NPOS).
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self>;
}

/// An [`Element`] type as a [`Recognizer`] over bytes, so it can be searched
/// for and range-checked like any other rule.
///
/// The HTTP grammar is byte exact; `flags` have no effect. Compare header
/// names with [`Header::is`].
pub struct Parser<E>(PhantomData<fn() -> E>);

impl<E> Parser<E> {
    #[inline]
    pub const fn new() -> Self {
        Parser(PhantomData)
    }
}

impl<E> Default for Parser<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Parser<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Parser<E> {}

impl<E> fmt::Debug for Parser<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser<{}>", std::any::type_name::<E>())
    }
}

impl<E: Element> Recognizer<[u8]> for Parser<E> {
    type Output = E;

    #[inline]
    fn recognize(&self, src: &[u8], start: usize, end: usize, _flags: MatchFlags) -> Option<E> {
        if start > src.limit(end) {
            return None;
        }
        E::parse(src, start, end)
    }
}

/// Run of token bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
}

impl Element for Token {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let span = Cursor::new(text, start, end).take_while(is_token_byte)?;
        Some(Token { span })
    }
}

/// `"…"` with backslash escapes and folded lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedString {
    pub span: Span,
    /// Between the quotes, escapes left in place.
    pub content: Span,
}

impl Element for QuotedString {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        if !c.eat(b'"') {
            return None;
        }
        let content_start = c.pos;
        loop {
            if c.eat_lws() {
                continue;
            }
            match c.peek()? {
                b'"' => {
                    let content = Span::new(content_start, c.pos);
                    c.bump();
                    return Some(QuotedString { span: Span::new(start, c.pos), content });
                }
                b'\\' => {
                    c.bump();
                    c.peek()?;
                    c.bump();
                }
                b if !is_ctl(b) => c.bump(),
                _ => return None,
            }
        }
    }
}

/// Parameter value: quoted string or token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Quoted(QuotedString),
    Token(Token),
}

impl Value {
    /// The value proper, without quotes.
    pub fn content(&self) -> Span {
        match self {
            Value::Quoted(q) => q.content,
            Value::Token(t) => t.span,
        }
    }
}

impl Element for Value {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        QuotedString::parse(text, start, end)
            .map(Value::Quoted)
            .or_else(|| Token::parse(text, start, end).map(Value::Token))
    }
}

/// `name = value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub span: Span,
    pub name: Token,
    pub value: Value,
}

impl Element for Parameter {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let name = Token::parse(text, start, end)?;
        let mut c = Cursor::new(text, name.span.end, end);
        c.skip_lws();
        if !c.eat(b'=') {
            return None;
        }
        c.skip_lws();
        let value = Value::parse(text, c.pos, end)?;
        Some(Parameter { span: Span::new(start, value.span().end), name, value })
    }
}

/// `type/subtype`; either may be `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRange {
    pub span: Span,
    pub main_type: Token,
    pub subtype: Token,
}

impl Element for MediaRange {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let main_type = Token::parse(text, start, end)?;
        let mut c = Cursor::new(text, main_type.span.end, end);
        c.skip_lws();
        if !c.eat(b'/') {
            return None;
        }
        c.skip_lws();
        let subtype = Token::parse(text, c.pos, end)?;
        Some(MediaRange { span: Span::new(start, subtype.span.end), main_type, subtype })
    }
}

/// Media range with `;name=value` parameters, as in `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    pub span: Span,
    pub range: MediaRange,
    pub params: Vec<Parameter>,
}

impl Element for MediaType {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let range = MediaRange::parse(text, start, end)?;
        let (params, params_end) = parameters(text, range.span.end, end, Parameter::parse);
        Some(MediaType { span: Span::new(start, params_end), range, params })
    }
}

/// `; param` repeated after an element ending at `pos`. Returns the
/// parameters and where the last one ends.
fn parameters<P: Spanned>(
    text: &[u8],
    pos: usize,
    end: usize,
    parse: impl Fn(&[u8], usize, usize) -> Option<P>,
) -> (Vec<P>, usize) {
    let mut params = Vec::new();
    let mut c = Cursor::new(text, pos, end);
    loop {
        let mut look = c;
        look.skip_lws();
        if !look.eat(b';') {
            break;
        }
        look.skip_lws();
        match parse(text, look.pos, end) {
            Some(param) => {
                c.pos = param.span().end;
                params.push(param);
            }
            None => break,
        }
    }
    (params, c.pos)
}

// ============================================================================
// URL
// ============================================================================

/// `name[=value]` in a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParameter {
    pub span: Span,
    pub name: Span,
    pub value: Option<Span>,
}

impl Element for UrlParameter {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        let name = c.take_while(|b| !is_ctl(b) && !is_space(b) && b != b'&' && b != b'=')?;
        let value = if c.eat(b'=') { Some(c.skip_while(|b| !is_ctl(b) && !is_space(b) && b != b'&')) } else { None };
        Some(UrlParameter { span: Span::new(start, c.pos), name, value })
    }
}

/// Request target: `[http://server[:port]]/path/segments[?query]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub span: Span,
    pub server: Option<Span>,
    /// 80 unless given.
    pub port: u16,
    /// One span per `/`, possibly empty.
    pub path: Vec<Span>,
    pub params: Vec<UrlParameter>,
}

impl Url {
    pub const DEFAULT_PORT: u16 = 80;
}

fn port(c: &mut Cursor<'_>) -> Option<u16> {
    let digits = c.skip_while(|b| b.is_ascii_digit());
    if digits.is_empty() {
        return Some(Url::DEFAULT_PORT);
    }
    let mut value: u16 = 0;
    for &b in digits.slice(c.text) {
        value = value.checked_mul(10)?.checked_add(u16::from(b - b'0'))?;
    }
    Some(value)
}

impl Element for Url {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        let mut server = None;
        let mut port_value = Url::DEFAULT_PORT;
        if c.end() - c.pos.min(c.end()) >= 7 && text[c.pos..c.pos + 7].eq_ignore_ascii_case(b"http://") {
            c.pos += 7;
            server = Some(c.take_while(|b| !is_ctl(b) && !is_space(b) && b != b':' && b != b'/')?);
            if c.eat(b':') {
                port_value = port(&mut c)?;
            }
        }

        if !c.eat(b'/') {
            return None;
        }
        let segment = |b: u8| !is_ctl(b) && !is_space(b) && b != b'?' && b != b'/';
        let mut path = vec![c.skip_while(segment)];
        while c.eat(b'/') {
            path.push(c.skip_while(segment));
        }

        let mut params = Vec::new();
        if c.eat(b'?') {
            while let Some(b) = c.peek() {
                if is_ctl(b) || is_space(b) {
                    break;
                } else if b == b'&' {
                    c.bump();
                } else {
                    match UrlParameter::parse(text, c.pos, c.end()) {
                        Some(param) => {
                            c.pos = param.span.end;
                            params.push(param);
                        }
                        None => break,
                    }
                }
            }
        }

        Some(Url { span: Span::new(start, c.pos), server, port: port_value, path, params })
    }
}

// ============================================================================
// Language, cookies, products, protocol
// ============================================================================

/// Language tag: alphabetic components joined by `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub span: Span,
    pub components: Vec<Span>,
}

impl Element for Language {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        let mut components = Vec::new();
        while let Some(component) = c.take_while(|b| b.is_ascii_alphabetic()) {
            components.push(component);
            if !c.eat(b'-') {
                break;
            }
        }
        let last = components.last()?.end;
        Some(Language { span: Span::new(start, last), components })
    }
}

/// `$name=value` attribute of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieParameter {
    pub span: Span,
    pub name: Token,
    pub value: Value,
}

impl Element for CookieParameter {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        if !c.eat(b'$') {
            return None;
        }
        let Parameter { name, value, .. } = Parameter::parse(text, c.pos, end)?;
        Some(CookieParameter { span: Span::new(start, value.span().end), name, value })
    }
}

/// `name=value` followed by `; $attr=value` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub span: Span,
    pub name: Token,
    /// Without quotes when quoted.
    pub value: Span,
    pub params: Vec<CookieParameter>,
}

impl Element for Cookie {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let name = Token::parse(text, start, end)?;
        let mut c = Cursor::new(text, name.span.end, end);
        c.skip_lws();
        if !c.eat(b'=') {
            return None;
        }
        c.skip_lws();
        let value = match QuotedString::parse(text, c.pos, end) {
            Some(quoted) => {
                c.pos = quoted.span.end;
                quoted.content
            }
            None => c.skip_while(is_cookie_octet),
        };
        let (params, params_end) = parameters(text, c.pos, end, CookieParameter::parse);
        Some(Cookie { span: Span::new(start, params_end), name, value, params })
    }
}

/// All cookies of a `Cookie` header value, separated by `;`.
pub fn cookies(text: &[u8], start: usize, end: usize) -> Vec<Cookie> {
    let mut list = Vec::new();
    let mut c = Cursor::new(text, start, end);
    loop {
        c.skip_while(is_space);
        if !list.is_empty() && !c.eat(b';') {
            break;
        }
        c.skip_while(is_space);
        match Cookie::parse(text, c.pos, c.end()) {
            Some(cookie) => {
                c.pos = cookie.span.end;
                list.push(cookie);
            }
            None => break,
        }
    }
    list
}

/// `product[/version]`, as in `User-Agent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub span: Span,
    pub product: Span,
    pub version: Option<Span>,
}

impl Element for Agent {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        let product = c.skip_while(|b| !is_space(b) && b != b'/');
        let version = if c.eat(b'/') { Some(c.skip_while(|b| !is_space(b))) } else { None };
        if c.pos == start {
            return None;
        }
        Some(Agent { span: Span::new(start, c.pos), product, version })
    }
}

/// `NAME/major[.minor]`, ended by whitespace or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Protocol {
    pub span: Span,
    pub name: Span,
    pub major: Span,
    pub minor: Option<Span>,
    /// `major * 0x100 + minor`: 0x100 is 1.0, 0x101 is 1.1.
    pub version: u16,
}

impl Protocol {
    /// Version assumed when a request line names no protocol.
    pub const HTTP_0_9: u16 = 0x009;
}

fn number(text: &[u8], span: Span) -> Option<u16> {
    let digits = span.slice(text);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    digits.iter().try_fold(0u16, |n, &b| n.checked_mul(10)?.checked_add(u16::from(b - b'0')))
}

impl Element for Protocol {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        let name = c.skip_while(|b| !is_space(b) && b != b'/');
        if !c.eat(b'/') {
            return None;
        }
        let major = c.skip_while(|b| !is_space(b) && b != b'.');
        let minor = if c.eat(b'.') { Some(c.skip_while(|b| !is_space(b))) } else { None };

        let major_value = number(text, major)?;
        let minor_value = match minor {
            Some(minor) => number(text, minor)?,
            None => 0,
        };
        let version = major_value.checked_mul(0x100)?.checked_add(minor_value)?;
        Some(Protocol { span: Span::new(start, c.pos), name, major, minor, version })
    }
}

// ============================================================================
// Request line and headers
// ============================================================================

/// `VERB url [protocol]` line, including its line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub span: Span,
    pub verb: Span,
    pub url: Url,
    pub protocol: Option<Protocol>,
}

impl Request {
    /// Protocol version, HTTP/0.9 when none is named.
    pub fn version(&self) -> u16 {
        self.protocol.map_or(Protocol::HTTP_0_9, |p| p.version)
    }
}

/// Skip whitespace that must not end the line.
fn skip_inline_space(c: &mut Cursor<'_>) -> Option<()> {
    loop {
        if c.line_break().is_some() {
            return None;
        }
        match c.peek()? {
            b if is_space(b) => c.bump(),
            _ => return Some(()),
        }
    }
}

impl Element for Request {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        skip_inline_space(&mut c)?;

        let verb_start = c.pos;
        loop {
            if c.line_break().is_some() {
                return None;
            }
            match c.peek()? {
                b if is_space(b) => break,
                _ => c.bump(),
            }
        }
        let verb = Span::new(verb_start, c.pos);
        c.bump();
        skip_inline_space(&mut c)?;

        let url = Url::parse(text, c.pos, c.end())?;
        c.pos = url.span.end;
        let mut request = Request { span: Span::new(start, c.pos), verb, url, protocol: None };

        loop {
            if let Some(n) = c.line_break() {
                request.span.end = c.pos + n;
                return Some(request);
            }
            match c.peek() {
                Some(b) if is_space(b) => c.bump(),
                Some(_) => break,
                None => {
                    request.span.end = c.pos;
                    return Some(request);
                }
            }
        }
        request.span.end = c.pos;

        let protocol = match Protocol::parse(text, c.pos, c.end()) {
            Some(protocol) => protocol,
            None => return Some(request),
        };
        c.pos = protocol.span.end;
        request.protocol = Some(protocol);

        loop {
            if let Some(n) = c.line_break() {
                c.pos += n;
                break;
            }
            match c.peek() {
                Some(_) => c.bump(),
                None => break,
            }
        }
        request.span.end = c.pos;
        Some(request)
    }
}

/// `Name: value` line with folded continuations, including the final line
/// break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub span: Span,
    pub name: Span,
    /// Trimmed. Empty, right after the colon, for an empty value.
    pub value: Span,
}

impl Header {
    /// Whether the header is called `name`, ignoring case.
    pub fn is(&self, text: &[u8], name: &str) -> bool {
        self.name.slice(text).eq_ignore_ascii_case(name.as_bytes())
    }
}

impl Element for Header {
    fn parse(text: &[u8], start: usize, end: usize) -> Option<Self> {
        let mut c = Cursor::new(text, start, end);
        if c.line_break().is_some() || is_space(c.peek()?) {
            return None;
        }

        let name_start = c.pos;
        let name = loop {
            if c.line_break().is_some() {
                return None;
            }
            match c.peek()? {
                b':' => {
                    let name = Span::new(name_start, c.pos);
                    c.bump();
                    break name;
                }
                b if is_space(b) => {
                    let name = Span::new(name_start, c.pos);
                    skip_inline_space(&mut c)?;
                    if !c.eat(b':') {
                        return None;
                    }
                    break name;
                }
                _ => c.bump(),
            }
        };

        let after_colon = c.pos;
        let mut value: Option<Span> = None;
        loop {
            if let Some(n) = c.line_break() {
                c.pos += n;
                if c.line_break().is_none() && c.peek().is_some_and(is_space) {
                    c.bump();
                    continue;
                }
                break;
            }
            match c.peek() {
                Some(b) if is_space(b) => c.bump(),
                Some(_) => {
                    c.bump();
                    let end = c.pos;
                    value = Some(value.map_or(Span::new(end - 1, end), |v| Span::new(v.start, end)));
                }
                None => break,
            }
        }

        Some(Header { span: Span::new(start, c.pos), name, value: value.unwrap_or(Span::empty(after_colon)) })
    }
}

/// Header lines from `start` up to the blank line that ends them.
#[derive(Debug, Clone)]
pub struct Headers<'a> {
    text: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Headers<'a> {
    pub fn new(text: &'a [u8], start: usize, end: usize) -> Self {
        Self { text, pos: start, end }
    }

    /// Where the next header would start; after the last one once exhausted.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Headers<'_> {
    type Item = Header;

    fn next(&mut self) -> Option<Header> {
        let header = Header::parse(self.text, self.pos, self.end)?;
        self.pos = header.span.end;
        Some(header)
    }
}

macro_rules! spanned {
    ($($ty:ty),* $(,)?) => {
        $(impl Spanned for $ty {
            #[inline]
            fn span(&self) -> Span {
                self.span
            }
        })*
    };
}

spanned!(
    Token, QuotedString, Parameter, MediaRange, MediaType, UrlParameter, Url, Language, CookieParameter, Cookie,
    Agent, Protocol, Request, Header,
);

impl Spanned for Value {
    fn span(&self) -> Span {
        match self {
            Value::Quoted(q) => q.span,
            Value::Token(t) => t.span,
        }
    }
}

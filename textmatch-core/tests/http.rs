//! A complete browser request: request line, headers and their elements.

mod common;

use common::{span, text_of, REQUEST};
use pretty_assertions::assert_eq;
use textmatch_core::http::{self, Agent, Element, Header, Headers, Language, MediaRange, Parser, Request, Token};
use textmatch_core::{ErrorCode, MatchFlags, Recognizer, Span, Weight, WeightedCollection, NPOS};

fn header(name: &str) -> Header {
    let request = Request::parse(REQUEST, 0, NPOS).unwrap();
    Headers::new(REQUEST, request.span.end, NPOS)
        .find(|h| h.is(REQUEST, name))
        .unwrap_or_else(|| panic!("no {name} header"))
}

fn labels<T: Element>(list: &WeightedCollection<T>) -> Vec<&'static str> {
    list.iter()
        .map(|w| match &w.value {
            Some(v) => text_of(REQUEST, v),
            None => "*",
        })
        .collect()
}

#[test]
fn test_request_line() {
    let request = Request::parse(REQUEST, 0, NPOS).unwrap();
    assert_eq!(request.span, span(0, 14));
    assert_eq!(request.verb, span(0, 3));
    assert_eq!(request.url.span, span(4, 5));
    assert_eq!(request.url.port, 80);
    let protocol = request.protocol.unwrap();
    assert_eq!(protocol.span, span(6, 12));
    assert_eq!(text_of(REQUEST, &protocol.name), "HTTP");
    assert_eq!(request.version(), 0x200);
}

#[test]
fn test_headers_end_at_blank_line() {
    let request = Request::parse(REQUEST, 0, NPOS).unwrap();
    let mut headers = Headers::new(REQUEST, request.span.end, NPOS);
    let names: Vec<&str> = headers.by_ref().map(|h| text_of(REQUEST, &h.name)).collect();
    assert_eq!(
        names,
        [
            "Host",
            "User-Agent",
            "Accept",
            "Accept-Language",
            "Accept-Encoding",
            "DNT",
            "Connection",
            "Cookie",
            "Upgrade-Insecure-Requests",
            "Sec-Fetch-Dest",
            "Sec-Fetch-Mode",
            "Sec-Fetch-Site",
            "Sec-Fetch-User",
            "Pragma",
            "Cache-Control",
        ]
    );
    assert_eq!(headers.position(), REQUEST.len() - 2);
}

#[test]
fn test_header_values() {
    let host = header("host");
    assert_eq!(std::str::from_utf8(host.value.slice(REQUEST)).unwrap(), "stackoverflow.com");

    let agent = header("User-Agent");
    let agent = Agent::parse(REQUEST, agent.value.start, agent.value.end).unwrap();
    assert_eq!(std::str::from_utf8(agent.product.slice(REQUEST)).unwrap(), "Mozilla");
    assert_eq!(std::str::from_utf8(agent.version.unwrap().slice(REQUEST)).unwrap(), "5.0");

    let dnt = header("dnt");
    let token = Token::parse(REQUEST, dnt.value.start, dnt.value.end).unwrap();
    assert_eq!(text_of(REQUEST, &token), "1");
}

#[test]
fn test_accept() {
    let accept = header("Accept");
    let mut list = WeightedCollection::<MediaRange>::new();
    list.insert(REQUEST, accept.value.start, accept.value.end);
    assert_eq!(
        labels(&list),
        ["text/html", "application/xhtml+xml", "image/avif", "image/webp", "application/xml", "*/*"]
    );
    let weights: Vec<String> = list.iter().map(|w| w.weight.to_string()).collect();
    assert_eq!(weights, ["1", "1", "1", "1", "0.9", "0.8"]);
}

#[test]
fn test_accept_language() {
    let languages = header("Accept-Language");
    let mut list = WeightedCollection::<Language>::new();
    list.insert(REQUEST, languages.value.start, languages.value.end);
    assert_eq!(labels(&list), ["sl", "en-US", "en", "de-DE", "de"]);
    assert_eq!(list.first().unwrap().weight, Weight::MAX);
    let de_de = &list.as_slice()[3];
    let components: Vec<&str> =
        de_de.value.as_ref().unwrap().components.iter().map(|c| text_of(REQUEST, c)).collect();
    assert_eq!(components, ["de", "DE"]);
}

#[test]
fn test_accept_encoding() {
    let encodings = header("Accept-Encoding");
    let mut list = WeightedCollection::<Token>::new();
    list.insert(REQUEST, encodings.value.start, encodings.value.end);
    assert_eq!(labels(&list), ["gzip", "deflate", "br"]);
}

#[test]
fn test_cookies() {
    let cookie = header("Cookie");
    let cookies = http::cookies(REQUEST, cookie.value.start, cookie.value.end);
    let names: Vec<&str> = cookies.iter().map(|c| text_of(REQUEST, &c.name)).collect();
    assert_eq!(names, ["prov", "acct", "OptanonConsent", "OptanonAlertBoxClosed"]);
    assert_eq!(text_of(REQUEST, &cookies[0].value), "00000000-0000-0000-0000-000000000000");
    assert_eq!(text_of(REQUEST, &cookies[3].value), "2023-02-03T10:11:08.683Z");
    assert_eq!(cookies[3].span.end, cookie.value.end);
}

#[test]
fn test_request_without_headers() {
    let text = b"GET /index.html\n";
    let request = Request::parse(text, 0, NPOS).unwrap();
    assert_eq!(request.span, Span::new(0, text.len()));
    assert!(request.protocol.is_none());
    assert_eq!(request.version(), 0x009);
    assert_eq!(Headers::new(text, request.span.end, NPOS).count(), 0);
}

#[test]
fn test_elements_as_recognizers() {
    let requests = Parser::<Request>::new();
    let request = requests.search(REQUEST, 0, NPOS, MatchFlags::NONE).unwrap();
    assert_eq!(request.span, span(0, 14));

    let text: &[u8] = b"\r\n\r\nGET / HTTP/1.1\r\n";
    assert!(requests.recognize(text, 0, NPOS, MatchFlags::NONE).is_none());
    let request = requests.search(text, 0, NPOS, MatchFlags::NONE).unwrap();
    assert_eq!(request.span, span(4, 20));
    assert_eq!(request.version(), 0x101);

    // The request line is skipped, the first header is found.
    let headers = Parser::<Header>::new();
    let host = headers.search(REQUEST, 0, NPOS, MatchFlags::NONE).unwrap();
    assert_eq!(host.name, span(14, 18));
    assert!(host.is(REQUEST, "host"));
    assert_eq!(text_of(REQUEST, &host.value), "stackoverflow.com");

    let host = headers.try_recognize(REQUEST, 14, NPOS, MatchFlags::NONE).unwrap().unwrap();
    assert_eq!(host.span, span(14, 39));
    assert!(headers.try_recognize(REQUEST, 0, NPOS, MatchFlags::NONE).unwrap().is_none());
    let err = headers.try_recognize(REQUEST, 20, 10, MatchFlags::NONE).unwrap_err();
    assert_eq!(err.code, ErrorCode::StartPastEnd);
    assert!(headers.try_recognize(REQUEST, 0, REQUEST.len() + 1, MatchFlags::NONE).is_err());
}

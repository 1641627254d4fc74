//! Shared fixtures for integration tests.

#![allow(dead_code)]

use textmatch_core::{Span, Spanned};

/// Slovenian pangram with named entities, a line break and a no-break space.
pub const SGML_TEXT: &str =
    "V ko&zcaron;u&scaron;&ccaron;ku zlobnega mizarja stopiclja fant\nin kli&ccaron;e&nbsp;1234567890.";

/// A browser request, headers and the blank line that ends them.
pub const REQUEST: &[u8] = b"GET / HTTP/2\r\n\
Host: stackoverflow.com\r\n\
User-Agent: Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/110.0\r\n\
Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8\r\n\
Accept-Language: sl,en-US;q=0.8,en;q=0.6,de-DE;q=0.4,de;q=0.2\r\n\
Accept-Encoding: gzip, deflate, br\r\n\
DNT: 1\r\n\
Connection: keep-alive\r\n\
Cookie: prov=00000000-0000-0000-0000-000000000000; acct=t=00000000000000000%2f%2f0000%2b0000%2b000&s=00000000000000000000000000000000; OptanonConsent=isGpcEnabled=0&datestamp=Fri+Feb+03+2023+11%3A11%3A08+GMT%2B0100+(Srednjeevropski+standardni+%C4%8Das)&version=6.37.0&isIABGlobal=false&hosts=&consentId=00000000-0000-0000-0000-000000000000&interactionCount=1&landingPath=NotLandingPage&groups=00000%3A0%2C00000%3A0%2C00000%3A0%2C00000%3A0; OptanonAlertBoxClosed=2023-02-03T10:11:08.683Z\r\n\
Upgrade-Insecure-Requests: 1\r\n\
Sec-Fetch-Dest: document\r\n\
Sec-Fetch-Mode: navigate\r\n\
Sec-Fetch-Site: none\r\n\
Sec-Fetch-User: ?1\r\n\
Pragma: no-cache\r\n\
Cache-Control: no-cache\r\n\
\r\n";

/// IBANs with correct check digits, as printed.
pub const VALID_IBANS: &[&str] = &[
    "SI56 0231 2001 5226 972",
    "BE71 0961 2345 6769",
    "GB29 NWBK 6016 1331 9268 19",
    "DE89 3704 0044 0532 0130 00",
    "CR05 0152 0200 1026 2840 66",
    "SE45 5000 0000 0583 9825 7466",
    "IE29 AIBK 9311 5212 3456 78",
];

/// Well-formed IBANs whose check digits do not verify.
pub const INVALID_IBANS: &[&str] = &[
    "CR99 0152 0200 1026 2840 66",
    "IE12 BOFI 9000 0112 3456 78",
    "SE87 5000 0000 0583 9825 7466",
];

pub fn span(start: usize, end: usize) -> Span {
    Span::new(start, end)
}

/// The text an element covers.
pub fn text_of<'a, T: Spanned>(src: &'a [u8], element: &T) -> &'a str {
    std::str::from_utf8(element.span().slice(src)).unwrap_or("<invalid utf-8>")
}

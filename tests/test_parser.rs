use relay::http::parser::{HeaderDelimiter, ParseError, Parser, parse_http_request};

const SIMPLE_GET: &[u8] = b"GET /path HTTP/1.1\r\nHost example.com\r\nAccept */*\r\n\r\n";

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_http_request(SIMPLE_GET, HeaderDelimiter::Space, None);

    assert_eq!(parsed.method(), Some("GET"));
    assert_eq!(parsed.url(), Some("/path"));
    assert_eq!(parsed.version(), Some("HTTP/1.1"));
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[test]
fn test_parse_headers_keep_line_order_and_duplicates() {
    let req = b"GET / HTTP/1.1\r\nX-Tag one\r\nHost example.com\r\nX-Tag two\r\n\r\n";
    let parsed = parse_http_request(req, HeaderDelimiter::Space, None);

    let keys: Vec<&str> = parsed.headers().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["X-Tag", "Host", "X-Tag"]);
    assert_eq!(parsed.header("X-Tag"), Some("one"));
}

#[test]
fn test_parse_space_delimited_keeps_colon_in_key() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req, HeaderDelimiter::Space, None);

    assert_eq!(parsed.header("Host:"), Some("example.com"));
    assert_eq!(parsed.header("Host"), None);
}

#[test]
fn test_parse_space_delimited_ignores_extra_tokens() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent test client 1.0\r\n\r\n";
    let parsed = parse_http_request(req, HeaderDelimiter::Space, None);

    assert_eq!(parsed.header("User-Agent"), Some("test"));
}

#[test]
fn test_parse_header_without_delimiter_has_no_value() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let parsed = parse_http_request(req, HeaderDelimiter::Space, None);

    assert_eq!(parsed.headers(), &[("BrokenHeader".to_string(), None)]);
}

#[test]
fn test_parse_colon_delimited_headers() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test client\r\n\r\n";
    let parsed = parse_http_request(req, HeaderDelimiter::Colon, None);

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test client"));
}

#[test]
fn test_parse_short_request_line_leaves_fields_empty() {
    let parsed = parse_http_request(b"GET\r\n\r\n", HeaderDelimiter::Space, None);

    assert_eq!(parsed.method(), Some("GET"));
    assert_eq!(parsed.url(), None);
    assert_eq!(parsed.version(), None);
    assert!(parsed.headers().is_empty());
}

#[test]
fn test_parse_long_request_line_ignores_extra_tokens() {
    let parsed = parse_http_request(b"GET / HTTP/1.1 extra\r\n\r\n", HeaderDelimiter::Space, None);

    assert_eq!(parsed.url(), Some("/"));
    assert_eq!(parsed.version(), Some("HTTP/1.1"));
}

#[test]
fn test_parse_request_with_query_string_is_verbatim() {
    let parsed = parse_http_request(b"GET /search?q=rust HTTP/1.1\r\n\r\n", HeaderDelimiter::Space, None);

    assert_eq!(parsed.url(), Some("/search?q=rust"));
}

#[test]
fn test_feed_waits_for_terminator() {
    let mut parser = Parser::default();

    assert_eq!(parser.feed(b"GET / HTTP/1.1\r\nHost example.com\r\n"), Ok(None));
    assert!(parser.feed(b"\r\n").unwrap().is_some());
}

#[test]
fn test_feed_chunk_size_independence() {
    let whole = Parser::default().feed(SIMPLE_GET).unwrap().unwrap();

    for chunk_size in 1..SIMPLE_GET.len() {
        let mut parser = Parser::default();
        let mut parsed = None;
        for chunk in SIMPLE_GET.chunks(chunk_size) {
            if let Some(req) = parser.feed(chunk).unwrap() {
                assert!(parsed.is_none(), "more than one request for chunk size {}", chunk_size);
                parsed = Some(req);
            }
        }
        assert_eq!(parsed.as_ref(), Some(&whole), "chunk size {}", chunk_size);
    }
}

#[test]
fn test_feed_resets_between_requests() {
    let mut parser = Parser::default();

    let first = parser.feed(b"GET /a HTTP/1.1\r\n\r\n").unwrap().unwrap();
    let second = parser.feed(b"GET /b HTTP/1.1\r\n\r\n").unwrap().unwrap();

    assert_eq!(first.url(), Some("/a"));
    assert_eq!(second.url(), Some("/b"));
    assert_eq!(parser.buffered(), 0);
}

#[test]
fn test_feed_multibyte_split_across_chunks() {
    let req = "GET /caf\u{e9} HTTP/1.1\r\n\r\n".as_bytes();
    let split = req.iter().position(|&b| b == 0xC3).unwrap() + 1;

    let mut parser = Parser::default();
    assert_eq!(parser.feed(&req[..split]), Ok(None));
    let parsed = parser.feed(&req[split..]).unwrap().unwrap();

    assert_eq!(parsed.url(), Some("/caf\u{e9}"));
}

#[test]
fn test_feed_rejects_oversized_header_block() {
    let mut parser = Parser::new(HeaderDelimiter::Space, Some(16));

    let result = parser.feed(b"GET /a-very-long-path HTTP/1.1\r\n");

    assert_eq!(result, Err(ParseError::HeaderTooLarge { limit: 16 }));
}

#[test]
fn test_feed_cap_applies_regardless_of_chunking() {
    let req = b"GET /api HTTP/1.1\r\nHost localhost\r\n\r\n";
    let limit = 20;

    let mut whole = Parser::new(HeaderDelimiter::Space, Some(limit));
    assert_eq!(whole.feed(req), Err(ParseError::HeaderTooLarge { limit }));

    let mut split = Parser::new(HeaderDelimiter::Space, Some(limit));
    assert_eq!(split.feed(&req[..10]), Ok(None));
    assert_eq!(split.feed(&req[10..]), Err(ParseError::HeaderTooLarge { limit }));
}

#[test]
fn test_feed_block_at_cap_is_accepted() {
    let req = b"GET /api HTTP/1.1\r\nHost localhost\r\n\r\n";

    let mut parser = Parser::new(HeaderDelimiter::Space, Some(req.len()));

    assert!(parser.feed(req).unwrap().is_some());
}

#[test]
fn test_feed_unbounded_without_cap() {
    let mut parser = Parser::new(HeaderDelimiter::Space, None);
    let filler = vec![b'a'; 128 * 1024];

    assert_eq!(parser.feed(&filler), Ok(None));
    assert_eq!(parser.buffered(), filler.len());
}

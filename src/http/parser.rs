use std::net::SocketAddr;

use bytes::BytesMut;
use serde::Deserialize;

use crate::http::request::{HeaderPair, Request, RequestBuilder};

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";
const LINE_SEPARATOR: &str = "\r\n";

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The header block grew past the configured cap without a terminator.
    HeaderTooLarge { limit: usize },
}

/// How a header line is split into key and value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderDelimiter {
    /// `key value`, split on single spaces. Extra tokens are ignored.
    #[default]
    Space,
    /// Standard `key: value`, split on the first colon.
    Colon,
}

/// Parses one complete header block.
///
/// Never fails: missing request-line tokens come back as `None` fields and
/// header lines without a delimiter get a `None` value.
pub fn parse_http_request(
    buf: &[u8],
    delimiter: HeaderDelimiter,
    peer: Option<SocketAddr>,
) -> Request {
    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split(LINE_SEPARATOR);

    // Request line
    let mut parts = lines.next().unwrap_or_default().split(' ');
    let method = parts.next();
    let url = parts.next();
    let version = parts.next();

    let mut builder = RequestBuilder::new().peer(peer);
    if let Some(method) = method {
        builder = builder.method(method);
    }
    if let Some(url) = url {
        builder = builder.url(url);
    }
    if let Some(version) = version {
        builder = builder.version(version);
    }

    // Headers
    for line in lines.filter(|line| !line.is_empty()) {
        builder = builder.raw_header(split_header(line, delimiter));
    }

    builder.build()
}

fn split_header(line: &str, delimiter: HeaderDelimiter) -> HeaderPair {
    match delimiter {
        HeaderDelimiter::Space => {
            let mut tokens = line.split(' ');
            let key = tokens.next().unwrap_or_default().to_string();
            (key, tokens.next().map(str::to_string))
        }
        HeaderDelimiter::Colon => match line.split_once(':') {
            Some((key, value)) => (key.trim().to_string(), Some(value.trim().to_string())),
            None => (line.trim().to_string(), None),
        },
    }
}

/// Per-connection header accumulator.
///
/// Chunks are appended as they arrive; a request is produced only when the
/// buffer ends exactly with CRLFCRLF, after which the buffer is empty again.
/// Bytes that follow a terminator inside the same chunk are not recognised.
#[derive(Debug)]
pub struct Parser {
    buffer: BytesMut,
    delimiter: HeaderDelimiter,
    max_header_bytes: Option<usize>,
    peer: Option<SocketAddr>,
}

impl Parser {
    pub fn new(delimiter: HeaderDelimiter, max_header_bytes: Option<usize>) -> Self {
        Self {
            buffer: BytesMut::with_capacity(4096),
            delimiter,
            max_header_bytes,
            peer: None,
        }
    }

    /// Tags every request produced by this parser with the connection's peer.
    pub fn with_peer(mut self, peer: SocketAddr) -> Self {
        self.peer = Some(peer);
        self
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Result<Option<Request>, ParseError> {
        self.buffer.extend_from_slice(chunk);

        // Checked before the terminator so the outcome never depends on chunking.
        if let Some(limit) = self.max_header_bytes {
            if self.buffer.len() > limit {
                return Err(ParseError::HeaderTooLarge { limit });
            }
        }

        if self.buffer.ends_with(HEADER_TERMINATOR) {
            let block = self.buffer.split();
            return Ok(Some(parse_http_request(&block, self.delimiter, self.peer)));
        }

        Ok(None)
    }

    /// Bytes accumulated since the last completed request.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(HeaderDelimiter::default(), None)
    }
}

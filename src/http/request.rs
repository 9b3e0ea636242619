use std::net::SocketAddr;

/// A single header line as it appeared on the wire.
///
/// The value is `None` when the line carried no delimiter at all.
pub type HeaderPair = (String, Option<String>);

/// Represents a parsed HTTP request from a client.
///
/// Built once per header block by the parser and never mutated afterwards,
/// which is why the fields are only reachable through accessors. Tokens that
/// were missing from the request line are `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Option<String>,
    url: Option<String>,
    version: Option<String>,
    headers: Vec<HeaderPair>,
    peer: Option<SocketAddr>,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<String>,
    url: Option<String>,
    version: Option<String>,
    headers: Vec<HeaderPair>,
    peer: Option<SocketAddr>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Appends a header. Duplicates are kept in insertion order.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), Some(value.into())));
        self
    }

    pub fn raw_header(mut self, pair: HeaderPair) -> Self {
        self.headers.push(pair);
        self
    }

    pub fn peer(mut self, peer: Option<SocketAddr>) -> Self {
        self.peer = peer;
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            version: self.version,
            headers: self.headers,
            peer: self.peer,
        }
    }
}

impl Request {
    /// The first token of the request line.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// The second token of the request line, used verbatim as the routing key.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// All header pairs in the order they were received.
    pub fn headers(&self) -> &[HeaderPair] {
        &self.headers
    }

    /// Retrieves the value of the first header whose key matches exactly.
    ///
    /// Keys are compared byte for byte; with the default space-delimited
    /// syntax a wire line `Host: example.com` has the key `Host:`.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Address of the connection this request arrived on.
    pub fn peer(&self) -> Option<SocketAddr> {
        self.peer
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::app::Application;
use crate::http::parser::{HeaderDelimiter, ParseError, Parser};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Parser settings applied to every accepted connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub header_delimiter: HeaderDelimiter,
    pub max_header_bytes: Option<usize>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            header_delimiter: HeaderDelimiter::Space,
            max_header_bytes: Some(64 * 1024),
        }
    }
}

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    parser: Parser,
    app: Arc<Application>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Writing(ResponseWriter, bool), // bool = response finished?
    Closed,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        app: Arc<Application>,
        options: ConnectionOptions,
    ) -> Self {
        let parser = Parser::new(options.header_delimiter, options.max_header_bytes).with_peer(peer);
        Self {
            stream,
            peer,
            parser,
            app,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Dispatching(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Dispatching(req) => {
                    let mut response = Response::new();
                    self.app.handle_request(req, &mut response);

                    let finished = response.is_finished();
                    let writer = ResponseWriter::new(response.take_frames());
                    self.state = ConnectionState::Writing(writer, finished);
                }

                ConnectionState::Writing(writer, finished) => {
                    if !writer.is_empty() {
                        writer
                            .write_to_stream(&mut self.stream)
                            .await
                            .context("failed to write response")?;
                    }

                    if *finished {
                        // One response per connection: close our write side.
                        self.stream.shutdown().await?;
                        tracing::debug!(peer = %self.peer, "Response finished, connection closed");
                        self.state = ConnectionState::Closed;
                    } else {
                        // Unmatched or unfinished: keep reading, nothing is sent.
                        self.state = ConnectionState::Reading;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the parser yields a request. `None` means the client
    /// closed the connection or the header block was rejected.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut temp = [0u8; 1024];

        loop {
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            match self.parser.feed(&temp[..n]) {
                Ok(Some(request)) => return Ok(Some(request)),
                Ok(None) => {}
                Err(ParseError::HeaderTooLarge { limit }) => {
                    tracing::warn!(
                        peer = %self.peer,
                        limit,
                        "Header block exceeds limit, closing connection"
                    );
                    return Ok(None);
                }
            }
        }
    }
}

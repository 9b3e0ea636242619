use std::time::SystemTime;

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::reason_phrase;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes one response frame: status line, `Date`, `Content-Length`,
/// blank line, body.
pub fn serialize_response(status: u16, date: SystemTime, body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128 + body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status,
        reason_phrase(status).unwrap_or_default()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    let headers = format!(
        "Date: {}\r\nContent-Length: {}\r\n",
        httpdate::fmt_http_date(date),
        body.len()
    );
    buf.extend_from_slice(headers.as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(body);

    buf
}

/// Writes queued response frames to a stream, one frame per write call.
pub struct ResponseWriter {
    frames: Vec<Bytes>,
}

impl ResponseWriter {
    pub fn new(frames: Vec<Bytes>) -> Self {
        Self { frames }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        for frame in self.frames.drain(..) {
            stream.write_all(&frame).await?;
        }
        stream.flush().await?;

        Ok(())
    }
}

use std::time::SystemTime;

use bytes::Bytes;

use crate::http::writer::serialize_response;

/// Returns the reason phrase for a status code.
///
/// Only `200` is known; every other code has no reason phrase and the status
/// line is written with an empty one.
///
/// # Example
///
/// ```
/// # use relay::http::response::reason_phrase;
/// assert_eq!(reason_phrase(200), Some("OK"));
/// assert_eq!(reason_phrase(404), None);
/// ```
pub fn reason_phrase(status: u16) -> Option<&'static str> {
    match status {
        200 => Some("OK"),
        _ => None,
    }
}

/// The response side of one request.
///
/// Handlers write through [`Response::send`] and [`Response::end`]. Each call
/// produces one complete frame (status line, headers and body) that the
/// connection flushes with a single write once dispatch returns. After
/// `end` the response is finished and the connection is closed.
#[derive(Debug)]
pub struct Response {
    /// Status code used for the next frame. Defaults to 200.
    pub status_code: u16,
    frames: Vec<Bytes>,
    finished: bool,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            frames: Vec::new(),
            finished: false,
        }
    }

    /// Frames a full response around `data` and queues it for writing.
    ///
    /// Calling this more than once queues a second full header block. Once
    /// the response is finished the frame is dropped, since the connection
    /// is already being closed.
    pub fn send(&mut self, data: impl AsRef<[u8]>) {
        if self.finished {
            tracing::warn!(
                status = self.status_code,
                "Response already finished, dropping write"
            );
            return;
        }

        let frame = serialize_response(self.status_code, SystemTime::now(), data.as_ref());
        self.frames.push(Bytes::from(frame));
    }

    /// Sends `data` and marks the response finished.
    pub fn end(&mut self, data: impl AsRef<[u8]>) {
        self.send(data);
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Frames queued since the last [`Response::take_frames`].
    pub fn frames(&self) -> &[Bytes] {
        &self.frames
    }

    pub fn take_frames(&mut self) -> Vec<Bytes> {
        std::mem::take(&mut self.frames)
    }
}

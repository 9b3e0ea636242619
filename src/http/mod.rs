//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: a request line plus a header block,
//! no body, one response per connection.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine driving read, dispatch and write
//! - **`parser`**: accumulates bytes and parses a header block once it is terminated
//! - **`request`**: the immutable request record
//! - **`response`**: the response handlers write into
//! - **`writer`**: frames responses and writes them to the socket
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until CRLFCRLF
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Run the handler chain for the url
//!        └──────┬───────────┘
//!               │ Frames queued (possibly none)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Flush frames to the client
//!        └──────┬───────────┘
//!               │
//!               ├─ Response finished → Closed
//!               └─ Not finished → Reading (same connection)
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

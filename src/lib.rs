//! Relay - a tiny middleware-chain HTTP server
//!
//! Handlers are registered per exact path and run in order, each one
//! deciding whether to respond and whether to hand off to the next.

pub mod app;
pub mod config;
pub mod http;
pub mod server;

pub use app::{Application, Next};
pub use http::request::Request;
pub use http::response::Response;

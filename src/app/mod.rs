//! Middleware registration and dispatch.
//!
//! An [`Application`] owns a table of exact paths, each mapped to an ordered
//! chain of handlers. A handler receives the request, the response and a
//! [`Next`] context; it decides on its own whether to write a response and
//! whether to pass control down the chain.
//!
//! # Example
//!
//! ```no_run
//! use relay::app::Application;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut app = Application::new();
//!
//!     app.use_middleware(|_req, res, next| {
//!         res.end("hello");
//!         next.proceed(res);
//!     });
//!     app.use_at("/api", |_req, res, _next| res.end("api"));
//!
//!     app.listen("127.0.0.1:8000", |addr| {
//!         tracing::info!("App is listening at {}", addr);
//!     })
//!     .await
//! }
//! ```

pub mod next;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

pub use next::{Handler, Next};
pub use routes::RouteTable;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::listener::Server;

/// Path used by [`Application::use_middleware`].
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Default)]
pub struct Application {
    routes: RouteTable,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `"/"`.
    pub fn use_middleware<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&Request, &mut Response, &mut Next<'_>) + Send + Sync + 'static,
    {
        self.use_at(ROOT_PATH, handler)
    }

    /// Registers `handler` at the end of the chain for `path`.
    pub fn use_at<F>(&mut self, path: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Request, &mut Response, &mut Next<'_>) + Send + Sync + 'static,
    {
        self.routes.insert(path, Arc::new(handler));
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Runs one dispatch pass for `req`.
    ///
    /// A request whose url has no registered chain is dropped: nothing is
    /// written and no error is raised.
    pub fn handle_request(&self, req: &Request, res: &mut Response) {
        let Some(chain) = req.url().and_then(|url| self.routes.get(url)) else {
            tracing::debug!(url = ?req.url(), "No route registered, ignoring request");
            return;
        };

        tracing::debug!(
            method = ?req.method(),
            url = ?req.url(),
            handlers = chain.len(),
            "Dispatching request"
        );

        let mut next = Next::new(chain, req);
        next.proceed(res);
    }

    /// Binds `addr`, reports the bound address through `on_listening` and
    /// serves until the server is shut down.
    pub async fn listen<F>(self, addr: &str, on_listening: F) -> anyhow::Result<()>
    where
        F: FnOnce(SocketAddr),
    {
        let server = Server::bind(self, addr).await?;
        on_listening(server.local_addr()?);
        server.run().await
    }
}

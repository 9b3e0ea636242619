use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::info;

use crate::app::Application;
use crate::config::ServerConfig;
use crate::http::connection::{Connection, ConnectionOptions};

/// A bound listener serving one [`Application`].
pub struct Server {
    listener: TcpListener,
    app: Arc<Application>,
    options: ConnectionOptions,
    shutdown: Arc<Notify>,
}

/// Stops a running [`Server`] and releases its listening socket.
#[derive(Clone)]
pub struct ShutdownHandle {
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        // notify_one stores a permit, so a shutdown before run() still lands.
        self.notify.notify_one();
    }
}

impl Server {
    pub async fn bind(app: Application, addr: &str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        Ok(Self {
            listener,
            app: Arc::new(app),
            options: ConnectionOptions::default(),
            shutdown: Arc::new(Notify::new()),
        })
    }

    pub async fn from_config(app: Application, cfg: &ServerConfig) -> anyhow::Result<Self> {
        let server = Self::bind(app, &cfg.listen_addr).await?;
        Ok(server.with_options(ConnectionOptions {
            header_delimiter: cfg.header_delimiter,
            max_header_bytes: cfg.max_header_bytes,
        }))
    }

    pub fn with_options(mut self, options: ConnectionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            notify: Arc::clone(&self.shutdown),
        }
    }

    /// Accepts connections until shut down. Each connection gets its own
    /// task and parser; connections already accepted keep running after the
    /// listener is closed.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = tokio::select! {
                accepted = self.listener.accept() => accepted?,
                _ = self.shutdown.notified() => {
                    info!("Shutting down listener");
                    break;
                }
            };
            info!("Accepted connection from {}", peer);

            let app = Arc::clone(&self.app);
            let options = self.options;
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, peer, app, options);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }

        Ok(())
    }
}

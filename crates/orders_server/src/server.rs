//! Server lifecycle: binding, startup logging, and request serving.

use crate::config::ServerConfig;
use crate::routes::{build_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// The dataset file server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Creates a server for the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// The address the server will bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Binds the configured address and serves requests until shutdown.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        self.run_with_listener(listener).await
    }

    /// Serves requests on an already-bound listener.
    ///
    /// Useful in tests, where binding port 0 yields an ephemeral port.
    pub async fn run_with_listener(self, listener: TcpListener) -> std::io::Result<()> {
        let local_addr = listener.local_addr()?;
        info!(
            addr = %local_addr,
            root = %self.config.root_dir.display(),
            version = crate::VERSION,
            "serving dataset directory"
        );

        let state = AppState::new(self.config);
        let router = build_router(state);
        axum::serve(listener, router).await
    }
}

/// Binds an ephemeral local port and returns the listener with its address.
#[doc(hidden)]
pub async fn bind_ephemeral() -> std::io::Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok((listener, addr))
}

//! Web server for corkboard.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::{CorkboardError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Configured router.
    router: Router,
}

impl WebServer {
    /// Create a new web server from the server configuration.
    pub fn new(config: &ServerConfig, app_state: Arc<AppState>) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| CorkboardError::Config(format!("invalid server address: {e}")))?;

        let router = create_router(app_state, &config.cors_origins);

        Ok(Self { addr, router })
    }

    /// Bind the listener and serve until the process exits.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        info!("Web server listening on {}", self.addr);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

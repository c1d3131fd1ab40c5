//! Form server.

use axum::Router;
use seoreport_core::AppConfig;
use tokio::net::TcpListener;

use crate::routes;
use crate::state::AppState;
use crate::{Error, Result};

/// The SEO report form server.
#[derive(Debug, Clone)]
pub struct Server {
    state: AppState,
}

impl Server {
    /// Creates a server from validated configuration.
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            state: AppState::new(config)?,
        })
    }

    /// Shared state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The router, for serving or for in-process tests.
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.state.config().server.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::Bind {
                addr: addr.clone(),
                source,
            })?;
        tracing::info!(%addr, "listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Error::Serve)?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

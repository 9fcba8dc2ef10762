//! HTTP server exposing the pipeline analysis endpoint

pub mod router;
pub mod handlers;

use anyhow::Context;
use axum::http::HeaderValue;
use tokio::net::TcpListener;

/// Server configuration, normally filled in from CLI flags.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API with credentials.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// The pipecheck HTTP server. Holds no request state: every analysis run is
/// independent, so concurrent requests need no coordination.
pub struct PipecheckServer {
    config: ServerConfig,
}

impl PipecheckServer {
    pub fn new(config: ServerConfig) -> Self {
        PipecheckServer { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> anyhow::Result<()> {
        let origin: HeaderValue = self
            .config
            .allowed_origin
            .parse()
            .with_context(|| format!("invalid CORS origin: {}", self.config.allowed_origin))?;
        let app = router::create_router(origin);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app).await.context("server error")
    }
}

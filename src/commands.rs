//! CLI command implementations

use pipecheck_server::{PipecheckServer, ServerConfig};

pub async fn serve(host: String, port: u16, allowed_origin: String) -> anyhow::Result<()> {
    tracing::info!("Starting pipecheck server on {}:{}", host, port);

    let config = ServerConfig {
        host,
        port,
        allowed_origin,
    };
    PipecheckServer::new(config).start().await
}

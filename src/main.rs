use anyhow::Context;
use dashboard_auth::{shared::LoggingUtils, AppConfig, HttpServer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    LoggingUtils::initialize(&config.logging).context("Failed to initialize logging")?;

    info!("Starting dashboard auth server...");

    let server = HttpServer::new(config)
        .await
        .context("Failed to initialize server")?;

    info!("Server starting on {}", server.config().server_address());

    server.run().await.context("Server error")?;

    Ok(())
}

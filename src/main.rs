use anyhow::{Context, Result};
use pool_agents::http::{self, AppState};
use pool_agents::upload::PrivateFileService;
use pool_agents::ServerConfig;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = ServerConfig::from_env().context("failed to load server configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pool_agents={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }
    tracing::info!(
        "Configuration loaded: port={}, upload_dir={}",
        config.port,
        config.upload_dir
    );

    let files = PrivateFileService::from_config(&config);
    let state = AppState::new(Arc::new(files));

    http::run_http_server(state, config.port).await?;
    tracing::info!("Upload server shutting down");
    Ok(())
}

use std::sync::Arc;

use alerts::DiscordWebhook;
use monitor::api;
use monitor::config::MonitorConfig;
use monitor::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = MonitorConfig::from_env()?;

    let chain = chain_client::connect(&config.rpc_url, config.sequencer_address)?;
    let alerts = DiscordWebhook::from_env();

    let state = Arc::new(AppState { chain, alerts });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, sequencer = %config.sequencer_address, "monitor listening");
    axum::serve(listener, app).await?;

    Ok(())
}

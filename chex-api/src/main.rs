use std::sync::Arc;

use chex_api::{build_router, ServerConfig};
use chex_core::pipeline::{FactCheckPipeline, GeminiClient, SerpApiSearcher};
use chex_core::ChexConfig;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "chex_api=info,chex_core=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ChexConfig::from_env();
    for key in config.suspicious_keys() {
        warn!(key, "API key is missing or a placeholder; calls that need it will degrade");
    }

    let pipeline = FactCheckPipeline::with_config(
        SerpApiSearcher::new(&config)?,
        GeminiClient::new(&config)?,
        &config,
    );
    info!(
        model = %config.gemini_model,
        empty_context = ?config.empty_context_policy,
        "pipeline ready"
    );

    let server = ServerConfig::from_env()?;
    let app = build_router(Arc::new(pipeline), &server)?;

    let listener = TcpListener::bind(server.bind_addr).await?;
    info!(addr = %server.bind_addr, origin = %server.allowed_origin, "chex-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

//! Roster service entry point

use std::sync::Arc;

use roster_api::{build_router, AppContext};
use roster_domain::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "loaded .env");
    }

    let config = match roster_infra::config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "no usable configuration source, falling back to defaults");
            Config::default()
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let ctx = Arc::new(AppContext::new(config).await?);
    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "roster api listening");
    axum::serve(listener, app).await?;

    Ok(())
}

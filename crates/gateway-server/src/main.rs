//! HTTP server entry point.
//!
//! Resolves the configuration from the environment, builds the router and
//! serves it on port 8000.

use std::sync::Arc;

use anyhow::Result;
use gateway_config::GatewayConfig;
use gateway_server::{router, ServerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = GatewayConfig::from_env();
    let addr = config.bind_addr.clone();
    info!("Proxying model {}", config.model);

    let app = router(Arc::new(ServerState::new(config)));

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

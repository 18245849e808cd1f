//! Axum router and shared state for the Ollama gateway.
//!
//! The router is built here rather than in `main` so integration tests can
//! drive it directly against stub backends.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use gateway_config::GatewayConfig;
use gateway_network::OllamaClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state accessible from all handlers. Read-only after startup.
pub struct ServerState {
    pub config: GatewayConfig,
    pub ollama: OllamaClient,
}

impl ServerState {
    pub fn new(config: GatewayConfig) -> Self {
        let ollama = OllamaClient::new(&config);
        Self { config, ollama }
    }
}

/// Builds the gateway router with tracing and CORS layers.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/", get(handlers::status::root))
        .route("/status", get(handlers::status::status))
        .route("/generate", post(handlers::generate::generate))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

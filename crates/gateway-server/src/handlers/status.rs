//! Gateway and backend status handlers.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{RootResponse, StatusResponse};
use crate::ServerState;

const GATEWAY_MESSAGE: &str = "Gateway to Ollama";

/// Overall gateway status plus a fresh backend probe.
pub async fn root(State(state): State<Arc<ServerState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: GATEWAY_MESSAGE,
        model: state.config.model.clone(),
        ollama_status: state.ollama.check_health().await,
    })
}

/// Backend probe only.
pub async fn status(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ollama_status: state.ollama.check_health().await,
    })
}

//! Generation proxy handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::dto::{ErrorResponse, GenerateQuery};
use crate::error::AppError;
use crate::ServerState;

/// Forwards `prompt` to the backend and returns its JSON body verbatim.
///
/// An unreachable backend is reported as `{"error": ...}` with a 200 status;
/// only a missing or malformed query string is a client error.
pub async fn generate(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;

    match state.ollama.generate(&query.prompt).await {
        Ok(value) => Ok(Json(value).into_response()),
        Err(e) => {
            warn!("Generation failed: {}", e);
            Ok(Json(ErrorResponse { error: e.to_string() }).into_response())
        }
    }
}

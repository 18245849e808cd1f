//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::dto::ErrorResponse;

/// Request-level errors with HTTP status code mapping.
///
/// Backend failures are not represented here: they are reported in a 200 body.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        debug!("Rejecting request: {}", message);
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

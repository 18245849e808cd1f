//! Data transfer objects for HTTP message serialization.

use gateway_core::HealthReport;
use serde::{Deserialize, Serialize};

// === Status Types ===

/// Response from `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub model: String,
    pub ollama_status: HealthReport,
}

/// Response from `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub ollama_status: HealthReport,
}

// === Generation Types ===

/// Query string of `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub prompt: String,
}

/// Error body, used both for rejected requests and unreachable backends.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

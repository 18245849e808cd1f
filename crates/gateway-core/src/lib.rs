//! Core domain types and error definitions.
//!
//! Shared between the upstream client and the HTTP layer: the health report
//! returned by every liveness probe and the error raised when the inference
//! backend cannot be reached.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while talking to the inference backend.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to contact backend: {0}")]
    Upstream(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

/// Liveness of the inference backend as seen by a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Backend answered with HTTP 200.
    Online,
    /// Backend answered, but with some other status code.
    Error,
    /// Backend could not be reached at all.
    Offline,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Online => "online",
            HealthStatus::Error => "error",
            HealthStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a health probe against the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub details: String,
}

impl HealthReport {
    /// Fixed text reported when the backend answers with HTTP 200.
    pub const ONLINE_DETAILS: &'static str = "Ollama is responding correctly";

    /// Creates a report for a backend that answered with HTTP 200.
    pub fn online() -> Self {
        Self { status: HealthStatus::Online, details: Self::ONLINE_DETAILS.into() }
    }

    /// Creates a report for a backend that answered with an unexpected status code.
    pub fn unexpected(code: u16) -> Self {
        Self { status: HealthStatus::Error, details: format!("unexpected response: {code}") }
    }

    /// Creates a report for a backend that could not be reached.
    pub fn offline(e: impl ToString) -> Self {
        Self { status: HealthStatus::Offline, details: e.to_string() }
    }

    pub fn is_online(&self) -> bool {
        self.status == HealthStatus::Online
    }
}

//! Native Ollama API client used by the gateway.
//!
//! Two calls only: a liveness probe against the bare base URL and a
//! pass-through of `/api/generate`. Each call is a single attempt
//! bounded by its own timeout; failures come back as values, never panics.

use std::error::Error as StdError;
use std::time::Duration;

use gateway_config::GatewayConfig;
use gateway_core::{GatewayError, HealthReport};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

/// Request body for Ollama's /api/generate endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
}

/// Thin wrapper over a shared `reqwest::Client` bound to one backend.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
    health_timeout: Duration,
    generate_timeout: Duration,
}

/// Renders an error with its whole source chain, joined by `": "`.
/// reqwest's own `Display` stops at "error sending request" and hides the cause.
fn error_chain(e: &dyn StdError) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Converts a transport error into a GatewayError::Upstream.
fn upstream_err(e: reqwest::Error) -> GatewayError {
    GatewayError::Upstream(error_chain(&e))
}

impl OllamaClient {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.ollama_url.clone(),
            model: config.model.clone(),
            health_timeout: config.health_timeout,
            generate_timeout: config.generate_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Probes the backend with a GET on its base URL.
    pub async fn check_health(&self) -> HealthReport {
        let result = self
            .http
            .get(&self.base_url)
            .timeout(self.health_timeout)
            .send()
            .await;

        let report = match result {
            Ok(response) if response.status() == StatusCode::OK => HealthReport::online(),
            Ok(response) => HealthReport::unexpected(response.status().as_u16()),
            Err(e) => HealthReport::offline(error_chain(&e)),
        };

        if report.is_online() {
            debug!("Ollama health check: {}", report.status);
        } else {
            warn!("Ollama health check: {} ({})", report.status, report.details);
        }
        report
    }

    /// Sends a prompt to /api/generate and returns the backend's JSON body untouched.
    pub async fn generate(&self, prompt: &str) -> Result<serde_json::Value, GatewayError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let body = GenerateRequest { model: &self.model, prompt };

        debug!("Forwarding prompt ({} bytes) to {}", prompt.len(), url);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .timeout(self.generate_timeout)
            .send()
            .await
            .map_err(upstream_err)?;

        let text = response.text().await.map_err(upstream_err)?;
        let value: serde_json::Value = serde_json::from_str(&text).inspect_err(|e| {
            warn!("Ollama returned a body that is not a single JSON document: {}", e);
        })?;
        Ok(value)
    }
}

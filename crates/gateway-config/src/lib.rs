//! Gateway configuration, resolved once at startup.
//!
//! The only value taken from the environment is the backend base URL. Everything
//! else is fixed for the lifetime of the process and shared read-only.

use std::time::Duration;

use tracing::info;

/// Environment variable holding the backend base URL.
pub const OLLAMA_URL_VAR: &str = "OLLAMA_URL";

/// Base URL used when `OLLAMA_URL` is unset.
pub const DEFAULT_OLLAMA_URL: &str = "http://ollama:11434";

/// Model every generation request is sent to.
pub const MODEL_NAME: &str = "llama2:8b";

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);
const BIND_ADDR: &str = "0.0.0.0:8000";

/// Immutable gateway settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub ollama_url: String,
    pub model: String,
    pub health_timeout: Duration,
    pub generate_timeout: Duration,
    pub bind_addr: String,
}

impl GatewayConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        let config = Self::with_ollama_url(std::env::var(OLLAMA_URL_VAR).ok());
        info!("Using Ollama backend at {}", config.ollama_url);
        config
    }

    /// Builds the configuration for an optional base URL, falling back to the default.
    /// The URL is not validated here; a bad value shows up as an offline backend.
    pub fn with_ollama_url(url: Option<String>) -> Self {
        Self {
            ollama_url: url.unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()),
            ..Self::default()
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: MODEL_NAME.to_string(),
            health_timeout: HEALTH_TIMEOUT,
            generate_timeout: GENERATE_TIMEOUT,
            bind_addr: BIND_ADDR.to_string(),
        }
    }
}

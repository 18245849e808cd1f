//! HTTP client for the Ollama inference backend.

mod ollama;

pub use ollama::{GenerateRequest, OllamaClient};

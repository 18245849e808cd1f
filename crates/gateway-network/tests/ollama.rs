//! OllamaClient against stub backends served on ephemeral ports.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gateway_config::GatewayConfig;
use gateway_core::{GatewayError, HealthStatus};
use gateway_network::OllamaClient;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves `app` on 127.0.0.1 and returns its base URL.
async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Returns a base URL nothing is listening on.
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn client_for(url: String) -> OllamaClient {
    OllamaClient::new(&GatewayConfig::with_ollama_url(Some(url)))
}

async fn echo_generate(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "model": body["model"], "response": body["prompt"] }))
}

#[tokio::test]
async fn healthy_backend_is_online() {
    let url = spawn_stub(Router::new().route("/", get(|| async { "Ollama is running" }))).await;

    let report = client_for(url).check_health().await;

    assert_eq!(report.status, HealthStatus::Online);
    assert_eq!(report.details, "Ollama is responding correctly");
}

#[tokio::test]
async fn unavailable_backend_reports_status_code() {
    let app = Router::new().route("/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let url = spawn_stub(app).await;

    let report = client_for(url).check_health().await;

    assert_eq!(report.status, HealthStatus::Error);
    assert_eq!(report.details, "unexpected response: 503");
}

#[tokio::test]
async fn refused_connection_is_offline() {
    let report = client_for(unreachable_url().await).check_health().await;

    assert_eq!(report.status, HealthStatus::Offline);
    assert!(report.details.to_lowercase().contains("refused"), "{}", report.details);
}

#[tokio::test]
async fn slow_backend_reports_timeout() {
    let app = Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "Ollama is running"
        }),
    );
    let mut config = GatewayConfig::with_ollama_url(Some(spawn_stub(app).await));
    config.health_timeout = Duration::from_millis(200);

    let report = OllamaClient::new(&config).check_health().await;

    assert_eq!(report.status, HealthStatus::Offline);
    assert!(report.details.contains("timed out"), "{}", report.details);
    assert!(!report.details.to_lowercase().contains("refused"));
}

#[tokio::test]
async fn invalid_base_url_is_offline() {
    let report = client_for("not a url".into()).check_health().await;

    assert_eq!(report.status, HealthStatus::Offline);
    assert!(!report.details.is_empty());
}

#[tokio::test]
async fn generate_passes_backend_json_through() {
    let url = spawn_stub(Router::new().route("/api/generate", post(echo_generate))).await;

    let value = client_for(url).generate("hello").await.unwrap();

    assert_eq!(value, json!({ "model": "llama2:8b", "response": "hello" }));
}

#[tokio::test]
async fn generate_forwards_empty_prompt() {
    let url = spawn_stub(Router::new().route("/api/generate", post(echo_generate))).await;

    let value = client_for(format!("{url}/")).generate("").await.unwrap();

    assert_eq!(value["response"], "");
}

#[tokio::test]
async fn generate_passes_backend_error_body_through() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "model not found" }))) }),
    );
    let url = spawn_stub(app).await;

    let value = client_for(url).generate("hello").await.unwrap();

    assert_eq!(value, json!({ "error": "model not found" }));
}

#[tokio::test]
async fn generate_against_unreachable_backend_fails() {
    let err = client_for(unreachable_url().await).generate("hello").await.unwrap_err();

    let GatewayError::Upstream(msg) = &err;
    assert!(msg.to_lowercase().contains("refused"), "{msg}");
    assert!(err.to_string().starts_with("failed to contact backend: "));
}

#[tokio::test]
async fn generate_rejects_streamed_body() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async { "{\"response\":\"he\"}\n{\"response\":\"llo\"}\n" }),
    );
    let url = spawn_stub(app).await;

    assert!(client_for(url).generate("hello").await.is_err());
}

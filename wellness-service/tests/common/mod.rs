//! Shared helpers for wellness-service integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use wellness_service::config::WellnessConfig;
use wellness_service::services::providers::TextProvider;
use wellness_service::startup::Application;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}/{}", self.address, path))
            .header("content-type", "application/json")
            .body(body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/{}", self.address, path))
            .json(body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/{}", self.address, path))
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }
}

async fn spawn(app: Application) -> TestApp {
    let port = app.http_port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}

/// Spawn the application on a random port around the given provider.
pub async fn spawn_app_with_provider(provider: Arc<dyn TextProvider>) -> TestApp {
    let app = Application::build_with_provider(WellnessConfig::for_port(0), provider)
        .await
        .expect("Failed to build application");
    spawn(app).await
}

/// Spawn the application with the real Gemini provider built from `config`.
pub async fn spawn_app_with_config(config: WellnessConfig) -> TestApp {
    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    spawn(app).await
}

/// What the fake Gemini API answers with.
#[derive(Clone)]
pub enum FakeGemini {
    Reply(&'static str),
    Status(StatusCode),
    Garbage,
    Slow(Duration),
}

#[derive(Clone)]
struct FakeState {
    mode: FakeGemini,
}

async fn fake_generate(
    State(state): State<FakeState>,
    Path(call): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(request): Json<Value>,
) -> Response {
    if query.get("key").map(String::as_str) != Some(TEST_API_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"message": "API key not valid"}})),
        )
            .into_response();
    }
    if !call.ends_with(":generateContent") {
        return StatusCode::NOT_FOUND.into_response();
    }
    if request["contents"][0]["parts"][0]["text"].as_str().is_none() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.mode {
        FakeGemini::Reply(text) => Json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 30, "candidatesTokenCount": 10}
        }))
        .into_response(),
        FakeGemini::Status(status) => {
            (status, Json(json!({"error": {"message": "upstream failure"}}))).into_response()
        }
        FakeGemini::Garbage => (StatusCode::OK, "<html>oops</html>").into_response(),
        FakeGemini::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({"candidates": []})).into_response()
        }
    }
}

async fn fake_model(Query(query): Query<HashMap<String, String>>) -> StatusCode {
    if query.get("key").map(String::as_str) == Some(TEST_API_KEY) {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Start a local server that imitates the Gemini REST API and return its
/// `v1beta` base URL.
pub async fn spawn_fake_gemini(mode: FakeGemini) -> String {
    let router = Router::new()
        .route("/v1beta/models/:call", post(fake_generate).get(fake_model))
        .with_state(FakeState { mode });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake Gemini listener");
    let port = listener.local_addr().expect("No local address").port();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://127.0.0.1:{}/v1beta", port)
}

/// Config pointing the real provider at a fake Gemini server.
pub fn config_for_fake(api_base: String) -> WellnessConfig {
    let mut config = WellnessConfig::for_port(0);
    config.google.api_key = Some(TEST_API_KEY.to_string());
    config.google.api_base = api_base;
    config
}

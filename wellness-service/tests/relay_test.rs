//! Integration tests for the /water, /gym and /food relay routes.

mod common;

use common::{spawn_app_with_config, spawn_app_with_provider};
use serde_json::{json, Value};
use std::sync::Arc;
use wellness_service::config::WellnessConfig;
use wellness_service::services::providers::mock::MockTextProvider;
use wellness_service::services::FALLBACK_MESSAGE;

const ROUTES: [&str; 3] = ["water", "gym", "food"];

fn sample_payload(route: &str) -> Value {
    match route {
        "water" => json!({"amount_liters": 2, "time": "2024-06-01T10:00:00"}),
        "gym" => json!({"activity": "running", "duration_minutes": 45}),
        _ => json!({"meal": "lunch", "food": "bread and milk"}),
    }
}

#[tokio::test]
async fn every_route_returns_generated_message() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = spawn_app_with_provider(provider.clone()).await;

    for route in ROUTES {
        let response = app.post_json(route, &sample_payload(route)).await;

        assert_eq!(response.status().as_u16(), 200, "route /{}", route);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        let message = body["message"].as_str().expect("message must be a string");
        assert!(!message.is_empty());
        assert!(message.starts_with("Mock response for: You have the following data:"));
    }

    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn route_selects_prompt_template() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = spawn_app_with_provider(provider.clone()).await;

    app.post_json("water", &sample_payload("water")).await;
    let prompt = provider.last_prompt().expect("provider was not called");
    assert!(prompt.contains("of a person's water intake."));
    assert!(prompt.contains("\"amount_liters\":2"));

    app.post_json("gym", &sample_payload("gym")).await;
    let prompt = provider.last_prompt().expect("provider was not called");
    assert!(prompt.contains("of a person's gym activity."));

    app.post_json("food", &sample_payload("food")).await;
    let prompt = provider.last_prompt().expect("provider was not called");
    assert!(prompt.contains("of a person's food intake."));
    assert!(prompt.contains("bread and milk"));
}

#[tokio::test]
async fn invalid_json_returns_400_with_detail() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = spawn_app_with_provider(provider.clone()).await;

    for route in ROUTES {
        let response = app.post_raw(route, "this is not json").await;

        assert_eq!(response.status().as_u16(), 400, "route /{}", route);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
        assert!(body.get("message").is_none());
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn empty_body_returns_400() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app.post_raw("water", "").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn content_type_is_not_required() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app
        .client
        .post(format!("{}/gym", app.address))
        .header("content-type", "text/plain")
        .body(r#"{"activity": "yoga"}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn non_object_json_is_accepted() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app.post_raw("food", r#"["apple", "banana"]"#).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn missing_credential_returns_fallback_on_every_route() {
    let app = spawn_app_with_config(WellnessConfig::for_port(0)).await;

    for route in ROUTES {
        let response = app.post_json(route, &sample_payload(route)).await;

        assert_eq!(response.status().as_u16(), 200, "route /{}", route);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["message"], FALLBACK_MESSAGE);
    }
}

#[tokio::test]
async fn provider_failure_returns_fallback() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::failing("quota exceeded"))).await;

    let response = app.post_json("gym", &sample_payload("gym")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"message": FALLBACK_MESSAGE}));
}

#[tokio::test]
async fn get_on_relay_route_is_method_not_allowed() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app.get("water").await;

    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn unknown_category_route_is_not_found() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app.post_json("sleep", &json!({"hours": 8})).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app
        .client
        .post(format!("{}/water", app.address))
        .header("x-request-id", "abc-123")
        .json(&sample_payload("water"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::echo())).await;

    let response = app
        .client
        .post(format!("{}/food", app.address))
        .header("origin", "https://example.com")
        .json(&sample_payload("food"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

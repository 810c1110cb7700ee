use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

use crate::models::{Category, MessageResponse};
use crate::startup::AppState;

/// Parse any JSON value; the body's shape is not validated.
fn parse_payload(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))
}

async fn relay(
    state: &AppState,
    category: Category,
    body: &Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    let payload = parse_payload(body)?;
    let message = state.relay.message_for(category, &payload).await;
    Ok(Json(MessageResponse::new(message)))
}

#[tracing::instrument(skip(state, body))]
pub async fn water(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    relay(&state, Category::Water, &body).await
}

#[tracing::instrument(skip(state, body))]
pub async fn gym(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    relay(&state, Category::Gym, &body).await
}

#[tracing::instrument(skip(state, body))]
pub async fn food(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    relay(&state, Category::Food, &body).await
}

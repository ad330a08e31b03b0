//! Conversation endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::config::LimitsConfig;
use crate::server::error::ApiError;
use crate::server::extract::{
    IdPath,
    ValidJson,
};
use crate::server::validation::{
    Validate,
    check_messages,
};
use crate::state::AppState;
use crate::types::{
    Conversation,
    NewConversation,
    RecordId,
};

/// Body of `PATCH /api/conversations/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesUpdate {
    /// Replaces the stored list.
    pub messages: Vec<String>,
}

impl Validate for MessagesUpdate {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        check_messages(&self.messages, limits.max_text_length)
    }
}

/// Not-found error for a conversation id.
fn not_found(id: RecordId) -> ApiError {
    ApiError::not_found(format!("Conversation {id} not found"))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Conversation>> {
    Json(state.conversations.lock().await.list())
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new): ValidJson<NewConversation>,
) -> (StatusCode, Json<Conversation>) {
    (StatusCode::CREATED, Json(state.conversations.lock().await.create(new)))
}

pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Conversation>, ApiError> {
    state.conversations.lock().await.get(id).map(Json).ok_or_else(|| not_found(id))
}

pub async fn update_messages(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(update): ValidJson<MessagesUpdate>,
) -> Result<Json<Conversation>, ApiError> {
    state
        .conversations
        .lock()
        .await
        .update_messages(id, update.messages)
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    if state.conversations.lock().await.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

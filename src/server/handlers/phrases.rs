//! Phrasebook endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::extract::{
    IdPath,
    ValidJson,
    ValidQuery,
};
use crate::state::AppState;
use crate::types::{
    NewSavedPhrase,
    SavedPhrase,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhraseQuery {
    pub category: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PhraseQuery>,
) -> Json<Vec<SavedPhrase>> {
    Json(state.saved_phrases.lock().await.list(query.category.as_deref()))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new): ValidJson<NewSavedPhrase>,
) -> (StatusCode, Json<SavedPhrase>) {
    (StatusCode::CREATED, Json(state.saved_phrases.lock().await.create(new)))
}

pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<SavedPhrase>, ApiError> {
    state
        .saved_phrases
        .lock()
        .await
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Saved phrase {id} not found")))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    if state.saved_phrases.lock().await.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Saved phrase {id} not found")))
    }
}

//! Translation history endpoints.

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
use crate::store::{
    DEFAULT_PAGE_SIZE,
    Window,
};
use crate::types::{
    NewTranslation,
    RecordId,
    TranslationPatch,
    TranslationRecord,
};

/// `?limit=&page=&userId=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub limit: Option<usize>,
    /// 1-based; pages are `limit` records long.
    pub page: Option<usize>,
    pub user_id: Option<String>,
}

impl ListQuery {
    /// Listing window. Rejects `limit=0` and `page=0`.
    fn window(&self, state: &AppState) -> Result<Window, ApiError> {
        if self.limit == Some(0) {
            return Err(ApiError::validation("limit must be a positive integer"));
        }
        let limit = state.list_limit(self.limit);
        match self.page {
            None => Ok(Window::first(limit)),
            Some(page) => Window::page(page, limit.unwrap_or(DEFAULT_PAGE_SIZE))
                .ok_or_else(|| ApiError::validation("page must be a positive integer")),
        }
    }
}

/// Not-found error for a translation id.
fn not_found(id: RecordId) -> ApiError {
    ApiError::not_found(format!("Translation {id} not found"))
}

pub async fn list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> Result<Json<Vec<TranslationRecord>>, ApiError> {
    let window = query.window(&state)?;
    let records = state.translations.lock().await.list(query.user_id.as_deref(), window);
    Ok(Json(records))
}

pub async fn list_saved(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> Result<Json<Vec<TranslationRecord>>, ApiError> {
    let window = query.window(&state)?;
    let records = state.translations.lock().await.list_saved(query.user_id.as_deref(), window);
    Ok(Json(records))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(new): ValidJson<NewTranslation>,
) -> (StatusCode, Json<TranslationRecord>) {
    let record = state.translations.lock().await.create(new);
    (StatusCode::CREATED, Json(record))
}

pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<TranslationRecord>, ApiError> {
    state.translations.lock().await.get(id).map(Json).ok_or_else(|| not_found(id))
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(patch): ValidJson<TranslationPatch>,
) -> Result<Json<TranslationRecord>, ApiError> {
    state.translations.lock().await.update(id, patch).map(Json).ok_or_else(|| not_found(id))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    if state.translations.lock().await.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

pub async fn save(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<TranslationRecord>, ApiError> {
    state.translations.lock().await.save(id).map(Json).ok_or_else(|| not_found(id))
}

pub async fn unsave(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<TranslationRecord>, ApiError> {
    state.translations.lock().await.unsave(id).map(Json).ok_or_else(|| not_found(id))
}

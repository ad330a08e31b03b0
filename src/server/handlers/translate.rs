//! `/api/translate` and `/api/detect-language`.

use axum::Json;
use axum::extract::State;
use serde::{
    Deserialize,
    Serialize,
};

use crate::config::LimitsConfig;
use crate::server::error::ApiError;
use crate::server::extract::ValidJson;
use crate::server::validation::{
    Validate,
    check_language_code,
    check_text,
};
use crate::service::{
    AUTO_SOURCE,
    DetectionOutcome,
    TranslationOutcome,
};
use crate::state::AppState;
use crate::types::{
    NewTranslation,
    TranslationRecord,
};

/// Body of `POST /api/translate`. `from`/`to` are accepted as aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    /// Defaults to `"auto"`.
    #[serde(default, alias = "from")]
    pub source_language: Option<String>,
    #[serde(alias = "to")]
    pub target_language: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Validate for TranslateRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        check_text("text", &self.text, limits.max_text_length)?;
        if let Some(source) = &self.source_language {
            check_language_code("sourceLanguage", source)?;
        }
        check_language_code("targetLanguage", &self.target_language)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[serde(flatten)]
    pub outcome: TranslationOutcome,
    /// The stored history record.
    pub translation: TranslationRecord,
}

/// Translates, then records the result. Nothing is stored when translation fails.
pub async fn translate(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let source = request.source_language.as_deref().unwrap_or(AUTO_SOURCE);
    tracing::debug!(source, target = %request.target_language, "Translate request");

    let outcome = state.service.translate(&request.text, source, &request.target_language).await?;

    let record = state.translations.lock().await.create(NewTranslation {
        user_id: request.user_id,
        source_text: request.text,
        translated_text: outcome.translated_text.clone(),
        source_language: outcome.source_language.clone(),
        target_language: outcome.target_language.clone(),
        confidence: outcome.confidence,
        is_saved: false,
    });

    Ok(Json(TranslateResponse { outcome, translation: record }))
}

/// Body of `POST /api/detect-language`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

impl Validate for DetectRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        check_text("text", &self.text, limits.max_detect_length)
    }
}

pub async fn detect_language(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<DetectRequest>,
) -> Result<Json<DetectionOutcome>, ApiError> {
    Ok(Json(state.service.detect(&request.text).await?))
}

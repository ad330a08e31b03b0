//! Catalog and offline-language endpoints.

use axum::Json;
use axum::extract::{
    Path,
    State,
};
use axum::http::StatusCode;
use serde::{
    Deserialize,
    Serialize,
};

use crate::config::LimitsConfig;
use crate::language::{
    LanguageCategory,
    LanguageInfo,
    catalog,
};
use crate::server::error::ApiError;
use crate::server::extract::{
    ValidJson,
    ValidQuery,
};
use crate::server::validation::{
    Validate,
    check_language_code,
};
use crate::state::AppState;
use crate::types::{
    DownloadedLanguage,
    NewDownloadedLanguage,
};

/// `?category=&q=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Catalog entry plus whether it has been marked downloaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    #[serde(flatten)]
    pub info: LanguageInfo,
    pub offline_available: bool,
}

pub async fn list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<CatalogQuery>,
) -> Result<Json<Vec<LanguageEntry>>, ApiError> {
    let category = match query.category.as_deref().filter(|label| !label.trim().is_empty()) {
        Some(label) => Some(
            LanguageCategory::parse(label)
                .ok_or_else(|| ApiError::validation(format!("Unknown category '{label}'")))?,
        ),
        None => None,
    };
    let needle = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let mut languages: Vec<&'static LanguageInfo> = match needle {
        Some(needle) => catalog::search(needle),
        None => catalog::all().iter().collect(),
    };
    if let Some(category) = category {
        languages.retain(|info| info.category == category);
    }

    let entries: Vec<LanguageEntry> = {
        let downloads = state.downloads.lock().await;
        languages
            .into_iter()
            .map(|info| LanguageEntry { info: *info, offline_available: downloads.contains(info.code) })
            .collect()
    };
    Ok(Json(entries))
}

pub async fn get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LanguageEntry>, ApiError> {
    let info = catalog::find(&code)
        .ok_or_else(|| ApiError::not_found(format!("Language '{code}' not found")))?;
    let offline_available = state.downloads.lock().await.contains(info.code);
    Ok(Json(LanguageEntry { info: *info, offline_available }))
}

/// Body of the download endpoints. A missing name is taken from the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub language_code: String,
    #[serde(default)]
    pub language_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Validate for DownloadRequest {
    fn validate(&self, _limits: &LimitsConfig) -> Result<(), ApiError> {
        check_language_code("languageCode", &self.language_code)?;
        if self.language_name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ApiError::validation("languageName must not be blank"));
        }
        Ok(())
    }
}

impl DownloadRequest {
    /// Resolves the display name and builds the store input.
    fn into_new(self) -> Result<NewDownloadedLanguage, ApiError> {
        let language_name = match self.language_name {
            Some(name) => name.trim().to_string(),
            None => catalog::find(&self.language_code)
                .map(|info| info.name.to_string())
                .ok_or_else(|| {
                    ApiError::validation(format!(
                        "languageName is required for unknown language '{}'",
                        self.language_code
                    ))
                })?,
        };
        Ok(NewDownloadedLanguage {
            language_code: self.language_code.trim().to_string(),
            language_name,
            version: self.version,
        })
    }
}

/// 201 for a new record, 200 when the language was already downloaded.
pub async fn download(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<DownloadRequest>,
) -> Result<(StatusCode, Json<DownloadedLanguage>), ApiError> {
    let new = request.into_new()?;
    let (language, created) = state.downloads.lock().await.download(new);
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(language)))
}

pub async fn downloaded(State(state): State<AppState>) -> Json<Vec<DownloadedLanguage>> {
    Json(state.downloads.lock().await.list())
}

pub async fn remove(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.downloads.lock().await.remove(&code) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Language '{code}' is not downloaded")))
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn request(code: &str, name: Option<&str>) -> DownloadRequest {
        DownloadRequest {
            language_code: code.to_string(),
            language_name: name.map(ToString::to_string),
            version: None,
        }
    }

    #[rstest]
    fn name_is_resolved_from_catalog() {
        let new = request("hi", None).into_new();

        assert_that!(new.map(|n| n.language_name), ok(eq("Hindi")));
    }

    #[rstest]
    fn explicit_name_wins() {
        let new = request("hi", Some(" Hindi (offline) ")).into_new();

        assert_that!(new.map(|n| n.language_name), ok(eq("Hindi (offline)")));
    }

    #[rstest]
    fn unknown_code_without_name_is_rejected() {
        assert_that!(request("xx", None).into_new(), err(anything()));
    }

    #[rstest]
    fn blank_name_fails_validation() {
        assert_that!(request("hi", Some("  ")).validate(&LimitsConfig::default()), err(anything()));
    }
}

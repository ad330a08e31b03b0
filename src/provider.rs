//! External translation providers.

/// Google Cloud Translation v2 client
mod google;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
pub use google::GoogleTranslateProvider;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Failure talking to a translation provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No credential configured. Raised before any request is sent.
    #[error("Translation provider credential is not configured (expected in {variable})")]
    MissingCredential { variable: String },

    #[error("Translation provider did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Translation provider request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Translation provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected translation provider response: {0}")]
    Decode(String),
}

/// Provider answer to a translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTranslation {
    pub translated_text: String,
    /// Set when the provider identified the source language itself.
    pub detected_source_language: Option<String>,
}

/// Provider answer to a detection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDetection {
    pub language: String,
    /// 0–100
    pub confidence: u8,
}

/// A remote text translation and language identification service.
#[async_trait]
pub trait TranslationProvider: Send + Sync + fmt::Debug {
    /// Engine name reported to clients.
    fn name(&self) -> &'static str;

    /// Translates `text`. `source` may be `"auto"` to let the provider detect it.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<ProviderTranslation, ProviderError>;

    async fn detect(&self, text: &str) -> Result<ProviderDetection, ProviderError>;
}

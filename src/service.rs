//! Chooses between the external provider and the dictionary translator.
//!
//! A provider failure other than a missing credential is answered by the dictionary
//! translator (or the heuristic detector) when `fallback_on_error` is set. A missing
//! credential is a configuration problem and is always reported.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::{
    ProviderConfig,
    ProviderKind,
};
use crate::provider::{
    GoogleTranslateProvider,
    ProviderError,
    TranslationProvider,
};
use crate::translator::FallbackTranslator;

/// Engine name reported for dictionary/heuristic results.
pub const HEURISTIC_ENGINE: &str = "heuristic";

/// Source code meaning "detect it".
pub const AUTO_SOURCE: &str = "auto";

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The provider cannot be used as configured.
    #[error("Translation service is not configured: {0}")]
    Configuration(#[source] ProviderError),

    /// The provider failed and no fallback was allowed.
    #[error("Translation failed: {0}")]
    External(#[source] ProviderError),
}

/// Result of a translation, whichever engine produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    pub translated_text: String,
    /// Declared source, or the detected one when `"auto"` was requested.
    pub source_language: String,
    pub target_language: String,
    pub detected_source_language: Option<String>,
    /// 0–100 for dictionary results; providers report none.
    pub confidence: Option<u8>,
    pub engine: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionOutcome {
    pub language: String,
    pub confidence: u8,
    pub engine: &'static str,
}

/// Translation and detection front door.
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// External provider; `None` means dictionary only
    provider: Option<Arc<dyn TranslationProvider>>,
    /// Dictionary translator used directly or as fallback
    fallback: FallbackTranslator<'static>,
    /// Whether provider failures are answered by the fallback
    fallback_on_error: bool,
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl TranslationService {
    /// Dictionary translation and heuristic detection only.
    #[must_use]
    pub fn heuristic() -> Self {
        Self { provider: None, fallback: FallbackTranslator::default(), fallback_on_error: true }
    }

    #[must_use]
    pub fn with_provider(provider: Arc<dyn TranslationProvider>, fallback_on_error: bool) -> Self {
        Self { provider: Some(provider), fallback: FallbackTranslator::default(), fallback_on_error }
    }

    /// Builds the service described by provider settings.
    ///
    /// # Errors
    /// The provider client cannot be constructed.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        match config.kind {
            ProviderKind::Heuristic => Ok(Self::heuristic()),
            ProviderKind::Google => {
                let provider = GoogleTranslateProvider::new(config)?;
                Ok(Self::with_provider(Arc::new(provider), config.fallback_on_error))
            }
        }
    }

    /// Name of the primary engine.
    #[must_use]
    pub fn engine(&self) -> &'static str {
        self.provider.as_ref().map_or(HEURISTIC_ENGINE, |provider| provider.name())
    }

    /// Translates `text` from `source` (or [`AUTO_SOURCE`]) to `target`.
    ///
    /// # Errors
    /// - [`ServiceError::Configuration`]: provider credential missing
    /// - [`ServiceError::External`]: provider failed and fallback is disabled
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslationOutcome, ServiceError> {
        if let Some(provider) = &self.provider {
            match provider.translate(text, source, target).await {
                Ok(translation) => {
                    let source_language = if source == AUTO_SOURCE {
                        translation.detected_source_language.clone().unwrap_or_else(|| source.to_string())
                    } else {
                        source.to_string()
                    };
                    return Ok(TranslationOutcome {
                        translated_text: translation.translated_text,
                        source_language,
                        target_language: target.to_string(),
                        detected_source_language: translation.detected_source_language,
                        confidence: None,
                        engine: provider.name(),
                    });
                }
                Err(error) => self.recover(error)?,
            }
        }

        Ok(self.translate_offline(text, source, target))
    }

    /// Identifies the language of `text`.
    ///
    /// # Errors
    /// Same policy as [`translate`](Self::translate).
    pub async fn detect(&self, text: &str) -> Result<DetectionOutcome, ServiceError> {
        if let Some(provider) = &self.provider {
            match provider.detect(text).await {
                Ok(detection) => {
                    return Ok(DetectionOutcome {
                        language: detection.language,
                        confidence: detection.confidence,
                        engine: provider.name(),
                    });
                }
                Err(error) => self.recover(error)?,
            }
        }

        let detection = self.fallback.detector().detect_with_confidence(text);
        Ok(DetectionOutcome {
            language: detection.language.to_string(),
            confidence: detection.confidence,
            engine: HEURISTIC_ENGINE,
        })
    }

    /// Dictionary translation of `text`.
    fn translate_offline(&self, text: &str, source: &str, target: &str) -> TranslationOutcome {
        let detector = self.fallback.detector();
        let declared = if source == AUTO_SOURCE { detector.detect(text) } else { source };
        let translation = self.fallback.translate_detailed(text, declared, target);
        tracing::debug!(kind = ?translation.kind, target, "Dictionary translation");

        TranslationOutcome {
            translated_text: translation.text,
            source_language: declared.to_string(),
            target_language: target.to_string(),
            detected_source_language: Some(translation.detected_source.to_string()),
            confidence: Some(translation.kind.confidence()),
            engine: HEURISTIC_ENGINE,
        }
    }

    /// Decides whether a provider failure may be answered by the fallback.
    fn recover(&self, error: ProviderError) -> Result<(), ServiceError> {
        match error {
            ProviderError::MissingCredential { .. } => {
                tracing::error!("{error}");
                Err(ServiceError::Configuration(error))
            }
            error if self.fallback_on_error => {
                tracing::warn!("Provider failed, using dictionary fallback: {error}");
                Ok(())
            }
            error => {
                tracing::error!("{error}");
                Err(ServiceError::External(error))
            }
        }
    }
}

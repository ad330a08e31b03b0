//! Request body checks run by [`ValidJson`](super::extract::ValidJson).

use super::error::ApiError;
use crate::config::LimitsConfig;
use crate::types::{
    NewConversation,
    NewSavedPhrase,
    NewTranslation,
    TranslationPatch,
};

/// Longest accepted language code (`zh-Hant-TW` fits).
const MAX_CODE_LENGTH: usize = 10;

/// Shape checks beyond what deserialization enforces.
pub trait Validate {
    /// # Errors
    /// [`ApiError::Validation`] naming the first offending field.
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError>;
}

/// Non-blank text of at most `max` characters.
pub(super) fn check_text(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    let length = value.chars().count();
    if length > max {
        return Err(ApiError::validation(format!(
            "{field} is too long ({length} characters, maximum {max})"
        )));
    }
    Ok(())
}

/// Language code: 2–10 ASCII letters, digits, `-` or `_`.
pub(super) fn check_language_code(field: &str, value: &str) -> Result<(), ApiError> {
    let valid_chars = value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !(2..=MAX_CODE_LENGTH).contains(&value.len()) || !valid_chars {
        return Err(ApiError::validation(format!("{field} must be a language code such as \"en\"")));
    }
    Ok(())
}

/// Every message at most `max` characters. Empty messages are allowed.
pub(super) fn check_messages(messages: &[String], max: usize) -> Result<(), ApiError> {
    match messages.iter().position(|message| message.chars().count() > max) {
        Some(index) => {
            Err(ApiError::validation(format!("messages[{index}] is longer than {max} characters")))
        }
        None => Ok(()),
    }
}

/// Confidence percentage.
fn check_confidence(value: Option<u8>) -> Result<(), ApiError> {
    match value {
        Some(confidence) if confidence > 100 => {
            Err(ApiError::validation("confidence must be between 0 and 100"))
        }
        _ => Ok(()),
    }
}

impl Validate for NewTranslation {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        check_text("sourceText", &self.source_text, limits.max_text_length)?;
        check_language_code("sourceLanguage", &self.source_language)?;
        check_language_code("targetLanguage", &self.target_language)?;
        check_confidence(self.confidence)
    }
}

impl Validate for TranslationPatch {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        if self.is_empty() {
            return Err(ApiError::validation("No fields to update"));
        }
        if let Some(text) = &self.source_text {
            check_text("sourceText", text, limits.max_text_length)?;
        }
        if let Some(code) = &self.source_language {
            check_language_code("sourceLanguage", code)?;
        }
        if let Some(code) = &self.target_language {
            check_language_code("targetLanguage", code)?;
        }
        check_confidence(self.confidence)
    }
}

impl Validate for NewSavedPhrase {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        check_text("phrase", &self.phrase, limits.max_text_length)?;
        check_text("translation", &self.translation, limits.max_text_length)?;
        check_language_code("sourceLanguage", &self.source_language)?;
        check_language_code("targetLanguage", &self.target_language)
    }
}

impl Validate for NewConversation {
    fn validate(&self, limits: &LimitsConfig) -> Result<(), ApiError> {
        check_text("participantA", &self.participant_a, limits.max_text_length)?;
        check_text("participantB", &self.participant_b, limits.max_text_length)?;
        check_language_code("languageA", &self.language_a)?;
        check_language_code("languageB", &self.language_b)?;
        check_messages(&self.messages, limits.max_text_length)
    }
}

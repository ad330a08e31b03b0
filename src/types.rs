//! Records held by the in-memory stores and their creation/update payloads.
//!
//! All types serialize in camelCase to match the JSON API.

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Identifier assigned by a store. Positive, increasing, never reused.
pub type RecordId = u64;

/// Version stamped on downloaded languages when the client sends none.
pub const DEFAULT_LANGUAGE_VERSION: &str = "1.0";

/// One translation request and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: RecordId,
    /// Caller-supplied owner. Not authenticated.
    pub user_id: Option<String>,
    pub source_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    /// 0–100 when the engine reports one.
    pub confidence: Option<u8>,
    pub is_saved: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields of a translation record before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTranslation {
    #[serde(default)]
    pub user_id: Option<String>,
    pub source_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub is_saved: bool,
}

/// Partial update of a translation record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationPatch {
    pub source_text: Option<String>,
    pub translated_text: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub confidence: Option<u8>,
    pub is_saved: Option<bool>,
}

impl TranslationPatch {
    /// Returns `true` when the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.source_text.is_none()
            && self.translated_text.is_none()
            && self.source_language.is_none()
            && self.target_language.is_none()
            && self.confidence.is_none()
            && self.is_saved.is_none()
    }

    /// Merges the provided fields over `record`. Id and creation time are never touched.
    pub fn apply(self, record: &mut TranslationRecord) {
        if let Some(source_text) = self.source_text {
            record.source_text = source_text;
        }
        if let Some(translated_text) = self.translated_text {
            record.translated_text = translated_text;
        }
        if let Some(source_language) = self.source_language {
            record.source_language = source_language;
        }
        if let Some(target_language) = self.target_language {
            record.target_language = target_language;
        }
        if let Some(confidence) = self.confidence {
            record.confidence = Some(confidence);
        }
        if let Some(is_saved) = self.is_saved {
            record.is_saved = is_saved;
        }
    }
}

/// An entry of the user's phrasebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPhrase {
    pub id: RecordId,
    pub phrase: String,
    pub translation: String,
    pub source_language: String,
    pub target_language: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedPhrase {
    pub phrase: String,
    pub translation: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A language the client claims to have available offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadedLanguage {
    pub id: RecordId,
    /// Unique within the store.
    pub language_code: String,
    pub language_name: String,
    pub version: String,
    pub downloaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDownloadedLanguage {
    pub language_code: String,
    pub language_name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// A two-party conversation translated between two languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: RecordId,
    pub participant_a: String,
    pub participant_b: String,
    pub language_a: String,
    pub language_b: String,
    pub messages: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    pub participant_a: String,
    pub participant_b: String,
    pub language_a: String,
    pub language_b: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[fixture]
    fn record() -> TranslationRecord {
        TranslationRecord {
            id: 7,
            user_id: None,
            source_text: "hello".to_string(),
            translated_text: "bonjour".to_string(),
            source_language: "en".to_string(),
            target_language: "fr".to_string(),
            confidence: Some(95),
            is_saved: false,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[rstest]
    fn patch_merges_provided_fields(mut record: TranslationRecord) {
        let patch = TranslationPatch {
            translated_text: Some("salut".to_string()),
            is_saved: Some(true),
            ..TranslationPatch::default()
        };

        patch.apply(&mut record);

        assert_that!(record.translated_text, eq("salut"));
        assert_that!(record.is_saved, eq(true));
        assert_that!(record.source_text, eq("hello"));
        assert_that!(record.confidence, some(eq(95)));
        assert_that!(record.id, eq(7));
    }

    #[rstest]
    fn patch_ignores_id_and_timestamp_in_json() {
        let patch: TranslationPatch =
            serde_json::from_value(json!({"id": 99, "createdAt": "2020-01-01T00:00:00Z"})).unwrap();

        assert!(patch.is_empty());
    }

    #[rstest]
    fn new_translation_defaults_optional_fields() {
        let new: NewTranslation = serde_json::from_value(json!({
            "sourceText": "hi",
            "translatedText": "salut",
            "sourceLanguage": "en",
            "targetLanguage": "fr"
        }))
        .unwrap();

        assert_that!(new.is_saved, eq(false));
        assert_that!(new.confidence, none());
        assert_that!(new.user_id, none());
    }

    #[rstest]
    fn record_serializes_camel_case(record: TranslationRecord) {
        let json = serde_json::to_value(&record).unwrap();

        assert_that!(json["sourceText"].as_str(), some(eq("hello")));
        assert_that!(json["isSaved"].as_bool(), some(eq(false)));
        assert_that!(json["createdAt"].as_str(), some(eq("1970-01-01T00:00:00Z")));
    }
}

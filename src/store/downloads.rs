//! Offline language claims.

use std::collections::BTreeMap;

use chrono::Utc;

use super::IdSequence;
use crate::types::{
    DEFAULT_LANGUAGE_VERSION,
    DownloadedLanguage,
    NewDownloadedLanguage,
    RecordId,
};

/// Downloaded languages, unique by language code (ASCII case-insensitive).
#[derive(Debug, Default)]
pub struct DownloadedLanguageStore {
    /// Records by id
    languages: BTreeMap<RecordId, DownloadedLanguage>,
    /// Id allocator
    ids: IdSequence,
}

impl DownloadedLanguageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a download. A code that is already present returns the existing record and
    /// `false`; otherwise the new record and `true`.
    pub fn download(&mut self, new: NewDownloadedLanguage) -> (DownloadedLanguage, bool) {
        if let Some(existing) = self.get(&new.language_code) {
            tracing::debug!(code = %existing.language_code, "Language already downloaded");
            return (existing, false);
        }

        let language = DownloadedLanguage {
            id: self.ids.next_id(),
            language_code: new.language_code,
            language_name: new.language_name,
            version: new.version.unwrap_or_else(|| DEFAULT_LANGUAGE_VERSION.to_string()),
            downloaded_at: Utc::now(),
        };
        tracing::info!(code = %language.language_code, "Language marked as downloaded");
        self.languages.insert(language.id, language.clone());
        (language, true)
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<DownloadedLanguage> {
        self.find_id(code).and_then(|id| self.languages.get(&id)).cloned()
    }

    /// All downloaded languages sorted by display name, then code.
    #[must_use]
    pub fn list(&self) -> Vec<DownloadedLanguage> {
        let mut languages: Vec<DownloadedLanguage> = self.languages.values().cloned().collect();
        languages.sort_by(|a, b| {
            a.language_name.cmp(&b.language_name).then_with(|| a.language_code.cmp(&b.language_code))
        });
        languages
    }

    /// Removes the record for `code`. Returns `false` when it was not downloaded.
    pub fn remove(&mut self, code: &str) -> bool {
        // A lookup that finds nothing by removal time is reported as "not removed".
        self.find_id(code).and_then(|id| self.languages.remove(&id)).is_some()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.find_id(code).is_some()
    }

    /// Id of the record with `code`.
    fn find_id(&self, code: &str) -> Option<RecordId> {
        let code = code.trim();
        self.languages
            .values()
            .find(|language| language.language_code.eq_ignore_ascii_case(code))
            .map(|language| language.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn new_language(code: &str, name: &str) -> NewDownloadedLanguage {
        NewDownloadedLanguage {
            language_code: code.to_string(),
            language_name: name.to_string(),
            version: None,
        }
    }

    #[rstest]
    fn download_is_idempotent_on_code() {
        let mut store = DownloadedLanguageStore::new();

        let (first, created) = store.download(new_language("fr", "French"));
        assert!(created);
        assert_that!(first.version, eq(DEFAULT_LANGUAGE_VERSION));

        let (second, created) = store.download(new_language("FR", "Français"));
        assert!(!created);
        assert_that!(second, eq(&first));
        assert_that!(store.list().len(), eq(1));
    }

    #[rstest]
    fn list_is_sorted_by_name() {
        let mut store = DownloadedLanguageStore::new();
        store.download(new_language("hi", "Hindi"));
        store.download(new_language("de", "German"));
        store.download(new_language("ar", "Arabic"));

        let names: Vec<String> =
            store.list().into_iter().map(|language| language.language_name).collect();

        assert_that!(names, elements_are![eq("Arabic"), eq("German"), eq("Hindi")]);
    }

    #[rstest]
    fn remove_reports_presence() {
        let mut store = DownloadedLanguageStore::new();
        store.download(new_language("ja", "Japanese"));

        assert!(store.contains("ja"));
        assert!(store.remove("ja"));
        assert!(!store.remove("ja"));
        assert_that!(store.get("ja"), none());
    }

    #[rstest]
    fn explicit_version_is_kept() {
        let mut store = DownloadedLanguageStore::new();
        let (language, _) = store.download(NewDownloadedLanguage {
            version: Some("2.1".to_string()),
            ..new_language("ko", "Korean")
        });

        assert_that!(language.version, eq("2.1"));
    }
}

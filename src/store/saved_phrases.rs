//! Phrasebook store.

use std::collections::BTreeMap;

use chrono::Utc;

use super::{
    IdSequence,
    Window,
    newest_first,
};
use crate::types::{
    NewSavedPhrase,
    RecordId,
    SavedPhrase,
};

/// Explicitly saved phrases, independent of translation history.
#[derive(Debug, Default)]
pub struct SavedPhraseStore {
    /// Phrases by id
    phrases: BTreeMap<RecordId, SavedPhrase>,
    /// Id allocator
    ids: IdSequence,
}

impl SavedPhraseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, new: NewSavedPhrase) -> SavedPhrase {
        let phrase = SavedPhrase {
            id: self.ids.next_id(),
            phrase: new.phrase,
            translation: new.translation,
            source_language: new.source_language,
            target_language: new.target_language,
            category: new.category,
            created_at: Utc::now(),
        };
        self.phrases.insert(phrase.id, phrase.clone());
        phrase
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<SavedPhrase> {
        self.phrases.get(&id).cloned()
    }

    /// Phrases newest first, optionally only those in `category`.
    #[must_use]
    pub fn list(&self, category: Option<&str>) -> Vec<SavedPhrase> {
        newest_first(
            self.phrases.values().filter(|phrase| {
                category.is_none_or(|category| phrase.category.as_deref() == Some(category))
            }),
            Window::all(),
        )
    }

    pub fn delete(&mut self, id: RecordId) -> bool {
        self.phrases.remove(&id).is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn new_phrase(phrase: &str, category: Option<&str>) -> NewSavedPhrase {
        NewSavedPhrase {
            phrase: phrase.to_string(),
            translation: format!("{phrase}!"),
            source_language: "en".to_string(),
            target_language: "es".to_string(),
            category: category.map(str::to_string),
        }
    }

    #[rstest]
    fn list_filters_by_category() {
        let mut store = SavedPhraseStore::new();
        store.create(new_phrase("water", Some("travel")));
        store.create(new_phrase("love", None));
        store.create(new_phrase("food", Some("travel")));

        let travel: Vec<String> =
            store.list(Some("travel")).into_iter().map(|phrase| phrase.phrase).collect();

        assert_that!(travel, elements_are![eq("food"), eq("water")]);
        assert_that!(store.list(None).len(), eq(3));
    }

    #[rstest]
    fn delete_removes_phrase() {
        let mut store = SavedPhraseStore::new();
        let id = store.create(new_phrase("water", None)).id;

        assert!(store.delete(id));
        assert_that!(store.get(id), none());
        assert!(!store.delete(id));
    }
}

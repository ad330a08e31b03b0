//! Translation history store.

use std::collections::BTreeMap;

use chrono::Utc;

use super::{
    IdSequence,
    Window,
    newest_first,
};
use crate::types::{
    NewTranslation,
    RecordId,
    TranslationPatch,
    TranslationRecord,
};

/// In-memory translation records keyed by id.
#[derive(Debug, Default)]
pub struct TranslationStore {
    /// Records by id
    records: BTreeMap<RecordId, TranslationRecord>,
    /// Id allocator
    ids: IdSequence,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new record, assigning the next id and the current time.
    pub fn create(&mut self, new: NewTranslation) -> TranslationRecord {
        let record = TranslationRecord {
            id: self.ids.next_id(),
            user_id: new.user_id,
            source_text: new.source_text,
            translated_text: new.translated_text,
            source_language: new.source_language,
            target_language: new.target_language,
            confidence: new.confidence,
            is_saved: new.is_saved,
            created_at: Utc::now(),
        };
        tracing::debug!(id = record.id, "Stored translation");
        self.records.insert(record.id, record.clone());
        record
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<TranslationRecord> {
        self.records.get(&id).cloned()
    }

    /// Merges `patch` over the record. Returns `None` when the id is unknown.
    pub fn update(&mut self, id: RecordId, patch: TranslationPatch) -> Option<TranslationRecord> {
        let record = self.records.get_mut(&id)?;
        patch.apply(record);
        Some(record.clone())
    }

    /// Removes a record. Returns `false` when nothing was stored under `id`.
    pub fn delete(&mut self, id: RecordId) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Records newest first, optionally restricted to one owner, cut to `window`.
    #[must_use]
    pub fn list(&self, user_id: Option<&str>, window: Window) -> Vec<TranslationRecord> {
        newest_first(self.records.values().filter(|record| owned_by(record, user_id)), window)
    }

    /// Like [`list`](Self::list), restricted to saved records.
    #[must_use]
    pub fn list_saved(&self, user_id: Option<&str>, window: Window) -> Vec<TranslationRecord> {
        newest_first(
            self.records.values().filter(|record| record.is_saved && owned_by(record, user_id)),
            window,
        )
    }

    /// Marks a record as saved. Idempotent.
    pub fn save(&mut self, id: RecordId) -> Option<TranslationRecord> {
        self.set_saved(id, true)
    }

    /// Clears the saved flag. Idempotent.
    pub fn unsave(&mut self, id: RecordId) -> Option<TranslationRecord> {
        self.set_saved(id, false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sets the saved flag on a record.
    fn set_saved(&mut self, id: RecordId, saved: bool) -> Option<TranslationRecord> {
        let record = self.records.get_mut(&id)?;
        record.is_saved = saved;
        Some(record.clone())
    }
}

/// Whether `record` passes the optional owner filter.
fn owned_by(record: &TranslationRecord, user_id: Option<&str>) -> bool {
    user_id.is_none_or(|user_id| record.user_id.as_deref() == Some(user_id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn new_translation(text: &str) -> NewTranslation {
        NewTranslation {
            user_id: None,
            source_text: text.to_string(),
            translated_text: format!("{text}-fr"),
            source_language: "en".to_string(),
            target_language: "fr".to_string(),
            confidence: Some(95),
            is_saved: false,
        }
    }

    #[fixture]
    fn store() -> TranslationStore {
        TranslationStore::new()
    }

    #[rstest]
    fn create_assigns_sequential_ids(mut store: TranslationStore) {
        let first = store.create(new_translation("one"));
        let second = store.create(new_translation("two"));

        assert_that!(first.id, eq(1));
        assert_that!(second.id, eq(2));
        assert_that!(store.get(1), some(eq(&first)));
    }

    #[rstest]
    fn list_with_limit_returns_single_record(mut store: TranslationStore) {
        let record = store.create(new_translation("hello"));

        assert_that!(store.list(None, Window::first(Some(1))), elements_are![eq(&record)]);
    }

    #[rstest]
    fn list_returns_newest_first(mut store: TranslationStore) {
        store.create(new_translation("old"));
        store.create(new_translation("new"));

        let texts: Vec<String> =
            store.list(None, Window::all()).into_iter().map(|record| record.source_text).collect();

        assert_that!(texts, elements_are![eq("new"), eq("old")]);
    }

    #[rstest]
    fn list_pages_from_newest(mut store: TranslationStore) {
        for text in ["one", "two", "three", "four", "five"] {
            store.create(new_translation(text));
        }

        let second_page: Vec<String> = store
            .list(None, Window::page(2, 2).unwrap())
            .into_iter()
            .map(|record| record.source_text)
            .collect();
        let past_end = store.list(None, Window::page(4, 2).unwrap());

        assert_that!(second_page, elements_are![eq("three"), eq("two")]);
        assert!(past_end.is_empty());
    }

    #[rstest]
    fn list_filters_by_owner(mut store: TranslationStore) {
        store.create(NewTranslation { user_id: Some("ana".to_string()), ..new_translation("a") });
        store.create(NewTranslation { user_id: Some("bo".to_string()), ..new_translation("b") });
        store.create(new_translation("anonymous"));

        let owned = store.list(Some("ana"), Window::all());

        assert_that!(owned.len(), eq(1));
        assert_that!(owned[0].source_text, eq("a"));
        assert_that!(store.list(None, Window::all()).len(), eq(3));
    }

    #[rstest]
    fn save_and_unsave_are_idempotent(mut store: TranslationStore) {
        let id = store.create(new_translation("hello")).id;

        assert_that!(store.save(id).unwrap().is_saved, eq(true));
        assert_that!(store.save(id).unwrap().is_saved, eq(true));
        assert_that!(store.list_saved(None, Window::all()).len(), eq(1));

        assert_that!(store.unsave(id).unwrap().is_saved, eq(false));
        assert_that!(store.unsave(id).unwrap().is_saved, eq(false));
        assert!(store.list_saved(None, Window::all()).is_empty());
    }

    #[rstest]
    fn save_unknown_id_is_none(mut store: TranslationStore) {
        assert_that!(store.save(42), none());
        assert_that!(store.unsave(42), none());
    }

    #[rstest]
    fn update_merges_fields(mut store: TranslationStore) {
        let record = store.create(new_translation("hello"));
        let patch =
            TranslationPatch { translated_text: Some("salut".to_string()), ..TranslationPatch::default() };

        let updated = store.update(record.id, patch).unwrap();

        assert_that!(updated.translated_text, eq("salut"));
        assert_that!(updated.created_at, eq(record.created_at));
        assert_that!(store.update(99, TranslationPatch::default()), none());
    }

    #[rstest]
    fn delete_then_get_is_not_found(mut store: TranslationStore) {
        let id = store.create(new_translation("hello")).id;

        assert!(store.delete(id));
        assert_that!(store.get(id), none());
        assert!(!store.delete(id));
    }

    #[rstest]
    fn ids_are_not_reused_after_delete(mut store: TranslationStore) {
        let id = store.create(new_translation("one")).id;
        store.delete(id);

        assert_that!(store.create(new_translation("two")).id, eq(id + 1));
    }
}

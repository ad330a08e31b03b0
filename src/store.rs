//! In-memory record stores.
//!
//! Each store owns its records and its id sequence. Stores are plain structs with `&mut self`
//! mutators; callers that share one across tasks wrap it in a mutex, which also serializes id
//! allocation.

/// Conversations
mod conversations;
/// Offline language claims
mod downloads;
/// Phrasebook entries
mod saved_phrases;
/// Translation history
mod translations;

use chrono::{
    DateTime,
    Utc,
};
pub use conversations::ConversationStore;
pub use downloads::DownloadedLanguageStore;
pub use saved_phrases::SavedPhraseStore;
pub use translations::TranslationStore;

/// Page size used when a page number is requested without a limit.
pub const DEFAULT_PAGE_SIZE: usize = 20;

use crate::types::{
    Conversation,
    RecordId,
    SavedPhrase,
    TranslationRecord,
};

/// Monotonic id allocator starting at 1.
#[derive(Debug, Clone, Copy)]
struct IdSequence {
    /// Id handed out by the next call
    next: RecordId,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Returns a fresh id. Ids are never reused, even after deletion.
    const fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Records with a creation time, listed newest first.
trait Chronological {
    /// Store-assigned id
    fn id(&self) -> RecordId;
    /// Creation time
    fn created_at(&self) -> DateTime<Utc>;
}

impl Chronological for TranslationRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Chronological for SavedPhrase {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Chronological for Conversation {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Slice of a newest-first listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    /// Records skipped from the newest end
    pub offset: usize,
    /// Most records returned; `None` returns the rest
    pub limit: Option<usize>,
}

impl Window {
    /// Every record.
    #[must_use]
    pub const fn all() -> Self {
        Self { offset: 0, limit: None }
    }

    /// The newest `limit` records, or all of them.
    #[must_use]
    pub const fn first(limit: Option<usize>) -> Self {
        Self { offset: 0, limit }
    }

    /// 1-based page of `size` records. `None` for page 0.
    #[must_use]
    pub const fn page(page: usize, size: usize) -> Option<Self> {
        match page.checked_sub(1) {
            Some(skipped) => Some(Self { offset: skipped.saturating_mul(size), limit: Some(size) }),
            None => None,
        }
    }
}

/// Collects `records` newest first and cuts out `window`.
///
/// Equal timestamps are ordered by descending id, so creation order still decides.
fn newest_first<'a, T, I>(records: I, window: Window) -> Vec<T>
where
    T: Chronological + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut records: Vec<&T> = records.into_iter().collect();
    records.sort_by(|a, b| b.created_at().cmp(&a.created_at()).then_with(|| b.id().cmp(&a.id())));
    records
        .into_iter()
        .skip(window.offset)
        .take(window.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn id_sequence_is_monotonic() {
        let mut ids = IdSequence::default();

        assert_that!(ids.next_id(), eq(1));
        assert_that!(ids.next_id(), eq(2));
        assert_that!(ids.next_id(), eq(3));
    }

    #[rstest]
    #[case::first(1, 20, Some(Window { offset: 0, limit: Some(20) }))]
    #[case::third(3, 5, Some(Window { offset: 10, limit: Some(5) }))]
    #[case::zero(0, 20, None)]
    fn page_windows(#[case] page: usize, #[case] size: usize, #[case] expected: Option<Window>) {
        assert_that!(Window::page(page, size), eq(expected));
    }
}

//! Conversation store.

use std::collections::BTreeMap;

use chrono::Utc;

use super::{
    IdSequence,
    Window,
    newest_first,
};
use crate::types::{
    Conversation,
    NewConversation,
    RecordId,
};

/// Two-party conversations with their message logs.
#[derive(Debug, Default)]
pub struct ConversationStore {
    /// Conversations by id
    conversations: BTreeMap<RecordId, Conversation>,
    /// Id allocator
    ids: IdSequence,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, new: NewConversation) -> Conversation {
        let conversation = Conversation {
            id: self.ids.next_id(),
            participant_a: new.participant_a,
            participant_b: new.participant_b,
            language_a: new.language_a,
            language_b: new.language_b,
            messages: new.messages,
            created_at: Utc::now(),
        };
        self.conversations.insert(conversation.id, conversation.clone());
        conversation
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<Conversation> {
        self.conversations.get(&id).cloned()
    }

    #[must_use]
    pub fn list(&self) -> Vec<Conversation> {
        newest_first(self.conversations.values(), Window::all())
    }

    /// Replaces the message list.
    pub fn update_messages(&mut self, id: RecordId, messages: Vec<String>) -> Option<Conversation> {
        let conversation = self.conversations.get_mut(&id)?;
        conversation.messages = messages;
        Some(conversation.clone())
    }

    pub fn delete(&mut self, id: RecordId) -> bool {
        self.conversations.remove(&id).is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn new_conversation() -> NewConversation {
        NewConversation {
            participant_a: "Asha".to_string(),
            participant_b: "Luis".to_string(),
            language_a: "hi".to_string(),
            language_b: "es".to_string(),
            messages: Vec::new(),
        }
    }

    #[rstest]
    fn update_messages_replaces_list() {
        let mut store = ConversationStore::new();
        let id = store.create(new_conversation()).id;

        let updated = store.update_messages(id, vec!["नमस्ते".to_string(), "hola".to_string()]).unwrap();

        assert_that!(updated.messages, elements_are![eq("नमस्ते"), eq("hola")]);
        assert_that!(store.get(id).unwrap().messages.len(), eq(2));
        assert_that!(store.update_messages(id + 1, Vec::new()), none());
    }

    #[rstest]
    fn list_and_delete() {
        let mut store = ConversationStore::new();
        let first = store.create(new_conversation()).id;
        let second = store.create(new_conversation()).id;

        let ids: Vec<RecordId> = store.list().into_iter().map(|c| c.id).collect();
        assert_that!(ids, elements_are![eq(&second), eq(&first)]);

        assert!(store.delete(first));
        assert!(!store.delete(first));
        assert_that!(store.list().len(), eq(1));
    }
}

//! Shared application state handed to every request handler.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::{
    LimitsConfig,
    ServerSettings,
};
use crate::provider::ProviderError;
use crate::service::TranslationService;
use crate::store::{
    ConversationStore,
    DownloadedLanguageStore,
    SavedPhraseStore,
    TranslationStore,
};

/// Stores, translation service and request limits.
///
/// Each store sits behind its own mutex, so handlers touching different stores never wait on
/// each other. No handler holds two store locks at once.
#[derive(Clone)]
pub struct AppState {
    /// Translation history
    pub translations: Arc<Mutex<TranslationStore>>,
    /// Phrasebook
    pub saved_phrases: Arc<Mutex<SavedPhraseStore>>,
    /// Offline language claims
    pub downloads: Arc<Mutex<DownloadedLanguageStore>>,
    /// Conversations
    pub conversations: Arc<Mutex<ConversationStore>>,
    /// Provider/fallback orchestration
    pub service: Arc<TranslationService>,
    /// Request size and listing limits
    pub limits: LimitsConfig,
}

impl AppState {
    /// Empty stores around `service`.
    #[must_use]
    pub fn new(service: TranslationService, limits: LimitsConfig) -> Self {
        Self {
            translations: Arc::new(Mutex::new(TranslationStore::new())),
            saved_phrases: Arc::new(Mutex::new(SavedPhraseStore::new())),
            downloads: Arc::new(Mutex::new(DownloadedLanguageStore::new())),
            conversations: Arc::new(Mutex::new(ConversationStore::new())),
            service: Arc::new(service),
            limits,
        }
    }

    /// State for the given settings.
    ///
    /// # Errors
    /// The configured provider client cannot be constructed.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ProviderError> {
        let service = TranslationService::from_config(&settings.provider)?;
        Ok(Self::new(service, settings.limits))
    }

    /// `requested`, or the configured default list limit.
    #[must_use]
    pub fn list_limit(&self, requested: Option<usize>) -> Option<usize> {
        requested.or(self.limits.default_list_limit)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("translations", &"<TranslationStore>")
            .field("saved_phrases", &"<SavedPhraseStore>")
            .field("downloads", &"<DownloadedLanguageStore>")
            .field("conversations", &"<ConversationStore>")
            .field("engine", &self.service.engine())
            .field("limits", &self.limits)
            .finish()
    }
}

//! Owns the active settings.

use std::path::PathBuf;

use super::{
    ConfigError,
    ServerSettings,
    loader,
};

/// Loads, validates and holds the service settings.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: ServerSettings,

    /// File the settings were read from, if it existed
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: ServerSettings::default(), config_path: None }
    }

    /// Loads settings from the process environment.
    ///
    /// The file comes from `LINGO_BRIDGE_CONFIG` or `./.lingo-bridge.json`; `HOST`, `PORT` and
    /// the credential variable are applied on top.
    ///
    /// # Errors
    /// - File read or JSON parse error
    /// - Invalid environment override
    /// - Validation error
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |name: &str| std::env::var(name).ok();
        let path = loader::resolve_config_path(lookup);
        let mut manager = Self::new();
        manager.load_settings_with(Some(path), lookup)?;
        Ok(manager)
    }

    /// Loads settings from `config_path` with overrides from the process environment.
    ///
    /// # Errors
    /// - File read or JSON parse error
    /// - Invalid environment override
    /// - Validation error
    pub fn load_settings(&mut self, config_path: Option<PathBuf>) -> Result<(), ConfigError> {
        self.load_settings_with(config_path, |name| std::env::var(name).ok())
    }

    /// Loads settings from `config_path` with overrides read through `lookup`.
    ///
    /// A missing file yields defaults. Nothing is replaced unless validation passes.
    ///
    /// # Errors
    /// - File read or JSON parse error
    /// - Invalid environment override
    /// - Validation error
    pub fn load_settings_with(
        &mut self,
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from: {:?}", config_path);

        let (mut settings, found) = match &config_path {
            Some(path) => match loader::load_from_path(path)? {
                Some(settings) => (settings, true),
                None => (ServerSettings::default(), false),
            },
            None => (ServerSettings::default(), false),
        };

        loader::apply_env_overrides(&mut settings, lookup)?;

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.config_path = if found { config_path } else { None };
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// Validation error
    pub fn update_settings(&mut self, new_settings: ServerSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;
        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &ServerSettings {
        &self.current_settings
    }

    /// Consumes the manager, returning the settings.
    #[must_use]
    pub fn into_settings(self) -> ServerSettings {
        self.current_settings
    }

    #[must_use]
    pub const fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::ProviderKind;

    /// Empty environment.
    fn no_env(_: &str) -> Option<String> {
        None
    }

    /// new: defaults
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().server.port, 5000);
        assert!(manager.config_path().is_none());
    }

    /// load_settings_with: no path
    #[rstest]
    fn test_load_settings_without_path() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings_with(None, no_env);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().provider.kind, ProviderKind::Heuristic);
        assert!(manager.config_path().is_none());
    }

    /// load_settings_with: file present
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".lingo-bridge.json");
        fs::write(&path, r#"{"provider": {"kind": "google", "timeoutSecs": 5}}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings_with(Some(path), no_env);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().provider.kind, ProviderKind::Google);
        assert_eq!(manager.get_settings().provider.timeout_secs, 5);
        assert!(manager.config_path().is_some());
    }

    /// load_settings_with: missing file falls back to defaults
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings_with(Some(temp_dir.path().join("absent.json")), no_env);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().limits.max_text_length, 5000);
        assert!(manager.config_path().is_none());
    }

    /// load_settings_with: invalid file keeps previous settings
    #[rstest]
    fn test_load_settings_invalid_keeps_previous() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".lingo-bridge.json");
        fs::write(&path, r#"{"provider": {"timeoutSecs": 0}}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings_with(Some(path), no_env);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().provider.timeout_secs, 10);
    }

    /// load_settings_with: environment wins over the file
    #[rstest]
    fn test_load_settings_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".lingo-bridge.json");
        fs::write(&path, r#"{"server": {"port": 7000}}"#).unwrap();

        let mut manager = ConfigManager::new();
        manager
            .load_settings_with(Some(path), |name| (name == "PORT").then(|| "7100".to_string()))
            .unwrap();

        assert_eq!(manager.get_settings().server.port, 7100);
    }

    /// update_settings: valid
    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let mut new_settings = ServerSettings::default();
        new_settings.server.port = 9000;

        let result = manager.update_settings(new_settings);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().server.port, 9000);
    }

    /// update_settings: invalid
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let mut new_settings = ServerSettings::default();
        new_settings.server.port = 0;

        let result = manager.update_settings(new_settings);

        assert!(result.is_err());
        assert_eq!(manager.get_settings().server.port, 5000);
    }
}

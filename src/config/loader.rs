//! Settings file loading and environment overrides.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    ServerSettings,
};

/// Variable naming an explicit settings file.
pub const CONFIG_PATH_ENV: &str = "LINGO_BRIDGE_CONFIG";

/// Settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".lingo-bridge.json";

/// Resolves the settings file: `LINGO_BRIDGE_CONFIG` if set, else `./.lingo-bridge.json`.
pub(super) fn resolve_config_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup(CONFIG_PATH_ENV)
        .filter(|path| !path.trim().is_empty())
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), PathBuf::from)
}

/// Reads settings from `path`.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: file does not exist
/// - `Err(ConfigError)`: read or parse failure
pub(super) fn load_from_path(path: &Path) -> Result<Option<ServerSettings>, ConfigError> {
    if !path.exists() {
        tracing::debug!("Configuration file not found: {:?}", path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let settings: ServerSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Applies `HOST`, `PORT` and the credential variable over file settings.
///
/// # Errors
/// `PORT` is set but is not a port number.
pub(super) fn apply_env_overrides(
    settings: &mut ServerSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(host) = lookup("HOST").filter(|host| !host.trim().is_empty()) {
        tracing::debug!(%host, "HOST overrides server.host");
        settings.server.host = host.trim().to_string();
    }

    if let Some(port) = lookup("PORT").filter(|port| !port.trim().is_empty()) {
        settings.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidEnv {
            name: "PORT".to_string(),
            message: format!("'{port}' is not a port number: {e}"),
        })?;
        tracing::debug!(port = settings.server.port, "PORT overrides server.port");
    }

    if let Some(key) = lookup(&settings.provider.api_key_env).filter(|key| !key.trim().is_empty()) {
        tracing::debug!(variable = %settings.provider.api_key_env, "Using provider credential from environment");
        settings.provider.api_key = Some(key.trim().to_string());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// Environment stub backed by a map.
    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    /// `load_from_path`: valid file
    #[rstest]
    fn test_load_from_path_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"server": {"port": 8081}}"#).unwrap();

        let settings = load_from_path(&path).unwrap().unwrap();

        assert_eq!(settings.server.port, 8081);
    }

    /// `load_from_path`: missing file
    #[rstest]
    fn test_load_from_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_path(&temp_dir.path().join(CONFIG_FILE_NAME));

        assert!(result.unwrap().is_none());
    }

    /// `load_from_path`: malformed JSON
    #[rstest]
    fn test_load_from_path_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "invalid json").unwrap();

        assert!(matches!(load_from_path(&path), Err(ConfigError::ParseError(_))));
    }

    #[rstest]
    #[case::default(&[], CONFIG_FILE_NAME)]
    #[case::explicit(&[(CONFIG_PATH_ENV, "/etc/lingo.json")], "/etc/lingo.json")]
    #[case::blank(&[(CONFIG_PATH_ENV, "  ")], CONFIG_FILE_NAME)]
    fn test_resolve_config_path(#[case] vars: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(resolve_config_path(env(vars)), PathBuf::from(expected));
    }

    #[rstest]
    fn test_env_overrides_host_port_and_key() {
        let mut settings = ServerSettings::default();

        apply_env_overrides(
            &mut settings,
            env(&[("HOST", "0.0.0.0"), ("PORT", "8080"), ("GOOGLE_TRANSLATE_API_KEY", "k-1")]),
        )
        .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.provider.api_key.as_deref(), Some("k-1"));
    }

    #[rstest]
    fn test_env_override_uses_configured_key_variable() {
        let mut settings = ServerSettings::default();
        settings.provider.api_key_env = "MY_KEY".to_string();

        apply_env_overrides(&mut settings, env(&[("MY_KEY", "k-2"), ("GOOGLE_TRANSLATE_API_KEY", "x")]))
            .unwrap();

        assert_eq!(settings.provider.api_key.as_deref(), Some("k-2"));
    }

    #[rstest]
    fn test_env_override_invalid_port() {
        let mut settings = ServerSettings::default();

        let result = apply_env_overrides(&mut settings, env(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(ConfigError::InvalidEnv { ref name, .. }) if name == "PORT"));
    }
}

use std::fmt;
use std::net::{
    IpAddr,
    SocketAddr,
};
use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "server.port")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid value for environment variable {name}: {message}")]
    InvalidEnv { name: String, message: String },
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper bound for the provider timeout.
const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Runtime worker threads.
    /// Default: 80% of CPU cores (minimum 1).
    pub worker_threads: Option<usize>,
    /// Send permissive CORS headers.
    pub allow_any_origin: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 5000, worker_threads: None, allow_any_origin: true }
    }
}

impl ServerConfig {
    /// Configured worker thread count, or the CPU-based default.
    #[must_use]
    pub fn worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or_else(|| (num_cpus::get() * 4 / 5).max(1))
    }

    /// Address to bind.
    ///
    /// # Errors
    /// The host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            ValidationError::new("server.host", format!("'{}' is not an IP address: {e}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Which engine answers translation requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Cloud Translation v2, falling back to the dictionary on failure.
    Google,
    /// Dictionary-based translation only.
    #[default]
    Heuristic,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: String,
    /// Credential. Prefer `api_key_env`; never logged.
    pub api_key: Option<String>,
    /// Environment variable consulted for the credential.
    pub api_key_env: String,
    pub timeout_secs: u64,
    /// Answer with the dictionary translator when the provider fails.
    pub fallback_on_error: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            base_url: "https://translation.googleapis.com".to_string(),
            api_key: None,
            api_key_env: "GOOGLE_TRANSLATE_API_KEY".to_string(),
            timeout_secs: 10,
            fallback_on_error: true,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("timeout_secs", &self.timeout_secs)
            .field("fallback_on_error", &self.fallback_on_error)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LimitsConfig {
    /// Max characters accepted by `/api/translate`.
    pub max_text_length: usize,
    /// Max characters accepted by `/api/detect-language`.
    pub max_detect_length: usize,
    /// Applied to list endpoints when the request has no `limit`.
    pub default_list_limit: Option<usize>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_text_length: 5000, max_detect_length: 1000, default_list_limit: None }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,
    /// Directory for daily rolling log files. Console only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string(), directory: None }
    }
}

impl ServerSettings {
    /// # Errors
    /// - Host is not an IP address, port is zero
    /// - Worker thread count is zero
    /// - Provider URL is not http(s), timeout out of range
    /// - Limits are zero
    /// - Log filter does not parse
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(error) = self.server.socket_addr() {
            errors.push(error);
        }

        if self.server.port == 0 {
            errors.push(ValidationError::new("server.port", "The port must be between 1 and 65535"));
        }

        if self.server.worker_threads == Some(0) {
            errors.push(ValidationError::new(
                "server.workerThreads",
                "At least one worker thread is required. Remove this field to use the CPU-based default",
            ));
        }

        let base_url = &self.provider.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(ValidationError::new(
                "provider.baseUrl",
                format!("'{base_url}' must start with http:// or https://"),
            ));
        }

        if !(1..=MAX_TIMEOUT_SECS).contains(&self.provider.timeout_secs) {
            errors.push(ValidationError::new(
                "provider.timeoutSecs",
                format!("The timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
            ));
        }

        if self.provider.api_key_env.is_empty() {
            errors.push(ValidationError::new(
                "provider.apiKeyEnv",
                "The variable name cannot be empty. Example: \"GOOGLE_TRANSLATE_API_KEY\"",
            ));
        }

        if self.limits.max_text_length == 0 {
            errors.push(ValidationError::new("limits.maxTextLength", "The limit must be positive"));
        }

        if self.limits.max_detect_length == 0 {
            errors.push(ValidationError::new("limits.maxDetectLength", "The limit must be positive"));
        }

        if self.limits.default_list_limit == Some(0) {
            errors.push(ValidationError::new(
                "limits.defaultListLimit",
                "The limit must be positive, or remove this field to list everything",
            ));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.filter) {
            errors.push(ValidationError::new(
                "logging.filter",
                format!("Invalid filter directive '{}': {e}", self.logging.filter),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_default_settings() {
        let settings = ServerSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"server": {"port": 8080}, "provider": {"kind": "google"}}"#;

        let settings: ServerSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.server.port, eq(8080));
        assert_that!(settings.server.host, eq("127.0.0.1"));
        assert_that!(settings.provider.kind, eq(ProviderKind::Google));
        assert_that!(settings.provider.timeout_secs, eq(10));
        assert_that!(settings.provider.fallback_on_error, eq(true));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: ServerSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.provider.kind, eq(ProviderKind::Heuristic));
        assert_that!(settings.provider.base_url, eq("https://translation.googleapis.com"));
        assert_that!(settings.provider.api_key_env, eq("GOOGLE_TRANSLATE_API_KEY"));
        assert_that!(settings.limits.max_text_length, eq(5000));
        assert_that!(settings.limits.max_detect_length, eq(1000));
        assert_that!(settings.logging.filter, eq("info"));
    }

    #[rstest]
    fn deserialize_unknown_provider_kind_fails() {
        let result = serde_json::from_str::<ServerSettings>(r#"{"provider": {"kind": "deepl"}}"#);

        assert!(result.is_err());
    }

    #[rstest]
    fn worker_threads_default_is_positive() {
        assert_that!(ServerConfig::default().worker_threads(), ge(1));

        let explicit = ServerConfig { worker_threads: Some(3), ..ServerConfig::default() };
        assert_that!(explicit.worker_threads(), eq(3));
    }

    #[rstest]
    fn validate_invalid_host() {
        let mut settings = ServerSettings::default();
        settings.server.host = "localhost:80".to_string();

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("server.host")),
                field!(ValidationError.message, contains_substring("not an IP address"))
            ]])
        );
    }

    #[rstest]
    #[case::zero(0)]
    #[case::too_long(121)]
    fn validate_timeout_out_of_range(#[case] timeout_secs: u64) {
        let mut settings = ServerSettings::default();
        settings.provider.timeout_secs = timeout_secs;

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("provider.timeoutSecs"))])
        );
    }

    #[rstest]
    fn validate_invalid_base_url() {
        let mut settings = ServerSettings::default();
        settings.provider.base_url = "ftp://example.com".to_string();

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("provider.baseUrl")),
                field!(ValidationError.message, contains_substring("ftp://example.com"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_log_filter() {
        let mut settings = ServerSettings::default();
        settings.logging.filter = "lingo_bridge=loud".to_string();

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("logging.filter"))])
        );
    }

    #[rstest]
    fn api_key_is_redacted_in_debug() {
        let provider =
            ProviderConfig { api_key: Some("secret-key-123".to_string()), ..ProviderConfig::default() };

        let debug = format!("{provider:?}");

        assert_that!(debug, not(contains_substring("secret-key-123")));
        assert_that!(debug, contains_substring("<redacted>"));
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let mut settings = ServerSettings::default();
        settings.server.port = 0;
        settings.limits.max_text_length = 0;

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. server.port"));
        assert_that!(error_message, contains_substring("2. limits.maxTextLength"));
        assert_that!(error_message, contains_substring("must be positive"));
    }
}

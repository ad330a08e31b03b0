//! Service settings: JSON file, environment overrides, validation.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    CONFIG_PATH_ENV,
};
pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    LimitsConfig,
    LoggingConfig,
    ProviderConfig,
    ProviderKind,
    ServerConfig,
    ServerSettings,
    ValidationError,
};

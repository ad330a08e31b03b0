//! Offline translation over the built-in dictionary.

/// Staged dictionary translator
pub mod fallback;
/// Literal case-insensitive replacement
mod replace;
/// "Unavailable" message templates
mod templates;

pub use fallback::{
    FallbackTranslation,
    FallbackTranslator,
    MatchKind,
};

//! Language metadata and heuristic language detection.

/// Supported language catalog
pub mod catalog;
/// Script/keyword scoring detector
pub mod detector;
/// Built-in detection patterns
mod patterns;

pub use catalog::{
    LanguageCategory,
    LanguageInfo,
};
pub use detector::{
    DEFAULT_LANGUAGE,
    Detection,
    LanguageDetector,
    LanguagePattern,
    LanguageScore,
};

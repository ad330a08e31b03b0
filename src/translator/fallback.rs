//! Dictionary-based translation used when no provider result is available.

use serde::Serialize;

use super::replace::replace_ignore_case;
use super::templates;
use crate::dictionary::{
    Dictionary,
    normalize_phrase,
};
use crate::language::LanguageDetector;

/// Which lookup stage produced a fallback translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    /// Input was empty or whitespace.
    Empty,
    /// Source and target agree with the detected language; text returned unchanged.
    Identity,
    /// Whole input is a dictionary phrase.
    Exact,
    /// A dictionary phrase occurs inside the input.
    Phrase,
    /// At least one word partially matched a dictionary phrase.
    Partial,
    /// Nothing matched; the text is an "unavailable" message.
    Unavailable,
}

impl MatchKind {
    /// Confidence percentage recorded for translations produced by this stage.
    #[must_use]
    pub const fn confidence(self) -> u8 {
        match self {
            Self::Empty | Self::Identity => 100,
            Self::Exact => 95,
            Self::Phrase => 70,
            Self::Partial => 40,
            Self::Unavailable => 0,
        }
    }
}

/// Output of [`FallbackTranslator::translate_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTranslation {
    pub text: String,
    pub kind: MatchKind,
    /// Language the detector assigned to the input.
    pub detected_source: &'static str,
}

/// Heuristic translator over a [`Dictionary`].
///
/// Stages, first hit wins:
///
/// 1. empty input → empty output
/// 2. identity: declared source, detected language and target all agree
/// 3. exact phrase lookup
/// 4. first phrase (declaration order) contained in the input, replaced everywhere
/// 5. word-level partial matches, accumulated over all words
/// 6. "unavailable" template for the target, or a generic placeholder
#[derive(Debug, Clone, Copy)]
pub struct FallbackTranslator<'a> {
    /// Phrase table
    dictionary: &'a Dictionary,
    /// Source language detector
    detector: &'a LanguageDetector,
}

impl Default for FallbackTranslator<'static> {
    fn default() -> Self {
        Self::new(Dictionary::builtin(), LanguageDetector::builtin())
    }
}

impl<'a> FallbackTranslator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, detector: &'a LanguageDetector) -> Self {
        Self { dictionary, detector }
    }

    #[must_use]
    pub const fn detector(&self) -> &'a LanguageDetector {
        self.detector
    }

    /// Translates `text` and returns only the resulting string.
    #[must_use]
    pub fn translate(&self, text: &str, source: &str, target: &str) -> String {
        self.translate_detailed(text, source, target).text
    }

    /// Translates `text`, reporting which stage produced the result.
    #[must_use]
    pub fn translate_detailed(&self, text: &str, source: &str, target: &str) -> FallbackTranslation {
        if text.trim().is_empty() {
            return FallbackTranslation {
                text: String::new(),
                kind: MatchKind::Empty,
                detected_source: self.detector.default_language(),
            };
        }

        let detected = self.detector.detect(text);
        let result = |text: String, kind| FallbackTranslation { text, kind, detected_source: detected };

        // The detected language overrides the declared one unless detection fell back to
        // its default. Identity additionally requires the declaration to match the content,
        // so mis-tagged text is never passed through untranslated.
        let effective_source =
            if detected == self.detector.default_language() { source } else { detected };
        if effective_source == target && detected == source {
            tracing::debug!(source, target, "Source matches target, returning text unchanged");
            return result(text.to_string(), MatchKind::Identity);
        }

        let normalized = normalize_phrase(text);

        if let Some(translation) = self.dictionary.lookup(&normalized, target) {
            tracing::debug!(phrase = %normalized, target, "Exact dictionary match");
            return result(translation.to_string(), MatchKind::Exact);
        }

        if let Some(translated) = self.phrase_match(text, &normalized, target) {
            return result(translated, MatchKind::Phrase);
        }

        if let Some(translated) = self.partial_match(text, &normalized, target) {
            return result(translated, MatchKind::Partial);
        }

        tracing::debug!(target, "No dictionary match, using unavailable message");
        let message = templates::unavailable_message(target, text)
            .unwrap_or_else(|| templates::placeholder(target));
        result(message, MatchKind::Unavailable)
    }

    /// Replaces the first dictionary phrase contained in the input.
    fn phrase_match(&self, text: &str, normalized: &str, target: &str) -> Option<String> {
        self.dictionary.entries().find_map(|entry| {
            if !normalized.contains(entry.phrase.as_str()) {
                return None;
            }
            let translation = entry.translation(target)?;
            tracing::debug!(phrase = %entry.phrase, translation, "Phrase match");
            Some(replace_ignore_case(text, &entry.phrase, translation))
        })
    }

    /// Replaces each word that overlaps a dictionary phrase in either direction.
    fn partial_match(&self, text: &str, normalized: &str, target: &str) -> Option<String> {
        let words = normalized
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|word| !word.is_empty());

        let mut result = text.to_string();
        let mut found = false;

        for word in words {
            let hit = self.dictionary.entries().find_map(|entry| {
                let overlaps = word.contains(entry.phrase.as_str()) || entry.phrase.contains(word);
                if overlaps { entry.translation(target) } else { None }
            });

            if let Some(translation) = hit {
                tracing::debug!(word, translation, "Partial match");
                result = replace_ignore_case(&result, word, translation);
                found = true;
            }
        }

        found.then_some(result)
    }
}

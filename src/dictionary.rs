//! Static phrase dictionary used by the offline translator.

/// Built-in phrase table
mod entries;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Process-wide built-in dictionary.
static BUILTIN: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::from_entries(entries::ENTRIES.iter().map(|(phrase, translations)| {
        (
            (*phrase).to_string(),
            translations.iter().map(|(code, text)| ((*code).to_string(), (*text).to_string())),
        )
    }))
});

/// One canonical phrase and its translations keyed by language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Lowercased, trimmed source phrase.
    pub phrase: String,
    /// Language code → translated text.
    pub translations: HashMap<String, String>,
}

impl DictionaryEntry {
    /// Returns the translation for `language`, if present.
    #[must_use]
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

/// Immutable phrase → {language → translation} table.
///
/// Entries keep their declaration order; substring scans depend on it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Entries in declaration order
    entries: Vec<DictionaryEntry>,
    /// Normalized phrase → index into `entries`
    index: HashMap<String, usize>,
}

/// Canonical form of a lookup key.
#[must_use]
pub fn normalize_phrase(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Dictionary {
    /// Returns the built-in table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a dictionary from `(phrase, translations)` pairs.
    ///
    /// Phrases are normalized. A repeated phrase merges into the first occurrence,
    /// keeping its position.
    #[must_use]
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
        T: IntoIterator<Item = (String, String)>,
    {
        let mut dictionary = Self::default();

        for (phrase, translations) in entries {
            let phrase = normalize_phrase(&phrase);
            if phrase.is_empty() {
                tracing::warn!("Skipping dictionary entry with an empty phrase");
                continue;
            }

            let position = match dictionary.index.get(&phrase) {
                Some(&position) => position,
                None => {
                    dictionary.entries.push(DictionaryEntry {
                        phrase: phrase.clone(),
                        translations: HashMap::new(),
                    });
                    let position = dictionary.entries.len() - 1;
                    dictionary.index.insert(phrase, position);
                    position
                }
            };

            if let Some(entry) = dictionary.entries.get_mut(position) {
                entry.translations.extend(translations);
            }
        }

        dictionary
    }

    /// Looks up a phrase (trimmed, case-insensitive) and returns its translation.
    #[must_use]
    pub fn lookup(&self, phrase: &str, language: &str) -> Option<&str> {
        self.get(phrase).and_then(|entry| entry.translation(language))
    }

    /// Returns the entry for a phrase (trimmed, case-insensitive).
    #[must_use]
    pub fn get(&self, phrase: &str) -> Option<&DictionaryEntry> {
        self.index.get(&normalize_phrase(phrase)).and_then(|&position| self.entries.get(position))
    }

    #[must_use]
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.index.contains_key(&normalize_phrase(phrase))
    }

    /// Iterates entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn custom() -> Dictionary {
        Dictionary::from_entries(vec![
            ("Tea".to_string(), vec![("fr".to_string(), "thé".to_string())]),
            ("  coffee ".to_string(), vec![("fr".to_string(), "café".to_string())]),
            ("tea".to_string(), vec![("de".to_string(), "Tee".to_string())]),
        ])
    }

    #[rstest]
    #[case::lowercase("hello", "hi", "नमस्ते")]
    #[case::uppercase("HELLO", "fr", "bonjour")]
    #[case::padded("  thank you ", "ja", "ありがとう")]
    #[case::multi_word("good morning", "de", "guten morgen")]
    fn builtin_lookup(#[case] phrase: &str, #[case] language: &str, #[case] expected: &str) {
        assert_that!(Dictionary::builtin().lookup(phrase, language), some(eq(expected)));
    }

    #[rstest]
    fn builtin_keeps_declaration_order() {
        let phrases: Vec<&str> =
            Dictionary::builtin().entries().map(|entry| entry.phrase.as_str()).collect();

        assert_that!(phrases.len(), eq(23));
        assert_that!(phrases[0], eq("ok"));
        assert_that!(phrases[1], eq("hello"));
        assert_that!(phrases[22], eq("car"));
    }

    #[rstest]
    fn builtin_entries_cover_all_languages() {
        for entry in Dictionary::builtin().entries() {
            assert_that!(entry.translations.len(), eq(36));
        }
    }

    #[rstest]
    fn lookup_missing_language_or_phrase() {
        let dictionary = Dictionary::builtin();

        assert_that!(dictionary.lookup("hello", "xx"), none());
        assert_that!(dictionary.lookup("xyzzy", "fr"), none());
        assert_that!(dictionary.lookup("hello", "en"), none());
    }

    #[rstest]
    fn from_entries_normalizes_and_merges() {
        let dictionary = custom();

        assert_that!(dictionary.len(), eq(2));
        assert_that!(dictionary.lookup("TEA", "fr"), some(eq("thé")));
        assert_that!(dictionary.lookup("tea", "de"), some(eq("Tee")));
        assert_that!(dictionary.lookup("coffee", "fr"), some(eq("café")));
        assert!(dictionary.contains_phrase(" Coffee"));

        let phrases: Vec<&str> = dictionary.entries().map(|entry| entry.phrase.as_str()).collect();
        assert_that!(phrases, eq(&vec!["tea", "coffee"]));
    }

    #[rstest]
    fn from_entries_skips_empty_phrase() {
        let dictionary = Dictionary::from_entries(vec![(
            "   ".to_string(),
            vec![("fr".to_string(), "rien".to_string())],
        )]);

        assert!(dictionary.is_empty());
    }
}

//! Heuristic language detection.
//!
//! Every language gets a score from two kinds of evidence:
//!
//! - script: each character inside one of the language's code point ranges adds `weight`
//! - keywords: each whole-word keyword hit adds `weight * 2`
//!
//! Languages sharing a script (Hindi/Marathi, Arabic/Urdu, the Latin group) tie on script
//! evidence, so keywords decide between them. Remaining ties go to the entry declared first.

use std::sync::LazyLock;

use regex::{
    Regex,
    RegexBuilder,
};
use serde::Serialize;

use super::patterns::PATTERNS;

/// Code returned when no pattern matches at all.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Process-wide detector over the built-in pattern table.
static BUILTIN: LazyLock<LanguageDetector> =
    LazyLock::new(|| LanguageDetector::new(PATTERNS, DEFAULT_LANGUAGE));

/// Detection rules for a single language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePattern {
    pub code: &'static str,
    /// Inclusive code point ranges of the language's script(s).
    pub scripts: &'static [(char, char)],
    /// Whole words that are strong evidence for the language.
    pub keywords: &'static [&'static str],
    pub weight: usize,
}

impl LanguagePattern {
    /// Number of characters of `text` inside this language's script ranges.
    fn script_hits(&self, text: &str) -> usize {
        text.chars()
            .filter(|c| self.scripts.iter().any(|&(start, end)| (start..=end).contains(c)))
            .count()
    }
}

/// Escapes `keyword` and anchors it on word boundaries where its edges are word characters.
fn bounded(keyword: &str) -> String {
    // Combining marks count as word characters, so only whitespace and ASCII symbols are edges.
    let is_word = |c: char| c == '_' || !(c.is_whitespace() || c.is_ascii_punctuation());
    let start = if keyword.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let end = if keyword.chars().next_back().is_some_and(is_word) { r"\b" } else { "" };
    format!("{start}{}{end}", regex::escape(keyword))
}

/// A pattern with its keyword matcher compiled.
#[derive(Debug)]
struct CompiledPattern {
    /// Source pattern
    pattern: &'static LanguagePattern,
    /// Alternation of all keywords; `None` when the pattern has no keywords
    keywords: Option<Regex>,
}

impl CompiledPattern {
    /// Compiles the keyword alternation for `pattern`.
    fn compile(pattern: &'static LanguagePattern) -> Self {
        if pattern.keywords.is_empty() {
            return Self { pattern, keywords: None };
        }

        let alternation = pattern.keywords.iter().copied().map(bounded).collect::<Vec<_>>();
        let source = format!("(?:{})", alternation.join("|"));

        let keywords = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::warn!(
                    language = pattern.code,
                    "Keyword matcher failed to compile, using script evidence only: {error}"
                );
                None
            }
        };

        Self { pattern, keywords }
    }

    /// Score of `text` for this language.
    fn score(&self, text: &str) -> usize {
        let weight = self.pattern.weight;
        let script = self.pattern.script_hits(text) * weight;
        let keywords =
            self.keywords.as_ref().map_or(0, |regex| regex.find_iter(text).count() * weight * 2);
        script + keywords
    }
}

/// Score of one language for a given text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageScore {
    pub language: &'static str,
    pub score: usize,
}

/// Result of a detection with a rough confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub language: &'static str,
    /// Winner's share of all positive scores, 0–100. 0 when nothing matched.
    pub confidence: u8,
}

/// Scores text against a fixed pattern table.
#[derive(Debug)]
pub struct LanguageDetector {
    /// Compiled patterns in priority order
    patterns: Vec<CompiledPattern>,
    /// Code returned when every score is zero
    default_language: &'static str,
}

impl LanguageDetector {
    /// Builds a detector; `patterns` order is the tie-break priority.
    #[must_use]
    pub fn new(patterns: &'static [LanguagePattern], default_language: &'static str) -> Self {
        Self {
            patterns: patterns.iter().map(CompiledPattern::compile).collect(),
            default_language,
        }
    }

    /// Returns the detector over the built-in pattern table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub const fn default_language(&self) -> &'static str {
        self.default_language
    }

    /// Scores for every known language, in priority order.
    #[must_use]
    pub fn scores(&self, text: &str) -> Vec<LanguageScore> {
        self.patterns
            .iter()
            .map(|compiled| LanguageScore {
                language: compiled.pattern.code,
                score: compiled.score(text),
            })
            .collect()
    }

    /// Returns the best-scoring language code, or the default code when nothing matched.
    #[must_use]
    pub fn detect(&self, text: &str) -> &'static str {
        self.detect_with_confidence(text).language
    }

    #[must_use]
    pub fn detect_with_confidence(&self, text: &str) -> Detection {
        let scores = self.scores(text);
        let total: usize = scores.iter().map(|entry| entry.score).sum();

        // Strictly greater keeps the earlier entry on ties.
        let best = scores.iter().fold(None::<&LanguageScore>, |best, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        });

        match best {
            Some(winner) if winner.score > 0 => {
                let percent = (winner.score * 100 + total / 2) / total;
                let confidence = u8::try_from(percent).unwrap_or(100);
                tracing::debug!(
                    language = winner.language,
                    score = winner.score,
                    confidence,
                    "Detected language"
                );
                Detection { language: winner.language, confidence }
            }
            _ => Detection { language: self.default_language, confidence: 0 },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    /// Two languages sharing one script, for tie-break checks.
    static TWINS: &[LanguagePattern] = &[
        LanguagePattern { code: "aa", scripts: &[('a', 'z')], keywords: &["alpha"], weight: 1 },
        LanguagePattern { code: "bb", scripts: &[('a', 'z')], keywords: &["beta"], weight: 1 },
    ];

    /// Pattern whose keyword is full of regex metacharacters.
    static SYMBOLIC: &[LanguagePattern] = &[LanguagePattern {
        code: "cc",
        scripts: &[],
        keywords: &["c++ (x)"],
        weight: 1,
    }];

    #[rstest]
    #[case::hindi_sentence("नमस्ते, आप कैसे हैं?", "hi")]
    #[case::marathi_keywords("नमस्कार, तुम्ही कसे आहात", "mr")]
    #[case::telugu("హలో ధన్యవాదాలు", "te")]
    #[case::tamil("வணக்கம் நன்றி", "ta")]
    #[case::urdu("شکریہ کیسے", "ur")]
    #[case::arabic("مرحبا شكرا", "ar")]
    #[case::hebrew("שלום תודה", "he")]
    #[case::russian("привет, спасибо", "ru")]
    #[case::korean("안녕하세요 감사합니다", "ko")]
    #[case::japanese_kana("こんにちは ありがとう", "ja")]
    #[case::chinese("你好 谢谢", "zh")]
    #[case::english("the house and the car", "en")]
    #[case::french("bonjour merci", "fr")]
    #[case::spanish("hola gracias", "es")]
    #[case::german("danke wasser", "de")]
    #[case::italian("ciao grazie", "it")]
    #[case::portuguese("obrigado água", "pt")]
    #[case::turkish("merhaba evet", "tr")]
    fn detect_keyword_text(#[case] text: &str, #[case] expected: &str) {
        assert_that!(LanguageDetector::builtin().detect(text), eq(expected));
    }

    #[rstest]
    #[case::digits("12345 !?")]
    #[case::emoji("🙂🙂")]
    #[case::empty("")]
    fn detect_without_signal_falls_back(#[case] text: &str) {
        let detection = LanguageDetector::builtin().detect_with_confidence(text);

        assert_that!(detection.language, eq(DEFAULT_LANGUAGE));
        assert_that!(detection.confidence, eq(0));
    }

    #[rstest]
    fn latin_text_without_keywords_defaults_to_english() {
        assert_that!(LanguageDetector::builtin().detect("xyzzy"), eq("en"));
        assert_that!(LanguageDetector::builtin().detect("hello"), eq("en"));
    }

    #[rstest]
    fn accented_letters_are_latin_script() {
        let scores = LanguageDetector::builtin().scores("ñ");
        let french = scores.iter().find(|entry| entry.language == "fr").unwrap();

        assert_that!(french.score, eq(2));
        // Equal Latin weights, English declared first.
        assert_that!(LanguageDetector::builtin().detect("ñ"), eq("en"));
    }

    #[rstest]
    fn keywords_count_double_weight() {
        let detector = LanguageDetector::new(TWINS, "zz");
        let scores = detector.scores("alpha");

        // 5 script hits + one keyword hit at double weight.
        assert_that!(scores[0], eq(LanguageScore { language: "aa", score: 7 }));
        assert_that!(scores[1], eq(LanguageScore { language: "bb", score: 5 }));
    }

    #[rstest]
    fn ties_go_to_first_declared() {
        let detector = LanguageDetector::new(TWINS, "zz");

        assert_that!(detector.detect("gamma"), eq("aa"));
        assert_that!(detector.detect("beta"), eq("bb"));
    }

    #[rstest]
    fn keywords_need_word_boundaries() {
        let detector = LanguageDetector::new(TWINS, "zz");
        let scores = detector.scores("alphabet");

        assert_that!(scores[0].score, eq(8));
    }

    #[rstest]
    fn keywords_match_case_insensitively() {
        let detector = LanguageDetector::new(TWINS, "zz");

        // Uppercase letters fall outside the test script range; both keyword hits count.
        assert_that!(detector.scores("ALPHA alpha")[0].score, eq(5 + 2 * 2));
    }

    #[rstest]
    fn metacharacter_keywords_match_literally() {
        let detector = LanguageDetector::new(SYMBOLIC, "zz");

        assert_that!(detector.detect("i write c++ (x) daily"), eq("cc"));
        assert_that!(detector.detect("cx"), eq("zz"));
    }

    #[rstest]
    fn confidence_is_share_of_total() {
        let detector = LanguageDetector::new(TWINS, "zz");
        let detection = detector.detect_with_confidence("alpha");

        // 7 / (7 + 5) = 58.3%
        assert_that!(detection, eq(Detection { language: "aa", confidence: 58 }));
    }

    #[rstest]
    fn scores_follow_priority_order() {
        let codes: Vec<&str> =
            LanguageDetector::builtin().scores("x").iter().map(|entry| entry.language).collect();

        assert_that!(codes.len(), eq(PATTERNS.len()));
        assert_that!(codes[0], eq("te"));
        assert_that!(codes.iter().position(|&c| c == "hi"), lt(codes.iter().position(|&c| c == "mr")));
        assert_that!(codes.iter().position(|&c| c == "en"), lt(codes.iter().position(|&c| c == "fr")));
    }
}

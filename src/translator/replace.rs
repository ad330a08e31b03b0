//! Case-insensitive literal replacement.

use regex::{
    NoExpand,
    RegexBuilder,
};

/// Replaces every case-insensitive occurrence of `needle` in `haystack` with `replacement`.
///
/// `needle` is matched literally and `replacement` is inserted verbatim (`$` is not expanded).
#[must_use]
pub(crate) fn replace_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }

    match RegexBuilder::new(&regex::escape(needle)).case_insensitive(true).build() {
        Ok(regex) => regex.replace_all(haystack, NoExpand(replacement)).into_owned(),
        Err(error) => {
            tracing::warn!(needle, "Replacement pattern failed to compile: {error}");
            haystack.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::single("Hello there", "hello", "hi", "hi there")]
    #[case::every_occurrence("Hello hello HELLO", "hello", "x", "x x x")]
    #[case::metacharacters("I like c++ a lot", "c++", "C plus plus", "I like C plus plus a lot")]
    #[case::dot_is_literal("a.b axb", "a.b", "ok", "ok axb")]
    #[case::dollar_is_literal("the price", "price", "$1", "the $1")]
    #[case::no_match("nothing here", "absent", "x", "nothing here")]
    #[case::empty_needle("keep", "", "x", "keep")]
    #[case::unicode_case("ÉCOLE école", "école", "school", "school school")]
    fn replace_cases(
        #[case] haystack: &str,
        #[case] needle: &str,
        #[case] replacement: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(replace_ignore_case(haystack, needle, replacement), expected);
    }
}

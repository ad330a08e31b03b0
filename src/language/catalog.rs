//! Supported language catalog.

use serde::Serialize;

/// Grouping used by clients when listing languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LanguageCategory {
    Major,
    Indian,
    European,
    Asian,
    #[serde(rename = "Middle Eastern")]
    MiddleEastern,
    African,
}

impl LanguageCategory {
    /// Parses a category label as sent by clients (case-insensitive).
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "major" => Some(Self::Major),
            "indian" => Some(Self::Indian),
            "european" => Some(Self::European),
            "asian" => Some(Self::Asian),
            "middle eastern" | "middle-eastern" | "middleeastern" => Some(Self::MiddleEastern),
            "african" => Some(Self::African),
            _ => None,
        }
    }
}

/// A language the service knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    pub native_name: &'static str,
    pub category: LanguageCategory,
}

/// Shorthand constructor for the static table.
const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    category: LanguageCategory,
) -> LanguageInfo {
    LanguageInfo { code, name, native_name, category }
}

use LanguageCategory::{
    African,
    Asian,
    European,
    Indian,
    Major,
    MiddleEastern,
};

/// All catalogued languages, in display order.
static LANGUAGES: &[LanguageInfo] = &[
    lang("en", "English", "English", Major),
    lang("es", "Spanish", "Español", Major),
    lang("fr", "French", "Français", Major),
    lang("de", "German", "Deutsch", Major),
    lang("it", "Italian", "Italiano", Major),
    lang("pt", "Portuguese", "Português", Major),
    lang("ru", "Russian", "Русский", Major),
    lang("ja", "Japanese", "日本語", Major),
    lang("ko", "Korean", "한국어", Major),
    lang("zh", "Chinese", "中文", Major),
    lang("ar", "Arabic", "العربية", Major),
    lang("hi", "Hindi", "हिन्दी", Indian),
    lang("bn", "Bengali", "বাংলা", Indian),
    lang("te", "Telugu", "తెలుగు", Indian),
    lang("ta", "Tamil", "தமிழ்", Indian),
    lang("mr", "Marathi", "मराठी", Indian),
    lang("gu", "Gujarati", "ગુજરાતી", Indian),
    lang("kn", "Kannada", "ಕನ್ನಡ", Indian),
    lang("ml", "Malayalam", "മലയാളം", Indian),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ", Indian),
    lang("ur", "Urdu", "اردو", Indian),
    lang("or", "Odia", "ଓଡ଼ିଆ", Indian),
    lang("as", "Assamese", "অসমীয়া", Indian),
    lang("nl", "Dutch", "Nederlands", European),
    lang("sv", "Swedish", "Svenska", European),
    lang("no", "Norwegian", "Norsk", European),
    lang("da", "Danish", "Dansk", European),
    lang("fi", "Finnish", "Suomi", European),
    lang("pl", "Polish", "Polski", European),
    lang("cs", "Czech", "Čeština", European),
    lang("sk", "Slovak", "Slovenčina", European),
    lang("hu", "Hungarian", "Magyar", European),
    lang("ro", "Romanian", "Română", European),
    lang("bg", "Bulgarian", "Български", European),
    lang("hr", "Croatian", "Hrvatski", European),
    lang("sr", "Serbian", "Српски", European),
    lang("sl", "Slovenian", "Slovenščina", European),
    lang("lt", "Lithuanian", "Lietuvių", European),
    lang("lv", "Latvian", "Latviešu", European),
    lang("et", "Estonian", "Eesti", European),
    lang("el", "Greek", "Ελληνικά", European),
    lang("uk", "Ukrainian", "Українська", European),
    lang("tr", "Turkish", "Türkçe", Asian),
    lang("th", "Thai", "ไทย", Asian),
    lang("vi", "Vietnamese", "Tiếng Việt", Asian),
    lang("id", "Indonesian", "Bahasa Indonesia", Asian),
    lang("ms", "Malay", "Bahasa Melayu", Asian),
    lang("tl", "Filipino", "Filipino", Asian),
    lang("he", "Hebrew", "עברית", MiddleEastern),
    lang("fa", "Persian", "فارسی", MiddleEastern),
    lang("sw", "Swahili", "Kiswahili", African),
    lang("zu", "Zulu", "isiZulu", African),
    lang("af", "Afrikaans", "Afrikaans", African),
];

/// Returns every catalogued language.
#[must_use]
pub fn all() -> &'static [LanguageInfo] {
    LANGUAGES
}

/// Finds a language by code. Region subtags (`pt-BR`) fall back to the base language.
#[must_use]
pub fn find(code: &str) -> Option<&'static LanguageInfo> {
    let code = code.trim();
    LANGUAGES.iter().find(|info| info.code.eq_ignore_ascii_case(code)).or_else(|| {
        let (base, _region) = code.split_once(['-', '_'])?;
        LANGUAGES.iter().find(|info| info.code.eq_ignore_ascii_case(base))
    })
}

/// English display name for a code, or the uppercased code when unknown.
#[must_use]
pub fn display_name(code: &str) -> String {
    find(code).map_or_else(|| code.to_uppercase(), |info| info.name.to_string())
}

#[must_use]
pub fn by_category(category: LanguageCategory) -> Vec<&'static LanguageInfo> {
    LANGUAGES.iter().filter(|info| info.category == category).collect()
}

/// Case-insensitive search over names and codes.
#[must_use]
pub fn search(query: &str) -> Vec<&'static LanguageInfo> {
    let query = query.trim().to_lowercase();
    LANGUAGES
        .iter()
        .filter(|info| {
            info.name.to_lowercase().contains(&query) || info.code.to_lowercase().contains(&query)
        })
        .collect()
}

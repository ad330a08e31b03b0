//! "Translation unavailable" messages.

use crate::language::catalog;

/// Message in the target language saying no translation of `text` is available.
///
/// Only languages with a native-script template have one; Latin-script targets use
/// [`placeholder`].
#[must_use]
pub(super) fn unavailable_message(target: &str, text: &str) -> Option<String> {
    let message = match target {
        "te" => format!("\"{text}\" కోసం తెలుగు అనువాదం ప్రస్తుతం అందుబాటులో లేదు"),
        "hi" => format!("\"{text}\" का हिंदी अनुवाद वर्तमान में उपलब्ध नहीं है"),
        "ta" => format!("\"{text}\" என்பதற்கான தமிழ் மொழிபெயர்ப்பு தற்போது கிடைக்கவில்லை"),
        "kn" => format!("\"{text}\" ಇದರ ಕನ್ನಡ ಅನುವಾದ ಪ್ರಸ್ತುತ ಲಭ್ಯವಿಲ್ಲ"),
        "ml" => format!("\"{text}\" എന്നതിന്റെ മലയാളം പരിഭാഷ നിലവിൽ ലഭ്യമല്ല"),
        "mr" => format!("\"{text}\" चे मराठी भाषांतर सध्या उपलब्ध नाही"),
        "bn" => format!("\"{text}\" এর বাংলা অনুবাদ বর্তমানে উপলব্ধ নেই"),
        "gu" => format!("\"{text}\" નો ગુજરાતી અનુવાદ હાલમાં ઉપલબ્ધ નથી"),
        "zh" => format!("\"{text}\" 的中文翻译目前不可用"),
        "ja" => format!("\"{text}\" の日本語翻訳は現在利用できません"),
        "ko" => format!("\"{text}\"의 한국어 번역이 현재 사용할 수 없습니다"),
        "ar" => format!("الترجمة العربية لـ \"{text}\" غير متوفرة حاليا"),
        "ru" => format!("Русский перевод \"{text}\" в настоящее время недоступен"),
        _ => return None,
    };
    Some(message)
}

/// Generic bracketed placeholder naming the target language.
#[must_use]
pub(super) fn placeholder(target: &str) -> String {
    format!("[Translation to {} in progress...]", catalog::display_name(target))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn template_interpolates_text() {
        assert_that!(
            unavailable_message("hi", "xyzzy"),
            some(eq("\"xyzzy\" का हिंदी अनुवाद वर्तमान में उपलब्ध नहीं है"))
        );
    }

    #[rstest]
    #[case("fr")]
    #[case("sw")]
    #[case("xx")]
    fn no_template(#[case] target: &str) {
        assert_that!(unavailable_message(target, "text"), none());
    }

    #[rstest]
    #[case::known("fr", "[Translation to French in progress...]")]
    #[case::unknown("qq", "[Translation to QQ in progress...]")]
    fn placeholder_names_language(#[case] target: &str, #[case] expected: &str) {
        assert_that!(placeholder(target), eq(expected));
    }
}

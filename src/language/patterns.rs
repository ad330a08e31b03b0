//! Per-language detection patterns.

use super::detector::LanguagePattern;

/// Latin letters, including Latin-1 Supplement and Extended-A/B.
const LATIN: &[(char, char)] = &[('a', 'z'), ('A', 'Z'), ('\u{C0}', '\u{24F}')];
const DEVANAGARI: &[(char, char)] = &[('\u{0900}', '\u{097F}')];
const ARABIC: &[(char, char)] = &[('\u{0600}', '\u{06FF}')];

/// Detection table in tie-break priority order: earlier entries win equal scores.
pub(super) static PATTERNS: &[LanguagePattern] = &[
    LanguagePattern {
        code: "te",
        scripts: &[('\u{0C00}', '\u{0C7F}')],
        keywords: &[
            "మరియు",
            "లో",
            "హలో",
            "ధన్యవాదాలు",
            "ఎలా",
            "ఏమి",
            "ఎక్కడ",
            "ఎప్పుడు",
            "అవును",
            "లేదు",
            "నీరు",
            "ఆహారం",
            "ప్రేమ",
            "సమయం",
            "ఇల్లు",
            "కుటుంబం",
            "పని",
            "పాఠశాల",
            "పుస్తకం",
            "కారు",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "hi",
        scripts: DEVANAGARI,
        keywords: &[
            "और",
            "में",
            "नमस्ते",
            "धन्यवाद",
            "कैसे",
            "क्या",
            "कहां",
            "कब",
            "हाँ",
            "नहीं",
            "पानी",
            "खाना",
            "प्रेम",
            "समय",
            "घर",
            "परिवार",
            "काम",
            "स्कूल",
            "किताब",
            "कार",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "ta",
        scripts: &[('\u{0B80}', '\u{0BFF}')],
        keywords: &[
            "மற்றும்",
            "உள்ளே",
            "வணக்கம்",
            "நன்றி",
            "எப்படி",
            "என்ன",
            "எங்கே",
            "எப்போது",
            "ஆம்",
            "இல்லை",
            "தண்ணீர்",
            "உணவு",
            "காதல்",
            "நேரம்",
            "வீடு",
            "குடும்பம்",
            "வேலை",
            "பள்ளி",
            "புத்தகம்",
            "கார்",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "kn",
        scripts: &[('\u{0C80}', '\u{0CFF}')],
        keywords: &[
            "ಮತ್ತು",
            "ಒಳಗೆ",
            "ನಮಸ್ಕಾರ",
            "ಧನ್ಯವಾದಗಳು",
            "ಹೇಗೆ",
            "ಏನು",
            "ಎಲ್ಲಿ",
            "ಯಾವಾಗ",
            "ಹೌದು",
            "ಇಲ್ಲ",
            "ನೀರು",
            "ಆಹಾರ",
            "ಪ್ರೀತಿ",
            "ಸಮಯ",
            "ಮನೆ",
            "ಕುಟುಂಬ",
            "ಕೆಲಸ",
            "ಶಾಲೆ",
            "ಪುಸ್ತಕ",
            "ಕಾರು",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "ml",
        scripts: &[('\u{0D00}', '\u{0D7F}')],
        keywords: &[
            "കൂടാതെ",
            "ഉള്ളിൽ",
            "ഹലോ",
            "നന്ദി",
            "എങ്ങനെ",
            "എന്ത്",
            "എവിടെ",
            "എപ്പോൾ",
            "അതെ",
            "ഇല്ല",
            "വെള്ളം",
            "ഭക്ഷണം",
            "സ്നേഹം",
            "സമയം",
            "വീട്",
            "കുടുംബം",
            "പണി",
            "സ്കൂൾ",
            "പുസ്തകം",
            "കാർ",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "bn",
        scripts: &[('\u{0980}', '\u{09FF}')],
        keywords: &[
            "এবং",
            "মধ্যে",
            "হ্যালো",
            "ধন্যবাদ",
            "কেমন",
            "কি",
            "কোথায়",
            "কখন",
            "হ্যাঁ",
            "না",
            "পানি",
            "খাবার",
            "ভালোবাসা",
            "সময়",
            "বাড়ি",
            "পরিবার",
            "কাজ",
            "স্কুল",
            "বই",
            "গাড়ি",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "gu",
        scripts: &[('\u{0A80}', '\u{0AFF}')],
        keywords: &[
            "અને",
            "માં",
            "હેલો",
            "આભાર",
            "કેવી રીતે",
            "શું",
            "ક્યાં",
            "ક્યારે",
            "હા",
            "ના",
            "પાણી",
            "ખોરાક",
            "પ્રેમ",
            "સમય",
            "ઘર",
            "કુટુંબ",
            "કામ",
            "શાળા",
            "પુસ્તક",
            "કાર",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "pa",
        scripts: &[('\u{0A00}', '\u{0A7F}')],
        keywords: &[
            "ਅਤੇ",
            "ਵਿੱਚ",
            "ਸਤ ਸ੍ਰੀ ਅਕਾਲ",
            "ਧੰਨਵਾਦ",
            "ਕਿਵੇਂ",
            "ਕੀ",
            "ਕਿੱਥੇ",
            "ਕਦੋਂ",
            "ਹਾਂ",
            "ਨਹੀਂ",
            "ਪਾਣੀ",
            "ਖਾਣਾ",
            "ਪਿਆਰ",
            "ਸਮਾਂ",
            "ਘਰ",
            "ਪਰਿਵਾਰ",
            "ਕੰਮ",
            "ਸਕੂਲ",
            "ਕਿਤਾਬ",
            "ਕਾਰ",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "mr",
        scripts: DEVANAGARI,
        keywords: &[
            "आणि",
            "मध्ये",
            "नमस्कार",
            "धन्यवाद",
            "कसे",
            "काय",
            "कुठे",
            "केव्हा",
            "होय",
            "नाही",
            "पाणी",
            "अन्न",
            "प्रेम",
            "वेळ",
            "घर",
            "कुटुंब",
            "काम",
            "शाळा",
            "पुस्तक",
            "कार",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "ur",
        scripts: ARABIC,
        keywords: &[
            "اور",
            "میں",
            "سلام",
            "شکریہ",
            "کیسے",
            "کیا",
            "کہاں",
            "کب",
            "ہاں",
            "نہیں",
            "پانی",
            "کھانا",
            "محبت",
            "وقت",
            "گھر",
            "خاندان",
            "کام",
            "سکول",
            "کتاب",
            "گاڑی",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "zh",
        scripts: &[('\u{4E00}', '\u{9FFF}')],
        keywords: &[
            "和",
            "在",
            "你好",
            "谢谢",
            "怎么",
            "什么",
            "哪里",
            "什么时候",
            "是",
            "不",
            "水",
            "食物",
            "爱",
            "时间",
            "房子",
            "家庭",
            "工作",
            "学校",
            "书",
            "汽车",
        ],
        weight: 4,
    },
    LanguagePattern {
        code: "ja",
        scripts: &[('\u{3040}', '\u{309F}'), ('\u{30A0}', '\u{30FF}')],
        keywords: &[
            "と",
            "で",
            "こんにちは",
            "ありがとう",
            "どう",
            "何",
            "どこ",
            "いつ",
            "はい",
            "いいえ",
            "水",
            "食べ物",
            "愛",
            "時間",
            "家",
            "家族",
            "仕事",
            "学校",
            "本",
            "車",
        ],
        weight: 4,
    },
    LanguagePattern {
        code: "ko",
        scripts: &[('\u{1100}', '\u{11FF}'), ('\u{3130}', '\u{318F}'), ('\u{AC00}', '\u{D7AF}')],
        keywords: &[
            "그리고",
            "에서",
            "안녕하세요",
            "감사합니다",
            "어떻게",
            "무엇",
            "어디",
            "언제",
            "예",
            "아니요",
            "물",
            "음식",
            "사랑",
            "시간",
            "집",
            "가족",
            "일",
            "학교",
            "책",
            "자동차",
        ],
        weight: 4,
    },
    LanguagePattern {
        code: "ar",
        scripts: ARABIC,
        keywords: &[
            "و",
            "في",
            "مرحبا",
            "شكرا",
            "كيف",
            "ماذا",
            "أين",
            "متى",
            "نعم",
            "لا",
            "ماء",
            "طعام",
            "حب",
            "وقت",
            "بيت",
            "عائلة",
            "عمل",
            "مدرسة",
            "كتاب",
            "سيارة",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "he",
        scripts: &[('\u{0590}', '\u{05FF}')],
        keywords: &[
            "ו",
            "ב",
            "שלום",
            "תודה",
            "איך",
            "מה",
            "איפה",
            "מתי",
            "כן",
            "לא",
            "מים",
            "אוכל",
            "אהבה",
            "זמן",
            "בית",
            "משפחה",
            "עבודה",
            "בית ספר",
            "ספר",
            "מכונית",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "en",
        scripts: LATIN,
        keywords: &[
            "the",
            "is",
            "are",
            "and",
            "hello",
            "good",
            "morning",
            "thank",
            "you",
            "how",
            "what",
            "where",
            "when",
            "yes",
            "no",
            "ok",
            "okay",
            "water",
            "food",
            "love",
            "time",
            "house",
            "family",
            "work",
            "school",
            "book",
            "car",
        ],
        weight: 2,
    },
    LanguagePattern {
        code: "fr",
        scripts: LATIN,
        keywords: &[
            "le",
            "la",
            "les",
            "est",
            "sont",
            "et",
            "bonjour",
            "merci",
            "comment",
            "que",
            "où",
            "quand",
            "oui",
            "non",
            "eau",
            "nourriture",
            "amour",
            "temps",
            "maison",
            "famille",
            "travail",
            "école",
            "livre",
            "voiture",
        ],
        weight: 2,
    },
    LanguagePattern {
        code: "es",
        scripts: LATIN,
        keywords: &[
            "el",
            "la",
            "los",
            "las",
            "es",
            "son",
            "y",
            "hola",
            "gracias",
            "cómo",
            "qué",
            "dónde",
            "cuándo",
            "sí",
            "no",
            "agua",
            "comida",
            "amor",
            "tiempo",
            "casa",
            "familia",
            "trabajo",
            "escuela",
            "libro",
            "coche",
        ],
        weight: 2,
    },
    LanguagePattern {
        code: "de",
        scripts: LATIN,
        keywords: &[
            "der",
            "die",
            "das",
            "ist",
            "sind",
            "und",
            "hallo",
            "danke",
            "wie",
            "was",
            "wo",
            "wann",
            "ja",
            "nein",
            "wasser",
            "essen",
            "liebe",
            "zeit",
            "haus",
            "familie",
            "arbeit",
            "schule",
            "buch",
            "auto",
        ],
        weight: 2,
    },
    LanguagePattern {
        code: "it",
        scripts: LATIN,
        keywords: &[
            "il",
            "la",
            "lo",
            "è",
            "sono",
            "e",
            "ciao",
            "grazie",
            "come",
            "cosa",
            "dove",
            "quando",
            "sì",
            "no",
            "acqua",
            "cibo",
            "amore",
            "tempo",
            "casa",
            "famiglia",
            "lavoro",
            "scuola",
            "libro",
            "macchina",
        ],
        weight: 2,
    },
    LanguagePattern {
        code: "pt",
        scripts: LATIN,
        keywords: &[
            "o",
            "a",
            "os",
            "as",
            "é",
            "são",
            "e",
            "olá",
            "obrigado",
            "como",
            "que",
            "onde",
            "quando",
            "sim",
            "não",
            "água",
            "comida",
            "amor",
            "tempo",
            "casa",
            "família",
            "trabalho",
            "escola",
            "livro",
            "carro",
        ],
        weight: 2,
    },
    LanguagePattern {
        code: "ru",
        scripts: &[('\u{0400}', '\u{04FF}')],
        keywords: &[
            "и",
            "в",
            "привет",
            "спасибо",
            "как",
            "что",
            "где",
            "когда",
            "да",
            "нет",
            "вода",
            "еда",
            "любовь",
            "время",
            "дом",
            "семья",
            "работа",
            "школа",
            "книга",
            "машина",
        ],
        weight: 3,
    },
    LanguagePattern {
        code: "tr",
        scripts: LATIN,
        keywords: &[
            "ve",
            "içinde",
            "merhaba",
            "teşekkürler",
            "nasıl",
            "ne",
            "nerede",
            "ne zaman",
            "evet",
            "hayır",
            "su",
            "yemek",
            "aşk",
            "zaman",
            "ev",
            "aile",
            "iş",
            "okul",
            "kitap",
            "araba",
        ],
        weight: 2,
    },
];

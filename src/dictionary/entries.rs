//! Built-in phrase table.
/// Phrase table in lookup order: the first matching phrase wins during substring scans.
pub(super) const ENTRIES: &[(&str, &[(&str, &str)])] = &[
    (
        "ok",
        &[
            ("te", "సరే"),
            ("hi", "ठीक है"),
            ("ta", "சரி"),
            ("kn", "ಸರಿ"),
            ("ml", "ശരി"),
            ("mr", "ठीक आहे"),
            ("bn", "ঠিক আছে"),
            ("pa", "ਠੀਕ ਹੈ"),
            ("ur", "ٹھیک ہے"),
            ("gu", "બરાબર"),
            ("or", "ଠିକ୍"),
            ("as", "ঠিক আছে"),
            ("fr", "d'accord"),
            ("es", "vale"),
            ("de", "okay"),
            ("it", "va bene"),
            ("pt", "está bem"),
            ("ru", "хорошо"),
            ("zh", "好的"),
            ("ja", "わかりました"),
            ("ko", "알겠습니다"),
            ("ar", "حسنا"),
            ("tr", "tamam"),
            ("nl", "oké"),
            ("sv", "okej"),
            ("no", "greit"),
            ("fi", "selvä"),
            ("pl", "dobrze"),
            ("he", "בסדר"),
            ("fa", "باشه"),
            ("th", "โอเค"),
            ("vi", "được rồi"),
            ("id", "oke"),
            ("ms", "okay"),
            ("tl", "okay"),
            ("sw", "sawa"),
        ],
    ),
    (
        "hello",
        &[
            ("te", "హలో"),
            ("hi", "नमस्ते"),
            ("ta", "வணக்கம்"),
            ("kn", "ನಮಸ್ಕಾರ"),
            ("ml", "ഹലോ"),
            ("mr", "नमस्कार"),
            ("bn", "হ্যালো"),
            ("pa", "ਸਤ ਸ੍ਰੀ ਅਕਾਲ"),
            ("ur", "السلام علیکم"),
            ("gu", "નમસ્તે"),
            ("or", "ନମସ୍କାର"),
            ("as", "নমস্কাৰ"),
            ("fr", "bonjour"),
            ("es", "hola"),
            ("de", "hallo"),
            ("it", "ciao"),
            ("pt", "olá"),
            ("ru", "привет"),
            ("zh", "你好"),
            ("ja", "こんにちは"),
            ("ko", "안녕하세요"),
            ("ar", "مرحبا"),
            ("tr", "merhaba"),
            ("nl", "hallo"),
            ("sv", "hej"),
            ("no", "hei"),
            ("fi", "hei"),
            ("pl", "cześć"),
            ("he", "שלום"),
            ("fa", "سلام"),
            ("th", "สวัสดี"),
            ("vi", "xin chào"),
            ("id", "halo"),
            ("ms", "hello"),
            ("tl", "kumusta"),
            ("sw", "hujambo"),
        ],
    ),
    (
        "yes",
        &[
            ("te", "అవును"),
            ("hi", "हाँ"),
            ("ta", "ஆம்"),
            ("kn", "ಹೌದು"),
            ("ml", "അതെ"),
            ("mr", "होय"),
            ("bn", "হ্যাঁ"),
            ("pa", "ਹਾਂ"),
            ("ur", "ہاں"),
            ("gu", "હા"),
            ("or", "ହଁ"),
            ("as", "হয়"),
            ("fr", "oui"),
            ("es", "sí"),
            ("de", "ja"),
            ("it", "sì"),
            ("pt", "sim"),
            ("ru", "да"),
            ("zh", "是的"),
            ("ja", "はい"),
            ("ko", "예"),
            ("ar", "نعم"),
            ("tr", "evet"),
            ("nl", "ja"),
            ("sv", "ja"),
            ("no", "ja"),
            ("fi", "kyllä"),
            ("pl", "tak"),
            ("he", "כן"),
            ("fa", "بله"),
            ("th", "ใช่"),
            ("vi", "có"),
            ("id", "ya"),
            ("ms", "ya"),
            ("tl", "oo"),
            ("sw", "ndiyo"),
        ],
    ),
    (
        "no",
        &[
            ("te", "లేదు"),
            ("hi", "नहीं"),
            ("ta", "இல்லை"),
            ("kn", "ಇಲ್ಲ"),
            ("ml", "ഇല്ല"),
            ("mr", "नाही"),
            ("bn", "না"),
            ("pa", "ਨਹੀਂ"),
            ("ur", "نہیں"),
            ("gu", "ના"),
            ("or", "ନା"),
            ("as", "নহয়"),
            ("fr", "non"),
            ("es", "no"),
            ("de", "nein"),
            ("it", "no"),
            ("pt", "não"),
            ("ru", "нет"),
            ("zh", "不"),
            ("ja", "いいえ"),
            ("ko", "아니요"),
            ("ar", "لا"),
            ("tr", "hayır"),
            ("nl", "nee"),
            ("sv", "nej"),
            ("no", "nei"),
            ("fi", "ei"),
            ("pl", "nie"),
            ("he", "לא"),
            ("fa", "نه"),
            ("th", "ไม่"),
            ("vi", "không"),
            ("id", "tidak"),
            ("ms", "tidak"),
            ("tl", "hindi"),
            ("sw", "hapana"),
        ],
    ),
    (
        "thank you",
        &[
            ("te", "ధన్యవాదాలు"),
            ("hi", "धन्यवाद"),
            ("ta", "நன்றி"),
            ("kn", "ಧನ್ಯವಾದಗಳು"),
            ("ml", "നന്ദി"),
            ("mr", "धन्यवाद"),
            ("bn", "ধন্যবাদ"),
            ("pa", "ਧੰਨਵਾਦ"),
            ("ur", "شکریہ"),
            ("gu", "આભાર"),
            ("or", "ଧନ୍ୟବାଦ"),
            ("as", "ধন্যবাদ"),
            ("fr", "merci"),
            ("es", "gracias"),
            ("de", "danke"),
            ("it", "grazie"),
            ("pt", "obrigado"),
            ("ru", "спасибо"),
            ("zh", "谢谢"),
            ("ja", "ありがとう"),
            ("ko", "감사합니다"),
            ("ar", "شكرا"),
            ("tr", "teşekkürler"),
            ("nl", "dank je"),
            ("sv", "tack"),
            ("no", "takk"),
            ("fi", "kiitos"),
            ("pl", "dziękuję"),
            ("he", "תודה"),
            ("fa", "متشکرم"),
            ("th", "ขอบคุณ"),
            ("vi", "cảm ơn"),
            ("id", "terima kasih"),
            ("ms", "terima kasih"),
            ("tl", "salamat"),
            ("sw", "asante"),
        ],
    ),
    (
        "good morning",
        &[
            ("te", "శుభోదయం"),
            ("hi", "सुप्रभात"),
            ("ta", "காலை வணக்கம்"),
            ("kn", "ಶುಭೋದಯ"),
            ("ml", "സുപ്രഭാതം"),
            ("mr", "सुप्रभात"),
            ("bn", "সুপ্রভাত"),
            ("pa", "ਸ਼ੁਭ ਸਵੇਰ"),
            ("ur", "صبح بخیر"),
            ("gu", "સુપ્રભાત"),
            ("or", "ସୁପ୍ରଭାତ"),
            ("as", "শুভ ৰাতিপুৱা"),
            ("fr", "bonjour"),
            ("es", "buenos días"),
            ("de", "guten morgen"),
            ("it", "buongiorno"),
            ("pt", "bom dia"),
            ("ru", "доброе утро"),
            ("zh", "早上好"),
            ("ja", "おはようございます"),
            ("ko", "좋은 아침입니다"),
            ("ar", "صباح الخير"),
            ("tr", "günaydın"),
            ("nl", "goedemorgen"),
            ("sv", "god morgon"),
            ("no", "god morgen"),
            ("fi", "hyvää huomenta"),
            ("pl", "dzień dobry"),
            ("he", "בוקר טוב"),
            ("fa", "صبح بخیر"),
            ("th", "อรุณสวัสดิ์"),
            ("vi", "chào buổi sáng"),
            ("id", "selamat pagi"),
            ("ms", "selamat pagi"),
            ("tl", "magandang umaga"),
            ("sw", "habari za asubuhi"),
        ],
    ),
    (
        "good night",
        &[
            ("te", "శుభరాత్రి"),
            ("hi", "शुभ रात्रि"),
            ("ta", "இனிய இரவு"),
            ("kn", "ಶುಭ ರಾತ್ರಿ"),
            ("ml", "ശുഭരാത്രി"),
            ("mr", "शुभ रात्री"),
            ("bn", "শুভ রাত্রি"),
            ("pa", "ਸ਼ੁਭ ਰਾਤ"),
            ("ur", "شب بخیر"),
            ("gu", "શુભ રાત્રી"),
            ("or", "ଶୁଭ ରାତ୍ରି"),
            ("as", "শুভ ৰাতি"),
            ("fr", "bonne nuit"),
            ("es", "buenas noches"),
            ("de", "gute nacht"),
            ("it", "buonanotte"),
            ("pt", "boa noite"),
            ("ru", "спокойной ночи"),
            ("zh", "晚安"),
            ("ja", "おやすみなさい"),
            ("ko", "좋은 밤 되세요"),
            ("ar", "تصبح على خير"),
            ("tr", "iyi geceler"),
            ("nl", "goede nacht"),
            ("sv", "god natt"),
            ("no", "god natt"),
            ("fi", "hyvää yötä"),
            ("pl", "dobranoc"),
            ("he", "לילה טוב"),
            ("fa", "شب بخیر"),
            ("th", "ราตรีสวัสดิ์"),
            ("vi", "chúc ngủ ngon"),
            ("id", "selamat malam"),
            ("ms", "selamat malam"),
            ("tl", "magandang gabi"),
            ("sw", "usiku mwema"),
        ],
    ),
    (
        "please",
        &[
            ("te", "దయచేసి"),
            ("hi", "कृपया"),
            ("ta", "தயவுசெய்து"),
            ("kn", "ದಯವಿಟ್ಟು"),
            ("ml", "ദയവായി"),
            ("mr", "कृपया"),
            ("bn", "দয়া করে"),
            ("pa", "ਕਿਰਪਾ ਕਰਕੇ"),
            ("ur", "برائے کرم"),
            ("gu", "કૃપા કરીને"),
            ("or", "ଦୟାକରି"),
            ("as", "অনুগ্রহ কৰি"),
            ("fr", "s'il vous plaît"),
            ("es", "por favor"),
            ("de", "bitte"),
            ("it", "per favore"),
            ("pt", "por favor"),
            ("ru", "пожалуйста"),
            ("zh", "请"),
            ("ja", "お願いします"),
            ("ko", "제발"),
            ("ar", "من فضلك"),
            ("tr", "lütfen"),
            ("nl", "alsjeblieft"),
            ("sv", "snälla"),
            ("no", "takk"),
            ("fi", "kiitos"),
            ("pl", "proszę"),
            ("he", "בבקשה"),
            ("fa", "لطفا"),
            ("th", "โปรด"),
            ("vi", "xin hãy"),
            ("id", "tolong"),
            ("ms", "sila"),
            ("tl", "pakisuyo"),
            ("sw", "tafadhali"),
        ],
    ),
    (
        "sorry",
        &[
            ("te", "క్షమించండి"),
            ("hi", "माफ़ करना"),
            ("ta", "மன்னிக்கவும்"),
            ("kn", "ಕ್ಷಮಿಸಿ"),
            ("ml", "ക്ഷമിക്കണം"),
            ("mr", "माफ करा"),
            ("bn", "দুঃখিত"),
            ("pa", "ਮਾਫ਼ ਕਰਨਾ"),
            ("ur", "معاف کریں"),
            ("gu", "માફ કરશો"),
            ("or", "କ୍ଷମା କରନ୍ତୁ"),
            ("as", "ক্ষমা কৰক"),
            ("fr", "désolé"),
            ("es", "lo siento"),
            ("de", "entschuldigung"),
            ("it", "mi dispiace"),
            ("pt", "desculpa"),
            ("ru", "извините"),
            ("zh", "对不起"),
            ("ja", "すみません"),
            ("ko", "죄송합니다"),
            ("ar", "آسف"),
            ("tr", "özür dilerim"),
            ("nl", "sorry"),
            ("sv", "förlåt"),
            ("no", "unnskyld"),
            ("fi", "anteeksi"),
            ("pl", "przepraszam"),
            ("he", "סליחה"),
            ("fa", "ببخشید"),
            ("th", "ขอโทษ"),
            ("vi", "xin lỗi"),
            ("id", "maaf"),
            ("ms", "maaf"),
            ("tl", "paumanhin"),
            ("sw", "pole"),
        ],
    ),
    (
        "how are you",
        &[
            ("te", "మీరు ఎలా ఉన్నారు?"),
            ("hi", "आप कैसे हैं?"),
            ("ta", "நீங்கள் எப்படி இருக்கிறீர்கள்?"),
            ("kn", "ನೀವು ಹೇಗಿದ್ದೀರಿ?"),
            ("ml", "നിങ്ങൾക്ക് സുഖമാണോ?"),
            ("mr", "तुम्ही कसे आहात?"),
            ("bn", "আপনি কেমন আছেন?"),
            ("pa", "ਤੁਸੀਂ ਕਿਵੇਂ ਹੋ?"),
            ("ur", "آپ کیسے ہیں؟"),
            ("gu", "તમે કેમ છો?"),
            ("or", "ଆପଣ କେମିତି ଅଛନ୍ତି?"),
            ("as", "আপুনি কেনেকুৱা আছে?"),
            ("fr", "comment allez-vous?"),
            ("es", "¿cómo estás?"),
            ("de", "wie geht es dir?"),
            ("it", "come stai?"),
            ("pt", "como vai você?"),
            ("ru", "как дела?"),
            ("zh", "你好吗?"),
            ("ja", "元気ですか?"),
            ("ko", "어떻게 지내세요?"),
            ("ar", "كيف حالك؟"),
            ("tr", "nasılsın?"),
            ("nl", "hoe gaat het?"),
            ("sv", "hur mår du?"),
            ("no", "hvordan har du det?"),
            ("fi", "mitä kuuluu?"),
            ("pl", "jak się masz?"),
            ("he", "מה שלומך?"),
            ("fa", "حالت چطوره?"),
            ("th", "สบายดีไหม?"),
            ("vi", "bạn có khỏe không?"),
            ("id", "apa kabar?"),
            ("ms", "apa khabar?"),
            ("tl", "kumusta ka?"),
            ("sw", "habari yako?"),
        ],
    ),
    (
        "goodbye",
        &[
            ("te", "వీడ్కోలు"),
            ("hi", "अलविदा"),
            ("ta", "பிரியாவிடை"),
            ("kn", "ವಿದಾಯ"),
            ("ml", "വിട"),
            ("mr", "निरोप"),
            ("bn", "বিদায়"),
            ("pa", "ਅਲਵਿਦਾ"),
            ("ur", "خدا حافظ"),
            ("gu", "આવજો"),
            ("or", "ବିଦାୟ"),
            ("as", "বিদায়"),
            ("fr", "au revoir"),
            ("es", "adiós"),
            ("de", "auf wiedersehen"),
            ("it", "arrivederci"),
            ("pt", "adeus"),
            ("ru", "до свидания"),
            ("zh", "再见"),
            ("ja", "さようなら"),
            ("ko", "안녕히 가세요"),
            ("ar", "وداعا"),
            ("tr", "hoşça kal"),
            ("nl", "tot ziens"),
            ("sv", "hej då"),
            ("no", "ha det"),
            ("fi", "näkemiin"),
            ("pl", "do widzenia"),
            ("he", "להתראות"),
            ("fa", "خداحافظ"),
            ("th", "ลาก่อน"),
            ("vi", "tạm biệt"),
            ("id", "selamat tinggal"),
            ("ms", "selamat tinggal"),
            ("tl", "paalam"),
            ("sw", "kwaheri"),
        ],
    ),
    (
        "water",
        &[
            ("te", "నీరు"),
            ("hi", "पानी"),
            ("ta", "தண்ணீர்"),
            ("kn", "ನೀರು"),
            ("ml", "വെള്ളം"),
            ("mr", "पाणी"),
            ("bn", "পানি"),
            ("pa", "ਪਾਣੀ"),
            ("ur", "پانی"),
            ("gu", "પાણી"),
            ("or", "ପାଣି"),
            ("as", "পানী"),
            ("fr", "eau"),
            ("es", "agua"),
            ("de", "wasser"),
            ("it", "acqua"),
            ("pt", "água"),
            ("ru", "вода"),
            ("zh", "水"),
            ("ja", "水"),
            ("ko", "물"),
            ("ar", "ماء"),
            ("tr", "su"),
            ("nl", "water"),
            ("sv", "vatten"),
            ("no", "vann"),
            ("fi", "vesi"),
            ("pl", "woda"),
            ("he", "מים"),
            ("fa", "آب"),
            ("th", "น้ำ"),
            ("vi", "nước"),
            ("id", "air"),
            ("ms", "air"),
            ("tl", "tubig"),
            ("sw", "maji"),
        ],
    ),
    (
        "food",
        &[
            ("te", "ఆహారం"),
            ("hi", "खाना"),
            ("ta", "உணவு"),
            ("kn", "ಆಹಾರ"),
            ("ml", "ഭക്ഷണം"),
            ("mr", "अन्न"),
            ("bn", "খাবার"),
            ("pa", "ਖਾਣਾ"),
            ("ur", "کھانا"),
            ("gu", "ખોરાક"),
            ("or", "ଖାଦ୍ୟ"),
            ("as", "খাদ্য"),
            ("fr", "nourriture"),
            ("es", "comida"),
            ("de", "essen"),
            ("it", "cibo"),
            ("pt", "comida"),
            ("ru", "еда"),
            ("zh", "食物"),
            ("ja", "食べ物"),
            ("ko", "음식"),
            ("ar", "طعام"),
            ("tr", "yemek"),
            ("nl", "voedsel"),
            ("sv", "mat"),
            ("no", "mat"),
            ("fi", "ruoka"),
            ("pl", "jedzenie"),
            ("he", "אוכל"),
            ("fa", "غذا"),
            ("th", "อาหาร"),
            ("vi", "thức ăn"),
            ("id", "makanan"),
            ("ms", "makanan"),
            ("tl", "pagkain"),
            ("sw", "chakula"),
        ],
    ),
    (
        "love",
        &[
            ("te", "ప్రేమ"),
            ("hi", "प्रेम"),
            ("ta", "காதல்"),
            ("kn", "ಪ್ರೀತಿ"),
            ("ml", "സ്നേഹം"),
            ("mr", "प्रेम"),
            ("bn", "ভালোবাসা"),
            ("pa", "ਪਿਆਰ"),
            ("ur", "محبت"),
            ("gu", "પ્રેમ"),
            ("or", "ପ୍ରେମ"),
            ("as", "ভালপোৱা"),
            ("fr", "amour"),
            ("es", "amor"),
            ("de", "liebe"),
            ("it", "amore"),
            ("pt", "amor"),
            ("ru", "любовь"),
            ("zh", "爱"),
            ("ja", "愛"),
            ("ko", "사랑"),
            ("ar", "حب"),
            ("tr", "aşk"),
            ("nl", "liefde"),
            ("sv", "kärlek"),
            ("no", "kjærlighet"),
            ("fi", "rakkaus"),
            ("pl", "miłość"),
            ("he", "אהבה"),
            ("fa", "عشق"),
            ("th", "ความรัก"),
            ("vi", "tình yêu"),
            ("id", "cinta"),
            ("ms", "cinta"),
            ("tl", "pag-ibig"),
            ("sw", "upendo"),
        ],
    ),
    (
        "time",
        &[
            ("te", "సమయం"),
            ("hi", "समय"),
            ("ta", "நேரம்"),
            ("kn", "ಸಮಯ"),
            ("ml", "സമയം"),
            ("mr", "वेळ"),
            ("bn", "সময়"),
            ("pa", "ਸਮਾਂ"),
            ("ur", "وقت"),
            ("gu", "સમય"),
            ("or", "ସମୟ"),
            ("as", "সময়"),
            ("fr", "temps"),
            ("es", "tiempo"),
            ("de", "zeit"),
            ("it", "tempo"),
            ("pt", "tempo"),
            ("ru", "время"),
            ("zh", "时间"),
            ("ja", "時間"),
            ("ko", "시간"),
            ("ar", "وقت"),
            ("tr", "zaman"),
            ("nl", "tijd"),
            ("sv", "tid"),
            ("no", "tid"),
            ("fi", "aika"),
            ("pl", "czas"),
            ("he", "זמן"),
            ("fa", "زمان"),
            ("th", "เวลา"),
            ("vi", "thời gian"),
            ("id", "waktu"),
            ("ms", "masa"),
            ("tl", "oras"),
            ("sw", "wakati"),
        ],
    ),
    (
        "money",
        &[
            ("te", "డబ్బు"),
            ("hi", "पैसा"),
            ("ta", "பணம்"),
            ("kn", "ಹಣ"),
            ("ml", "പണം"),
            ("mr", "पैसा"),
            ("bn", "টাকা"),
            ("pa", "ਪੈਸਾ"),
            ("ur", "پیسہ"),
            ("gu", "પૈસા"),
            ("or", "ଟଙ୍କା"),
            ("as", "টকা"),
            ("fr", "argent"),
            ("es", "dinero"),
            ("de", "geld"),
            ("it", "soldi"),
            ("pt", "dinheiro"),
            ("ru", "деньги"),
            ("zh", "钱"),
            ("ja", "お金"),
            ("ko", "돈"),
            ("ar", "مال"),
            ("tr", "para"),
            ("nl", "geld"),
            ("sv", "pengar"),
            ("no", "penger"),
            ("fi", "raha"),
            ("pl", "pieniądze"),
            ("he", "כסף"),
            ("fa", "پول"),
            ("th", "เงิน"),
            ("vi", "tiền"),
            ("id", "uang"),
            ("ms", "wang"),
            ("tl", "pera"),
            ("sw", "pesa"),
        ],
    ),
    (
        "house",
        &[
            ("te", "ఇల్లు"),
            ("hi", "घर"),
            ("ta", "வீடு"),
            ("kn", "ಮನೆ"),
            ("ml", "വീട്"),
            ("mr", "घर"),
            ("bn", "বাড়ি"),
            ("pa", "ਘਰ"),
            ("ur", "گھر"),
            ("gu", "ઘર"),
            ("or", "ଘର"),
            ("as", "ঘৰ"),
            ("fr", "maison"),
            ("es", "casa"),
            ("de", "haus"),
            ("it", "casa"),
            ("pt", "casa"),
            ("ru", "дом"),
            ("zh", "房子"),
            ("ja", "家"),
            ("ko", "집"),
            ("ar", "بيت"),
            ("tr", "ev"),
            ("nl", "huis"),
            ("sv", "hus"),
            ("no", "hus"),
            ("fi", "talo"),
            ("pl", "dom"),
            ("he", "בית"),
            ("fa", "خانه"),
            ("th", "บ้าน"),
            ("vi", "nhà"),
            ("id", "rumah"),
            ("ms", "rumah"),
            ("tl", "bahay"),
            ("sw", "nyumba"),
        ],
    ),
    (
        "friend",
        &[
            ("te", "స్నేహితుడు"),
            ("hi", "दोस्त"),
            ("ta", "நண்பன்"),
            ("kn", "ಸ್ನೇಹಿತ"),
            ("ml", "സുഹൃത്ത്"),
            ("mr", "मित्र"),
            ("bn", "বন্ধু"),
            ("pa", "ਦੋਸਤ"),
            ("ur", "دوست"),
            ("gu", "મિત્ર"),
            ("or", "ବନ୍ଧୁ"),
            ("as", "বন্ধু"),
            ("fr", "ami"),
            ("es", "amigo"),
            ("de", "freund"),
            ("it", "amico"),
            ("pt", "amigo"),
            ("ru", "друг"),
            ("zh", "朋友"),
            ("ja", "友達"),
            ("ko", "친구"),
            ("ar", "صديق"),
            ("tr", "arkadaş"),
            ("nl", "vriend"),
            ("sv", "vän"),
            ("no", "venn"),
            ("fi", "ystävä"),
            ("pl", "przyjaciel"),
            ("he", "חבר"),
            ("fa", "دوست"),
            ("th", "เพื่อน"),
            ("vi", "bạn"),
            ("id", "teman"),
            ("ms", "kawan"),
            ("tl", "kaibigan"),
            ("sw", "rafiki"),
        ],
    ),
    (
        "family",
        &[
            ("te", "కుటుంబం"),
            ("hi", "परिवार"),
            ("ta", "குடும்பம்"),
            ("kn", "ಕುಟುಂಬ"),
            ("ml", "കുടുംബം"),
            ("mr", "कुटुंब"),
            ("bn", "পরিবার"),
            ("pa", "ਪਰਿਵਾਰ"),
            ("ur", "خاندان"),
            ("gu", "કુટુંબ"),
            ("or", "ପରିବାର"),
            ("as", "পৰিয়াল"),
            ("fr", "famille"),
            ("es", "familia"),
            ("de", "familie"),
            ("it", "famiglia"),
            ("pt", "família"),
            ("ru", "семья"),
            ("zh", "家庭"),
            ("ja", "家族"),
            ("ko", "가족"),
            ("ar", "عائلة"),
            ("tr", "aile"),
            ("nl", "familie"),
            ("sv", "familj"),
            ("no", "familie"),
            ("fi", "perhe"),
            ("pl", "rodzina"),
            ("he", "משפחה"),
            ("fa", "خانواده"),
            ("th", "ครอบครัว"),
            ("vi", "gia đình"),
            ("id", "keluarga"),
            ("ms", "keluarga"),
            ("tl", "pamilya"),
            ("sw", "familia"),
        ],
    ),
    (
        "work",
        &[
            ("te", "పని"),
            ("hi", "काम"),
            ("ta", "வேலை"),
            ("kn", "ಕೆಲಸ"),
            ("ml", "പണി"),
            ("mr", "काम"),
            ("bn", "কাজ"),
            ("pa", "ਕੰਮ"),
            ("ur", "کام"),
            ("gu", "કામ"),
            ("or", "କାମ"),
            ("as", "কাম"),
            ("fr", "travail"),
            ("es", "trabajo"),
            ("de", "arbeit"),
            ("it", "lavoro"),
            ("pt", "trabalho"),
            ("ru", "работа"),
            ("zh", "工作"),
            ("ja", "仕事"),
            ("ko", "일"),
            ("ar", "عمل"),
            ("tr", "iş"),
            ("nl", "werk"),
            ("sv", "arbete"),
            ("no", "arbeid"),
            ("fi", "työ"),
            ("pl", "praca"),
            ("he", "עבודה"),
            ("fa", "کار"),
            ("th", "งาน"),
            ("vi", "công việc"),
            ("id", "kerja"),
            ("ms", "kerja"),
            ("tl", "trabaho"),
            ("sw", "kazi"),
        ],
    ),
    (
        "school",
        &[
            ("te", "పాఠశాల"),
            ("hi", "स्कूल"),
            ("ta", "பள்ளி"),
            ("kn", "ಶಾಲೆ"),
            ("ml", "സ്കൂൾ"),
            ("mr", "शाळा"),
            ("bn", "স্কুল"),
            ("pa", "ਸਕੂਲ"),
            ("ur", "سکول"),
            ("gu", "શાળા"),
            ("or", "ବିଦ୍ୟାଳୟ"),
            ("as", "স্কুল"),
            ("fr", "école"),
            ("es", "escuela"),
            ("de", "schule"),
            ("it", "scuola"),
            ("pt", "escola"),
            ("ru", "школа"),
            ("zh", "学校"),
            ("ja", "学校"),
            ("ko", "학교"),
            ("ar", "مدرسة"),
            ("tr", "okul"),
            ("nl", "school"),
            ("sv", "skola"),
            ("no", "skole"),
            ("fi", "koulu"),
            ("pl", "szkoła"),
            ("he", "בית ספר"),
            ("fa", "مدرسه"),
            ("th", "โรงเรียน"),
            ("vi", "trường học"),
            ("id", "sekolah"),
            ("ms", "sekolah"),
            ("tl", "paaralan"),
            ("sw", "shule"),
        ],
    ),
    (
        "book",
        &[
            ("te", "పుస్తకం"),
            ("hi", "किताब"),
            ("ta", "புத்தகம்"),
            ("kn", "ಪುಸ್ತಕ"),
            ("ml", "പുസ്തകം"),
            ("mr", "पुस्तक"),
            ("bn", "বই"),
            ("pa", "ਕਿਤਾਬ"),
            ("ur", "کتاب"),
            ("gu", "પુસ્તક"),
            ("or", "ବହି"),
            ("as", "কিতাপ"),
            ("fr", "livre"),
            ("es", "libro"),
            ("de", "buch"),
            ("it", "libro"),
            ("pt", "livro"),
            ("ru", "книга"),
            ("zh", "书"),
            ("ja", "本"),
            ("ko", "책"),
            ("ar", "كتاب"),
            ("tr", "kitap"),
            ("nl", "boek"),
            ("sv", "bok"),
            ("no", "bok"),
            ("fi", "kirja"),
            ("pl", "książka"),
            ("he", "ספר"),
            ("fa", "کتاب"),
            ("th", "หนังสือ"),
            ("vi", "sách"),
            ("id", "buku"),
            ("ms", "buku"),
            ("tl", "aklat"),
            ("sw", "kitabu"),
        ],
    ),
    (
        "car",
        &[
            ("te", "కారు"),
            ("hi", "कार"),
            ("ta", "கார்"),
            ("kn", "ಕಾರು"),
            ("ml", "കാർ"),
            ("mr", "कार"),
            ("bn", "গাড়ি"),
            ("pa", "ਕਾਰ"),
            ("ur", "گاڑی"),
            ("gu", "કાર"),
            ("or", "କାର"),
            ("as", "গাড়ী"),
            ("fr", "voiture"),
            ("es", "coche"),
            ("de", "auto"),
            ("it", "macchina"),
            ("pt", "carro"),
            ("ru", "машина"),
            ("zh", "汽车"),
            ("ja", "車"),
            ("ko", "자동차"),
            ("ar", "سيارة"),
            ("tr", "araba"),
            ("nl", "auto"),
            ("sv", "bil"),
            ("no", "bil"),
            ("fi", "auto"),
            ("pl", "samochód"),
            ("he", "מכונית"),
            ("fa", "ماشین"),
            ("th", "รถยนต์"),
            ("vi", "xe hơi"),
            ("id", "mobil"),
            ("ms", "kereta"),
            ("tl", "kotse"),
            ("sw", "gari"),
        ],
    ),
];

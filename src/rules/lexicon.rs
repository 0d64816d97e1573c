//! Stop words and synonym groups.

use once_cell::sync::Lazy;
use regex::Regex;

static STOP_WORDS: &[&str] = &[
    "ve", "bir", "bu", "da", "de", "den", "ile", "için", "gibi", "kadar", "sonra", "önce", "üzere", "diye", "beri", "ama",
    "fakat", "ancak", "lakin", "çünkü", "ise", "eğer", "ki", "ya", "yahut", "veya", "hem", "ne", "hangi", "nasıl",
    "nerede", "ne zaman", "niye", "niçin", "kim", "kimin", "kime", "kimi",
];

/// Canonical term and the words rewritten to it.
static SYNONYMS: &[(&str, &[&str])] = &[
    ("ekle", &["oluştur", "yap", "kaydet", "gir", "add", "create", "save"]),
    ("göster", &["listele", "bul", "ara", "getir", "show", "list", "find", "search"]),
    ("güncelle", &["değiştir", "düzenle", "revize et", "update", "edit", "modify"]),
    ("sil", &["kaldır", "çıkar", "iptal et", "delete", "remove", "cancel"]),
    ("gönder", &["ilet", "yolla", "bildir", "send", "notify", "deliver"]),
    ("rapor", &["analiz", "özet", "istatistik", "report", "analysis", "summary"]),
    ("hak sahibi", &["muhtaç", "yardım alan", "beneficiary", "kişi", "birey"]),
    ("bağış", &["donation", "para", "ödeme", "tahsilat", "gelir", "money"]),
    ("toplantı", &["meeting", "görüşme", "randevu", "buluşma", "conference"]),
    ("görev", &["task", "iş", "atama", "assignment", "work", "job"]),
    ("mesaj", &["message", "bilgi", "duyuru", "haber", "text", "notification"]),
];

/// One whole-word, case-insensitive matcher per synonym, in table order.
static SYNONYM_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SYNONYMS
        .iter()
        .flat_map(|(canonical, synonyms)| synonyms.iter().map(move |s| (*canonical, *s)))
        .filter_map(|(canonical, synonym)| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(synonym))).ok().map(|re| (re, canonical))
        })
        .collect()
});

/// Rewrite every synonym to its canonical term ("listele" -> "göster").
///
/// Replacements run in table order over the progressively rewritten text.
pub fn expand_synonyms(text: &str) -> String {
    SYNONYM_PATTERNS.iter().fold(text.to_string(), |acc, (re, canonical)| re.replace_all(&acc, *canonical).into_owned())
}

/// Drop whitespace tokens that are stop words (case-insensitive) and rejoin
/// the rest with single spaces.
///
/// ```
/// assert_eq!(komut::remove_stop_words("Bu bağış ve yardım için"), "bağış yardım");
/// ```
pub fn remove_stop_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(&word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

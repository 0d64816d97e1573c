//! Trigger scanning and text normalization.
//!
//! This module inspects the raw input and produces the coarse signals the
//! rest of the pipeline works from:
//!
//! - **Buckets** (`BucketMask`): cheap booleans such as "contains digits" or
//!   "contains an uppercase letter", used to enable bucketed entity rules via
//!   `RuleIndex::by_bucket`.
//! - **Words**: the whitespace tokens of the normalized input, fed to the
//!   keyword-scoring classifier.
//!
//! Normalization is Turkish-aware: the dotted capital `İ` folds to `i` instead
//! of `i` + combining dot, and Turkish letters survive punctuation stripping.

use super::compiled_rules::BucketMask;

/// Input characteristics detected from the raw input.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
    pub words: Vec<String>,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets and normalized words.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if input.chars().any(char::is_uppercase) {
            buckets |= BucketMask::HAS_UPPER;
        }
        if input.contains('@') {
            buckets |= BucketMask::HAS_AT;
        }
        if input.contains(':') || input.contains('=') {
            buckets |= BucketMask::HAS_ASSIGN;
        }
        if input.contains('-') {
            buckets |= BucketMask::HAS_DASH;
        }

        let words = normalize_text(input).split_whitespace().map(str::to_string).collect();

        TriggerInfo { buckets, words }
    }
}

/// Lowercase `text`, replace everything except letters, digits, whitespace,
/// `-`, `.` and `:` with spaces, and collapse whitespace runs.
///
/// The result is trimmed, so `normalize_text(normalize_text(s)) == normalize_text(s)`.
///
/// ```
/// assert_eq!(komut::normalize_text("  İzmir'deki BAĞIŞLAR!! "), "izmir deki bağişlar");
/// ```
pub fn normalize_text(text: &str) -> String {
    let folded: String = text.chars().map(|c| if c == 'İ' { 'i' } else { c }).collect();
    let lowered = folded.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        // Combining dot above left behind by lowercasing a dotted capital.
        if c == '\u{307}' {
            continue;
        }
        let keep = c.is_alphanumeric() || c == '_' || c == '-' || c == '.' || c == ':';
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_strips_punctuation() {
        assert_eq!(normalize_text("Yeni   bağış, ekle!"), "yeni bağış ekle");
        assert_eq!(normalize_text("id: 12-ab"), "id: 12-ab");
        assert_eq!(normalize_text("??"), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn normalize_folds_dotted_capital_i() {
        assert_eq!(normalize_text("İPTAL"), "iptal");
        assert_eq!(normalize_text("İstanbul"), "istanbul");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "  !merhaba  ",
            "Ahmet Yılmaz için yeni bağış ekle 500 TL",
            "05321234567 numaralı kişiyi sil",
            "e-posta: ali@ornek.com, id=7",
            "İİİ\t\n???ÇĞÖŞÜ",
            "son 7 gün rapor",
        ];
        for s in samples {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn scan_detects_buckets() {
        let info = TriggerInfo::scan("Ali ali@ornek.com id=5 2024-01-02");
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS));
        assert!(info.buckets.contains(BucketMask::HAS_UPPER));
        assert!(info.buckets.contains(BucketMask::HAS_AT));
        assert!(info.buckets.contains(BucketMask::HAS_ASSIGN));
        assert!(info.buckets.contains(BucketMask::HAS_DASH));

        let info = TriggerInfo::scan("bugün toplantı listele");
        assert!(info.buckets.is_empty());
        assert_eq!(info.words, vec!["bugün", "toplantı", "listele"]);
    }
}

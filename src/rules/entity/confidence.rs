//! Per-kind confidence heuristics.
//!
//! Each function looks at the matched text only. Scores are fixed steps, not
//! probabilities: a well-formed shape gets the high value, anything else the
//! low one.

pub(crate) fn default_confidence(_: &str) -> f64 {
    0.7
}

pub(crate) fn email_confidence(body: &str) -> f64 {
    if regex!(r"@.+\..+").is_match(body) { 0.95 } else { 0.6 }
}

/// International `+90` prefix followed by ten contiguous digits.
pub(crate) fn phone_confidence(body: &str) -> f64 {
    if regex!(r"\+90\s?\d{10}").is_match(body) { 0.9 } else { 0.7 }
}

pub(crate) fn id_confidence(body: &str) -> f64 {
    if regex!(r"(?i)[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}").is_match(body) { 0.95 } else { 0.8 }
}

/// Amounts with a decimal part are less likely to be a stray number.
pub(crate) fn money_confidence(body: &str) -> f64 {
    if regex!(r"\d+[.,]\d+").is_match(body) { 0.9 } else { 0.8 }
}

pub(crate) fn date_confidence(body: &str) -> f64 {
    if regex!(r"\d{1,2}[./]\d{1,2}[./]\d{4}").is_match(body) { 0.9 } else { 0.7 }
}

/// Exactly two capitalized words.
pub(crate) fn person_confidence(body: &str) -> f64 {
    if regex!(r"^[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+\s+[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+$").is_match(body) { 0.8 } else { 0.6 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_shapes_score_high() {
        assert_eq!(email_confidence("ali@ornek.com"), 0.95);
        assert_eq!(phone_confidence("+905321234567"), 0.9);
        assert_eq!(id_confidence("123e4567-e89b-12d3-a456-426614174000"), 0.95);
        assert_eq!(money_confidence("250,50 TL"), 0.9);
        assert_eq!(date_confidence("15/03/2024"), 0.9);
        assert_eq!(person_confidence("Ahmet Yılmaz"), 0.8);
    }

    #[test]
    fn other_shapes_score_low() {
        assert_eq!(phone_confidence("05321234567"), 0.7);
        assert_eq!(phone_confidence("+90 532 123 45 67"), 0.7);
        assert_eq!(id_confidence("id=42"), 0.8);
        assert_eq!(money_confidence("500 TL"), 0.8);
        assert_eq!(date_confidence("2024-03-15"), 0.7);
        assert_eq!(date_confidence("bugün"), 0.7);
        assert_eq!(person_confidence("Mehmet Ali Kaya"), 0.6);
        assert_eq!(default_confidence("anything"), 0.7);
    }
}

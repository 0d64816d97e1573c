//! Entity rule table.
//!
//! One `EntityRule` per regex. Rules are grouped by kind and the groups are
//! declared in scan order: date, person, money, phone, email, id, number,
//! status, location. Declaration order breaks ties between equal-confidence
//! spans of the same length (see `engine/conflicts.rs`), so a phone wins over
//! the bare number it also is.

pub(crate) mod confidence;
pub(crate) mod normalize;

#[cfg(test)]
mod tests;

use crate::engine::BucketMask;
use crate::{EntityKind, EntityRule};
use confidence::{
    date_confidence, default_confidence, email_confidence, id_confidence, money_confidence, person_confidence,
    phone_confidence,
};

// Dates

fn rule_date_dotted() -> EntityRule {
    entity_rule! {
        name: "date (dd.mm.yyyy)",
        kind: EntityKind::Date,
        pattern: r"\b\d{1,2}\.\d{1,2}\.\d{4}\b",
        buckets: BucketMask::HAS_DIGITS,
        confidence: date_confidence,
    }
}

fn rule_date_slashed() -> EntityRule {
    entity_rule! {
        name: "date (dd/mm/yyyy)",
        kind: EntityKind::Date,
        pattern: r"\b\d{1,2}/\d{1,2}/\d{4}\b",
        buckets: BucketMask::HAS_DIGITS,
        confidence: date_confidence,
    }
}

fn rule_date_iso() -> EntityRule {
    entity_rule! {
        name: "date (yyyy-mm-dd)",
        kind: EntityKind::Date,
        pattern: r"\b\d{4}-\d{1,2}-\d{1,2}\b",
        buckets: BucketMask::HAS_DIGITS,
        confidence: date_confidence,
    }
}

fn rule_today() -> EntityRule {
    entity_rule! {
        name: "today",
        kind: EntityKind::Date,
        pattern: r"(?i)\b(?:bugün|today)\b",
        confidence: date_confidence,
    }
}

fn rule_yesterday() -> EntityRule {
    entity_rule! {
        name: "yesterday",
        kind: EntityKind::Date,
        pattern: r"(?i)\b(?:dün|yesterday)\b",
        confidence: date_confidence,
    }
}

fn rule_tomorrow() -> EntityRule {
    entity_rule! {
        name: "tomorrow",
        kind: EntityKind::Date,
        pattern: r"(?i)\b(?:yarın|tomorrow)\b",
        confidence: date_confidence,
    }
}

/// "geçen hafta", "bu hafta", "gelecek hafta" and the English forms.
fn rule_relative_week() -> EntityRule {
    entity_rule! {
        name: "relative week",
        kind: EntityKind::Date,
        pattern: r"(?i)\b(?:(?:geçen|bu|gelecek) hafta|(?:last|this|next) week)\b",
        confidence: date_confidence,
    }
}

fn rule_relative_month() -> EntityRule {
    entity_rule! {
        name: "relative month",
        kind: EntityKind::Date,
        pattern: r"(?i)\b(?:(?:geçen|bu|gelecek) ay|(?:last|this|next) month)\b",
        confidence: date_confidence,
    }
}

/// "son 7 gün", "son 2 hafta", "son 3 ay".
fn rule_last_n() -> EntityRule {
    entity_rule! {
        name: "last <n> <unit>",
        kind: EntityKind::Date,
        pattern: r"(?i)\bson\s+\d+\s+(?:gün|hafta|ay)",
        buckets: BucketMask::HAS_DIGITS,
        confidence: date_confidence,
    }
}

// People

/// Two or three capitalized words.
fn rule_person() -> EntityRule {
    entity_rule! {
        name: "person",
        kind: EntityKind::Person,
        pattern: r"\b[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+\s+[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+(?:\s+[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+)?\b",
        buckets: BucketMask::HAS_UPPER,
        confidence: person_confidence,
    }
}

// Money

fn rule_money_try() -> EntityRule {
    entity_rule! {
        name: "money (try)",
        kind: EntityKind::Money,
        pattern: r"(?i)\d+(?:[.,]\d+)?\s*(?:tl|lira|₺)",
        buckets: BucketMask::HAS_DIGITS,
        confidence: money_confidence,
    }
}

fn rule_money_eur() -> EntityRule {
    entity_rule! {
        name: "money (eur)",
        kind: EntityKind::Money,
        pattern: r"(?i)\d+(?:[.,]\d+)?\s*(?:euro|eur|€)",
        buckets: BucketMask::HAS_DIGITS,
        confidence: money_confidence,
    }
}

fn rule_money_usd() -> EntityRule {
    entity_rule! {
        name: "money (usd)",
        kind: EntityKind::Money,
        pattern: r"(?i)\d+(?:[.,]\d+)?\s*(?:dolar|dollar|usd|\$)",
        buckets: BucketMask::HAS_DIGITS,
        confidence: money_confidence,
    }
}

fn rule_money_gbp() -> EntityRule {
    entity_rule! {
        name: "money (gbp)",
        kind: EntityKind::Money,
        pattern: r"(?i)\d+(?:[.,]\d+)?\s*(?:pound|gbp|£)",
        buckets: BucketMask::HAS_DIGITS,
        confidence: money_confidence,
    }
}

// Phones

/// "+90 532 123 45 67", "5321234567". The digit groups must be a whole word
/// so an 11-digit "0532..." is not read as its first ten digits.
fn rule_phone_grouped() -> EntityRule {
    entity_rule! {
        name: "phone (grouped)",
        kind: EntityKind::Phone,
        pattern: r"(?:\+90\s?|\b0\s?|\b)\d{3}\s?\d{3}\s?\d{2}\s?\d{2}\b",
        buckets: BucketMask::HAS_DIGITS,
        confidence: phone_confidence,
    }
}

fn rule_phone_eleven_digits() -> EntityRule {
    entity_rule! {
        name: "phone (11 digits)",
        kind: EntityKind::Phone,
        pattern: r"\b\d{11}\b",
        buckets: BucketMask::HAS_DIGITS,
        confidence: phone_confidence,
    }
}

// Email

fn rule_email() -> EntityRule {
    entity_rule! {
        name: "email",
        kind: EntityKind::Email,
        pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        buckets: BucketMask::HAS_AT,
        confidence: email_confidence,
    }
}

// Identifiers

fn rule_id_assignment() -> EntityRule {
    entity_rule! {
        name: "id (assignment)",
        kind: EntityKind::Id,
        pattern: r"(?i)\b(?:id|kimlik)\s*[:=]\s*[a-z0-9-]+",
        buckets: BucketMask::HAS_ASSIGN,
        confidence: id_confidence,
    }
}

fn rule_uuid() -> EntityRule {
    entity_rule! {
        name: "uuid",
        kind: EntityKind::Id,
        pattern: r"(?i)\b[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}\b",
        buckets: BucketMask::HAS_DASH,
        confidence: id_confidence,
    }
}

// Numbers, status words, places

fn rule_number() -> EntityRule {
    entity_rule! {
        name: "number",
        kind: EntityKind::Number,
        pattern: r"\b\d+\b",
        buckets: BucketMask::HAS_DIGITS,
        confidence: default_confidence,
    }
}

fn rule_status() -> EntityRule {
    entity_rule! {
        name: "status",
        kind: EntityKind::Status,
        pattern: r"(?i)\b(?:aktif|active|pasif|inactive|beklemede|pending|tamamlandı|completed|iptal|cancelled)\b",
        confidence: default_confidence,
    }
}

/// Capitalized place name followed by an administrative suffix
/// ("Kadıköy ilçesi", "Atatürk caddesi").
fn rule_location() -> EntityRule {
    entity_rule! {
        name: "location",
        kind: EntityKind::Location,
        pattern: r"\b[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+(?:\s+[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+)*\s+(?:ili|ilçesi|mahallesi|caddesi|sokağı)\b",
        buckets: BucketMask::HAS_UPPER,
        confidence: default_confidence,
    }
}

pub(crate) fn get() -> Vec<EntityRule> {
    vec![
        rule_date_dotted(),
        rule_date_slashed(),
        rule_date_iso(),
        rule_today(),
        rule_yesterday(),
        rule_tomorrow(),
        rule_relative_week(),
        rule_relative_month(),
        rule_last_n(),
        rule_person(),
        rule_money_try(),
        rule_money_eur(),
        rule_money_usd(),
        rule_money_gbp(),
        rule_phone_grouped(),
        rule_phone_eleven_digits(),
        rule_email(),
        rule_id_assignment(),
        rule_uuid(),
        rule_number(),
        rule_status(),
        rule_location(),
    ]
}

//! Parameter, target and condition patterns for the command pipeline.
//!
//! Parameters are read from the original input: names need capitalization and
//! amounts and ids need symbols (`€`, `=`) that normalization strips. Targets
//! and conditions are read from the normalized text.

use crate::command::{Conditions, Module, Parameters};
use crate::rules::entity::normalize::{normalize_money, normalize_number};
use crate::value::Status;
use regex::Regex;

pub(crate) fn extract_parameters(input: &str) -> Parameters {
    Parameters {
        numbers: regex!(r"\d+").find_iter(input).map(|m| normalize_number(m.as_str())).collect(),
        dates: dates(input),
        names: regex!(r"\b[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+\s+[A-ZÇĞIİÖŞÜ][a-zçğıiöşü]+")
            .find_iter(input)
            .map(|m| m.as_str().to_string())
            .collect(),
        ids: regex!(r"(?i)\b(?:id|kimlik)\s*[:=]\s*([a-z0-9-]+)")
            .captures_iter(input)
            .filter_map(|caps| caps.get(1).map(|g| g.as_str().to_string()))
            .collect(),
        amounts: regex!(r"(?i)\d+(?:[.,]\d+)?\s*(?:tl|lira|₺|euro|eur|€|dolar|dollar|usd|\$|pound|gbp|£)")
            .find_iter(input)
            .map(|m| normalize_money(m.as_str()))
            .collect(),
    }
}

/// Raw date phrases, in pattern order then input order.
fn dates(input: &str) -> Vec<String> {
    let patterns: [&Regex; 8] = [
        regex!(r"\b\d{1,2}\.\d{1,2}\.\d{4}\b"),
        regex!(r"\b\d{1,2}/\d{1,2}/\d{4}\b"),
        regex!(r"\b\d{4}-\d{1,2}-\d{1,2}\b"),
        regex!(r"(?i)\b(?:bugün|today)\b"),
        regex!(r"(?i)\b(?:dün|yesterday)\b"),
        regex!(r"(?i)\b(?:yarın|tomorrow)\b"),
        regex!(r"(?i)\b(?:bu hafta|this week)\b"),
        regex!(r"(?i)\b(?:bu ay|this month)\b"),
    ];
    patterns.iter().flat_map(|re| re.find_iter(input).map(|m| m.as_str().to_string())).collect()
}

/// Free-text target following a module keyword ("bağış <target>").
pub(crate) fn extract_target(text: &str, module: Module) -> Option<String> {
    let patterns: Vec<&Regex> = match module {
        Module::Beneficiaries => vec![
            regex!(r"hak sahibi\s+([a-zçğıöşü\s]+)"),
            regex!(r"kişi\s+([a-zçğıöşü\s]+)"),
            regex!(r"id\s*[:=]\s*([a-z0-9-]+)"),
        ],
        Module::Donations => vec![regex!(r"bağış\s+([a-zçğıöşü\s]+)"), regex!(r"ödeme\s+([a-zçğıöşü\s]+)")],
        _ => Vec::new(),
    };

    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1).map(|g| g.as_str().trim().to_string()))
        .filter(|target| !target.is_empty())
}

/// Status, "last N days" and "first N" filters. Later status words override
/// earlier ones ("inactive" contains "active").
pub(crate) fn extract_conditions(text: &str) -> Conditions {
    let mut conditions = Conditions::default();

    if text.contains("aktif") || text.contains("active") {
        conditions.status = Some(Status::Active);
    }
    if text.contains("pasif") || text.contains("inactive") {
        conditions.status = Some(Status::Inactive);
    }
    if text.contains("beklemede") || text.contains("pending") {
        conditions.status = Some(Status::Pending);
    }

    if let Some(caps) = regex!(r"\b(?:son|last)\s+(\d+)\s+(?:gün|days?)").captures(text) {
        conditions.last_days = caps[1].parse().ok();
    }
    if let Some(caps) = regex!(r"\b(?:ilk|first)\s+(\d+)").captures(text) {
        conditions.limit = caps[1].parse().ok();
    }

    conditions
}

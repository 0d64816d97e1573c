//! Intent classification.
//!
//! Two classifiers share the `Intent` vocabulary:
//!
//! - **Pattern table** (`classify_patterns`): intents are tried in declaration
//!   order and the first one with a matching regex wins at that intent's fixed
//!   confidence. No match is `UNKNOWN` at 0.
//! - **Keyword scoring** (`classify_keywords`): every word adds weight to the
//!   intents its keyword rules boost, entities add small bonuses, and the
//!   highest score wins. Ties go to the intent declared first in the table;
//!   an all-zero table is `UNKNOWN`.

use crate::command::Intent;
use crate::rules::intent::keywords::KeywordTable;
use crate::{Entity, IntentRule};

/// Starting confidence of the keyword classifier.
const BASE_CONFIDENCE: f64 = 0.3;
const INTENT_BONUS: f64 = 0.3;
const PER_ENTITY_BONUS: f64 = 0.1;
const ENTITY_BONUS_CAP: f64 = 0.3;
const STRONG_ENTITY_BONUS: f64 = 0.1;
const STRONG_ENTITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Classification {
    pub intent: Intent,
    pub confidence: f64,
    /// Per-intent scores in table order (keyword scoring only).
    pub scores: Vec<(Intent, f64)>,
}

pub(crate) fn classify_patterns(text: &str, rules: &[IntentRule]) -> Classification {
    let hit = rules.iter().find(|rule| rule.patterns.iter().any(|p| p.is_match(text)));
    let (intent, confidence) = hit.map(|rule| (rule.intent, rule.confidence)).unwrap_or((Intent::Unknown, 0.0));
    tracing::debug!(%intent, confidence, "pattern classification");
    Classification { intent, confidence, scores: Vec::new() }
}

pub(crate) fn score_keywords(words: &[&str], entities: &[Entity], table: &KeywordTable) -> Vec<(Intent, f64)> {
    let mut scores: Vec<(Intent, f64)> = table.intents.iter().map(|&intent| (intent, 0.0)).collect();
    let mut bump = |boosts: &[(Intent, f64)]| {
        for &(intent, weight) in boosts {
            if let Some(slot) = scores.iter_mut().find(|(i, _)| *i == intent) {
                slot.1 += weight;
            }
        }
    };

    for word in words {
        for rule in table.words.iter().filter(|r| r.keywords.contains(word)) {
            tracing::trace!(rule = rule.name, word = *word, "keyword hit");
            bump(rule.boosts);
        }
    }
    for entity in entities {
        for boost in table.entity_boosts.iter().filter(|b| b.kind == entity.kind) {
            bump(boost.boosts);
        }
    }

    scores
}

/// Highest positive score, earliest-declared on ties.
fn pick_intent(scores: &[(Intent, f64)]) -> Intent {
    let mut best: Option<(Intent, f64)> = None;
    for &(intent, score) in scores {
        let better = match best {
            None => score > 0.0,
            Some((_, top)) => score > top,
        };
        if better {
            best = Some((intent, score));
        }
    }
    best.map(|(intent, _)| intent).unwrap_or(Intent::Unknown)
}

pub(crate) fn classify_keywords(text: &str, entities: &[Entity], table: &KeywordTable) -> Classification {
    let words: Vec<&str> = text.split_whitespace().collect();
    let scores = score_keywords(&words, entities, table);
    let intent = pick_intent(&scores);
    let confidence = entity_confidence(intent, entities);
    tracing::debug!(%intent, confidence, ?scores, "keyword classification");
    Classification { intent, confidence, scores }
}

/// `0.3` base, `+0.3` for a known intent, `+0.1` per entity (at most `+0.3`),
/// `+0.1` per entity above `0.8` confidence; capped at `1.0`.
pub(crate) fn entity_confidence(intent: Intent, entities: &[Entity]) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    if intent != Intent::Unknown {
        confidence += INTENT_BONUS;
    }
    confidence += (entities.len() as f64 * PER_ENTITY_BONUS).min(ENTITY_BONUS_CAP);
    let strong = entities.iter().filter(|e| e.confidence > STRONG_ENTITY_THRESHOLD).count();
    confidence += strong as f64 * STRONG_ENTITY_BONUS;
    confidence.min(1.0)
}

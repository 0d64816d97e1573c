//! The two interpretation pipelines.
//!
//! ```text
//! analyze:   input ─ Extractor::run ─ classify_keywords ─ entity_confidence
//!
//! interpret: input ─ normalize_text ─ classify (patterns | keywords)
//!                                   ─ detect module ─ detect operation
//!                                   ─ parameters ─ target ─ conditions
//!                                   ─ action ─ ProcessedCommand
//! ```
//!
//! Both are pure functions of the input, the `Context` and the `Tables`.

use super::classify::{Classification, classify_keywords, classify_patterns};
use super::compiled_rules::Tables;
use super::extractor::Extractor;
use super::metrics::RunResult;
use super::trigger::normalize_text;
use crate::command::{Intent, Metadata, Operation, ProcessedCommand};
use crate::rules::command::{extract_conditions, extract_parameters, extract_target};
use crate::rules::domain::Lexicon;
use crate::{Classifier, Context, Entity, EntityRule, Options, ResolvedToken};
use std::time::{Duration, Instant};

impl ResolvedToken {
    pub(crate) fn to_entity(&self) -> Entity {
        Entity {
            kind: self.node.kind,
            value: self.node.body.clone(),
            normalized: self.value.clone(),
            confidence: self.node.confidence,
            start: self.node.range.start,
            end: self.node.range.end,
            rule: self.node.rule_name.to_string(),
        }
    }
}

/// Everything the keyword pipeline produced for one input.
#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    pub processed_text: String,
    pub entities: Vec<Entity>,
    pub classification: Classification,
    pub run: RunResult,
    pub active_rules: Vec<&'static str>,
    pub classify: Duration,
}

pub(crate) fn extract_entities(input: &str, context: &Context, rules: &[EntityRule]) -> Vec<Entity> {
    Extractor::new(input, rules).run(context).iter().map(ResolvedToken::to_entity).collect()
}

pub(crate) fn analyze(input: &str, context: &Context, tables: &Tables) -> Analysis {
    let extractor = Extractor::new(input, tables.entities);
    let active_rules = extractor.active_rule_names();
    let run = extractor.run_with_metrics(context);
    let entities: Vec<Entity> = run.tokens.iter().map(ResolvedToken::to_entity).collect();

    let processed_text = normalize_text(input);
    let classify_start = Instant::now();
    let classification = classify_keywords(&processed_text, &entities, tables.keywords);
    let classify = classify_start.elapsed();

    Analysis { processed_text, entities, classification, run, active_rules, classify }
}

/// First entry of `table` with any keyword contained in `text`.
///
/// Matching is by substring so Turkish suffixed forms ("kişiyi", "bağışları")
/// still hit their stem.
pub(crate) fn detect_in<T: Copy>(text: &str, table: Lexicon<T>) -> Option<T> {
    table.iter().find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw))).map(|(tag, _)| *tag)
}

/// Operation tag if present, else the intent's default verb, else `"unknown"`.
pub(crate) fn map_action(intent: Intent, operation: Option<Operation>) -> String {
    operation.map(Operation::as_str).or_else(|| intent.action()).unwrap_or("unknown").to_string()
}

pub(crate) fn interpret(input: &str, context: &Context, options: &Options, tables: &Tables) -> ProcessedCommand {
    let normalized = normalize_text(input);

    let classification = match options.classifier {
        Classifier::Patterns => classify_patterns(&normalized, tables.intents),
        Classifier::Keywords => {
            let entities = extract_entities(input, context, tables.entities);
            classify_keywords(&normalized, &entities, tables.keywords)
        }
    };

    let module = detect_in(&normalized, tables.modules);
    let operation = detect_in(&normalized, tables.operations);
    let parameters = extract_parameters(input);
    let target = module.and_then(|m| extract_target(&normalized, m));
    let conditions = extract_conditions(&normalized);
    let action = map_action(classification.intent, operation);

    tracing::debug!(
        intent = %classification.intent,
        module = ?module,
        operation = ?operation,
        action = %action,
        "command interpreted"
    );

    ProcessedCommand {
        intent: classification.intent,
        confidence: classification.confidence,
        parameters,
        action,
        module,
        operation,
        target,
        conditions,
        metadata: Metadata {
            original_input: input.to_string(),
            normalized_input: normalized,
            timestamp: context.reference_time,
        },
    }
}

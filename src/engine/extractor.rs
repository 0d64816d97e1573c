//! Entity extraction.
//!
//! This module is the operational core of the engine:
//!
//! - Select the entity rules that are plausible for the input (bucket gating;
//!   see `compiled_rules.rs` and `trigger.rs`).
//! - Run every active rule's regex over the whole input and turn each
//!   non-overlapping match into a `Node` with a confidence score.
//! - Resolve nodes into `ResolvedToken`s (see `resolve.rs`) and drop
//!   overlapping spans (see `conflicts.rs`).
//!
//! ## Pass structure
//!
//! ```text
//! (0) trigger scan     -> buckets + words
//! (1) extraction pass  -> one Node per regex match, in rule declaration order
//! (2) resolve          -> typed value per Node
//! (3) conflicts        -> sorted, non-overlapping ResolvedTokens
//! ```
//!
//! The output is deterministic given the same input, rules and context.

use super::compiled_rules::{BUCKETS, CompiledRules, RuleId};
use super::conflicts::resolve_conflicts;
use super::metrics::{PassMetrics, RunMetrics, RunResult};
use super::resolve::resolve_node;
use super::trigger::TriggerInfo;
use crate::{Context, EntityRule, Node, Range, ResolvedToken};
use std::collections::BTreeSet;
use std::time::Instant;

/// Extractor runs a set of `EntityRule`s against an input string.
///
/// Usage: create with `Extractor::new(input, &rules)` then call `run(context)`.
#[derive(Debug)]
pub struct Extractor<'a> {
    /// Input text to scan.
    input: &'a str,
    /// Compiled rules (shared reference).
    compiled: CompiledRules<'a>,
    /// Active rule ids, ascending (declaration order).
    active: Vec<RuleId>,
}

impl<'a> Extractor<'a> {
    /// Create a new `Extractor` for `input` using pre-compiled rules.
    pub fn new_compiled(input: &'a str, compiled: CompiledRules<'a>) -> Self {
        let trigger_info = TriggerInfo::scan(input);
        tracing::debug!(buckets = ?trigger_info.buckets, words = trigger_info.words.len(), "trigger scan");

        let mut active: BTreeSet<RuleId> = compiled.index.always_on.iter().copied().collect();
        for (slot, bucket) in BUCKETS.iter().enumerate() {
            if trigger_info.buckets.contains(*bucket) {
                active.extend(&compiled.index.by_bucket[slot]);
            }
        }

        tracing::debug!(active = active.len(), total = compiled.rules.len(), "entity rules active");

        Extractor { input, compiled, active: active.into_iter().collect() }
    }

    /// Create a new `Extractor` for `input` using `rules`.
    ///
    /// Convenience wrapper that builds a temporary `CompiledRules`.
    pub fn new(input: &'a str, rules: &'a [EntityRule]) -> Self {
        Self::new_compiled(input, CompiledRules::new(rules))
    }

    pub(crate) fn active_rule_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.active.iter().map(|&id| self.compiled.rules[id].name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Run one rule over the whole input.
    ///
    /// ```text
    /// input: "500 TL ve 20 TL"
    /// rule:  money (try)  (\d+)\s*tl
    /// nodes: [0..6 "500 TL"], [10..15 "20 TL"]
    /// ```
    fn scan_rule(&self, id: RuleId, rule: &EntityRule) -> Vec<Node> {
        rule.pattern
            .find_iter(self.input)
            .filter(|m| m.start() < m.end())
            .map(|m| {
                let body = m.as_str().to_string();
                let confidence = (rule.confidence)(&body);
                tracing::trace!(rule = rule.name, start = m.start(), end = m.end(), body = %body, confidence, "match");
                Node {
                    range: Range { start: m.start(), end: m.end() },
                    kind: rule.kind,
                    body,
                    confidence,
                    rule_name: rule.name,
                    rule_id: id,
                }
            })
            .collect()
    }

    /// Apply every active rule once and return the nodes produced, grouped by
    /// rule in declaration order.
    fn extract(&self) -> (Vec<Node>, usize) {
        let mut discovered = Vec::new();
        let mut rules_matched = 0;
        for &id in &self.active {
            let nodes = self.scan_rule(id, self.compiled.rules[id]);
            if !nodes.is_empty() {
                rules_matched += 1;
            }
            discovered.extend(nodes);
        }
        (discovered, rules_matched)
    }

    /// Run extraction, resolution and conflict resolution, and return timing
    /// details alongside the tokens.
    pub fn run_with_metrics(self, context: &Context) -> RunResult {
        let total_start = Instant::now();

        let extract_start = Instant::now();
        let (nodes, rules_matched) = self.extract();
        let extract = PassMetrics {
            duration: extract_start.elapsed(),
            produced: nodes.len(),
            rules_considered: self.active.len(),
            rules_matched,
        };

        let resolve_start = Instant::now();
        let all_tokens: Vec<ResolvedToken> = nodes.into_iter().map(|node| resolve_node(context, node)).collect();
        let resolve = resolve_start.elapsed();

        let conflicts_start = Instant::now();
        let tokens = resolve_conflicts(all_tokens.clone());
        let conflicts = conflicts_start.elapsed();

        tracing::debug!(candidates = all_tokens.len(), kept = tokens.len(), "entities resolved");

        RunResult { all_tokens, tokens, metrics: RunMetrics { total: total_start.elapsed(), extract, resolve, conflicts } }
    }

    /// Run the extractor and return the resolved, non-overlapping tokens.
    ///
    /// Convenience wrapper that discards timing details.
    pub fn run(self, context: &Context) -> Vec<ResolvedToken> {
        self.run_with_metrics(context).tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BucketMask;
    use crate::rules::entity::confidence::default_confidence;
    use crate::{EntityKind, Value};
    use chrono::NaiveDate;

    fn context() -> Context {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
        Context { reference_time: reference }
    }

    fn number_rule() -> EntityRule {
        entity_rule! {
            name: "number",
            kind: EntityKind::Number,
            pattern: r"\b\d+\b",
            buckets: BucketMask::HAS_DIGITS,
            confidence: default_confidence,
        }
    }

    #[test]
    fn extracts_every_match_with_offsets() {
        let rules = vec![number_rule()];
        let tokens = Extractor::new("ilk 10 kayıt, sonra 25", &rules).run(&context());

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].node.range, Range { start: 4, end: 6 });
        assert_eq!(tokens[0].value, Value::Number(10));
        assert_eq!(tokens[1].node.body, "25");
        assert_eq!(tokens[1].value, Value::Number(25));
    }

    #[test]
    fn bucketed_rules_stay_inactive_without_trigger() {
        let rules = vec![number_rule()];
        let extractor = Extractor::new("rakam yok", &rules);
        assert!(extractor.active_rule_names().is_empty());
        assert!(extractor.run(&context()).is_empty());
    }

    #[test]
    fn metrics_count_candidates_before_conflicts() {
        let rules = vec![
            number_rule(),
            entity_rule! {
                name: "digits",
                kind: EntityKind::Number,
                pattern: r"\d+",
                buckets: BucketMask::HAS_DIGITS,
                confidence: default_confidence,
            },
        ];
        let run = Extractor::new("42", &rules).run_with_metrics(&context());

        assert_eq!(run.metrics.extract.produced, 2);
        assert_eq!(run.metrics.extract.rules_matched, 2);
        assert_eq!(run.all_tokens.len(), 2);
        assert_eq!(run.tokens.len(), 1);
        assert_eq!(run.tokens[0].node.rule_name, "number");
    }
}

//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the structures derived
//! from the rule tables that make a run cheaper and keep it deterministic.
//!
//! Interpretation is split into two phases:
//!
//! 1. **Compile/index rules** (this module): wrap the entity rules in a
//!    `CompiledRules` indexed by coarse input buckets, and bundle every table
//!    the pipeline reads into a `Tables` value.
//! 2. **Run** (see `extractor.rs` and `interpret.rs`): scan the input for
//!    buckets (`trigger.rs`), select the entity rules that can possibly match,
//!    extract, resolve and classify.
//!
//! ## Buckets
//!
//! A bucket is a cheap boolean feature of the input ("contains an `@`"). A rule
//! that declares buckets is only activated when the input has at least one of
//! them; a rule without buckets is always on. Buckets must never hide a rule
//! that could match: they describe characters the rule's regex cannot match
//! without.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules`, which keeps the
//!   declaration order of the table.

use crate::command::{Module, Operation};
use crate::rules::domain::Lexicon;
use crate::rules::intent::keywords::KeywordTable;
use crate::{EntityRule, IntentRule};

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const HAS_UPPER  = 1 << 1;
        const HAS_AT     = 1 << 2;
        const HAS_ASSIGN = 1 << 3;
        const HAS_DASH   = 1 << 4;
    }
}

pub const BUCKET_COUNT: usize = 5;

/// Bucket bits in index order; `RuleIndex::by_bucket[i]` holds the rules of `BUCKETS[i]`.
pub const BUCKETS: [BucketMask; BUCKET_COUNT] =
    [BucketMask::HAS_DIGITS, BucketMask::HAS_UPPER, BucketMask::HAS_AT, BucketMask::HAS_ASSIGN, BucketMask::HAS_DASH];

#[derive(Default, Debug)]
pub struct RuleIndex {
    pub always_on: Vec<RuleId>,
    pub by_bucket: [Vec<RuleId>; BUCKET_COUNT],
}

/// Entity rule set indexed by trigger bucket.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a EntityRule>,
    pub index: RuleIndex,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from a slice of rules.
    ///
    /// This does not touch the regexes; they are compiled lazily on first use
    /// and shared across runs.
    pub fn new(rules: &'a [EntityRule]) -> Self {
        let rule_refs: Vec<&EntityRule> = rules.iter().collect();

        let mut index = RuleIndex::default();
        for (id, rule) in rule_refs.iter().enumerate() {
            let buckets = BucketMask::from_bits_truncate(rule.buckets);
            if buckets.is_empty() {
                index.always_on.push(id);
                continue;
            }
            for (slot, bucket) in BUCKETS.iter().enumerate() {
                if buckets.contains(*bucket) {
                    index.by_bucket[slot].push(id);
                }
            }
        }

        CompiledRules { rules: rule_refs, index }
    }
}

/// Every table the interpretation pipeline reads.
///
/// The defaults live in `rules/**`; tests and embedders can swap any of them.
#[derive(Debug, Clone, Copy)]
pub struct Tables<'a> {
    pub entities: &'a [EntityRule],
    pub intents: &'a [IntentRule],
    pub keywords: &'a KeywordTable,
    pub modules: Lexicon<Module>,
    pub operations: Lexicon<Operation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityKind;
    use crate::rules::entity::confidence::default_confidence;

    fn rules() -> Vec<EntityRule> {
        vec![
            entity_rule! {
                name: "status",
                kind: EntityKind::Status,
                pattern: r"aktif",
                confidence: default_confidence,
            },
            entity_rule! {
                name: "number",
                kind: EntityKind::Number,
                pattern: r"\d+",
                buckets: BucketMask::HAS_DIGITS,
                confidence: default_confidence,
            },
            entity_rule! {
                name: "email",
                kind: EntityKind::Email,
                pattern: r"\S+@\S+",
                buckets: BucketMask::HAS_AT,
                confidence: default_confidence,
            },
        ]
    }

    #[test]
    fn indexes_rules_by_bucket() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);

        assert_eq!(compiled.index.always_on, vec![0]);
        assert_eq!(compiled.index.by_bucket[0], vec![1]);
        assert_eq!(compiled.index.by_bucket[2], vec![2]);
        assert!(compiled.index.by_bucket[1].is_empty());
        assert_eq!(compiled.rules.len(), 3);
    }
}

//! Extraction and interpretation engine.
//!
//! This module is the entry point for the mechanics behind the public API. The
//! rule tables live in `src/rules/**`; everything here is table-agnostic and
//! works on whatever `Tables` it is handed.
//!
//! ## How the parts work together
//!
//! ```text
//! entity rules ──┐
//!                │  CompiledRules::new            (compiled_rules.rs)
//!                └───────────────┬──────────────
//!                                │
//! input ── TriggerInfo::scan ────┼─ select active rules (buckets)
//!          (trigger.rs)          │
//!                                v
//!                      Extractor::extract (extractor.rs)
//!                        - one Node per regex match
//!                                │
//!                                v
//!                      resolve_node (resolve.rs)
//!                        - per-kind normalization
//!                                │
//!                                v
//!                      resolve_conflicts (conflicts.rs)
//!                        - sorted, non-overlapping spans
//!                                │
//!                                v
//!                         Vec<ResolvedToken> ──> Entity
//!
//! normalize_text (trigger.rs) ──> classify_patterns | classify_keywords
//!                                 (classify.rs)
//!
//! entities + classification ──> analyze | interpret (interpret.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: indexes entity rules by bucket and bundles every
//!   table the pipeline reads into `Tables`.
//! - `trigger.rs`: computes coarse buckets and the normalized text.
//! - `extractor.rs`: runs the active rules and drives resolution and conflict
//!   handling.
//! - `resolve.rs`: attaches typed values to raw matches.
//! - `conflicts.rs`: the deterministic overlap policy.
//! - `classify.rs`: the pattern-table and keyword-scoring classifiers.
//! - `interpret.rs`: the NLP analysis and the command interpretation built on
//!   top of the above.
//! - `metrics.rs`: timing data for verbose runs.
//!
//! ## Adding rules
//!
//! - Entity rules go in `src/rules/entity/mod.rs`. If a rule needs a new
//!   coarse trigger, add a `BucketMask` bit and teach `TriggerInfo::scan` to
//!   set it.
//! - A new entity kind needs a branch in `resolve.rs`.
//!
//! ## Debugging
//!
//! Run the binary with `KOMUT_LOG=komut=trace` to see activation, matches and
//! overlap decisions.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/conflicts.rs"]
mod conflicts;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/interpret.rs"]
mod interpret;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

#[cfg(test)]
pub(crate) use classify::{classify_keywords, classify_patterns};
pub use compiled_rules::{BucketMask, Tables};
pub(crate) use interpret::{Analysis, analyze, extract_entities, interpret};
pub use trigger::normalize_text;

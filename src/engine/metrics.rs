//! Engine run metrics.
//!
//! - `Extractor::run` for normal operation.
//! - `Extractor::run_with_metrics` for profiling and for the verbose analysis
//!   surfaced by `analyze_verbose_with`.

use crate::ResolvedToken;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Extractor::run_with_metrics`](super::Extractor::run_with_metrics).
    pub total: Duration,
    pub extract: PassMetrics,
    /// Time spent normalizing candidates.
    pub resolve: Duration,
    /// Time spent dropping overlapping candidates.
    pub conflicts: Duration,
}

/// Timing and match counts for the extraction pass.
#[derive(Debug, Default, Clone)]
pub struct PassMetrics {
    pub duration: Duration,
    /// Number of candidate nodes produced.
    pub produced: usize,
    /// Number of active rules run.
    pub rules_considered: usize,
    /// Number of rules with at least one match.
    pub rules_matched: usize,
}

/// Extractor output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Every resolved candidate, before overlap resolution.
    pub all_tokens: Vec<ResolvedToken>,
    /// Sorted, non-overlapping tokens.
    pub tokens: Vec<ResolvedToken>,
    pub metrics: RunMetrics,
}

//! Overlap resolution for extracted entities.
//!
//! Several rules routinely match the same bytes: `500 TL` is both a money span
//! and a number, an 11-digit phone is also a number. This module reduces the
//! candidates to a set of non-overlapping spans.
//!
//! ## Ordering
//!
//! Candidates are sorted by:
//!
//! 1. `start` ascending
//! 2. span length descending (the longer reading comes first)
//! 3. rule declaration order
//!
//! Then they are walked once. A candidate that overlaps the last accepted one
//! replaces it only when its confidence is strictly higher; otherwise it is
//! dropped. Because accepted spans are disjoint and sorted, a candidate can only
//! ever overlap the last accepted span.

use crate::ResolvedToken;
use std::cmp::Reverse;

pub(crate) fn resolve_conflicts(mut tokens: Vec<ResolvedToken>) -> Vec<ResolvedToken> {
    tokens.sort_by_key(|t| (t.node.range.start, Reverse(t.node.range.len()), t.node.rule_id));

    let mut resolved: Vec<ResolvedToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match resolved.last_mut() {
            Some(last) if last.node.range.overlaps(&token.node.range) => {
                if token.node.confidence > last.node.confidence {
                    tracing::trace!(
                        kept = token.node.rule_name,
                        dropped = last.node.rule_name,
                        "overlap: higher confidence replaces accepted span"
                    );
                    *last = token;
                } else {
                    tracing::trace!(kept = last.node.rule_name, dropped = token.node.rule_name, "overlap");
                }
            }
            _ => resolved.push(token),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityKind, Node, Range, Value};

    fn token(start: usize, end: usize, confidence: f64, rule_id: usize) -> ResolvedToken {
        ResolvedToken {
            node: Node {
                range: Range { start, end },
                kind: EntityKind::Number,
                body: String::new(),
                confidence,
                rule_name: "test",
                rule_id,
            },
            value: Value::Number(0),
        }
    }

    fn spans(tokens: &[ResolvedToken]) -> Vec<(usize, usize)> {
        tokens.iter().map(|t| (t.node.range.start, t.node.range.end)).collect()
    }

    #[test]
    fn higher_confidence_wins_overlap() {
        let out = resolve_conflicts(vec![token(0, 3, 0.7, 0), token(0, 6, 0.8, 1)]);
        assert_eq!(spans(&out), vec![(0, 6)]);

        let out = resolve_conflicts(vec![token(2, 5, 0.95, 1), token(0, 4, 0.6, 0)]);
        assert_eq!(spans(&out), vec![(2, 5)]);
    }

    #[test]
    fn equal_confidence_keeps_longer_then_earlier_declared() {
        let out = resolve_conflicts(vec![token(0, 10, 0.7, 0), token(0, 11, 0.7, 1), token(0, 11, 0.7, 2)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].node.rule_id, 1);
    }

    #[test]
    fn disjoint_spans_are_sorted_and_kept() {
        let out = resolve_conflicts(vec![token(8, 9, 0.7, 0), token(0, 3, 0.7, 0), token(3, 8, 0.7, 1)]);
        assert_eq!(spans(&out), vec![(0, 3), (3, 8), (8, 9)]);
    }

    #[test]
    fn output_never_overlaps() {
        let mut input = Vec::new();
        for start in 0..12usize {
            for len in 1..5usize {
                let confidence = ((start * 7 + len * 3) % 10) as f64 / 10.0;
                input.push(token(start, start + len, confidence, (start + len) % 4));
            }
        }
        let out = resolve_conflicts(input);

        assert!(!out.is_empty());
        for pair in out.windows(2) {
            assert!(pair[0].node.range.end <= pair[1].node.range.start, "overlap in {:?}", spans(&out));
        }
    }
}

#[macro_use]
mod macros;
mod api;
mod command;
mod engine;
mod rules;
mod value;

use regex::Regex;
use serde::Serialize;

pub use api::{
    AnalyzeDetails, Classifier, CommandProcessor, Context, IntentScore, NlpResult, NlpResultVerbose, Options, analyze,
    analyze_verbose_with, analyze_with, command_suggestions, extract_entities, process, process_with,
};
pub use command::{CommandContext, Conditions, Intent, Metadata, Module, Operation, Parameters, ProcessedCommand};
pub use engine::normalize_text;
pub use rules::lexicon::{expand_synonyms, remove_stop_words};
pub use value::{Currency, Money, PersonName, Status, Value};

// --- Entities ---------------------------------------------------------------

/// Kind of span recognised by the entity extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Person,
    Date,
    Number,
    Money,
    Phone,
    Email,
    Id,
    Location,
    Status,
}

impl EntityKind {
    /// Uppercase tag, e.g. `"MONEY"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Person => "PERSON",
            EntityKind::Date => "DATE",
            EntityKind::Number => "NUMBER",
            EntityKind::Money => "MONEY",
            EntityKind::Phone => "PHONE",
            EntityKind::Email => "EMAIL",
            EntityKind::Id => "ID",
            EntityKind::Location => "LOCATION",
            EntityKind::Status => "STATUS",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, located span of the input.
///
/// `start`/`end` are byte offsets into the original input; `start < end`
/// always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Slice of the original input that matched.
    pub value: String,
    /// Typed value derived from `value`.
    pub normalized: Value,
    /// Heuristic certainty in `[0, 1]`.
    pub confidence: f64,
    pub start: usize,
    pub end: usize,
    /// Name of the rule that produced this entity.
    pub rule: String,
}

impl Entity {
    /// Returns true when the two spans share at least one byte.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

// --- Internal types ---------------------------------------------------------

pub(crate) type ConfidenceFn = fn(&str) -> f64;

/// One matcher of an entity group: a static regex plus the confidence
/// heuristic for what it matches. Normalization is dispatched by `kind`
/// (see `engine/resolve.rs`).
pub(crate) struct EntityRule {
    pub name: &'static str,
    pub kind: EntityKind,
    pub pattern: &'static Regex,
    pub confidence: ConfidenceFn,
    /// Bucket mask - rule only activates if input has a matching bucket.
    pub buckets: u32,
}

impl std::fmt::Debug for EntityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_str())
            .field("confidence", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}

/// Pattern-table intent: the first rule (in declaration order) with any
/// matching pattern decides the intent, at a fixed confidence.
#[derive(Debug)]
pub(crate) struct IntentRule {
    pub intent: command::Intent,
    pub patterns: Vec<&'static Regex>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Range {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A raw regex hit produced by the extractor, before normalization.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub range: Range,
    pub kind: EntityKind,
    pub body: String,
    pub confidence: f64,
    pub rule_name: &'static str,
    /// Declaration index of the producing rule; breaks ordering ties.
    pub rule_id: usize,
}

/// A `Node` with its normalized value attached.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedToken {
    pub node: Node,
    pub value: Value,
}

use crate::command::{CommandContext, Intent, ProcessedCommand};
use crate::engine::{self, Analysis, Tables};
use crate::rules;
use crate::{Entity, EntityRule, IntentRule, ResolvedToken};
use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

static DEFAULT_ENTITY_RULES: Lazy<Vec<EntityRule>> = Lazy::new(rules::entity::get);
static DEFAULT_INTENT_RULES: Lazy<Vec<IntentRule>> = Lazy::new(rules::intent::patterns::get);

fn default_tables() -> Tables<'static> {
    Tables {
        entities: &DEFAULT_ENTITY_RULES,
        intents: &DEFAULT_INTENT_RULES,
        keywords: &rules::intent::keywords::DEFAULT,
        modules: rules::domain::MODULES,
        operations: rules::domain::OPERATIONS,
    }
}

/// Interpretation context.
///
/// Relative dates ("bugün", "son 7 gün") resolve against `reference_time`, and
/// commands are stamped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    /// The current local time.
    fn default() -> Self {
        Self { reference_time: Local::now().naive_local() }
    }
}

/// Intent table used by [`process_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Classifier {
    /// Ordered regex table; the first matching intent wins.
    #[default]
    Patterns,
    /// Keyword and entity scoring, as used by [`analyze`].
    Keywords,
}

impl Classifier {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "patterns" | "pattern" => Some(Classifier::Patterns),
            "keywords" | "keyword" => Some(Classifier::Keywords),
            _ => None,
        }
    }
}

/// Options that affect command interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub classifier: Classifier,
}

/// Result from [`analyze`] and [`analyze_with`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NlpResult {
    pub intent: Intent,
    /// Resolved entities, sorted by position, non-overlapping.
    pub entities: Vec<Entity>,
    pub confidence: f64,
    /// Normalized input the intent was scored on.
    pub processed_text: String,
    /// Follow-up questions, at most three.
    pub suggestions: Vec<String>,
}

impl NlpResult {
    /// Entities grouped by lowercase type tag (`"money"`, `"person"`, ...).
    pub fn entity_map(&self) -> BTreeMap<String, Vec<&Entity>> {
        let mut map: BTreeMap<String, Vec<&Entity>> = BTreeMap::new();
        for entity in &self.entities {
            map.entry(entity.kind.as_str().to_lowercase()).or_default().push(entity);
        }
        map
    }
}

/// One row of the keyword-scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub score: f64,
}

/// Additional details returned by [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnalyzeDetails {
    /// Total elapsed time for entity extraction.
    pub total: Duration,
    pub extract: Duration,
    pub resolve: Duration,
    pub conflicts: Duration,
    pub classify: Duration,
    /// Entity rules run after bucket gating, how many of them matched, and
    /// the candidates they produced.
    pub rules_considered: usize,
    pub rules_matched: usize,
    pub produced: usize,
    /// Names of entity rules that were active for this input.
    pub active_rules: Vec<String>,
    /// Every resolved candidate before overlap resolution.
    pub all_candidates: Vec<Entity>,
    /// Keyword score per intent, in table order.
    pub scores: Vec<IntentScore>,
}

/// Result from [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct NlpResultVerbose {
    pub result: NlpResult,
    pub elapsed: Duration,
    pub details: AnalyzeDetails,
}

/// Analyze `text` with the default tables and a default [`Context`].
///
/// # Example
/// ```
/// use komut::{EntityKind, Intent, analyze};
///
/// let out = analyze("Ahmet Yılmaz için yeni bağış ekle 500 TL");
/// assert_eq!(out.intent, Intent::Create);
/// assert!(out.entities.iter().any(|e| e.kind == EntityKind::Money));
/// ```
pub fn analyze(text: &str) -> NlpResult {
    analyze_with(text, &Context::default())
}

/// Analyze `text` against `context`.
///
/// The NLP analysis always uses keyword scoring; its confidence reflects the
/// entities found as well as the intent.
pub fn analyze_with(text: &str, context: &Context) -> NlpResult {
    let analysis = engine::analyze(text, context, &default_tables());
    nlp_result(analysis)
}

/// Analyze `text` and return stage timings and intermediate results.
pub fn analyze_verbose_with(text: &str, context: &Context) -> NlpResultVerbose {
    let start = Instant::now();
    let analysis = engine::analyze(text, context, &default_tables());

    let metrics = analysis.run.metrics.clone();
    let details = AnalyzeDetails {
        total: metrics.total,
        extract: metrics.extract.duration,
        resolve: metrics.resolve,
        conflicts: metrics.conflicts,
        classify: analysis.classify,
        rules_considered: metrics.extract.rules_considered,
        rules_matched: metrics.extract.rules_matched,
        produced: metrics.extract.produced,
        active_rules: analysis.active_rules.iter().map(|s| s.to_string()).collect(),
        all_candidates: analysis.run.all_tokens.iter().map(ResolvedToken::to_entity).collect(),
        scores: analysis.classification.scores.iter().map(|&(intent, score)| IntentScore { intent, score }).collect(),
    };

    let result = nlp_result(analysis);
    NlpResultVerbose { result, elapsed: start.elapsed(), details }
}

fn nlp_result(analysis: Analysis) -> NlpResult {
    let Analysis { processed_text, entities, classification, .. } = analysis;
    let suggestions = rules::suggestions::follow_up(classification.intent, &entities);
    NlpResult { intent: classification.intent, entities, confidence: classification.confidence, processed_text, suggestions }
}

/// Interpret `text` as a command with the default tables, [`Context`] and [`Options`].
///
/// # Example
/// ```
/// use komut::{Intent, Module, process};
///
/// let cmd = process("05321234567 numaralı kişiyi sil");
/// assert_eq!(cmd.intent, Intent::Delete);
/// assert_eq!(cmd.module, Some(Module::Beneficiaries));
/// ```
pub fn process(text: &str) -> ProcessedCommand {
    process_with(text, &Context::default(), &Options::default())
}

pub fn process_with(text: &str, context: &Context, options: &Options) -> ProcessedCommand {
    engine::interpret(text, context, options, &default_tables())
}

/// Run entity extraction only.
pub fn extract_entities(text: &str, context: &Context) -> Vec<Entity> {
    engine::extract_entities(text, context, &DEFAULT_ENTITY_RULES)
}

/// Example commands for a partially typed input.
///
/// Inputs shorter than three characters get a fixed starter list; longer ones
/// get suggestions for the areas they mention (at most five).
pub fn command_suggestions(partial: &str) -> Vec<String> {
    rules::suggestions::command_suggestions(partial)
}

/// Caller-owned command interpreter.
///
/// Holds the caller's [`CommandContext`] next to the interpretation settings.
/// Without an explicit reference time each command is interpreted against the
/// clock at the time of the call.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessor {
    context: CommandContext,
    reference: Option<Context>,
    options: Options,
}

impl CommandProcessor {
    pub fn new(context: CommandContext) -> Self {
        CommandProcessor { context, ..Self::default() }
    }

    /// Interpret every command against `reference` instead of the clock.
    pub fn with_reference(mut self, reference: Context) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn process(&self, input: &str) -> ProcessedCommand {
        let reference = self.reference.unwrap_or_default();
        process_with(input, &reference, &self.options)
    }

    /// Merge `patch` into the stored context; fields left `None` are kept.
    pub fn update_context(&mut self, patch: CommandContext) {
        self.context.merge(patch);
        tracing::debug!(context = ?self.context, "command context updated");
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }
}

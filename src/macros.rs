#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build an `EntityRule` from a literal pattern.
///
/// ```text
/// entity_rule! {
///     name: "money (try)",
///     kind: EntityKind::Money,
///     pattern: r"(?i)\d+\s*tl",
///     buckets: BucketMask::HAS_DIGITS,
///     confidence: money_confidence,
/// }
/// ```
#[macro_export]
macro_rules! entity_rule {
    (
        name: $name:expr,
        kind: $kind:expr,
        pattern: $pat:literal
        $(, buckets: $buckets:expr)?
        , confidence: $confidence:expr
        $(,)?
    ) => {{
        $crate::EntityRule {
            name: $name,
            kind: $kind,
            pattern: $crate::regex!($pat),
            confidence: $confidence,
            buckets: { 0 $(| $buckets.bits())? },
        }
    }};
}

/// Build an `IntentRule` from one or more literal patterns.
#[macro_export]
macro_rules! intent_rule {
    (
        intent: $intent:expr,
        confidence: $confidence:expr,
        patterns: [ $($pat:literal),+ $(,)? ]
        $(,)?
    ) => {{
        $crate::IntentRule { intent: $intent, patterns: vec![ $($crate::regex!($pat)),+ ], confidence: $confidence }
    }};
}

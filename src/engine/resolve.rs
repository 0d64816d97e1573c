//! Token resolution.
//!
//! Extraction produces `Node`s: a span, an entity kind and the raw matched
//! text. Resolution turns a `Node` into a `ResolvedToken` by attaching the
//! typed value for its kind.
//!
//! ```text
//! Node ──┬─ DATE     -> Date / DateRange relative to Context::reference_time
//!        ├─ MONEY    -> Money { amount, currency }
//!        ├─ PHONE    -> "+90..." when the digits allow it
//!        ├─ PERSON   -> PersonName
//!        ├─ NUMBER   -> Number (0 when no digits)
//!        ├─ STATUS   -> Status, or the raw word
//!        └─ other    -> Text (raw)
//! ```
//!
//! Resolution never fails: anything a normalizer cannot interpret passes through
//! as `Value::Text`.

use crate::rules::entity::normalize::{
    normalize_date, normalize_money, normalize_number, normalize_person, normalize_phone, normalize_status,
};
use crate::{Context, EntityKind, Node, ResolvedToken, Value};

pub(crate) fn resolve_node(context: &Context, node: Node) -> ResolvedToken {
    let value = resolve(context, node.kind, &node.body);
    tracing::trace!(kind = %node.kind, range = ?node.range, value = %value, "resolve");
    ResolvedToken { node, value }
}

fn resolve(context: &Context, kind: EntityKind, body: &str) -> Value {
    match kind {
        EntityKind::Date => normalize_date(body, context.reference_time),
        EntityKind::Money => Value::Money(normalize_money(body)),
        EntityKind::Phone => Value::Phone(normalize_phone(body)),
        EntityKind::Person => Value::Person(normalize_person(body)),
        EntityKind::Number => normalize_number(body),
        EntityKind::Status => normalize_status(body),
        EntityKind::Email | EntityKind::Id | EntityKind::Location => Value::Text(body.to_string()),
    }
}

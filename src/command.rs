//! Command interpretation data model.
//!
//! A [`ProcessedCommand`] is built fresh for every input and never mutated
//! afterwards; the caller maps `{intent, module, operation}` onto whatever it
//! actually executes.

use crate::value::{Money, Status, Value};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Coarse action category of a command.
///
/// The pattern table produces `List`; the keyword scorer produces `Read` and
/// `Search` instead. `Automate` only comes from the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    Create,
    List,
    Read,
    Update,
    Delete,
    Search,
    Report,
    Navigate,
    Automate,
    Export,
    Notify,
    Unknown,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Create => "CREATE",
            Intent::List => "LIST",
            Intent::Read => "READ",
            Intent::Update => "UPDATE",
            Intent::Delete => "DELETE",
            Intent::Search => "SEARCH",
            Intent::Report => "REPORT",
            Intent::Navigate => "NAVIGATE",
            Intent::Automate => "AUTOMATE",
            Intent::Export => "EXPORT",
            Intent::Notify => "NOTIFY",
            Intent::Unknown => "UNKNOWN",
        }
    }

    /// Default action verb when no operation keyword was found.
    pub fn action(self) -> Option<&'static str> {
        match self {
            Intent::Create => Some("create"),
            Intent::List => Some("list"),
            Intent::Read => Some("read"),
            Intent::Update => Some("update"),
            Intent::Delete => Some("delete"),
            Intent::Search => Some("search"),
            Intent::Report => Some("report"),
            Intent::Navigate => Some("navigate"),
            Intent::Automate => Some("automate"),
            Intent::Export => Some("export"),
            Intent::Notify => Some("notify"),
            Intent::Unknown => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business area of the dashboard a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Beneficiaries,
    Donations,
    Aid,
    Meetings,
    Tasks,
    Messages,
    Scholarship,
    Fund,
    System,
}

impl Module {
    pub fn as_str(self) -> &'static str {
        match self {
            Module::Beneficiaries => "beneficiaries",
            Module::Donations => "donations",
            Module::Aid => "aid",
            Module::Meetings => "meetings",
            Module::Tasks => "tasks",
            Module::Messages => "messages",
            Module::Scholarship => "scholarship",
            Module::Fund => "fund",
            Module::System => "system",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation verb named by the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Edit,
    Delete,
    View,
    Export,
    Send,
    Approve,
    Reject,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Edit => "edit",
            Operation::Delete => "delete",
            Operation::View => "view",
            Operation::Export => "export",
            Operation::Send => "send",
            Operation::Approve => "approve",
            Operation::Reject => "reject",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values pulled out of the command text. Empty lists mean "no match".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameters {
    /// Digit runs in input order; runs that overflow `i64` stay as text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub numbers: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<Money>,
}

impl Parameters {
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
            && self.dates.is_empty()
            && self.names.is_empty()
            && self.ids.is_empty()
            && self.amounts.is_empty()
    }
}

/// Filters recognised in the command. Several may be present at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Conditions {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.last_days.is_none() && self.limit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub original_input: String,
    pub normalized_input: String,
    /// Reference time the command was interpreted against.
    pub timestamp: NaiveDateTime,
}

/// Result of [`process`](crate::process).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCommand {
    pub intent: Intent,
    pub confidence: f64,
    pub parameters: Parameters,
    /// Operation tag if one was found, else the intent's default verb, else `"unknown"`.
    pub action: String,
    pub module: Option<Module>,
    pub operation: Option<Operation>,
    pub target: Option<String>,
    pub conditions: Conditions,
    pub metadata: Metadata,
}

/// Caller-owned context handed to a [`CommandProcessor`](crate::CommandProcessor).
///
/// Interpretation does not read it today; it travels with the processor so
/// executors can consult it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandContext {
    pub user_id: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub current_module: Option<String>,
    pub selected_data: Option<Vec<serde_json::Value>>,
}

impl CommandContext {
    /// Shallow merge: every field set in `patch` replaces the stored one.
    pub fn merge(&mut self, patch: CommandContext) {
        let CommandContext { user_id, permissions, current_module, selected_data } = patch;
        if user_id.is_some() {
            self.user_id = user_id;
        }
        if permissions.is_some() {
            self.permissions = permissions;
        }
        if current_module.is_some() {
            self.current_module = current_module;
        }
        if selected_data.is_some() {
            self.selected_data = selected_data;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_fields_missing_from_patch() {
        let mut ctx = CommandContext {
            user_id: Some("u-1".to_string()),
            permissions: Some(vec!["donations.read".to_string()]),
            ..CommandContext::default()
        };
        ctx.merge(CommandContext { current_module: Some("donations".to_string()), ..CommandContext::default() });

        assert_eq!(ctx.user_id.as_deref(), Some("u-1"));
        assert_eq!(ctx.permissions, Some(vec!["donations.read".to_string()]));
        assert_eq!(ctx.current_module.as_deref(), Some("donations"));
        assert!(ctx.selected_data.is_none());
    }

    #[test]
    fn unknown_intent_has_no_default_action() {
        assert_eq!(Intent::Unknown.action(), None);
        assert_eq!(Intent::List.action(), Some("list"));
    }

    #[test]
    fn empty_parameters_serialize_to_empty_object() {
        let json = serde_json::to_string(&Parameters::default()).unwrap();
        assert_eq!(json, "{}");
    }
}

//! Static rule tables.
//!
//! - `entity`: entity matchers, confidence heuristics and value normalizers.
//! - `intent`: the pattern table and the keyword-scoring table.
//! - `domain`: module and operation lexicons.
//! - `command`: parameter, target and condition patterns for commands.
//! - `suggestions`: follow-up prompts and canned command suggestions.
//! - `lexicon`: stop words and synonyms.

pub(crate) mod command;
pub(crate) mod domain;
pub(crate) mod entity;
pub(crate) mod intent;
pub(crate) mod lexicon;
pub(crate) mod suggestions;

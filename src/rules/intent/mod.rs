//! Intent tables.
//!
//! - `patterns`: the command table. Ordered regexes per intent with a fixed
//!   confidence; the first intent with a match wins.
//! - `keywords`: the scoring table. Word and entity boosts summed per intent.

pub(crate) mod keywords;
pub(crate) mod patterns;

#[cfg(test)]
mod tests;

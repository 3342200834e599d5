//! Rules: unified, validated condition sets.
//!
//! - `unify`: drop conditions dominated by stricter co-present ones
//! - `Rule`: conditions plus mask and weight, with the validity checks the
//!   search applies
//! - `RuleWords`: word selection for rule text
//! - `RuleSet`: binary snapshot of a generated list

pub mod rule;
pub mod words;
pub mod snapshot;

pub use rule::{canonical, unify, ConditionKey, Rule};
pub use words::RuleWords;
pub use snapshot::RuleSet;

//! Error types.
//!
//! The core never parses untrusted input, so errors are few: catalog
//! construction defects, pruning preconditions, and snapshot decoding.

use thiserror::Error;

use crate::conditions::{Kind, NumberWord, Side, SuitWord};

/// A condition or vocabulary word that breaks a construction invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("{side:?} side cannot carry a {kind:?} condition with this value")]
    InvalidValue { side: Side, kind: Kind },

    #[error("number word `{}` covers {count} numbers, at least 3 are required", .word.name())]
    NarrowNumberWord { word: NumberWord, count: usize },

    #[error("suit word `{}` is neither one suit nor one color pair", .word.name())]
    MixedSuitWord { word: SuitWord },

    #[error("condition `{0}` appears twice in the catalog")]
    Duplicate(String),
}

/// A rule that cannot be built from the given conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("a rule needs at least one condition")]
    Empty,

    #[error("invalid condition: {0}")]
    Condition(#[from] ConditionError),
}

/// Pruning precondition failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PruneError {
    #[error("cannot prune {available} rules down to {target}")]
    TargetExceedsRules { target: usize, available: usize },
}

/// Rule-set snapshot encoding failures.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("snapshot holds an invalid rule: {0}")]
    InvalidRule(#[from] RuleError),
}

/// Any failure of a generation run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Prune(#[from] PruneError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

//! Run-scoped set of suppressed condition tuples.
//!
//! When a rule is accepted, the search pre-emptively blacklists its mirror
//! images (one lonely condition swapped for its complement) so that only
//! one member of each mirror family is ever emitted. Entries are stored in
//! canonical order.

use rustc_hash::FxHashSet;

use crate::conditions::Condition;
use crate::rules::{canonical, ConditionKey};

/// Suppressed condition tuples for one search run.
#[derive(Clone, Debug, Default)]
pub struct Blacklist {
    entries: FxHashSet<ConditionKey>,
}

impl Blacklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tuple. Returns `false` if it was already present.
    pub fn insert(&mut self, conditions: &[Condition]) -> bool {
        self.entries.insert(canonical(conditions))
    }

    #[must_use]
    pub fn contains(&self, conditions: &[Condition]) -> bool {
        self.entries.contains(canonical(conditions).as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! # crazy-rules
//!
//! Generates "you may not play X on Y" rule cards for Crazy-Eights-style
//! games.
//!
//! ## Design
//!
//! 1. **Masks over the pair space**: every predicate is a bitset over the
//!    2704 ordered (previous card, candidate card) pairs. A rule's mask is
//!    the intersection of its conditions' masks.
//!
//! 2. **Closed algebra**: conditions know which others are stricter,
//!    complementary, disjoint or confusing restatements. Search uses this
//!    to drop redundant, contradictory and mirror-image rules.
//!
//! 3. **Seeded search**: all 3-condition combinations of the catalog are
//!    visited in a shuffled order. Same seed, same rules.
//!
//! ## Modules
//!
//! - `core`: cards, pair space and masks, RNG, configuration, errors
//! - `conditions`: vocabulary, `Condition` and its algebra, `Catalog`
//! - `rules`: `Rule` construction and validity checks, snapshots
//! - `search`: lazy `RuleSearch` and the `generate` driver
//! - `prune`: greedy overlap pruning
//!
//! ## Example
//!
//! ```
//! use crazy_rules::{generate_with, GeneratorConfig};
//!
//! let config = GeneratorConfig::default().with_seed(9).with_target_count(40);
//! let generation = generate_with(&config).unwrap();
//! assert_eq!(generation.rule_set.len(), 40);
//! ```

pub mod core;
pub mod conditions;
pub mod rules;
pub mod search;
pub mod prune;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Suit,
    Mask, PairSpace, PAIR_COUNT,
    SearchRng,
    GeneratorConfig, SizeBand,
    Error, ConditionError, RuleError, PruneError, SnapshotError,
};

pub use crate::conditions::{
    Catalog, Condition, Side, Kind, Value, Comparator, Relation,
    NumberWord, SuitWord, VocabularyConfig, clashes,
};

pub use crate::rules::{unify, Rule, RuleSet, RuleWords};

pub use crate::search::{generate, generate_with, Generation, RuleSearch, SearchStats};

pub use crate::prune::{prune_rules, Pruner, PruneReport, OverlapHistogram};

//! Conditions: the atomic predicates rules are built from.
//!
//! ## Key Types
//!
//! - `NumberWord` / `SuitWord`: the closed vocabulary of card descriptions
//! - `Condition`: side, kind and value of one predicate, with its algebra
//!   (`overlaps`, `complements`, `disjoints`, `bad_representations`)
//! - `clashes`: set-level pathology check
//! - `Catalog`: validated condition list with cached masks

pub mod vocabulary;
pub mod condition;
pub mod algebra;
pub mod catalog;

pub use vocabulary::{NumberWord, RankSet, SuitSet, SuitWord, VocabularyConfig};
pub use condition::{Comparator, Condition, Kind, Relation, Side, Value};
pub use algebra::{clashes, Conditions};
pub use catalog::Catalog;

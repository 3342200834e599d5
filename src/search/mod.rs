//! Rule search.
//!
//! ## Key Types
//!
//! - `RuleSearch`: lazy iterator over valid rules from a catalog
//! - `Blacklist`: condition tuples suppressed for the rest of a run
//! - `SearchStats`: counters per rejection reason
//! - `generate` / `generate_with`: search plus optional pruning

pub mod blacklist;
pub mod generator;
pub mod stats;
pub mod driver;

pub use blacklist::Blacklist;
pub use generator::{combinations, RuleSearch};
pub use stats::{Rejection, SearchStats};
pub use driver::{generate, generate_with, Generation};

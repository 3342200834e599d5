//! Rule set pruning.
//!
//! - `Pruner`: greedy removal of rules that overlap too much with others
//! - `OverlapMatrix`: pairwise overlaps, computed in parallel
//! - `PruneReport`: overlap histograms before and after, removed indices

pub mod greedy;
pub mod report;

pub use greedy::{prune_rules, OverlapMatrix, Pruned, Pruner};
pub use report::{OverlapHistogram, PruneReport};

//! Greedy removal of rules that overlap too much.
//!
//! Two rules overlap excessively when they ban more than `limit / 16`
//! pairs in common. Each step removes the rule taking part in the most
//! excessive pairs. Once no excessive pair is left, each step removes the
//! rule with the largest overlap against any survivor. Ties go to the
//! lowest index.
//!
//! Overlaps are computed in parallel; removal is sequential.

use rayon::prelude::*;
use tracing::debug;

use crate::core::{PruneError, DEFAULT_OVERLAP_LIMIT_X16};
use crate::rules::Rule;

use super::report::{OverlapHistogram, PruneReport};

/// Pairwise overlaps of a rule list, upper triangle only.
#[derive(Clone, Debug)]
pub struct OverlapMatrix {
    rows: Vec<Vec<usize>>,
}

impl OverlapMatrix {
    #[must_use]
    pub fn new(rules: &[Rule]) -> Self {
        let rows = (0..rules.len())
            .into_par_iter()
            .map(|i| rules[i + 1..].iter().map(|other| rules[i].overlap(other)).collect())
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Overlap of rules `i` and `j`; zero on the diagonal.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => self.rows[i][j - i - 1],
            std::cmp::Ordering::Greater => self.rows[j][i - j - 1],
            std::cmp::Ordering::Equal => 0,
        }
    }

    /// Every unordered pair `(i, j, overlap)` with `i < j`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(offset, &overlap)| (i, i + offset + 1, overlap))
        })
    }

    /// Overlap histogram over pairs of rules kept by `alive`.
    fn histogram(&self, alive: &[bool]) -> OverlapHistogram {
        self.pairs()
            .filter(|&(i, j, _)| alive[i] && alive[j])
            .map(|(_, _, overlap)| overlap)
            .collect()
    }
}

/// Surviving rules and what pruning did.
#[derive(Clone, Debug)]
pub struct Pruned {
    /// Survivors in their original order.
    pub rules: Vec<Rule>,
    pub report: PruneReport,
}

/// Greedy overlap pruner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pruner {
    target: usize,
    overlap_limit_x16: u32,
}

impl Pruner {
    /// Prune down to `target` rules with the default overlap limit.
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            overlap_limit_x16: DEFAULT_OVERLAP_LIMIT_X16,
        }
    }

    #[must_use]
    pub fn with_overlap_limit_x16(mut self, limit: u32) -> Self {
        self.overlap_limit_x16 = limit;
        self
    }

    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// True if two rules sharing `overlap` pairs overlap excessively.
    #[must_use]
    pub fn is_excessive(&self, overlap: usize) -> bool {
        16 * overlap as u64 > u64::from(self.overlap_limit_x16)
    }

    /// Remove rules until `target` remain.
    pub fn prune(&self, rules: Vec<Rule>) -> Result<Pruned, PruneError> {
        let available = rules.len();
        if self.target > available {
            return Err(PruneError::TargetExceedsRules {
                target: self.target,
                available,
            });
        }

        let matrix = OverlapMatrix::new(&rules);
        let mut alive = vec![true; available];
        let mut excessive: Vec<(usize, usize)> = matrix
            .pairs()
            .filter(|&(_, _, overlap)| self.is_excessive(overlap))
            .map(|(i, j, _)| (i, j))
            .collect();
        let excessive_before = excessive.len();
        let before = matrix.histogram(&alive);

        let mut removed = Vec::with_capacity(available - self.target);
        for _ in self.target..available {
            let victim = if excessive.is_empty() {
                peak_overlap_victim(&matrix, &alive)
            } else {
                most_excessive_victim(&excessive, available)
            };
            let Some(victim) = victim else { break };

            alive[victim] = false;
            excessive.retain(|&(i, j)| i != victim && j != victim);
            removed.push(victim);
            debug!(
                rule = %rules[victim],
                excessive_left = excessive.len(),
                "pruned rule"
            );
        }

        let report = PruneReport {
            removed,
            after: matrix.histogram(&alive),
            before,
            excessive_before,
            excessive_after: excessive.len(),
        };
        let rules = rules
            .into_iter()
            .zip(&alive)
            .filter_map(|(rule, &keep)| keep.then_some(rule))
            .collect();
        Ok(Pruned { rules, report })
    }
}

/// Index with the largest value, first one on ties.
fn first_max(scores: impl Iterator<Item = (usize, usize)>) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, score) in scores {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

fn most_excessive_victim(excessive: &[(usize, usize)], len: usize) -> Option<usize> {
    let mut degree = vec![0usize; len];
    for &(i, j) in excessive {
        degree[i] += 1;
        degree[j] += 1;
    }
    first_max(degree.into_iter().enumerate().filter(|&(_, d)| d > 0))
}

fn peak_overlap_victim(matrix: &OverlapMatrix, alive: &[bool]) -> Option<usize> {
    let survivors: Vec<usize> = (0..alive.len()).filter(|&i| alive[i]).collect();
    first_max(survivors.iter().map(|&i| {
        let peak = survivors
            .iter()
            .filter(|&&j| j != i)
            .map(|&j| matrix.get(i, j))
            .max()
            .unwrap_or(0);
        (i, peak)
    }))
}

/// Prune `rules` down to `target` with the default overlap limit.
pub fn prune_rules(rules: Vec<Rule>, target: usize) -> Result<Vec<Rule>, PruneError> {
    Ok(Pruner::new(target).prune(rules)?.rules)
}

//! Overlap histograms and the pruning report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of rule pairs per overlap value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapHistogram(BTreeMap<usize, usize>);

impl OverlapHistogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, overlap: usize) {
        *self.0.entry(overlap).or_insert(0) += 1;
    }

    /// Pairs with exactly this overlap.
    #[must_use]
    pub fn count(&self, overlap: usize) -> usize {
        self.0.get(&overlap).copied().unwrap_or(0)
    }

    /// Pairs recorded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Largest overlap recorded.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    /// Pairs whose overlap exceeds `threshold`.
    #[must_use]
    pub fn count_above(&self, threshold: usize) -> usize {
        self.0.range(threshold + 1..).map(|(_, &n)| n).sum()
    }

    /// The `n` largest overlap values with their pair counts, ascending.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(usize, usize)> {
        let mut top: Vec<_> = self.0.iter().rev().take(n).map(|(&k, &v)| (k, v)).collect();
        top.reverse();
        top
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }
}

impl FromIterator<usize> for OverlapHistogram {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for overlap in iter {
            histogram.record(overlap);
        }
        histogram
    }
}

/// What a pruning pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Indices into the input list, in removal order.
    pub removed: Vec<usize>,

    /// Pairwise overlaps of the input list.
    pub before: OverlapHistogram,

    /// Pairwise overlaps of the survivors.
    pub after: OverlapHistogram,

    /// Excessive pairs in the input list.
    pub excessive_before: usize,

    /// Excessive pairs among the survivors.
    pub excessive_after: usize,
}

impl PruneReport {
    /// Share of input pairs that were excessive.
    #[must_use]
    pub fn excessive_rate_before(&self) -> f64 {
        rate(self.excessive_before, self.before.total())
    }

    /// Share of surviving pairs that are excessive.
    #[must_use]
    pub fn excessive_rate_after(&self) -> f64 {
        rate(self.excessive_after, self.after.total())
    }
}

fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram() {
        let histogram: OverlapHistogram = [10, 200, 10, 170, 0].into_iter().collect();
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.count(10), 2);
        assert_eq!(histogram.count(11), 0);
        assert_eq!(histogram.max(), Some(200));
        assert_eq!(histogram.count_above(165), 2);
        assert_eq!(histogram.count_above(200), 0);
        assert_eq!(histogram.top(2), vec![(170, 1), (200, 1)]);
        assert_eq!(histogram.iter().next(), Some((0, 1)));
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = OverlapHistogram::new();
        assert_eq!(histogram.max(), None);
        assert!(histogram.top(3).is_empty());
        assert_eq!(PruneReport::default().excessive_rate_after(), 0.0);
    }

    #[test]
    fn test_report_serialization() {
        let report = PruneReport {
            removed: vec![3, 1],
            before: [1, 2, 300].into_iter().collect(),
            after: [1].into_iter().collect(),
            excessive_before: 1,
            excessive_after: 0,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: PruneReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
        assert!((report.excessive_rate_before() - 1.0 / 3.0).abs() < 1e-12);
    }
}

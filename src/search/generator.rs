//! Lazy search over 3-condition combinations of a catalog.
//!
//! Every unordered triple of catalog conditions is visited once, in an
//! order shuffled by a seeded `SearchRng`. For each triple:
//!
//! 1. unify it; skip if the unified tuple is blacklisted
//! 2. skip if the conditions clash
//! 3. skip if more than one condition is disjoint with, or a bad
//!    restatement of, another member
//! 4. build the rule; require weight in band, conditional, canonical
//! 5. blacklist the mirror images of the rule and the rule itself, then
//!    emit it
//!
//! The blacklist makes results depend on visiting order, so the search is
//! single-threaded. Reproducible per seed; a different seed may keep the
//! other member of a mirror pair.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::conditions::{clashes, Catalog, Condition};
use crate::core::{SearchRng, SizeBand};
use crate::rules::{unify, Rule};

use super::blacklist::Blacklist;
use super::stats::{Rejection, SearchStats};

/// Every unordered index triple `i < j < k` below `n`, in lexicographic order.
#[must_use]
pub fn combinations(n: usize) -> Vec<[usize; 3]> {
    let mut out = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                out.push([i, j, k]);
            }
        }
    }
    out
}

/// Count members of `conditions` that some member rules out or restates.
fn antagonists(conditions: &[Condition]) -> usize {
    let enemies: FxHashSet<Condition> = conditions
        .iter()
        .flat_map(|c| c.disjoints().into_iter().chain(c.bad_representations()))
        .collect();
    conditions.iter().filter(|c| enemies.contains(c)).count()
}

/// Iterator yielding valid rules from a catalog.
///
/// Not restartable: a fresh search needs a fresh `RuleSearch`.
pub struct RuleSearch<'a> {
    catalog: &'a Catalog,
    order: Vec<[usize; 3]>,
    cursor: usize,
    blacklist: Blacklist,
    size_band: SizeBand,
    stats: SearchStats,
}

impl<'a> RuleSearch<'a> {
    /// Create a search visiting combinations in the order given by `seed`.
    pub fn new(catalog: &'a Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, &mut SearchRng::new(seed))
    }

    /// Create a search, shuffling the combinations with `rng`.
    pub fn with_rng(catalog: &'a Catalog, rng: &mut SearchRng) -> Self {
        let mut order = combinations(catalog.len());
        rng.shuffle(&mut order);
        Self {
            catalog,
            order,
            cursor: 0,
            blacklist: Blacklist::new(),
            size_band: SizeBand::default(),
            stats: SearchStats::default(),
        }
    }

    /// Accept rule weights in a custom band.
    #[must_use]
    pub fn with_size_band(mut self, band: SizeBand) -> Self {
        self.size_band = band;
        self
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Combinations not yet visited.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    fn reject(&mut self, reason: Rejection, conditions: &[Condition]) -> Option<Rule> {
        trace!(?reason, ?conditions, "rejected combination");
        self.stats.reject(reason);
        None
    }

    fn examine(&mut self, combination: [usize; 3]) -> Option<Rule> {
        self.stats.examined += 1;
        let drawn: SmallVec<[Condition; 3]> = combination
            .iter()
            .filter_map(|&i| self.catalog.get(i).copied())
            .collect();
        let unified = unify(&drawn);

        if self.blacklist.contains(&unified) {
            return self.reject(Rejection::Blacklisted, &unified);
        }
        if clashes(&unified) {
            return self.reject(Rejection::Clash, &unified);
        }
        if antagonists(&unified) > 1 {
            return self.reject(Rejection::Antagonistic, &unified);
        }

        let rule = match Rule::from_catalog(self.catalog, &unified) {
            Ok(rule) => rule,
            Err(err) => {
                debug!(%err, ?unified, "skipping unbuildable combination");
                return self.reject(Rejection::Invalid, &unified);
            }
        };
        if !rule.size_within(&self.size_band) {
            return self.reject(Rejection::OutOfBand, &unified);
        }
        if !rule.is_conditional() {
            return self.reject(Rejection::Unconditional, &unified);
        }
        if !rule.is_canonical() {
            return self.reject(Rejection::NonCanonical, &unified);
        }

        let lonely = rule.lonely_sides();
        for (i, condition) in unified.iter().enumerate() {
            if !lonely.contains(&condition.side()) {
                continue;
            }
            for complement in condition.complements() {
                let mut mirror = unified.clone();
                mirror[i] = complement;
                self.blacklist.insert(&mirror);
            }
        }
        self.blacklist.insert(&unified);

        self.stats.accepted += 1;
        self.stats.blacklist_entries = self.blacklist.len() as u32;
        trace!(%rule, "accepted rule");
        Some(rule)
    }
}

impl Iterator for RuleSearch<'_> {
    type Item = Rule;

    fn next(&mut self) -> Option<Rule> {
        while let Some(&combination) = self.order.get(self.cursor) {
            self.cursor += 1;
            if let Some(rule) = self.examine(combination) {
                return Some(rule);
            }
            if self.cursor == self.order.len() {
                debug!(
                    examined = self.stats.examined,
                    accepted = self.stats.accepted,
                    blacklisted = self.stats.blacklisted,
                    blacklist_entries = self.stats.blacklist_entries,
                    "rule search exhausted"
                );
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{NumberWord, Relation, Side, SuitWord};

    #[test]
    fn test_combinations() {
        assert_eq!(combinations(3), vec![[0, 1, 2]]);
        assert_eq!(combinations(4).len(), 4);
        assert_eq!(combinations(27).len(), 2925);
        assert!(combinations(2).is_empty());
    }

    #[test]
    fn test_antagonists() {
        let odd = Condition::previous_numbers(NumberWord::Odd);
        let even = Condition::previous_numbers(NumberWord::Even);
        let club = Condition::candidate_suits(SuitWord::Club);
        assert_eq!(antagonists(&[odd, club]), 0);
        assert_eq!(antagonists(&[odd, even, club]), 2);

        // same suit restates itself; one antagonist is tolerated
        let same_suit = Condition::compare_suits(Relation::Same);
        assert_eq!(antagonists(&[odd, same_suit]), 1);
        assert_eq!(antagonists(&[same_suit, club]), 1);
        let different_color = Condition::compare_colors(Relation::Different);
        assert_eq!(antagonists(&[same_suit, different_color]), 2);
    }

    #[test]
    fn test_unbuildable_combination_is_counted() {
        let catalog = Catalog::reference();
        let mut search = RuleSearch::new(catalog, 9);

        // indices past the catalog draw no conditions at all
        assert!(search.examine([100, 101, 102]).is_none());
        let stats = search.stats();
        assert_eq!(stats.invalid, 1);
        assert_eq!(stats.accepted + stats.rejected(), stats.examined);
        assert!(search.blacklist().is_empty());
    }

    #[test]
    fn test_visits_every_combination_once() {
        let catalog = Catalog::reference();
        let mut search = RuleSearch::new(catalog, 3);
        assert_eq!(search.remaining(), 2925);

        let emitted = search.by_ref().count() as u32;
        let stats = search.stats();
        assert_eq!(stats.examined, 2925);
        assert_eq!(stats.accepted, emitted);
        assert_eq!(stats.accepted + stats.rejected(), stats.examined);
        assert_eq!(search.remaining(), 0);
        assert_eq!(stats.blacklist_entries as usize, search.blacklist().len());
        assert!(stats.blacklist_entries >= stats.accepted);
        assert!(search.next().is_none());
    }

    #[test]
    fn test_emitted_rules_are_valid_and_distinct() {
        let catalog = Catalog::reference();
        let rules: Vec<Rule> = RuleSearch::new(catalog, 9).collect();
        assert!(!rules.is_empty());

        let mut keys = FxHashSet::default();
        for rule in &rules {
            assert!(rule.size_ok(), "{rule} has weight out of band");
            assert!(rule.is_conditional(), "{rule} is unconditional");
            assert!(rule.is_canonical(), "{rule} is not canonical");
            assert!(!clashes(rule.conditions()), "{rule} clashes");
            assert!(keys.insert(rule.key().clone()), "{rule} emitted twice");
        }
    }

    #[test]
    fn test_mirrors_are_suppressed() {
        let catalog = Catalog::reference();
        let rules: Vec<Rule> = RuleSearch::new(catalog, 9).collect();
        let keys: FxHashSet<_> = rules.iter().map(|r| r.key().clone()).collect();

        for rule in &rules {
            let lonely = rule.lonely_sides();
            for (i, condition) in rule.conditions().iter().enumerate() {
                if !lonely.contains(&condition.side()) {
                    continue;
                }
                for complement in condition.complements() {
                    let mut mirror = rule.key().clone();
                    mirror[i] = complement;
                    mirror.sort();
                    assert!(!keys.contains(&mirror), "{rule} and its mirror both emitted");
                }
            }
        }
    }

    #[test]
    fn test_empty_band_yields_nothing() {
        let catalog = Catalog::reference();
        let rules: Vec<Rule> = RuleSearch::new(catalog, 9)
            .with_size_band(SizeBand::new(0.0, 0.0))
            .collect();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_lonely_comparative_is_mirrored() {
        let catalog = Catalog::reference();
        let mut search = RuleSearch::new(catalog, 9);
        let rule = search
            .by_ref()
            .find(|r| r.on_side(Side::Comparative).count() == 1 && r.conditions().len() == 3)
            .expect("some rule has a single comparative");
        let comparative_index = rule
            .conditions()
            .iter()
            .position(|c| c.is_comparative())
            .unwrap();
        for complement in rule.conditions()[comparative_index].complements() {
            let mut mirror = rule.key().clone();
            mirror[comparative_index] = complement;
            assert!(search.blacklist().contains(&mirror));
        }
    }
}

//! Rule cards: validated, canonical sets of conditions.
//!
//! A rule reads "you may not play a <candidate> card on a <previous> card".
//! Its mask holds the banned pairs; its weight counts them with self-pairs
//! at half weight.
//!
//! ## Lifecycle
//!
//! 1. A combination of conditions is drawn from the catalog
//! 2. `unify` drops conditions made redundant by stricter ones
//! 3. The rule is built from the unified conditions
//! 4. The search validates it (`size_ok`, `is_conditional`, `is_canonical`)
//!
//! Rules are immutable once built.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::conditions::{Catalog, Condition, Kind, Relation, Side};
use crate::core::{Card, Mask, PairSpace, RuleError, SizeBand};

/// Sorted, deduplicated condition tuple identifying a rule.
pub type ConditionKey = SmallVec<[Condition; 3]>;

/// Drop every condition for which a stricter condition is also present,
/// until nothing changes. The result is sorted and deduplicated.
#[must_use]
pub fn unify(conditions: &[Condition]) -> ConditionKey {
    let mut kept = canonical(conditions);
    kept.dedup();
    loop {
        let dominated = kept
            .iter()
            .position(|c| c.overlaps().iter().any(|stricter| kept.contains(stricter)));
        match dominated {
            Some(i) => {
                kept.remove(i);
            }
            None => return kept,
        }
    }
}

/// Sort a condition tuple into canonical order.
#[must_use]
pub fn canonical(conditions: &[Condition]) -> ConditionKey {
    let mut key: ConditionKey = conditions.iter().copied().collect();
    key.sort();
    key
}

/// A validated rule with its cached mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Condition>", into = "Vec<Condition>")]
pub struct Rule {
    conditions: ConditionKey,
    mask: Mask,
    weight_x2: usize,
}

impl Rule {
    /// Build a rule, evaluating every condition's mask.
    pub fn new(conditions: &[Condition]) -> Result<Self, RuleError> {
        for condition in conditions {
            condition.validate()?;
        }
        Self::build(conditions, |c| Cow::Owned(c.evaluate()))
    }

    /// Build a rule using the catalog's cached masks.
    pub fn from_catalog(catalog: &Catalog, conditions: &[Condition]) -> Result<Self, RuleError> {
        for condition in conditions.iter().filter(|c| !catalog.contains(c)) {
            condition.validate()?;
        }
        Self::build(conditions, |c| catalog.mask(c))
    }

    fn build<'a>(
        conditions: &[Condition],
        mask_of: impl Fn(&Condition) -> Cow<'a, Mask>,
    ) -> Result<Self, RuleError> {
        let conditions = unify(conditions);
        let (first, rest) = conditions.split_first().ok_or(RuleError::Empty)?;
        let mut mask = mask_of(first).into_owned();
        for condition in rest {
            mask &= mask_of(condition).as_ref();
        }
        let weight_x2 = mask.count_distinct_pairs() + mask.count();
        Ok(Self {
            conditions,
            mask,
            weight_x2,
        })
    }

    /// Unified conditions in canonical order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Canonical tuple, as used by the search blacklist.
    #[must_use]
    pub fn key(&self) -> &ConditionKey {
        &self.conditions
    }

    /// Banned pairs.
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Conditions on one side, in canonical order.
    pub fn on_side(&self, side: Side) -> impl Iterator<Item = &Condition> {
        self.conditions.iter().filter(move |c| c.side() == side)
    }

    fn has_side(&self, side: Side) -> bool {
        self.on_side(side).next().is_some()
    }

    /// Banned pairs, self-pairs counted at half weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight_x2 as f64 / 2.0
    }

    /// Twice the weight, exact.
    #[must_use]
    pub fn weight_x2(&self) -> usize {
        self.weight_x2
    }

    /// Weight inside the default band (270, 405).
    #[must_use]
    pub fn size_ok(&self) -> bool {
        self.size_within(&SizeBand::default())
    }

    #[must_use]
    pub fn size_within(&self, band: &SizeBand) -> bool {
        band.contains(self.weight())
    }

    /// A rule must relate the two cards: a comparative, or conditions on
    /// both sides. Otherwise it just bans one kind of card outright.
    #[must_use]
    pub fn is_conditional(&self) -> bool {
        self.has_side(Side::Comparative)
            || (self.has_side(Side::Previous) && self.has_side(Side::Candidate))
    }

    /// Reject rules that state suit information twice across sides.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        let previous_suit = self.on_side(Side::Previous).any(|c| c.kind() == Kind::Suit);
        let candidate_suit = self.on_side(Side::Candidate).any(|c| c.kind() == Kind::Suit);

        for comp in self.on_side(Side::Comparative) {
            if !matches!(comp.kind(), Kind::Suit | Kind::Color) {
                continue;
            }
            if previous_suit && candidate_suit {
                return false;
            }
            let restates = comp.kind() == Kind::Color
                || (comp.kind() == Kind::Suit && comp.relation() == Some(Relation::Same));
            if candidate_suit && restates {
                return false;
            }
        }
        true
    }

    /// Sides carrying exactly one condition.
    #[must_use]
    pub fn lonely_sides(&self) -> SmallVec<[Side; 3]> {
        Side::ALL
            .into_iter()
            .filter(|&side| self.on_side(side).count() == 1)
            .collect()
    }

    /// True if the pair is banned.
    #[must_use]
    pub fn contains(&self, previous: Card, candidate: Card) -> bool {
        self.mask.contains(previous, candidate)
    }

    /// Number of banned pairs shared with another rule.
    #[must_use]
    pub fn overlap(&self, other: &Rule) -> usize {
        self.mask.intersection_count(&other.mask)
    }

    /// Pairs that break condition `index` while meeting all the others.
    ///
    /// `None` if the index is out of range or no such pair exists.
    #[must_use]
    pub fn counterexample_mask(&self, index: usize) -> Option<Mask> {
        let broken = self.conditions.get(index)?;
        let mut mask = !broken.evaluate();
        for (i, condition) in self.conditions.iter().enumerate() {
            if i != index {
                mask &= &condition.evaluate();
            }
        }
        (!mask.is_empty()).then_some(mask)
    }

    /// Previous cards on which at least one candidate is banned.
    #[must_use]
    pub fn previous_cards(&self) -> Vec<Card> {
        Card::all()
            .filter(|&p| Card::all().any(|c| self.contains(p, c)))
            .collect()
    }

    /// Candidate cards banned on at least one previous card.
    #[must_use]
    pub fn candidate_cards(&self) -> Vec<Card> {
        Card::all()
            .filter(|&c| Card::all().any(|p| self.contains(p, c)))
            .collect()
    }

    /// True if some card can never be played, or never be played on.
    #[must_use]
    pub fn blocks_a_card_entirely(&self) -> bool {
        let no_play_on = Card::all().any(|p| Card::all().all(|c| self.contains(p, c)));
        let never_playable = Card::all().any(|c| Card::all().all(|p| self.contains(p, c)));
        no_play_on || never_playable
    }

    /// Self-pairs banned by this rule.
    #[must_use]
    pub fn banned_self_pairs(&self) -> usize {
        self.mask.intersection_count(PairSpace::self_pairs())
    }
}

impl TryFrom<Vec<Condition>> for Rule {
    type Error = RuleError;

    fn try_from(conditions: Vec<Condition>) -> Result<Self, Self::Error> {
        Rule::new(&conditions)
    }
}

impl From<Rule> for Vec<Condition> {
    fn from(rule: Rule) -> Self {
        rule.conditions.into_vec()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{condition}")?;
        }
        write!(f, " ({})", self.weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{Comparator, NumberWord, SuitWord};
    use crate::core::Suit;

    #[test]
    fn test_unify_drops_looser() {
        let red = Condition::previous_suits(SuitWord::Red);
        let diamond = Condition::previous_suits(SuitWord::Diamond);
        let odd = Condition::candidate_numbers(NumberWord::Odd);

        let unified = unify(&[red, odd, diamond]);
        assert_eq!(unified.as_slice(), &[diamond, odd]);
    }

    #[test]
    fn test_unify_keeps_other_sides() {
        let red = Condition::previous_suits(SuitWord::Red);
        let diamond = Condition::candidate_suits(SuitWord::Diamond);
        let unified = unify(&[diamond, red]);
        assert_eq!(unified.as_slice(), &[red, diamond]);
    }

    #[test]
    fn test_unify_comparative_color() {
        let same_color = Condition::compare_colors(Relation::Same);
        let same_suit = Condition::compare_suits(Relation::Same);
        let high = Condition::previous_numbers(NumberWord::High);
        let face = Condition::previous_numbers(NumberWord::Face);

        let unified = unify(&[same_color, same_suit, high, face]);
        assert_eq!(unified.as_slice(), &[face, same_suit]);
    }

    #[test]
    fn test_weight_counts_self_pairs_half() {
        let red = Condition::previous_suits(SuitWord::Red);
        let same_suit = Condition::compare_suits(Relation::Same);
        let rule = Rule::new(&[red, same_suit]).unwrap();

        // 26 red previous cards x 13 same-suit candidates, 26 of them self-pairs
        assert_eq!(rule.mask().count(), 338);
        assert_eq!(rule.banned_self_pairs(), 26);
        assert_eq!(rule.weight(), 325.0);
        assert!(rule.size_ok());
    }

    #[test]
    fn test_empty_rule() {
        assert_eq!(Rule::new(&[]), Err(RuleError::Empty));
    }

    #[test]
    fn test_is_conditional() {
        let odd = Condition::previous_numbers(NumberWord::Odd);
        let spade = Condition::previous_suits(SuitWord::Spade);
        let club = Condition::candidate_suits(SuitWord::Club);
        let lower = Condition::compare_numbers(Comparator::LessThan);

        assert!(!Rule::new(&[odd, spade]).unwrap().is_conditional());
        assert!(Rule::new(&[odd, club]).unwrap().is_conditional());
        assert!(Rule::new(&[lower]).unwrap().is_conditional());
    }

    #[test]
    fn test_is_canonical() {
        let prev_spade = Condition::previous_suits(SuitWord::Spade);
        let cand_club = Condition::candidate_suits(SuitWord::Club);
        let cand_odd = Condition::candidate_numbers(NumberWord::Odd);
        let same_suit = Condition::compare_suits(Relation::Same);
        let diff_color = Condition::compare_colors(Relation::Different);
        let lower = Condition::compare_numbers(Comparator::LessThan);

        // suit on both sides next to a suit comparison
        assert!(!Rule::new(&[prev_spade, cand_club, diff_color]).unwrap().is_canonical());
        // candidate suit restated by a color comparison
        assert!(!Rule::new(&[cand_club, diff_color, cand_odd]).unwrap().is_canonical());
        // candidate suit restated by same suit
        assert!(!Rule::new(&[cand_club, same_suit]).unwrap().is_canonical());
        // previous suit with same suit is fine
        assert!(Rule::new(&[prev_spade, same_suit, cand_odd]).unwrap().is_canonical());
        // number comparisons never restate suits
        assert!(Rule::new(&[prev_spade, cand_club, lower]).unwrap().is_canonical());
    }

    #[test]
    fn test_lonely_sides() {
        let odd = Condition::previous_numbers(NumberWord::Odd);
        let spade = Condition::previous_suits(SuitWord::Spade);
        let club = Condition::candidate_suits(SuitWord::Club);
        let rule = Rule::new(&[odd, spade, club]).unwrap();
        assert_eq!(rule.lonely_sides().as_slice(), &[Side::Candidate]);

        let lower = Condition::compare_numbers(Comparator::LessThan);
        let rule = Rule::new(&[odd, club, lower]).unwrap();
        assert_eq!(
            rule.lonely_sides().as_slice(),
            &[Side::Previous, Side::Candidate, Side::Comparative]
        );
    }

    #[test]
    fn test_counterexample_mask() {
        let odd = Condition::previous_numbers(NumberWord::Odd);
        let club = Condition::candidate_suits(SuitWord::Club);
        let rule = Rule::new(&[odd, club]).unwrap();

        let breaks_odd = rule.counterexample_mask(0).unwrap();
        let two_spades = Card::new(2, Suit::Spade);
        let five_clubs = Card::new(5, Suit::Club);
        assert!(breaks_odd.contains(two_spades, five_clubs));
        assert!(!breaks_odd.contains(five_clubs, five_clubs));
        assert!(breaks_odd.is_disjoint(rule.mask()));

        assert!(rule.counterexample_mask(2).is_none());
    }

    #[test]
    fn test_counterexample_missing() {
        // any previous card lower than a low candidate is itself low
        let low = Condition::candidate_numbers(NumberWord::Low);
        let lower = Condition::compare_numbers(Comparator::LessThan);
        let prev_low = Condition::previous_numbers(NumberWord::Low);
        let rule = Rule::new(&[prev_low, low, lower]).unwrap();
        assert!(rule.counterexample_mask(0).is_none());
    }

    #[test]
    fn test_catalog_and_direct_build_agree() {
        let catalog = Catalog::reference();
        let conds = [
            Condition::previous_numbers(NumberWord::High),
            Condition::candidate_suits(SuitWord::Red),
            Condition::compare_numbers(Comparator::GreaterThan),
        ];
        assert_eq!(
            Rule::from_catalog(catalog, &conds).unwrap(),
            Rule::new(&conds).unwrap()
        );
    }

    #[test]
    fn test_serde_as_conditions() {
        let rule = Rule::new(&[
            Condition::previous_suits(SuitWord::Red),
            Condition::compare_suits(Relation::Same),
        ])
        .unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, back);

        assert!(serde_json::from_str::<Rule>("[]").is_err());
    }
}

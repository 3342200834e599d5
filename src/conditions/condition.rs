//! Atomic conditions over card pairs.
//!
//! A `Condition` is tagged by the side it looks at, the kind of attribute,
//! and a value:
//!
//! | side                  | kind   | value                      |
//! |-----------------------|--------|----------------------------|
//! | previous / candidate  | number | a `NumberWord`             |
//! | previous / candidate  | suit   | a `SuitWord`               |
//! | comparative           | number | `LessThan` / `GreaterThan` |
//! | comparative           | suit   | `Same` / `Different`       |
//! | comparative           | color  | `Same` / `Different`       |
//!
//! Comparators read from the previous card: `LessThan` holds when the
//! previous card's number is below the candidate's.
//!
//! Conditions order by `(side, kind, value)` through an explicit sort key,
//! which keeps canonical rule tuples stable.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{Card, ConditionError, Mask, PairSpace};

use super::vocabulary::{NumberWord, RankSet, SuitSet, SuitWord};

/// Which card a condition looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The card already on the pile.
    Previous,
    /// The card about to be played.
    Candidate,
    /// A relation between both cards.
    Comparative,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Previous, Side::Candidate, Side::Comparative];

    const fn sort_key(self) -> u8 {
        match self {
            Side::Previous => 0,
            Side::Candidate => 1,
            Side::Comparative => 2,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Side::Previous => "previous",
            Side::Candidate => "candidate",
            Side::Comparative => "comparative",
        }
    }
}

/// Card attribute a condition inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Number,
    Suit,
    Color,
}

impl Kind {
    const fn sort_key(self) -> u8 {
        match self {
            Kind::Number => 0,
            Kind::Suit => 1,
            Kind::Color => 2,
        }
    }
}

/// Number ordering between the previous and candidate card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// previous < candidate
    LessThan,
    /// previous > candidate
    GreaterThan,
}

/// Equality of an attribute across both cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Same,
    Different,
}

/// Value carried by a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Numbers(NumberWord),
    Suits(SuitWord),
    Compare(Comparator),
    Relation(Relation),
}

impl Value {
    fn sort_key(self) -> (u8, u8) {
        match self {
            Value::Numbers(w) => (0, w as u8),
            Value::Suits(w) => (1, w as u8),
            Value::Compare(c) => (2, c as u8),
            Value::Relation(r) => (3, r as u8),
        }
    }
}

/// Atomic predicate over an ordered card pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    side: Side,
    kind: Kind,
    value: Value,
}

impl Condition {
    /// Build a condition, checking that side, kind and value fit together
    /// and that the word keeps its construction invariant.
    pub fn new(side: Side, kind: Kind, value: Value) -> Result<Self, ConditionError> {
        let condition = Self { side, kind, value };
        condition.validate()?;
        Ok(condition)
    }

    /// Number condition on a single card. `side` must not be comparative.
    pub(crate) const fn numbers(side: Side, word: NumberWord) -> Self {
        Self {
            side,
            kind: Kind::Number,
            value: Value::Numbers(word),
        }
    }

    /// Suit condition on a single card. `side` must not be comparative.
    pub(crate) const fn suits(side: Side, word: SuitWord) -> Self {
        Self {
            side,
            kind: Kind::Suit,
            value: Value::Suits(word),
        }
    }

    #[must_use]
    pub const fn previous_numbers(word: NumberWord) -> Self {
        Self::numbers(Side::Previous, word)
    }

    #[must_use]
    pub const fn candidate_numbers(word: NumberWord) -> Self {
        Self::numbers(Side::Candidate, word)
    }

    #[must_use]
    pub const fn previous_suits(word: SuitWord) -> Self {
        Self::suits(Side::Previous, word)
    }

    #[must_use]
    pub const fn candidate_suits(word: SuitWord) -> Self {
        Self::suits(Side::Candidate, word)
    }

    /// Number ordering between the two cards.
    #[must_use]
    pub const fn compare_numbers(comparator: Comparator) -> Self {
        Self {
            side: Side::Comparative,
            kind: Kind::Number,
            value: Value::Compare(comparator),
        }
    }

    /// Same or different suit.
    #[must_use]
    pub const fn compare_suits(relation: Relation) -> Self {
        Self {
            side: Side::Comparative,
            kind: Kind::Suit,
            value: Value::Relation(relation),
        }
    }

    /// Same or different color.
    #[must_use]
    pub const fn compare_colors(relation: Relation) -> Self {
        Self {
            side: Side::Comparative,
            kind: Kind::Color,
            value: Value::Relation(relation),
        }
    }

    /// Every valid condition over the full vocabulary, including words and
    /// relations the reference catalog leaves out.
    #[must_use]
    pub fn universe() -> Vec<Condition> {
        let mut all = Vec::new();
        for side in [Side::Previous, Side::Candidate] {
            all.extend(NumberWord::ALL.iter().map(|&w| Self::numbers(side, w)));
            all.extend(SuitWord::ALL.iter().map(|&w| Self::suits(side, w)));
        }
        all.extend([
            Self::compare_numbers(Comparator::GreaterThan),
            Self::compare_numbers(Comparator::LessThan),
            Self::compare_suits(Relation::Same),
            Self::compare_suits(Relation::Different),
            Self::compare_colors(Relation::Same),
            Self::compare_colors(Relation::Different),
        ]);
        all
    }

    /// Check the side/kind/value combination and the word invariants.
    pub fn validate(&self) -> Result<(), ConditionError> {
        let invalid = ConditionError::InvalidValue {
            side: self.side,
            kind: self.kind,
        };
        match (self.side, self.kind, self.value) {
            (Side::Previous | Side::Candidate, Kind::Number, Value::Numbers(word)) => {
                let count = word.ranks().len();
                if count < 3 {
                    return Err(ConditionError::NarrowNumberWord { word, count });
                }
                Ok(())
            }
            (Side::Previous | Side::Candidate, Kind::Suit, Value::Suits(word)) => {
                let suits = word.suits();
                let single_or_pair = suits.len() == 1 || (suits.len() == 2 && suits.color().is_some());
                if !single_or_pair {
                    return Err(ConditionError::MixedSuitWord { word });
                }
                Ok(())
            }
            (Side::Comparative, Kind::Number, Value::Compare(_)) => Ok(()),
            (Side::Comparative, Kind::Suit | Kind::Color, Value::Relation(_)) => Ok(()),
            _ => Err(invalid),
        }
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    #[must_use]
    pub const fn number_word(&self) -> Option<NumberWord> {
        match self.value {
            Value::Numbers(w) => Some(w),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suit_word(&self) -> Option<SuitWord> {
        match self.value {
            Value::Suits(w) => Some(w),
            _ => None,
        }
    }

    #[must_use]
    pub const fn comparator(&self) -> Option<Comparator> {
        match self.value {
            Value::Compare(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub const fn relation(&self) -> Option<Relation> {
        match self.value {
            Value::Relation(r) => Some(r),
            _ => None,
        }
    }

    /// Numbers allowed by a single-card number condition.
    #[must_use]
    pub fn ranks(&self) -> Option<RankSet> {
        self.number_word().map(NumberWord::ranks)
    }

    /// Suits allowed by a single-card suit condition.
    #[must_use]
    pub fn suit_set(&self) -> Option<SuitSet> {
        self.suit_word().map(SuitWord::suits)
    }

    #[must_use]
    pub const fn is_comparative(&self) -> bool {
        matches!(self.side, Side::Comparative)
    }

    /// Check the condition against one concrete pair.
    #[must_use]
    pub fn holds(&self, previous: Card, candidate: Card) -> bool {
        let card = match self.side {
            Side::Previous => previous,
            Side::Candidate => candidate,
            Side::Comparative => {
                return match self.value {
                    Value::Compare(Comparator::LessThan) => previous.number() < candidate.number(),
                    Value::Compare(Comparator::GreaterThan) => {
                        previous.number() > candidate.number()
                    }
                    Value::Relation(relation) => {
                        let same = match self.kind {
                            Kind::Color => previous.color() == candidate.color(),
                            _ => previous.suit() == candidate.suit(),
                        };
                        same == matches!(relation, Relation::Same)
                    }
                    Value::Numbers(_) | Value::Suits(_) => false,
                };
            }
        };
        match self.value {
            Value::Numbers(word) => word.ranks().contains(card.number()),
            Value::Suits(word) => word.suits().contains(card.suit()),
            Value::Compare(_) | Value::Relation(_) => false,
        }
    }

    /// Evaluate the condition over the whole pair space.
    ///
    /// Pure; the `Catalog` caches the result for its own conditions.
    #[must_use]
    pub fn evaluate(&self) -> Mask {
        PairSpace::from_fn(|previous, candidate| self.holds(previous, candidate))
    }

    /// Descriptive word, read from the previous card for comparatives.
    #[must_use]
    pub const fn word(&self) -> &'static str {
        self.previous_word()
    }

    /// Word describing the previous card ("play on a *lower* card").
    #[must_use]
    pub const fn previous_word(&self) -> &'static str {
        match self.value {
            Value::Compare(Comparator::LessThan) => "lower",
            Value::Compare(Comparator::GreaterThan) => "higher",
            _ => self.neutral_word(),
        }
    }

    /// Word describing the candidate card ("play a *higher* card").
    #[must_use]
    pub const fn candidate_word(&self) -> &'static str {
        match self.value {
            Value::Compare(Comparator::LessThan) => "higher",
            Value::Compare(Comparator::GreaterThan) => "lower",
            _ => self.neutral_word(),
        }
    }

    const fn neutral_word(&self) -> &'static str {
        match (self.kind, self.value) {
            (_, Value::Numbers(w)) => w.name(),
            (_, Value::Suits(w)) => w.name(),
            (Kind::Color, Value::Relation(Relation::Same)) => "same color",
            (Kind::Color, Value::Relation(Relation::Different)) => "different color",
            (_, Value::Relation(Relation::Same)) => "same suit",
            (_, Value::Relation(Relation::Different)) => "different suit",
            (_, Value::Compare(Comparator::LessThan)) => "lower",
            (_, Value::Compare(Comparator::GreaterThan)) => "higher",
        }
    }

    /// Ordering key among adjectives on one card. `None` for comparatives.
    #[must_use]
    pub const fn adjective_rank(&self) -> Option<usize> {
        match self.value {
            Value::Numbers(w) => Some(w.adjective_rank()),
            Value::Suits(w) => Some(w.adjective_rank()),
            Value::Compare(_) | Value::Relation(_) => None,
        }
    }

    fn sort_key(&self) -> (u8, u8, (u8, u8)) {
        (self.side.sort_key(), self.kind.sort_key(), self.value.sort_key())
    }
}

impl PartialOrd for Condition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Condition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side.name(), self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    #[test]
    fn test_validate() {
        assert!(Condition::new(Side::Previous, Kind::Number, Value::Numbers(NumberWord::Odd)).is_ok());
        assert!(Condition::new(Side::Comparative, Kind::Color, Value::Relation(Relation::Same)).is_ok());

        let err = Condition::new(Side::Comparative, Kind::Number, Value::Numbers(NumberWord::Odd));
        assert_eq!(
            err,
            Err(ConditionError::InvalidValue {
                side: Side::Comparative,
                kind: Kind::Number
            })
        );

        let err = Condition::new(Side::Candidate, Kind::Suit, Value::Relation(Relation::Same));
        assert!(err.is_err());
    }

    #[test]
    fn test_universe_is_valid_and_distinct() {
        let all = Condition::universe();
        assert_eq!(all.len(), 2 * (7 + 6) + 6);
        for c in &all {
            assert!(c.validate().is_ok(), "{c} should be valid");
        }
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len());
    }

    #[test]
    fn test_order_is_side_then_kind_then_value() {
        let prev_suit = Condition::previous_suits(SuitWord::Spade);
        let prev_num = Condition::previous_numbers(NumberWord::Trio);
        let cand_num = Condition::candidate_numbers(NumberWord::Odd);
        let comp = Condition::compare_numbers(Comparator::LessThan);

        let mut conds = vec![comp, cand_num, prev_suit, prev_num];
        conds.sort();
        assert_eq!(conds, vec![prev_num, prev_suit, cand_num, comp]);
    }

    #[test]
    fn test_holds() {
        let three_spades = Card::new(3, Suit::Spade);
        let queen_clubs = Card::new(12, Suit::Club);
        let queen_hearts = Card::new(12, Suit::Heart);

        assert!(Condition::previous_numbers(NumberWord::Odd).holds(three_spades, queen_clubs));
        assert!(!Condition::candidate_numbers(NumberWord::Odd).holds(three_spades, queen_clubs));
        assert!(Condition::candidate_numbers(NumberWord::Face).holds(three_spades, queen_clubs));
        assert!(Condition::compare_numbers(Comparator::LessThan).holds(three_spades, queen_clubs));
        assert!(!Condition::compare_numbers(Comparator::GreaterThan).holds(three_spades, queen_clubs));
        assert!(Condition::compare_colors(Relation::Same).holds(three_spades, queen_clubs));
        assert!(Condition::compare_suits(Relation::Different).holds(three_spades, queen_clubs));
        assert!(Condition::compare_colors(Relation::Different).holds(queen_clubs, queen_hearts));
        assert!(!Condition::compare_numbers(Comparator::LessThan).holds(queen_clubs, queen_hearts));
    }

    #[test]
    fn test_words() {
        let lower = Condition::compare_numbers(Comparator::LessThan);
        assert_eq!(lower.previous_word(), "lower");
        assert_eq!(lower.candidate_word(), "higher");
        assert_eq!(lower.word(), "lower");

        let higher = Condition::compare_numbers(Comparator::GreaterThan);
        assert_eq!(higher.previous_word(), "higher");
        assert_eq!(higher.candidate_word(), "lower");

        assert_eq!(Condition::compare_colors(Relation::Different).word(), "different color");
        assert_eq!(Condition::compare_suits(Relation::Same).word(), "same suit");
        assert_eq!(Condition::candidate_suits(SuitWord::Red).word(), "red");
        assert_eq!(Condition::previous_numbers(NumberWord::Face).to_string(), "previous face");
    }

    #[test]
    fn test_serde() {
        let cond = Condition::candidate_suits(SuitWord::Heart);
        let json = serde_json::to_string(&cond).unwrap();
        let back: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(cond, back);
    }
}

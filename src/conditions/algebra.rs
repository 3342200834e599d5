//! Relations between conditions and set-level pathology checks.
//!
//! ## Relations
//!
//! - `overlaps`: strictly narrower conditions. When both are present the
//!   looser one is redundant.
//! - `complements`: the negation, when the vocabulary can express it.
//! - `disjoints`: conditions that can never hold together with this one
//!   (always includes the complements).
//! - `bad_representations`: conditions that restate the same fact in a
//!   confusing second way when present together.
//!
//! `LessThan` and `GreaterThan` count as complements even though pairs of
//! equal numbers satisfy neither.

use smallvec::SmallVec;

use super::condition::{Comparator, Condition, Kind, Relation, Side, Value};
use super::vocabulary::{NumberWord, RankSet, SuitWord};

/// Short list of related conditions.
pub type Conditions = SmallVec<[Condition; 4]>;

/// Rank sets of two number conditions on one card must share this many
/// numbers to be combined.
const MIN_SHARED_NUMBERS: usize = 3;

/// Lowest previous-card number tolerated by a one-sided "lower" rule.
const LOWEST_SAFE_MIN: u8 = 4;

/// Highest previous-card number tolerated by a one-sided "higher" rule.
const HIGHEST_SAFE_MAX: u8 = 10;

impl Condition {
    /// Conditions strictly narrower than this one.
    #[must_use]
    pub fn overlaps(&self) -> Conditions {
        let mut out = Conditions::new();
        match (self.side(), self.value()) {
            (side, Value::Suits(SuitWord::Red)) => {
                out.push(Condition::suits(side, SuitWord::Diamond));
                out.push(Condition::suits(side, SuitWord::Heart));
            }
            (side, Value::Suits(SuitWord::Black)) => {
                out.push(Condition::suits(side, SuitWord::Club));
                out.push(Condition::suits(side, SuitWord::Spade));
            }
            (Side::Comparative, Value::Relation(Relation::Same)) if self.kind() == Kind::Color => {
                out.push(Condition::compare_suits(Relation::Same));
            }
            (side, Value::Numbers(NumberWord::High)) => {
                out.push(Condition::numbers(side, NumberWord::Face));
            }
            (side, Value::Numbers(NumberWord::Even)) => {
                out.push(Condition::numbers(side, NumberWord::Quartet));
            }
            _ => {}
        }
        out
    }

    /// The negation of this condition, if the vocabulary has it.
    #[must_use]
    pub fn complements(&self) -> Conditions {
        let mut out = Conditions::new();
        let side = self.side();
        match self.value() {
            Value::Compare(Comparator::GreaterThan) => {
                out.push(Condition::compare_numbers(Comparator::LessThan));
            }
            Value::Compare(Comparator::LessThan) => {
                out.push(Condition::compare_numbers(Comparator::GreaterThan));
            }
            Value::Numbers(NumberWord::Odd) => out.push(Condition::numbers(side, NumberWord::Even)),
            Value::Numbers(NumberWord::Even) => out.push(Condition::numbers(side, NumberWord::Odd)),
            Value::Numbers(NumberWord::High) => out.push(Condition::numbers(side, NumberWord::Low)),
            Value::Numbers(NumberWord::Low) => out.push(Condition::numbers(side, NumberWord::High)),
            Value::Suits(SuitWord::Black) => out.push(Condition::suits(side, SuitWord::Red)),
            Value::Suits(SuitWord::Red) => out.push(Condition::suits(side, SuitWord::Black)),
            Value::Relation(Relation::Same) if self.kind() == Kind::Color => {
                out.push(Condition::compare_colors(Relation::Different));
            }
            Value::Relation(Relation::Different) if self.kind() == Kind::Color => {
                out.push(Condition::compare_colors(Relation::Same));
            }
            _ => {}
        }
        out
    }

    /// Conditions whose masks never intersect this one's.
    #[must_use]
    pub fn disjoints(&self) -> Conditions {
        let mut out = Conditions::new();
        match (self.side(), self.kind(), self.value()) {
            (Side::Comparative, Kind::Color, Value::Relation(Relation::Different)) => {
                out.push(Condition::compare_suits(Relation::Same));
            }
            (Side::Comparative, Kind::Suit, Value::Relation(Relation::Same)) => {
                out.push(Condition::compare_colors(Relation::Different));
            }
            (side, Kind::Suit, Value::Suits(word)) => {
                let suits = word.suits();
                out.extend(
                    SuitWord::ALL
                        .iter()
                        .filter(|other| other.suits().is_disjoint(suits))
                        .map(|&other| Condition::suits(side, other)),
                );
            }
            (side, Kind::Number, Value::Numbers(NumberWord::Face)) => {
                out.push(Condition::numbers(side, NumberWord::Low));
            }
            (side, Kind::Number, Value::Numbers(NumberWord::Low)) => {
                out.push(Condition::numbers(side, NumberWord::Face));
            }
            _ => {}
        }
        out.extend(self.complements());
        out
    }

    /// Conditions that restate this one's information confusingly.
    ///
    /// A suit condition lists itself when it is comparative.
    #[must_use]
    pub fn bad_representations(&self) -> Conditions {
        let mut out = Conditions::new();
        match (self.side(), self.kind()) {
            (Side::Comparative, Kind::Color) => {
                for side in [Side::Previous, Side::Candidate] {
                    out.extend(
                        SuitWord::ALL
                            .iter()
                            .filter(|w| w.suits().len() <= 2)
                            .map(|&w| Condition::suits(side, w)),
                    );
                }
            }
            (_, Kind::Suit) => {
                out.push(Condition::compare_colors(Relation::Same));
                out.push(Condition::compare_colors(Relation::Different));
                out.push(Condition::compare_suits(Relation::Same));
            }
            _ => {}
        }
        out
    }
}

/// Check a set of conditions for pathologies that make a rule confusing or
/// leave some cards nearly impossible to play on.
///
/// 1. Two number conditions on one card sharing fewer than 3 numbers
///    ("even high" leaves only the queen).
/// 2. Face cards together with a number comparison.
/// 3. A lone "lower"/"higher" comparison, previous-card conditions and no
///    candidate conditions, where the allowed previous numbers reach too
///    close to an end of the range.
#[must_use]
pub fn clashes(conditions: &[Condition]) -> bool {
    let on_side = |side: Side| conditions.iter().filter(move |c| c.side() == side);

    for side in [Side::Previous, Side::Candidate] {
        let ranks: SmallVec<[RankSet; 3]> = on_side(side).filter_map(Condition::ranks).collect();
        for (i, a) in ranks.iter().enumerate() {
            if ranks[i + 1..]
                .iter()
                .any(|b| a.intersection(*b).len() < MIN_SHARED_NUMBERS)
            {
                return true;
            }
        }
    }

    let has_face = conditions
        .iter()
        .any(|c| c.number_word() == Some(NumberWord::Face));
    let has_comparison = conditions.iter().any(|c| c.comparator().is_some());
    if has_face && has_comparison {
        return true;
    }

    let comparatives: SmallVec<[&Condition; 3]> = on_side(Side::Comparative).collect();
    let has_previous = on_side(Side::Previous).next().is_some();
    let has_candidate = on_side(Side::Candidate).next().is_some();
    if let ([only], true, false) = (comparatives.as_slice(), has_previous, has_candidate) {
        if let Some(comparator) = only.comparator() {
            let allowed = on_side(Side::Previous)
                .filter_map(Condition::ranks)
                .fold(RankSet::ALL, RankSet::intersection);
            return match comparator {
                Comparator::LessThan => allowed.min().map_or(true, |m| m < LOWEST_SAFE_MIN),
                Comparator::GreaterThan => allowed.max().map_or(true, |m| m > HIGHEST_SAFE_MAX),
            };
        }
    }

    false
}

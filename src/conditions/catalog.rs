//! The catalog of atomic conditions a search draws from.
//!
//! A catalog is built once from a vocabulary, validated, and never mutated
//! afterwards. Masks for every catalog condition are evaluated eagerly at
//! construction, so lookups during search are plain reads.
//!
//! ## Order
//!
//! For each card side (previous, then candidate): the number words, then
//! the suit words. Then the comparatives: higher, lower, same suit,
//! different color, same color. With the reference vocabulary this gives
//! 2 x 11 + 5 = 27 conditions.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::core::{ConditionError, Mask};

use super::condition::{Comparator, Condition, Relation, Side};
use super::vocabulary::VocabularyConfig;

static REFERENCE: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(&VocabularyConfig::default()).expect("reference vocabulary is valid")
});

/// Immutable list of conditions with their precomputed masks.
#[derive(Clone, Debug)]
pub struct Catalog {
    conditions: Vec<Condition>,
    masks: Vec<Mask>,
    positions: FxHashMap<Condition, usize>,
}

impl Catalog {
    /// Build and validate a catalog for a vocabulary.
    pub fn new(vocabulary: &VocabularyConfig) -> Result<Self, ConditionError> {
        let mut conditions = Vec::new();
        for side in [Side::Previous, Side::Candidate] {
            conditions.extend(vocabulary.number_words.iter().map(|&w| Condition::numbers(side, w)));
            conditions.extend(vocabulary.suit_words.iter().map(|&w| Condition::suits(side, w)));
        }
        conditions.extend([
            Condition::compare_numbers(Comparator::GreaterThan),
            Condition::compare_numbers(Comparator::LessThan),
            Condition::compare_suits(Relation::Same),
            Condition::compare_colors(Relation::Different),
            Condition::compare_colors(Relation::Same),
        ]);
        Self::from_conditions(conditions)
    }

    /// Build a catalog from an explicit condition list, keeping its order.
    pub fn from_conditions(conditions: Vec<Condition>) -> Result<Self, ConditionError> {
        let mut positions = FxHashMap::default();
        for (i, condition) in conditions.iter().enumerate() {
            condition.validate()?;
            if positions.insert(*condition, i).is_some() {
                return Err(ConditionError::Duplicate(condition.to_string()));
            }
        }
        let masks = conditions.iter().map(Condition::evaluate).collect();
        Ok(Self {
            conditions,
            masks,
            positions,
        })
    }

    /// The process-wide reference catalog, built on first use.
    #[must_use]
    pub fn reference() -> &'static Catalog {
        &REFERENCE
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Condition> {
        self.conditions.get(index)
    }

    #[must_use]
    pub fn position(&self, condition: &Condition) -> Option<usize> {
        self.positions.get(condition).copied()
    }

    #[must_use]
    pub fn contains(&self, condition: &Condition) -> bool {
        self.positions.contains_key(condition)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Mask of the condition at `index`.
    #[must_use]
    pub fn mask_at(&self, index: usize) -> Option<&Mask> {
        self.masks.get(index)
    }

    /// Cached mask for a catalog condition, evaluated on the spot otherwise.
    #[must_use]
    pub fn mask(&self, condition: &Condition) -> Cow<'_, Mask> {
        match self.position(condition) {
            Some(i) => Cow::Borrowed(&self.masks[i]),
            None => Cow::Owned(condition.evaluate()),
        }
    }

    /// Iterate over conditions with their masks.
    pub fn iter(&self) -> impl Iterator<Item = (&Condition, &Mask)> {
        self.conditions.iter().zip(self.masks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{NumberWord, SuitWord};

    #[test]
    fn test_reference_catalog() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.len(), 27);
        assert_eq!(
            catalog.get(0),
            Some(&Condition::previous_numbers(NumberWord::Odd))
        );
        assert_eq!(
            catalog.get(26),
            Some(&Condition::compare_colors(Relation::Same))
        );
        assert!(!catalog.contains(&Condition::previous_numbers(NumberWord::Quartet)));
        assert!(!catalog.contains(&Condition::compare_suits(Relation::Different)));
    }

    #[test]
    fn test_extended_catalog() {
        let catalog = Catalog::new(&VocabularyConfig::extended()).unwrap();
        assert_eq!(catalog.len(), 31);
        assert!(catalog.contains(&Condition::candidate_numbers(NumberWord::Trio)));
    }

    #[test]
    fn test_masks_match_evaluation() {
        let catalog = Catalog::reference();
        for (condition, mask) in catalog.iter() {
            assert_eq!(*mask, condition.evaluate());
        }
        let quartet = Condition::previous_numbers(NumberWord::Quartet);
        assert!(matches!(catalog.mask(&quartet), Cow::Owned(_)));
        assert_eq!(catalog.mask(&quartet).count(), 3 * 4 * 52);
    }

    #[test]
    fn test_positions() {
        let catalog = Catalog::reference();
        for (i, condition) in catalog.conditions().iter().enumerate() {
            assert_eq!(catalog.position(condition), Some(i));
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let vocabulary = VocabularyConfig {
            number_words: vec![NumberWord::Odd, NumberWord::Odd],
            suit_words: vec![SuitWord::Spade],
        };
        assert!(matches!(
            Catalog::new(&vocabulary),
            Err(ConditionError::Duplicate(_))
        ));
    }
}

//! Binary snapshots of generated rule sets.
//!
//! Presentation tools consume a finished rule list. A `RuleSet` stores the
//! rules together with the config that produced them, encoded with
//! `bincode`. Only conditions are stored; masks are rebuilt on decode.

use serde::{Deserialize, Serialize};

use crate::conditions::Condition;
use crate::core::{GeneratorConfig, SnapshotError};

use super::rule::Rule;

/// An ordered list of rules and the config that generated them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub config: GeneratorConfig,
    pub rules: Vec<Rule>,
}

/// Wire layout of a `RuleSet`; each rule serializes as its conditions.
#[derive(Deserialize)]
struct RawRuleSet {
    config: GeneratorConfig,
    rules: Vec<Vec<Condition>>,
}

impl RuleSet {
    #[must_use]
    pub fn new(config: GeneratorConfig, rules: Vec<Rule>) -> Self {
        Self { config, rules }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Largest pairwise overlap between two rules of the set.
    #[must_use]
    pub fn max_overlap(&self) -> usize {
        self.rules
            .iter()
            .enumerate()
            .flat_map(|(i, a)| self.rules[i + 1..].iter().map(move |b| a.overlap(b)))
            .max()
            .unwrap_or(0)
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes, rebuilding and validating every rule.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let raw: RawRuleSet = bincode::deserialize(bytes)?;
        let rules = raw
            .rules
            .iter()
            .map(|conditions| Rule::new(conditions))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            config: raw.config,
            rules,
        })
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{Comparator, NumberWord, Relation, SuitWord};

    fn sample() -> RuleSet {
        let rules = vec![
            Rule::new(&[
                Condition::previous_suits(SuitWord::Red),
                Condition::compare_suits(Relation::Same),
            ])
            .unwrap(),
            Rule::new(&[
                Condition::previous_numbers(NumberWord::High),
                Condition::candidate_suits(SuitWord::Black),
                Condition::compare_numbers(Comparator::GreaterThan),
            ])
            .unwrap(),
        ];
        RuleSet::new(GeneratorConfig::default().with_target_count(2), rules)
    }

    #[test]
    fn test_bytes_roundtrip() {
        let set = sample();
        let bytes = set.to_bytes().unwrap();
        let back = RuleSet::from_bytes(&bytes).unwrap();
        assert_eq!(back, set);
        assert_eq!(back.rules[0].mask(), set.rules[0].mask());
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = sample().to_bytes().unwrap();
        let err = RuleSet::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, SnapshotError::Encoding(_)));
    }

    #[test]
    fn test_empty_rule_rejected() {
        let bytes = bincode::serialize(&(
            GeneratorConfig::default(),
            vec![Vec::<Condition>::new()],
        ))
        .unwrap();
        let err = RuleSet::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidRule(_)));
    }

    #[test]
    fn test_max_overlap() {
        let set = sample();
        assert_eq!(set.max_overlap(), set.rules[0].overlap(&set.rules[1]));
        assert_eq!(RuleSet::new(GeneratorConfig::default(), Vec::new()).max_overlap(), 0);
    }
}

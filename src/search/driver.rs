//! One-call generation: search the catalog, then optionally prune.

use tracing::info;

use crate::conditions::Catalog;
use crate::core::{Error, GeneratorConfig};
use crate::prune::{PruneReport, Pruner};
use crate::rules::{Rule, RuleSet};

use super::generator::RuleSearch;
use super::stats::SearchStats;

/// Result of a generation run.
#[derive(Clone, Debug)]
pub struct Generation {
    /// Surviving rules with the config that produced them.
    pub rule_set: RuleSet,
    pub stats: SearchStats,
    /// Present when the config asked for pruning.
    pub prune_report: Option<PruneReport>,
}

/// Generate rules over the reference catalog.
///
/// With `target_count`, the generated list is pruned down to that many
/// rules; asking for more rules than were generated is an error. Zero
/// rules is a valid result.
///
/// # Example
///
/// ```
/// let rules = crazy_rules::generate(9, None).unwrap();
/// assert!(rules.iter().all(|rule| rule.size_ok()));
/// ```
pub fn generate(seed: u64, target_count: Option<usize>) -> Result<Vec<Rule>, Error> {
    let config = GeneratorConfig {
        seed,
        target_count,
        ..GeneratorConfig::default()
    };
    Ok(generate_with(&config)?.rule_set.rules)
}

/// Generate rules as configured.
pub fn generate_with(config: &GeneratorConfig) -> Result<Generation, Error> {
    let custom;
    let catalog = if config.vocabulary.is_reference() {
        Catalog::reference()
    } else {
        custom = Catalog::new(&config.vocabulary)?;
        &custom
    };

    let mut search = RuleSearch::new(catalog, config.seed).with_size_band(config.size_band);
    let rules: Vec<Rule> = search.by_ref().collect();
    let stats = search.stats().clone();

    let (rules, prune_report) = match config.target_count {
        Some(target) => {
            let pruned = Pruner::new(target)
                .with_overlap_limit_x16(config.overlap_limit_x16)
                .prune(rules)?;
            (pruned.rules, Some(pruned.report))
        }
        None => (rules, None),
    };

    info!(
        seed = config.seed,
        catalog = catalog.len(),
        generated = stats.accepted,
        kept = rules.len(),
        "generated rule set"
    );

    Ok(Generation {
        rule_set: RuleSet::new(config.clone(), rules),
        stats,
        prune_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::VocabularyConfig;
    use crate::core::{PruneError, SizeBand};

    #[test]
    fn test_generate_is_deterministic() {
        let first = generate(9, None).unwrap();
        let second = generate(9, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_with_reports() {
        let config = GeneratorConfig::default().with_target_count(50);
        let generation = generate_with(&config).unwrap();
        assert_eq!(generation.rule_set.len(), 50);
        assert_eq!(generation.rule_set.config, config);

        let report = generation.prune_report.unwrap();
        assert_eq!(
            report.removed.len() as u32,
            generation.stats.accepted - 50
        );
        assert!(report.after.max() <= report.before.max());
    }

    #[test]
    fn test_target_too_large() {
        let err = generate(9, Some(100_000)).unwrap_err();
        assert!(matches!(
            err,
            Error::Prune(PruneError::TargetExceedsRules { target: 100_000, .. })
        ));
    }

    #[test]
    fn test_unsatisfiable_band_is_empty() {
        let config = GeneratorConfig::default().with_size_band(SizeBand::new(3000.0, 4000.0));
        let generation = generate_with(&config).unwrap();
        assert!(generation.rule_set.is_empty());
        assert!(generation.prune_report.is_none());
    }

    #[test]
    fn test_extended_vocabulary() {
        let config = GeneratorConfig::default().with_vocabulary(VocabularyConfig::extended());
        let generation = generate_with(&config).unwrap();
        assert_eq!(generation.stats.examined, 4495);
        assert!(generation.rule_set.iter().all(Rule::is_conditional));
    }
}

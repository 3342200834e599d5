//! Generator configuration.
//!
//! `GeneratorConfig` collects every knob of one generation run: the seed
//! that orders the search, the accepted rule weight band, the vocabulary
//! the catalog is built from, and the optional pruning target.

use serde::{Deserialize, Serialize};

use crate::conditions::VocabularyConfig;

/// Default search seed.
pub const DEFAULT_SEED: u64 = 9;

/// Default pruning threshold: a pair of rules overlaps excessively when
/// `16 * overlap > 51 * 52`.
pub const DEFAULT_OVERLAP_LIMIT_X16: u32 = 51 * 52;

/// Open interval of accepted rule weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeBand {
    /// Exclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl SizeBand {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether a weight lies strictly inside the band.
    #[must_use]
    pub fn contains(&self, weight: f64) -> bool {
        self.min < weight && weight < self.max
    }
}

impl Default for SizeBand {
    /// Roughly 10% to 15% of the pair space.
    fn default() -> Self {
        Self::new(270.0, 405.0)
    }
}

/// Configuration for a generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for the combination order.
    /// Different seeds may keep a different member of a mirror pair.
    pub seed: u64,

    /// Prune the generated rules down to this many. `None` keeps all.
    pub target_count: Option<usize>,

    /// Accepted rule weights.
    pub size_band: SizeBand,

    /// Pairwise overlap limit, scaled by 16 to stay integral.
    pub overlap_limit_x16: u32,

    /// Words the catalog is built from.
    pub vocabulary: VocabularyConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            target_count: None,
            size_band: SizeBand::default(),
            overlap_limit_x16: DEFAULT_OVERLAP_LIMIT_X16,
            vocabulary: VocabularyConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Prune generated rules down to `count`.
    #[must_use]
    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_size_band(mut self, band: SizeBand) -> Self {
        self.size_band = band;
        self
    }

    #[must_use]
    pub fn with_overlap_limit_x16(mut self, limit: u32) -> Self {
        self.overlap_limit_x16 = limit;
        self
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: VocabularyConfig) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}

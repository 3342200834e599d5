//! Core types: cards, the pair space, masks, RNG, configuration, errors.
//!
//! Everything here is independent of the condition vocabulary except
//! `GeneratorConfig`, which names the vocabulary a run uses.

pub mod card;
pub mod pair;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, Color, Suit, DECK_SIZE, NUMBER_COUNT, SUIT_COUNT};
pub use pair::{Mask, PairSpace, MASK_WORDS, PAIR_COUNT};
pub use rng::SearchRng;
pub use config::{GeneratorConfig, SizeBand, DEFAULT_OVERLAP_LIMIT_X16, DEFAULT_SEED};
pub use error::{ConditionError, Error, PruneError, RuleError, SnapshotError};

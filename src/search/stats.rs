//! Rule search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Why the search dropped a combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// Suppressed as a mirror or repeat of an accepted rule.
    Blacklisted,
    /// Failed the pathology heuristic.
    Clash,
    /// More than one condition is disjoint with or restates another.
    Antagonistic,
    /// Weight outside the accepted band.
    OutOfBand,
    /// Bans a card property outright instead of relating two cards.
    Unconditional,
    /// Restates suit information across sides.
    NonCanonical,
    /// Conditions did not form a valid rule.
    Invalid,
}

/// Counters collected during one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Combinations examined.
    pub examined: u32,

    /// Rules emitted.
    pub accepted: u32,

    pub blacklisted: u32,
    pub clashing: u32,
    pub antagonistic: u32,
    pub out_of_band: u32,
    pub unconditional: u32,
    pub non_canonical: u32,
    pub invalid: u32,

    /// Blacklist size after the last accepted rule.
    pub blacklist_entries: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one rejection.
    pub fn reject(&mut self, reason: Rejection) {
        let counter = match reason {
            Rejection::Blacklisted => &mut self.blacklisted,
            Rejection::Clash => &mut self.clashing,
            Rejection::Antagonistic => &mut self.antagonistic,
            Rejection::OutOfBand => &mut self.out_of_band,
            Rejection::Unconditional => &mut self.unconditional,
            Rejection::NonCanonical => &mut self.non_canonical,
            Rejection::Invalid => &mut self.invalid,
        };
        *counter += 1;
    }

    /// Total rejections across all reasons.
    #[must_use]
    pub fn rejected(&self) -> u32 {
        self.blacklisted
            + self.clashing
            + self.antagonistic
            + self.out_of_band
            + self.unconditional
            + self.non_canonical
            + self.invalid
    }

    /// Fraction of examined combinations that became rules.
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.examined == 0 {
            0.0
        } else {
            self.accepted as f64 / self.examined as f64
        }
    }
}

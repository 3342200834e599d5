//! Word selection for rule text.
//!
//! Sentence assembly lives outside this crate. What a renderer needs from a
//! rule is which words describe each card and in what order:
//!
//! - single-card words sorted by their adjective rank
//! - each comparative word placed at the front of the shorter side, the
//!   previous side only when strictly shorter, phrased from that card's
//!   point of view ("lower" previous card = "higher" candidate card)

use crate::conditions::Side;

use super::rule::Rule;

/// Ordered words describing each card of a rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleWords {
    pub previous: Vec<&'static str>,
    pub candidate: Vec<&'static str>,
}

impl Rule {
    /// Words describing the previous and candidate card.
    #[must_use]
    pub fn words(&self) -> RuleWords {
        let sorted_words = |side: Side| {
            let mut conds: Vec<_> = self.on_side(side).collect();
            conds.sort_by_key(|c| c.adjective_rank());
            conds.into_iter().map(|c| c.word()).collect::<Vec<_>>()
        };
        let mut words = RuleWords {
            previous: sorted_words(Side::Previous),
            candidate: sorted_words(Side::Candidate),
        };
        for comp in self.on_side(Side::Comparative) {
            if words.previous.len() < words.candidate.len() {
                words.previous.insert(0, comp.previous_word());
            } else {
                words.candidate.insert(0, comp.candidate_word());
            }
        }
        words
    }
}

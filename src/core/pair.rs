//! The pair space and boolean masks over it.
//!
//! A pair is an ordered (previous card, candidate card). All 52 x 52 = 2704
//! pairs are addressed by a dense index:
//! `previous.index() * 52 + candidate.index()`.
//!
//! A `Mask` is a fixed-length bitset over that index. It is the evaluation
//! of one condition, or the conjunction of several.
//!
//! ```
//! use crazy_rules::core::{Card, Mask, PairSpace, Suit};
//!
//! let same_number = PairSpace::from_fn(|prev, cand| prev.number() == cand.number());
//! assert_eq!(same_number.count(), 13 * 4 * 4);
//! assert!(same_number.contains(Card::new(7, Suit::Club), Card::new(7, Suit::Heart)));
//! assert_eq!((&same_number & &!&same_number), Mask::empty());
//! ```

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use once_cell::sync::Lazy;

use super::card::{Card, DECK_SIZE};

/// Number of ordered card pairs.
pub const PAIR_COUNT: usize = DECK_SIZE * DECK_SIZE;

const WORD_BITS: usize = u64::BITS as usize;

/// Words backing a `Mask`.
pub const MASK_WORDS: usize = PAIR_COUNT.div_ceil(WORD_BITS);

/// Valid bits of the last word.
const TAIL_MASK: u64 = if PAIR_COUNT % WORD_BITS == 0 {
    u64::MAX
} else {
    (1u64 << (PAIR_COUNT % WORD_BITS)) - 1
};

static SELF_PAIRS: Lazy<Mask> = Lazy::new(|| PairSpace::from_fn(|prev, cand| prev == cand));

/// Index arithmetic over the pair space.
pub struct PairSpace;

impl PairSpace {
    /// Dense index of an ordered pair.
    #[must_use]
    pub const fn index(previous: Card, candidate: Card) -> usize {
        previous.index() * DECK_SIZE + candidate.index()
    }

    /// Pair for a dense index.
    #[must_use]
    pub const fn pair(index: usize) -> Option<(Card, Card)> {
        if index >= PAIR_COUNT {
            return None;
        }
        match (
            Card::from_index(index / DECK_SIZE),
            Card::from_index(index % DECK_SIZE),
        ) {
            (Some(previous), Some(candidate)) => Some((previous, candidate)),
            _ => None,
        }
    }

    /// Iterate over every pair in index order.
    pub fn pairs() -> impl Iterator<Item = (Card, Card)> {
        (0..PAIR_COUNT).filter_map(PairSpace::pair)
    }

    /// Mask of pairs satisfying `predicate`.
    pub fn from_fn(predicate: impl Fn(Card, Card) -> bool) -> Mask {
        let mut mask = Mask::empty();
        for (index, (previous, candidate)) in Self::pairs().enumerate() {
            if predicate(previous, candidate) {
                mask.insert(index);
            }
        }
        mask
    }

    /// Pairs whose previous and candidate are the same card.
    #[must_use]
    pub fn self_pairs() -> &'static Mask {
        &SELF_PAIRS
    }
}

/// Bitset over the 2704 ordered pairs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    words: [u64; MASK_WORDS],
}

impl Mask {
    /// Mask with no pairs set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            words: [0; MASK_WORDS],
        }
    }

    /// Mask with every pair set.
    #[must_use]
    pub const fn full() -> Self {
        let mut words = [u64::MAX; MASK_WORDS];
        words[MASK_WORDS - 1] = TAIL_MASK;
        Self { words }
    }

    /// Set the bit for a pair index.
    ///
    /// Panics if `index` is outside the pair space.
    pub fn insert(&mut self, index: usize) {
        assert!(index < PAIR_COUNT, "Pair index out of range");
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Clear the bit for a pair index.
    pub fn remove(&mut self, index: usize) {
        if index < PAIR_COUNT {
            self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
        }
    }

    /// Check the bit for a pair index.
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        index < PAIR_COUNT && self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Check whether a concrete pair is set.
    #[must_use]
    pub fn contains(&self, previous: Card, candidate: Card) -> bool {
        self.get(PairSpace::index(previous, candidate))
    }

    /// Population count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Population count of `self & other` without allocating the result.
    #[must_use]
    pub fn intersection_count(&self, other: &Mask) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Population count ignoring self-pairs.
    #[must_use]
    pub fn count_distinct_pairs(&self) -> usize {
        self.count() - self.intersection_count(PairSpace::self_pairs())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        *self == Mask::full()
    }

    /// True if every pair in `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Mask) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &Mask) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & b == 0)
    }

    /// Iterate over set pair indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }

    /// Iterate over set pairs in index order.
    pub fn pairs(&self) -> impl Iterator<Item = (Card, Card)> + '_ {
        self.indices().filter_map(PairSpace::pair)
    }

    fn zip_with(&self, other: &Mask, op: impl Fn(u64, u64) -> u64) -> Mask {
        let mut words = [0; MASK_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = op(self.words[i], other.words[i]);
        }
        Mask { words }
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mask({} pairs)", self.count())
    }
}

macro_rules! mask_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&Mask> for &Mask {
            type Output = Mask;

            fn $method(self, rhs: &Mask) -> Mask {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl $trait<&Mask> for Mask {
            type Output = Mask;

            fn $method(self, rhs: &Mask) -> Mask {
                (&self).$method(rhs)
            }
        }

        impl $trait<Mask> for Mask {
            type Output = Mask;

            fn $method(self, rhs: Mask) -> Mask {
                (&self).$method(&rhs)
            }
        }
    };
}

mask_binop!(BitAnd, bitand, &);
mask_binop!(BitOr, bitor, |);
mask_binop!(BitXor, bitxor, ^);

impl BitAndAssign<&Mask> for Mask {
    fn bitand_assign(&mut self, rhs: &Mask) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a &= b;
        }
    }
}

impl BitOrAssign<&Mask> for Mask {
    fn bitor_assign(&mut self, rhs: &Mask) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a |= b;
        }
    }
}

impl Not for &Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        let mut words = [0; MASK_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = !self.words[i];
        }
        words[MASK_WORDS - 1] &= TAIL_MASK;
        Mask { words }
    }
}

impl Not for Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        !&self
    }
}

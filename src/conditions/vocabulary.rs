//! The closed vocabulary of card descriptions.
//!
//! Single-card conditions never hold arbitrary sets: each one names a word
//! from this vocabulary, and the word fixes the set of numbers or suits.
//!
//! ## Number Words
//!
//! | word    | numbers              |
//! |---------|----------------------|
//! | odd     | 1 3 5 7 9 11 13      |
//! | even    | 2 4 6 8 10 12        |
//! | high    | 8 - 13               |
//! | low     | 1 - 7                |
//! | face    | 11 12 13             |
//! | quartet | 4 8 12               |
//! | trio    | 3 6 9 12             |
//!
//! Quartet and trio are only in the extended catalog; quartet still takes
//! part in the algebra as the stricter form of "even".

use serde::{Deserialize, Serialize};

use crate::core::{Color, Suit};

/// Set of card numbers, bit `n` for number `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankSet(u16);

impl RankSet {
    /// Every number, 1 through 13.
    pub const ALL: RankSet = RankSet(0b11_1111_1111_1110);

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set holding the given numbers. Numbers outside `1..=13` are ignored.
    #[must_use]
    pub fn from_numbers(numbers: &[u8]) -> Self {
        let bits = numbers
            .iter()
            .filter(|n| (1..=13).contains(*n))
            .fold(0u16, |acc, &n| acc | 1 << n);
        Self(bits)
    }

    /// Numbers `low..=high`.
    #[must_use]
    pub fn range(low: u8, high: u8) -> Self {
        Self::from_numbers(&(low..=high).collect::<Vec<_>>())
    }

    #[must_use]
    pub const fn contains(self, number: u8) -> bool {
        number >= 1 && number <= 13 && self.0 & (1 << number) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn intersection(self, other: RankSet) -> RankSet {
        RankSet(self.0 & other.0)
    }

    #[must_use]
    pub const fn is_disjoint(self, other: RankSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Smallest number in the set.
    #[must_use]
    pub fn min(self) -> Option<u8> {
        self.iter().next()
    }

    /// Largest number in the set.
    #[must_use]
    pub fn max(self) -> Option<u8> {
        self.iter().last()
    }

    /// Iterate over the numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=13).filter(move |&n| self.contains(n))
    }
}

/// Set of suits, bit `i` for `Suit::index() == i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SuitSet(u8);

impl SuitSet {
    #[must_use]
    pub fn from_suits(suits: &[Suit]) -> Self {
        Self(suits.iter().fold(0, |acc, s| acc | 1 << s.index()))
    }

    #[must_use]
    pub const fn contains(self, suit: Suit) -> bool {
        self.0 & (1 << suit.index()) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_disjoint(self, other: SuitSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over the suits in index order.
    pub fn iter(self) -> impl Iterator<Item = Suit> {
        Suit::ALL.into_iter().filter(move |&s| self.contains(s))
    }

    /// The shared color, if every suit in the set has the same one.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        let mut colors = self.iter().map(Suit::color);
        let first = colors.next()?;
        colors.all(|c| c == first).then_some(first)
    }
}

/// Words describing a card's number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumberWord {
    Odd,
    Even,
    High,
    Low,
    Face,
    Quartet,
    Trio,
}

impl NumberWord {
    /// Every number word.
    pub const ALL: [NumberWord; 7] = [
        NumberWord::Odd,
        NumberWord::Even,
        NumberWord::High,
        NumberWord::Low,
        NumberWord::Face,
        NumberWord::Quartet,
        NumberWord::Trio,
    ];

    /// Number words in the reference catalog.
    pub const CATALOG: [NumberWord; 5] = [
        NumberWord::Odd,
        NumberWord::Even,
        NumberWord::High,
        NumberWord::Low,
        NumberWord::Face,
    ];

    /// Numbers the word describes.
    #[must_use]
    pub fn ranks(self) -> RankSet {
        match self {
            NumberWord::Odd => RankSet::from_numbers(&[1, 3, 5, 7, 9, 11, 13]),
            NumberWord::Even => RankSet::from_numbers(&[2, 4, 6, 8, 10, 12]),
            NumberWord::High => RankSet::range(8, 13),
            NumberWord::Low => RankSet::range(1, 7),
            NumberWord::Face => RankSet::range(11, 13),
            NumberWord::Quartet => RankSet::from_numbers(&[4, 8, 12]),
            NumberWord::Trio => RankSet::from_numbers(&[3, 6, 9, 12]),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NumberWord::Odd => "odd",
            NumberWord::Even => "even",
            NumberWord::High => "high",
            NumberWord::Low => "low",
            NumberWord::Face => "face",
            NumberWord::Quartet => "quartet",
            NumberWord::Trio => "trio",
        }
    }

    /// Position when several adjectives describe one card.
    #[must_use]
    pub const fn adjective_rank(self) -> usize {
        match self {
            NumberWord::High => 0,
            NumberWord::Low => 1,
            NumberWord::Odd => 2,
            NumberWord::Even => 3,
            NumberWord::Quartet => 6,
            NumberWord::Trio => 7,
            NumberWord::Face => 12,
        }
    }
}

/// Words describing a card's suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SuitWord {
    Spade,
    Club,
    Diamond,
    Heart,
    Red,
    Black,
}

impl SuitWord {
    /// Every suit word, in catalog order.
    pub const ALL: [SuitWord; 6] = [
        SuitWord::Spade,
        SuitWord::Club,
        SuitWord::Diamond,
        SuitWord::Heart,
        SuitWord::Red,
        SuitWord::Black,
    ];

    /// Suits the word describes.
    #[must_use]
    pub fn suits(self) -> SuitSet {
        match self {
            SuitWord::Spade => SuitSet::from_suits(&[Suit::Spade]),
            SuitWord::Club => SuitSet::from_suits(&[Suit::Club]),
            SuitWord::Diamond => SuitSet::from_suits(&[Suit::Diamond]),
            SuitWord::Heart => SuitSet::from_suits(&[Suit::Heart]),
            SuitWord::Red => SuitSet::from_suits(&[Suit::Diamond, Suit::Heart]),
            SuitWord::Black => SuitSet::from_suits(&[Suit::Club, Suit::Spade]),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SuitWord::Spade => "spade",
            SuitWord::Club => "club",
            SuitWord::Diamond => "diamond",
            SuitWord::Heart => "heart",
            SuitWord::Red => "red",
            SuitWord::Black => "black",
        }
    }

    /// True for words naming one suit ("spade"), false for colors ("red").
    #[must_use]
    pub const fn is_single_suit(self) -> bool {
        !matches!(self, SuitWord::Red | SuitWord::Black)
    }

    /// Position when several adjectives describe one card.
    #[must_use]
    pub const fn adjective_rank(self) -> usize {
        match self {
            SuitWord::Red => 4,
            SuitWord::Black => 5,
            SuitWord::Spade => 8,
            SuitWord::Heart => 9,
            SuitWord::Diamond => 10,
            SuitWord::Club => 11,
        }
    }
}

/// Which words a catalog is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub number_words: Vec<NumberWord>,
    pub suit_words: Vec<SuitWord>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            number_words: NumberWord::CATALOG.to_vec(),
            suit_words: SuitWord::ALL.to_vec(),
        }
    }
}

impl VocabularyConfig {
    /// Reference vocabulary plus quartet and trio.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            number_words: NumberWord::ALL.to_vec(),
            suit_words: SuitWord::ALL.to_vec(),
        }
    }

    /// True for the reference vocabulary.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_set_basics() {
        let odd = NumberWord::Odd.ranks();
        assert_eq!(odd.len(), 7);
        assert!(odd.contains(13));
        assert!(!odd.contains(12));
        assert!(!odd.contains(0));
        assert!(!odd.contains(14));
        assert_eq!(odd.min(), Some(1));
        assert_eq!(odd.max(), Some(13));
        assert_eq!(RankSet::ALL.len(), 13);
        assert_eq!(RankSet::empty().min(), None);
    }

    #[test]
    fn test_rank_set_intersection() {
        let even_face = NumberWord::Even.ranks().intersection(NumberWord::Face.ranks());
        assert_eq!(even_face.iter().collect::<Vec<_>>(), vec![12]);
        assert!(NumberWord::Face.ranks().is_disjoint(NumberWord::Low.ranks()));
    }

    #[test]
    fn test_number_words_partition() {
        let odd = NumberWord::Odd.ranks();
        let even = NumberWord::Even.ranks();
        assert!(odd.is_disjoint(even));
        assert_eq!(odd.len() + even.len(), 13);

        let high = NumberWord::High.ranks();
        let low = NumberWord::Low.ranks();
        assert!(high.is_disjoint(low));
        assert_eq!(high.len() + low.len(), 13);
    }

    #[test]
    fn test_suit_words() {
        assert_eq!(SuitWord::Red.suits().color(), Some(Color::Red));
        assert_eq!(SuitWord::Black.suits().color(), Some(Color::Black));
        assert_eq!(SuitWord::Spade.suits().len(), 1);
        assert!(SuitWord::Spade.is_single_suit());
        assert!(!SuitWord::Red.is_single_suit());
        assert!(SuitWord::Red.suits().is_disjoint(SuitWord::Club.suits()));

        let mixed = SuitSet::from_suits(&[Suit::Spade, Suit::Heart]);
        assert_eq!(mixed.color(), None);
    }

    #[test]
    fn test_adjective_ranks_are_distinct() {
        let mut ranks: Vec<usize> = NumberWord::ALL
            .iter()
            .map(|w| w.adjective_rank())
            .chain(SuitWord::ALL.iter().map(|w| w.adjective_rank()))
            .collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_vocabulary_config() {
        assert!(VocabularyConfig::default().is_reference());
        assert!(!VocabularyConfig::extended().is_reference());
        assert_eq!(VocabularyConfig::extended().number_words.len(), 7);
    }
}

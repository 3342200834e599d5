//! Playing cards: thirteen numbers in four suits.
//!
//! ## Card Index
//!
//! Every card has a dense index in `0..52`, number-major:
//! `(number - 1) * 4 + suit.index()`. The pair space builds on this index.

use serde::{Deserialize, Serialize};

/// Number of distinct card numbers (ace = 1 through king = 13).
pub const NUMBER_COUNT: usize = 13;

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Cards in one deck.
pub const DECK_SIZE: usize = NUMBER_COUNT * SUIT_COUNT;

/// Card suit.
///
/// Declaration order (spade, heart, club, diamond) is the suit index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// Dense index in `0..4`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit for a dense index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Spade),
            1 => Some(Suit::Heart),
            2 => Some(Suit::Club),
            3 => Some(Suit::Diamond),
            _ => None,
        }
    }

    /// Derived color: clubs and spades are black, diamonds and hearts red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }

    /// Single-letter abbreviation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Club => 'C',
            Suit::Diamond => 'D',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    number: u8,
    suit: Suit,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `number` is outside `1..=13`.
    #[must_use]
    pub fn new(number: u8, suit: Suit) -> Self {
        assert!(
            (1..=NUMBER_COUNT as u8).contains(&number),
            "Card number must be 1-13"
        );
        Self { number, suit }
    }

    /// Card number, 1 (ace) to 13 (king).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Dense index in `0..52`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.number as usize - 1) * SUIT_COUNT + self.suit.index()
    }

    /// Card for a dense index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Card> {
        if index >= DECK_SIZE {
            return None;
        }
        match Suit::from_index(index % SUIT_COUNT) {
            Some(suit) => Some(Card {
                number: (index / SUIT_COUNT) as u8 + 1,
                suit,
            }),
            None => None,
        }
    }

    /// Iterate over the whole deck in index order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).filter_map(Card::from_index)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            1 => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            n => write!(f, "{}{}", n, self.suit),
        }
    }
}

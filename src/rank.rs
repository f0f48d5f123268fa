//! Poker hand categories.

use core::fmt;

/// A poker hand category, ordered from weakest to strongest.
///
/// This is the category only; hands that share a category are not ranked
/// against each other (there is no kicker comparison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// No other category matches.
    HighCard = 0,
    /// Two cards of one value.
    Pair = 1,
    /// Two different pairs.
    TwoPair = 2,
    /// Three cards of one value.
    ThreeOfAKind = 3,
    /// A run of consecutive values.
    Straight = 4,
    /// All cards share a suit.
    Flush = 5,
    /// Three of one value and two of another.
    FullHouse = 6,
    /// Four cards of one value.
    FourOfAKind = 7,
    /// A straight that is also a flush.
    StraightFlush = 8,
}

impl Rank {
    /// All categories, weakest first.
    pub const ALL: [Self; 9] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];

    /// Returns the strength of the category (0-8).
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

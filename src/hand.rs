//! Poker hands and their classification.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Suit, Value};
use crate::error::HandError;
use crate::rank::Rank;

// Whether the strengths form a run of distinct consecutive values covering
// the whole hand.
fn is_run(mut strengths: Vec<u8>, size: usize) -> bool {
    strengths.sort_unstable();
    strengths.dedup();
    match (strengths.first(), strengths.last()) {
        (Some(&low), Some(&high)) => {
            strengths.len() == size && usize::from(high - low) + 1 == size
        }
        _ => false,
    }
}

/// A hand of cards.
///
/// Hands may hold any positive number of cards. The cards are kept sorted by
/// value (ties broken by suit ordinal) and the hand never changes after it
/// is built.
///
/// Hands are ordered by [`Rank`] only. Two different hands of the same rank
/// are neither less nor greater than each other.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, sorted ascending.
    cards: Vec<Card>,
    /// Number of cards per value.
    value_counts: HashMap<Value, usize>,
    /// Number of cards per suit.
    suit_counts: HashMap<Suit, usize>,
}

impl Hand {
    /// Creates a hand from the given cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Empty`] if `cards` is empty.
    pub fn new(mut cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.is_empty() {
            return Err(HandError::Empty);
        }

        cards.sort_by_key(|card| (card.value, card.suit));

        let mut value_counts = HashMap::new();
        let mut suit_counts = HashMap::new();
        for card in &cards {
            *value_counts.entry(card.value).or_insert(0) += 1;
            *suit_counts.entry(card.suit).or_insert(0) += 1;
        }

        Ok(Self {
            cards,
            value_counts,
            suit_counts,
        })
    }

    /// Parses a hand from comma-separated card codes.
    ///
    /// Whitespace is ignored and codes are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidCard`] for the first code that does not
    /// decode to a card.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::{Hand, Rank};
    ///
    /// let hand = Hand::parse("AS, KS, QS, JS, TS").unwrap();
    /// assert_eq!(hand.rank(), Rank::StraightFlush);
    /// ```
    pub fn parse(text: &str) -> Result<Self, HandError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let cards = compact
            .split(',')
            .map(Card::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    /// Returns the cards in the hand, lowest value first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty. Hands always hold at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards per value.
    #[must_use]
    pub const fn value_counts(&self) -> &HashMap<Value, usize> {
        &self.value_counts
    }

    /// Returns the number of cards per suit.
    #[must_use]
    pub const fn suit_counts(&self) -> &HashMap<Suit, usize> {
        &self.suit_counts
    }

    /// Classifies the hand.
    #[must_use]
    pub fn rank(&self) -> Rank {
        if self.is_straight_flush() {
            Rank::StraightFlush
        } else if self.is_four_of_a_kind() {
            Rank::FourOfAKind
        } else if self.is_full_house() {
            Rank::FullHouse
        } else if self.is_flush() {
            Rank::Flush
        } else if self.is_straight() {
            Rank::Straight
        } else if self.is_three_of_a_kind() {
            Rank::ThreeOfAKind
        } else if self.is_two_pair() {
            Rank::TwoPair
        } else if self.is_pair() {
            Rank::Pair
        } else {
            Rank::HighCard
        }
    }

    /// Value group sizes, largest first.
    fn groups(&self) -> Vec<usize> {
        let mut groups: Vec<usize> = self.value_counts.values().copied().collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        groups
    }

    fn largest_group(&self) -> usize {
        self.value_counts.values().copied().max().unwrap_or(0)
    }

    /// Returns whether the hand is both a straight and a flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.is_flush() && self.is_straight()
    }

    /// Returns whether the largest value group holds four cards.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        self.largest_group() == 4
    }

    /// Returns whether the two largest value groups are exactly three and two.
    ///
    /// For hands with more than five cards this is stricter than it looks:
    /// two triples make the groups `[3, 3, ..]`, which is not a full house.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.groups().starts_with(&[3, 2])
    }

    /// Returns whether every card has the same suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        self.suit_counts.len() == 1
    }

    /// Returns whether the values form a run with no duplicates.
    ///
    /// The ace is tried both as the lowest value (`A-2-3-4-5`) and as the
    /// highest (`T-J-Q-K-A`).
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let low = self.cards.iter().map(|card| card.value.strength()).collect();
        let high = self.cards.iter().map(|card| card.value.high_strength()).collect();
        is_run(low, self.len()) || is_run(high, self.len())
    }

    /// Returns whether the largest value group holds three cards.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        self.largest_group() == 3
    }

    /// Returns whether the two largest value groups are exactly two and two.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.groups().starts_with(&[2, 2])
    }

    /// Returns whether the largest value group holds two cards.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.largest_group() == 2
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! The deck: a stack of undrawn cards with draw and shuffle counters.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Suit, Value};
use crate::error::DrawError;
use crate::hand::Hand;
use crate::options::DeckOptions;

/// A deck of playing cards.
///
/// The last card of the underlying sequence is the top of the deck. Drawn
/// cards are removed for good; nothing puts them back.
///
/// # Example
///
/// ```
/// use pokerdeck::{Deck, DeckOptions};
///
/// let mut deck = Deck::new(DeckOptions::default(), 42);
/// let hand = deck.draw_hand(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.cards_left(), 47);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left in the deck, bottom first.
    cards: Vec<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Number of shuffles performed.
    shuffles: usize,
    /// Number of cards drawn.
    draws: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a standard 52-card deck.
    ///
    /// Before the configured shuffles, the first card drawn is the ace of
    /// spades, followed by the rest of the spades, then clubs, diamonds and
    /// hearts.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut cards = Self::enumerate(|_| true);
        debug_assert_eq!(cards.len(), DECK_SIZE);
        cards.reverse();
        Self::from_cards(cards, options, seed)
    }

    /// Creates a deck from the given cards, in order, with the last card on top.
    ///
    /// The configured shuffles are still applied.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, options: DeckOptions, seed: u64) -> Self {
        trace!(cards = cards.len(), seed, "creating deck");

        let mut deck = Self {
            cards,
            options,
            shuffles: 0,
            draws: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle(options.shuffles);
        deck
    }

    /// Creates a deck holding every suit of the values accepted by `keep`.
    ///
    /// Cards are laid out like [`Deck::new`] before shuffling.
    #[must_use]
    pub fn filtered<F>(keep: F, options: DeckOptions, seed: u64) -> Self
    where
        F: Fn(Value) -> bool,
    {
        let mut cards = Self::enumerate(keep);
        cards.reverse();
        Self::from_cards(cards, options, seed)
    }

    /// Creates a 24-card euchre deck: nine through king, plus aces.
    #[must_use]
    pub fn euchre(options: DeckOptions, seed: u64) -> Self {
        Self::filtered(
            |value| value.strength() >= 9 || value == Value::Ace,
            options,
            seed,
        )
    }

    fn enumerate<F>(keep: F) -> Vec<Card>
    where
        F: Fn(Value) -> bool,
    {
        let keep = &keep;
        Suit::ALL
            .into_iter()
            .flat_map(move |suit| {
                Value::ALL
                    .into_iter()
                    .filter(move |&value| keep(value))
                    .map(move |value| Card::new(value, suit))
            })
            .collect()
    }

    /// Shuffles the remaining cards `times` times.
    pub fn shuffle(&mut self, times: usize) {
        for _ in 0..times {
            self.cards.shuffle(&mut self.rng);
            self.shuffles += 1;
        }
        trace!(times, remaining = self.cards.len(), "shuffled deck");
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop().ok_or(DrawError::Empty)?;
        self.draws += 1;
        trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Draws `times` cards from the top, in drawing order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if fewer than `times` cards are
    /// left. The deck is not modified in that case.
    pub fn draw_many(&mut self, times: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.cards.len();
        if times > remaining {
            debug!(requested = times, remaining, "draw rejected");
            return Err(DrawError::NotEnoughCards {
                requested: times,
                remaining,
            });
        }

        let mut drawn = Vec::with_capacity(times);
        for _ in 0..times {
            drawn.push(self.draw()?);
        }
        Ok(drawn)
    }

    /// Draws `size` cards and returns them as a hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyHand`] if `size` is zero, or
    /// [`DrawError::NotEnoughCards`] if fewer than `size` cards are left.
    pub fn draw_hand(&mut self, size: usize) -> Result<Hand, DrawError> {
        if size == 0 {
            return Err(DrawError::EmptyHand);
        }
        let cards = self.draw_many(size)?;
        Hand::new(cards).map_err(|_| DrawError::EmptyHand)
    }

    /// Draws a hand of the configured [`DeckOptions::hand_size`].
    ///
    /// # Errors
    ///
    /// See [`Deck::draw_hand`].
    pub fn deal_hand(&mut self) -> Result<Hand, DrawError> {
        self.draw_hand(self.options.hand_size)
    }

    /// Returns the top card without drawing it.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Empty`] if no cards are left.
    pub fn top(&self) -> Result<Card, DrawError> {
        self.cards.last().copied().ok_or(DrawError::Empty)
    }

    /// Returns the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Empty`] if no cards are left.
    pub fn bottom(&self) -> Result<Card, DrawError> {
        self.cards.first().copied().ok_or(DrawError::Empty)
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of shuffles performed.
    #[must_use]
    pub const fn shuffles(&self) -> usize {
        self.shuffles
    }

    /// Returns the number of cards drawn.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Deck[{}]>", self.cards.len())
    }
}

//! Error types for parsing cards and operating on decks.

use thiserror::Error;

/// Errors that can occur when decoding card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// The text is not exactly two characters long.
    #[error("card text must be exactly two characters")]
    WrongLength,
    /// The first character is not a known value code.
    #[error("invalid value for card: {0:?}")]
    UnknownValue(char),
    /// The second character is not a known suit code.
    #[error("invalid suit for card: {0:?}")]
    UnknownSuit(char),
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand needs at least one card.
    #[error("a hand needs at least one card")]
    Empty,
    /// One of the card codes could not be decoded.
    #[error(transparent)]
    InvalidCard(#[from] InvalidCard),
}

/// Errors that can occur when drawing from or peeking at a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// More cards were requested than the deck holds.
    #[error("not enough cards in the deck: requested {requested}, {remaining} left")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A hand of zero cards was requested.
    #[error("cannot draw a hand of zero cards")]
    EmptyHand,
}

//! Playing cards, decks, and poker hand ranking with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that deals [`Card`]s into [`Hand`]s, and
//! classifies each hand into one of nine poker categories ([`Rank`]).
//!
//! # Example
//!
//! ```
//! use pokerdeck::{Deck, DeckOptions, Hand, Rank};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let hand = deck.draw_hand(5).unwrap();
//! println!("{hand} is a {}", hand.rank());
//!
//! let wheel: Hand = "AS, 2C, 3D, 4H, 5S".parse().unwrap();
//! assert_eq!(wheel.rank(), Rank::Straight);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod rank;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit, Value};
pub use deck::Deck;
pub use error::{DrawError, HandError, InvalidCard};
pub use hand::Hand;
pub use options::DeckOptions;
pub use rank::Rank;

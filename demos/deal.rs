//! Deals a few poker hands from a freshly shuffled deck.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use pokerdeck::{Deck, DeckOptions, DrawError};

fn main() -> Result<(), DrawError> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let mut deck = Deck::new(DeckOptions::default().with_shuffles(3), seed);
    println!("Seed {seed}, {deck}");

    while deck.cards_left() >= deck.options().hand_size {
        let hand = deck.deal_hand()?;
        println!("{:<32} {}", hand.to_string(), hand.rank());
    }

    println!(
        "{} cards drawn, {} left after {} shuffles",
        deck.draws(),
        deck.cards_left(),
        deck.shuffles()
    );
    Ok(())
}

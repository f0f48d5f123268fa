//! Deck draw and shuffle tests.

use std::collections::HashSet;

use pokerdeck::{Card, DECK_SIZE, Deck, DeckOptions, DrawError, Suit, Value};

const fn card(value: Value, suit: Suit) -> Card {
    Card::new(value, suit)
}

fn unshuffled() -> Deck {
    Deck::new(DeckOptions::unshuffled(), 0)
}

fn distinct(cards: &[Card]) -> usize {
    cards.iter().copied().collect::<HashSet<_>>().len()
}

#[test]
fn standard_deck_holds_every_card_once() {
    for deck in [unshuffled(), Deck::new(DeckOptions::default(), 7)] {
        assert_eq!(deck.cards_left(), DECK_SIZE);
        assert_eq!(distinct(deck.cards()), DECK_SIZE);
        for suit in Suit::ALL {
            for value in Value::ALL {
                assert!(deck.contains(&card(value, suit)));
            }
        }
    }
}

#[test]
fn unshuffled_deck_draws_in_base_order() {
    let mut deck = unshuffled();
    assert_eq!(deck.shuffles(), 0);
    assert_eq!(deck.top().unwrap(), card(Value::Ace, Suit::Spades));
    assert_eq!(deck.bottom().unwrap(), card(Value::King, Suit::Hearts));

    let drawn = deck.draw_many(3).unwrap();
    assert_eq!(
        drawn,
        vec![
            card(Value::Ace, Suit::Spades),
            card(Value::Two, Suit::Spades),
            card(Value::Three, Suit::Spades),
        ]
    );

    let mut deck = unshuffled();
    let spades = deck.draw_many(13).unwrap();
    assert!(spades.iter().all(|c| c.suit == Suit::Spades));
    assert_eq!(deck.draw().unwrap(), card(Value::Ace, Suit::Clubs));
}

#[test]
fn default_options_shuffle_once() {
    let deck = Deck::new(DeckOptions::default(), 7);
    assert_eq!(deck.shuffles(), 1);
    assert_eq!(deck.draws(), 0);

    let deck = Deck::new(DeckOptions::default().with_shuffles(4), 7);
    assert_eq!(deck.shuffles(), 4);
}

#[test]
fn draw_removes_cards_for_good() {
    let mut deck = Deck::new(DeckOptions::default(), 11);
    let mut seen = HashSet::new();

    while !deck.is_empty() {
        let top = deck.top().unwrap();
        let drawn = deck.draw().unwrap();
        assert_eq!(drawn, top);
        assert!(!deck.contains(&drawn));
        assert!(seen.insert(drawn));
        assert_eq!(deck.draws() + deck.cards_left(), DECK_SIZE);
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(deck.draw().unwrap_err(), DrawError::Empty);
    assert_eq!(deck.top().unwrap_err(), DrawError::Empty);
    assert_eq!(deck.bottom().unwrap_err(), DrawError::Empty);
    assert_eq!(deck.draws(), DECK_SIZE);
}

#[test]
fn overdraw_fails_without_touching_the_deck() {
    let mut deck = Deck::new(DeckOptions::default(), 3);
    deck.draw_many(50).unwrap();
    let before = deck.cards().to_vec();

    assert_eq!(
        deck.draw_many(3).unwrap_err(),
        DrawError::NotEnoughCards {
            requested: 3,
            remaining: 2,
        }
    );
    assert_eq!(deck.cards_left(), 2);
    assert_eq!(deck.draws(), 50);
    assert_eq!(deck.cards(), before.as_slice());

    assert_eq!(
        deck.draw_hand(5).unwrap_err(),
        DrawError::NotEnoughCards {
            requested: 5,
            remaining: 2,
        }
    );
    assert_eq!(deck.draw_many(2).unwrap().len(), 2);
    assert!(deck.is_empty());
}

#[test]
fn draw_many_zero_is_a_no_op() {
    let mut deck = unshuffled();
    assert!(deck.draw_many(0).unwrap().is_empty());
    assert_eq!(deck.cards_left(), DECK_SIZE);
    assert_eq!(deck.draws(), 0);
    assert_eq!(deck.draw_hand(0).unwrap_err(), DrawError::EmptyHand);
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = unshuffled();
    deck.draw_many(10).unwrap();
    let mut before = deck.cards().to_vec();

    deck.shuffle(3);
    assert_eq!(deck.shuffles(), 3);
    assert_eq!(deck.cards_left(), 42);
    assert_eq!(distinct(deck.cards()), 42);

    let mut after = deck.cards().to_vec();
    let key = |c: &Card| (c.suit, c.value);
    before.sort_by_key(key);
    after.sort_by_key(key);
    assert_eq!(before, after);

    deck.shuffle(0);
    assert_eq!(deck.shuffles(), 3);
    deck.shuffle(1);
    assert_eq!(deck.shuffles(), 4);
    assert_eq!(deck.draws(), 10);
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new(DeckOptions::default(), 99);
    let mut b = Deck::new(DeckOptions::default(), 99);
    let c = Deck::new(DeckOptions::default(), 100);

    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());

    a.shuffle(2);
    b.shuffle(2);
    assert_eq!(a.draw_many(5).unwrap(), b.draw_many(5).unwrap());
}

#[test]
fn draw_hand_and_deal_hand() {
    let mut deck = Deck::new(DeckOptions::default().with_hand_size(7), 5);

    let hand = deck.draw_hand(5).unwrap();
    assert_eq!(hand.len(), 5);
    assert_eq!(deck.cards_left(), 47);
    assert_eq!(deck.to_string(), "<Deck[47]>");
    for card in hand.cards() {
        assert!(!deck.contains(card));
    }

    let dealt = deck.deal_hand().unwrap();
    assert_eq!(dealt.len(), 7);
    assert_eq!(deck.draws(), 12);
    assert_eq!(deck.options().hand_size, 7);
}

#[test]
fn unshuffled_hand_is_the_top_cards() {
    let mut deck = unshuffled();
    let hand = deck.draw_hand(5).unwrap();
    assert_eq!(hand.to_string(), "[A♠, 2♠, 3♠, 4♠, 5♠]");
    assert_eq!(hand.rank(), pokerdeck::Rank::StraightFlush);
}

#[test]
fn from_cards_uses_the_given_order() {
    let cards = vec![
        card(Value::Two, Suit::Hearts),
        card(Value::Nine, Suit::Clubs),
        card(Value::King, Suit::Diamonds),
    ];
    let mut deck = Deck::from_cards(cards, DeckOptions::unshuffled(), 0);

    assert_eq!(deck.cards_left(), 3);
    assert_eq!(deck.bottom().unwrap(), card(Value::Two, Suit::Hearts));
    assert_eq!(deck.draw().unwrap(), card(Value::King, Suit::Diamonds));
    assert_eq!(deck.draw().unwrap(), card(Value::Nine, Suit::Clubs));
    assert_eq!(deck.top().unwrap(), card(Value::Two, Suit::Hearts));
}

#[test]
fn euchre_deck_is_nine_through_ace() {
    let mut deck = Deck::euchre(DeckOptions::default(), 1);
    assert_eq!(deck.cards_left(), 24);
    assert_eq!(distinct(deck.cards()), 24);
    assert!(
        deck.cards()
            .iter()
            .all(|c| c.value == Value::Ace || c.value.strength() >= 9)
    );
    assert!(!deck.contains(&card(Value::Eight, Suit::Spades)));
    assert!(deck.contains(&card(Value::Ace, Suit::Hearts)));

    deck.shuffle(2);
    assert_eq!(deck.shuffles(), 3);
    assert_eq!(deck.draw_many(24).unwrap().len(), 24);
    assert!(deck.draw_many(1).is_err());

    let mut ordered = Deck::euchre(DeckOptions::unshuffled(), 1);
    assert_eq!(ordered.draw().unwrap(), card(Value::Ace, Suit::Spades));
    assert_eq!(ordered.draw().unwrap(), card(Value::Nine, Suit::Spades));
}

#[test]
fn filtered_deck_with_custom_predicate() {
    let deck = Deck::filtered(|v| v.strength() >= 10, DeckOptions::unshuffled(), 0);
    assert_eq!(deck.cards_left(), 16);
    assert_eq!(deck.top().unwrap(), card(Value::Ten, Suit::Spades));
}

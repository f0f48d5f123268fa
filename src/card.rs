//! Card types: suits, values, and the playing card itself.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::InvalidCard;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Diamonds and hearts.
    Red,
}

/// Card suit.
///
/// Suits are ordered by their ordinal for display purposes only; they never
/// affect the strength of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Clubs.
    Clubs = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Hearts.
    Hearts = 3,
}

impl Suit {
    /// All suits in ordinal order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];

    /// Returns the ordinal of the suit (0-3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the single-letter code used in card text (`S`, `C`, `D`, `H`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
        }
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
        }
    }

    /// Returns the lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// Looks up a suit by its letter code, ignoring case.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            _ => None,
        }
    }

    // Code point just before the ace of this suit in the playing cards block.
    const fn unicode_base(self) -> u32 {
        match self {
            Self::Spades => 0x1F0A0,
            Self::Hearts => 0x1F0B0,
            Self::Diamonds => 0x1F0C0,
            Self::Clubs => 0x1F0D0,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card value, ace through king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    /// Ace. Counts as 1, or 14 at the top of a straight.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Value {
    /// All values in strength order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric strength of the value, with ace as 1.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Returns the strength with ace promoted to 14.
    #[must_use]
    pub const fn high_strength(self) -> u8 {
        match self {
            Self::Ace => 14,
            _ => self as u8,
        }
    }

    /// Returns the code used in card text (`A`, `2`-`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Returns the lowercase name of the value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Looks up a value by its code, ignoring case.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A playing card.
///
/// Two cards are equal only when both value and suit match. Ordering looks at
/// the value alone: cards of the same value but different suits are neither
/// equal nor ordered, so `<`, `>`, `<=` and `>=` all return `false` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parses a card from its two-character code, e.g. `"AS"` or `"th"`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard`] if the text is not exactly two characters long
    /// or either character is not a known code.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::{Card, Suit, Value};
    ///
    /// let card = Card::parse("qd").unwrap();
    /// assert_eq!(card, Card::new(Value::Queen, Suit::Diamonds));
    /// ```
    pub fn parse(text: &str) -> Result<Self, InvalidCard> {
        let mut chars = text.chars();
        let (Some(value), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InvalidCard::WrongLength);
        };

        let value = Value::from_code(value).ok_or(InvalidCard::UnknownValue(value))?;
        let suit = Suit::from_code(suit).ok_or(InvalidCard::UnknownSuit(suit))?;
        Ok(Self::new(value, suit))
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the card is black.
    #[must_use]
    pub const fn is_black(&self) -> bool {
        matches!(self.color(), Color::Black)
    }

    /// Returns whether the card is red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.color(), Color::Red)
    }

    /// Returns the text code of the card, value code followed by suit letter.
    ///
    /// Unlike [`Display`](fmt::Display), the result parses back with
    /// [`Card::parse`].
    #[must_use]
    pub const fn code(&self) -> Code {
        Code([self.value.code(), self.suit.code()])
    }

    /// Returns a displayable full name, e.g. `ace of spades`.
    #[must_use]
    pub const fn full_name(&self) -> FullName {
        FullName(*self)
    }

    /// Returns the Unicode playing card character for this card.
    #[must_use]
    pub fn unicode(&self) -> char {
        // The block has a knight between jack and queen.
        let knight = u32::from(self.value.strength() >= 12);
        let code = self.suit.unicode_base() + u32::from(self.value.strength()) + knight;
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new(Value::Ace, Suit::Spades)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.cmp(&other.value) {
            Ordering::Equal if self.suit != other.suit => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = InvalidCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The two-letter text code of a card, see [`Card::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([char; 2]);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// The full name of a card, see [`Card::full_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FullName(Card);

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.0.value.name(), self.0.suit.name())
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;

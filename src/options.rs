//! Deck configuration options.

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerdeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_shuffles(3)
///     .with_hand_size(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of shuffles performed when the deck is created.
    /// 0 keeps the cards in their construction order.
    pub shuffles: usize,
    /// Number of cards dealt by [`Deck::deal_hand`](crate::Deck::deal_hand).
    pub hand_size: usize,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            shuffles: 1,
            hand_size: 5,
        }
    }
}

impl DeckOptions {
    /// Sets the number of shuffles performed at creation.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffles(0);
    /// assert_eq!(options.shuffles, 0);
    /// ```
    #[must_use]
    pub const fn with_shuffles(mut self, shuffles: usize) -> Self {
        self.shuffles = shuffles;
        self
    }

    /// Sets the size of hands dealt with [`Deck::deal_hand`](crate::Deck::deal_hand).
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_hand_size(2);
    /// assert_eq!(options.hand_size, 2);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Returns options that leave a new deck unshuffled.
    #[must_use]
    pub fn unshuffled() -> Self {
        Self::default().with_shuffles(0)
    }
}

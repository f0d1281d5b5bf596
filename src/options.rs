//! Round configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoebox::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.5)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOptions {
    /// Number of decks in the shoe. Must be at least 1.
    pub decks: u8,
    /// Bonus paid on a natural, as a multiple of the wager (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for a fractional blackjack bonus.
    pub rounding_blackjack: RoundingMode,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            stand_on_soft_17: true,
        }
    }
}

impl RoundOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack bonus ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack bonuses.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{RoundOptions, RoundingMode};
    ///
    /// let options = RoundOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}

//! Caller-side chip balance.
//!
//! Rounds never touch a balance. A session debits the wager with
//! [`Bankroll::place_wager`] before starting a round and credits the
//! resolved delta with [`Bankroll::settle`] afterwards.

use crate::error::WagerError;
use crate::outcome::RoundResult;

/// Chips available to a player across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    chips: usize,
}

impl Bankroll {
    /// Creates a bankroll holding `chips`.
    #[must_use]
    pub const fn new(chips: usize) -> Self {
        Self { chips }
    }

    /// Returns the chips currently available.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns whether any chips remain.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.chips == 0
    }

    /// Debits a wager.
    ///
    /// # Errors
    ///
    /// Returns an error if the wager is zero or exceeds the available chips.
    pub const fn place_wager(&mut self, amount: usize) -> Result<usize, WagerError> {
        if amount == 0 {
            return Err(WagerError::InvalidWager);
        }
        if amount > self.chips {
            return Err(WagerError::InsufficientChips);
        }

        self.chips -= amount;
        Ok(amount)
    }

    /// Credits the chip delta of a resolved round.
    pub const fn settle(&mut self, result: &RoundResult) {
        self.chips = self.chips.saturating_add(result.delta);
    }
}

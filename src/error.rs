//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while building or drawing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe must hold at least one deck.
    #[error("deck count must be at least 1")]
    InvalidConfiguration,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The deck count is zero.
    #[error("deck count must be at least 1")]
    InvalidConfiguration,
    /// The wager is zero, or too large for its payout to fit in a `usize`.
    #[error("wager must be positive and its payout representable")]
    InvalidWager,
    /// The shoe ran out while dealing.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

impl From<ShoeError> for StartError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::InvalidConfiguration => Self::InvalidConfiguration,
            ShoeError::ShoeExhausted => Self::ShoeExhausted,
        }
    }
}

/// Errors that can occur when submitting a player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The round is not waiting on the player.
    #[error("decision submitted outside the player's turn")]
    InvalidDecisionContext,
    /// The shoe ran out while drawing.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

impl From<ShoeError> for DecisionError {
    fn from(err: ShoeError) -> Self {
        match err {
            // A live round always holds a valid shoe.
            ShoeError::InvalidConfiguration | ShoeError::ShoeExhausted => Self::ShoeExhausted,
        }
    }
}

/// Errors that can occur when placing a wager against a bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Wager amount is zero.
    #[error("wager must be positive")]
    InvalidWager,
    /// Wager exceeds the available chips.
    #[error("insufficient chips")]
    InsufficientChips,
}

/// Errors that can occur when parsing a card such as `"QD"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not exactly two characters.
    #[error("card must be two characters")]
    InvalidLength,
    /// Unknown rank character.
    #[error("unknown rank")]
    InvalidRank,
    /// Unknown suit character.
    #[error("unknown suit")]
    InvalidSuit,
}

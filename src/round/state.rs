//! Round state types.

use crate::outcome::RoundResult;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Dealing the opening cards.
    Dealing,
    /// Waiting for the player's decision.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over and the result is final.
    Resolved,
}

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Snapshot returned after starting a round or submitting a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStatus {
    /// The current state.
    pub state: RoundState,
    /// The result, once the round is resolved.
    pub result: Option<RoundResult>,
}

//! Round resolution and payouts.

use crate::hand::Hand;
use crate::options::{RoundOptions, RoundingMode};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. The wager stays forfeited.
    PlayerBust,
    /// Tie. The wager is returned.
    Push,
    /// Player was dealt a natural the dealer did not match.
    PlayerBlackjack,
    /// Dealer busted or player finished higher.
    PlayerWin,
    /// Dealer finished higher.
    DealerWin,
}

/// Natural blackjacks seen when the opening cards were dealt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naturals {
    /// Player was dealt a two-card 21.
    pub player: bool,
    /// Dealer was dealt a two-card 21.
    pub dealer: bool,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome classification.
    pub outcome: Outcome,
    /// The wager for the round.
    pub wager: usize,
    /// Chips to credit back to the caller. The wager was debited before the
    /// round, so a loss credits nothing.
    ///
    /// A natural credits the wager plus `wager × blackjack_pays`, with a
    /// fractional bonus rounded by `rounding_blackjack`. At the default 3:2
    /// an even wager is paid exactly; an odd wager is rounded down, so a
    /// wager of 3 returns 7.
    pub delta: usize,
    /// The player's final hand value.
    pub player_value: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Naturals from the deal.
    pub naturals: Naturals,
}

impl RoundResult {
    /// Net change to the caller's chips once the wager is accounted for.
    #[must_use]
    pub const fn net(&self) -> i128 {
        self.delta as i128 - self.wager as i128
    }
}

/// Chips credited for an unmatched natural, or `None` if it overflows.
fn blackjack_delta(wager: usize, options: &RoundOptions) -> Option<usize> {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let bonus = round_amount(
        (wager as f64) * options.blackjack_pays,
        options.rounding_blackjack,
    );
    // Float to int casts saturate, so an oversized bonus lands on usize::MAX.
    if bonus == usize::MAX {
        return None;
    }
    wager.checked_add(bonus)
}

/// Returns whether every payout for `wager` fits in a `usize`.
#[must_use]
pub fn payout_fits(wager: usize, options: &RoundOptions) -> bool {
    wager.checked_mul(2).is_some() && blackjack_delta(wager, options).is_some()
}

/// Resolves a finished round into an outcome and chip delta.
///
/// Checks run in order and the first match wins: player bust, equal
/// totals, unmatched player natural, dealer bust or higher player total,
/// otherwise a dealer win.
///
/// Payouts saturate at `usize::MAX`; rounds reject wagers for which
/// [`payout_fits`] is false, so they never get that far.
#[must_use]
pub fn resolve(
    dealer: &Hand,
    player: &Hand,
    wager: usize,
    naturals: Naturals,
    options: &RoundOptions,
) -> RoundResult {
    let dealer_value = dealer.value();
    let player_value = player.value();

    let (outcome, delta) = if player_value > 21 {
        (Outcome::PlayerBust, 0)
    } else if dealer_value == player_value {
        (Outcome::Push, wager)
    } else if naturals.player && !naturals.dealer {
        let delta = blackjack_delta(wager, options).unwrap_or(usize::MAX);
        (Outcome::PlayerBlackjack, delta)
    } else if dealer_value > 21 || player_value > dealer_value {
        (Outcome::PlayerWin, wager.saturating_mul(2))
    } else {
        (Outcome::DealerWin, 0)
    };

    log::debug!(
        "resolved round: {outcome:?} (player {player_value}, dealer {dealer_value}, delta {delta})"
    );

    RoundResult {
        outcome,
        wager,
        delta,
        player_value,
        dealer_value,
        naturals,
    }
}

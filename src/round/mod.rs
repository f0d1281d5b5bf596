//! Round engine and state management.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{ShoeError, StartError};
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::outcome::{self, Naturals, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;
pub mod view;

pub use state::{Decision, RoundState, RoundStatus};
pub use view::{TableView, Viewer};

/// A single blackjack round between one player and the dealer.
///
/// The round owns its shoe and both hands for its whole lifetime. Dealing
/// and the dealer's turn run to completion on their own; the only point
/// where the round waits on its caller is the player's turn, fed through
/// [`Round::submit_decision`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to deal.
    shoe: Shoe,
    /// Round options.
    options: RoundOptions,
    /// Wager, already debited by the caller.
    wager: usize,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand, including the hole card.
    dealer: Hand,
    /// Naturals seen on the deal.
    naturals: Naturals,
    /// Final result once resolved.
    result: Option<RoundResult>,
}

impl Round {
    /// Starts a round on a freshly shuffled shoe seeded with `seed`.
    ///
    /// Returns once the round is waiting on the player or already resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the wager is zero, the deck count is zero, or the
    /// shoe cannot cover the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::start(RoundOptions::default(), 10, 42).unwrap();
    /// assert_ne!(round.state(), RoundState::Dealing);
    /// ```
    pub fn start(options: RoundOptions, wager: usize, seed: u64) -> Result<Self, StartError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, wager, &mut rng)
    }

    /// Starts a round on a shoe shuffled with `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is zero, the wager is invalid, or
    /// the shoe cannot cover the deal.
    pub fn with_rng<R: Rng + ?Sized>(
        options: RoundOptions,
        wager: usize,
        rng: &mut R,
    ) -> Result<Self, StartError> {
        let shoe = Shoe::build(options.decks, rng)?;
        Self::with_shoe(shoe, options, wager)
    }

    /// Starts a round dealing from `shoe` in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if the wager is zero, its payout would not fit in a
    /// `usize`, or the shoe cannot cover the deal.
    pub fn with_shoe(shoe: Shoe, options: RoundOptions, wager: usize) -> Result<Self, StartError> {
        if wager == 0 || !outcome::payout_fits(wager, &options) {
            return Err(StartError::InvalidWager);
        }

        let mut round = Self {
            shoe,
            options,
            wager,
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
            naturals: Naturals::default(),
            result: None,
        };
        round.deal()?;

        Ok(round)
    }

    /// Deals player, dealer, player, dealer and checks for naturals.
    fn deal(&mut self) -> Result<(), ShoeError> {
        for _ in 0..2 {
            self.player.add_card(self.shoe.draw()?);
            self.dealer.add_card(self.shoe.draw()?);
        }

        self.naturals = Naturals {
            player: self.player.is_natural(),
            dealer: self.dealer.is_natural(),
        };
        log::debug!(
            "dealt player {} and dealer {}, naturals {:?}",
            self.player.value(),
            self.dealer.value(),
            self.naturals
        );

        // A dealer natural ends the round before the player acts.
        if self.dealer.value() == 21 || self.player.value() == 21 {
            self.finish();
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }

    /// Resolves the round and enters the terminal state.
    fn finish(&mut self) {
        self.result = Some(outcome::resolve(
            &self.dealer,
            &self.player,
            self.wager,
            self.naturals,
            &self.options,
        ));
        self.state = RoundState::Resolved;
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current state together with the result, if resolved.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        RoundStatus {
            state: self.state,
            result: self.result,
        }
    }

    /// Returns the result once the round is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the wager for this round.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the naturals seen on the deal.
    #[must_use]
    pub const fn naturals(&self) -> Naturals {
        self.naturals
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, hole card included.
    ///
    /// Use [`Round::peek_hands`] for what the player may see.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }
}

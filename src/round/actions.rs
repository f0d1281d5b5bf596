use crate::error::DecisionError;

use super::{Decision, Round, RoundState, RoundStatus};

impl Round {
    /// Applies a player decision.
    ///
    /// A hit that busts resolves the round. A hit that reaches 21, or a
    /// stand, hands over to the dealer, who plays out their hand before this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::InvalidDecisionContext`] if the round is not
    /// waiting on the player, leaving the round untouched. Returns
    /// [`DecisionError::ShoeExhausted`] if the shoe runs out mid-round. Either
    /// way the round is left exactly as it was before the call.
    pub fn submit_decision(&mut self, decision: Decision) -> Result<RoundStatus, DecisionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(DecisionError::InvalidDecisionContext);
        }

        // Dealer draws can fail after the player's card is taken, so a
        // failure restores the round as it was before the decision.
        let before = self.clone();
        if let Err(err) = self.apply(decision) {
            *self = before;
            return Err(err);
        }

        Ok(self.status())
    }

    fn apply(&mut self, decision: Decision) -> Result<(), DecisionError> {
        match decision {
            Decision::Hit => {
                let card = self.shoe.draw()?;
                self.player.add_card(card);

                let value = self.player.value();
                log::debug!("player hits {card}, now {value}");

                if value > 21 {
                    self.finish();
                } else if value == 21 {
                    self.dealer_turn()?;
                }
            }
            Decision::Stand => {
                log::debug!("player stands on {}", self.player.value());
                self.dealer_turn()?;
            }
        }

        Ok(())
    }
}

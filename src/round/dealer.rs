use crate::error::ShoeError;

use super::{Round, RoundState};

impl Round {
    /// Returns whether the dealer's fixed policy calls for another card.
    ///
    /// The dealer draws below 17 and stands on 17 through 21. Soft 17 is
    /// hit only when `stand_on_soft_17` is off.
    fn dealer_must_hit(&self) -> bool {
        let value = self.dealer.value();
        if value < 17 {
            return true;
        }
        value == 17 && self.dealer.is_soft() && !self.options.stand_on_soft_17
    }

    /// Plays out the dealer's hand, then resolves the round.
    pub(super) fn dealer_turn(&mut self) -> Result<(), ShoeError> {
        self.state = RoundState::DealerTurn;

        while self.dealer_must_hit() {
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
            log::debug!("dealer hits {card}, now {}", self.dealer.value());
        }

        if self.dealer.is_bust() {
            log::debug!("dealer busts with {}", self.dealer.value());
        }

        self.finish();
        Ok(())
    }
}

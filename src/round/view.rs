//! Read-only projections of the table.

use crate::card::Card;
use crate::value;

use super::{Round, RoundState};

/// Who is looking at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewer {
    /// The player. The dealer's hole card stays hidden during the player's turn.
    Player,
    /// The house. Sees every card.
    House,
}

/// What a viewer can see of both hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Dealer cards visible to the viewer.
    pub dealer_cards: &'a [Card],
    /// Number of dealer cards dealt face down.
    pub dealer_hidden: usize,
    /// Value of the visible dealer cards.
    pub dealer_value: u32,
    /// Player cards.
    pub player_cards: &'a [Card],
    /// Player hand value.
    pub player_value: u32,
}

impl Round {
    /// Returns the hands as `viewer` may see them.
    ///
    /// While the player is deciding, the player's view shows only the
    /// dealer's up card and its value.
    #[must_use]
    pub fn peek_hands(&self, viewer: Viewer) -> TableView<'_> {
        let dealer = self.dealer.cards();
        let hide_hole = viewer == Viewer::Player && self.state == RoundState::PlayerTurn;

        let (dealer_cards, dealer_value) = if hide_hole {
            let up = dealer.get(..1).unwrap_or(dealer);
            (up, up.first().map_or(0, value::up_card_value))
        } else {
            (dealer, self.dealer.value())
        };

        TableView {
            dealer_cards,
            dealer_hidden: dealer.len() - dealer_cards.len(),
            dealer_value,
            player_cards: self.player.cards(),
            player_value: self.player.value(),
        }
    }
}

//! Hand value computation.
//!
//! Every card starts at its provisional points (aces at 11). While the total
//! is over 21 and some ace still counts 11, exactly one such ace is demoted to
//! 1 and the total recomputed. Each demotion lowers the total by exactly 10,
//! so this greedy loop reaches the same answer as trying every ace
//! assignment.

use crate::card::Card;

const BUST_LIMIT: u32 = 21;
const ACE_DEMOTION: u32 = 10;

// A full 255-deck shoe totals under 100k points, far below `u32::MAX`.
fn evaluate_cards(cards: &[Card]) -> (u32, usize) {
    let mut value: u32 = 0;
    let mut soft_aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        value = value.saturating_add(u32::from(card.rank.points()));
    }

    while value > BUST_LIMIT && soft_aces > 0 {
        value -= ACE_DEMOTION;
        soft_aces -= 1;
    }

    (value, soft_aces)
}

/// Returns the best blackjack total for the cards.
///
/// The result may exceed 21, which signals a bust to the caller.
#[must_use]
pub fn value(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Returns whether an ace still counts 11 in the best total.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    let (value, soft_aces) = evaluate_cards(cards);
    soft_aces > 0 && value <= BUST_LIMIT
}

/// Value of a single card shown face up, e.g. the dealer's up card.
#[must_use]
pub const fn up_card_value(card: &Card) -> u32 {
    card.rank.points() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards<const N: usize>(ranks: [Rank; N]) -> [Card; N] {
        ranks.map(|rank| Card::new(rank, Suit::Clubs))
    }

    #[test]
    fn ace_king_is_twenty_one() {
        let hand = cards([Rank::Ace, Rank::King]);
        assert_eq!(value(&hand), 21);
        assert!(is_soft(&hand));
    }

    #[test]
    fn third_card_demotes_ace() {
        let hand = cards([Rank::Ace, Rank::King, Rank::Five]);
        assert_eq!(value(&hand), 16);
        assert!(!is_soft(&hand));
    }

    #[test]
    fn hard_bust_is_not_adjusted() {
        assert_eq!(value(&cards([Rank::Seven, Rank::Eight, Rank::Nine])), 24);
    }

    #[test]
    fn two_aces_and_nine_demotes_once() {
        let hand = cards([Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(value(&hand), 21);
        assert!(is_soft(&hand));
    }

    #[test]
    fn many_aces() {
        assert_eq!(value(&cards([Rank::Ace, Rank::Ace])), 12);
        assert_eq!(value(&cards([Rank::Ace, Rank::Ace, Rank::Ace])), 13);
        assert_eq!(
            value(&cards([Rank::Ace, Rank::Ace, Rank::Ace, Rank::King, Rank::Nine])),
            22
        );
    }

    #[test]
    fn large_hands_keep_exact_totals() {
        // Every ace demotes and the hand stays a bust at its all-low sum.
        assert_eq!(value(&[Card::new(Rank::Ace, Suit::Spades); 24]), 24);
        assert_eq!(value(&[Card::new(Rank::Ace, Suit::Spades); 300]), 300);

        let mut hand = [Card::new(Rank::King, Suit::Hearts); 27];
        hand[26] = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(value(&hand), 261);
        assert!(!is_soft(&hand));
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(value(&[]), 0);
        assert!(!is_soft(&[]));
    }

    #[test]
    fn value_is_deterministic() {
        let hand = cards([Rank::Ace, Rank::Six, Rank::Ace, Rank::Four]);
        assert_eq!(value(&hand), value(&hand));
        assert_eq!(value(&hand), 12);
        assert!(!is_soft(&hand));
    }
}

//! Outcome resolution and bankroll tests.

use shoebox::{
    Bankroll, Card, Hand, Naturals, Outcome, RoundOptions, WagerError, resolve,
};

fn hand(cards: &[&str]) -> Hand {
    cards.iter().map(|card| card.parse::<Card>().unwrap()).collect()
}

fn outcome_of(dealer: &[&str], player: &[&str], naturals: Naturals) -> (Outcome, usize) {
    let result = resolve(
        &hand(dealer),
        &hand(player),
        10,
        naturals,
        &RoundOptions::default(),
    );
    (result.outcome, result.delta)
}

#[test]
fn player_bust_forfeits_wager() {
    assert_eq!(
        outcome_of(&["KH", "QS"], &["KD", "5C", "7H"], Naturals::default()),
        (Outcome::PlayerBust, 0)
    );
}

#[test]
fn player_bust_loses_even_when_dealer_busts() {
    assert_eq!(
        outcome_of(&["KH", "6S", "9C"], &["KD", "5C", "7H"], Naturals::default()),
        (Outcome::PlayerBust, 0)
    );
}

#[test]
fn equal_totals_push() {
    assert_eq!(
        outcome_of(&["KH", "9S"], &["TD", "9C"], Naturals::default()),
        (Outcome::Push, 10)
    );
}

#[test]
fn natural_beats_dealer_eighteen() {
    let naturals = Naturals {
        player: true,
        dealer: false,
    };
    assert_eq!(
        outcome_of(&["KH", "8S"], &["AD", "KC"], naturals),
        (Outcome::PlayerBlackjack, 25)
    );
}

#[test]
fn natural_against_dealer_natural_pushes() {
    let naturals = Naturals {
        player: true,
        dealer: true,
    };
    assert_eq!(
        outcome_of(&["AH", "QS"], &["AD", "KC"], naturals),
        (Outcome::Push, 10)
    );
}

#[test]
fn three_card_twenty_one_pays_even_money() {
    assert_eq!(
        outcome_of(&["KH", "8S"], &["7D", "7C", "7H"], Naturals::default()),
        (Outcome::PlayerWin, 20)
    );
}

#[test]
fn dealer_bust_pays_player() {
    assert_eq!(
        outcome_of(&["KH", "6S", "8C"], &["KD", "8H"], Naturals::default()),
        (Outcome::PlayerWin, 20)
    );
}

#[test]
fn higher_dealer_total_wins() {
    assert_eq!(
        outcome_of(&["KH", "QS"], &["KD", "8H"], Naturals::default()),
        (Outcome::DealerWin, 0)
    );
}

#[test]
fn resolve_reports_values_and_net() {
    let result = resolve(
        &hand(&["KH", "6S", "8C"]),
        &hand(&["KD", "8H"]),
        10,
        Naturals::default(),
        &RoundOptions::default(),
    );
    assert_eq!(result.dealer_value, 24);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.wager, 10);
    assert_eq!(result.net(), 10);
}

#[test]
fn bankroll_rejects_bad_wagers() {
    let mut bankroll = Bankroll::new(20);
    assert_eq!(bankroll.place_wager(0).unwrap_err(), WagerError::InvalidWager);
    assert_eq!(
        bankroll.place_wager(21).unwrap_err(),
        WagerError::InsufficientChips
    );
    assert_eq!(bankroll.chips(), 20);
}

#[test]
fn bankroll_settles_round_delta() {
    let mut bankroll = Bankroll::new(100);
    assert_eq!(bankroll.place_wager(10), Ok(10));
    assert_eq!(bankroll.chips(), 90);

    let result = resolve(
        &hand(&["KH", "9S"]),
        &hand(&["AD", "KC"]),
        10,
        Naturals {
            player: true,
            dealer: false,
        },
        &RoundOptions::default(),
    );
    bankroll.settle(&result);
    assert_eq!(bankroll.chips(), 115);

    assert_eq!(bankroll.place_wager(115), Ok(115));
    assert!(bankroll.is_broke());
}

#[test]
fn payouts_saturate_instead_of_overflowing() {
    let wager = usize::MAX / 2 + 1;
    let win = resolve(
        &hand(&["KH", "6S", "8C"]),
        &hand(&["KD", "8H"]),
        wager,
        Naturals::default(),
        &RoundOptions::default(),
    );
    assert_eq!(win.outcome, Outcome::PlayerWin);
    assert_eq!(win.delta, usize::MAX);

    let natural = resolve(
        &hand(&["KH", "9S"]),
        &hand(&["AD", "KC"]),
        wager,
        Naturals {
            player: true,
            dealer: false,
        },
        &RoundOptions::default(),
    );
    assert_eq!(natural.delta, usize::MAX);

    let mut bankroll = Bankroll::new(usize::MAX - 1);
    bankroll.settle(&win);
    assert_eq!(bankroll.chips(), usize::MAX);
}

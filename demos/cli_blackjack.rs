//! CLI blackjack session.
//!
//! Run with `RUST_LOG=debug` to trace the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use shoebox::{
    Bankroll, Card, Decision, Outcome, Round, RoundOptions, RoundResult, RoundState, Suit,
    TableView, Viewer,
};

const STARTING_CHIPS: usize = 100;

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let mut bankroll = Bankroll::new(STARTING_CHIPS);
    let Some(mut decks) = prompt_decks() else {
        return;
    };

    while !bankroll.is_broke() {
        println!("Chips: {}", bankroll.chips());

        match prompt_line("Menu: [p]lay | [d]ecks | [e]xit: ").as_str() {
            "p" | "play" => {}
            "d" | "decks" => {
                let Some(count) = prompt_decks() else {
                    return;
                };
                decks = count;
                println!("Changed # of decks to: {decks}");
                continue;
            }
            "e" | "exit" | "q" | "quit" => {
                println!("Cashing out with {} chips.", bankroll.chips());
                return;
            }
            _ => {
                println!("Unknown choice.");
                continue;
            }
        }

        let wager = loop {
            let Some(amount) = prompt_usize(&format!("Wager (1-{}): ", bankroll.chips())) else {
                return;
            };
            match bankroll.place_wager(amount) {
                Ok(wager) => break wager,
                Err(err) => println!("Wager error: {err}"),
            }
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        let options = RoundOptions::default().with_decks(decks);
        let mut round = match Round::start(options, wager, seed) {
            Ok(round) => round,
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        };

        while round.state() == RoundState::PlayerTurn {
            print_table(&round.peek_hands(Viewer::Player));

            let decision = match prompt_line("[h]it | [s]tand: ").as_str() {
                "h" | "hit" => Decision::Hit,
                "s" | "stand" => Decision::Stand,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = round.submit_decision(decision) {
                println!("Action error: {err}");
                return;
            }
        }

        print_table(&round.peek_hands(Viewer::Player));
        if let Some(result) = round.result() {
            print_result(&result);
            bankroll.settle(&result);
        }
    }

    println!("No more chips available. Thanks for playing!");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_decks() -> Option<u8> {
    loop {
        let count = prompt_usize("Number of decks: ")?;
        match u8::try_from(count) {
            Ok(decks) if decks > 0 => return Some(decks),
            _ => println!("Deck count must be between 1 and 255."),
        }
    }
}

fn print_table(view: &TableView<'_>) {
    println!("{}", "*".repeat(20));
    let mut dealer = format_cards(view.dealer_cards);
    for _ in 0..view.dealer_hidden {
        dealer.push_str(" --");
    }
    println!("Dealer: {dealer} (value {})", view.dealer_value);
    println!(
        "Player: {} (value {})",
        format_cards(view.player_cards),
        view.player_value
    );
    println!("{}", "*".repeat(20));
}

fn print_result(result: &RoundResult) {
    let message = match result.outcome {
        Outcome::PlayerBust => "Bust!",
        Outcome::Push => "Push.",
        Outcome::PlayerBlackjack => "You got Blackjack!",
        Outcome::PlayerWin => "You win!",
        Outcome::DealerWin if result.naturals.dealer => "Dealer got blackjack. You lose!",
        Outcome::DealerWin => "You lose!",
    };
    println!("{message} (returned {}, net {})", result.delta, result.net());
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

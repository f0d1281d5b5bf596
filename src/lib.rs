//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals from a shuffled shoe,
//! drives the player and dealer turns, and resolves the round into a chip
//! delta. Keeping a chip balance across rounds is left to the caller; see
//! [`Bankroll`] for a small helper.
//!
//! # Example
//!
//! ```
//! use shoebox::{Bankroll, Decision, Round, RoundOptions, RoundState};
//!
//! let mut bankroll = Bankroll::new(100);
//! let wager = bankroll.place_wager(10).unwrap();
//!
//! let mut round = Round::start(RoundOptions::default(), wager, 42).unwrap();
//! if round.state() == RoundState::PlayerTurn {
//!     round.submit_decision(Decision::Stand).unwrap();
//! }
//!
//! let result = round.result().unwrap();
//! bankroll.settle(&result);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod round;
pub mod shoe;
pub mod value;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{DecisionError, ParseCardError, ShoeError, StartError, WagerError};
pub use hand::Hand;
pub use options::{RoundOptions, RoundingMode};
pub use outcome::{Naturals, Outcome, RoundResult, payout_fits, resolve};
pub use round::{Decision, Round, RoundState, RoundStatus, TableView, Viewer};
pub use shoe::Shoe;

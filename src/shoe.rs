//! The shoe of cards dealt during a round.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered sequence of cards, drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Builds `decks` standard decks and shuffles them with `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `decks` is zero.
    pub fn build<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::InvalidConfiguration);
        }

        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(rng);
        log::trace!("built shoe of {} cards from {decks} deck(s)", cards.len());

        Ok(Self {
            cards: cards.into(),
        })
    }

    /// Builds and shuffles a shoe from a seeded generator.
    ///
    /// The same seed always yields the same card order.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `decks` is zero.
    pub fn shuffled(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build(decks, &mut rng)
    }

    /// Creates a shoe that deals `cards` in the given order.
    #[must_use]
    pub fn stacked<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::ShoeExhausted`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop_front().ok_or(ShoeError::ShoeExhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

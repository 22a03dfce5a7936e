//! The 52-card deck and dealing.
//!
//! Shuffling takes the random source as an argument, so a seeded generator
//! gives a reproducible deal:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stud_core::deck::{Deck, HandSource};
//!
//! let deal = |seed| Deck::shuffled(&mut StdRng::seed_from_u64(seed)).hands();
//! assert_eq!(deal(7), deal(7));
//! ```

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::cards::{Card, Rank, all_cards};
use crate::poker::{HAND_SIZE, Hand};

/// Number of hands dealt per game.
pub const HAND_COUNT: usize = 6;

/// Anything that can supply the hands for one ranking run.
pub trait HandSource {
    /// The hands, in seat order.
    fn hands(&self) -> Vec<Hand>;
}

/// A full deck in a fixed order: top of the deck first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A fresh, unshuffled deck.
    pub fn new() -> Self {
        Deck(all_cards())
    }

    /// A fresh deck shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
        trace!(cards = self.0.len(), "shuffled deck");
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// The deck laid out as one row per suit's worth of cards.
    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.0.chunks(Rank::ALL.len())
    }

    /// Deal [`HAND_COUNT`] hands round-robin from the top: card `i` goes to
    /// hand `i % HAND_COUNT`.
    pub fn deal_hands(&self) -> Vec<Hand> {
        let mut hands = vec![Vec::with_capacity(HAND_SIZE); HAND_COUNT];
        for (i, &card) in self.0.iter().take(HAND_COUNT * HAND_SIZE).enumerate() {
            hands[i % HAND_COUNT].push(card);
        }
        trace!(hands = HAND_COUNT, "dealt hands");
        hands.into_iter().map(Hand::new).collect()
    }

    /// Cards left after [`deal_hands`](Deck::deal_hands).
    pub fn remaining(&self) -> &[Card] {
        &self.0[HAND_COUNT * HAND_SIZE..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl HandSource for Deck {
    fn hands(&self) -> Vec<Hand> {
        self.deal_hands()
    }
}

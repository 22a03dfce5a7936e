//! Five-card hand classification.
//!
//! [`classify`] turns a [`Hand`] into a [`Classification`]: the hand's
//! [`Category`] together with the rank and suit tallies the tie-break
//! comparator reads from.
//!
//! # Examples
//!
//! ```
//! use stud_core::cards::{Card, Rank, Suit};
//! use stud_core::poker::{Category, Hand, classify};
//!
//! let hand = Hand::new(vec![
//!     Card(Rank::Ace, Suit::Spades),
//!     Card(Rank::Two, Suit::Hearts),
//!     Card(Rank::Three, Suit::Clubs),
//!     Card(Rank::Four, Suit::Diamonds),
//!     Card(Rank::Five, Suit::Spades),
//! ]);
//! let classification = classify(&hand).unwrap();
//! assert_eq!(classification.category(), Category::Straight);
//! assert_eq!(classification.straight_high(), Some(Rank::Five));
//! ```

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::cards::{Card, Rank, Suit};

/// Number of cards in a stud hand.
pub const HAND_SIZE: usize = 5;

/// Errors raised by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand did not hold exactly [`HAND_SIZE`] cards.
    #[error("a hand must hold exactly 5 cards, found {found}")]
    ContractViolation { found: usize },
}

/// A player's cards. Order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand(pub Vec<Card>);

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Hand(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand(iter.into_iter().collect())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card:>3}")?;
        }
        Ok(())
    }
}

/// Poker hand categories, strongest first.
///
/// The derived ordering follows the discriminants, so a *smaller* category is
/// a *stronger* hand: `RoyalStraightFlush < HighCard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// 10-J-Q-K-A of one suit.
    RoyalStraightFlush = 1,
    /// Five consecutive ranks of one suit.
    StraightFlush = 2,
    /// Four cards of one rank.
    FourOfAKind = 3,
    /// Three of one rank plus a pair of another.
    FullHouse = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Five consecutive ranks, mixed suits.
    Straight = 6,
    /// Three cards of one rank.
    ThreeOfAKind = 7,
    /// Two different pairs.
    TwoPair = 8,
    /// Two cards of one rank.
    Pair = 9,
    /// Nothing made.
    HighCard = 10,
}

impl Category {
    /// Numeric strength order, 1 (strongest) through 10.
    pub fn order(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::RoyalStraightFlush => "Royal Straight Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "Pair",
            Category::HighCard => "High Card",
        };
        f.pad(name)
    }
}

/// How many cards of each rank a hand holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankFrequency([u8; 15]);

impl RankFrequency {
    fn tally(cards: &[Card]) -> Self {
        let mut counts = [0; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        RankFrequency(counts)
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank.value() as usize]
    }

    /// Ranks present in the hand, highest first.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .into_iter()
            .rev()
            .filter(move |&r| self.count(r) > 0)
    }

    /// Ranks held exactly `n` times, highest first.
    pub fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.ranks().filter(move |&r| self.count(r) == n)
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.ranks().count()
    }

    /// Group sizes, largest first, e.g. `[3, 2]` for a full house.
    fn shape(&self) -> Vec<u8> {
        let mut shape: Vec<u8> = self.ranks().map(|r| self.count(r)).collect();
        shape.sort_by(|a, b| b.cmp(a));
        shape
    }
}

/// How many cards of each suit a hand holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitFrequency([u8; 4]);

impl SuitFrequency {
    fn tally(cards: &[Card]) -> Self {
        let mut counts = [0; 4];
        for card in cards {
            counts[card.suit().index()] += 1;
        }
        SuitFrequency(counts)
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    fn is_flush(&self) -> bool {
        self.0.iter().any(|&n| n as usize == HAND_SIZE)
    }
}

/// The classifier's verdict on a single hand.
///
/// Only [`classify`] builds these; the fields are read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    category: Category,
    rank_frequency: RankFrequency,
    suit_frequency: SuitFrequency,
}

impl Classification {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rank_frequency(&self) -> &RankFrequency {
        &self.rank_frequency
    }

    pub fn suit_frequency(&self) -> &SuitFrequency {
        &self.suit_frequency
    }

    /// Highest unpaired rank. For flushes, straights and high-card hands every
    /// rank is unpaired, so this is also the highest card.
    pub fn kicker(&self) -> Option<Rank> {
        self.rank_frequency.ranks_with(1).next()
    }

    /// Top of the run for straight categories, counting the wheel as 5-high.
    pub fn straight_high(&self) -> Option<Rank> {
        match self.category {
            Category::RoyalStraightFlush | Category::StraightFlush | Category::Straight => {
                if is_wheel(&self.rank_frequency) {
                    Some(Rank::Five)
                } else {
                    self.rank_frequency.ranks().next()
                }
            }
            _ => None,
        }
    }

    pub fn quad_rank(&self) -> Option<Rank> {
        self.rank_frequency.ranks_with(4).next()
    }

    pub fn set_rank(&self) -> Option<Rank> {
        self.rank_frequency.ranks_with(3).next()
    }

    /// Paired ranks, highest first.
    pub fn pair_ranks(&self) -> Vec<Rank> {
        self.rank_frequency.ranks_with(2).collect()
    }
}

/// Classify a five-card hand.
///
/// Returns [`HandError::ContractViolation`] if the hand does not hold exactly
/// five cards. Duplicate cards are not checked here.
pub fn classify(hand: &Hand) -> Result<Classification, HandError> {
    let cards = hand.cards();
    if cards.len() != HAND_SIZE {
        return Err(HandError::ContractViolation { found: cards.len() });
    }

    let rank_frequency = RankFrequency::tally(cards);
    let suit_frequency = SuitFrequency::tally(cards);
    let category = categorize(&rank_frequency, &suit_frequency);
    debug!(%hand, %category, "classified hand");

    Ok(Classification {
        category,
        rank_frequency,
        suit_frequency,
    })
}

/// First matching arm wins; arms run from strongest to weakest.
fn categorize(ranks: &RankFrequency, suits: &SuitFrequency) -> Category {
    let is_flush = suits.is_flush();
    let is_straight = is_straight(ranks);

    match (is_flush, is_straight, &ranks.shape()[..]) {
        (true, true, _) if is_royal(ranks) => Category::RoyalStraightFlush,
        (true, true, _) => Category::StraightFlush,
        (_, _, [4, 1]) => Category::FourOfAKind,
        (_, _, [3, 2]) => Category::FullHouse,
        (true, false, _) => Category::Flush,
        (false, true, _) => Category::Straight,
        (_, _, [3, 1, 1]) => Category::ThreeOfAKind,
        (_, _, [2, 2, 1]) => Category::TwoPair,
        (_, _, [2, 1, 1, 1]) => Category::Pair,
        _ => Category::HighCard,
    }
}

/// Five distinct consecutive ranks, or the wheel.
fn is_straight(ranks: &RankFrequency) -> bool {
    if ranks.distinct() != HAND_SIZE {
        return false;
    }
    let mut present = ranks.ranks();
    match (present.next(), present.last()) {
        (Some(high), Some(low)) => high.value() - low.value() == 4 || is_wheel(ranks),
        _ => false,
    }
}

/// Exactly A-2-3-4-5.
fn is_wheel(ranks: &RankFrequency) -> bool {
    ranks.distinct() == HAND_SIZE
        && [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
            .into_iter()
            .all(|r| ranks.count(r) == 1)
}

/// Exactly 10-J-Q-K-A.
fn is_royal(ranks: &RankFrequency) -> bool {
    ranks.distinct() == HAND_SIZE
        && [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .into_iter()
            .all(|r| ranks.count(r) == 1)
}

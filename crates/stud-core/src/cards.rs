//! Playing card model.
//!
//! A [`Card`] is a plain `Copy` value pairing a [`Rank`] (2-14, Ace high) with
//! a [`Suit`]. Cards render in the two-or-three character token form used by
//! test decks, e.g. `AS`, `7D`, `10H`.
//!
//! # Examples
//!
//! ```
//! use stud_core::cards::{Card, Rank, Suit};
//!
//! let card = Card(Rank::Ten, Suit::Hearts);
//! assert_eq!(card.to_string(), "10H");
//! assert_eq!(format!("{card:>3}|{:>3}", Card(Rank::Ace, Suit::Spades)), "10H| AS");
//! ```

use std::fmt;

/// Represents a card suit (Diamonds, Clubs, Hearts, Spades).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Returns the suit as its upper-case token letter
    pub fn letter(&self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Parses an upper-case suit letter. Lower-case letters are rejected.
    pub fn from_letter(letter: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.letter() == letter)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Represents a card rank (2-14, where 14 = Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, lowest first
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 through 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.value() == value)
    }

    /// Returns the rank as its face token
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(pub Rank, pub Suit);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so callers can align with `{:>3}`.
        f.pad(&format!("{}{}", self.0.symbol(), self.1.letter()))
    }
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.0
    }

    pub fn suit(&self) -> Suit {
        self.1
    }
}

/// Every card of a standard deck, suit by suit in [`Suit::ALL`] order.
pub fn all_cards() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card(rank, suit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        assert_eq!(Card(Rank::Ace, Suit::Spades).to_string(), "AS");
        assert_eq!(Card(Rank::Ten, Suit::Hearts).to_string(), "10H");
        assert_eq!(format!("{:>3}", Card(Rank::Two, Suit::Diamonds)), " 2D");
        assert_eq!(format!("{:>3}", Card(Rank::Ten, Suit::Clubs)), "10C");
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(13), Some(Rank::King));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(Rank::from_symbol("10"), Some(Rank::Ten));
        assert_eq!(Rank::from_symbol("Q"), Some(Rank::Queen));
        assert_eq!(Rank::from_symbol("T"), None);
        assert_eq!(Rank::from_symbol("1"), None);
        assert_eq!(Suit::from_letter('H'), Some(Suit::Hearts));
        assert_eq!(Suit::from_letter('h'), None);
    }

    #[test]
    fn test_all_cards() {
        let cards = all_cards();
        assert_eq!(cards.len(), 52);

        for rank in Rank::ALL {
            let count = cards.iter().filter(|c| c.rank() == rank).count();
            assert_eq!(count, 4, "Should have 4 cards of {:?}", rank);
        }

        for suit in Suit::ALL {
            let count = cards.iter().filter(|c| c.suit() == suit).count();
            assert_eq!(count, 13, "Should have 13 cards of {:?}", suit);
        }

        assert_eq!(cards[0], Card(Rank::Two, Suit::Diamonds));
        assert_eq!(cards[51], Card(Rank::Ace, Suit::Spades));
    }
}

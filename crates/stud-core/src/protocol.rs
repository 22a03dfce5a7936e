//! Serializable ranking reports for machine-readable output.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::cards::Card;
use crate::compare::compare;
use crate::ranking::RankedHand;

/// Serializable card representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardInfo {
    pub rank: u8, // 2-14 (14 = Ace)
    pub suit: char, // D, C, H or S
}

impl From<Card> for CardInfo {
    fn from(card: Card) -> Self {
        CardInfo {
            rank: card.rank().value(),
            suit: card.suit().letter(),
        }
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", face, self.suit)
    }
}

/// One line of the winning order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandReport {
    /// 1-based finishing position.
    pub place: usize,
    /// 1-based seat the hand was dealt to.
    pub seat: usize,
    pub cards: Vec<CardInfo>,
    /// Category name, e.g. "Full House".
    pub category: String,
    /// Category strength, 1 (Royal Straight Flush) to 10 (High Card).
    pub order: u8,
    /// True when this hand ties the one placed just above it.
    pub tied_with_previous: bool,
}

/// The full winning order of a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankingReport {
    pub hands: Vec<HandReport>,
}

impl RankingReport {
    pub fn new(ranked: &[RankedHand]) -> Self {
        let hands = ranked
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let category = r.classification.category();
                let tied_with_previous = i
                    .checked_sub(1)
                    .map(|prev| compare(&ranked[prev].classification, &r.classification))
                    == Some(Ordering::Equal);
                HandReport {
                    place: i + 1,
                    seat: r.seat + 1,
                    cards: r.hand.cards().iter().copied().map(CardInfo::from).collect(),
                    category: category.to_string(),
                    order: category.order(),
                    tied_with_previous,
                }
            })
            .collect();
        RankingReport { hands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::poker::Hand;
    use crate::ranking::rank;

    use Rank::*;
    use Suit::*;

    fn hand(cards: &[(Rank, Suit)]) -> Hand {
        cards.iter().map(|&(r, s)| Card(r, s)).collect()
    }

    #[test]
    fn card_info_display() {
        assert_eq!(CardInfo::from(Card(Ten, Hearts)).to_string(), "10H");
        assert_eq!(CardInfo::from(Card(Ace, Spades)).to_string(), "AS");
        assert_eq!(CardInfo::from(Card(Four, Clubs)).to_string(), "4C");
    }

    #[test]
    fn report_places_and_ties() {
        let ranked = rank(vec![
            hand(&[(Two, Spades), (Five, Hearts), (Nine, Clubs), (Jack, Diamonds), (King, Spades)]),
            hand(&[(Six, Spades), (Six, Hearts), (Six, Clubs), (Six, Diamonds), (Ace, Spades)]),
            hand(&[(Two, Hearts), (Five, Clubs), (Nine, Diamonds), (Jack, Hearts), (King, Clubs)]),
        ])
        .unwrap();
        let report = RankingReport::new(&ranked);

        let summary: Vec<(usize, usize, &str, bool)> = report
            .hands
            .iter()
            .map(|h| (h.place, h.seat, h.category.as_str(), h.tied_with_previous))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, 2, "Four of a Kind", false),
                (2, 1, "High Card", false),
                (3, 3, "High Card", true),
            ]
        );
        assert_eq!(report.hands[0].order, 3);
    }

    #[test]
    fn report_serializes_to_json() {
        let ranked = rank(vec![hand(&[
            (Ace, Spades),
            (King, Spades),
            (Queen, Spades),
            (Jack, Spades),
            (Ten, Spades),
        ])])
        .unwrap();
        let json = serde_json::to_value(RankingReport::new(&ranked)).unwrap();
        assert_eq!(json["hands"][0]["category"], "Royal Straight Flush");
        assert_eq!(json["hands"][0]["cards"][0]["rank"], 14);
        assert_eq!(json["hands"][0]["cards"][0]["suit"], "S");

        let back: RankingReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, RankingReport::new(&ranked));
    }
}

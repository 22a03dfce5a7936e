//! Ranking a table of hands, strongest first.

use tracing::debug;

use crate::compare::compare;
use crate::deck::HandSource;
use crate::poker::{Classification, Hand, HandError, classify};

/// A hand together with its classification and the seat it was dealt to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHand {
    /// Zero-based position of the hand in the input.
    pub seat: usize,
    pub hand: Hand,
    pub classification: Classification,
}

/// Classify every hand and sort strongest first.
///
/// The sort is stable: hands that [`compare`] as equal keep their input
/// order. Fails on the first hand that is not five cards.
pub fn rank(hands: Vec<Hand>) -> Result<Vec<RankedHand>, HandError> {
    let mut ranked = hands
        .into_iter()
        .enumerate()
        .map(|(seat, hand)| {
            let classification = classify(&hand)?;
            Ok(RankedHand {
                seat,
                hand,
                classification,
            })
        })
        .collect::<Result<Vec<_>, HandError>>()?;

    ranked.sort_by(|a, b| compare(&a.classification, &b.classification));
    debug!(hands = ranked.len(), "ranked hands");
    Ok(ranked)
}

/// Rank whatever hands `source` supplies.
pub fn rank_source<S: HandSource + ?Sized>(source: &S) -> Result<Vec<RankedHand>, HandError> {
    rank(source.hands())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::poker::Category;

    use Rank::*;
    use Suit::*;

    fn hand(cards: &[(Rank, Suit)]) -> Hand {
        cards.iter().map(|&(r, s)| Card(r, s)).collect()
    }

    fn king_high() -> Hand {
        hand(&[
            (King, Spades),
            (Nine, Hearts),
            (Seven, Diamonds),
            (Four, Clubs),
            (Two, Spades),
        ])
    }

    fn pair_of_twos() -> Hand {
        hand(&[
            (Two, Hearts),
            (Two, Diamonds),
            (Ace, Clubs),
            (Ten, Hearts),
            (Six, Spades),
        ])
    }

    fn quad_sevens() -> Hand {
        hand(&[
            (Seven, Spades),
            (Seven, Hearts),
            (Seven, Diamonds),
            (Seven, Clubs),
            (Three, Spades),
        ])
    }

    #[test]
    fn test_rank_orders_by_category() {
        let ranked = rank(vec![king_high(), pair_of_twos(), quad_sevens()]).unwrap();
        let categories: Vec<Category> = ranked
            .iter()
            .map(|r| r.classification.category())
            .collect();
        assert_eq!(
            categories,
            vec![Category::FourOfAKind, Category::Pair, Category::HighCard]
        );
        let seats: Vec<usize> = ranked.iter().map(|r| r.seat).collect();
        assert_eq!(seats, vec![2, 1, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let first = hand(&[
            (Queen, Spades),
            (Queen, Hearts),
            (Eight, Diamonds),
            (Five, Clubs),
            (Three, Spades),
        ]);
        let second = hand(&[
            (Queen, Diamonds),
            (Queen, Clubs),
            (Eight, Spades),
            (Four, Hearts),
            (Two, Clubs),
        ]);
        let ranked = rank(vec![first.clone(), quad_sevens(), second.clone()]).unwrap();
        assert_eq!(ranked[0].seat, 1);
        assert_eq!(ranked[1].hand, first);
        assert_eq!(ranked[2].hand, second);

        let reversed = rank(vec![second.clone(), first.clone()]).unwrap();
        assert_eq!(reversed[0].hand, second);
        assert_eq!(reversed[1].hand, first);
    }

    #[test]
    fn test_single_hand() {
        let ranked = rank(vec![pair_of_twos()]).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].seat, 0);
    }

    #[test]
    fn test_malformed_hand_fails_whole_ranking() {
        let short = hand(&[(Ace, Spades), (Ace, Hearts)]);
        assert_eq!(
            rank(vec![king_high(), short]),
            Err(HandError::ContractViolation { found: 2 })
        );
    }

    #[test]
    fn test_rank_source() {
        struct Fixed(Vec<Hand>);

        impl HandSource for Fixed {
            fn hands(&self) -> Vec<Hand> {
                self.0.clone()
            }
        }

        let ranked = rank_source(&Fixed(vec![pair_of_twos(), quad_sevens()])).unwrap();
        assert_eq!(ranked[0].classification.category(), Category::FourOfAKind);
    }
}

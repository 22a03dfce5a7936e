//! Tie-break comparison between classified hands.

use std::cmp::Ordering;

use crate::cards::Rank;
use crate::poker::{Category, Classification};

/// Order two classified hands by strength.
///
/// `Less` means `a` is the stronger hand, so sorting ascending with this
/// function puts the winner first. Hands with the same category are split by
/// the ranks that matter for that category; anything past those ranks is a
/// true tie and yields `Equal`.
pub fn compare(a: &Classification, b: &Classification) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| tie_break_key(b).cmp(&tie_break_key(a)))
}

/// Ranks compared, most significant first, once categories match.
fn tie_break_key(c: &Classification) -> Vec<Rank> {
    match c.category() {
        Category::RoyalStraightFlush => Vec::new(),
        Category::StraightFlush | Category::Straight => c.straight_high().into_iter().collect(),
        Category::Flush | Category::HighCard => c.kicker().into_iter().collect(),
        Category::FourOfAKind => c.quad_rank().into_iter().chain(c.kicker()).collect(),
        Category::FullHouse | Category::ThreeOfAKind => c.set_rank().into_iter().collect(),
        // Pairs come highest first, then the best unpaired card.
        Category::TwoPair | Category::Pair => {
            c.pair_ranks().into_iter().chain(c.kicker()).collect()
        }
    }
}

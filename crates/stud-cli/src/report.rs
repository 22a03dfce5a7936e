//! Console report sections.
//!
//! Each writer prints one section followed by a blank line. Cards are
//! right-aligned to three characters so `10H` and ` AS` line up.

use std::io::{self, Write};

use stud_core::cards::Card;
use stud_core::deck::Deck;
use stud_core::poker::Hand;
use stud_core::ranking::RankedHand;
use stud_core::test_deck::TestDeck;

pub const BANNER: &str = "*** P O K E R   H A N D   A N A L Y Z E R ***";

fn write_cards(out: &mut impl Write, cards: &[Card]) -> io::Result<()> {
    let line: Vec<String> = cards.iter().map(|c| format!("{c:>3}")).collect();
    writeln!(out, "{}", line.join(" "))
}

pub fn write_shuffled_deck(out: &mut impl Write, deck: &Deck) -> io::Result<()> {
    writeln!(out, "*** Shuffled 52 card deck:")?;
    for row in deck.rows() {
        write_cards(out, row)?;
    }
    writeln!(out)
}

/// Echo a test deck's tokens exactly as the file had them.
pub fn write_test_rows(out: &mut impl Write, deck: &TestDeck) -> io::Result<()> {
    for row in deck.rows() {
        writeln!(out, "{}", row.join(","))?;
    }
    writeln!(out)
}

pub fn write_hands(out: &mut impl Write, hands: &[Hand]) -> io::Result<()> {
    writeln!(out, "*** Here are the six hands...")?;
    for hand in hands {
        writeln!(out, "{hand}")?;
    }
    writeln!(out)
}

pub fn write_remaining(out: &mut impl Write, cards: &[Card]) -> io::Result<()> {
    writeln!(out, "*** Here is what remains in the deck...")?;
    write_cards(out, cards)?;
    writeln!(out)
}

pub fn write_winning_order(out: &mut impl Write, ranked: &[RankedHand]) -> io::Result<()> {
    writeln!(out, "--- WINNING HAND ORDER ---")?;
    for r in ranked {
        writeln!(out, "{} - {}", r.hand, r.classification.category())?;
    }
    writeln!(out)
}

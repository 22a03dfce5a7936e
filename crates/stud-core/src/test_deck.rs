//! Test decks: hands read from a file instead of dealt from a shuffle.
//!
//! A test deck is six lines of five comma-separated card tokens:
//!
//! ```text
//!  AS, KS, QS, JS,10S
//!  2H, 2D, 9C, 4S, 7H
//! ...
//! ```
//!
//! A token is a face (`2`-`9`, `10`, `J`, `Q`, `K`, `A`) followed by an
//! upper-case suit letter (`D`, `C`, `H`, `S`). Single-character faces may
//! carry one leading space so that every token is three characters wide.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::cards::{Card, Rank, Suit};
use crate::deck::{HAND_COUNT, HandSource};
use crate::poker::{HAND_SIZE, Hand};

/// Errors found while reading a test deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("*** ERROR - COULD NOT OPEN FILE ***\n*** FILE: {} ***", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("*** ERROR - DUPLICATE CARD FOUND IN DECK ***\n*** DUPLICATE: {0} ***")]
    DuplicateCard(String),

    #[error("*** ERROR - SUITS MUST BE UPPERCASE ***\n*** INVALID SUIT: {0} ***")]
    LowercaseSuit(String),

    #[error("*** ERROR - CARDS MUST BE 2 OR 3 CHARACTERS LONG ***\n*** INVALID CARD LENGTH: {0} ***")]
    InvalidLength(String),

    #[error("*** ERROR - UNKNOWN CARD FACE ***\n*** INVALID CARD: {0} ***")]
    InvalidFace(String),

    #[error("*** ERROR - UNKNOWN SUIT ***\n*** INVALID SUIT: {0} ***")]
    InvalidSuit(String),

    /// The file did not hold exactly [`HAND_COUNT`] hands.
    #[error("*** ERROR - TEST DECK MUST HOLD 6 HANDS ***\n*** HANDS FOUND: {found} ***")]
    RowCount { found: usize },

    /// Hand `row` (1-based) did not hold exactly [`HAND_SIZE`] cards.
    #[error("*** ERROR - EACH HAND MUST HOLD 5 CARDS ***\n*** HAND {row} HAS {found} ***")]
    ColumnCount { row: usize, found: usize },
}

/// Parse one card token such as `" AS"`, `"AS"` or `"10H"`.
pub fn parse_card(token: &str) -> Result<Card, DeckError> {
    let trimmed = token.trim_end();
    let body = trimmed.strip_prefix(' ').unwrap_or(trimmed);
    let shown = || trimmed.trim_start().to_string();

    if !(2..=3).contains(&trimmed.chars().count()) || body.chars().count() < 2 {
        return Err(DeckError::InvalidLength(shown()));
    }

    let mut chars = body.chars();
    let Some(letter) = chars.next_back() else {
        return Err(DeckError::InvalidLength(shown()));
    };
    let face = chars.as_str();

    if letter.is_lowercase() {
        return Err(DeckError::LowercaseSuit(shown()));
    }
    let suit = Suit::from_letter(letter).ok_or_else(|| DeckError::InvalidSuit(shown()))?;
    let rank = Rank::from_symbol(face).ok_or_else(|| DeckError::InvalidFace(shown()))?;

    Ok(Card(rank, suit))
}

/// Six validated hands read from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDeck {
    rows: Vec<Vec<String>>,
    hands: Vec<Hand>,
}

impl TestDeck {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DeckError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Validate a whole deck: row and column counts, every token, and no card
    /// appearing twice anywhere in the deck.
    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.len() != HAND_COUNT {
            return Err(DeckError::RowCount { found: lines.len() });
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(HAND_COUNT);
        let mut hands = Vec::with_capacity(HAND_COUNT);

        for (i, line) in lines.into_iter().enumerate() {
            let tokens: Vec<&str> = line.split(',').collect();
            if tokens.len() != HAND_SIZE {
                return Err(DeckError::ColumnCount {
                    row: i + 1,
                    found: tokens.len(),
                });
            }

            let mut cards = Vec::with_capacity(HAND_SIZE);
            for token in &tokens {
                let card = parse_card(token)?;
                if !seen.insert(card) {
                    return Err(DeckError::DuplicateCard(token.trim().to_string()));
                }
                cards.push(card);
            }

            rows.push(tokens.into_iter().map(str::to_string).collect());
            hands.push(Hand::new(cards));
        }

        debug!(hands = hands.len(), "parsed test deck");
        Ok(TestDeck { rows, hands })
    }

    /// The tokens exactly as they appeared in the file, one row per hand.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl HandSource for TestDeck {
    fn hands(&self) -> Vec<Hand> {
        self.hands.clone()
    }
}

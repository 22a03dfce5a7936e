//! Five-card stud hand analysis.
//!
//! Deal six five-card hands (from a shuffled deck or a test-deck file),
//! classify each one, and order them by poker strength with full
//! tie-breaking.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stud_core::deck::Deck;
//! use stud_core::ranking::rank_source;
//!
//! let deck = Deck::shuffled(&mut StdRng::seed_from_u64(1));
//! let ranked = rank_source(&deck).unwrap();
//! assert_eq!(ranked.len(), 6);
//! ```

pub mod cards;
pub mod compare;
pub mod deck;
pub mod poker;
pub mod protocol;
pub mod ranking;
pub mod test_deck;

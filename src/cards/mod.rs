//! Cards, the standard catalog and the shared deck.
//!
//! - `Card`: immutable (suit, rank, effect) value
//! - `STANDARD_CARDS`: the 80-card base catalog
//! - `Deck`: draw, discard and out-of-play piles with reshuffle-on-empty

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::{Card, EffectKind, Rank, Suit, Weapon};
pub use catalog::{standard_deck, CATALOG_SIZE, STANDARD_CARDS};
pub use deck::Deck;

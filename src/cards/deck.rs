//! Shared draw pile, discard pile and out-of-play pile.
//!
//! The top of each pile is the end of its `Vec`. Drawing from an empty draw
//! pile first turns the discard pile over into a freshly shuffled draw pile.
//! Cards from an eliminated participant's hand leave the game through
//! `remove_from_play` so that the total card count stays observable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::Card;
use super::catalog::standard_deck;
use crate::core::GameRng;

/// The shared deck.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    out_of_play: Vec<Card>,
    reshuffles: u32,
}

impl Deck {
    /// Create a deck whose draw pile is `cards` as given (last card on top).
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self::from_piles(cards, Vec::new())
    }

    /// Create a deck with explicit draw and discard piles.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile,
            out_of_play: Vec::new(),
            reshuffles: 0,
        }
    }

    /// The standard catalog, shuffled.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut deck = Self::new(standard_deck());
        deck.shuffle(rng);
        deck
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Draw the top card.
    ///
    /// An empty draw pile is first refilled from the shuffled discard pile.
    /// Returns `None` only when both piles are empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return None;
            }
            std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
            rng.shuffle(&mut self.draw_pile);
            self.reshuffles += 1;
            debug!(cards = self.draw_pile.len(), "reshuffled discard pile into draw pile");
        }
        self.draw_pile.pop()
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Take cards out of the game for good.
    pub fn remove_from_play(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.out_of_play.extend(cards);
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards removed from play.
    #[must_use]
    pub fn out_of_play_len(&self) -> usize {
        self.out_of_play.len()
    }

    /// The discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// The top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// How many times the discard pile has been turned over.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Cards held by the deck across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.out_of_play.len()
    }
}

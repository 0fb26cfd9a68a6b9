//! The standard 80-card catalog.
//!
//! Suits and ranks follow the printed base-game deck. Suit and rank only
//! matter for hazard draw-checks; everything else keys off the effect.

use super::card::{Card, EffectKind as E, Rank, Suit, Weapon as W};
use Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use Suit::{Clubs, Diamonds, Hearts, Spades};

/// Number of cards in the standard catalog.
pub const CATALOG_SIZE: usize = 80;

const fn c(suit: Suit, rank: Rank, effect: E) -> Card {
    Card::new(suit, rank, effect)
}

/// Every card of the standard deck, exactly once.
pub const STANDARD_CARDS: [Card; CATALOG_SIZE] = [
    // Bang!
    c(Spades, Two, E::Bang),
    c(Spades, Three, E::Bang),
    c(Spades, Four, E::Bang),
    c(Spades, Five, E::Bang),
    c(Spades, Six, E::Bang),
    c(Spades, Seven, E::Bang),
    c(Spades, Eight, E::Bang),
    c(Spades, Nine, E::Bang),
    c(Spades, Ten, E::Bang),
    c(Spades, Jack, E::Bang),
    c(Clubs, Two, E::Bang),
    c(Clubs, Three, E::Bang),
    c(Clubs, Four, E::Bang),
    c(Clubs, Five, E::Bang),
    c(Clubs, Six, E::Bang),
    c(Clubs, Seven, E::Bang),
    c(Clubs, Eight, E::Bang),
    c(Clubs, Nine, E::Bang),
    c(Clubs, Ten, E::Bang),
    c(Clubs, Jack, E::Bang),
    c(Clubs, Queen, E::Bang),
    c(Clubs, King, E::Bang),
    c(Hearts, Five, E::Bang),
    c(Hearts, Six, E::Bang),
    c(Hearts, Seven, E::Bang),
    // Missed!
    c(Spades, Ace, E::Missed),
    c(Hearts, Eight, E::Missed),
    c(Hearts, Nine, E::Missed),
    c(Hearts, Ten, E::Missed),
    c(Hearts, Jack, E::Missed),
    c(Hearts, Queen, E::Missed),
    c(Diamonds, Two, E::Missed),
    c(Diamonds, Three, E::Missed),
    c(Diamonds, Four, E::Missed),
    c(Diamonds, Five, E::Missed),
    c(Diamonds, Six, E::Missed),
    c(Diamonds, Seven, E::Missed),
    // Beer
    c(Hearts, Two, E::Beer),
    c(Hearts, Three, E::Beer),
    c(Hearts, Four, E::Beer),
    c(Hearts, Ace, E::Beer),
    c(Diamonds, Eight, E::Beer),
    c(Diamonds, Nine, E::Beer),
    // Saloon
    c(Hearts, King, E::Saloon),
    // Stagecoach
    c(Diamonds, Ten, E::Stagecoach),
    c(Diamonds, Jack, E::Stagecoach),
    // Wells Fargo
    c(Hearts, Ten, E::WellsFargo),
    // Cat Balou
    c(Diamonds, Queen, E::CatBalou),
    c(Diamonds, King, E::CatBalou),
    c(Hearts, Queen, E::CatBalou),
    c(Hearts, King, E::CatBalou),
    // Panic!
    c(Hearts, Nine, E::Panic),
    c(Hearts, Jack, E::Panic),
    c(Diamonds, Four, E::Panic),
    c(Diamonds, Five, E::Panic),
    // General Store
    c(Clubs, Nine, E::GeneralStore),
    c(Clubs, Queen, E::GeneralStore),
    // Indians!
    c(Diamonds, Ten, E::Indians),
    c(Diamonds, Jack, E::Indians),
    // Duel
    c(Spades, Eight, E::Duel),
    c(Spades, Nine, E::Duel),
    c(Spades, Ten, E::Duel),
    // Gatling
    c(Hearts, Seven, E::Gatling),
    // Jail
    c(Spades, Four, E::Jail),
    c(Spades, Five, E::Jail),
    c(Spades, Six, E::Jail),
    // Dynamite
    c(Spades, Two, E::Dynamite),
    // Volcanic
    c(Clubs, Four, E::Weapon(W::Volcanic)),
    c(Clubs, Five, E::Weapon(W::Volcanic)),
    // Schofield
    c(Clubs, Eight, E::Weapon(W::Schofield)),
    c(Clubs, Jack, E::Weapon(W::Schofield)),
    c(Diamonds, Ace, E::Weapon(W::Schofield)),
    // Remington
    c(Clubs, Seven, E::Weapon(W::Remington)),
    // Rev. Carbine
    c(Clubs, Two, E::Weapon(W::RevCarbine)),
    // Winchester
    c(Clubs, Three, E::Weapon(W::Winchester)),
    // Mustang
    c(Hearts, Eight, E::Mustang),
    c(Hearts, Nine, E::Mustang),
    // Scope
    c(Clubs, Ace, E::Scope),
    // Barrel
    c(Spades, Queen, E::Barrel),
    c(Spades, King, E::Barrel),
];

/// A fresh, unshuffled copy of the standard deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    STANDARD_CARDS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(effect: E) -> usize {
        STANDARD_CARDS.iter().filter(|c| c.effect == effect).count()
    }

    #[test]
    fn test_catalog_composition() {
        assert_eq!(standard_deck().len(), CATALOG_SIZE);
        assert_eq!(count(E::Bang), 25);
        assert_eq!(count(E::Missed), 12);
        assert_eq!(count(E::Beer), 6);
        assert_eq!(count(E::Jail), 3);
        assert_eq!(count(E::Dynamite), 1);
        assert_eq!(count(E::Weapon(W::Volcanic)), 2);
        assert_eq!(count(E::Weapon(W::Schofield)), 3);
        assert_eq!(count(E::Mustang), 2);
        assert_eq!(count(E::Scope), 1);
        assert_eq!(count(E::Barrel), 2);
    }

    #[test]
    fn test_catalog_has_no_default_weapon_card() {
        assert_eq!(count(E::Weapon(W::Colt45)), 0);
    }

    #[test]
    fn test_dynamite_card_would_detonate_itself() {
        let dynamite = STANDARD_CARDS
            .iter()
            .find(|c| c.effect == E::Dynamite)
            .unwrap();
        assert!(dynamite.detonates_dynamite());
    }
}

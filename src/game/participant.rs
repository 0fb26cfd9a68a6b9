//! Participants: role, health, hand, equipment and hazard status.
//!
//! Health and elimination are private so they can only change through the
//! damage helper in `effects::resolver`:
//! - health is never negative and reaching 0 eliminates
//! - elimination never reverts
//! - an eliminated participant holds no cards

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::characters::CharacterTraits;
use crate::cards::{Card, Weapon};
use crate::core::SeatId;

/// Hidden role, fixed for the whole episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Sheriff,
    Deputy,
    Outlaw,
    Renegade,
}

impl Role {
    /// The required role multiset for five seats.
    pub const FIVE_SEAT_LAYOUT: [Role; 5] = [
        Role::Sheriff,
        Role::Renegade,
        Role::Outlaw,
        Role::Outlaw,
        Role::Deputy,
    ];

    /// Upper-case label used in event records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Sheriff => "SHERIFF",
            Role::Deputy => "DEPUTY",
            Role::Outlaw => "OUTLAW",
            Role::Renegade => "RENEGADE",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Sheriff => "Sheriff",
            Role::Deputy => "Deputy",
            Role::Outlaw => "Outlaw",
            Role::Renegade => "Renegade",
        };
        write!(f, "{}", name)
    }
}

/// Distance modifiers.
///
/// `mustang` adds to the distance others measure to this participant,
/// `scope` subtracts from the distance this participant measures to others.
/// `barrel` is tracked but has no defensive effect in the modelled rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub mustang: u32,
    pub scope: u32,
    pub barrel: u32,
}

/// Which equipment points came from played cards (at most one of each).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedCards {
    pub mustang: bool,
    pub scope: bool,
    pub barrel: bool,
}

/// Persistent statuses resolved by draw-checks at the start of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazards {
    pub jailed: bool,
    pub dynamite: bool,
}

/// Health change produced by one damage application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageTaken {
    pub health_before: u32,
    pub health_after: u32,
    /// Set when this damage eliminated the participant. Holds the emptied hand.
    pub eliminated_hand: Option<Vec<Card>>,
}

/// A seated participant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub seat: SeatId,
    pub role: Role,
    pub character: String,
    health: u32,
    max_health: u32,
    hand: SmallVec<[Card; 8]>,
    eliminated: bool,
    pub weapon: Weapon,
    pub equipment: Equipment,
    pub equipped_cards: EquippedCards,
    pub hazards: Hazards,
    /// Character trait lifting the one-offensive-card-per-turn limit.
    pub unlimited_offense: bool,
    offensive_uses: u32,
}

impl Participant {
    /// Seat a participant with the given role and character.
    ///
    /// The Sheriff gets one extra point of max health. Health starts full.
    #[must_use]
    pub fn new(seat: SeatId, role: Role, traits: &CharacterTraits) -> Self {
        let max_health = traits.base_health + u32::from(role == Role::Sheriff);
        assert!(max_health > 0, "Character {} has no health", traits.name);

        Self {
            seat,
            role,
            character: traits.name.clone(),
            health: max_health,
            max_health,
            hand: SmallVec::new(),
            eliminated: false,
            weapon: Weapon::default(),
            equipment: Equipment {
                mustang: traits.mustang,
                scope: traits.scope,
                barrel: traits.barrel,
            },
            equipped_cards: EquippedCards::default(),
            hazards: Hazards::default(),
            unlimited_offense: traits.unlimited_offense,
            offensive_uses: 0,
        }
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.eliminated
    }

    // === Hand ===

    /// Cards in hand. Order carries no meaning.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Whether a card equal to `card` is in hand.
    #[must_use]
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Add a card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        assert!(!self.eliminated, "{} is eliminated and cannot take cards", self.seat);
        self.hand.push(card);
    }

    /// Remove one card equal to `card` from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, card: &Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove and return the cards at `indices` (distinct, any order).
    pub fn take_from_hand(&mut self, mut indices: Vec<usize>) -> Vec<Card> {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        indices.into_iter().map(|i| self.hand.remove(i)).collect()
    }

    // === Health ===

    /// Reduce health, clamping at 0. Reaching 0 eliminates and empties the hand.
    pub(crate) fn take_damage(&mut self, amount: u32) -> DamageTaken {
        assert!(!self.eliminated, "{} is already eliminated", self.seat);

        let health_before = self.health;
        self.health = self.health.saturating_sub(amount);

        let eliminated_hand = if self.health == 0 {
            self.eliminated = true;
            Some(self.hand.drain(..).collect())
        } else {
            None
        };

        DamageTaken {
            health_before,
            health_after: self.health,
            eliminated_hand,
        }
    }

    /// Restore health up to max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        assert!(!self.eliminated, "{} is eliminated and cannot heal", self.seat);
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    // === Per-turn counters ===

    /// Whether another offensive card may be played this turn.
    #[must_use]
    pub fn can_use_offense(&self) -> bool {
        self.offensive_uses == 0 || self.weapon.is_unlimited() || self.unlimited_offense
    }

    /// Offensive cards resolved this turn.
    #[must_use]
    pub fn offensive_uses(&self) -> u32 {
        self.offensive_uses
    }

    pub(crate) fn record_offense(&mut self) {
        self.offensive_uses += 1;
    }

    pub(crate) fn reset_turn_counters(&mut self) {
        self.offensive_uses = 0;
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}), HP {}/{}",
            self.seat, self.character, self.role, self.health, self.max_health
        )
    }
}

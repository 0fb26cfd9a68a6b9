//! Event records emitted by the turn engine and effect resolver.
//!
//! One flat record type covers every action kind; fields that do not apply
//! to a kind are left empty. Events caused by the environment (exploding
//! dynamite) carry no acting seat.

use serde::{Deserialize, Serialize};

use crate::core::SeatId;
use crate::game::{Participant, Role};
use crate::rules::ParticipantResult;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A card was drawn into a hand.
    Draw,
    /// The discard pile was turned over into the draw pile.
    Reshuffle,
    /// A card was flipped for a hazard check and discarded.
    DrawCheck,
    /// A card left the hand through play.
    PlayCard,
    /// An offensive card resolved against a target.
    Bang,
    /// Health was reduced.
    Damage,
    /// A participant was eliminated.
    Eliminate,
    DynamiteExplode,
    DynamitePass,
    JailEscape,
    JailSkip,
    /// A card was discarded in the discard phase.
    Discard,
    TurnEnd,
    /// Final result for one participant.
    GameOver,
    Equip,
    Heal,
    DynamitePlaced,
    Jailed,
}

/// A single event record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub game_id: u64,
    pub turn: u32,
    /// Acting seat. `None` for environment-caused events.
    pub actor: Option<SeatId>,
    pub role: Option<Role>,
    pub character: Option<String>,
    pub action: ActionKind,
    pub card: Option<String>,
    pub target: Option<SeatId>,
    pub health_before: Option<u32>,
    pub health_after: Option<u32>,
    pub damage: Option<u32>,
    pub hand_start: Option<usize>,
    pub hand_end: Option<usize>,
    /// Set when a participant acted against someone else.
    pub aggressive: bool,
    pub result: Option<ParticipantResult>,
    pub turns_survived: Option<u32>,
}

impl GameEvent {
    /// Create an event with no actor.
    pub fn new(game_id: u64, turn: u32, action: ActionKind) -> Self {
        Self {
            game_id,
            turn,
            actor: None,
            role: None,
            character: None,
            action,
            card: None,
            target: None,
            health_before: None,
            health_after: None,
            damage: None,
            hand_start: None,
            hand_end: None,
            aggressive: false,
            result: None,
            turns_survived: None,
        }
    }

    /// Attribute the event to a participant (builder pattern).
    #[must_use]
    pub fn by(mut self, participant: &Participant) -> Self {
        self.actor = Some(participant.seat);
        self.role = Some(participant.role);
        self.character = Some(participant.character.clone());
        self
    }

    /// Name the card involved (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: impl ToString) -> Self {
        self.card = Some(card.to_string());
        self
    }

    /// Set the target seat (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: SeatId) -> Self {
        self.target = Some(target);
        self
    }

    /// Record a health change (builder pattern).
    #[must_use]
    pub fn with_health(mut self, before: u32, after: u32) -> Self {
        self.health_before = Some(before);
        self.health_after = Some(after);
        self
    }

    /// Record damage dealt (builder pattern).
    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Record hand sizes at turn start and end (builder pattern).
    #[must_use]
    pub fn with_hand_sizes(mut self, start: usize, end: usize) -> Self {
        self.hand_start = Some(start);
        self.hand_end = Some(end);
        self
    }

    /// Mark the event as an aggressive action (builder pattern).
    #[must_use]
    pub fn aggressive(mut self) -> Self {
        self.aggressive = true;
        self
    }

    /// Record a final result (builder pattern).
    #[must_use]
    pub fn with_result(mut self, result: ParticipantResult, turns_survived: u32) -> Self {
        self.result = Some(result);
        self.turns_survived = Some(turns_survived);
        self
    }
}

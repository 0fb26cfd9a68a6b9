//! # bang-sim
//!
//! A turn engine for five-seat rounds of the hidden-role card game Bang!,
//! built for running many seeded episodes and recording what happened.
//!
//! ## Design Principles
//!
//! 1. **Seeded Randomness**: Every shuffle, draw tie-break, target and
//!    discard choice draws from the episode's `GameRng`. Same seed, same game.
//!
//! 2. **Closed Effects**: Card effects are an enum, resolved by one function
//!    per kind. Anything unmodelled is a plain discard.
//!
//! 3. **Pluggable Collaborators**: Decision policies, character tables and
//!    event sinks are traits. The engine never depends on how events are stored.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, rules configuration, setup errors
//! - `cards`: Cards, the standard catalog, the deck
//! - `game`: Participants, characters, game state and builder
//! - `rules`: Range model and outcome evaluator
//! - `effects`: Card effect resolver and the damage helper
//! - `engine`: Turn engine and decision policies
//! - `events`: Event records and sinks
//! - `sim`: Multi-episode runner and outcome tally

pub mod core;
pub mod cards;
pub mod game;
pub mod rules;
pub mod effects;
pub mod engine;
pub mod events;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    SeatId, SeatMap, SEAT_COUNT,
    GameRng,
    EffectSet, RulesConfig,
    SetupError,
};

pub use crate::cards::{Card, Deck, EffectKind, Rank, Suit, Weapon};

pub use crate::game::{
    CharacterRoster, CharacterTable, CharacterTraits,
    Game, GameBuilder, Participant, Role,
};

pub use crate::rules::{
    effective_distance, evaluate, seat_distance, targets_in_range,
    EpisodeOutcome, ParticipantResult, WinningSide,
};

pub use crate::effects::{EffectResolver, PlayOutcome};

pub use crate::engine::{
    DecisionPolicy, EpisodeReport, FirstChoicePolicy, TurnEngine, TurnStatus, UniformRandomPolicy,
};

pub use crate::events::{
    ActionKind, EventSink, GameEvent, JsonLinesSink, NoopSink, RecordingSink, TracingSink,
};

pub use crate::sim::{run_episode, OutcomeTally, SimulationConfig, Simulator};

//! Participants, characters and the per-episode game state.

pub mod characters;
pub mod participant;
pub mod state;

pub use characters::{CharacterRoster, CharacterTable, CharacterTraits};
pub use participant::{DamageTaken, Equipment, EquippedCards, Hazards, Participant, Role};
pub use state::{Game, GameBuilder};

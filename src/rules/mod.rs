//! Rules that read game state without changing it: range and outcome.

pub mod outcome;
pub mod range;

pub use outcome::{evaluate, results, EpisodeOutcome, ParticipantResult, WinningSide};
pub use range::{effective_distance, seat_distance, targets_in_range};

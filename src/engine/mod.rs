//! The turn engine and the decision policies it consults.

pub mod policy;
pub mod turn;

pub use policy::{DecisionPolicy, FirstChoicePolicy, UniformRandomPolicy};
pub use turn::{EpisodeReport, TurnEngine, TurnStatus};

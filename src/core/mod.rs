//! Core building blocks: seats, RNG, rules configuration, setup errors.

pub mod seat;
pub mod rng;
pub mod config;
pub mod error;

pub use seat::{SeatId, SeatMap, SEAT_COUNT};
pub use rng::GameRng;
pub use config::{EffectSet, RulesConfig};
pub use error::SetupError;

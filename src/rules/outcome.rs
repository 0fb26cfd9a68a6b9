//! Win-condition evaluation and per-participant result assignment.
//!
//! The evaluator is recomputed from the current state on every call.

use serde::{Deserialize, Serialize};

use crate::core::{SeatId, SeatMap};
use crate::game::{Game, Role};

/// The side that won an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningSide {
    /// The Renegade is the last one standing.
    Renegade,
    /// The Sheriff fell without the Renegade winning alone.
    Outlaws,
    /// Sheriff and Deputy outlasted every Outlaw and the Renegade.
    Law,
}

impl WinningSide {
    /// Whether a participant with `role` is credited with this side's win.
    ///
    /// Credit depends on role only, not survival.
    #[must_use]
    pub fn includes(self, role: Role) -> bool {
        match self {
            WinningSide::Renegade => role == Role::Renegade,
            WinningSide::Outlaws => role == Role::Outlaw,
            WinningSide::Law => matches!(role, Role::Sheriff | Role::Deputy),
        }
    }
}

impl std::fmt::Display for WinningSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinningSide::Renegade => write!(f, "Renegade"),
            WinningSide::Outlaws => write!(f, "Outlaws"),
            WinningSide::Law => write!(f, "Sheriff & Deputies"),
        }
    }
}

/// How an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// The rules decided a winning side.
    Won(WinningSide),
    /// Play stopped without a decidable side.
    NoDefinitiveOutcome,
    /// The turn ceiling was reached first.
    Abandoned,
}

impl EpisodeOutcome {
    #[must_use]
    pub fn winning_side(self) -> Option<WinningSide> {
        match self {
            EpisodeOutcome::Won(side) => Some(side),
            _ => None,
        }
    }

    /// Result for a participant with `role` under this outcome.
    #[must_use]
    pub fn result_for(self, role: Role) -> ParticipantResult {
        match self {
            EpisodeOutcome::Won(side) if side.includes(role) => ParticipantResult::Win,
            EpisodeOutcome::Won(_) => ParticipantResult::Loss,
            EpisodeOutcome::NoDefinitiveOutcome | EpisodeOutcome::Abandoned => {
                ParticipantResult::NoOutcome
            }
        }
    }
}

impl std::fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EpisodeOutcome::Won(side) => write!(f, "{} win", side),
            EpisodeOutcome::NoDefinitiveOutcome => write!(f, "no definitive outcome"),
            EpisodeOutcome::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// Final record for one participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantResult {
    Win,
    Loss,
    NoOutcome,
}

impl ParticipantResult {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ParticipantResult::Win => "Win",
            ParticipantResult::Loss => "Loss",
            ParticipantResult::NoOutcome => "NoOutcome",
        }
    }
}

/// The winning side if the game is over, `None` while it continues.
///
/// ```
/// use bang_sim::game::GameBuilder;
/// use bang_sim::rules::evaluate;
///
/// let game = GameBuilder::new().build(7).unwrap();
/// assert_eq!(evaluate(&game), None);
/// ```
#[must_use]
pub fn evaluate(game: &Game) -> Option<WinningSide> {
    if !game.role_alive(Role::Sheriff) {
        let living = game.living_seats();
        let renegade_alone =
            living.len() == 1 && game.participant(living[0]).role == Role::Renegade;
        return Some(if renegade_alone {
            WinningSide::Renegade
        } else {
            WinningSide::Outlaws
        });
    }

    if !game.role_alive(Role::Outlaw) && !game.role_alive(Role::Renegade) {
        return Some(WinningSide::Law);
    }

    None
}

/// Per-seat results for a finished episode.
#[must_use]
pub fn results(game: &Game, outcome: EpisodeOutcome) -> SeatMap<ParticipantResult> {
    SeatMap::new(game.seat_count(), |seat: SeatId| {
        outcome.result_for(game.participant(seat).role)
    })
}

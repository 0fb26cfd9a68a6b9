//! Multi-episode simulation runner.
//!
//! Plays independent episodes with the uniform-random policy and tallies
//! how they ended. Episode `i` (0-based) has game id `i + 1` and is seeded
//! with `seed + i`, so any single episode can be replayed on its own.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RulesConfig, SetupError};
use crate::engine::{EpisodeReport, TurnEngine, UniformRandomPolicy};
use crate::events::EventSink;
use crate::game::{GameBuilder, Role};
use crate::rules::{EpisodeOutcome, ParticipantResult, WinningSide};

/// Configuration for a batch of episodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of episodes to play.
    pub episodes: u32,

    /// Seed of the first episode.
    pub seed: u64,

    /// Rules for every episode.
    pub rules: RulesConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            seed: 0,
            rules: RulesConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_episodes(mut self, episodes: u32) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Seed for episode `index`.
    #[must_use]
    pub fn episode_seed(&self, index: u32) -> u64 {
        self.seed.wrapping_add(u64::from(index))
    }
}

/// How a batch of episodes ended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub episodes: u32,
    pub renegade: u32,
    pub outlaws: u32,
    pub law: u32,
    pub no_outcome: u32,
    pub abandoned: u32,
    /// Participant wins by role. An Outlaw win counts twice under `Outlaw`.
    pub role_wins: FxHashMap<Role, u32>,
    pub total_turns: u64,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished episode.
    pub fn record(&mut self, report: &EpisodeReport) {
        self.episodes += 1;
        self.total_turns += u64::from(report.turns);

        match report.outcome {
            EpisodeOutcome::Won(WinningSide::Renegade) => self.renegade += 1,
            EpisodeOutcome::Won(WinningSide::Outlaws) => self.outlaws += 1,
            EpisodeOutcome::Won(WinningSide::Law) => self.law += 1,
            EpisodeOutcome::NoDefinitiveOutcome => self.no_outcome += 1,
            EpisodeOutcome::Abandoned => self.abandoned += 1,
        }

        for (seat, &result) in report.results.iter() {
            if result == ParticipantResult::Win {
                *self.role_wins.entry(report.roles[seat]).or_insert(0) += 1;
            }
        }
    }

    /// Participant wins credited to `role`.
    #[must_use]
    pub fn wins_for(&self, role: Role) -> u32 {
        self.role_wins.get(&role).copied().unwrap_or(0)
    }

    /// Fraction of episodes won by `side`.
    #[must_use]
    pub fn win_rate(&self, side: WinningSide) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        let wins = match side {
            WinningSide::Renegade => self.renegade,
            WinningSide::Outlaws => self.outlaws,
            WinningSide::Law => self.law,
        };
        f64::from(wins) / f64::from(self.episodes)
    }

    /// Mean turns per episode.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.episodes)
    }
}

/// Play one episode with the standard setup and the uniform-random policy.
pub fn run_episode<S: EventSink>(
    game_id: u64,
    seed: u64,
    rules: &RulesConfig,
    sink: S,
) -> Result<EpisodeReport, SetupError> {
    let game = GameBuilder::new().game_id(game_id).build(seed)?;
    let mut engine = TurnEngine::new(game, rules.clone(), UniformRandomPolicy, sink);
    Ok(engine.run())
}

/// Runs a batch of episodes.
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every episode, sending all events to `sink`.
    pub fn run<S: EventSink + ?Sized>(&self, sink: &mut S) -> Result<OutcomeTally, SetupError> {
        self.run_with(sink, |_| {})
    }

    /// Like `run`, calling `on_episode` after each episode.
    pub fn run_with<S, F>(
        &self,
        sink: &mut S,
        mut on_episode: F,
    ) -> Result<OutcomeTally, SetupError>
    where
        S: EventSink + ?Sized,
        F: FnMut(&EpisodeReport),
    {
        let mut tally = OutcomeTally::new();

        for index in 0..self.config.episodes {
            let game_id = u64::from(index) + 1;
            let seed = self.config.episode_seed(index);
            let report = run_episode(game_id, seed, &self.config.rules, &mut *sink)?;
            debug!(
                game = game_id,
                seed,
                outcome = %report.outcome,
                turns = report.turns,
                "episode done"
            );

            tally.record(&report);
            on_episode(&report);
        }

        Ok(tally)
    }
}

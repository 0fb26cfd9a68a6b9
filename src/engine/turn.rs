//! The turn engine.
//!
//! One call to `play_turn` runs a single participant's turn:
//!
//! 1. Dynamite check (if held)
//! 2. Jail check (non-Sheriff, if jailed)
//! 3. Draw phase
//! 4. Play phase (skipped after a failed jail check)
//! 5. Discard phase
//! 6. Termination check, then rotation to the next living seat
//!
//! The engine owns the `Game` for the whole episode. When the outcome
//! evaluator reports a winner, or the turn ceiling is reached, every
//! participant gets a `GameOver` event and the episode is finished.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::policy::DecisionPolicy;
use crate::cards::Card;
use crate::core::{RulesConfig, SeatId, SeatMap};
use crate::effects::EffectResolver;
use crate::events::{ActionKind, EventSink};
use crate::game::{Game, Role};
use crate::rules::{evaluate, results, EpisodeOutcome, ParticipantResult};

/// Whether the episode goes on after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    Continue,
    Finished(EpisodeOutcome),
}

/// Summary of one finished episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeReport {
    pub game_id: u64,
    pub outcome: EpisodeOutcome,
    pub roles: SeatMap<Role>,
    pub results: SeatMap<ParticipantResult>,
    /// Turns started.
    pub turns: u32,
    pub turns_survived: SeatMap<u32>,
}

/// Drives one episode turn by turn.
pub struct TurnEngine<P, S> {
    game: Game,
    rules: RulesConfig,
    policy: P,
    sink: S,
    outcome: Option<EpisodeOutcome>,
}

impl<P: DecisionPolicy, S: EventSink> TurnEngine<P, S> {
    pub fn new(game: Game, rules: RulesConfig, policy: P, sink: S) -> Self {
        Self {
            game,
            rules,
            policy,
            sink,
            outcome: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access for setting up positions before play.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The outcome, once the episode is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<EpisodeOutcome> {
        self.outcome
    }

    /// Play turns until the episode finishes.
    pub fn run(&mut self) -> EpisodeReport {
        loop {
            if let TurnStatus::Finished(outcome) = self.play_turn() {
                return self.build_report(outcome);
            }
        }
    }

    /// Play one participant's turn.
    ///
    /// Calling this after the episode finished does nothing.
    pub fn play_turn(&mut self) -> TurnStatus {
        if let Some(outcome) = self.outcome {
            return TurnStatus::Finished(outcome);
        }
        if let Some(side) = evaluate(&self.game) {
            return self.finish(EpisodeOutcome::Won(side));
        }
        if let Some(max_turns) = self.rules.max_turns {
            if self.game.turn() >= max_turns {
                warn!(
                    game = self.game.id(),
                    turns = self.game.turn(),
                    "turn ceiling reached, abandoning episode"
                );
                return self.finish(EpisodeOutcome::Abandoned);
            }
        }

        let mut seat = self.game.current_seat();
        if !self.game.is_alive(seat) {
            match self.game.next_living_seat(seat) {
                Some(next) => seat = next,
                None => return self.finish(EpisodeOutcome::NoDefinitiveOutcome),
            }
            self.game.set_current_seat(seat);
        }

        self.game.begin_turn();
        self.game.participant_mut(seat).reset_turn_counters();
        let hand_start = self.game.participant(seat).hand_len();
        debug!(game = self.game.id(), turn = self.game.turn(), seat = %seat, "turn start");

        if self.game.participant(seat).hazards.dynamite && self.resolve_dynamite(seat) {
            return self.conclude(seat);
        }

        let jailed = {
            let p = self.game.participant(seat);
            p.role != Role::Sheriff && p.hazards.jailed
        };
        let skip_play = jailed && self.resolve_jail(seat);

        for _ in 0..self.rules.cards_per_draw {
            self.game.draw_into_hand(seat, &mut self.sink);
        }

        if !skip_play {
            self.play_phase(seat);
        }

        if evaluate(&self.game).is_none() && self.game.is_alive(seat) {
            self.discard_phase(seat);
        }

        let hand_end = self.game.participant(seat).hand_len();
        let event = self
            .game
            .event(seat, ActionKind::TurnEnd)
            .with_hand_sizes(hand_start, hand_end);
        self.sink.record(event);

        self.conclude(seat)
    }

    /// Summary of the episode, once finished.
    #[must_use]
    pub fn report(&self) -> Option<EpisodeReport> {
        self.outcome.map(|outcome| self.build_report(outcome))
    }

    fn build_report(&self, outcome: EpisodeOutcome) -> EpisodeReport {
        let seat_count = self.game.seat_count();
        EpisodeReport {
            game_id: self.game.id(),
            outcome,
            roles: SeatMap::new(seat_count, |seat| self.game.participant(seat).role),
            results: results(&self.game, outcome),
            turns: self.game.turn(),
            turns_survived: self.game.turns_survived_map().clone(),
        }
    }

    // === Phases ===

    /// Flip for dynamite. Returns true if the holder was eliminated.
    fn resolve_dynamite(&mut self, seat: SeatId) -> bool {
        let Some(check) = self.game.draw_check(seat, &mut self.sink) else {
            return false;
        };

        if check.detonates_dynamite() {
            let damage = self.rules.dynamite_damage;
            let holder = self.game.participant_mut(seat);
            holder.hazards.dynamite = false;
            let health_before = holder.health();
            let event = self
                .game
                .event(seat, ActionKind::DynamiteExplode)
                .with_card(check)
                .with_health(health_before, health_before.saturating_sub(damage))
                .with_damage(damage);
            self.sink.record(event);
            debug!(game = self.game.id(), seat = %seat, "dynamite exploded");

            let taken =
                EffectResolver::apply_damage(&mut self.game, &mut self.sink, None, seat, damage);
            return taken.eliminated_hand.is_some();
        }

        if let Some(next) = self.game.next_living_seat(seat) {
            self.game.participant_mut(seat).hazards.dynamite = false;
            self.game.participant_mut(next).hazards.dynamite = true;
            let event = self
                .game
                .event(seat, ActionKind::DynamitePass)
                .with_card(check)
                .with_target(next);
            self.sink.record(event);
        }
        false
    }

    /// Flip for jail. Returns true if the play phase is lost.
    fn resolve_jail(&mut self, seat: SeatId) -> bool {
        let Some(check) = self.game.draw_check(seat, &mut self.sink) else {
            return false;
        };

        self.game.participant_mut(seat).hazards.jailed = false;
        let escaped = check.frees_from_jail();
        let kind = if escaped {
            ActionKind::JailEscape
        } else {
            ActionKind::JailSkip
        };
        let event = self.game.event(seat, kind).with_card(check);
        self.sink.record(event);
        !escaped
    }

    /// Attempt each card held at the start of the phase once, in policy order.
    fn play_phase(&mut self, seat: SeatId) {
        let mut pending: Vec<Card> = self.game.participant(seat).hand().to_vec();

        while !pending.is_empty() {
            let choice = self.policy.choose_card(seat, &pending, &mut self.game.rng);
            assert!(
                choice < pending.len(),
                "Policy chose card {} of {}",
                choice,
                pending.len()
            );
            let card = pending.remove(choice);

            EffectResolver::resolve_play(
                &mut self.game,
                &self.rules,
                &mut self.policy,
                &mut self.sink,
                seat,
                card,
            );

            if evaluate(&self.game).is_some() {
                break;
            }
        }
    }

    /// Discard uniformly at random down to current health.
    fn discard_phase(&mut self, seat: SeatId) {
        let p = self.game.participant(seat);
        let hand_len = p.hand_len();
        let excess = hand_len.saturating_sub(p.health() as usize);
        if excess == 0 {
            return;
        }

        let indices = self.game.rng.sample_indices(hand_len, excess);
        let discarded = self.game.participant_mut(seat).take_from_hand(indices);
        for card in discarded {
            self.game.deck.discard(card);
            let event = self.game.event(seat, ActionKind::Discard).with_card(card);
            self.sink.record(event);
        }
    }

    // === Termination ===

    /// End-of-turn check, then rotate.
    fn conclude(&mut self, seat: SeatId) -> TurnStatus {
        if let Some(side) = evaluate(&self.game) {
            return self.finish(EpisodeOutcome::Won(side));
        }
        if let Some(next) = self.game.next_living_seat(seat) {
            self.game.set_current_seat(next);
        }
        TurnStatus::Continue
    }

    fn finish(&mut self, outcome: EpisodeOutcome) -> TurnStatus {
        let results = results(&self.game, outcome);
        for seat in SeatId::all(self.game.seat_count()) {
            let event = self
                .game
                .event(seat, ActionKind::GameOver)
                .with_result(results[seat], self.game.turns_survived(seat));
            self.sink.record(event);
        }

        info!(
            game = self.game.id(),
            turns = self.game.turn(),
            outcome = %outcome,
            "episode finished"
        );
        self.outcome = Some(outcome);
        TurnStatus::Finished(outcome)
    }
}

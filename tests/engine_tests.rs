//! Whole-episode tests of the turn engine and its event stream.

use bang_sim::cards::CATALOG_SIZE;
use bang_sim::core::{EffectSet, RulesConfig, SeatId};
use bang_sim::engine::{TurnEngine, TurnStatus, UniformRandomPolicy};
use bang_sim::events::{ActionKind, RecordingSink};
use bang_sim::game::GameBuilder;
use bang_sim::rules::{EpisodeOutcome, ParticipantResult};

fn episode(seed: u64, rules: RulesConfig) -> TurnEngine<UniformRandomPolicy, RecordingSink> {
    let game = GameBuilder::new().game_id(seed).build(seed).unwrap();
    TurnEngine::new(game, rules, UniformRandomPolicy, RecordingSink::new())
}

#[test]
fn test_episode_ends_with_one_game_over_per_seat() {
    for seed in 0..10 {
        let mut engine = episode(seed, RulesConfig::default().with_max_turns(1000));
        let report = engine.run();

        let sink = engine.sink();
        let game_over: Vec<_> = sink.of_kind(ActionKind::GameOver).collect();
        assert_eq!(game_over.len(), 5);

        for (seat, event) in SeatId::all(5).zip(&game_over) {
            assert_eq!(event.actor, Some(seat));
            assert_eq!(event.result, Some(report.results[seat]));
            assert_eq!(event.turns_survived, Some(report.turns_survived[seat]));
        }

        let tail: Vec<_> = sink.events().iter().rev().take(5).map(|e| e.action).collect();
        assert!(tail.iter().all(|&a| a == ActionKind::GameOver));
    }
}

#[test]
fn test_events_carry_game_id_and_ordered_turns() {
    let mut engine = episode(31, RulesConfig::default().with_max_turns(1000));
    engine.run();

    let mut last_turn = 0;
    for event in engine.sink().events() {
        assert_eq!(event.game_id, 31);
        assert!(event.turn >= last_turn);
        last_turn = event.turn;
    }
}

#[test]
fn test_won_episode_results_match_roles() {
    for seed in 0..20 {
        let mut engine = episode(seed, RulesConfig::default().with_max_turns(1000));
        let report = engine.run();

        if let EpisodeOutcome::Won(side) = report.outcome {
            for (seat, &result) in report.results.iter() {
                let expected = if side.includes(report.roles[seat]) {
                    ParticipantResult::Win
                } else {
                    ParticipantResult::Loss
                };
                assert_eq!(result, expected);
            }
        }
    }
}

#[test]
fn test_cards_are_conserved_over_an_episode() {
    let mut engine = episode(5, RulesConfig::default().with_max_turns(1000));

    while engine.play_turn() == TurnStatus::Continue {
        assert_eq!(engine.game().card_count(), CATALOG_SIZE);
    }
    assert_eq!(engine.game().card_count(), CATALOG_SIZE);
}

#[test]
fn test_every_play_card_left_a_hand() {
    let mut engine = episode(12, RulesConfig::default().with_max_turns(1000));
    engine.run();

    let sink = engine.sink();
    let bangs = sink.count(ActionKind::Bang);
    let plays = sink.count(ActionKind::PlayCard);
    assert!(plays >= bangs);

    for event in sink.of_kind(ActionKind::Bang) {
        assert!(event.aggressive);
        assert!(event.target.is_some());
        assert_ne!(event.target, event.actor);
    }
}

#[test]
fn test_turn_end_follows_each_surviving_turn() {
    let mut engine = episode(77, RulesConfig::default().with_max_turns(1000));
    engine.run();

    for event in engine.sink().of_kind(ActionKind::TurnEnd) {
        let (start, end) = (event.hand_start, event.hand_end);
        assert!(start.is_some() && end.is_some());
    }
    assert!(engine.sink().count(ActionKind::TurnEnd) as u32 <= engine.game().turn());
}

#[test]
fn test_extended_effects_episode() {
    let rules = RulesConfig::default()
        .with_effect_set(EffectSet::Extended)
        .with_max_turns(1000);

    let mut seen_equip = false;
    for seed in 0..10 {
        let mut engine = episode(seed, rules.clone());
        let report = engine.run();
        assert_ne!(report.outcome, EpisodeOutcome::NoDefinitiveOutcome);
        assert_eq!(engine.game().card_count(), CATALOG_SIZE);
        seen_equip |= engine.sink().count(ActionKind::Equip) > 0;
    }
    assert!(seen_equip);
}

#[test]
fn test_core_effects_never_equip() {
    let mut engine = episode(3, RulesConfig::default().with_max_turns(1000));
    engine.run();

    let sink = engine.sink();
    assert_eq!(sink.count(ActionKind::Equip), 0);
    assert_eq!(sink.count(ActionKind::Heal), 0);
    assert_eq!(sink.count(ActionKind::Jailed), 0);
    assert_eq!(sink.count(ActionKind::DynamitePlaced), 0);
}

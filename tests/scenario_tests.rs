//! End-to-end rule scenarios on a five-seat table.
//!
//! Seats 0..4 are Sheriff, Renegade, Outlaw, Outlaw, Deputy throughout.

use bang_sim::cards::{Card, EffectKind, Rank, Suit};
use bang_sim::core::{RulesConfig, SeatId};
use bang_sim::effects::{EffectResolver, PlayOutcome};
use bang_sim::engine::{FirstChoicePolicy, TurnEngine};
use bang_sim::events::{ActionKind, NoopSink, RecordingSink};
use bang_sim::game::{Game, GameBuilder, Role};
use bang_sim::rules::{evaluate, results, EpisodeOutcome, ParticipantResult, WinningSide};

const NAMES: [&str; 5] =
    ["Bart Cassidy", "Black Jack", "Kit Carlson", "Sid Ketchum", "Vulture Sam"];

fn s(i: u8) -> SeatId {
    SeatId::new(i)
}

fn table(deck: Option<Vec<Card>>) -> Game {
    let builder = GameBuilder::new().characters(NAMES).deal_hands(false);
    let builder = match deck {
        Some(cards) => builder.deck(cards),
        None => builder,
    };
    builder.build(2024).unwrap()
}

fn eliminate(game: &mut Game, seats: &[u8]) {
    for &i in seats {
        let health = game.participant(s(i)).health();
        EffectResolver::apply_damage(game, &mut NoopSink, None, s(i), health);
    }
}

/// A draw pile whose first draw is `top`, followed by plain fillers.
fn deck_with_top(top: Card) -> Vec<Card> {
    let mut cards: Vec<Card> = (0..10)
        .map(|_| Card::new(Suit::Diamonds, Rank::Five, EffectKind::Missed))
        .collect();
    cards.push(top);
    cards
}

#[test]
fn test_default_layout() {
    let game = table(None);
    let roles: Vec<_> = game.participants().map(|p| p.role).collect();
    assert_eq!(
        roles,
        vec![Role::Sheriff, Role::Renegade, Role::Outlaw, Role::Outlaw, Role::Deputy]
    );
}

#[test]
fn test_law_wins_when_outlaws_and_renegade_fall() {
    let mut game = table(None);
    eliminate(&mut game, &[1, 2, 3]);

    let side = evaluate(&game);
    assert_eq!(side, Some(WinningSide::Law));

    let r = results(&game, EpisodeOutcome::Won(WinningSide::Law));
    assert_eq!(r[s(0)], ParticipantResult::Win);
    assert_eq!(r[s(4)], ParticipantResult::Win);
    assert_eq!(r[s(1)], ParticipantResult::Loss);
    assert_eq!(r[s(2)], ParticipantResult::Loss);
    assert_eq!(r[s(3)], ParticipantResult::Loss);
}

#[test]
fn test_renegade_alone_wins() {
    let mut game = table(None);
    eliminate(&mut game, &[0, 4, 2, 3]);

    assert_eq!(evaluate(&game), Some(WinningSide::Renegade));

    let r = results(&game, EpisodeOutcome::Won(WinningSide::Renegade));
    assert_eq!(r[s(1)], ParticipantResult::Win);
    for i in [0, 2, 3, 4] {
        assert_eq!(r[s(i)], ParticipantResult::Loss);
    }
}

#[test]
fn test_renegade_with_an_outlaw_left_is_an_outlaw_win() {
    let mut game = table(None);
    eliminate(&mut game, &[0, 4, 2]);

    assert_eq!(evaluate(&game), Some(WinningSide::Outlaws));
}

#[test]
fn test_dynamite_spade_seven_explodes() {
    let spade_seven = Card::new(Suit::Spades, Rank::Seven, EffectKind::Bang);
    let game = table(Some(deck_with_top(spade_seven)));
    let mut engine =
        TurnEngine::new(game, RulesConfig::default(), FirstChoicePolicy, RecordingSink::new());
    engine.game_mut().set_current_seat(s(3));
    engine.game_mut().participant_mut(s(3)).hazards.dynamite = true;

    engine.play_turn();

    let holder = engine.game().participant(s(3));
    assert_eq!(holder.health(), 1);
    assert!(!holder.hazards.dynamite);
    assert!(engine.game().participants().all(|p| !p.hazards.dynamite));

    let sink = engine.sink();
    assert_eq!(sink.count(ActionKind::DynamitePass), 0);
    assert_eq!(sink.count(ActionKind::DynamiteExplode), 1);
    let damage = sink.of_kind(ActionKind::Damage).next().unwrap();
    assert_eq!(damage.damage, Some(3));
    assert_eq!(damage.actor, None);
    assert_eq!(damage.target, Some(s(3)));
}

#[test]
fn test_dynamite_heart_seven_passes_clockwise() {
    let heart_seven = Card::new(Suit::Hearts, Rank::Seven, EffectKind::Bang);
    let game = table(Some(deck_with_top(heart_seven)));
    let mut engine =
        TurnEngine::new(game, RulesConfig::default(), FirstChoicePolicy, RecordingSink::new());
    engine.game_mut().set_current_seat(s(3));
    engine.game_mut().participant_mut(s(3)).hazards.dynamite = true;

    engine.play_turn();

    assert_eq!(engine.game().participant(s(3)).health(), 4);
    assert!(!engine.game().participant(s(3)).hazards.dynamite);
    assert!(engine.game().participant(s(4)).hazards.dynamite);

    let sink = engine.sink();
    assert_eq!(sink.count(ActionKind::Damage), 0);
    let pass = sink.of_kind(ActionKind::DynamitePass).next().unwrap();
    assert_eq!(pass.actor, Some(s(3)));
    assert_eq!(pass.target, Some(s(4)));
}

#[test]
fn test_dynamite_pass_wraps_past_eliminated_seats() {
    let heart_seven = Card::new(Suit::Hearts, Rank::Seven, EffectKind::Bang);
    let mut game = table(Some(deck_with_top(heart_seven)));
    eliminate(&mut game, &[4]);
    let mut engine =
        TurnEngine::new(game, RulesConfig::default(), FirstChoicePolicy, RecordingSink::new());
    engine.game_mut().set_current_seat(s(3));
    engine.game_mut().participant_mut(s(3)).hazards.dynamite = true;

    engine.play_turn();

    assert!(engine.game().participant(s(0)).hazards.dynamite);
    let pass = engine.sink().of_kind(ActionKind::DynamitePass).next().unwrap();
    assert_eq!(pass.target, Some(s(0)));
}

#[test]
fn test_bang_with_nobody_in_range_changes_nothing() {
    let mut game = table(None);
    for i in 1..5 {
        game.participant_mut(s(i)).equipment.mustang = 1;
    }
    let bang = Card::new(Suit::Spades, Rank::Ace, EffectKind::Bang);
    game.participant_mut(s(0)).add_to_hand(bang);
    let discard_before = game.deck.discard_pile_len();
    let mut sink = RecordingSink::new();

    let outcome = EffectResolver::resolve_play(
        &mut game,
        &RulesConfig::default(),
        &mut FirstChoicePolicy,
        &mut sink,
        s(0),
        bang,
    );

    assert_eq!(outcome, PlayOutcome::Abandoned);
    assert_eq!(game.participant(s(0)).hand(), &[bang]);
    assert_eq!(game.deck.discard_pile_len(), discard_before);
    assert_eq!(sink.count(ActionKind::Bang), 0);
    assert!(sink.is_empty());
}

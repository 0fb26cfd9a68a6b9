//! Card effect resolution.
//!
//! `EffectResolver` interprets one played card against the game. Effects
//! are dispatched on `EffectKind`; anything not modelled by the active
//! `EffectSet` falls back to a plain discard.
//!
//! `apply_damage` is the only place health ever decreases. Hazards and
//! offensive cards both route through it.

use tracing::debug;

use crate::cards::{Card, EffectKind};
use crate::core::{EffectSet, RulesConfig, SeatId};
use crate::engine::DecisionPolicy;
use crate::events::{ActionKind, EventSink, GameEvent};
use crate::game::{DamageTaken, Game, Role};
use crate::rules::targets_in_range;

/// Result of one play attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card left the hand and its effect (if any) applied.
    Resolved,
    /// The attempt was dropped. Hand and piles are unchanged.
    Abandoned,
}

/// Resolves played cards against game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Attempt to play `card` from `actor`'s hand.
    ///
    /// Panics if `actor` is eliminated or does not hold `card`.
    pub fn resolve_play<P, S>(
        game: &mut Game,
        rules: &RulesConfig,
        policy: &mut P,
        sink: &mut S,
        actor: SeatId,
        card: Card,
    ) -> PlayOutcome
    where
        P: DecisionPolicy + ?Sized,
        S: EventSink + ?Sized,
    {
        assert!(game.is_alive(actor), "{} is eliminated and cannot play", actor);
        assert!(
            game.participant(actor).holds(&card),
            "{} does not hold {}",
            actor,
            card
        );

        match (card.effect, rules.effect_set) {
            (effect, _) if effect.is_offensive() => {
                Self::resolve_offense(game, rules, policy, sink, actor, card)
            }
            (_, EffectSet::Core) => {
                Self::discard_played(game, sink, actor, card);
                PlayOutcome::Resolved
            }
            (_, EffectSet::Extended) => Self::resolve_extended(game, policy, sink, actor, card),
        }
    }

    /// Reduce `target`'s health by `amount`, clamping at 0.
    ///
    /// `source` is the attacking seat, or `None` for environment damage.
    /// On elimination the target's hand leaves play and an `Eliminate`
    /// event follows the `Damage` event.
    pub fn apply_damage<S: EventSink + ?Sized>(
        game: &mut Game,
        sink: &mut S,
        source: Option<SeatId>,
        target: SeatId,
        amount: u32,
    ) -> DamageTaken {
        let taken = game.participant_mut(target).take_damage(amount);

        let event = Self::attributed(game, source, target, ActionKind::Damage)
            .with_health(taken.health_before, taken.health_after)
            .with_damage(amount);
        sink.record(event);

        if let Some(hand) = &taken.eliminated_hand {
            game.deck.remove_from_play(hand.iter().copied());
            debug!(game = game.id(), turn = game.turn(), seat = %target, "eliminated");
            let event = Self::attributed(game, source, target, ActionKind::Eliminate)
                .with_health(taken.health_before, taken.health_after);
            sink.record(event);
        }

        taken
    }

    /// Event acted by `source` (or the environment) against `target`.
    ///
    /// Aggressive when the source is another seat.
    fn attributed(
        game: &Game,
        source: Option<SeatId>,
        target: SeatId,
        action: ActionKind,
    ) -> GameEvent {
        let event = match source {
            Some(seat) => game.event(seat, action),
            None => game.environment_event(action),
        }
        .with_target(target);
        if source.is_some_and(|seat| seat != target) {
            event.aggressive()
        } else {
            event
        }
    }

    fn resolve_offense<P, S>(
        game: &mut Game,
        rules: &RulesConfig,
        policy: &mut P,
        sink: &mut S,
        actor: SeatId,
        card: Card,
    ) -> PlayOutcome
    where
        P: DecisionPolicy + ?Sized,
        S: EventSink + ?Sized,
    {
        let attacker = game.participant(actor);
        if !attacker.can_use_offense() {
            return PlayOutcome::Abandoned;
        }

        let candidates = targets_in_range(game, actor, attacker.weapon.range());
        if candidates.is_empty() {
            return PlayOutcome::Abandoned;
        }

        let target = Self::pick(policy, game, actor, &card, &candidates);

        Self::discard_played(game, sink, actor, card);
        game.participant_mut(actor).record_offense();
        sink.record(
            game.event(actor, ActionKind::Bang)
                .with_card(card)
                .with_target(target)
                .with_damage(rules.offense_damage)
                .aggressive(),
        );

        Self::apply_damage(game, sink, Some(actor), target, rules.offense_damage);
        PlayOutcome::Resolved
    }

    fn resolve_extended<P, S>(
        game: &mut Game,
        policy: &mut P,
        sink: &mut S,
        actor: SeatId,
        card: Card,
    ) -> PlayOutcome
    where
        P: DecisionPolicy + ?Sized,
        S: EventSink + ?Sized,
    {
        match card.effect {
            EffectKind::Weapon(weapon) => {
                Self::discard_played(game, sink, actor, card);
                game.participant_mut(actor).weapon = weapon;
                sink.record(game.event(actor, ActionKind::Equip).with_card(card));
            }

            EffectKind::Mustang | EffectKind::Scope | EffectKind::Barrel => {
                let p = game.participant_mut(actor);
                let (slot, counter) = match card.effect {
                    EffectKind::Mustang => {
                        (&mut p.equipped_cards.mustang, &mut p.equipment.mustang)
                    }
                    EffectKind::Scope => (&mut p.equipped_cards.scope, &mut p.equipment.scope),
                    _ => (&mut p.equipped_cards.barrel, &mut p.equipment.barrel),
                };
                let fresh = !*slot;
                if fresh {
                    *slot = true;
                    *counter += 1;
                }

                Self::discard_played(game, sink, actor, card);
                if fresh {
                    sink.record(game.event(actor, ActionKind::Equip).with_card(card));
                }
            }

            EffectKind::Beer => {
                Self::discard_played(game, sink, actor, card);
                let before = game.participant(actor).health();
                let healed = game.participant_mut(actor).heal(1);
                sink.record(
                    game.event(actor, ActionKind::Heal)
                        .with_card(card)
                        .with_health(before, before + healed),
                );
            }

            EffectKind::Stagecoach | EffectKind::WellsFargo => {
                let count = if card.effect == EffectKind::Stagecoach { 2 } else { 3 };
                Self::discard_played(game, sink, actor, card);
                for _ in 0..count {
                    game.draw_into_hand(actor, sink);
                }
            }

            EffectKind::Dynamite => {
                let in_play = game.participants().any(|p| p.is_alive() && p.hazards.dynamite);
                Self::discard_played(game, sink, actor, card);
                if !in_play {
                    game.participant_mut(actor).hazards.dynamite = true;
                    sink.record(game.event(actor, ActionKind::DynamitePlaced).with_card(card));
                }
            }

            EffectKind::Jail => {
                let candidates: Vec<SeatId> = game
                    .participants()
                    .filter(|p| p.is_alive() && p.seat != actor)
                    .filter(|p| p.role != Role::Sheriff && !p.hazards.jailed)
                    .map(|p| p.seat)
                    .collect();
                if candidates.is_empty() {
                    return PlayOutcome::Abandoned;
                }

                let target = Self::pick(policy, game, actor, &card, &candidates);
                Self::discard_played(game, sink, actor, card);
                game.participant_mut(target).hazards.jailed = true;
                sink.record(
                    game.event(actor, ActionKind::Jailed)
                        .with_card(card)
                        .with_target(target)
                        .aggressive(),
                );
            }

            _ => Self::discard_played(game, sink, actor, card),
        }

        PlayOutcome::Resolved
    }

    /// Ask the policy for a target and check its answer.
    fn pick<P: DecisionPolicy + ?Sized>(
        policy: &mut P,
        game: &mut Game,
        actor: SeatId,
        card: &Card,
        candidates: &[SeatId],
    ) -> SeatId {
        let choice = policy.choose_target(actor, card, candidates, &mut game.rng);
        assert!(
            choice < candidates.len(),
            "Policy chose target {} of {}",
            choice,
            candidates.len()
        );
        candidates[choice]
    }

    /// Move a played card from hand to the discard pile.
    fn discard_played<S: EventSink + ?Sized>(
        game: &mut Game,
        sink: &mut S,
        actor: SeatId,
        card: Card,
    ) {
        let removed = game.participant_mut(actor).remove_from_hand(&card);
        assert!(removed, "{} does not hold {}", actor, card);
        game.deck.discard(card);
        sink.record(game.event(actor, ActionKind::PlayCard).with_card(card));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit, Weapon};
    use crate::engine::FirstChoicePolicy;
    use crate::events::RecordingSink;
    use crate::game::GameBuilder;

    fn s(i: u8) -> SeatId {
        SeatId::new(i)
    }

    fn game() -> Game {
        GameBuilder::new()
            .characters(["Bart Cassidy", "Black Jack", "Kit Carlson", "Sid Ketchum", "Vulture Sam"])
            .deal_hands(false)
            .build(21)
            .unwrap()
    }

    fn give(game: &mut Game, seat: SeatId, effect: EffectKind) -> Card {
        let card = Card::new(Suit::Diamonds, Rank::Queen, effect);
        game.participant_mut(seat).add_to_hand(card);
        card
    }

    fn play(
        game: &mut Game,
        rules: &RulesConfig,
        sink: &mut RecordingSink,
        seat: SeatId,
        card: Card,
    ) -> PlayOutcome {
        EffectResolver::resolve_play(game, rules, &mut FirstChoicePolicy, sink, seat, card)
    }

    #[test]
    fn test_bang_hits_first_target_in_range() {
        let mut g = game();
        let rules = RulesConfig::default();
        let mut sink = RecordingSink::new();
        let bang = give(&mut g, s(0), EffectKind::Bang);

        assert_eq!(play(&mut g, &rules, &mut sink, s(0), bang), PlayOutcome::Resolved);

        assert_eq!(g.participant(s(1)).health(), 3);
        assert_eq!(g.participant(s(0)).hand_len(), 0);
        assert_eq!(g.deck.top_discard(), Some(&bang));
        assert_eq!(g.participant(s(0)).offensive_uses(), 1);

        let kinds: Vec<_> = sink.events().iter().map(|e| e.action).collect();
        assert_eq!(kinds, vec![ActionKind::PlayCard, ActionKind::Bang, ActionKind::Damage]);

        let damage = sink.of_kind(ActionKind::Damage).next().unwrap();
        assert_eq!(damage.target, Some(s(1)));
        assert_eq!((damage.health_before, damage.health_after), (Some(4), Some(3)));
        assert!(damage.aggressive);
    }

    #[test]
    fn test_second_bang_is_abandoned() {
        let mut g = game();
        let rules = RulesConfig::default();
        let mut sink = RecordingSink::new();
        let first = give(&mut g, s(0), EffectKind::Bang);
        let second = give(&mut g, s(0), EffectKind::Bang);

        play(&mut g, &rules, &mut sink, s(0), first);
        let before = sink.len();

        assert_eq!(play(&mut g, &rules, &mut sink, s(0), second), PlayOutcome::Abandoned);
        assert_eq!(g.participant(s(0)).hand_len(), 1);
        assert_eq!(sink.len(), before);
    }

    #[test]
    fn test_volcanic_lifts_limit() {
        let mut g = game();
        let rules = RulesConfig::default();
        let mut sink = RecordingSink::new();
        g.participant_mut(s(0)).weapon = Weapon::Volcanic;
        let first = give(&mut g, s(0), EffectKind::Bang);
        let second = give(&mut g, s(0), EffectKind::Bang);

        play(&mut g, &rules, &mut sink, s(0), first);
        assert_eq!(play(&mut g, &rules, &mut sink, s(0), second), PlayOutcome::Resolved);
        assert_eq!(sink.count(ActionKind::Bang), 2);
    }

    #[test]
    fn test_lethal_bang_eliminates_and_clears_hand() {
        let mut g = game();
        let rules = RulesConfig::default().with_offense_damage(4);
        let mut sink = RecordingSink::new();
        give(&mut g, s(1), EffectKind::Beer);
        give(&mut g, s(1), EffectKind::Missed);
        let bang = give(&mut g, s(0), EffectKind::Bang);

        play(&mut g, &rules, &mut sink, s(0), bang);

        let target = g.participant(s(1));
        assert!(target.is_eliminated());
        assert_eq!(target.health(), 0);
        assert_eq!(target.hand_len(), 0);
        assert_eq!(g.deck.out_of_play_len(), 2);
        assert_eq!(sink.count(ActionKind::Eliminate), 1);
    }

    #[test]
    fn test_elimination_credits_the_shooter() {
        let mut g = game();
        let rules = RulesConfig::default().with_offense_damage(4);
        let mut sink = RecordingSink::new();
        let bang = give(&mut g, s(0), EffectKind::Bang);

        play(&mut g, &rules, &mut sink, s(0), bang);

        let eliminate = sink.of_kind(ActionKind::Eliminate).next().unwrap();
        assert_eq!(eliminate.actor, Some(s(0)));
        assert_eq!(eliminate.role, Some(Role::Sheriff));
        assert_eq!(eliminate.target, Some(s(1)));
        assert_eq!((eliminate.health_before, eliminate.health_after), (Some(4), Some(0)));
        assert!(eliminate.aggressive);
    }

    #[test]
    fn test_environment_elimination_has_no_actor() {
        let mut g = game();
        let mut sink = RecordingSink::new();

        EffectResolver::apply_damage(&mut g, &mut sink, None, s(3), 5);

        let eliminate = sink.of_kind(ActionKind::Eliminate).next().unwrap();
        assert_eq!(eliminate.actor, None);
        assert_eq!(eliminate.target, Some(s(3)));
        assert!(!eliminate.aggressive);
    }

    #[test]
    fn test_character_trait_lifts_limit() {
        let mut g = GameBuilder::new()
            .characters([
                "Willy the Kid",
                "Black Jack",
                "Kit Carlson",
                "Sid Ketchum",
                "Vulture Sam",
            ])
            .deal_hands(false)
            .build(21)
            .unwrap();
        let rules = RulesConfig::default();
        let mut sink = RecordingSink::new();
        let first = give(&mut g, s(0), EffectKind::Bang);
        let second = give(&mut g, s(0), EffectKind::Bang);

        play(&mut g, &rules, &mut sink, s(0), first);
        assert_eq!(play(&mut g, &rules, &mut sink, s(0), second), PlayOutcome::Resolved);

        assert_eq!(g.participant(s(0)).weapon, Weapon::Colt45);
        assert_eq!(g.participant(s(0)).offensive_uses(), 2);
        assert_eq!(sink.count(ActionKind::Bang), 2);
    }

    #[test]
    fn test_environment_damage_is_unattributed() {
        let mut g = game();
        let mut sink = RecordingSink::new();

        let taken = EffectResolver::apply_damage(&mut g, &mut sink, None, s(2), 3);

        assert_eq!((taken.health_before, taken.health_after), (4, 1));
        let event = &sink.events()[0];
        assert_eq!(event.actor, None);
        assert!(!event.aggressive);
    }

    #[test]
    fn test_core_set_discards_everything_else() {
        let mut g = game();
        let rules = RulesConfig::default();
        let mut sink = RecordingSink::new();
        let beer = give(&mut g, s(0), EffectKind::Beer);
        let scope = give(&mut g, s(0), EffectKind::Scope);
        g.participant_mut(s(0)).take_damage(1);

        play(&mut g, &rules, &mut sink, s(0), beer);
        play(&mut g, &rules, &mut sink, s(0), scope);

        assert_eq!(g.participant(s(0)).health(), 4);
        assert_eq!(g.participant(s(0)).equipment.scope, 0);
        assert_eq!(g.deck.discard_pile_len(), 2);
        assert_eq!(sink.count(ActionKind::PlayCard), 2);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_extended_equipment() {
        let mut g = game();
        let rules = RulesConfig::default().with_effect_set(EffectSet::Extended);
        let mut sink = RecordingSink::new();
        let rifle = give(&mut g, s(0), EffectKind::Weapon(Weapon::Winchester));
        let scope = give(&mut g, s(0), EffectKind::Scope);
        let spare = give(&mut g, s(0), EffectKind::Scope);

        play(&mut g, &rules, &mut sink, s(0), rifle);
        play(&mut g, &rules, &mut sink, s(0), scope);
        play(&mut g, &rules, &mut sink, s(0), spare);

        let p = g.participant(s(0));
        assert_eq!(p.weapon, Weapon::Winchester);
        assert_eq!(p.equipment.scope, 1);
        assert_eq!(sink.count(ActionKind::Equip), 2);
        assert_eq!(g.deck.discard_pile_len(), 3);
    }

    #[test]
    fn test_extended_beer_and_draws() {
        let mut g = game();
        let rules = RulesConfig::default().with_effect_set(EffectSet::Extended);
        let mut sink = RecordingSink::new();
        g.participant_mut(s(3)).take_damage(2);
        let beer = give(&mut g, s(3), EffectKind::Beer);
        let wells = give(&mut g, s(3), EffectKind::WellsFargo);

        play(&mut g, &rules, &mut sink, s(3), beer);
        play(&mut g, &rules, &mut sink, s(3), wells);

        assert_eq!(g.participant(s(3)).health(), 3);
        assert_eq!(g.participant(s(3)).hand_len(), 3);
        assert_eq!(sink.count(ActionKind::Draw), 3);
    }

    #[test]
    fn test_extended_jail_skips_sheriff_and_self() {
        let mut g = game();
        let rules = RulesConfig::default().with_effect_set(EffectSet::Extended);
        let mut sink = RecordingSink::new();
        let jail = give(&mut g, s(2), EffectKind::Jail);

        play(&mut g, &rules, &mut sink, s(2), jail);

        assert!(g.participant(s(1)).hazards.jailed);
        assert!(!g.participant(s(0)).hazards.jailed);
        let event = sink.of_kind(ActionKind::Jailed).next().unwrap();
        assert_eq!(event.target, Some(s(1)));
    }

    #[test]
    fn test_extended_dynamite_only_once() {
        let mut g = game();
        let rules = RulesConfig::default().with_effect_set(EffectSet::Extended);
        let mut sink = RecordingSink::new();
        g.participant_mut(s(4)).hazards.dynamite = true;
        let dynamite = give(&mut g, s(0), EffectKind::Dynamite);

        play(&mut g, &rules, &mut sink, s(0), dynamite);

        assert!(!g.participant(s(0)).hazards.dynamite);
        assert_eq!(sink.count(ActionKind::DynamitePlaced), 0);
        assert_eq!(g.deck.discard_pile_len(), 1);
    }

    #[test]
    #[should_panic(expected = "does not hold")]
    fn test_playing_unheld_card_panics() {
        let mut g = game();
        let rules = RulesConfig::default();
        let mut sink = RecordingSink::new();
        let card = Card::new(Suit::Hearts, Rank::Ace, EffectKind::Beer);
        play(&mut g, &rules, &mut sink, s(0), card);
    }
}

//! Decision policies for card and target selection.
//!
//! Policies are trait-based so the engine never changes when the strategy
//! does:
//! - `UniformRandomPolicy`: uniform choice using the episode RNG
//! - `FirstChoicePolicy`: always the first option (deterministic tests)
//!
//! A policy receives a copy of the legal options and the episode RNG and
//! returns an index into the options. Returning an out-of-bounds index is a
//! programming error; the engine panics on it.

use crate::cards::Card;
use crate::core::{GameRng, SeatId};

/// Chooses among legal options on behalf of a participant.
pub trait DecisionPolicy {
    /// Pick the next card to attempt in the play phase.
    ///
    /// `options` is never empty.
    fn choose_card(&mut self, seat: SeatId, options: &[Card], rng: &mut GameRng) -> usize;

    /// Pick a target for `card` among `candidates`.
    ///
    /// `candidates` is never empty.
    fn choose_target(
        &mut self,
        seat: SeatId,
        card: &Card,
        candidates: &[SeatId],
        rng: &mut GameRng,
    ) -> usize;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for &mut P {
    fn choose_card(&mut self, seat: SeatId, options: &[Card], rng: &mut GameRng) -> usize {
        (**self).choose_card(seat, options, rng)
    }

    fn choose_target(
        &mut self,
        seat: SeatId,
        card: &Card,
        candidates: &[SeatId],
        rng: &mut GameRng,
    ) -> usize {
        (**self).choose_target(seat, card, candidates, rng)
    }
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn choose_card(&mut self, seat: SeatId, options: &[Card], rng: &mut GameRng) -> usize {
        (**self).choose_card(seat, options, rng)
    }

    fn choose_target(
        &mut self,
        seat: SeatId,
        card: &Card,
        candidates: &[SeatId],
        rng: &mut GameRng,
    ) -> usize {
        (**self).choose_target(seat, card, candidates, rng)
    }
}

/// Uniform random selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandomPolicy;

impl DecisionPolicy for UniformRandomPolicy {
    fn choose_card(&mut self, _seat: SeatId, options: &[Card], rng: &mut GameRng) -> usize {
        rng.pick_index(options.len())
    }

    fn choose_target(
        &mut self,
        _seat: SeatId,
        _card: &Card,
        candidates: &[SeatId],
        rng: &mut GameRng,
    ) -> usize {
        rng.pick_index(candidates.len())
    }
}

/// Always picks the first option.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoicePolicy;

impl DecisionPolicy for FirstChoicePolicy {
    fn choose_card(&mut self, _seat: SeatId, _options: &[Card], _rng: &mut GameRng) -> usize {
        0
    }

    fn choose_target(
        &mut self,
        _seat: SeatId,
        _card: &Card,
        _candidates: &[SeatId],
        _rng: &mut GameRng,
    ) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{EffectKind, Rank, Suit};

    fn cards() -> Vec<Card> {
        vec![
            Card::new(Suit::Spades, Rank::Ace, EffectKind::Bang),
            Card::new(Suit::Hearts, Rank::Two, EffectKind::Beer),
            Card::new(Suit::Clubs, Rank::Ten, EffectKind::Missed),
        ]
    }

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut rng = GameRng::new(3);
        let mut policy = UniformRandomPolicy;
        let options = cards();

        for _ in 0..100 {
            let i = policy.choose_card(SeatId::new(0), &options, &mut rng);
            assert!(i < options.len());
        }
    }

    #[test]
    fn test_uniform_covers_every_option() {
        let mut rng = GameRng::new(3);
        let mut policy = UniformRandomPolicy;
        let candidates = [SeatId::new(1), SeatId::new(2), SeatId::new(4)];
        let card = cards()[0];

        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[policy.choose_target(SeatId::new(0), &card, &candidates, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_first_choice() {
        let mut rng = GameRng::new(0);
        let mut policy = FirstChoicePolicy;
        assert_eq!(policy.choose_card(SeatId::new(2), &cards(), &mut rng), 0);
    }

    #[test]
    fn test_boxed_policy() {
        let mut rng = GameRng::new(0);
        let mut policy: Box<dyn DecisionPolicy> = Box::new(FirstChoicePolicy);
        assert_eq!(policy.choose_card(SeatId::new(2), &cards(), &mut rng), 0);
    }
}

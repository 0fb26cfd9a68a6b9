//! Line-of-sight between seats.
//!
//! Distances are measured around the ring of living participants only, so
//! an elimination shortens every path that crossed the eliminated seat.
//! Nothing here is cached; callers recompute per query.

use crate::core::SeatId;
use crate::game::Game;

/// Minimal clockwise or counter-clockwise hop count between two living seats.
///
/// Eliminated seats are skipped entirely. Distance to self is 0.
#[must_use]
pub fn seat_distance(game: &Game, from: SeatId, to: SeatId) -> u32 {
    assert!(game.is_alive(from), "{} is eliminated and has no position", from);
    assert!(game.is_alive(to), "{} is eliminated and has no position", to);

    if from == to {
        return 0;
    }

    let living = game.living_seats();
    let ring = living.len();
    let position = |seat: SeatId| living.iter().position(|&s| s == seat).unwrap_or(0);

    let a = position(from);
    let b = position(to);
    let clockwise = (b + ring - a) % ring;
    clockwise.min(ring - clockwise) as u32
}

/// Seat distance adjusted by the defender's mustang and the attacker's scope.
///
/// Never less than 1.
///
/// ```
/// use bang_sim::game::GameBuilder;
/// use bang_sim::core::SeatId;
/// use bang_sim::rules::effective_distance;
///
/// let game = GameBuilder::new()
///     .characters(["Bart Cassidy", "Black Jack", "Kit Carlson", "Sid Ketchum", "Vulture Sam"])
///     .build(1)
///     .unwrap();
///
/// assert_eq!(effective_distance(&game, SeatId::new(0), SeatId::new(1)), 1);
/// assert_eq!(effective_distance(&game, SeatId::new(0), SeatId::new(2)), 2);
/// assert_eq!(effective_distance(&game, SeatId::new(0), SeatId::new(3)), 2);
/// ```
#[must_use]
pub fn effective_distance(game: &Game, attacker: SeatId, defender: SeatId) -> u32 {
    let seats = i64::from(seat_distance(game, attacker, defender));
    let mustang = i64::from(game.participant(defender).equipment.mustang);
    let scope = i64::from(game.participant(attacker).equipment.scope);

    (seats + mustang - scope).max(1) as u32
}

/// Living seats other than `attacker` whose effective distance is within `range`.
///
/// Returned in seat order.
#[must_use]
pub fn targets_in_range(game: &Game, attacker: SeatId, range: u32) -> Vec<SeatId> {
    game.living_seats()
        .into_iter()
        .filter(|&seat| seat != attacker)
        .filter(|&seat| effective_distance(game, attacker, seat) <= range)
        .collect()
}

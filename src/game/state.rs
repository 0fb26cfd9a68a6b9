//! Game state for one episode, and its builder.
//!
//! A `Game` owns the five participants (seat order never changes), the
//! shared deck, the episode RNG, the turn counter, the active-seat pointer
//! and the per-seat "turns survived" counters.

use tracing::debug;

use super::characters::{CharacterRoster, CharacterTable, CharacterTraits};
use super::participant::{Participant, Role};
use crate::cards::{Card, Deck};
use crate::core::{GameRng, SeatId, SeatMap, SetupError, SEAT_COUNT};
use crate::events::{ActionKind, EventSink, GameEvent};

/// State of one episode.
#[derive(Clone, Debug)]
pub struct Game {
    id: u64,
    participants: SeatMap<Participant>,
    /// Shared deck.
    pub deck: Deck,
    /// Episode RNG. Every random choice in the episode draws from it.
    pub rng: GameRng,
    turn: u32,
    current: SeatId,
    turns_survived: SeatMap<u32>,
}

impl Game {
    /// Assemble a game from already-seated participants.
    ///
    /// Participant `i` must sit in seat `i`. The first turn goes to the Sheriff.
    #[must_use]
    pub fn new(id: u64, participants: Vec<Participant>, deck: Deck, rng: GameRng) -> Self {
        assert_eq!(
            participants.len(),
            SEAT_COUNT,
            "A game needs exactly {} participants",
            SEAT_COUNT
        );
        for (i, p) in participants.iter().enumerate() {
            assert_eq!(p.seat.index(), i, "Participant for {} sits at index {}", p.seat, i);
        }

        let participants = SeatMap::from_vec(participants);
        let current = participants
            .iter()
            .find(|(_, p)| p.role == Role::Sheriff)
            .map_or(SeatId::new(0), |(seat, _)| seat);

        Self {
            id,
            participants,
            deck,
            rng,
            turn: 0,
            current,
            turns_survived: SeatMap::with_value(SEAT_COUNT, 0),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Seat whose turn it is (or is next).
    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current
    }

    /// Move the active-seat pointer.
    pub fn set_current_seat(&mut self, seat: SeatId) {
        self.current = seat;
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.participants.seat_count()
    }

    // === Participants ===

    #[must_use]
    pub fn participant(&self, seat: SeatId) -> &Participant {
        &self.participants[seat]
    }

    pub fn participant_mut(&mut self, seat: SeatId) -> &mut Participant {
        &mut self.participants[seat]
    }

    /// Participants in seat order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    #[must_use]
    pub fn is_alive(&self, seat: SeatId) -> bool {
        self.participants[seat].is_alive()
    }

    /// Living seats in seat order.
    #[must_use]
    pub fn living_seats(&self) -> Vec<SeatId> {
        self.participants
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(seat, _)| seat)
            .collect()
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.participants().filter(|p| p.is_alive()).count()
    }

    /// Whether any living participant has `role`.
    #[must_use]
    pub fn role_alive(&self, role: Role) -> bool {
        self.participants().any(|p| p.role == role && p.is_alive())
    }

    /// The first living seat clockwise of `from`, not counting `from` itself.
    #[must_use]
    pub fn next_living_seat(&self, from: SeatId) -> Option<SeatId> {
        let count = self.seat_count();
        let mut seat = from;
        for _ in 1..count {
            seat = seat.clockwise(count);
            if self.is_alive(seat) {
                return Some(seat);
            }
        }
        None
    }

    // === Counters ===

    /// Turns survived by one seat.
    #[must_use]
    pub fn turns_survived(&self, seat: SeatId) -> u32 {
        self.turns_survived[seat]
    }

    /// Turns survived by every seat.
    #[must_use]
    pub fn turns_survived_map(&self) -> &SeatMap<u32> {
        &self.turns_survived
    }

    /// Count a new turn: bump the turn counter and every living seat's survival.
    pub(crate) fn begin_turn(&mut self) {
        self.turn += 1;
        for (seat, p) in self.participants.iter() {
            if p.is_alive() {
                self.turns_survived[seat] += 1;
            }
        }
    }

    /// Cards across the deck's piles and every hand. Constant for an episode.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.total() + self.participants().map(Participant::hand_len).sum::<usize>()
    }

    // === Events ===

    /// An event attributed to `seat`, stamped with this game's id and turn.
    #[must_use]
    pub fn event(&self, seat: SeatId, action: ActionKind) -> GameEvent {
        GameEvent::new(self.id, self.turn, action).by(&self.participants[seat])
    }

    /// An event with no acting seat.
    #[must_use]
    pub fn environment_event(&self, action: ActionKind) -> GameEvent {
        GameEvent::new(self.id, self.turn, action)
    }

    // === Drawing ===

    /// Draw from the deck, reporting a reshuffle if one happened.
    pub fn draw_from_deck<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Option<Card> {
        let reshuffles = self.deck.reshuffles();
        let card = self.deck.draw(&mut self.rng);
        if self.deck.reshuffles() != reshuffles {
            sink.record(self.environment_event(ActionKind::Reshuffle));
        }
        card
    }

    /// Draw one card into a living participant's hand.
    pub fn draw_into_hand<S>(&mut self, seat: SeatId, sink: &mut S) -> Option<Card>
    where
        S: EventSink + ?Sized,
    {
        assert!(self.is_alive(seat), "{} is eliminated and cannot draw", seat);
        let card = self.draw_from_deck(sink)?;
        self.participants[seat].add_to_hand(card);
        sink.record(self.event(seat, ActionKind::Draw).with_card(card));
        Some(card)
    }

    /// Flip one card for a hazard check. It goes straight to the discard pile.
    pub fn draw_check<S>(&mut self, seat: SeatId, sink: &mut S) -> Option<Card>
    where
        S: EventSink + ?Sized,
    {
        let card = self.draw_from_deck(sink)?;
        self.deck.discard(card);
        sink.record(self.event(seat, ActionKind::DrawCheck).with_card(card));
        Some(card)
    }
}

/// Builder for a five-seat game.
///
/// ```
/// use bang_sim::game::{GameBuilder, Role};
/// use bang_sim::core::SeatId;
///
/// let game = GameBuilder::new().game_id(3).build(42).unwrap();
///
/// assert_eq!(game.participant(SeatId::new(0)).role, Role::Sheriff);
/// assert_eq!(game.current_seat(), SeatId::new(0));
/// assert_eq!(game.card_count(), 80);
/// ```
pub struct GameBuilder {
    game_id: u64,
    roles: Vec<Role>,
    table: Box<dyn CharacterTable>,
    characters: Option<Vec<String>>,
    deck: Option<Vec<Card>>,
    deal_hands: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            game_id: 1,
            roles: Role::FIVE_SEAT_LAYOUT.to_vec(),
            table: Box::new(CharacterRoster::base()),
            characters: None,
            deck: None,
            deal_hands: true,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_id(mut self, id: u64) -> Self {
        self.game_id = id;
        self
    }

    /// Roles by seat. Must be the five-seat role multiset.
    pub fn roles(mut self, roles: impl Into<Vec<Role>>) -> Self {
        self.roles = roles.into();
        self
    }

    /// Character table to draw characters from.
    pub fn character_table(mut self, table: impl CharacterTable + 'static) -> Self {
        self.table = Box::new(table);
        self
    }

    /// Fix the characters by seat instead of sampling them.
    pub fn characters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Use this draw pile, unshuffled (last card on top), instead of the standard deck.
    pub fn deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = Some(cards);
        self
    }

    /// Whether each participant is dealt cards equal to their starting health.
    pub fn deal_hands(mut self, deal: bool) -> Self {
        self.deal_hands = deal;
        self
    }

    /// Build the game with a fresh RNG from `seed`.
    pub fn build(self, seed: u64) -> Result<Game, SetupError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the game, taking ownership of `rng` as the episode RNG.
    pub fn build_with_rng(self, mut rng: GameRng) -> Result<Game, SetupError> {
        let mut sorted = self.roles.clone();
        sorted.sort();
        let mut expected = Role::FIVE_SEAT_LAYOUT.to_vec();
        expected.sort();
        if sorted != expected {
            return Err(SetupError::InvalidRoleLayout(self.roles));
        }

        let traits = self.pick_characters(&mut rng)?;

        let participants: Vec<_> = SeatId::all(SEAT_COUNT)
            .zip(self.roles.iter().zip(traits.iter()))
            .map(|(seat, (&role, traits))| Participant::new(seat, role, traits))
            .collect();

        let deck = match self.deck {
            Some(cards) => Deck::new(cards),
            None => Deck::standard(&mut rng),
        };

        let mut game = Game::new(self.game_id, participants, deck, rng);

        if self.deal_hands {
            for seat in SeatId::all(SEAT_COUNT) {
                for _ in 0..game.participant(seat).health() {
                    let Some(card) = game.deck.draw(&mut game.rng) else {
                        break;
                    };
                    game.participant_mut(seat).add_to_hand(card);
                }
            }
        }

        debug!(game = game.id, seed = game.rng.seed(), "game set up");
        Ok(game)
    }

    fn pick_characters(&self, rng: &mut GameRng) -> Result<Vec<CharacterTraits>, SetupError> {
        match &self.characters {
            Some(names) => {
                if names.len() != SEAT_COUNT {
                    return Err(SetupError::CharacterCount {
                        expected: SEAT_COUNT,
                        actual: names.len(),
                    });
                }
                let mut picked: Vec<CharacterTraits> = Vec::with_capacity(SEAT_COUNT);
                for name in names {
                    if picked.iter().any(|t| &t.name == name) {
                        return Err(SetupError::DuplicateCharacter(name.clone()));
                    }
                    let traits = self
                        .table
                        .lookup(name)
                        .ok_or_else(|| SetupError::UnknownCharacter(name.clone()))?;
                    picked.push(traits.clone());
                }
                Ok(picked)
            }
            None => {
                let all = self.table.characters();
                if all.len() < SEAT_COUNT {
                    return Err(SetupError::NotEnoughCharacters {
                        available: all.len(),
                        needed: SEAT_COUNT,
                    });
                }
                Ok(rng
                    .sample_indices(all.len(), SEAT_COUNT)
                    .into_iter()
                    .map(|i| all[i].clone())
                    .collect())
            }
        }
    }
}

//! Event sinks.
//!
//! The engine calls `EventSink::record` synchronously and never looks at how
//! events are stored. Provided sinks:
//! - `NoopSink`: drops everything
//! - `RecordingSink`: keeps events in memory (persistent vector, O(1) clone)
//! - `TracingSink`: forwards events to `tracing`
//! - `JsonLinesSink`: writes one JSON object per line
//!
//! A pair `(A, B)` of sinks records to both.

use std::io::{self, Write};

use im::Vector;

use super::event::{ActionKind, GameEvent};

/// Receiver of game events.
pub trait EventSink {
    fn record(&mut self, event: GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: GameEvent) {
        (**self).record(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&mut self, event: GameEvent) {
        (**self).record(event);
    }
}

impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn record(&mut self, event: GameEvent) {
        self.0.record(event.clone());
        self.1.record(event);
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&mut self, _event: GameEvent) {}
}

/// Sink that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vector<GameEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in emission order.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Events of one kind, in emission order.
    pub fn of_kind(&self, action: ActionKind) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.action == action)
    }

    /// Number of events of one kind.
    #[must_use]
    pub fn count(&self, action: ActionKind) -> usize {
        self.of_kind(action).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn record(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}

/// Sink that forwards events to `tracing`.
///
/// Game-over records are logged at `debug`, everything else at `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: GameEvent) {
        if event.action == ActionKind::GameOver {
            tracing::debug!(
                game = event.game_id,
                turn = event.turn,
                seat = ?event.actor,
                role = ?event.role,
                result = ?event.result,
                survived = ?event.turns_survived,
                "game over"
            );
        } else {
            tracing::trace!(
                game = event.game_id,
                turn = event.turn,
                seat = ?event.actor,
                action = ?event.action,
                card = ?event.card,
                target = ?event.target,
                hp_before = ?event.health_before,
                hp_after = ?event.health_after,
                "event"
            );
        }
    }
}

/// Sink that writes each event as one line of JSON.
///
/// Write errors do not interrupt the game. The first one is kept and
/// returned by `finish`; later events are dropped.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Events successfully written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn record(&mut self, event: GameEvent) {
        if self.error.is_some() {
            return;
        }
        match self.write_event(&event) {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

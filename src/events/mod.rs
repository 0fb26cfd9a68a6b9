//! Structured game events and the sinks that receive them.

pub mod event;
pub mod sink;

pub use event::{ActionKind, GameEvent};
pub use sink::{EventSink, JsonLinesSink, NoopSink, RecordingSink, TracingSink};

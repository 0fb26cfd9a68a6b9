//! Card effect resolution and the shared damage helper.

pub mod resolver;

pub use resolver::{EffectResolver, PlayOutcome};

//! Errors raised while setting up a game.
//!
//! Rule violations during play are programming errors and panic instead.

use thiserror::Error;

use crate::game::Role;

/// Reasons a game cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("role layout must be one Sheriff, one Renegade, two Outlaws and one Deputy, got {0:?}")]
    InvalidRoleLayout(Vec<Role>),

    #[error("character table has {available} characters, need {needed}")]
    NotEnoughCharacters { available: usize, needed: usize },

    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    #[error("character chosen twice: {0}")]
    DuplicateCharacter(String),

    #[error("expected {expected} characters, got {actual}")]
    CharacterCount { expected: usize, actual: usize },
}

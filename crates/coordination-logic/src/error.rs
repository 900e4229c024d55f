//! Error types for game construction and turn sequencing

use thiserror::Error;

use crate::player::Player;

/// Errors raised by the coordination engine.
///
/// Malformed agent output is never an error; it resolves through the
/// fallback choice in [`crate::GameState::record_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("action count must be at least 2, got {0}")]
    TooFewActions(usize),

    #[error("action count {requested} exceeds the label pool of {available}")]
    TooManyActions { requested: usize, available: usize },

    #[error("turn out of order: expected {expected}, got {got}")]
    TurnOutOfOrder { expected: Player, got: Player },

    #[error("game {seed} is already complete")]
    GameComplete { seed: u64 },

    #[error("game {seed} already has both actions, extra turn from {player}")]
    ExtraTurn { seed: u64, player: Player },

    #[error("game {seed} has an inconsistent state: {reason}")]
    InvalidState { seed: u64, reason: String },

    #[error("game {seed} cannot be finalized before both players have acted")]
    NotReady { seed: u64 },
}

pub type Result<T> = std::result::Result<T, GameError>;

//! Error types for the episode driver

use coordination_logic::{GameError, Player};
use thiserror::Error;

/// Failure reported by an agent implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("agent failed: {0}")]
pub struct AgentError(pub String);

impl AgentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("{player} could not respond: {source}")]
    Agent {
        player: Player,
        #[source]
        source: AgentError,
    },
}

pub type Result<T> = std::result::Result<T, EnvError>;

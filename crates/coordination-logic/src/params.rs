//! Game parameters: action-space size and the payoff pair

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::menu::MAX_ACTIONS;

/// Immutable description of one coordination game.
///
/// The payoff is symmetric: both players receive the same value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameParams")]
pub struct GameParams {
    action_count: usize,
    coordinate_payoff: f64,
    miscoordinate_payoff: f64,
}

impl GameParams {
    /// Create validated parameters
    ///
    /// Fails when `action_count < 2` or when it exceeds the label pool.
    pub fn new(action_count: usize, coordinate_payoff: f64, miscoordinate_payoff: f64) -> Result<Self> {
        if action_count < 2 {
            return Err(GameError::TooFewActions(action_count));
        }
        if action_count > MAX_ACTIONS {
            return Err(GameError::TooManyActions {
                requested: action_count,
                available: MAX_ACTIONS,
            });
        }
        Ok(Self {
            action_count,
            coordinate_payoff,
            miscoordinate_payoff,
        })
    }

    /// Default payoffs (1 for a match, 0 otherwise) with a custom menu size
    pub fn with_actions(action_count: usize) -> Result<Self> {
        Self::new(action_count, 1.0, 0.0)
    }

    pub fn action_count(&self) -> usize {
        self.action_count
    }

    pub fn coordinate_payoff(&self) -> f64 {
        self.coordinate_payoff
    }

    pub fn miscoordinate_payoff(&self) -> f64 {
        self.miscoordinate_payoff
    }

    /// Payoff for an action pair (same for both players)
    pub fn payoff(&self, player_1_action: &str, player_2_action: &str) -> f64 {
        if player_1_action == player_2_action {
            self.coordinate_payoff
        } else {
            self.miscoordinate_payoff
        }
    }
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            action_count: 2,
            coordinate_payoff: 1.0,
            miscoordinate_payoff: 0.0,
        }
    }
}

#[derive(Deserialize)]
struct RawGameParams {
    action_count: usize,
    coordinate_payoff: f64,
    miscoordinate_payoff: f64,
}

impl TryFrom<RawGameParams> for GameParams {
    type Error = GameError;

    fn try_from(raw: RawGameParams) -> Result<Self> {
        GameParams::new(raw.action_count, raw.coordinate_payoff, raw.miscoordinate_payoff)
    }
}

//! Environment configuration

use coordination_logic::GameParams;
use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

/// Settings for dataset size, game shape and reward weights
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub num_train_examples: u64,
    pub num_eval_examples: u64,
    pub num_actions: usize,
    pub coordinate_payoff: f64,
    pub miscoordinate_payoff: f64,
    /// Weight of the payoff-based reward
    pub coordination_weight: f64,
    /// Weight of the answer-format reward
    pub format_weight: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_train_examples: 1000,
            num_eval_examples: 100,
            num_actions: 10,
            coordinate_payoff: 1.0,
            miscoordinate_payoff: 0.0,
            coordination_weight: 0.9,
            format_weight: 0.1,
        }
    }
}

impl EnvConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EnvConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.game_params()?;
        for (name, weight) in [
            ("coordination_weight", self.coordination_weight),
            ("format_weight", self.format_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EnvError::Config(format!("{name} must be a non-negative number, got {weight}")));
            }
        }
        Ok(())
    }

    /// Game parameters for every episode of this environment
    pub fn game_params(&self) -> Result<GameParams> {
        Ok(GameParams::new(
            self.num_actions,
            self.coordinate_payoff,
            self.miscoordinate_payoff,
        )?)
    }
}

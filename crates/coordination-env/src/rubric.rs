//! Weighted reward over a player's transcript

use coordination_logic::{format_score, score_from_transcript, Message};
use serde::{Deserialize, Serialize};

use crate::config::EnvConfig;

/// Per-component rewards and their weighted total
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub coordination: f64,
    pub format: f64,
    pub total: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rubric {
    coordination_weight: f64,
    format_weight: f64,
}

impl Rubric {
    pub fn new(coordination_weight: f64, format_weight: f64) -> Self {
        Self { coordination_weight, format_weight }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.coordination_weight, config.format_weight)
    }

    pub fn score(&self, messages: &[Message]) -> RewardBreakdown {
        let coordination = score_from_transcript(messages);
        let format = format_score(messages);
        RewardBreakdown {
            coordination,
            format,
            total: self.coordination_weight * coordination + self.format_weight * format,
        }
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self::from_config(&EnvConfig::default())
    }
}

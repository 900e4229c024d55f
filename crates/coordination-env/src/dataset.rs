//! Seed datasets
//!
//! Each example is a game seed plus the observation used as its question.
//! Train and eval seeds are disjoint consecutive ranges.

use std::ops::Range;

use coordination_logic::{GameParams, GameState};
use serde::{Deserialize, Serialize};

use crate::config::EnvConfig;
use crate::error::{EnvError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Initial observation for the game
    pub question: String,
    /// Decimal game seed
    pub answer: String,
}

impl Example {
    pub fn for_seed(params: GameParams, seed: u64) -> Result<Self> {
        let state = GameState::new(params, seed)?;
        Ok(Self {
            question: state.initial_observation(),
            answer: seed.to_string(),
        })
    }

    /// Seed encoded in `answer`
    pub fn seed(&self) -> Result<u64> {
        self.answer
            .trim()
            .parse()
            .map_err(|_| EnvError::Config(format!("example answer {:?} is not a seed", self.answer)))
    }
}

/// Seeds `0..num_train_examples`
pub fn train_seeds(config: &EnvConfig) -> Range<u64> {
    0..config.num_train_examples
}

/// Seeds immediately after the train range
pub fn eval_seeds(config: &EnvConfig) -> Range<u64> {
    let start = config.num_train_examples;
    start..start.saturating_add(config.num_eval_examples)
}

pub fn build_examples(params: GameParams, seeds: Range<u64>) -> Result<Vec<Example>> {
    seeds.map(|seed| Example::for_seed(params, seed)).collect()
}

pub fn train_dataset(config: &EnvConfig) -> Result<Vec<Example>> {
    build_examples(config.game_params()?, train_seeds(config))
}

pub fn eval_dataset(config: &EnvConfig) -> Result<Vec<Example>> {
    build_examples(config.game_params()?, eval_seeds(config))
}

//! Coordination Env
//!
//! Host-side driver for the pure coordination game: configuration, system
//! prompts, seed datasets, the agent seam, the two-turn episode loop and the
//! weighted rubric. Game rules live in `coordination-logic`.

pub mod agent;
pub mod config;
pub mod dataset;
pub mod episode;
pub mod error;
pub mod prompt;
pub mod rubric;

pub use agent::{Agent, ScriptedAgent};
pub use config::EnvConfig;
pub use dataset::{eval_dataset, train_dataset, Example};
pub use episode::{CoordinationEnv, Episode};
pub use error::{AgentError, EnvError, Result};
pub use prompt::system_prompt;
pub use rubric::{RewardBreakdown, Rubric};

//! Coordination Logic
//!
//! Core engine for a two-player pure coordination game played by language
//! model agents. Both players pick one label from a shared menu without
//! seeing each other's pick and are paid only when the picks match.
//! This crate is compiled to:
//! - Native (for the episode driver and reward computation)
//! - WASM (for front-end game replay)

mod answer;
mod error;
mod game;
mod menu;
mod params;
mod player;
mod random;
mod reward;

#[cfg(feature = "wasm")]
mod wasm;

pub use answer::{extract_answer, find_tagged_token, has_answer_tag, ANSWER_CLOSE, ANSWER_OPEN};
pub use error::{GameError, Result};
pub use game::{run_game, ActionSource, GameResult, GameState, Phase, TurnOutcome};
pub use menu::{base_menu, player_view, render_list, ACTION_POOL, MAX_ACTIONS};
pub use params::GameParams;
pub use player::Player;
pub use random::SeededRng;
pub use reward::{format_score, score_from_transcript, Message, Role, COMPLETE_MARKER};

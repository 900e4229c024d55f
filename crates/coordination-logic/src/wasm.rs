//! WASM bindings for front-end game replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{extract_answer, run_game, score_from_transcript, GameParams, GameState, Message, Player};

fn parse_params(params_json: &str) -> Result<GameParams, JsError> {
    serde_json::from_str(params_json).map_err(|e| JsError::new(&format!("Invalid game params: {}", e)))
}

fn parse_player(player: &str) -> Result<Player, JsError> {
    match player {
        "player_1" => Ok(Player::One),
        "player_2" => Ok(Player::Two),
        _ => Err(JsError::new(&format!("Unknown player: {}", player))),
    }
}

/// Replay a game from both players' raw responses
///
/// # Arguments
/// * `params_json` - JSON serialized GameParams
/// * `seed` - Game seed
/// * `player_1_text` - Raw output of player 1
/// * `player_2_text` - Raw output of player 2
///
/// # Returns
/// JSON serialized GameResult
#[wasm_bindgen]
pub fn replay_game(
    params_json: &str,
    seed: u64,
    player_1_text: &str,
    player_2_text: &str,
) -> Result<JsValue, JsError> {
    let params = parse_params(params_json)?;
    let state = run_game(params, seed, player_1_text, player_2_text)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&state.result())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Observation text a player sees for a given game
#[wasm_bindgen]
pub fn get_player_observation(params_json: &str, seed: u64, player: &str) -> Result<String, JsError> {
    let params = parse_params(params_json)?;
    let player = parse_player(player)?;
    let state = GameState::new(params, seed).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(state.observation_for(player))
}

/// Extract a menu label from raw output, `undefined` when there is none
#[wasm_bindgen]
pub fn get_extracted_answer(text: &str, labels: Vec<String>) -> Option<String> {
    extract_answer(text, &labels)
}

/// Score a JSON serialized transcript (array of `{role, content}`)
#[wasm_bindgen]
pub fn get_transcript_score(messages_json: &str) -> Result<f64, JsError> {
    let messages: Vec<Message> = serde_json::from_str(messages_json)
        .map_err(|e| JsError::new(&format!("Invalid transcript: {}", e)))?;
    Ok(score_from_transcript(&messages))
}

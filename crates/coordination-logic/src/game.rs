//! Game state machine
//!
//! One `GameState` per seed. Player 1 acts, then player 2, then the game is
//! finalized. The two turns are taken sequentially but neither player's
//! observation depends on the other's move, so the game plays as if both
//! moved simultaneously.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::answer::extract_answer;
use crate::error::{GameError, Result};
use crate::menu::{base_menu, player_view, render_list};
use crate::params::GameParams;
use crate::player::Player;
use crate::random::SeededRng;

/// Where a game is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PendingPlayer1,
    PendingPlayer2,
    /// Both actions recorded, payoff not yet computed
    ReadyToFinalize,
    Complete,
}

/// How a recorded action was obtained
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    /// Parsed from a tagged answer in the agent's output
    Parsed,
    /// Substituted from the player's fallback stream
    Fallback,
}

/// Result of one `record_turn` call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: Player,
    pub action: String,
    pub source: ActionSource,
}

/// Final payload published once both players have acted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_complete: bool,
    pub coordinated: bool,
    pub player_1_action: String,
    pub player_2_action: String,
    pub payoff: f64,
}

impl GameResult {
    /// Terminal message text: a header followed by the pretty-printed payload
    pub fn final_observation(&self) -> String {
        let payload = serde_json::json!({
            "game_complete": self.game_complete,
            "coordinated": self.coordinated,
            "player_1_action": self.player_1_action,
            "player_2_action": self.player_2_action,
            "payoff": self.payoff,
        });
        format!("Game Complete!\n\n{:#}", payload)
    }
}

/// Mutable state of a single game
///
/// Serializable so a host can park a game while it waits on an agent and
/// resume it later with identical behavior. Deserialization rejects states
/// the turn sequence could not have produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    seed: u64,
    params: GameParams,
    action_menu: Vec<String>,
    player_1_action: Option<String>,
    player_2_action: Option<String>,
    result: Option<GameResult>,
}

impl GameState {
    /// Start a game: derive the shared menu, no actions recorded
    pub fn new(params: GameParams, seed: u64) -> Result<Self> {
        let action_menu = base_menu(params.action_count())?;
        Ok(Self {
            seed,
            params,
            action_menu,
            player_1_action: None,
            player_2_action: None,
            result: None,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Shared menu in base (unshuffled) order
    pub fn action_menu(&self) -> &[String] {
        &self.action_menu
    }

    pub fn action(&self, player: Player) -> Option<&str> {
        match player {
            Player::One => self.player_1_action.as_deref(),
            Player::Two => self.player_2_action.as_deref(),
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.result, &self.player_1_action, &self.player_2_action) {
            (Some(_), _, _) => Phase::Complete,
            (None, None, _) => Phase::PendingPlayer1,
            (None, Some(_), None) => Phase::PendingPlayer2,
            (None, Some(_), Some(_)) => Phase::ReadyToFinalize,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Final payload, once the game is complete
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn coordinated(&self) -> Option<bool> {
        self.result.as_ref().map(|r| r.coordinated)
    }

    pub fn payoff(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.payoff)
    }

    /// Menu in the order `player` sees it
    pub fn menu_for(&self, player: Player) -> Vec<String> {
        player_view(&self.action_menu, self.seed, player)
    }

    /// Observation shown to `player`; never reveals the other player's move
    pub fn observation_for(&self, player: Player) -> String {
        format!(
            "Choose your action. Available actions: {}",
            render_list(&self.menu_for(player))
        )
    }

    /// Observation used as the dataset question, in base order
    pub fn initial_observation(&self) -> String {
        format!(
            "Coordination game. Choose one action from: {}",
            render_list(&self.action_menu)
        )
    }

    /// Action drawn from the player's fallback stream
    ///
    /// Seeded separately from the menu shuffle so it cannot be predicted from
    /// the observation order.
    pub fn fallback_action(&self, player: Player) -> Option<&str> {
        let mut rng = SeededRng::new(player.fallback_seed(self.seed));
        rng.choose(&self.action_menu).map(String::as_str)
    }

    /// Resolve `raw_text` into an action for `player` and record it
    ///
    /// Unparseable output falls back to a deterministic menu choice. Turns
    /// out of order, or after both actions are in, are rejected without
    /// touching the state.
    pub fn record_turn(&mut self, player: Player, raw_text: &str) -> Result<TurnOutcome> {
        let expected = match self.phase() {
            Phase::PendingPlayer1 => Player::One,
            Phase::PendingPlayer2 => Player::Two,
            Phase::ReadyToFinalize => {
                return Err(GameError::ExtraTurn { seed: self.seed, player });
            }
            Phase::Complete => return Err(GameError::GameComplete { seed: self.seed }),
        };
        if player != expected {
            return Err(GameError::TurnOutOfOrder { expected, got: player });
        }

        let (action, source) = match extract_answer(raw_text, &self.action_menu) {
            Some(action) => (action, ActionSource::Parsed),
            None => {
                let action = self
                    .fallback_action(player)
                    .ok_or_else(|| GameError::InvalidState {
                        seed: self.seed,
                        reason: "empty action menu".to_string(),
                    })?
                    .to_string();
                warn!(
                    seed = self.seed,
                    player = %player,
                    fallback = %action,
                    "no valid answer in agent output, using fallback action"
                );
                (action, ActionSource::Fallback)
            }
        };

        debug!(seed = self.seed, player = %player, action = %action, ?source, "turn recorded");

        match player {
            Player::One => self.player_1_action = Some(action.clone()),
            Player::Two => self.player_2_action = Some(action.clone()),
        }

        Ok(TurnOutcome { player, action, source })
    }

    /// Compute the payoff and close the game
    ///
    /// Fails if either action is missing or the game is already complete.
    pub fn finalize(&mut self) -> Result<&GameResult> {
        if self.result.is_some() {
            return Err(GameError::GameComplete { seed: self.seed });
        }
        let (Some(p1), Some(p2)) = (&self.player_1_action, &self.player_2_action) else {
            return Err(GameError::NotReady { seed: self.seed });
        };

        let coordinated = p1 == p2;
        let payoff = self.params.payoff(p1, p2);
        debug!(seed = self.seed, coordinated, payoff, "game finalized");

        let result = self.result.insert(GameResult {
            game_complete: true,
            coordinated,
            player_1_action: p1.clone(),
            player_2_action: p2.clone(),
            payoff,
        });
        Ok(&*result)
    }

    /// Terminal message text, once the game is complete
    pub fn final_observation(&self) -> Option<String> {
        self.result.as_ref().map(GameResult::final_observation)
    }
}

#[derive(Deserialize)]
struct RawGameState {
    seed: u64,
    params: GameParams,
    action_menu: Vec<String>,
    player_1_action: Option<String>,
    player_2_action: Option<String>,
    result: Option<GameResult>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let seed = raw.seed;
        let invalid = |reason: String| GameError::InvalidState { seed, reason };

        if raw.action_menu != base_menu(raw.params.action_count())? {
            return Err(invalid("action menu does not match the game parameters".to_string()));
        }
        for (player, action) in [(Player::One, &raw.player_1_action), (Player::Two, &raw.player_2_action)] {
            if let Some(action) = action {
                if !raw.action_menu.contains(action) {
                    return Err(invalid(format!("{player} action {action:?} is not on the menu")));
                }
            }
        }
        if raw.player_1_action.is_none() && raw.player_2_action.is_some() {
            return Err(invalid("player_2 acted before player_1".to_string()));
        }

        if let Some(result) = &raw.result {
            let (Some(p1), Some(p2)) = (&raw.player_1_action, &raw.player_2_action) else {
                return Err(invalid("result present before both players acted".to_string()));
            };
            let consistent = result.game_complete
                && result.player_1_action == *p1
                && result.player_2_action == *p2
                && result.coordinated == (p1 == p2)
                && result.payoff == raw.params.payoff(p1, p2);
            if !consistent {
                return Err(invalid("result disagrees with the recorded actions".to_string()));
            }
        }

        Ok(GameState {
            seed,
            params: raw.params,
            action_menu: raw.action_menu,
            player_1_action: raw.player_1_action,
            player_2_action: raw.player_2_action,
            result: raw.result,
        })
    }
}

/// Play a whole game from two raw responses
///
/// Convenience for replays: records player 1, then player 2, then finalizes.
pub fn run_game(params: GameParams, seed: u64, player_1_text: &str, player_2_text: &str) -> Result<GameState> {
    let mut state = GameState::new(params, seed)?;
    state.record_turn(Player::One, player_1_text)?;
    state.record_turn(Player::Two, player_2_text)?;
    state.finalize()?;
    Ok(state)
}

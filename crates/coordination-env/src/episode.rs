//! Two-turn episode driver
//!
//! Walks one game through the fixed protocol: player 1 observes and replies,
//! player 2 observes and replies, the game is finalized and the payload is
//! appended to both histories. Each player's history is private, so player 2
//! never sees what player 1 chose.

use coordination_logic::{GameParams, GameState, Message, Player, TurnOutcome};
use tracing::{debug, info};

use crate::agent::Agent;
use crate::config::EnvConfig;
use crate::dataset::Example;
use crate::error::{EnvError, Result};
use crate::prompt::system_prompt;
use crate::rubric::{RewardBreakdown, Rubric};

/// Everything produced by one finished game
#[derive(Clone, Debug)]
pub struct Episode {
    pub state: GameState,
    pub turns: Vec<TurnOutcome>,
    histories: [Vec<Message>; 2],
    rewards: [RewardBreakdown; 2],
}

impl Episode {
    /// Full conversation of `player`, system prompt first
    pub fn history(&self, player: Player) -> &[Message] {
        &self.histories[player.turn_index()]
    }

    pub fn reward(&self, player: Player) -> RewardBreakdown {
        self.rewards[player.turn_index()]
    }
}

#[derive(Clone, Debug)]
pub struct CoordinationEnv {
    config: EnvConfig,
    params: GameParams,
    rubric: Rubric,
}

impl CoordinationEnv {
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        let params = config.game_params()?;
        let rubric = Rubric::from_config(&config);
        Ok(Self { config, params, rubric })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Play the game for a dataset example
    pub fn run_example(
        &self,
        example: &Example,
        player_1: &mut dyn Agent,
        player_2: &mut dyn Agent,
    ) -> Result<Episode> {
        self.run_episode(example.seed()?, player_1, player_2)
    }

    /// Play one game to completion
    ///
    /// Agent failures and turn-order violations abort the episode; malformed
    /// replies do not.
    pub fn run_episode(
        &self,
        seed: u64,
        player_1: &mut dyn Agent,
        player_2: &mut dyn Agent,
    ) -> Result<Episode> {
        let mut state = GameState::new(self.params, seed)?;
        let mut histories = Player::ALL.map(|player| vec![Message::system(system_prompt(&self.params, player))]);
        let mut turns = Vec::with_capacity(2);

        for player in Player::ALL {
            let agent: &mut dyn Agent = match player {
                Player::One => &mut *player_1,
                Player::Two => &mut *player_2,
            };
            let history = &mut histories[player.turn_index()];
            history.push(Message::user(state.observation_for(player)));

            let reply = agent
                .respond(player, history)
                .map_err(|source| EnvError::Agent { player, source })?;
            history.push(Message::assistant(reply.clone()));

            let outcome = state.record_turn(player, &reply)?;
            debug!(seed, player = %player, action = %outcome.action, "agent turn complete");
            turns.push(outcome);
        }

        let final_text = state.finalize()?.final_observation();
        for history in histories.iter_mut() {
            history.push(Message::user(final_text.clone()));
        }

        let rewards = [
            self.rubric.score(&histories[0]),
            self.rubric.score(&histories[1]),
        ];
        info!(
            seed,
            coordinated = state.coordinated().unwrap_or(false),
            payoff = state.payoff().unwrap_or(0.0),
            "episode complete"
        );

        Ok(Episode { state, turns, histories, rewards })
    }
}

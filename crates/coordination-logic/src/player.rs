//! Player roles and their derived seed streams

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two seats in a game.
///
/// Player 1 always acts first. Each seat owns two derived seed streams:
/// one for the menu shuffle it sees and one for its fallback choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "player_1")]
    One,
    #[serde(rename = "player_2")]
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Stable identifier used in prompts and payloads
    pub fn id(self) -> &'static str {
        match self {
            Player::One => "player_1",
            Player::Two => "player_2",
        }
    }

    /// Position in the turn sequence (0-indexed)
    pub fn turn_index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Offset added to the game seed for this player's menu shuffle
    pub fn shuffle_offset(self) -> u64 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Offset added to the game seed for this player's fallback choice
    pub fn fallback_offset(self) -> u64 {
        match self {
            Player::One => 1000,
            Player::Two => 2000,
        }
    }

    pub fn shuffle_seed(self, seed: u64) -> u64 {
        seed.wrapping_add(self.shuffle_offset())
    }

    pub fn fallback_seed(self, seed: u64) -> u64 {
        seed.wrapping_add(self.fallback_offset())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

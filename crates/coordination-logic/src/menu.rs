//! Action menus: the shared label set and per-player orderings
//!
//! Labels are meaningless letter strings so neither their content nor their
//! position can serve as a focal point between players.

use crate::error::{GameError, Result};
use crate::player::Player;
use crate::random::SeededRng;

/// Fixed pool of candidate labels
pub const ACTION_POOL: [&str; 10] = [
    "qahf", "trxc", "kafn", "afqo", "fpva", "usie", "yicc", "wpus", "nzjo", "vqwp",
];

/// Largest supported menu size
pub const MAX_ACTIONS: usize = ACTION_POOL.len();

/// The unshuffled menu: the first `action_count` labels of the pool
pub fn base_menu(action_count: usize) -> Result<Vec<String>> {
    if action_count < 2 {
        return Err(GameError::TooFewActions(action_count));
    }
    if action_count > MAX_ACTIONS {
        return Err(GameError::TooManyActions {
            requested: action_count,
            available: MAX_ACTIONS,
        });
    }
    Ok(ACTION_POOL[..action_count].iter().map(|label| label.to_string()).collect())
}

/// The ordering of `menu` shown to `player` in game `seed`
///
/// Same `(seed, player)` always yields the same permutation; the two players
/// draw from separate seed streams.
pub fn player_view(menu: &[String], seed: u64, player: Player) -> Vec<String> {
    let mut rng = SeededRng::new(player.shuffle_seed(seed));
    let mut view = menu.to_vec();
    rng.shuffle(&mut view);
    view
}

/// Render labels as a comma-separated list
pub fn render_list(labels: &[String]) -> String {
    labels.join(", ")
}

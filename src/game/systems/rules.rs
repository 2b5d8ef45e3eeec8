use serde::{Deserialize, Serialize};

use crate::game::state::GameSession;

/// Session state after a resolved turn. Both terminal states loop back to
/// `Playing` once the session has been reinitialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    LevelCleared,
    Defeated,
}

/// Defeat takes precedence over a level clear reached on the same turn.
pub fn check_status<D>(session: &GameSession<D>) -> GameStatus {
    if !session.player.is_alive() {
        GameStatus::Defeated
    } else if session.treasures >= session.config.treasure_target {
        GameStatus::LevelCleared
    } else {
        GameStatus::Playing
    }
}

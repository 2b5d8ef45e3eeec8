use thiserror::Error;

use crate::game::types::Tile;

/// Errors surfaced by session setup and turn resolution.
///
/// A move toward a cell outside the grid is not an error: the turn is simply
/// ignored (see [`crate::game::state::TurnOutcome::Ignored`]).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot place {requested} {tile:?} tile(s): only {available} empty cell(s) left")]
    CapacityExceeded {
        tile: Tile,
        requested: usize,
        available: usize,
    },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Turn-based treasure hunt on a fixed square grid.
//!
//! A [`GameSession`] owns the grid, the player and the enemies of the current
//! level. Each submitted move is played to completion: the player steps and
//! resolves the tile it lands on (treasure, health pack or a fight), every
//! enemy takes one step toward the player, then the session checks for defeat
//! or a cleared level and reinitializes itself if needed.
//!
//! The library does no I/O. Callers render [`Snapshot`]s and [`GameEvent`]s
//! through a [`game::systems::Presenter`].

pub mod config;
pub mod game;

pub use config::GameConfig;
pub use game::{
    Dice, Direction, Enemy, GameError, GameEvent, GameSession, LoadedDice, Player, Position,
    RandomDice, Snapshot, Tile, TurnOutcome, TurnReport,
};

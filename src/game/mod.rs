pub mod dice;
pub mod error;
pub mod state;
pub mod types;
#[cfg(test)]
mod tests;

pub mod demo;
pub mod entities;
pub mod grid;
pub mod systems;

pub use dice::{Dice, LoadedDice, RandomDice};
pub use error::GameError;
pub use state::{GameEvent, GameSession, Snapshot, TurnOutcome, TurnReport};
pub use types::{Direction, Enemy, Player, Position, Tile};

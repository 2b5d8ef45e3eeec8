// Demo module for the game. Provides the interactive terminal loop.
pub mod game_loop;

pub use game_loop::*;

//! Game entities module.
//!
//! This module organizes spawning, player and enemy entity logic.

pub mod enemy;
pub mod player;
pub mod spawner;

pub use enemy::*;
pub use player::*;
pub use spawner::*;

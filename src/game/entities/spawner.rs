//! Random entity placement.
//!
//! Entities are placed on empty cells only. The free cells are collected up
//! front and sampled without replacement, so placement either succeeds in one
//! pass or fails with [`GameError::CapacityExceeded`].

use log::debug;

use crate::game::dice::Dice;
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::types::{Enemy, Position, Tile};

/// Place `count` markers of `tile` on distinct empty cells.
/// Returns the chosen positions in placement order.
pub fn spawn_entities<D: Dice>(
    grid: &mut Grid,
    dice: &mut D,
    tile: Tile,
    count: usize,
) -> Result<Vec<Position>, GameError> {
    let mut free = grid.empty_cells();
    if count > free.len() {
        return Err(GameError::CapacityExceeded {
            tile,
            requested: count,
            available: free.len(),
        });
    }

    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = free.swap_remove(dice.pick(free.len()));
        grid.set(pos, tile);
        placed.push(pos);
    }
    debug!("[Spawner] Placed {} {:?} tile(s)", placed.len(), tile);
    Ok(placed)
}

/// Place `count` enemies, each starting with `health`.
pub fn spawn_enemies<D: Dice>(
    grid: &mut Grid,
    dice: &mut D,
    count: usize,
    health: i32,
) -> Result<Vec<Enemy>, GameError> {
    Ok(spawn_entities(grid, dice, Tile::Enemy, count)?
        .into_iter()
        .map(|pos| Enemy::new(pos, health))
        .collect())
}

//! Enemy chase logic.
//!
//! Enemies close in on the player one cell per turn. They never attack here:
//! damage only happens when the player walks into them.

use log::debug;

use crate::game::grid::Grid;
use crate::game::types::{Enemy, Position, Tile};

/// Move every living enemy one sign-of-delta step toward `player`, in storage order.
/// An enemy only moves onto an in-bounds `Empty` cell. Returns how many moved.
pub fn step_enemies(grid: &mut Grid, enemies: &mut [Enemy], player: Position) -> usize {
    let size = grid.size();
    let mut moved = 0;

    for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
        let (dx, dy) = enemy.pos.step_toward(player);
        let Some(target) = enemy.pos.offset(dx, dy, size) else {
            continue;
        };
        if grid.get(target) != Tile::Empty {
            continue;
        }

        grid.set(enemy.pos, Tile::Empty);
        grid.set(target, Tile::Enemy);
        debug!("[Enemies] ({}, {}) -> ({}, {})", enemy.pos.x, enemy.pos.y, target.x, target.y);
        enemy.pos = target;
        moved += 1;
    }
    moved
}

//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as grid dimensions,
//! spawn counts and damage ranges.

use std::ops::Range;

/// Number of rows (and columns) in the square game grid.
pub const GRID_SIZE: usize = 10;

/// Enemies spawned on level 1 are `BASE_ENEMY_COUNT + 1`, one more per level.
pub const BASE_ENEMY_COUNT: usize = 3;

/// Starting health of every enemy, whatever the level.
pub const ENEMY_HEALTH: i32 = 50;

/// Treasures spawned per level.
pub const TREASURE_COUNT: usize = 5;

/// Treasures to collect before the level is cleared.
pub const TREASURE_TARGET: u32 = 5;

/// Health packs spawned per level.
pub const HEALTH_PACK_COUNT: usize = 2;

/// Health restored by a single pack.
pub const HEAL_AMOUNT: i32 = 20;

pub const MAX_HEALTH: i32 = 100;

/// Damage the player deals to an enemy per combat round (end exclusive).
pub const PLAYER_STRIKE: Range<i32> = 10..30;

/// Damage an enemy deals to the player per combat round (end exclusive).
pub const ENEMY_STRIKE: Range<i32> = 5..20;

/// Label appended to the inventory for each treasure picked up.
pub const TREASURE_LABEL: &str = "Treasure";

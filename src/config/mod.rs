/// Main configuration module.
///
/// Holds the gameplay constants and the [`GameConfig`] built from them.
pub mod game;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;

/// Tunables for one game session. Fixed for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: usize,
    pub base_enemy_count: usize,
    pub enemy_health: i32,
    pub treasure_count: usize,
    pub treasure_target: u32,
    pub health_pack_count: usize,
    pub heal_amount: i32,
    pub max_health: i32,
    pub player_strike: Range<i32>,
    pub enemy_strike: Range<i32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: game::GRID_SIZE,
            base_enemy_count: game::BASE_ENEMY_COUNT,
            enemy_health: game::ENEMY_HEALTH,
            treasure_count: game::TREASURE_COUNT,
            treasure_target: game::TREASURE_TARGET,
            health_pack_count: game::HEALTH_PACK_COUNT,
            heal_amount: game::HEAL_AMOUNT,
            max_health: game::MAX_HEALTH,
            player_strike: game::PLAYER_STRIKE,
            enemy_strike: game::ENEMY_STRIKE,
        }
    }
}

impl GameConfig {
    /// Number of enemies spawned on `level`.
    pub fn enemy_count(&self, level: u32) -> usize {
        self.base_enemy_count + level as usize
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_size == 0 {
            return Err(GameError::InvalidConfig("grid size must be at least 1".into()));
        }
        if self.player_strike.is_empty() || self.enemy_strike.is_empty() {
            return Err(GameError::InvalidConfig("damage ranges must not be empty".into()));
        }
        // Combat only ends once someone's health drops, so every strike must hurt.
        if self.player_strike.start < 1 || self.enemy_strike.start < 1 {
            return Err(GameError::InvalidConfig("damage ranges must start at 1 or more".into()));
        }
        if self.treasure_target as usize > self.treasure_count {
            return Err(GameError::InvalidConfig(format!(
                "treasure target {} exceeds the {} treasures spawned per level",
                self.treasure_target, self.treasure_count
            )));
        }
        if self.heal_amount < 0 {
            return Err(GameError::InvalidConfig("heal amount must not be negative".into()));
        }
        if self.max_health <= 0 || self.enemy_health <= 0 {
            return Err(GameError::InvalidConfig("health values must be positive".into()));
        }
        Ok(())
    }
}

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::game::dice::{Dice, RandomDice};
use crate::game::entities::{spawn_enemies, spawn_entities, step_enemies};
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::systems::{CombatReport, GameStatus, check_status, resolve_player_move};
use crate::game::types::{Direction, Enemy, Player, Position, Tile};

/// Something that happened during a turn, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TreasureCollected { total: u32 },
    Healed { amount: i32, health: i32 },
    CombatResolved(CombatReport),
    EnemySlain { at: Position },
    LevelCleared { level: u32 },
    Defeated { level: u32 },
}

/// How a submitted move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Target out of bounds or not a unit step. Nothing changed.
    Ignored,
    Playing,
    /// `completed_level` was cleared; the session now runs the next level.
    LevelCleared { completed_level: u32 },
    /// The player died on `level`; the session restarted at level 1.
    Defeated { level: u32 },
}

/// State handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session_id: Uuid,
    pub level: u32,
    pub turn: u32,
    pub grid: Vec<Vec<Tile>>,
    pub player: Player,
    pub treasures: u32,
    pub treasure_target: u32,
    pub inventory: Vec<String>,
    pub enemies_remaining: usize,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub events: Vec<GameEvent>,
    /// State after enemies moved, before any level-clear or defeat reset.
    pub snapshot: Snapshot,
}

/// One playthrough: the current level's grid, player and enemies plus progress counters.
///
/// Everything except the level counter is rebuilt whenever a level starts.
#[derive(Debug)]
pub struct GameSession<D = RandomDice> {
    pub(crate) id: Uuid,
    pub(crate) config: GameConfig,
    pub(crate) dice: D,
    pub(crate) level: u32,
    pub(crate) turn: u32,
    pub(crate) grid: Grid,
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) treasures: u32,
    pub(crate) inventory: Vec<String>,
}

impl GameSession<RandomDice> {
    /// New level-1 session seeded from the operating system.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_dice(config, RandomDice::from_os_rng())
    }

    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_dice(config, RandomDice::seeded(seed))
    }
}

impl<D: Dice> GameSession<D> {
    pub fn with_dice(config: GameConfig, dice: D) -> Result<Self, GameError> {
        config.validate()?;
        let mut session = GameSession {
            id: Uuid::nil(),
            grid: Grid::new(config.grid_size),
            player: Player::new(Position::new(0, 0), config.max_health),
            config,
            dice,
            level: 1,
            turn: 0,
            enemies: Vec::new(),
            treasures: 0,
            inventory: Vec::new(),
        };
        session.initialize(1)?;
        Ok(session)
    }

    /// Rebuild grid, player, enemies and progress for `level`.
    pub fn initialize(&mut self, level: u32) -> Result<(), GameError> {
        let mut grid = Grid::new(self.config.grid_size);
        let player = Player::new(Position::new(0, 0), self.config.max_health);
        grid.set(player.pos, Tile::Player);

        let enemies = spawn_enemies(
            &mut grid,
            &mut self.dice,
            self.config.enemy_count(level),
            self.config.enemy_health,
        )?;
        spawn_entities(&mut grid, &mut self.dice, Tile::Treasure, self.config.treasure_count)?;
        spawn_entities(&mut grid, &mut self.dice, Tile::HealthPack, self.config.health_pack_count)?;

        self.id = Uuid::new_v4();
        self.level = level;
        self.turn = 0;
        self.grid = grid;
        self.player = player;
        self.enemies = enemies;
        self.treasures = 0;
        self.inventory.clear();

        info!(
            "[GameSession] Started session={} level={} enemies={}",
            self.id,
            self.level,
            self.enemies.len()
        );
        Ok(())
    }

    /// Back to level 1 with a fresh grid.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.initialize(1)
    }

    pub fn submit_move(&mut self, direction: Direction) -> Result<TurnReport, GameError> {
        let (dx, dy) = direction.delta();
        self.move_player(dx, dy)
    }

    /// Play one full turn: player move and interaction, enemy chase, terminal check.
    ///
    /// A level clear or defeat reinitializes the session before returning, which
    /// can fail with [`GameError::CapacityExceeded`] on very high levels.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> Result<TurnReport, GameError> {
        let Some(mut events) = resolve_player_move(self, dx, dy) else {
            return Ok(TurnReport {
                outcome: TurnOutcome::Ignored,
                events: Vec::new(),
                snapshot: self.snapshot(),
            });
        };

        let moved = step_enemies(&mut self.grid, &mut self.enemies, self.player.pos);
        self.turn += 1;
        debug!(
            "[GameSession] session={} turn={} player=({}, {}) health={} enemies_moved={}",
            self.id, self.turn, self.player.pos.x, self.player.pos.y, self.player.health, moved
        );

        let snapshot = self.snapshot();
        let outcome = match check_status(self) {
            GameStatus::Playing => TurnOutcome::Playing,
            GameStatus::Defeated => {
                let level = self.level;
                info!("[GameSession] session={} defeated on level {}", self.id, level);
                events.push(GameEvent::Defeated { level });
                self.restart()?;
                TurnOutcome::Defeated { level }
            }
            GameStatus::LevelCleared => {
                let level = self.level;
                info!("[GameSession] session={} cleared level {}", self.id, level);
                events.push(GameEvent::LevelCleared { level });
                self.initialize(level + 1)?;
                TurnOutcome::LevelCleared { completed_level: level }
            }
        };

        Ok(TurnReport { outcome, events, snapshot })
    }
}

impl<D> GameSession<D> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session_id: self.id,
            level: self.level,
            turn: self.turn,
            grid: self.grid.rows().to_vec(),
            player: self.player.clone(),
            treasures: self.treasures,
            treasure_target: self.config.treasure_target,
            inventory: self.inventory.clone(),
            enemies_remaining: self.enemies.len(),
        }
    }

    pub fn status(&self) -> GameStatus {
        check_status(self)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn treasures(&self) -> u32 {
        self.treasures
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }
}

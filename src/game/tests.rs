use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::dice::{Dice, LoadedDice, RandomDice};
use super::error::GameError;
use super::grid::Grid;
use super::state::{GameEvent, GameSession, Snapshot, TurnOutcome};
use super::types::{Direction, Enemy, Player, Position, Tile};
use crate::config::GameConfig;

/// Session whose board holds only the player, at `player_at`.
fn staged<D: Dice>(dice: D, player_at: Position, health: i32) -> GameSession<D> {
    let mut session = GameSession::with_dice(GameConfig::default(), dice).expect("session");
    session.grid = Grid::new(session.config.grid_size);
    session.grid.set(player_at, Tile::Player);
    session.player = Player::new(player_at, health);
    session.enemies.clear();
    session
}

fn add_enemy<D>(session: &mut GameSession<D>, pos: Position) {
    session.grid.set(pos, Tile::Enemy);
    session.enemies.push(Enemy::new(pos, session.config.enemy_health));
}

fn assert_consistent<D>(session: &GameSession<D>) {
    let grid = session.grid();
    assert_eq!(grid.positions_of(Tile::Player), vec![session.player().pos]);
    assert_eq!(grid.count(Tile::Enemy), session.enemies().len());
    assert!(session.enemies().iter().all(|e| grid.get(e.pos) == Tile::Enemy && e.is_alive()));
    assert!((0..=session.config().max_health).contains(&session.player().health));
}

#[test]
fn test_new_session_layout() {
    let session = GameSession::seeded(GameConfig::default(), 1).expect("session");
    let grid = session.grid();

    assert_eq!(session.level(), 1);
    assert_eq!(session.player().pos, Position::new(0, 0));
    assert_eq!(session.player().health, 100);
    assert_eq!(grid.count(Tile::Enemy), 4);
    assert_eq!(grid.count(Tile::Treasure), 5);
    assert_eq!(grid.count(Tile::HealthPack), 2);
    assert_eq!(session.treasures(), 0);
    assert!(session.inventory().is_empty());
    assert_consistent(&session);
}

#[test]
fn test_invariants_hold_over_random_play() {
    let mut session = GameSession::seeded(GameConfig::default(), 2024).expect("session");
    let mut rng = StdRng::seed_from_u64(99);
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    for _ in 0..2_000 {
        let direction = directions[rng.random_range(0..directions.len())];
        session.submit_move(direction).expect("turn");
        assert_consistent(&session);
    }
}

#[test]
fn test_out_of_bounds_move_is_a_no_op() {
    let mut session = GameSession::seeded(GameConfig::default(), 8).expect("session");
    let before = session.snapshot();
    let enemies_before = session.enemies().to_vec();

    let report = session.submit_move(Direction::Up).expect("turn");
    assert_eq!(report.outcome, TurnOutcome::Ignored);
    assert!(report.events.is_empty());

    let report = session.submit_move(Direction::Left).expect("turn");
    assert_eq!(report.outcome, TurnOutcome::Ignored);

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.enemies(), enemies_before.as_slice());
}

#[test]
fn test_treasure_pickup_through_a_turn() {
    let mut session = staged(LoadedDice::new(30, 5, 0), Position::new(3, 3), 100);
    session.grid.set(Position::new(4, 3), Tile::Treasure);

    let report = session.submit_move(Direction::Down).expect("turn");

    assert_eq!(report.outcome, TurnOutcome::Playing);
    assert_eq!(report.events, vec![GameEvent::TreasureCollected { total: 1 }]);
    assert_eq!(session.treasures(), 1);
    assert_eq!(session.inventory().to_vec(), vec!["Treasure".to_string()]);
    assert_eq!(session.grid().get(Position::new(4, 3)), Tile::Player);

    session.submit_move(Direction::Up).expect("turn");
    assert_eq!(session.grid().get(Position::new(4, 3)), Tile::Empty);
    assert_eq!(session.treasures(), 1);
}

#[test]
fn test_health_pack_is_clamped() {
    let mut session = staged(LoadedDice::new(30, 5, 0), Position::new(0, 0), 90);
    session.grid.set(Position::new(0, 1), Tile::HealthPack);

    session.submit_move(Direction::Right).expect("turn");
    assert_eq!(session.player().health, 100);
}

#[test]
fn test_fifth_treasure_clears_level() {
    // An enemy guards the last treasure: two 30-damage rounds kill it for 10 health.
    let mut session = staged(LoadedDice::new(30, 5, 4), Position::new(0, 0), 70);
    add_enemy(&mut session, Position::new(0, 1));
    session.grid.set(Position::new(0, 2), Tile::Treasure);
    session.treasures = 4;
    session.inventory = vec!["Treasure".to_string(); 4];
    let first_id = session.id();

    let report = session.submit_move(Direction::Right).expect("turn");
    assert_eq!(report.outcome, TurnOutcome::Playing);
    assert!(matches!(&report.events[0], GameEvent::CombatResolved(fight) if fight.rounds == 2));
    assert_eq!(report.events[1], GameEvent::EnemySlain { at: Position::new(0, 1) });
    assert_eq!(session.player().health, 60);
    assert!(session.enemies().is_empty());
    assert_eq!(session.id(), first_id);

    let report = session.submit_move(Direction::Right).expect("turn");

    assert_eq!(report.outcome, TurnOutcome::LevelCleared { completed_level: 1 });
    assert_eq!(
        report.events,
        vec![GameEvent::TreasureCollected { total: 5 }, GameEvent::LevelCleared { level: 1 }]
    );
    assert_eq!(report.snapshot.treasures, 5);
    assert_eq!(report.snapshot.level, 1);

    assert_eq!(session.level(), 2);
    assert_ne!(session.id(), first_id);
    assert_eq!(session.enemies().len(), 5);
    assert_eq!(session.grid().count(Tile::Enemy), 5);
    assert_eq!(session.grid().count(Tile::Treasure), 5);
    assert_eq!(session.grid().count(Tile::HealthPack), 2);
    assert_eq!(session.treasures(), 0);
    assert!(session.inventory().is_empty());
    assert_eq!(session.player().pos, Position::new(0, 0));
    assert_eq!(session.player().health, 100);
    assert_consistent(&session);
}

#[test]
fn test_defeat_restarts_at_level_one() {
    let mut session = staged(LoadedDice::new(10, 500, 6), Position::new(0, 0), 100);
    session.level = 3;
    add_enemy(&mut session, Position::new(1, 0));

    let report = session.submit_move(Direction::Down).expect("turn");

    assert_eq!(report.outcome, TurnOutcome::Defeated { level: 3 });
    assert_eq!(report.events.last(), Some(&GameEvent::Defeated { level: 3 }));
    assert_eq!(report.snapshot.player.health, 0);
    assert_eq!(report.snapshot.grid[1][0], Tile::Player);

    assert_eq!(session.level(), 1);
    assert_eq!(session.enemies().len(), 4);
    assert_eq!(session.player().health, 100);
    assert_consistent(&session);
}

#[test]
fn test_defeat_wins_over_level_clear() {
    // Fifth treasure already held and a fatal fight on the same turn.
    let mut session = staged(LoadedDice::new(30, 500, 6), Position::new(0, 0), 10);
    session.treasures = 5;
    add_enemy(&mut session, Position::new(0, 1));

    let report = session.submit_move(Direction::Right).expect("turn");
    assert_eq!(report.outcome, TurnOutcome::Defeated { level: 1 });
}

#[test]
fn test_enemies_chase_after_player_moves() {
    let mut session = staged(LoadedDice::new(30, 5, 0), Position::new(2, 1), 100);
    add_enemy(&mut session, Position::new(5, 5));

    session.submit_move(Direction::Right).expect("turn");

    assert_eq!(session.player().pos, Position::new(2, 2));
    assert_eq!(session.enemies()[0].pos, Position::new(4, 4));
    assert_eq!(session.grid().get(Position::new(5, 5)), Tile::Empty);
}

#[test]
fn test_capacity_exceeded_on_creation() {
    let config = GameConfig { grid_size: 3, ..GameConfig::default() };
    let err = GameSession::seeded(config, 0).unwrap_err();

    assert!(matches!(
        err,
        GameError::CapacityExceeded { tile: Tile::Treasure, requested: 5, available: 4 }
    ));
}

#[test]
fn test_capacity_exceeded_on_level_transition() {
    // 16 cells hold level 5 exactly; level 6 needs one more enemy than fits.
    let config = GameConfig { grid_size: 4, ..GameConfig::default() };
    let mut session = GameSession::with_dice(config, RandomDice::seeded(3)).expect("session");
    session.grid = Grid::new(4);
    session.grid.set(Position::new(0, 0), Tile::Player);
    session.grid.set(Position::new(0, 1), Tile::Treasure);
    session.player = Player::new(Position::new(0, 0), 100);
    session.enemies.clear();
    session.level = 5;
    session.treasures = 4;

    let err = session.submit_move(Direction::Right).unwrap_err();
    assert!(matches!(
        err,
        GameError::CapacityExceeded { tile: Tile::HealthPack, requested: 2, available: 1 }
    ));
}

#[test]
fn test_snapshot_json_export() {
    let session = GameSession::seeded(GameConfig::default(), 12).expect("session");
    let snapshot = session.snapshot();
    let json = snapshot.to_json().expect("serialize");

    assert!(json.contains("\"level\":1"));
    let parsed: Snapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, snapshot);
}

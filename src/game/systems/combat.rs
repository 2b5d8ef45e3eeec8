//! Melee resolution between the player and one enemy.
//!
//! Each round both sides strike unconditionally: the player hits the enemy and
//! the enemy hits the player, even if the first blow already killed it. The
//! exchange only stops between rounds, once either side is at or below zero.
//! A player can therefore die in the same round that kills the enemy.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::game::dice::Dice;
use crate::game::entities::wound_player;
use crate::game::state::GameSession;
use crate::game::types::{Position, Tile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub at: Position,
    pub rounds: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub enemy_slain: bool,
}

/// Fight the enemy standing at `at` to the end.
///
/// A slain enemy is removed from the session and its cell cleared. The
/// player's health is clamped at zero once the fight is over.
/// Returns `None` if no living enemy is recorded at `at`.
pub fn resolve_combat<D: Dice>(session: &mut GameSession<D>, at: Position) -> Option<CombatReport> {
    let Some(index) = session.enemies.iter().position(|e| e.pos == at && e.is_alive()) else {
        warn!("[Combat] Enemy tile at ({}, {}) has no living enemy", at.x, at.y);
        return None;
    };

    let mut report = CombatReport {
        at,
        rounds: 0,
        damage_dealt: 0,
        damage_taken: 0,
        enemy_slain: false,
    };

    let enemy = &mut session.enemies[index];
    while session.player.is_alive() && enemy.is_alive() {
        let dealt = session.dice.player_strike(session.config.player_strike.clone());
        let taken = session.dice.enemy_strike(session.config.enemy_strike.clone());

        enemy.health -= dealt;
        wound_player(&mut session.player, taken);

        report.rounds += 1;
        report.damage_dealt += dealt;
        report.damage_taken += taken;
    }
    report.enemy_slain = !enemy.is_alive();

    if report.enemy_slain {
        session.grid.set(at, Tile::Empty);
        session.enemies.remove(index);
    }
    session.player.health = session.player.health.max(0);

    debug!(
        "[Combat] ({}, {}) rounds={} dealt={} taken={} slain={} player_health={}",
        at.x, at.y, report.rounds, report.damage_dealt, report.damage_taken, report.enemy_slain,
        session.player.health
    );
    Some(report)
}

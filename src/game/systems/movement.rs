//! Player movement system.
//!
//! This module moves the player and resolves whatever occupied the target cell.

use log::{debug, warn};

use crate::config::game::TREASURE_LABEL;
use crate::game::dice::Dice;
use crate::game::entities::heal_player;
use crate::game::state::{GameEvent, GameSession};
use crate::game::systems::combat::resolve_combat;
use crate::game::types::Tile;

/// Move the player by `(dx, dy)` and resolve the tile it lands on.
///
/// Only single steps (each component in -1..=1, not both zero) that stay on
/// the grid are accepted. Anything else returns `None` and leaves the session
/// untouched. Enemies are not moved here.
pub fn resolve_player_move<D: Dice>(
    session: &mut GameSession<D>,
    dx: i32,
    dy: i32,
) -> Option<Vec<GameEvent>> {
    let unit_step = (-1..=1).contains(&dx) && (-1..=1).contains(&dy) && (dx, dy) != (0, 0);
    let target = unit_step
        .then(|| session.player.pos.offset(dx, dy, session.grid.size()))
        .flatten();
    let Some(target) = target else {
        warn!(
            "[GameSession] session={} ignored move ({}, {}) from ({}, {})",
            session.id, dx, dy, session.player.pos.x, session.player.pos.y
        );
        return None;
    };

    let occupant = session.grid.get(target);
    session.grid.set(session.player.pos, Tile::Empty);
    session.player.pos = target;

    let mut events = Vec::new();
    match occupant {
        Tile::Treasure => {
            session.treasures += 1;
            session.inventory.push(TREASURE_LABEL.to_string());
            debug!("[GameSession] Treasure picked up ({}/{})", session.treasures, session.config.treasure_target);
            events.push(GameEvent::TreasureCollected { total: session.treasures });
        }
        Tile::HealthPack => {
            let amount = heal_player(&mut session.player, session.config.heal_amount, session.config.max_health);
            events.push(GameEvent::Healed { amount, health: session.player.health });
        }
        Tile::Enemy => {
            if let Some(report) = resolve_combat(session, target) {
                let slain = report.enemy_slain;
                events.push(GameEvent::CombatResolved(report));
                if slain {
                    events.push(GameEvent::EnemySlain { at: target });
                }
            }
        }
        Tile::Empty | Tile::Player => {}
    }

    session.grid.set(target, Tile::Player);
    Some(events)
}

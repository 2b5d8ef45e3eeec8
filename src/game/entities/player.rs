use crate::game::types::Player;

/// Restore `amount` health, never above `max_health`. Returns the health gained.
pub fn heal_player(player: &mut Player, amount: i32, max_health: i32) -> i32 {
    let before = player.health;
    player.health = (player.health + amount).min(max_health);
    player.health - before
}

/// Apply `damage`. Health may drop below zero; callers clamp once combat is over.
pub fn wound_player(player: &mut Player, damage: i32) {
    player.health -= damage;
}

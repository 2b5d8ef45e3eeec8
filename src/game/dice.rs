//! Randomness source of a game session.
//!
//! Every random decision (spawn placement, combat damage) goes through a
//! [`Dice`], so a session can be replayed or scripted by swapping the
//! implementation.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Dice {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Damage the player deals in one combat round.
    fn player_strike(&mut self, range: Range<i32>) -> i32;

    /// Damage an enemy deals in one combat round.
    fn enemy_strike(&mut self, range: Range<i32>) -> i32;
}

/// Uniform dice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R = StdRng> {
    rng: R,
}

impl RandomDice<StdRng> {
    pub fn from_os_rng() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn player_strike(&mut self, range: Range<i32>) -> i32 {
        self.rng.random_range(range)
    }

    fn enemy_strike(&mut self, range: Range<i32>) -> i32 {
        self.rng.random_range(range)
    }
}

/// Dice with fixed strike damage. Placement stays random but seeded.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    player_damage: i32,
    enemy_damage: i32,
    placement: StdRng,
}

impl LoadedDice {
    pub fn new(player_damage: i32, enemy_damage: i32, seed: u64) -> Self {
        Self {
            player_damage,
            enemy_damage,
            placement: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for LoadedDice {
    fn pick(&mut self, len: usize) -> usize {
        self.placement.random_range(0..len)
    }

    fn player_strike(&mut self, _range: Range<i32>) -> i32 {
        self.player_damage
    }

    fn enemy_strike(&mut self, _range: Range<i32>) -> i32 {
        self.enemy_damage
    }
}

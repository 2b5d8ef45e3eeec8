use serde::{Deserialize, Serialize};

/// A grid cell address. `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed delta, staying inside a `size`×`size` grid.
    pub fn offset(self, dx: i32, dy: i32, size: usize) -> Option<Position> {
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        (x < size && y < size).then_some(Position { x, y })
    }

    /// Unit step (each component in -1..=1) that brings `self` closer to `target`.
    pub fn step_toward(self, target: Position) -> (i32, i32) {
        let dx = (target.x as i64 - self.x as i64).signum() as i32;
        let dy = (target.y as i64 - self.y as i64).signum() as i32;
        (dx, dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta of this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Occupant marker of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Player,
    Enemy,
    Treasure,
    HealthPack,
}

impl Tile {
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Player => 'P',
            Tile::Enemy => 'E',
            Tile::Treasure => 'T',
            Tile::HealthPack => 'H',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub health: i32,
}

impl Player {
    pub fn new(pos: Position, health: i32) -> Self {
        Self { pos, health }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Position,
    pub health: i32,
}

impl Enemy {
    pub fn new(pos: Position, health: i32) -> Self {
        Self { pos, health }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

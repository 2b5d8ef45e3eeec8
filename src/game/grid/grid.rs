use serde::{Deserialize, Serialize};

use crate::game::types::{Position, Tile};

/// Square grid of tile markers, indexed `cells[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// All-empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self { cells: vec![vec![Tile::Empty; size]; size] }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Tile {
        self.cells[pos.x][pos.y]
    }

    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.cells[pos.x][pos.y] = tile;
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, tile)| **tile == Tile::Empty)
                    .map(move |(y, _)| Position { x, y })
            })
            .collect()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().flatten().filter(|t| **t == tile).count()
    }

    pub fn positions_of(&self, tile: Tile) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, t)| **t == tile)
                    .map(move |(y, _)| Position { x, y })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_generation_size() {
        let grid = Grid::new(10);
        assert_eq!(grid.size(), 10);
        assert!(grid.rows().iter().all(|row| row.len() == 10));
        assert_eq!(grid.count(Tile::Empty), 100);
    }

    #[test]
    fn test_set_and_lookup() {
        let mut grid = Grid::new(4);
        grid.set(Position::new(1, 2), Tile::Treasure);
        assert_eq!(grid.get(Position::new(1, 2)), Tile::Treasure);
        assert_eq!(grid.positions_of(Tile::Treasure), vec![Position::new(1, 2)]);
        assert_eq!(grid.empty_cells().len(), 15);
        assert!(!grid.empty_cells().contains(&Position::new(1, 2)));
    }
}

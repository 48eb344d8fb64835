//! The read-only grid surface consumed by the engine, and a dense
//! reference implementation.

use crate::cell::Cell;
use crate::terrain::TerrainClass;

/// Read-only query surface over the host's grid.
///
/// The engine never stores or mutates grid data; it reads through this
/// trait for the duration of one call. Hosts that mutate obstacles must
/// clear the path cache afterwards (see `gridnav-paths`).
pub trait GridQuery {
    /// Number of rows.
    fn rows(&self) -> i32;
    /// Number of columns.
    fn cols(&self) -> i32;
    /// Whether the cell is occupied by a static obstacle.
    fn is_occupied(&self, cell: Cell) -> bool;
    /// Terrain classification of the cell.
    fn terrain(&self, cell: Cell) -> TerrainClass;

    /// Whether the cell lies inside the grid.
    #[inline]
    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows() && cell.col >= 0 && cell.col < self.cols()
    }

    /// In bounds, unobstructed, and passable terrain.
    #[inline]
    fn is_walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_occupied(cell) && !self.terrain(cell).is_impassable()
    }
}

/// A dense row-major grid implementing [`GridQuery`].
///
/// Used by the engine's tests and available to hosts that do not already
/// have a grid representation of their own.
#[derive(Debug, Clone)]
pub struct MapGrid {
    rows: i32,
    cols: i32,
    terrain: Vec<TerrainClass>,
    occupied: Vec<bool>,
}

impl MapGrid {
    /// Create an all-open, unobstructed grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows,
            cols,
            terrain: vec![TerrainClass::Open; len],
            occupied: vec![false; len],
        }
    }

    /// Build a grid from ASCII rows.
    ///
    /// `.` open, `,` rough, `~` mud, `^` cliff, `#` obstacle on open
    /// ground. All rows must have equal length. Unknown characters are
    /// treated as open ground.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::new(height, width);
        for (r, line) in rows.iter().enumerate() {
            debug_assert_eq!(line.chars().count() as i32, width);
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                match ch {
                    '#' => grid.set_occupied(cell, true),
                    ',' => grid.set_terrain(cell, TerrainClass::Rough),
                    '~' => grid.set_terrain(cell, TerrainClass::Mud),
                    '^' => grid.set_terrain(cell, TerrainClass::Cliff),
                    _ => {}
                }
            }
        }
        grid
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.row * self.cols + cell.col) as usize)
    }

    /// Set the terrain of a cell. Does nothing out of bounds.
    pub fn set_terrain(&mut self, cell: Cell, terrain: TerrainClass) {
        if let Some(i) = self.index(cell) {
            self.terrain[i] = terrain;
        }
    }

    /// Place or remove a static obstacle. Does nothing out of bounds.
    ///
    /// Hosts routing through a path cache must clear it after calling
    /// this.
    pub fn set_occupied(&mut self, cell: Cell, occupied: bool) {
        if let Some(i) = self.index(cell) {
            self.occupied[i] = occupied;
        }
    }
}

impl GridQuery for MapGrid {
    fn rows(&self) -> i32 {
        self.rows
    }

    fn cols(&self) -> i32 {
        self.cols
    }

    fn is_occupied(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.occupied[i])
    }

    fn terrain(&self, cell: Cell) -> TerrainClass {
        self.index(cell)
            .map_or(TerrainClass::Cliff, |i| self.terrain[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open() {
        let g = MapGrid::new(4, 6);
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 6);
        assert!(g.is_walkable(Cell::new(3, 5)));
        assert!(!g.in_bounds(Cell::new(4, 0)));
        assert!(!g.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn from_rows_maps_characters() {
        let g = MapGrid::from_rows(&[
            ".#.",
            ",~^",
        ]);
        assert!(g.is_occupied(Cell::new(0, 1)));
        assert_eq!(g.terrain(Cell::new(1, 0)), TerrainClass::Rough);
        assert_eq!(g.terrain(Cell::new(1, 1)), TerrainClass::Mud);
        assert_eq!(g.terrain(Cell::new(1, 2)), TerrainClass::Cliff);
        assert!(!g.is_walkable(Cell::new(1, 2)));
        assert!(g.is_walkable(Cell::new(1, 1)));
    }

    #[test]
    fn occupied_and_cliff_cells_are_not_walkable() {
        let mut g = MapGrid::new(3, 3);
        g.set_occupied(Cell::new(1, 1), true);
        g.set_terrain(Cell::new(2, 2), TerrainClass::Cliff);
        assert!(!g.is_walkable(Cell::new(1, 1)));
        assert!(!g.is_walkable(Cell::new(2, 2)));
        g.set_occupied(Cell::new(1, 1), false);
        assert!(g.is_walkable(Cell::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_reads_are_blocked() {
        let g = MapGrid::new(2, 2);
        let outside = Cell::new(5, 5);
        assert!(!g.is_occupied(outside));
        assert!(g.terrain(outside).is_impassable());
        assert!(!g.is_walkable(outside));
    }
}

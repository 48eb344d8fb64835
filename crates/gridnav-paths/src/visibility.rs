//! Discrete line-of-sight tracing.

use gridnav_core::{Cell, GridQuery};

/// Iterator over the cells of a Bresenham line, endpoints included.
#[derive(Clone, Debug)]
pub struct LineIter {
    cur: Cell,
    end: Cell,
    d_row: i32,
    d_col: i32,
    step_row: i32,
    step_col: i32,
    err: i32,
    done: bool,
}

impl LineIter {
    /// Rasterize the segment from `from` to `to`.
    pub fn new(from: Cell, to: Cell) -> Self {
        let d_row = -(to.row - from.row).abs();
        let d_col = (to.col - from.col).abs();
        Self {
            cur: from,
            end: to,
            d_row,
            d_col,
            step_row: if from.row < to.row { 1 } else { -1 },
            step_col: if from.col < to.col { 1 } else { -1 },
            err: d_col + d_row,
            done: false,
        }
    }
}

impl Iterator for LineIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.done {
            return None;
        }
        let cell = self.cur;
        if cell == self.end {
            self.done = true;
            return Some(cell);
        }
        let e2 = 2 * self.err;
        if e2 >= self.d_row {
            self.err += self.d_row;
            self.cur.col += self.step_col;
        }
        if e2 <= self.d_col {
            self.err += self.d_col;
            self.cur.row += self.step_row;
        }
        Some(cell)
    }
}

/// The rasterized cells of the segment from `from` to `to`, in traversal
/// order, endpoints included.
pub fn line_cells(from: Cell, to: Cell) -> Vec<Cell> {
    LineIter::new(from, to).collect()
}

/// Whether every cell on the rasterized line between `from` and `to`,
/// both endpoints included, is walkable.
pub fn has_line_of_sight(grid: &impl GridQuery, from: Cell, to: Cell) -> bool {
    LineIter::new(from, to).all(|cell| grid.is_walkable(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::MapGrid;

    #[test]
    fn line_includes_both_endpoints() {
        let cells = line_cells(Cell::new(0, 0), Cell::new(3, 5));
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(3, 5)));
        for w in cells.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
    }

    #[test]
    fn degenerate_line_is_single_cell() {
        assert_eq!(line_cells(Cell::new(4, 4), Cell::new(4, 4)), vec![Cell::new(4, 4)]);
    }

    #[test]
    fn axis_aligned_lines_are_exact() {
        let cells = line_cells(Cell::new(2, 1), Cell::new(2, 4));
        assert_eq!(
            cells,
            vec![Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4)]
        );
        let cells = line_cells(Cell::new(3, 0), Cell::new(0, 0));
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.col == 0));
    }

    #[test]
    fn sight_blocked_by_wall() {
        let grid = MapGrid::from_rows(&[
            "...",
            "###",
            "...",
        ]);
        assert!(!has_line_of_sight(&grid, Cell::new(0, 1), Cell::new(2, 1)));
        assert!(has_line_of_sight(&grid, Cell::new(0, 0), Cell::new(0, 2)));
    }

    #[test]
    fn sight_requires_walkable_endpoints() {
        let mut grid = MapGrid::new(3, 3);
        grid.set_occupied(Cell::new(2, 2), true);
        assert!(!has_line_of_sight(&grid, Cell::new(0, 0), Cell::new(2, 2)));
        assert!(!has_line_of_sight(&grid, Cell::new(2, 2), Cell::new(0, 0)));
    }

    #[test]
    fn sight_blocked_by_impassable_terrain() {
        let grid = MapGrid::from_rows(&[
            ".^.",
            ".^.",
            "...",
        ]);
        assert!(!has_line_of_sight(&grid, Cell::new(0, 0), Cell::new(0, 2)));
        assert!(has_line_of_sight(&grid, Cell::new(0, 0), Cell::new(2, 0)));
    }
}

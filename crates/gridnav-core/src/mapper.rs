//! World ↔ grid coordinate conversion.

use crate::cell::Cell;

/// Converts between continuous world coordinates and grid cells.
///
/// The mapper is a pure function of the grid's cell size and world-space
/// origin. It performs no bounds clamping; callers building queries from
/// arbitrary world positions (mouse clicks, projectile impacts) clamp to
/// grid bounds themselves when it matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateMapper {
    cell_size: f32,
    origin_x: f32,
    origin_y: f32,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl CoordinateMapper {
    /// Create a mapper for the given cell size and world origin of the
    /// grid's top-left corner.
    pub fn new(cell_size: f32, origin_x: f32, origin_y: f32) -> Self {
        Self {
            cell_size,
            origin_x,
            origin_y,
        }
    }

    /// The configured cell size.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The cell containing the world position, by floor division.
    #[inline]
    pub fn world_to_grid(&self, x: f32, y: f32) -> Cell {
        Cell::new(
            ((y - self.origin_y) / self.cell_size).floor() as i32,
            ((x - self.origin_x) / self.cell_size).floor() as i32,
        )
    }

    /// The world-space center of the cell.
    #[inline]
    pub fn grid_to_world(&self, cell: Cell) -> (f32, f32) {
        (
            self.origin_x + cell.col as f32 * self.cell_size + self.cell_size / 2.0,
            self.origin_y + cell.row as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }
}

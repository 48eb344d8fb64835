//! Nearest-walkable-cell fallback search.

use gridnav_core::{Cell, GridQuery};

/// Find the walkable cell closest to `target` within `max_radius`
/// (Chebyshev distance).
///
/// A walkable `target` is returned as-is. Otherwise square rings of
/// increasing radius are walked, testing only each ring's perimeter, and
/// the first walkable cell wins. Returns `None` when no walkable cell
/// exists within the radius.
pub fn find_nearest_walkable(
    grid: &impl GridQuery,
    target: Cell,
    max_radius: i32,
) -> Option<Cell> {
    if grid.is_walkable(target) {
        return Some(target);
    }

    for radius in 1..=max_radius {
        // Top and bottom edges of the ring, full width.
        for dc in -radius..=radius {
            for dr in [-radius, radius] {
                let cell = target.shift(dr, dc);
                if grid.is_walkable(cell) {
                    return Some(cell);
                }
            }
        }
        // Left and right edges, corners already covered.
        for dr in (-radius + 1)..radius {
            for dc in [-radius, radius] {
                let cell = target.shift(dr, dc);
                if grid.is_walkable(cell) {
                    return Some(cell);
                }
            }
        }
    }
    None
}

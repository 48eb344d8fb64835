//! Waypoint reduction via line-of-sight smoothing.

use gridnav_core::{Cell, GridQuery};

use crate::visibility::has_line_of_sight;

/// Reduce a raw cell-by-cell path to a minimal waypoint sequence.
///
/// Greedy forward scan: from the current waypoint, the furthest later
/// waypoint with clear line of sight is committed, then the scan repeats
/// from there. Endpoints are preserved and consecutive waypoints in the
/// result always have line of sight between them; paths of length two or
/// less are returned unchanged.
pub fn smooth(grid: &impl GridQuery, path: &[Cell]) -> Vec<Cell> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut waypoints = vec![path[0]];
    let mut current = 0;

    while current < path.len() - 1 {
        // Scan backward from the end for the furthest visible waypoint.
        let mut next = current + 1;
        for candidate in (current + 2..path.len()).rev() {
            if has_line_of_sight(grid, path[current], path[candidate]) {
                next = candidate;
                break;
            }
        }
        waypoints.push(path[next]);
        current = next;
    }
    waypoints
}

//! Multi-path planning via iterative penalty reweighting.

use gridnav_core::{Cell, GridQuery};

use crate::SearchField;
use crate::config::SearchConfig;
use crate::penalty::PenaltySet;

/// Compute up to `limit` distinct paths between the same endpoints.
///
/// Each round searches with the interior cells of every previous path
/// soft-penalized, steering later paths onto fresh cells. The penalty is
/// large relative to step costs but additive, so a penalized cell is
/// still used when it is the only way through: successive paths are not
/// guaranteed disjoint, only non-identical whenever an alternative
/// exists. Stops early once a round finds no path or only re-finds a
/// previous one; the result is never padded with duplicates.
pub fn find_multiple_paths(
    field: &mut SearchField,
    grid: &impl GridQuery,
    start: Cell,
    goal: Cell,
    limit: usize,
    config: &SearchConfig,
) -> Vec<Vec<Cell>> {
    let mut paths: Vec<Vec<Cell>> = Vec::new();
    let mut penalties = PenaltySet::new();

    for _ in 0..limit {
        let path = field.find_path(grid, start, goal, &penalties, config);
        if path.is_empty() || paths.contains(&path) {
            break;
        }
        penalties.extend_interior(&path);
        paths.push(path);
    }
    paths
}

//! Weighted shortest-path search.

use std::collections::BinaryHeap;

use gridnav_core::{Cell, GridQuery};

use crate::SearchField;
use crate::config::SearchConfig;
use crate::field::NodeRef;
use crate::penalty::PenaltySet;

/// Cardinal directions first, then diagonals.
const DIRS: [(i32, i32); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

/// Why a search stopped. Only used for diagnostics; callers observe an
/// empty path for both failure variants.
enum Outcome {
    Found,
    NoRoute,
    Exhausted,
}

impl SearchField {
    /// Compute a minimum-cost path from `start` to `goal`.
    ///
    /// Edges connect the 8 compass neighbours; a cardinal step costs 1.0
    /// and a diagonal step `config.diagonal_cost`, both scaled by the
    /// destination's terrain multiplier, plus `config.cell_penalty` when
    /// the destination is in `penalties`. Steps into occupied or
    /// impassable cells are rejected, as are diagonal steps that would
    /// clip the corner of two blocked cardinal cells (when
    /// `config.prevent_corner_cutting` is set).
    ///
    /// Returns every cell from `start` to `goal` inclusive, or an empty
    /// vector when the goal is unreachable or the expansion ceiling was
    /// hit. No path is a normal outcome, not an error. Endpoints are not
    /// pre-validated: a blocked `start` or `goal` is searched as-is and
    /// simply yields no route; callers that need snapping should use
    /// [`crate::find_nearest_walkable`] first.
    pub fn find_path(
        &mut self,
        grid: &impl GridQuery,
        start: Cell,
        goal: Cell,
        penalties: &PenaltySet,
        config: &SearchConfig,
    ) -> Vec<Cell> {
        if (self.rows, self.cols) != (grid.rows(), grid.cols()) {
            self.resize(grid.rows(), grid.cols());
        }

        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return Vec::new();
        };
        if start_idx == goal_idx {
            return vec![start];
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            g: 0.0,
        });

        let mut expansions = 0usize;

        let outcome = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Outcome::NoRoute;
            };
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            if ci == goal_idx {
                break 'search Outcome::Found;
            }

            expansions += 1;
            if expansions > config.max_expansions {
                break 'search Outcome::Exhausted;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_cell = self.cell(ci);

            for (dr, dc) in DIRS {
                let next = current_cell.shift(dr, dc);
                let Some(ni) = self.idx(next) else {
                    continue;
                };
                if grid.is_occupied(next) {
                    continue;
                }
                let terrain = grid.terrain(next);
                if terrain.is_impassable() {
                    continue;
                }
                let diagonal = dr != 0 && dc != 0;
                if diagonal
                    && config.prevent_corner_cutting
                    && (!flank_open(grid, Cell::new(current_cell.row, next.col))
                        || !flank_open(grid, Cell::new(next.row, current_cell.col)))
                {
                    continue;
                }

                let base = if diagonal { config.diagonal_cost } else { 1.0 };
                let mut step = base * terrain.cost_multiplier();
                if penalties.contains(next) {
                    step += config.cell_penalty;
                }
                let tentative = current_g + step;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }
                n.g = tentative;
                n.parent = ci;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                });
            }
        };

        match outcome {
            Outcome::Found => {}
            Outcome::NoRoute => {
                log::debug!("no route from {start} to {goal}");
                return Vec::new();
            }
            Outcome::Exhausted => {
                log::warn!(
                    "search ceiling of {} expansions hit before reaching {goal} from {start}",
                    config.max_expansions
                );
                return Vec::new();
            }
        }

        // Reconstruct the path from the parent chain.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

/// Whether a cardinal cell flanking a diagonal step permits that step.
#[inline]
fn flank_open(grid: &impl GridQuery, cell: Cell) -> bool {
    !grid.is_occupied(cell) && !grid.terrain(cell).is_impassable()
}

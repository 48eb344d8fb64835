//! The engine facade.

use gridnav_core::{Cell, CoordinateMapper, GridQuery};

use crate::cache::{CacheStats, PathCache};
use crate::config::SearchConfig;
use crate::field::SearchField;
use crate::locate::find_nearest_walkable;
use crate::multipath::find_multiple_paths;
use crate::penalty::PenaltySet;
use crate::smooth::smooth;
use crate::visibility::has_line_of_sight;

/// Front door for pathfinding queries.
///
/// Owns the search scratch state, the path cache, the engine
/// configuration, and the world-coordinate mapper, so hosts deal with one
/// object. The grid stays external and is borrowed per call; after any
/// obstacle mutation the host must call [`Pathfinder::clear_cache`].
pub struct Pathfinder {
    field: SearchField,
    cache: PathCache,
    mapper: CoordinateMapper,
    config: SearchConfig,
}

impl Pathfinder {
    /// Create an engine for a `rows` × `cols` grid with default
    /// configuration and a unit-cell mapper.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::with_config(rows, cols, CoordinateMapper::default(), SearchConfig::default())
    }

    /// Create an engine with an explicit mapper and configuration.
    pub fn with_config(
        rows: i32,
        cols: i32,
        mapper: CoordinateMapper,
        config: SearchConfig,
    ) -> Self {
        Self {
            field: SearchField::new(rows, cols),
            cache: PathCache::from_config(&config),
            mapper,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The world-coordinate mapper.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Compute (or fetch from cache) a minimum-cost path between two
    /// cells. Empty when no route exists.
    ///
    /// Successful results are cached by the directed (start, goal) pair
    /// until they expire or the cache is cleared.
    pub fn find_path(&mut self, grid: &impl GridQuery, start: Cell, goal: Cell) -> Vec<Cell> {
        if let Some(path) = self.cache.get(start, goal) {
            return path;
        }
        let path = self
            .field
            .find_path(grid, start, goal, &PenaltySet::new(), &self.config);
        if !path.is_empty() {
            self.cache.put(start, goal, path.clone());
        }
        path
    }

    /// Compute up to `limit` distinct paths between two cells; a `limit`
    /// of zero falls back to the configured maximum.
    ///
    /// Bypasses the cache: penalty-steered iterations are not reusable
    /// across queries.
    pub fn find_multiple_paths(
        &mut self,
        grid: &impl GridQuery,
        start: Cell,
        goal: Cell,
        limit: usize,
    ) -> Vec<Vec<Cell>> {
        let limit = if limit == 0 { self.config.max_paths } else { limit };
        find_multiple_paths(&mut self.field, grid, start, goal, limit, &self.config)
    }

    /// World-coordinate convenience wrapper around [`Self::find_path`]:
    /// endpoints are mapped to cells and the result to cell centers.
    pub fn find_path_world(
        &mut self,
        grid: &impl GridQuery,
        start: (f32, f32),
        goal: (f32, f32),
    ) -> Vec<(f32, f32)> {
        let start = self.mapper.world_to_grid(start.0, start.1);
        let goal = self.mapper.world_to_grid(goal.0, goal.1);
        let mapper = self.mapper;
        self.find_path(grid, start, goal)
            .into_iter()
            .map(|cell| mapper.grid_to_world(cell))
            .collect()
    }

    /// Drop all cached paths. Must be called whenever the grid's
    /// obstacle layout changes.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Cache hit/miss/eviction counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// See [`crate::find_nearest_walkable`]; uses the configured radius.
    pub fn find_nearest_walkable(&self, grid: &impl GridQuery, target: Cell) -> Option<Cell> {
        find_nearest_walkable(grid, target, self.config.nearest_radius)
    }

    /// See [`crate::smooth`].
    pub fn smooth(&self, grid: &impl GridQuery, path: &[Cell]) -> Vec<Cell> {
        smooth(grid, path)
    }

    /// See [`crate::has_line_of_sight`].
    pub fn has_line_of_sight(&self, grid: &impl GridQuery, from: Cell, to: Cell) -> bool {
        has_line_of_sight(grid, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::path_distance;
    use gridnav_core::MapGrid;
    use std::time::Duration;

    #[test]
    fn repeated_queries_hit_the_cache() {
        let grid = MapGrid::new(10, 10);
        let mut nav = Pathfinder::new(10, 10);
        let a = Cell::new(0, 0);
        let b = Cell::new(9, 9);

        let first = nav.find_path(&grid, a, b);
        let second = nav.find_path(&grid, a, b);
        assert_eq!(first, second);
        assert_eq!(nav.cache_stats().hits, 1);
        assert_eq!(nav.cache_stats().misses, 1);
    }

    #[test]
    fn failed_searches_are_not_cached() {
        let grid = MapGrid::from_rows(&[
            ".#.",
            ".#.",
            ".#.",
        ]);
        let mut nav = Pathfinder::new(3, 3);
        assert!(nav.find_path(&grid, Cell::new(0, 0), Cell::new(0, 2)).is_empty());
        assert!(nav.find_path(&grid, Cell::new(0, 0), Cell::new(0, 2)).is_empty());
        assert_eq!(nav.cache_stats().misses, 2);
        assert_eq!(nav.cache_stats().hits, 0);
    }

    #[test]
    fn clear_cache_forces_a_fresh_search() {
        // Open a shorter route after the first query; only a cleared
        // cache sees it.
        let mut grid = MapGrid::from_rows(&[
            "...",
            "##.",
            "...",
        ]);
        let mut nav = Pathfinder::new(3, 3);
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 0);
        let detour = nav.find_path(&grid, a, b);
        assert!(detour.len() > 3);

        grid.set_occupied(Cell::new(1, 0), false);
        grid.set_occupied(Cell::new(1, 1), false);
        let stale = nav.find_path(&grid, a, b);
        assert_eq!(stale, detour, "without invalidation the stale path persists");

        nav.clear_cache();
        let fresh = nav.find_path(&grid, a, b);
        assert!(fresh.len() < detour.len());
    }

    #[test]
    fn expired_entries_trigger_research() {
        let grid = MapGrid::new(5, 5);
        let config = SearchConfig {
            cache_ttl: Duration::ZERO,
            ..SearchConfig::default()
        };
        let mut nav = Pathfinder::with_config(5, 5, CoordinateMapper::default(), config);
        nav.find_path(&grid, Cell::new(0, 0), Cell::new(4, 4));
        nav.find_path(&grid, Cell::new(0, 0), Cell::new(4, 4));
        assert_eq!(nav.cache_stats().hits, 0);
        assert_eq!(nav.cache_stats().misses, 2);
    }

    #[test]
    fn world_wrapper_round_trips_coordinates() {
        let grid = MapGrid::new(4, 4);
        let mapper = CoordinateMapper::new(32.0, 0.0, 0.0);
        let mut nav = Pathfinder::with_config(4, 4, mapper, SearchConfig::default());

        let path = nav.find_path_world(&grid, (5.0, 5.0), (120.0, 5.0));
        assert_eq!(path.first(), Some(&(16.0, 16.0)));
        assert_eq!(path.last(), Some(&(112.0, 16.0)));
        let dist = path_distance(&path);
        assert!((dist - 96.0).abs() < 1e-4);
    }

    #[test]
    fn world_wrapper_returns_empty_when_unroutable() {
        let grid = MapGrid::from_rows(&[
            ".#.",
            ".#.",
        ]);
        let mut nav = Pathfinder::new(2, 3);
        assert!(nav.find_path_world(&grid, (0.5, 0.5), (2.5, 0.5)).is_empty());
    }

    #[test]
    fn multi_path_limit_zero_uses_configured_default() {
        let grid = MapGrid::new(6, 6);
        let mut nav = Pathfinder::new(6, 6);
        let paths = nav.find_multiple_paths(&grid, Cell::new(0, 0), Cell::new(5, 5), 0);
        assert!(!paths.is_empty());
        assert!(paths.len() <= nav.config().max_paths);
    }

    #[test]
    fn facade_delegates_utilities() {
        let mut grid = MapGrid::new(5, 5);
        grid.set_occupied(Cell::new(2, 2), true);
        let nav = Pathfinder::new(5, 5);
        assert!(!nav.has_line_of_sight(&grid, Cell::new(2, 0), Cell::new(2, 4)));
        let near = nav.find_nearest_walkable(&grid, Cell::new(2, 2)).unwrap();
        assert!(grid.is_walkable(near));
        let smoothed = nav.smooth(&grid, &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(smoothed, vec![Cell::new(0, 0), Cell::new(0, 2)]);
    }
}

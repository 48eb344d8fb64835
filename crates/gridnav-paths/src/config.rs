//! Engine configuration.

use std::time::Duration;

/// Default diagonal step cost (√2, the Euclidean step length).
pub const DEFAULT_DIAGONAL_COST: f32 = std::f32::consts::SQRT_2;
/// Default additive penalty for entering a penalized cell.
pub const DEFAULT_CELL_PENALTY: f32 = 50.0;
/// Default hard ceiling on node expansions per search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000;
/// Default cache entry time-to-live.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);
/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;
/// Default number of entries freed per bulk eviction.
pub const DEFAULT_EVICTION_BATCH: usize = 10;
/// Default maximum number of alternate paths.
pub const DEFAULT_MAX_PATHS: usize = 3;
/// Default search radius for the nearest-walkable fallback.
pub const DEFAULT_NEAREST_RADIUS: i32 = 5;

/// Tunables for the search, cache, and planners.
///
/// The defaults are sized for modest grids; the expansion ceiling in
/// particular should grow proportionally with the deployed grid area.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Cost of a diagonal step before terrain multipliers.
    pub diagonal_cost: f32,
    /// Reject diagonal steps whose flanking cardinal cells are blocked.
    pub prevent_corner_cutting: bool,
    /// Additive soft cost for entering a penalized cell.
    pub cell_penalty: f32,
    /// Hard ceiling on node expansions before the search gives up.
    pub max_expansions: usize,
    /// Cache entry time-to-live.
    pub cache_ttl: Duration,
    /// Maximum number of cache entries.
    pub cache_capacity: usize,
    /// Entries freed per bulk eviction when the cache is full.
    pub eviction_batch: usize,
    /// Maximum number of alternate paths from the multi-path planner.
    pub max_paths: usize,
    /// Maximum ring radius for the nearest-walkable search.
    pub nearest_radius: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonal_cost: DEFAULT_DIAGONAL_COST,
            prevent_corner_cutting: true,
            cell_penalty: DEFAULT_CELL_PENALTY,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            eviction_batch: DEFAULT_EVICTION_BATCH,
            max_paths: DEFAULT_MAX_PATHS,
            nearest_radius: DEFAULT_NEAREST_RADIUS,
        }
    }
}

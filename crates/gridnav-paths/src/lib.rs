//! Terrain-aware pathfinding for grid-based games.
//!
//! This crate routes agents across a weighted 8-connected grid, honoring
//! static obstacles, impassable terrain, and per-cell movement-cost
//! multipliers:
//!
//! - **Dijkstra** shortest-path search with corner-cut prevention
//!   ([`SearchField::find_path`])
//! - **Path caching** with TTL expiry and FIFO bulk eviction
//!   ([`PathCache`])
//! - **Multi-path planning** via iterative penalty reweighting
//!   ([`find_multiple_paths`])
//! - **Line of sight** and greedy path smoothing ([`has_line_of_sight`],
//!   [`smooth`])
//! - **Nearest-walkable fallback** search ([`find_nearest_walkable`])
//!
//! Most hosts interact through [`Pathfinder`], a facade that owns the
//! search scratch state, the cache, and the world-coordinate mapper.
//! Everything runs synchronously within the calling tick; "no path" is
//! always an empty result, never a panic or error.
//!
//! The grid itself is external: the engine reads it through
//! [`gridnav_core::GridQuery`] for the duration of one call and holds no
//! reference across calls. Hosts that mutate obstacles must call
//! [`Pathfinder::clear_cache`] (or [`PathCache::clear`]) afterwards, since
//! the cache cannot detect grid mutation itself.

mod cache;
mod config;
mod distance;
mod engine;
mod field;
mod locate;
mod multipath;
mod penalty;
mod search;
mod smooth;
mod visibility;

pub use cache::{CacheStats, PathCache};
pub use config::SearchConfig;
pub use distance::{chebyshev, manhattan, path_distance};
pub use engine::Pathfinder;
pub use field::SearchField;
pub use locate::find_nearest_walkable;
pub use multipath::find_multiple_paths;
pub use penalty::PenaltySet;
pub use smooth::smooth;
pub use visibility::{LineIter, has_line_of_sight, line_cells};

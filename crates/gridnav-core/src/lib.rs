//! Core types for the gridnav pathfinding engine.
//!
//! This crate holds the value types and interfaces shared by the engine and
//! its hosts:
//!
//! - [`Cell`]: a discrete (row, column) grid coordinate
//! - [`TerrainClass`]: per-cell terrain with a movement-cost multiplier
//! - [`GridQuery`]: the read-only grid surface the engine consumes
//! - [`MapGrid`]: a dense reference implementation of [`GridQuery`]
//! - [`CoordinateMapper`]: world ↔ grid coordinate conversion
//!
//! The search algorithms themselves live in `gridnav-paths`.

mod cell;
mod grid;
mod mapper;
mod terrain;

pub use cell::Cell;
pub use grid::{GridQuery, MapGrid};
pub use mapper::CoordinateMapper;
pub use terrain::TerrainClass;

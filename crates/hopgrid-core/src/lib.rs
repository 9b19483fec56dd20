//! **hopgrid-core**: core types for terrain-grid pathfinding.
//!
//! This crate provides the foundational types used across the *hopgrid*
//! workspace: `(row, col)` geometry, the terrain model (open cells, walls,
//! and short walls that can be hopped over at a penalty) and an immutable
//! terrain grid.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Bounds, Point};
pub use grid::{GridError, TerrainGrid};
pub use terrain::{BASE_COST, SHORT_WALL_PENALTY, Terrain};

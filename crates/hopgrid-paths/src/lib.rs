//! A* pathfinding over terrain grids.
//!
//! Grids hold three kinds of terrain: open floor (cost 1), walls (impassable)
//! and short walls that can be hopped over for a penalty (cost 11). This
//! crate finds minimum-cost 4-connected paths between two cells:
//!
//! - **A\*** with a Manhattan heuristic ([`PathRange::astar_path`],
//!   or the one-shot [`search`] / [`search_with`])
//! - **Dijkstra** multi-source cost maps ([`PathRange::dijkstra_map`]),
//!   the exhaustive reference for A* results
//!
//! [`PathRange`] owns and reuses its node arenas, so repeated queries incur
//! no allocations after warm-up. Ties between equally promising candidates
//! are broken by a fixed [`TieBreak`] rule, so results are reproducible.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`TerrainGrid`](hopgrid_core::TerrainGrid) implements all three.

mod astar;
mod config;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod node;
mod pathrange;
mod traits;

pub use astar::{search, search_with, validate_endpoints};
pub use config::{SearchConfig, TieBreak};
pub use distance::manhattan;
pub use error::{Endpoint, InvalidReason, SearchError};
pub use pathrange::{Path, PathNode, PathRange, SearchStats, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};

//! Grid I/O for hopgrid: text loading, path rendering and random grids.
//!
//! These are the collaborators around the search engine: they produce a
//! [`TerrainGrid`](hopgrid_core::TerrainGrid) and display the path it
//! returns, without any search logic of their own.

pub mod loader;
pub mod mapgen;
pub mod render;

pub use loader::{load_grid, parse_grid};
pub use mapgen::{GenConfig, GridGen};
pub use render::{RenderStyle, format_path, render, write_colored};

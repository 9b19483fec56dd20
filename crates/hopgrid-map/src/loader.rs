//! Terrain grids from text.
//!
//! Each line is a row and each character a single-digit terrain code:
//! `0` open, `1` wall, `2` short wall. All rows must have the same width.

use std::fs;
use std::path::Path;

use hopgrid_core::{GridError, Point, Terrain, TerrainGrid};

/// Parse a terrain grid from text.
///
/// Windows line endings are accepted and trailing blank lines ignored. Any
/// other character than `0`, `1` or `2` is an error, as is a blank line in
/// the middle of the grid (it counts as a row of width zero).
pub fn parse_grid(s: &str) -> Result<TerrainGrid, GridError> {
    let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (c, ch) in line.chars().enumerate() {
            let t = Terrain::from_char(ch).ok_or(GridError::InvalidChar {
                ch,
                pos: Point::new(r as i32, c as i32),
            })?;
            row.push(t);
        }
        rows.push(row);
    }
    TerrainGrid::from_rows(rows)
}

/// Read and parse a terrain grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<TerrainGrid, GridError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = parse_grid(&text)?;
    log::debug!("loaded {} grid from {}", grid.bounds(), path.display());
    Ok(grid)
}

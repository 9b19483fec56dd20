//! An immutable terrain grid.
//!
//! [`TerrainGrid`] stores one [`Terrain`] per cell in row-major order. It is
//! built once (from rows of terrain or numeric codes) and only read
//! afterwards, so a search can borrow it for its whole duration.

use std::fmt;
use std::io;

use crate::geom::{Bounds, Point};
use crate::terrain::Terrain;

/// A rectangular grid of [`Terrain`] cells, at least 1×1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Terrain>>", into = "Vec<Vec<Terrain>>")
)]
pub struct TerrainGrid {
    cells: Vec<Terrain>,
    bounds: Bounds,
}

impl TerrainGrid {
    /// Build a grid from rows of terrain. All rows must share one width.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Result<Self, GridError> {
        let width = match rows.first() {
            Some(r) if !r.is_empty() => r.len(),
            _ => return Err(GridError::Empty),
        };
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::InconsistentWidth {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            bounds: Bounds::new(rows.len() as i32, width as i32),
            cells,
        })
    }

    /// Build a grid from numeric terrain codes (`0`, `1`, `2`).
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let mut out = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut line = Vec::with_capacity(row.as_ref().len());
            for (c, &code) in row.as_ref().iter().enumerate() {
                let t = Terrain::from_code(code).ok_or(GridError::UnknownCode {
                    code,
                    pos: Point::new(r as i32, c as i32),
                })?;
                line.push(t);
            }
            out.push(line);
        }
        Self::from_rows(out)
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Terrain at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Terrain::is_passable)
    }

    /// Cost of entering `p`, or `None` when it is out of bounds or blocked.
    #[inline]
    pub fn step_cost(&self, p: Point) -> Option<i32> {
        self.at(p)?.step_cost()
    }

    /// Terrain of one row, or `None` if `row` is out of range.
    pub fn row(&self, row: i32) -> Option<&[Terrain]> {
        if row < 0 || row >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate over `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl TryFrom<Vec<Vec<Terrain>>> for TerrainGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Terrain>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

impl From<TerrainGrid> for Vec<Vec<Terrain>> {
    fn from(grid: TerrainGrid) -> Self {
        grid.cells
            .chunks(grid.bounds.cols as usize)
            .map(<[Terrain]>::to_vec)
            .collect()
    }
}

/// Errors raised while building or loading a [`TerrainGrid`].
#[derive(Debug)]
pub enum GridError {
    /// The source contains no cell.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A text character that is not a terrain digit.
    InvalidChar { ch: char, pos: Point },
    /// A numeric code outside `0..=2`.
    UnknownCode { code: u8, pos: Point },
    /// Reading the source failed.
    Io(io::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid terrain character {ch:?} at {pos}")
            }
            Self::UnknownCode { code, pos } => {
                write!(f, "grid: unknown terrain code {code} at {pos}")
            }
            Self::Io(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = TerrainGrid::from_codes(&[[0u8, 1], [2, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: TerrainGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn ragged_json_rejected() {
        let json = r#"[["Open","Open"],["Open"]]"#;
        assert!(serde_json::from_str::<TerrainGrid>(json).is_err());
    }
}

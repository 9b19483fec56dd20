//! Random terrain grids.

use hopgrid_core::{GridError, Point, Terrain, TerrainGrid};
use rand::{Rng, RngExt};

/// Parameters for [`GridGen::generate`].
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub rows: i32,
    pub cols: i32,
    /// Percentage (0–100) of cells that become walls.
    pub blocked_pct: u32,
    /// Percentage (0–100) of cells that become short walls.
    pub short_wall_pct: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 20,
            blocked_pct: 25,
            short_wall_pct: 10,
        }
    }
}

/// Random terrain grid generator.
pub struct GridGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> GridGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a grid where every cell is independently a wall with
    /// probability `blocked_pct`%, a short wall with `short_wall_pct`%,
    /// and open floor otherwise.
    pub fn generate(&mut self, cfg: &GenConfig) -> Result<TerrainGrid, GridError> {
        let rows: Vec<Vec<Terrain>> = (0..cfg.rows.max(0))
            .map(|_| {
                (0..cfg.cols.max(0))
                    .map(|_| {
                        let r = self.rng.random_range(0..100u32);
                        if r < cfg.blocked_pct {
                            Terrain::Blocked
                        } else if r < cfg.blocked_pct + cfg.short_wall_pct {
                            Terrain::ShortWall
                        } else {
                            Terrain::Open
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        TerrainGrid::from_rows(rows)
    }

    /// A uniformly chosen passable cell, or `None` if the grid is all walls.
    pub fn random_passable(&mut self, grid: &TerrainGrid) -> Option<Point> {
        let open: Vec<Point> = grid
            .iter()
            .filter(|(_, t)| t.is_passable())
            .map(|(p, _)| p)
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_size() {
        let mut g = GridGen::new(StdRng::seed_from_u64(1));
        let grid = g.generate(&GenConfig::default()).unwrap();
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 20);
    }

    #[test]
    fn same_seed_same_grid() {
        let cfg = GenConfig::default();
        let a = GridGen::new(StdRng::seed_from_u64(99)).generate(&cfg).unwrap();
        let b = GridGen::new(StdRng::seed_from_u64(99)).generate(&cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn extreme_densities() {
        let mut g = GridGen::new(StdRng::seed_from_u64(3));
        let walls = GenConfig {
            rows: 4,
            cols: 4,
            blocked_pct: 100,
            short_wall_pct: 0,
        };
        let grid = g.generate(&walls).unwrap();
        assert!(grid.iter().all(|(_, t)| t == Terrain::Blocked));
        assert_eq!(g.random_passable(&grid), None);

        let hops = GenConfig {
            blocked_pct: 0,
            short_wall_pct: 100,
            ..walls
        };
        let grid = g.generate(&hops).unwrap();
        assert!(grid.iter().all(|(_, t)| t == Terrain::ShortWall));
        let p = g.random_passable(&grid).unwrap();
        assert!(grid.contains(p));
    }

    #[test]
    fn zero_size_is_an_error() {
        let mut g = GridGen::new(StdRng::seed_from_u64(0));
        let cfg = GenConfig {
            rows: 0,
            ..GenConfig::default()
        };
        assert!(matches!(g.generate(&cfg), Err(GridError::Empty)));
    }
}

use hopgrid_core::{Point, TerrainGrid};

use crate::UNREACHABLE;
use crate::distance::manhattan;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

// ---------------------------------------------------------------------------
// Terrain grids are pathers out of the box
// ---------------------------------------------------------------------------

impl Pather for TerrainGrid {
    /// In-bounds, non-blocked cardinal neighbors (down, up, right, left).
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.is_passable(n)),
        );
    }
}

impl WeightedPather for TerrainGrid {
    /// Cost of entering `to`: 1 for open floor, 11 for a short wall.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        // Blocked cells are never yielded by `neighbors`.
        self.step_cost(to).unwrap_or(UNREACHABLE)
    }
}

impl AstarPather for TerrainGrid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

use hopgrid_core::{Bounds, Point};

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::node::Node;

/// A position with an associated cost, returned from Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in Dijkstra maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A start-to-goal path, both endpoints included.
///
/// Consecutive points are 4-adjacent and `cost` is the sum of the step
/// costs of every entered cell (the start cell is free).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub points: Vec<Point>,
    pub cost: i32,
}

impl Path {
    /// Number of points, endpoints included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A path always holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.points
    }
}

/// Counters for the most recent A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbors were examined.
    pub expanded: usize,
    /// Nodes added to the frontier (the start included).
    pub inserted: usize,
    /// Open nodes whose cost was lowered in place.
    pub updated: usize,
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid of the given bounds.
///
/// `PathRange` owns the node arenas, the frontier and a neighbor scratch
/// buffer, so that repeated queries on same-sized grids allocate nothing
/// after the first use. Each search still starts from a clean slate: a
/// generation counter lazily invalidates every record from earlier runs.
pub struct PathRange {
    pub(crate) bounds: Bounds,
    pub(crate) config: SearchConfig,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    pub(crate) frontier: Frontier,
    pub(crate) stats: SearchStats,
    // Dijkstra caches
    pub(crate) dijkstra_nodes: Vec<Node>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) dijkstra_results: Vec<PathNode>,
    pub(crate) dijkstra_map: Vec<i32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` with the default [`SearchConfig`].
    pub fn new(bounds: Bounds) -> Self {
        Self::with_config(bounds, SearchConfig::default())
    }

    /// Create a new `PathRange` with an explicit configuration.
    pub fn with_config(bounds: Bounds, config: SearchConfig) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            frontier: Frontier::new(config.tie_break),
            config,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            stats: SearchStats::default(),
            dijkstra_nodes: vec![Node::default(); len],
            dijkstra_generation: 0,
            dijkstra_results: Vec::new(),
            dijkstra_map: vec![UNREACHABLE; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the grid bounds, growing caches when needed.
    ///
    /// Smaller or equal sizes keep the existing arenas; generations are
    /// bumped on the next search so old records are ignored.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        let new_len = bounds.len();
        self.bounds = bounds;
        if new_len > self.astar_nodes.len() {
            self.astar_nodes.resize(new_len, Node::default());
            self.dijkstra_nodes.resize(new_len, Node::default());
        }
        self.dijkstra_map.clear();
        self.dijkstra_map.resize(new_len, UNREACHABLE);
        self.dijkstra_results.clear();
    }

    /// The grid bounds being used.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current search configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the search configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters collected by the most recent [`astar_path`](Self::astar_path).
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;

    #[test]
    fn set_bounds_smaller_preserves_capacity() {
        let mut pr = PathRange::new(Bounds::new(20, 20));
        let original_cap = pr.astar_nodes.len();

        let small = Bounds::new(5, 5);
        pr.set_bounds(small);
        assert_eq!(pr.bounds(), small);
        assert_eq!(pr.astar_nodes.len(), original_cap);
        assert_eq!(pr.dijkstra_map.len(), 25);
    }

    #[test]
    fn set_bounds_larger_reallocates() {
        let mut pr = PathRange::new(Bounds::new(5, 5));
        pr.set_bounds(Bounds::new(20, 20));
        assert_eq!(pr.astar_nodes.len(), 400);
        assert_eq!(pr.dijkstra_nodes.len(), 400);
    }

    #[test]
    fn config_accessors() {
        let mut pr = PathRange::new(Bounds::new(2, 2));
        assert_eq!(pr.config().tie_break, TieBreak::Fifo);
        pr.set_config(SearchConfig::with_tie_break(TieBreak::Lifo));
        assert_eq!(pr.config().tie_break, TieBreak::Lifo);
        assert_eq!(pr.last_stats(), SearchStats::default());
    }

    #[test]
    fn path_accessors() {
        let path = Path {
            points: vec![Point::new(0, 0), Point::new(0, 1)],
            cost: 1,
        };
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.goal(), Some(Point::new(0, 1)));
        assert_eq!(path.iter().count(), 2);
        let pts: Vec<Point> = path.into();
        assert_eq!(pts.len(), 2);
    }
}

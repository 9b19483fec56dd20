use hopgrid_core::Point;

use crate::PathRange;
use crate::config::TieBreak;
use crate::frontier::Frontier;
use crate::node::{NodeState, next_generation};
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`. Returns every reached node in the order it
    /// was finalized, i.e. by non-decreasing cost.
    ///
    /// The search is exhaustive, which makes it the reference answer for
    /// [`astar_path`](Self::astar_path): for any reachable goal the A* cost
    /// equals [`dijkstra_at`](Self::dijkstra_at) with the start as only source.
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_cost: i32,
    ) -> &[PathNode] {
        // Reset the flat cost map.
        for v in self.dijkstra_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.dijkstra_results.clear();

        let cur_gen = next_generation(&mut self.dijkstra_generation, &mut self.dijkstra_nodes);
        let mut open = Frontier::new(TieBreak::Fifo);

        // Seed sources.
        for &src in sources {
            let Some(si) = self.bounds.index(src) else {
                continue;
            };
            let n = &mut self.dijkstra_nodes[si];
            if n.state_in(cur_gen) != NodeState::Unseen {
                continue;
            }
            let seq = open.next_seq();
            n.open(cur_gen, 0, 0, None, seq);
            self.dijkstra_map[si] = 0;
            open.push(si, 0, seq);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.dijkstra_nodes[ci];
            if cn.state_in(cur_gen) != NodeState::Open || cn.g != current.f {
                continue;
            }
            let current_g = cn.g;
            self.dijkstra_nodes[ci].state = NodeState::Closed;

            let cp = self.bounds.point(ci);
            self.dijkstra_results.push(PathNode {
                pos: cp,
                cost: current_g,
            });

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                let tentative = current_g.saturating_add(pather.cost(cp, np));
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.dijkstra_nodes[ni];
                let seq = match n.state_in(cur_gen) {
                    NodeState::Closed => continue,
                    NodeState::Open if tentative >= n.g => continue,
                    NodeState::Open => n.seq,
                    NodeState::Unseen => open.next_seq(),
                };

                n.open(cur_gen, tentative, 0, Some(ci), seq);
                self.dijkstra_map[ni] = tentative;
                open.push(ni, tentative, seq);
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "dijkstra from {} sources: {} nodes reached",
            sources.len(),
            self.dijkstra_results.len()
        );
        &self.dijkstra_results
    }

    /// Query the Dijkstra cost at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the bounds or was not
    /// reached by the last `dijkstra_map` call.
    pub fn dijkstra_at(&self, p: Point) -> i32 {
        match self.bounds.index(p) {
            Some(i) => self.dijkstra_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopgrid_core::TerrainGrid;

    fn grid() -> TerrainGrid {
        TerrainGrid::from_codes(&[[0u8, 2, 0], [0, 1, 0], [0, 0, 0]]).unwrap()
    }

    #[test]
    fn costs_from_single_source() {
        let g = grid();
        let mut pr = PathRange::new(g.bounds());
        let reached = pr.dijkstra_map(&g, &[Point::new(0, 0)], UNREACHABLE);
        assert_eq!(reached.len(), 8);
        assert_eq!(reached[0], PathNode { pos: Point::new(0, 0), cost: 0 });
        assert!(reached.windows(2).all(|w| w[0].cost <= w[1].cost));

        assert_eq!(pr.dijkstra_at(Point::new(0, 1)), 11);
        assert_eq!(pr.dijkstra_at(Point::new(2, 2)), 4);
        // Around the bottom beats hopping the short wall: 6 < 12.
        assert_eq!(pr.dijkstra_at(Point::new(0, 2)), 6);
        assert_eq!(pr.dijkstra_at(Point::new(1, 1)), UNREACHABLE);
        assert_eq!(pr.dijkstra_at(Point::new(5, 5)), UNREACHABLE);
    }

    #[test]
    fn max_cost_limits_expansion() {
        let g = grid();
        let mut pr = PathRange::new(g.bounds());
        let reached = pr.dijkstra_map(&g, &[Point::new(0, 0)], 2);
        assert_eq!(reached.len(), 3);
        assert_eq!(pr.dijkstra_at(Point::new(2, 0)), 2);
        assert_eq!(pr.dijkstra_at(Point::new(2, 1)), UNREACHABLE);
    }

    #[test]
    fn multiple_sources() {
        let g = grid();
        let mut pr = PathRange::new(g.bounds());
        pr.dijkstra_map(&g, &[Point::new(0, 0), Point::new(0, 2)], UNREACHABLE);
        assert_eq!(pr.dijkstra_at(Point::new(0, 2)), 0);
        assert_eq!(pr.dijkstra_at(Point::new(1, 2)), 1);
        assert_eq!(pr.dijkstra_at(Point::new(2, 1)), 3);
        assert_eq!(pr.dijkstra_at(Point::new(0, 1)), 11);
    }

    #[test]
    fn repeated_maps_start_fresh() {
        let g = grid();
        let mut pr = PathRange::new(g.bounds());
        pr.dijkstra_map(&g, &[Point::new(2, 2)], UNREACHABLE);
        pr.dijkstra_map(&g, &[Point::new(0, 0)], 1);
        assert_eq!(pr.dijkstra_at(Point::new(2, 2)), UNREACHABLE);
        assert_eq!(pr.dijkstra_at(Point::new(1, 0)), 1);
    }
}

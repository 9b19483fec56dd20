use hopgrid_core::{Point, TerrainGrid};

use crate::PathRange;
use crate::config::SearchConfig;
use crate::error::{Endpoint, InvalidReason, SearchError};
use crate::node::{NodeState, next_generation};
use crate::pathrange::{Path, SearchStats};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) and its cost.
    /// Coordinates outside the bounds are rejected with
    /// [`SearchError::InvalidCoordinate`]; passability of the endpoints is
    /// the caller's business (see [`validate_endpoints`]).
    ///
    /// Among equal-`f` candidates the frontier follows
    /// [`SearchConfig::tie_break`], so results are reproducible. Once a
    /// coordinate is expanded it is never re-opened, which keeps the result
    /// optimal as long as the pather's estimate is consistent.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Path, SearchError> {
        let start_idx = self
            .bounds
            .index(from)
            .ok_or(SearchError::out_of_bounds(Endpoint::Start, from))?;
        let goal_idx = self
            .bounds
            .index(to)
            .ok_or(SearchError::out_of_bounds(Endpoint::Goal, to))?;

        self.stats = SearchStats::default();
        if start_idx == goal_idx {
            return Ok(Path {
                points: vec![from],
                cost: 0,
            });
        }

        let cur_gen = next_generation(&mut self.astar_generation, &mut self.astar_nodes);
        self.frontier.reset(self.config.tie_break);

        // Initialise the start node.
        let seq = self.frontier.next_seq();
        let start = &mut self.astar_nodes[start_idx];
        start.open(cur_gen, 0, pather.estimate(from, to), None, seq);
        let f = start.f();
        self.frontier.push(start_idx, f, seq);
        self.stats.inserted += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(current) = self.frontier.pop() else {
                break 'search Err(SearchError::NoPathFound);
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper update or already closed.
            let cn = &self.astar_nodes[ci];
            if cn.state_in(cur_gen) != NodeState::Open || cn.f() != current.f {
                continue;
            }

            self.astar_nodes[ci].state = NodeState::Closed;

            if ci == goal_idx {
                break 'search Ok(());
            }

            if let Some(limit) = self.config.max_expansions {
                if self.stats.expanded >= limit {
                    log::warn!(
                        "astar {from} -> {to}: expansion limit {limit} reached"
                    );
                    break 'search Err(SearchError::ExpansionLimit {
                        expanded: self.stats.expanded,
                    });
                }
            }

            self.stats.expanded += 1;
            let current_g = self.astar_nodes[ci].g;
            let current_point = self.bounds.point(ci);
            log::trace!("expand {current_point} g={current_g} f={}", current.f);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(pather.cost(current_point, np));

                let n = &mut self.astar_nodes[ni];
                let seq = match n.state_in(cur_gen) {
                    NodeState::Closed => continue,
                    NodeState::Open => {
                        if tentative_g >= n.g {
                            continue;
                        }
                        self.stats.updated += 1;
                        n.seq
                    }
                    NodeState::Unseen => {
                        self.stats.inserted += 1;
                        self.frontier.next_seq()
                    }
                };

                n.open(cur_gen, tentative_g, pather.estimate(np, to), Some(ci), seq);
                let f = n.f();
                self.frontier.push(ni, f, seq);
            }
        };

        self.nbuf = nbuf;

        let stats = self.stats;
        if let Err(e) = outcome {
            log::debug!(
                "astar {from} -> {to}: {e} ({} expanded, {} inserted)",
                stats.expanded,
                stats.inserted
            );
            return Err(e);
        }

        let path = Path {
            points: self.reconstruct(goal_idx),
            cost: self.astar_nodes[goal_idx].g,
        };
        log::debug!(
            "astar {from} -> {to}: cost {} over {} steps ({} expanded, {} inserted, {} updated, {} left queued)",
            path.cost,
            path.len() - 1,
            stats.expanded,
            stats.inserted,
            stats.updated,
            self.frontier.len()
        );
        Ok(path)
    }

    /// Walk parent links back from `goal_idx`, then reverse into
    /// start-to-goal order.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(goal_idx);
        while let Some(ci) = cur {
            path.push(self.bounds.point(ci));
            cur = self.astar_nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

/// Check that `start` and `goal` are inside `grid` and not blocked.
pub fn validate_endpoints(grid: &TerrainGrid, start: Point, goal: Point) -> Result<(), SearchError> {
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        let reason = match grid.at(point) {
            None => InvalidReason::OutOfBounds,
            Some(t) if !t.is_passable() => InvalidReason::Blocked,
            Some(_) => continue,
        };
        return Err(SearchError::InvalidCoordinate {
            endpoint,
            point,
            reason,
        });
    }
    Ok(())
}

/// Find a cheapest path on `grid` from `start` to `goal` with the default
/// configuration.
///
/// Returns the coordinates from `start` to `goal` inclusive.
pub fn search(grid: &TerrainGrid, start: Point, goal: Point) -> Result<Vec<Point>, SearchError> {
    search_with(grid, start, goal, &SearchConfig::default()).map(Vec::from)
}

/// Like [`search`], with an explicit configuration, returning the path cost too.
pub fn search_with(
    grid: &TerrainGrid,
    start: Point,
    goal: Point,
    config: &SearchConfig,
) -> Result<Path, SearchError> {
    validate_endpoints(grid, start, goal)?;
    let mut pr = PathRange::with_config(grid.bounds(), config.clone());
    pr.astar_path(grid, start, goal)
}

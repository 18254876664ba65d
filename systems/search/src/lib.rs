#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic best-first search for a route that collects every treasure.
//!
//! The engine pops the cheapest frontier node, expands its enterable hex
//! neighbours in a fixed direction order, applies each entered cell's effect,
//! scores the child with the straight-line heuristic and offers it to the
//! frontier. Expanded nodes live in an arena and point back at their parent,
//! so the winning route is rebuilt by following those links.

mod effects;
mod frontier;
mod heuristic;
mod node;

use std::collections::HashSet;

use hex_treasure_core::{
    CellCoord, PathStep, SearchConfig, SearchError, SearchOutcome, SearchStats, SearchStatus,
    StartPolicy,
};
use hex_treasure_world::{hex, Grid};
use log::{debug, info, trace, warn};

use crate::frontier::{Admission, Frontier};
use crate::node::{NodeArena, NodeId, SearchNode, StateKey};

/// Best-first treasure search configured once and run against any grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreasureSearch {
    config: SearchConfig,
}

impl TreasureSearch {
    /// Creates a search driven by the provided configuration.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Searches `grid` from `start` until the treasure quota is met or the
    /// frontier drains.
    ///
    /// Degenerate grids (empty, ragged, without treasures) never fail; they end
    /// in [`SearchStatus::Exhausted`] with an empty path.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidStart`] when the start cell cannot be
    /// entered and the configuration uses [`StartPolicy::Reject`].
    pub fn run(&self, grid: &Grid, start: CellCoord) -> Result<SearchOutcome, SearchError> {
        if self.config.start_policy == StartPolicy::Reject && !grid.is_valid(start) {
            return Err(SearchError::InvalidStart { cell: start });
        }

        Ok(self.launch(grid, start))
    }

    fn launch(&self, grid: &Grid, start: CellCoord) -> SearchOutcome {
        if !grid.is_valid(start) {
            warn!("start cell {start} is out of bounds or impassable; searching anyway");
        }

        if !grid.is_rectangular() {
            warn!("grid rows have uneven lengths; the search is not started");
            return SearchOutcome {
                status: SearchStatus::Exhausted,
                path: Vec::new(),
                stats: SearchStats::default(),
            };
        }

        let quota = self
            .config
            .required_treasures
            .unwrap_or(grid.treasures().len());
        debug!(
            "starting search at {start}: {} treasures on the grid, {quota} required",
            grid.treasures().len()
        );

        Run::new(grid, start, quota, self.config.expansion_limit).execute()
    }
}

/// Searches with the default configuration, which accepts any start cell and
/// requires every treasure on the grid.
#[must_use]
pub fn search(grid: &Grid, start: CellCoord) -> SearchOutcome {
    TreasureSearch::default().launch(grid, start)
}

/// State of one in-flight search.
struct Run<'grid> {
    grid: &'grid Grid,
    quota: usize,
    expansion_limit: Option<usize>,
    frontier: Frontier,
    explored: HashSet<StateKey>,
    arena: NodeArena,
    stats: SearchStats,
}

impl<'grid> Run<'grid> {
    fn new(
        grid: &'grid Grid,
        start: CellCoord,
        quota: usize,
        expansion_limit: Option<usize>,
    ) -> Self {
        Self {
            grid,
            quota,
            expansion_limit,
            frontier: Frontier::with_root(SearchNode::root(start)),
            explored: HashSet::new(),
            arena: NodeArena::default(),
            stats: SearchStats::default(),
        }
    }

    fn execute(mut self) -> SearchOutcome {
        loop {
            if self
                .expansion_limit
                .is_some_and(|limit| self.stats.expanded >= limit)
            {
                debug!("expansion limit reached after {} expansions", self.stats.expanded);
                return self.finish(SearchStatus::Exhausted, Vec::new());
            }

            let Some(node) = self.frontier.pop() else {
                return self.finish(SearchStatus::Exhausted, Vec::new());
            };

            let _ = self.explored.insert(node.state_key());
            self.stats.expanded += 1;
            trace!(
                "expanding {} with energy {} and {} treasures",
                node.cell,
                node.energy_cost,
                node.treasures.len()
            );

            let reached_goal = self.is_goal(&node);
            let id = self.arena.push(node);
            if reached_goal {
                let path = self.arena.path_to(id);
                return self.finish(SearchStatus::Goal, path);
            }

            self.expand(id);
        }
    }

    fn is_goal(&self, node: &SearchNode) -> bool {
        self.quota > 0 && node.treasures.len() >= self.quota
    }

    fn expand(&mut self, id: NodeId) {
        let parent = self.arena.get(id);

        for (direction, cell) in hex::valid_neighbors(self.grid, parent.cell) {
            let mut child = parent.child(id, direction, cell);
            effects::apply_effect(&mut child, self.grid);
            child.heuristic =
                heuristic::estimate(child.cell, self.grid.treasures(), &child.treasures);
            self.stats.generated += 1;

            if self.explored.contains(&child.state_key()) {
                self.stats.discarded += 1;
                continue;
            }

            match self.frontier.insert(child) {
                Admission::Inserted => {}
                Admission::Replaced => {
                    debug!("cheaper route to a queued state found via {direction} into {cell}");
                }
                Admission::Dominated => self.stats.discarded += 1,
            }
        }
    }

    fn finish(mut self, status: SearchStatus, path: Vec<PathStep>) -> SearchOutcome {
        self.stats.frontier_remaining = self.frontier.len();
        info!(
            "search ended {status:?}: {} expanded, {} generated, {} discarded, path of {} steps",
            self.stats.expanded,
            self.stats.generated,
            self.stats.discarded,
            path.len()
        );
        SearchOutcome {
            status,
            path,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_treasure_core::{CellKind, Direction};

    #[test]
    fn adjacent_treasure_is_one_move_away() {
        let grid = Grid::new(vec![vec![CellKind::Empty, CellKind::Treasure]]);

        let outcome = search(&grid, CellCoord::new(0, 0));

        assert!(outcome.is_goal());
        assert_eq!(outcome.path.len(), 2);
        let last = outcome.last_step().expect("goal step");
        assert_eq!(last.direction, Some(Direction::NorthEast));
        assert_eq!(last.energy_cost, 1.0);
        assert_eq!(last.step_cost, 1.0);
    }

    #[test]
    fn strict_start_policy_rejects_blocked_start() {
        let grid = Grid::new(vec![vec![CellKind::Obstacle, CellKind::Treasure]]);
        let engine = TreasureSearch::new(SearchConfig {
            start_policy: StartPolicy::Reject,
            ..SearchConfig::default()
        });

        assert_eq!(
            engine.run(&grid, CellCoord::new(0, 0)),
            Err(SearchError::InvalidStart {
                cell: CellCoord::new(0, 0)
            })
        );
    }

    #[test]
    fn lenient_start_policy_still_expands_from_blocked_start() {
        let grid = Grid::new(vec![vec![CellKind::Obstacle, CellKind::Treasure]]);

        let outcome = TreasureSearch::default()
            .run(&grid, CellCoord::new(0, 0))
            .expect("lenient policy never fails");

        assert!(outcome.is_goal());
        assert_eq!(outcome.path.len(), 2);
    }

    #[test]
    fn expansion_limit_stops_the_search() {
        let grid = Grid::new(vec![vec![
            CellKind::Empty,
            CellKind::Empty,
            CellKind::Empty,
            CellKind::Treasure,
        ]]);
        let engine = TreasureSearch::new(SearchConfig {
            expansion_limit: Some(2),
            ..SearchConfig::default()
        });

        let outcome = engine.run(&grid, CellCoord::new(0, 0)).expect("search runs");

        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.stats.expanded, 2);
    }

    #[test]
    fn zero_quota_is_never_satisfied() {
        let grid = Grid::new(vec![vec![CellKind::Empty, CellKind::Treasure]]);
        let engine = TreasureSearch::new(SearchConfig {
            required_treasures: Some(0),
            ..SearchConfig::default()
        });

        let outcome = engine.run(&grid, CellCoord::new(0, 0)).expect("search runs");

        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert_eq!(outcome.stats.frontier_remaining, 0);
    }
}

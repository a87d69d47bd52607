use crate::cell::Mark;
use crate::frontier::{Frontier, SearchTree};
use crate::grid::Grid;
use crate::STEP_COST;
use core::fmt;
use grid_util::point::Point;
use log::{debug, info, trace, warn};

pub mod astar;
pub mod dijkstra;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

/// Result of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to end inclusive, if the end was reached.
    pub path: Option<Vec<Point>>,
    /// Every cell taken off the frontier, in order. Ends with the end cell on success.
    pub dequeued: Vec<Point>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
    /// Number of steps along the path.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// A best-first search over the cached neighbour lists of a [Grid]. Implementors only choose
/// the heuristic; the expansion loop is shared.
pub trait GridSolver {
    /// Estimated remaining cost from `p1` to `p2`. Must never overestimate.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32;

    fn name(&self) -> &'static str;

    /// Runs the search from `start` to `end`, writing [Mark]s into `grid` as cells are
    /// discovered, expanded and finally put on the path. `step` is called with the grid after
    /// every expansion and after every path cell is marked. The end cell itself is neither
    /// expanded nor marked as path, it keeps its [Mark::Frontier].
    ///
    /// Neighbour lists must be current, see [Grid::recompute_all_neighbours].
    fn search<F>(&self, grid: &mut Grid, start: Point, end: Point, mut step: F) -> SearchOutcome
    where
        F: FnMut(&Grid),
    {
        if grid.neighbours_dirty() {
            warn!("Searching with stale neighbour lists, obstacles edited since last recompute");
        }
        info!("Running {} from {} to {}", self.name(), start, end);
        let mut tree = SearchTree::with_root(start);
        let mut frontier = Frontier::new();
        frontier.push(0, self.heuristic(&start, &end), 0);
        let mut dequeued = Vec::new();

        while let Some(entry) = frontier.pop() {
            let Some((current, _, cost)) = tree.get(entry.index) else {
                continue;
            };
            // A cheaper route was found after this entry was pushed; its replacement has
            // already been handled or is still queued.
            if entry.cost > cost {
                continue;
            }
            frontier.remove(entry.index);
            dequeued.push(current);
            trace!("Expanding {} at cost {} (key {})", current, cost, entry.key);

            if current == end {
                let path = mark_path(grid, &tree, entry.index, &mut step);
                debug!(
                    "{} reached {} at cost {} after {} expansions",
                    self.name(),
                    end,
                    cost,
                    dequeued.len()
                );
                return SearchOutcome {
                    path: Some(path),
                    dequeued,
                };
            }

            let new_cost = cost + STEP_COST;
            let neighbours = grid.neighbours(&current).to_vec();
            for neighbour in neighbours {
                if let Some(n) = tree.relax(neighbour, entry.index, new_cost) {
                    let key = new_cost + self.heuristic(&neighbour, &end);
                    if frontier.push(n, key, new_cost) {
                        grid.set_mark(neighbour, Mark::Frontier);
                    }
                }
            }
            step(grid);
            if current != start {
                grid.set_mark(current, Mark::Visited);
            }
        }
        info!(
            "{} exhausted the frontier after {} expansions, {} is unreachable",
            self.name(),
            dequeued.len(),
            end
        );
        SearchOutcome {
            path: None,
            dequeued,
        }
    }

    /// Boolean form of [search](Self::search): true if `end` was reached and its path marked.
    fn run_search<F>(&self, grid: &mut Grid, start: Point, end: Point, step: F) -> bool
    where
        F: FnMut(&Grid),
    {
        self.search(grid, start, end, step).found()
    }
}

/// Marks the predecessors of `index` back to the root as [Mark::Path], calling `step` after
/// each cell, and returns the whole chain including `index` in start-to-end order.
fn mark_path<F>(grid: &mut Grid, tree: &SearchTree, index: usize, step: &mut F) -> Vec<Point>
where
    F: FnMut(&Grid),
{
    let mut path = tree
        .ancestry(index)
        .filter_map(|ix| tree.get(ix))
        .map(|(point, _, _)| point)
        .collect::<Vec<_>>();
    for &point in path.iter().skip(1) {
        grid.set_mark(point, Mark::Path);
        step(grid);
    }
    path.reverse();
    path
}

/// Runtime choice between the two solvers, as picked by the user of a
/// [Session](crate::Session).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

impl GridSolver for Algorithm {
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        match self {
            Algorithm::AStar => AstarSolver.heuristic(p1, p2),
            Algorithm::Dijkstra => DijkstraSolver.heuristic(p1, p2),
        }
    }
    fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => AstarSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

use grid_util::point::Point;

use crate::{manhattan_distance, solver::GridSolver};

/// A* guided by the Manhattan distance to the end.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        manhattan_distance(p1, p2)
    }
    fn name(&self) -> &'static str {
        "A*"
    }
}

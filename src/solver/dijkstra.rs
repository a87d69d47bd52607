use grid_util::point::Point;

use crate::solver::GridSolver;

/// Uniform-cost search: A* with a zero heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> u32 {
        0
    }
    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstarSolver, Grid, Mark, Role};

    fn open_grid(rows: usize) -> Grid {
        let mut grid = Grid::new(rows, rows as u32 * 10);
        grid.recompute_all_neighbours();
        grid
    }

    /// Equal costs are expanded in discovery order, giving breadth-first layers.
    #[test]
    fn expands_in_insertion_order() {
        let mut grid = open_grid(3);
        let outcome = DijkstraSolver.search(&mut grid, Point::new(0, 0), Point::new(0, 2), |_| {});
        assert_eq!(
            outcome.dequeued,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(0, 2),
            ]
        );
        assert_eq!(
            outcome.path.unwrap(),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(grid.mark(&Point::new(1, 0)), Some(Mark::Visited));
        assert_eq!(grid.mark(&Point::new(1, 2)), Some(Mark::Frontier));
        assert_eq!(grid.mark(&Point::new(2, 2)), Some(Mark::None));
    }

    #[test]
    fn straight_line_example() {
        let mut grid = open_grid(5);
        let outcome = DijkstraSolver.search(&mut grid, Point::new(0, 0), Point::new(0, 4), |_| {});
        assert_eq!(
            outcome.path.unwrap(),
            (0..5).map(|y| Point::new(0, y)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn explores_at_least_as_much_as_astar() {
        let start = Point::new(0, 0);
        let end = Point::new(9, 9);
        let mut dijkstra_grid = open_grid(10);
        let mut astar_grid = open_grid(10);
        let dijkstra = DijkstraSolver.search(&mut dijkstra_grid, start, end, |_| {});
        let astar = AstarSolver.search(&mut astar_grid, start, end, |_| {});
        assert_eq!(dijkstra.cost(), astar.cost());
        assert!(dijkstra.dequeued.len() >= astar.dequeued.len());
    }

    #[test]
    fn exhausts_reachable_region() {
        // Wall across the middle row, end on the far side.
        let mut grid = Grid::new(5, 50);
        for y in 0..5 {
            grid.change_state(Point::new(2, y), Role::Obstacle).unwrap();
        }
        grid.recompute_all_neighbours();
        let end = Point::new(4, 4);
        let outcome = DijkstraSolver.search(&mut grid, Point::new(0, 0), end, |_| {});
        assert!(!outcome.found());
        assert_eq!(outcome.dequeued.len(), 10);
        assert_eq!(grid.mark(&end), Some(Mark::None));
        assert_eq!(grid.mark(&Point::new(1, 4)), Some(Mark::Visited));
    }
}

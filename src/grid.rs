use crate::cell::{Cell, Mark, Role};
use crate::error::GridError;
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Offsets of the 4-neighbourhood in the order they are expanded: down, up, right, left.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// [Grid] holds the square lattice of [Cell]s of a session. Besides the cells it maintains a
/// [UnionFind] over traversable cells so that reachability can be answered without searching.
///
/// Neighbour lists are cached per cell and go stale whenever a cell gains or loses the
/// [Role::Obstacle] role; [recompute_all_neighbours](Self::recompute_all_neighbours) must run
/// before the next search.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cell_size: u32,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    neighbours_dirty: bool,
}

impl Grid {
    /// Creates a `rows` x `rows` grid of empty cells for a window `width` pixels wide.
    pub fn new(rows: usize, width: u32) -> Grid {
        let cell_size = width.checked_div(rows as u32).unwrap_or(0);
        let cells = iproduct!(0..rows as i32, 0..rows as i32)
            .map(|(x, y)| Cell::new(Point::new(x, y), cell_size))
            .collect();
        Grid {
            rows,
            cell_size,
            cells,
            components: UnionFind::new(rows * rows),
            components_dirty: true,
            neighbours_dirty: true,
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        let n = self.rows as i32;
        point.x >= 0 && point.y >= 0 && point.x < n && point.y < n
    }
    fn get_ix_point(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.x as usize * self.rows + point.y as usize)
    }
    fn checked_ix(&self, point: &Point) -> Result<usize, GridError> {
        self.get_ix_point(point)
            .ok_or(GridError::OutOfBounds(*point, self.rows))
    }
    pub fn cell(&self, point: &Point) -> Option<&Cell> {
        self.get_ix_point(point).map(|ix| &self.cells[ix])
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    pub fn role(&self, point: &Point) -> Option<Role> {
        self.cell(point).map(Cell::role)
    }
    pub fn mark(&self, point: &Point) -> Option<Mark> {
        self.cell(point).map(Cell::mark)
    }
    /// Cached traversable neighbours of `point`, empty if out of bounds.
    pub fn neighbours(&self, point: &Point) -> &[Point] {
        self.cell(point).map(Cell::neighbours).unwrap_or(&[])
    }
    /// True if an obstacle was placed or removed since the last
    /// [recompute_all_neighbours](Self::recompute_all_neighbours).
    pub fn neighbours_dirty(&self) -> bool {
        self.neighbours_dirty
    }
    fn can_move_to(&self, point: &Point) -> bool {
        self.cell(point).is_some_and(|c| !c.is_obstacle())
    }

    /// Maps a window pixel to the cell beneath it.
    pub fn cell_at_pixel(&self, px: u32, py: u32) -> Option<Point> {
        if self.cell_size == 0 {
            return None;
        }
        let point = Point::new((px / self.cell_size) as i32, (py / self.cell_size) as i32);
        self.in_bounds(&point).then_some(point)
    }

    /// Sets the role of a cell and clears its mark. Placing or removing an obstacle invalidates
    /// the cached neighbour lists and the components.
    pub fn change_state(&mut self, point: Point, role: Role) -> Result<(), GridError> {
        let ix = self.checked_ix(&point)?;
        let cell = &mut self.cells[ix];
        if (cell.role == Role::Obstacle) != (role == Role::Obstacle) {
            self.neighbours_dirty = true;
            self.components_dirty = true;
        }
        cell.role = role;
        cell.mark = Mark::None;
        Ok(())
    }
    /// Returns a cell to [Role::Empty] with no mark.
    pub fn reset(&mut self, point: Point) -> Result<(), GridError> {
        self.change_state(point, Role::Empty)
    }
    /// Marks written during a search always target cells taken from the grid itself.
    pub(crate) fn set_mark(&mut self, point: Point, mark: Mark) {
        if let Some(ix) = self.get_ix_point(&point) {
            self.cells[ix].mark = mark;
        }
    }
    /// Wipes all search marks, leaving roles untouched.
    pub fn clear_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.mark = Mark::None;
        }
    }

    /// Rebuilds the neighbour list of a single cell from the current obstacle layout.
    pub fn update_neighbours(&mut self, point: Point) {
        let Some(ix) = self.get_ix_point(&point) else {
            return;
        };
        let neighbours = NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(p))
            .collect::<Vec<Point>>();
        self.cells[ix].neighbours = neighbours;
    }
    /// Rebuilds every neighbour list. Must run after obstacle edits and before a search.
    pub fn recompute_all_neighbours(&mut self) {
        debug!("Recomputing neighbours of {} cells", self.cells.len());
        let n = self.rows as i32;
        for (x, y) in iproduct!(0..n, 0..n) {
            self.update_neighbours(Point::new(x, y));
        }
        self.neighbours_dirty = false;
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up traversable grid neighbours to the
    /// same components.
    pub fn generate_components(&mut self) {
        let n = self.rows as i32;
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for (x, y) in iproduct!(0..n, 0..n) {
            let point = Point::new(x, y);
            if !self.can_move_to(&point) {
                continue;
            }
            let parent_ix = point.x as usize * self.rows + point.y as usize;
            // Linking down and right covers every edge once.
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(&p) {
                    let ix = p.x as usize * self.rows + p.y as usize;
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
    /// Checks if start and goal are traversable and on the same component. Only meaningful
    /// while the components are not dirty.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_ix_point(start), self.get_ix_point(goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                self.can_move_to(start)
                    && self.can_move_to(goal)
                    && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.rows.max(1)) {
            let line = row.iter().map(Cell::glyph).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_laid_out_by_cell_size() {
        let grid = Grid::new(50, 800);
        assert_eq!(grid.cell_size(), 16);
        assert_eq!(grid.cells().count(), 2500);
        let cell = grid.cell(&Point::new(3, 7)).unwrap();
        assert_eq!(cell.position(), Point::new(3, 7));
        assert_eq!(cell.origin(), (48, 112));
        assert_eq!(cell.role(), Role::Empty);
        assert_eq!(cell.mark(), Mark::None);
        assert!(grid.cell(&Point::new(50, 0)).is_none());
        assert!(grid.cell(&Point::new(0, -1)).is_none());
    }

    #[test]
    fn pixels_map_to_cells() {
        let grid = Grid::new(50, 800);
        assert_eq!(grid.cell_at_pixel(0, 0), Some(Point::new(0, 0)));
        assert_eq!(grid.cell_at_pixel(17, 40), Some(Point::new(1, 2)));
        assert_eq!(grid.cell_at_pixel(799, 799), Some(Point::new(49, 49)));
        assert_eq!(grid.cell_at_pixel(800, 10), None);
    }

    #[test]
    fn neighbours_skip_obstacles_and_edges() {
        // .#.
        // ...
        // ...
        let mut grid = Grid::new(3, 30);
        grid.change_state(Point::new(0, 1), Role::Obstacle).unwrap();
        grid.recompute_all_neighbours();
        assert!(!grid.neighbours_dirty());
        assert_eq!(grid.neighbours(&Point::new(0, 0)), &[Point::new(1, 0)]);
        assert_eq!(
            grid.neighbours(&Point::new(1, 1)),
            &[
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(1, 0)
            ]
        );
        assert_eq!(grid.neighbours(&Point::new(2, 2)).len(), 2);
    }

    #[test]
    fn obstacle_edits_dirty_the_cache() {
        let mut grid = Grid::new(3, 30);
        grid.recompute_all_neighbours();
        grid.change_state(Point::new(1, 1), Role::Start).unwrap();
        assert!(!grid.neighbours_dirty());
        grid.change_state(Point::new(1, 1), Role::Obstacle).unwrap();
        assert!(grid.neighbours_dirty());
        assert_eq!(grid.neighbours(&Point::new(0, 1)).len(), 3);
        grid.recompute_all_neighbours();
        assert_eq!(grid.neighbours(&Point::new(0, 1)).len(), 2);
        grid.reset(Point::new(1, 1)).unwrap();
        assert!(grid.neighbours_dirty());
    }

    #[test]
    fn recomputing_twice_is_idempotent() {
        let mut grid = Grid::new(6, 60);
        for p in [Point::new(1, 1), Point::new(2, 4), Point::new(5, 0)] {
            grid.change_state(p, Role::Obstacle).unwrap();
        }
        grid.recompute_all_neighbours();
        let first = grid
            .cells()
            .map(|c| c.neighbours().to_vec())
            .collect::<Vec<_>>();
        grid.recompute_all_neighbours();
        let second = grid
            .cells()
            .map(|c| c.neighbours().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_bounds_edits_are_rejected() {
        let mut grid = Grid::new(3, 30);
        assert_eq!(
            grid.change_state(Point::new(3, 0), Role::Obstacle),
            Err(GridError::OutOfBounds(Point::new(3, 0), 3))
        );
    }

    #[test]
    fn changing_role_clears_mark() {
        let mut grid = Grid::new(3, 30);
        grid.set_mark(Point::new(2, 2), Mark::Visited);
        assert_eq!(grid.mark(&Point::new(2, 2)), Some(Mark::Visited));
        grid.change_state(Point::new(2, 2), Role::Obstacle).unwrap();
        assert_eq!(grid.mark(&Point::new(2, 2)), Some(Mark::None));
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // .#.
        // .#.
        // .#.
        let mut grid = Grid::new(3, 30);
        for x in 0..3 {
            grid.change_state(Point::new(x, 1), Role::Obstacle).unwrap();
        }
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(!grid.reachable(&Point::new(0, 0), &Point::new(0, 2)));
        assert!(!grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(!grid.reachable(&Point::new(0, 0), &Point::new(3, 0)));
    }

    #[test]
    fn renders_roles_over_marks() {
        let mut grid = Grid::new(3, 30);
        grid.change_state(Point::new(0, 0), Role::Start).unwrap();
        grid.change_state(Point::new(2, 2), Role::End).unwrap();
        grid.change_state(Point::new(1, 1), Role::Obstacle).unwrap();
        grid.set_mark(Point::new(0, 0), Mark::Path);
        grid.set_mark(Point::new(0, 1), Mark::Path);
        grid.set_mark(Point::new(1, 0), Mark::Visited);
        grid.set_mark(Point::new(2, 0), Mark::Frontier);
        assert_eq!(grid.to_string(), "S*.\nx#.\no.E\n");
        grid.clear_marks();
        assert_eq!(grid.to_string(), "S..\n.#.\n..E\n");
    }
}

use grid_util::point::Point;

/// What the user placed on a cell. Only one cell of a grid is [Role::Start] and only one is
/// [Role::End]; the [Session](crate::Session) enforces this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Obstacle,
}

/// What the last search did with a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    None,
    /// Discovered and waiting in the frontier.
    Frontier,
    /// Dequeued and expanded.
    Visited,
    /// Part of the reconstructed path.
    Path,
}

/// A single grid square. Cells are addressed by [Point] with `x` as the row and `y` as the
/// column, so the pixel origin is `(x * cell_size, y * cell_size)`.
#[derive(Clone, Debug)]
pub struct Cell {
    position: Point,
    origin: (u32, u32),
    pub(crate) role: Role,
    pub(crate) mark: Mark,
    pub(crate) neighbours: Vec<Point>,
}

impl Cell {
    pub(crate) fn new(position: Point, cell_size: u32) -> Cell {
        Cell {
            position,
            origin: (
                position.x as u32 * cell_size,
                position.y as u32 * cell_size,
            ),
            role: Role::Empty,
            mark: Mark::None,
            neighbours: Vec::with_capacity(4),
        }
    }
    pub fn position(&self) -> Point {
        self.position
    }
    /// Top-left corner of the cell in window pixels.
    pub fn origin(&self) -> (u32, u32) {
        self.origin
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn mark(&self) -> Mark {
        self.mark
    }
    /// Traversable neighbours as of the last recomputation.
    pub fn neighbours(&self) -> &[Point] {
        &self.neighbours
    }
    pub fn is_obstacle(&self) -> bool {
        self.role == Role::Obstacle
    }
    /// Character used by the text rendering of a [Grid](crate::Grid). Roles take precedence
    /// over marks.
    pub fn glyph(&self) -> char {
        match (self.role, self.mark) {
            (Role::Obstacle, _) => '#',
            (Role::Start, _) => 'S',
            (Role::End, _) => 'E',
            (Role::Empty, Mark::Path) => '*',
            (Role::Empty, Mark::Visited) => 'x',
            (Role::Empty, Mark::Frontier) => 'o',
            (Role::Empty, Mark::None) => '.',
        }
    }
}

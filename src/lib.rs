//! # grid_search_viz
//!
//! The search core behind interactive visualizations of
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) on a square grid with
//! 4-connectivity and unit edge costs.
//!
//! A [Grid] keeps two orthogonal tags per cell: a permanent [Role] set by the user (start, end,
//! obstacle) and a transient [Mark] written by the search (frontier, visited, path). Solvers
//! implementing [GridSolver] expand cells one at a time and hand the grid to a step callback
//! after every expansion, so a renderer can draw each intermediate state. [Session] bundles the
//! grid with the editing rules of the interactive demos.
//!
//! ```
//! use grid_search_viz::{Algorithm, GridSolver, Session, SessionConfig};
//! use grid_util::point::Point;
//!
//! let mut session = Session::new(SessionConfig { rows: 5, width: 100 }).unwrap();
//! session.primary_edit(Point::new(0, 0)).unwrap(); // start
//! session.primary_edit(Point::new(4, 4)).unwrap(); // end
//! session.primary_edit(Point::new(2, 2)).unwrap(); // obstacle
//! session.set_algorithm(Algorithm::AStar);
//! let mut frames = 0;
//! let outcome = session.run(|_grid| frames += 1).unwrap();
//! assert_eq!(outcome.cost(), Some(8));
//! assert!(frames > 0);
//! ```
pub mod cell;
pub mod config;
pub mod error;
mod frontier;
pub mod grid;
pub mod session;
pub mod solver;


use grid_util::point::Point;

pub use cell::{Cell, Mark, Role};
pub use config::SessionConfig;
pub use error::{ConfigError, GridError, SessionError};
pub use grid::Grid;
pub use session::Session;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, Algorithm, GridSolver, SearchOutcome};

/// Cost of moving to an orthogonally adjacent cell.
pub const STEP_COST: u32 = 1;

/// Sum of the absolute coordinate differences. Admissible and consistent for orthogonal moves
/// with [STEP_COST] per move.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> u32 {
    p1.manhattan_distance(p2) as u32 * STEP_COST
}

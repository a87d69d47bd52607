use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid must have at least one row")]
    NoRows,

    #[error("Window width {width} is too small for {rows} rows")]
    WidthTooSmall { width: u32, rows: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell {0} lies outside the {1}x{1} grid")]
    OutOfBounds(Point, usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot search without a start cell")]
    MissingStart,

    #[error("Cannot search without an end cell")]
    MissingEnd,

    #[error("Invalid edit: {0}")]
    Grid(#[from] GridError),
}

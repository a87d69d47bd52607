use crate::cell::Role;
use crate::config::SessionConfig;
use crate::error::{ConfigError, SessionError};
use crate::grid::Grid;
use crate::solver::{Algorithm, GridSolver, SearchOutcome};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info};

/// State of one interactive run of the demo: the grid, the placed start and end and the chosen
/// algorithm. Edits follow the mouse rules of the demo: the primary button places the start,
/// then the end, then obstacles; the secondary button erases.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    algorithm: Algorithm,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Session, ConfigError> {
        config.validate()?;
        info!(
            "New {}x{} session, {} px cells",
            config.rows,
            config.rows,
            config.cell_size()
        );
        Ok(Session {
            config,
            grid: Grid::new(config.rows, config.width),
            start: None,
            end: None,
            algorithm: Algorithm::default(),
        })
    }
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }
    pub fn cell_at_pixel(&self, px: u32, py: u32) -> Option<Point> {
        self.grid.cell_at_pixel(px, py)
    }

    /// Left click: places the start if there is none, otherwise the end if there is none,
    /// otherwise an obstacle. The start and end cells are never overwritten.
    pub fn primary_edit(&mut self, point: Point) -> Result<(), SessionError> {
        let is_start = self.start == Some(point);
        let is_end = self.end == Some(point);
        if self.start.is_none() {
            self.grid.change_state(point, Role::Start)?;
            if is_end {
                self.end = None;
            }
            self.start = Some(point);
        } else if !is_start && self.end.is_none() {
            self.grid.change_state(point, Role::End)?;
            self.end = Some(point);
        } else if !is_start && !is_end {
            self.grid.change_state(point, Role::Obstacle)?;
        }
        Ok(())
    }

    /// Right click: erases the cell, forgetting it as start or end.
    pub fn secondary_edit(&mut self, point: Point) -> Result<(), SessionError> {
        self.grid.reset(point)?;
        if self.start == Some(point) {
            self.start = None;
        } else if self.end == Some(point) {
            self.end = None;
        }
        Ok(())
    }

    /// Starts over with an empty grid of the same dimensions.
    pub fn clear(&mut self) {
        debug!("Clearing grid");
        self.grid = Grid::new(self.config.rows, self.config.width);
        self.start = None;
        self.end = None;
    }

    /// Turns every cell except the start and end into an obstacle.
    pub fn fill_obstacles(&mut self) -> Result<(), SessionError> {
        let n = self.config.rows as i32;
        for (x, y) in iproduct!(0..n, 0..n) {
            let point = Point::new(x, y);
            if Some(point) != self.start && Some(point) != self.end {
                self.grid.change_state(point, Role::Obstacle)?;
            }
        }
        Ok(())
    }

    /// Checks if the end can be reached from the start with the current obstacles.
    pub fn reachable(&mut self) -> Option<bool> {
        let (start, end) = self.start.zip(self.end)?;
        self.grid.update();
        Some(self.grid.reachable(&start, &end))
    }

    /// Clears the previous run's marks, recomputes neighbours and components and runs the
    /// selected algorithm, handing the grid to `step` after every expansion.
    pub fn run<F>(&mut self, step: F) -> Result<SearchOutcome, SessionError>
    where
        F: FnMut(&Grid),
    {
        let start = self.start.ok_or(SessionError::MissingStart)?;
        let end = self.end.ok_or(SessionError::MissingEnd)?;
        self.grid.clear_marks();
        self.grid.recompute_all_neighbours();
        self.grid.update();
        let outcome = self.algorithm.search(&mut self.grid, start, end, step);
        match outcome.cost() {
            Some(cost) => info!(
                "{} found a path of cost {} expanding {} cells",
                self.algorithm,
                cost,
                outcome.dequeued.len()
            ),
            None => info!(
                "{} found no path after expanding {} cells",
                self.algorithm,
                outcome.dequeued.len()
            ),
        }
        Ok(outcome)
    }
}

//! Contract violations reported by the search engine.

use std::fmt;

use gridstar_core::{CellState, GridError, Point};

/// Misuse of [`Solver::solve`](crate::Solver::solve) or the worker.
///
/// Not finding a path and being cancelled are ordinary
/// [`Outcome`](crate::Outcome)s, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid refused the search (typically it was already searched).
    Grid(GridError),
    StartOutOfBounds(Point),
    GoalOutOfBounds(Point),
    /// Start and goal are the same cell.
    StartIsGoal(Point),
    /// The start cell is not in [`CellState::Start`].
    StartNotDesignated { pos: Point, found: CellState },
    /// The goal cell is not in [`CellState::Goal`].
    GoalNotDesignated { pos: Point, found: CellState },
    /// The worker thread could not be created.
    WorkerSpawn(String),
    /// The worker thread panicked before reporting.
    WorkerPanicked,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::StartOutOfBounds(p) => write!(f, "search: start {p} is outside the grid"),
            Self::GoalOutOfBounds(p) => write!(f, "search: goal {p} is outside the grid"),
            Self::StartIsGoal(p) => write!(f, "search: start and goal are both {p}"),
            Self::StartNotDesignated { pos, found } => {
                write!(f, "search: start {pos} is marked {found}, not start")
            }
            Self::GoalNotDesignated { pos, found } => {
                write!(f, "search: goal {pos} is marked {found}, not goal")
            }
            Self::WorkerSpawn(e) => write!(f, "search: cannot spawn worker: {e}"),
            Self::WorkerPanicked => f.write_str("search: worker panicked"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

//! Errors raised when a grid is set up incorrectly.

use std::fmt;

use crate::cell::CellState;
use crate::geom::Point;

/// Contract violations detected while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns is zero or negative.
    InvalidDimensions { rows: i32, columns: i32 },
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Point, rows: i32, columns: i32 },
    /// The state is assigned by the search engine only.
    ReservedState(CellState),
    /// The grid already went through a search; build a new one.
    AlreadySearched,
    /// An ASCII layout has rows of differing widths.
    RaggedLayout { row: usize, expected: usize, found: usize },
    /// An ASCII layout contains an unknown character.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => {
                write!(f, "grid: invalid dimensions {rows}x{columns}")
            }
            Self::OutOfBounds { pos, rows, columns } => {
                write!(f, "grid: {pos} is outside the {rows}x{columns} grid")
            }
            Self::ReservedState(state) => {
                write!(f, "grid: state \u{201c}{state}\u{201d} is reserved for the search")
            }
            Self::AlreadySearched => f.write_str("grid: already searched, start a new round"),
            Self::RaggedLayout {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: layout row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

//! **gridstar-core** — the cell model behind gridstar's A* search.
//!
//! This crate provides the leaf types the search engine operates on:
//! integer geometry, the per-cell search state ([`Cell`]), the grid that
//! owns the cells for one round, the 8 movement directions with their fixed
//! 10/14 costs, and a cooperative cancellation token.

pub mod cell;
pub mod context;
pub mod direction;
pub mod distance;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState, UNREACHABLE};
pub use context::Context;
pub use direction::Direction;
pub use distance::{DIAGONAL_COST, Heuristic, ORTHOGONAL_COST, manhattan, move_cost, octile};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;

//! Cancellable A* search over [`gridstar_core::Grid`].
//!
//! The search moves in 8 directions at fixed costs (10 orthogonal, 14
//! diagonal) and reports every cell state change to a [`CellObserver`]:
//!
//! - [`Solver::solve`] (or the free [`solve`]) runs on the calling thread.
//! - [`spawn`] runs it on a dedicated worker and returns a [`SearchHandle`]
//!   that can be cancelled and joined.
//!
//! Pair [`spawn`] with a [`ChannelObserver`] to render progress from another
//! thread while the search runs.

mod astar;
mod config;
mod error;
mod frontier;
mod observer;
mod worker;

pub use astar::{Outcome, PathFound, Solver, solve};
pub use config::SearchConfig;
pub use error::SearchError;
pub use observer::{CellEvent, CellObserver, ChannelObserver, NoopObserver};
pub use worker::{SearchHandle, cancel, spawn};

//! Running a search on its own thread.
//!
//! [`spawn`] moves the grid onto a dedicated worker so the calling thread
//! stays free to render events and to cancel. The grid comes back through
//! [`SearchHandle::join`].

use std::thread::{self, JoinHandle};

use gridstar_core::{Context, Grid, Point};

use crate::astar::{Outcome, Solver, validate};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::observer::CellObserver;

type WorkerResult = (Grid, Result<Outcome, SearchError>);

/// Handle to an in-flight search.
#[derive(Debug)]
pub struct SearchHandle {
    ctx: Context,
    thread: JoinHandle<WorkerResult>,
}

impl SearchHandle {
    /// Ask the search to stop. It notices before its next expansion.
    pub fn cancel(&self) {
        log::info!("search worker: cancellation requested");
        self.ctx.cancel();
    }

    /// The cancellation token shared with the worker.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Whether the worker has returned.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the worker and take back the grid.
    pub fn join(self) -> Result<(Grid, Outcome), SearchError> {
        match self.thread.join() {
            Ok((grid, Ok(outcome))) => Ok((grid, outcome)),
            Ok((_, Err(e))) => Err(e),
            Err(_) => {
                log::warn!("search worker panicked");
                Err(SearchError::WorkerPanicked)
            }
        }
    }
}

/// Start a search on a dedicated thread.
///
/// Preconditions are checked on the calling thread, so a misconfigured grid
/// is rejected before anything is spawned.
pub fn spawn<O>(
    grid: Grid,
    start: Point,
    goal: Point,
    config: SearchConfig,
    mut observer: O,
) -> Result<SearchHandle, SearchError>
where
    O: CellObserver + Send + 'static,
{
    validate(&grid, start, goal)?;

    let ctx = Context::new();
    let worker_ctx = ctx.clone();
    let name = config.thread_name.clone();
    let solver = Solver::new(config);

    let thread = thread::Builder::new()
        .name(name.clone())
        .spawn(move || {
            let mut grid = grid;
            let result = solver.solve(&mut grid, start, goal, &worker_ctx, &mut observer);
            (grid, result)
        })
        .map_err(|e| SearchError::WorkerSpawn(e.to_string()))?;

    log::info!("search worker {name:?} started: {start} -> {goal}");
    Ok(SearchHandle { ctx, thread })
}

/// Request cancellation of an in-flight search.
pub fn cancel(handle: &SearchHandle) {
    handle.cancel();
}

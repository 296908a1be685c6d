//! 8-directional A* over a [`Grid`], with cooperative cancellation.
//!
//! The search mutates the grid in place: discovered cells turn
//! [`CellState::Frontier`], and on success the cells between start and goal
//! turn [`CellState::Path`]. Each transition is reported to a
//! [`CellObserver`] as it happens.
//!
//! A cell is queued again every time its cost improves; older entries for it
//! stay in the frontier and are skipped when popped. The goal is never
//! relaxed: it counts as found as soon as it is adjacent to an expanded cell.

use gridstar_core::{Cell, CellState, Context, Direction, Grid, Point, move_cost};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::observer::CellObserver;

/// A path from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFound {
    /// Every cell from start to goal, both included.
    pub path: Vec<Point>,
    /// Sum of the 10/14 step costs along the whole of `path`, goal step
    /// included. This is not the `g_cost` of the cell that found the goal.
    pub cost: i32,
    /// Number of frontier entries expanded.
    pub expanded: usize,
}

/// Result of a search that ran to a conclusion or was stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(PathFound),
    /// The frontier ran dry before the goal was reached.
    NoPath,
    /// Cancellation was observed; nothing can be concluded.
    Cancelled,
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&PathFound> {
        match self {
            Outcome::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// A* search engine.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a minimum-cost path from `start` to `goal`.
    ///
    /// `start` must be a cell marked [`CellState::Start`] and `goal` one
    /// marked [`CellState::Goal`]; the grid must not have been searched
    /// before. `ctx` is checked once per expansion.
    pub fn solve<O: CellObserver + ?Sized>(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
        ctx: &Context,
        observer: &mut O,
    ) -> Result<Outcome, SearchError> {
        validate(grid, start, goal)?;
        grid.begin_search()?;

        log::debug!(
            "astar: {start} -> {goal} on {}x{} grid, {:?} heuristic",
            grid.columns(),
            grid.rows(),
            self.config.heuristic
        );

        let mut frontier = Frontier::new();
        if let Some(s) = grid.at_mut(start) {
            s.seed();
            s.estimate_heuristic_with(goal, self.config.heuristic);
            frontier.push(start, s.total_cost());
        }
        if let Some(g) = grid.at_mut(goal) {
            g.set_h_cost(0);
        }

        let mut expanded = 0;
        loop {
            if ctx.is_done() {
                log::debug!("astar: cancelled after {expanded} expansions");
                return Ok(Outcome::Cancelled);
            }
            let Some((current, key)) = frontier.pop() else {
                log::debug!("astar: no path after {expanded} expansions");
                return Ok(Outcome::NoPath);
            };
            let Some(&from) = grid.at(current) else {
                continue;
            };
            if key > from.total_cost() {
                // Superseded by a cheaper entry for the same cell.
                continue;
            }
            expanded += 1;
            log::trace!("astar: expanding {from}, {} queued", frontier.len());

            if self.expand(grid, &from, goal, &mut frontier, observer) {
                break;
            }
        }

        let path = trace_path(grid, start, goal, observer);
        let cost = path.windows(2).map(|w| move_cost(w[0], w[1])).sum();
        log::debug!(
            "astar: path of {} steps, cost {cost}, {expanded} expansions",
            path.len() - 1
        );
        Ok(Outcome::Found(PathFound {
            path,
            cost,
            expanded,
        }))
    }

    /// Examine the eight neighbours of `from`. Returns `true` when the goal
    /// is among them.
    fn expand<O: CellObserver + ?Sized>(
        &self,
        grid: &mut Grid,
        from: &Cell,
        goal: Point,
        frontier: &mut Frontier,
        observer: &mut O,
    ) -> bool {
        for dir in Direction::ALL {
            let np = from.neighbor_coordinate(dir);
            let Some(n) = grid.at_mut(np) else {
                continue;
            };
            if !n.is_traversable() {
                continue;
            }
            if np == goal {
                n.set_parent(from.pos());
                return true;
            }

            let first_visit = !n.is_reached();
            if !n.try_relax(from) {
                continue;
            }
            if first_visit {
                n.estimate_heuristic_with(goal, self.config.heuristic);
                n.set_state(CellState::Frontier);
                observer.on_state_change(np, CellState::Frontier);
            }
            frontier.push(np, n.total_cost());
        }
        false
    }
}

/// Solve with the default configuration.
pub fn solve<O: CellObserver + ?Sized>(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    ctx: &Context,
    observer: &mut O,
) -> Result<Outcome, SearchError> {
    Solver::default().solve(grid, start, goal, ctx, observer)
}

/// Check the preconditions of a search without touching the grid.
pub(crate) fn validate(grid: &Grid, start: Point, goal: Point) -> Result<(), SearchError> {
    let s = grid.at(start).ok_or(SearchError::StartOutOfBounds(start))?;
    let g = grid.at(goal).ok_or(SearchError::GoalOutOfBounds(goal))?;
    if start == goal {
        return Err(SearchError::StartIsGoal(start));
    }
    if s.state() != CellState::Start {
        return Err(SearchError::StartNotDesignated {
            pos: start,
            found: s.state(),
        });
    }
    if g.state() != CellState::Goal {
        return Err(SearchError::GoalNotDesignated {
            pos: goal,
            found: g.state(),
        });
    }
    if grid.is_searched() {
        return Err(gridstar_core::GridError::AlreadySearched.into());
    }
    Ok(())
}

/// Walk parents back from the goal, marking every cell strictly between goal
/// and start as path. Returns the path in start-to-goal order.
fn trace_path<O: CellObserver + ?Sized>(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    observer: &mut O,
) -> Vec<Point> {
    let mut path = vec![goal];
    let mut next = grid.at(goal).and_then(Cell::parent);
    while let Some(p) = next {
        path.push(p);
        if p == start {
            break;
        }
        let Some(c) = grid.at_mut(p) else {
            break;
        };
        c.set_state(CellState::Path);
        observer.on_state_change(p, CellState::Path);
        next = c.parent();
    }
    path.reverse();
    path
}

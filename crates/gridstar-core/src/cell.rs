//! The [`Cell`] type — one grid position's search state.

use std::fmt;

use crate::direction::Direction;
use crate::distance::{Heuristic, move_cost};
use crate::geom::Point;

/// Sentinel cost meaning "not reached yet" (+infinity).
pub const UNREACHABLE: i32 = i32::MAX;

/// Traversability and rendering state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellState {
    #[default]
    Open,
    Blocked,
    Path,
    Frontier,
    Start,
    Goal,
}

impl CellState {
    /// Single-character form used by [`Grid::render_ascii`](crate::Grid::render_ascii).
    pub const fn glyph(self) -> char {
        match self {
            CellState::Open => '.',
            CellState::Blocked => '#',
            CellState::Path => '*',
            CellState::Frontier => 'o',
            CellState::Start => 'S',
            CellState::Goal => 'G',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<CellState> {
        match ch {
            '.' => Some(CellState::Open),
            '#' => Some(CellState::Blocked),
            '*' => Some(CellState::Path),
            'o' => Some(CellState::Frontier),
            'S' => Some(CellState::Start),
            'G' => Some(CellState::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellState::Open => "open",
            CellState::Blocked => "blocked",
            CellState::Path => "path",
            CellState::Frontier => "frontier",
            CellState::Start => "start",
            CellState::Goal => "goal",
        };
        f.write_str(s)
    }
}

/// Search state of a single grid position.
///
/// Identity is the coordinate: two cells compare equal when they sit at the
/// same position, whatever their costs or state. `parent` is a coordinate
/// into the owning [`Grid`](crate::Grid), never a reference.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    g_cost: i32,
    h_cost: i32,
    parent: Option<Point>,
    state: CellState,
}

impl Cell {
    /// A fresh, unreached, open cell at `pos`.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            g_cost: UNREACHABLE,
            h_cost: UNREACHABLE,
            parent: None,
            state: CellState::Open,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Accumulated movement cost from the start.
    #[inline]
    pub const fn g_cost(&self) -> i32 {
        self.g_cost
    }

    /// Heuristic estimate of the remaining cost.
    #[inline]
    pub const fn h_cost(&self) -> i32 {
        self.h_cost
    }

    /// Predecessor on the best known path.
    #[inline]
    pub const fn parent(&self) -> Option<Point> {
        self.parent
    }

    #[inline]
    pub const fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Whether the cell has been reached by a search.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.g_cost != UNREACHABLE
    }

    /// `g_cost + h_cost`, saturating to [`UNREACHABLE`] while either is infinite.
    #[inline]
    pub const fn total_cost(&self) -> i32 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// Relax this cell through `from`.
    ///
    /// Returns `true` if reaching the cell via `from` is strictly cheaper
    /// than the best known cost, in which case `g_cost` and `parent` are
    /// updated. `g_cost` never increases.
    pub fn try_relax(&mut self, from: &Cell) -> bool {
        if !from.is_reached() {
            return false;
        }
        let tentative = from.g_cost.saturating_add(move_cost(from.pos, self.pos));
        if tentative < self.g_cost {
            self.g_cost = tentative;
            self.parent = Some(from.pos);
            true
        } else {
            false
        }
    }

    /// Set `h_cost` to the Manhattan estimate towards `goal` and return it.
    ///
    /// The frontier keys on the value at insertion time, so this is called
    /// once, when the cell is first discovered.
    #[inline]
    pub fn estimate_heuristic(&mut self, goal: Point) -> i32 {
        self.estimate_heuristic_with(goal, Heuristic::Manhattan)
    }

    /// Like [`estimate_heuristic`](Self::estimate_heuristic) with an explicit metric.
    pub fn estimate_heuristic_with(&mut self, goal: Point, heuristic: Heuristic) -> i32 {
        self.h_cost = heuristic.estimate(self.pos, goal);
        self.h_cost
    }

    /// Whether a search may step onto this cell.
    ///
    /// The start is excluded: it is only ever a source.
    #[inline]
    pub const fn is_traversable(&self) -> bool {
        matches!(
            self.state,
            CellState::Open | CellState::Frontier | CellState::Goal
        )
    }

    /// Coordinate of the neighbour in `direction`. No bounds checking.
    #[inline]
    pub fn neighbor_coordinate(&self, direction: Direction) -> Point {
        self.pos + direction.offset()
    }

    /// Mark the cell as the search origin: zero cost, no parent.
    pub fn seed(&mut self) {
        self.g_cost = 0;
        self.parent = None;
    }

    /// Link the cell to `parent` without touching its cost.
    ///
    /// Used when the goal is reached: the goal is never relaxed, only
    /// attached to the cell that found it. `parent` must already be reached.
    pub fn set_parent(&mut self, parent: Point) {
        self.parent = Some(parent);
    }

    pub fn set_h_cost(&mut self, h: i32) {
        self.h_cost = h;
    }

    /// Forget all search bookkeeping, keeping position and state.
    pub fn reset(&mut self) {
        self.g_cost = UNREACHABLE;
        self.h_cost = UNREACHABLE;
        self.parent = None;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.state)?;
        if self.is_reached() {
            write!(f, " g={}", self.g_cost)?;
        }
        if self.h_cost != UNREACHABLE {
            write!(f, " h={}", self.h_cost)?;
        }
        Ok(())
    }
}

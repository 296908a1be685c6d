//! The [`Grid`] type — a fixed-size, row-major container of [`Cell`]s.
//!
//! A grid lives for one search round. Collaborators build it, designate the
//! start, goal and blocked cells with [`Grid::mark`], then hand it to the
//! search engine, which mutates cells in place. A new round starts from a
//! new grid (see [`Grid::next_round`]).

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A rectangular grid of cells addressed by `(x, y)` with
/// `0 <= x < columns` and `0 <= y < rows`.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    goal: Option<Point>,
    searched: bool,
}

impl Grid {
    /// Allocate a grid of all-open, unreached cells.
    pub fn new(rows: i32, columns: i32) -> Result<Self, GridError> {
        if rows <= 0 || columns <= 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        let bounds = Range::new(columns, rows);
        Ok(Self {
            cells: bounds.iter().map(Cell::new).collect(),
            bounds,
            start: None,
            goal: None,
            searched: false,
        })
    }

    /// Build a grid from a text layout, one line per row.
    ///
    /// Accepted characters are `.` (open), `#` (blocked), `S` (start) and
    /// `G` (goal). Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let columns = lines.first().map_or(0, |l| l.chars().count());
        let (height, width) = layout_dimensions(lines.len(), columns)?;
        let mut grid = Grid::new(height, width)?;

        for ((row, line), y) in lines.iter().enumerate().zip(0..height) {
            let found = line.chars().count();
            if found != columns {
                return Err(GridError::RaggedLayout {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (ch, x) in line.chars().zip(0..width) {
                let pos = Point::new(x, y);
                let state = CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos })?;
                if state != CellState::Open {
                    grid.mark(pos.x, pos.y, state)?;
                }
            }
        }
        Ok(grid)
    }

    /// A fresh grid with the same dimensions, start, goal and obstacles, but
    /// no search state.
    pub fn next_round(&self) -> Grid {
        let mut cells = self.cells.clone();
        for c in &mut cells {
            c.reset();
            if matches!(c.state(), CellState::Path | CellState::Frontier) {
                c.set_state(CellState::Open);
            }
        }
        Grid {
            cells,
            bounds: self.bounds,
            start: self.start,
            goal: self.goal,
            searched: false,
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Designated start, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Designated goal, if any.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Whether a search has already run on this grid.
    #[inline]
    pub fn is_searched(&self) -> bool {
        self.searched
    }

    /// Claim the grid for a search. Fails if one already ran.
    pub fn begin_search(&mut self) -> Result<(), GridError> {
        if self.searched {
            return Err(GridError::AlreadySearched);
        }
        self.searched = true;
        Ok(())
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(move |i| &mut self.cells[i])
    }

    /// Designate the state of the cell at `(x, y)` before solving.
    ///
    /// Marking `Start` or `Goal` moves that designation: the previous cell
    /// reverts to `Open`. Overwriting the current start or goal clears it.
    pub fn mark(&mut self, x: i32, y: i32, state: CellState) -> Result<(), GridError> {
        let pos = Point::new(x, y);
        let i = self.editable(pos)?;
        if matches!(state, CellState::Path | CellState::Frontier) {
            return Err(GridError::ReservedState(state));
        }

        match self.cells[i].state() {
            CellState::Start if state != CellState::Start => self.start = None,
            CellState::Goal if state != CellState::Goal => self.goal = None,
            _ => {}
        }

        let previous = match state {
            CellState::Start => self.start.replace(pos),
            CellState::Goal => self.goal.replace(pos),
            _ => None,
        };
        if let Some(old) = previous.filter(|&old| old != pos) {
            if let Some(c) = self.at_mut(old) {
                c.set_state(CellState::Open);
            }
        }

        self.cells[i].set_state(state);
        Ok(())
    }

    /// Flip an open cell to blocked and back. Start and goal cells are left
    /// alone. Returns the resulting state.
    pub fn toggle_blocked(&mut self, x: i32, y: i32) -> Result<CellState, GridError> {
        let i = self.editable(Point::new(x, y))?;
        let cell = &mut self.cells[i];
        match cell.state() {
            CellState::Open => cell.set_state(CellState::Blocked),
            CellState::Blocked => cell.set_state(CellState::Open),
            _ => {}
        }
        Ok(cell.state())
    }

    fn editable(&self, pos: Point) -> Result<usize, GridError> {
        if self.searched {
            return Err(GridError::AlreadySearched);
        }
        self.idx(pos).ok_or(GridError::OutOfBounds {
            pos,
            rows: self.rows(),
            columns: self.columns(),
        })
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Positions of all cells in [`CellState::Path`], row-major.
    pub fn path_cells(&self) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| c.state() == CellState::Path)
            .map(Cell::pos)
            .collect()
    }

    /// Text snapshot of every cell's state, one line per row.
    pub fn render_ascii(&self) -> String {
        let w = self.columns() as usize;
        let mut out = String::with_capacity(self.cells.len() + self.rows() as usize);
        for row in self.cells.chunks(w) {
            out.extend(row.iter().map(|c| c.state().glyph()));
            out.push('\n');
        }
        out
    }
}

/// Convert layout line and character counts to grid dimensions.
fn layout_dimensions(lines: usize, columns: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(lines), i32::try_from(columns)) {
        (Ok(rows), Ok(columns)) => Ok((rows, columns)),
        (rows, cols) => Err(GridError::InvalidDimensions {
            rows: rows.unwrap_or(i32::MAX),
            columns: cols.unwrap_or(i32::MAX),
        }),
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

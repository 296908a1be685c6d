//! Shared pieces of the terminal maze demo: random maze generation and
//! crossterm painting of cell states.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridstar_core::{CellState, Grid, GridError, Point};
use gridstar_paths::{Outcome, SearchError, SearchHandle};

pub const ROWS: i32 = 20;
pub const COLUMNS: i32 = 60;
pub const STATUS_ROW: i32 = ROWS + 1;
pub const DEFAULT_DENSITY: f64 = 0.3;
const MAX_DENSITY: f64 = 0.9;

// Colours
const COL_OPEN: CtColor = CtColor::Rgb { r: 60, g: 55, b: 50 };
const COL_BLOCKED: CtColor = CtColor::Rgb { r: 100, g: 100, b: 130 };
const COL_FRONTIER: CtColor = CtColor::Rgb { r: 220, g: 160, b: 40 };
const COL_PATH: CtColor = CtColor::Rgb { r: 50, g: 180, b: 255 };
const COL_START: CtColor = CtColor::Rgb { r: 80, g: 200, b: 80 };
const COL_GOAL: CtColor = CtColor::Rgb { r: 220, g: 50, b: 50 };

/// Parse the obstacle density argument. A missing argument gives
/// [`DEFAULT_DENSITY`].
pub fn parse_density(arg: Option<&str>) -> Result<f64, String> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_DENSITY);
    };
    let d: f64 = arg
        .parse()
        .map_err(|_| format!("density {arg:?} is not a number"))?;
    if !(0.0..=MAX_DENSITY).contains(&d) {
        return Err(format!("density must be between 0 and {MAX_DENSITY}, got {d}"));
    }
    Ok(d)
}

/// A grid ready to be searched, start in the top-left corner and goal in
/// the bottom-right one.
#[derive(Debug)]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

impl Maze {
    /// Draw a maze where each cell is blocked with probability `density`.
    pub fn random(rows: i32, columns: i32, density: f64) -> Result<Self, GridError> {
        let mut grid = Grid::new(rows, columns)?;
        for p in grid.bounds().iter() {
            if rand::random_bool(density) {
                grid.mark(p.x, p.y, CellState::Blocked)?;
            }
        }
        let start = Point::ZERO;
        let goal = Point::new(columns - 1, rows - 1);
        grid.mark(start.x, start.y, CellState::Start)?;
        grid.mark(goal.x, goal.y, CellState::Goal)?;
        Ok(Self { grid, start, goal })
    }
}

/// What a key press asks of the demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Quit,
    /// Drop the current round, cancelling its search if still running, and
    /// draw a new maze.
    NewRound,
}

impl Request {
    pub fn from_key(code: KeyCode) -> Option<Request> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Request::Quit),
            KeyCode::Char('n') => Some(Request::NewRound),
            _ => None,
        }
    }
}

/// Cancel a search and wait for its worker to hand the grid back.
pub fn abandon(handle: SearchHandle) -> Result<Outcome, SearchError> {
    handle.cancel();
    handle.join().map(|(_, outcome)| outcome)
}

/// One-line summary of a finished search.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found(p) => format!(
            "path found: {} steps, cost {}, {} cells expanded",
            p.path.len() - 1,
            p.cost,
            p.expanded
        ),
        Outcome::NoPath => "no path".to_string(),
        Outcome::Cancelled => "cancelled".to_string(),
    }
}

fn state_color(state: CellState) -> CtColor {
    match state {
        CellState::Open => COL_OPEN,
        CellState::Blocked => COL_BLOCKED,
        CellState::Frontier => COL_FRONTIER,
        CellState::Path => COL_PATH,
        CellState::Start => COL_START,
        CellState::Goal => COL_GOAL,
    }
}

/// Wait up to `timeout` for a key press.
pub fn poll_key(timeout: Duration) -> io::Result<Option<KeyCode>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Ok(Some(code)),
        _ => Ok(None),
    }
}

/// The terminal in raw mode on the alternate screen. Dropping it restores
/// the terminal.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    pub fn draw_cell(&mut self, pos: Point, state: CellState) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(pos.x as u16, pos.y as u16),
            SetForegroundColor(state_color(state)),
            Print(state.glyph())
        )
    }

    pub fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        for cell in grid {
            self.draw_cell(cell.pos(), cell.state())?;
        }
        self.flush()
    }

    /// Replace the status line.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, STATUS_ROW as u16),
            terminal::Clear(ClearType::CurrentLine),
            ResetColor,
            Print(text)
        )?;
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::{PathFound, SearchConfig, spawn};
    use std::sync::mpsc;

    #[test]
    fn density_argument() {
        assert_eq!(parse_density(None), Ok(DEFAULT_DENSITY));
        assert_eq!(parse_density(Some("0.45")), Ok(0.45));
        assert_eq!(parse_density(Some("0")), Ok(0.0));
        assert!(parse_density(Some("dense")).is_err());
        assert!(parse_density(Some("0.95")).is_err());
        assert!(parse_density(Some("-0.1")).is_err());
    }

    #[test]
    fn empty_maze_has_only_endpoints() {
        let maze = Maze::random(5, 7, 0.0).unwrap();
        assert_eq!(maze.start, Point::new(0, 0));
        assert_eq!(maze.goal, Point::new(6, 4));
        assert_eq!(maze.grid.start(), Some(maze.start));
        assert_eq!(maze.grid.goal(), Some(maze.goal));
        assert_eq!(maze.grid.count(CellState::Blocked), 0);
        assert_eq!(maze.grid.count(CellState::Open), 33);
    }

    #[test]
    fn endpoints_survive_dense_mazes() {
        for _ in 0..20 {
            let maze = Maze::random(4, 4, MAX_DENSITY).unwrap();
            assert_eq!(maze.grid.at(maze.start).map(|c| c.state()), Some(CellState::Start));
            assert_eq!(maze.grid.at(maze.goal).map(|c| c.state()), Some(CellState::Goal));
        }
    }

    #[test]
    fn keys_map_to_requests() {
        assert_eq!(Request::from_key(KeyCode::Char('n')), Some(Request::NewRound));
        assert_eq!(Request::from_key(KeyCode::Char('q')), Some(Request::Quit));
        assert_eq!(Request::from_key(KeyCode::Esc), Some(Request::Quit));
        assert_eq!(Request::from_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn abandoning_a_running_search_cancels_it() {
        let maze = Maze::random(ROWS, COLUMNS, 0.0).unwrap();
        let (ready_tx, ready_rx) = mpsc::channel();
        let (go_tx, go_rx) = mpsc::channel::<()>();
        let mut first = true;
        let observer = move |_: Point, _: CellState| {
            if first {
                first = false;
                let _ = ready_tx.send(());
                let _ = go_rx.recv();
            }
        };
        let handle = spawn(
            maze.grid,
            maze.start,
            maze.goal,
            SearchConfig::default(),
            observer,
        )
        .unwrap();
        ready_rx.recv().unwrap();
        // Release the worker once cancellation is already visible to it.
        handle.context().cancel();
        go_tx.send(()).unwrap();
        assert_eq!(abandon(handle), Ok(Outcome::Cancelled));
    }

    #[test]
    fn outcomes_are_described() {
        let found = Outcome::Found(PathFound {
            path: vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)],
            cost: 28,
            expanded: 2,
        });
        assert_eq!(
            describe(&found),
            "path found: 2 steps, cost 28, 2 cells expanded"
        );
        assert_eq!(describe(&Outcome::NoPath), "no path");
        assert_eq!(describe(&Outcome::Cancelled), "cancelled");
    }

    #[test]
    fn every_state_has_its_own_colour() {
        let states = [
            CellState::Open,
            CellState::Blocked,
            CellState::Frontier,
            CellState::Path,
            CellState::Start,
            CellState::Goal,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(state_color(*a), state_color(*b));
            }
        }
    }
}

//! Terminal A* visualiser.
//!
//! Run: cargo run --bin maze [density]

use std::error::Error;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use gridstar_core::{CellState, Point};
use gridstar_demos::{
    COLUMNS, Maze, ROWS, Request, Screen, abandon, describe, parse_density, poll_key,
};
use gridstar_paths::{CellEvent, CellObserver, ChannelObserver, SearchConfig, SearchHandle, spawn};

const FRAME: Duration = Duration::from_millis(16);
const STEP: Duration = Duration::from_millis(4);

fn main() {
    let arg = std::env::args().nth(1);
    let density = match parse_density(arg.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(density) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(density: f64) -> Result<(), Box<dyn Error>> {
    let mut screen = Screen::open()?;
    loop {
        let maze = Maze::random(ROWS, COLUMNS, density)?;
        screen.draw_grid(&maze.grid)?;
        screen.status("searching... n: new maze, q: quit")?;

        let (tx, rx) = mpsc::channel();
        let mut channel = ChannelObserver::new(tx);
        // Slow the worker down so the frontier can be watched growing.
        let observer = move |pos: Point, state: CellState| {
            channel.on_state_change(pos, state);
            thread::sleep(STEP);
        };
        let handle = spawn(
            maze.grid,
            maze.start,
            maze.goal,
            SearchConfig::default(),
            observer,
        )?;

        match watch(&mut screen, &handle, &rx)? {
            Some(Request::Quit) => {
                abandon(handle)?;
                return Ok(());
            }
            Some(Request::NewRound) => {
                abandon(handle)?;
                continue;
            }
            None => {}
        }
        for ev in rx.try_iter() {
            screen.draw_cell(ev.pos, ev.state)?;
        }
        let (_, outcome) = handle.join()?;

        screen.status(&format!("{}. n: new maze, q: quit", describe(&outcome)))?;
        loop {
            match poll_key(FRAME)?.and_then(Request::from_key) {
                Some(Request::NewRound) => break,
                Some(Request::Quit) => return Ok(()),
                None => {}
            }
        }
    }
}

/// Paint events until the worker returns or the user asks for something.
fn watch(
    screen: &mut Screen,
    handle: &SearchHandle,
    rx: &mpsc::Receiver<CellEvent>,
) -> Result<Option<Request>, Box<dyn Error>> {
    while !handle.is_finished() {
        for ev in rx.try_iter() {
            screen.draw_cell(ev.pos, ev.state)?;
        }
        screen.flush()?;
        if let Some(request) = poll_key(FRAME)?.and_then(Request::from_key) {
            return Ok(Some(request));
        }
    }
    Ok(None)
}

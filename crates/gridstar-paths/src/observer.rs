//! Notification seam between the search and whoever renders it.

use std::sync::mpsc::Sender;

use gridstar_core::{CellState, Point};

/// Receives every cell state transition made by a search, in order.
///
/// The search calls this when a cell joins the frontier and when it is
/// marked as part of the final path.
pub trait CellObserver {
    fn on_state_change(&mut self, pos: Point, state: CellState);
}

impl<F: FnMut(Point, CellState)> CellObserver for F {
    fn on_state_change(&mut self, pos: Point, state: CellState) {
        self(pos, state)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {
    #[inline]
    fn on_state_change(&mut self, _pos: Point, _state: CellState) {}
}

/// A single state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellEvent {
    pub pos: Point,
    pub state: CellState,
}

/// Forwards transitions over a channel, typically from a search worker to
/// the rendering thread.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<CellEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<CellEvent>) -> Self {
        Self { tx }
    }
}

impl CellObserver for ChannelObserver {
    fn on_state_change(&mut self, pos: Point, state: CellState) {
        let _ = self.tx.send(CellEvent { pos, state });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn closures_observe() {
        let mut seen = Vec::new();
        {
            let mut obs = |pos: Point, state: CellState| seen.push((pos, state));
            obs.on_state_change(Point::new(1, 2), CellState::Frontier);
        }
        assert_eq!(seen, vec![(Point::new(1, 2), CellState::Frontier)]);
    }

    #[test]
    fn channel_forwards_events() {
        let (tx, rx) = mpsc::channel();
        let mut obs = ChannelObserver::new(tx);
        obs.on_state_change(Point::new(0, 1), CellState::Frontier);
        obs.on_state_change(Point::new(0, 1), CellState::Path);
        drop(obs);
        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                CellEvent {
                    pos: Point::new(0, 1),
                    state: CellState::Frontier
                },
                CellEvent {
                    pos: Point::new(0, 1),
                    state: CellState::Path
                },
            ]
        );
    }

    #[test]
    fn channel_ignores_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut obs = ChannelObserver::new(tx);
        obs.on_state_change(Point::ZERO, CellState::Path);
    }
}

//! Cooperative cancellation shared between a search and its caller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation signal for one search.
///
/// Clones share the flag: the caller keeps one and the search polls another
/// between expansions. Once raised the flag stays raised.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Raise the flag. Calling it again has no further effect.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_flag() {
        let caller = Context::new();
        let search = caller.clone();
        assert!(!search.is_done());
        caller.cancel();
        assert!(search.is_done());
        search.cancel();
        assert!(caller.is_done());
    }

    #[test]
    fn raised_from_another_thread() {
        let caller = Context::new();
        let remote = caller.clone();
        thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(caller.is_done());
    }
}

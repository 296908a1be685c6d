//! Search configuration.

use gridstar_core::Heuristic;

/// Tunables for [`Solver`](crate::Solver) and [`spawn`](crate::spawn).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Estimate used for each newly discovered cell.
    pub heuristic: Heuristic,

    /// Name given to the dedicated worker thread.
    pub thread_name: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            thread_name: "astar-search".into(),
        }
    }
}

impl SearchConfig {
    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the worker thread name (builder).
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert_eq!(cfg.thread_name, "astar-search");
    }

    #[test]
    fn builders() {
        let cfg = SearchConfig::default()
            .with_heuristic(Heuristic::Octile)
            .with_thread_name("maze");
        assert_eq!(cfg.heuristic, Heuristic::Octile);
        assert_eq!(cfg.thread_name, "maze");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"heuristic":"octile"}"#).unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Octile);
        assert_eq!(cfg.thread_name, "astar-search");
    }
}

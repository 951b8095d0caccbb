//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes_visited: u64,

    /// Branches skipped by alpha-beta.
    pub cutoffs: u64,

    /// Deepest iteration that finished.
    pub completed_depth: u8,

    /// An iteration was abandoned on timeout or cancellation.
    pub truncated: bool,

    /// Score of the chosen move at `completed_depth`.
    pub best_score: i32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

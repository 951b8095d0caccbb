//! Minimax search parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::eval::EvalWeights;

/// Depth the Expert difficulty searches to.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Minimax search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Plies to look ahead, at least 1.
    pub depth: u8,

    /// Prune with alpha-beta. Turning it off gives the same move with more
    /// nodes visited.
    pub alpha_beta: bool,

    /// Wall-clock budget for one decision. When it runs out the move from
    /// the deepest completed iteration is returned.
    pub time_limit: Option<Duration>,

    pub weights: EvalWeights,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            alpha_beta: true,
            time_limit: None,
            weights: EvalWeights::default(),
        }
    }
}

impl MinimaxConfig {
    /// Set the search depth (clamped to at least 1).
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth.max(1);
        self
    }

    #[must_use]
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}

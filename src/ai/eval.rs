//! Static evaluation shared by the Hard and Expert strategies.
//!
//! Score from one player's point of view:
//!
//! ```text
//! material × (own pieces − opponents' pieces)
//!   + balance × distinct kinds held
//!   − threat × own pieces adjacent to a superior opposing kind
//! ```
//!
//! Finished matches and eliminated players score `±WIN_SCORE` (draw 0), far
//! outside the range of the weighted sum.

use serde::{Deserialize, Serialize};

use crate::core::{GameResult, GameState, PlayerId};

pub const WIN_SCORE: i32 = 100_000;

/// Weights of the evaluation terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub material: i32,
    pub balance: i32,
    pub threat: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: 10,
            balance: 2,
            threat: 3,
        }
    }
}

/// Evaluate `state` for `player`.
#[must_use]
pub fn evaluate(state: &GameState, player: PlayerId, weights: &EvalWeights) -> i32 {
    if let Some(result) = state.result() {
        return match result {
            GameResult::Winner(p) if p == player => WIN_SCORE,
            GameResult::Winner(_) => -WIN_SCORE,
            GameResult::Draw => 0,
        };
    }
    if state.is_eliminated(player) {
        return -WIN_SCORE;
    }

    let board = &state.board;
    let own = board.count_alive(player) as i32;
    let theirs: i32 = state
        .opponents(player)
        .map(|p| board.count_alive(p) as i32)
        .sum();

    let kinds = board
        .kind_counts(player)
        .iter()
        .filter(|&&n| n > 0)
        .count() as i32;

    let exposed = board
        .alive_pieces(player)
        .filter(|p| board.is_threatened(p.position, p.kind, player))
        .count() as i32;

    weights.material * (own - theirs) + weights.balance * kinds - weights.threat * exposed
}

//! Hard difficulty: one-ply lookahead on the shared evaluation.

use crate::core::{GameState, Move, PlayerId};
use crate::error::{EngineResult, GameError};
use crate::rules::RulesEngine;

use super::eval::{evaluate, EvalWeights};
use super::strategy::{candidate_moves, Strategy};

/// Plays the move whose resulting position evaluates best.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvancedAi {
    weights: EvalWeights,
}

impl AdvancedAi {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }
}

impl Strategy for AdvancedAi {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn choose_move(
        &mut self,
        rules: &RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> EngineResult<Move> {
        let moves = candidate_moves(rules, state, player)?;

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let next = rules.simulate(state, &mv)?;
            let score = evaluate(&next, player, &self.weights);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
            .ok_or(GameError::NoLegalMove { player })
    }
}

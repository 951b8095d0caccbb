//! Easy difficulty: a uniformly random legal move.

use crate::core::{GameRng, GameState, Move, PlayerId};
use crate::error::EngineResult;
use crate::rules::RulesEngine;

use super::strategy::{candidate_moves, Strategy};

/// Uniform random mover.
///
/// Owns its RNG, so a fixed seed replays the same choices.
#[derive(Clone, Debug)]
pub struct RandomAi {
    rng: GameRng,
}

impl RandomAi {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Strategy for RandomAi {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(
        &mut self,
        rules: &RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> EngineResult<Move> {
        let moves = candidate_moves(rules, state, player)?;
        let idx = self.rng.gen_range_usize(0..moves.len());
        Ok(moves[idx])
    }
}

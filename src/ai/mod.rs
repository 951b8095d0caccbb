//! Computer players.
//!
//! Every difficulty implements [`Strategy`]:
//! - `Easy`: [`RandomAi`], a uniform random legal move
//! - `Medium`: [`BasicAi`], fixed capture/safety/approach priorities
//! - `Hard`: [`AdvancedAi`], one-ply lookahead on [`evaluate`]
//! - `Expert`: [`MinimaxAi`], alpha-beta search on [`evaluate`]

pub mod advanced;
pub mod basic;
pub mod config;
pub mod eval;
pub mod minimax;
pub mod random;
pub mod stats;
pub mod strategy;

pub use advanced::AdvancedAi;
pub use basic::{BasicAi, Tier};
pub use config::{MinimaxConfig, DEFAULT_SEARCH_DEPTH};
pub use eval::{evaluate, EvalWeights, WIN_SCORE};
pub use minimax::{ordered_moves, MinimaxAi};
pub use random::RandomAi;
pub use stats::SearchStats;
pub use strategy::{candidate_moves, Strategy};

use crate::core::{Difficulty, GameRng};

/// Strategy for `difficulty`, with default search settings.
///
/// `rng` seeds the random mover; the other difficulties are deterministic.
pub fn strategy_for(difficulty: Difficulty, rng: GameRng) -> Box<dyn Strategy> {
    strategy_with(difficulty, rng, &MinimaxConfig::default())
}

/// Like [`strategy_for`], with `search` used for `Expert`.
pub fn strategy_with(
    difficulty: Difficulty,
    rng: GameRng,
    search: &MinimaxConfig,
) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomAi::new(rng)),
        Difficulty::Medium => Box::new(BasicAi::new()),
        Difficulty::Hard => Box::new(AdvancedAi::new(search.weights)),
        Difficulty::Expert => Box::new(MinimaxAi::new(search.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_mapping() {
        let names: Vec<_> = [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
        .into_iter()
        .map(|d| strategy_for(d, GameRng::new(0)).name())
        .collect();
        assert_eq!(names, ["random", "basic", "advanced", "minimax"]);
    }
}

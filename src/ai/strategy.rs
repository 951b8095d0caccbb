//! The decision contract shared by every AI difficulty.

use crate::core::{GameState, Move, PlayerId};
use crate::error::{EngineResult, GameError};
use crate::rules::RulesEngine;

/// Chooses a move for `player` in `state`.
///
/// Implementations never mutate `state`; lookahead goes through
/// `RulesEngine::simulate`. When `player` has no legal move the strategy
/// returns `GameError::NoLegalMove` and leaves forfeiting to the engine.
pub trait Strategy: Send {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn choose_move(
        &mut self,
        rules: &RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> EngineResult<Move>;
}

/// Legal moves of `player`, or `NoLegalMove` if there are none.
pub fn candidate_moves(
    rules: &RulesEngine,
    state: &GameState,
    player: PlayerId,
) -> EngineResult<Vec<Move>> {
    let moves = rules.legal_moves(state, player);
    if moves.is_empty() {
        return Err(GameError::NoLegalMove { player });
    }
    Ok(moves)
}

/// First item with the highest score; later items must beat it strictly.
pub(crate) fn first_best<T: Copy, S: Ord + Copy>(
    items: impl IntoIterator<Item = T>,
    mut score: impl FnMut(T) -> S,
) -> Option<(T, S)> {
    let mut best: Option<(T, S)> = None;
    for item in items {
        let s = score(item);
        if best.map_or(true, |(_, b)| s > b) {
            best = Some((item, s));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_best_keeps_earliest_tie() {
        let items = [(0, 3), (1, 5), (2, 5), (3, 1)];
        let best = first_best(items, |(_, s)| s);
        assert_eq!(best, Some(((1, 5), 5)));
    }

    #[test]
    fn test_first_best_empty() {
        let best = first_best(Vec::<u8>::new(), |x| x);
        assert!(best.is_none());
    }
}

//! Medium difficulty: fixed priority tiers, no lookahead.
//!
//! Tiers, best first:
//! 1. capture an opposing piece the mover beats
//! 2. safe move that closes in on the nearest opposing piece
//! 3. any other safe move
//! 4. trade with an opposing piece of the same kind
//! 5. unsafe move that closes in
//! 6. anything else that is not a losing attack
//! 7. attack into a piece that beats the mover
//!
//! "Safe" means no opposing piece next to the destination beats the mover.
//! Ties go to the first move in enumeration order.

use crate::core::{GameState, Move, Piece, PlayerId, Position};
use crate::error::{EngineResult, GameError};
use crate::rules::RulesEngine;

use super::strategy::{candidate_moves, first_best, Strategy};

/// Priority tier of a move, ordered worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    LosingAttack,
    Other,
    UnsafeAdvance,
    Trade,
    Safe,
    SafeAdvance,
    Capture,
}

/// Rule-based mover.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicAi;

impl BasicAi {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Tier of `mv` for `player`. `mv` must be legal.
    #[must_use]
    pub fn classify(state: &GameState, player: PlayerId, mv: &Move) -> Tier {
        let board = &state.board;
        let Some(mover) = board.piece(mv.piece) else {
            return Tier::Other;
        };
        let target = board.piece_at(mv.to).filter(|p| p.owner != player);

        if let Some(target) = target {
            if mover.kind.beats(target.kind) {
                return Tier::Capture;
            }
            if target.kind.beats(mover.kind) {
                return Tier::LosingAttack;
            }
            return Tier::Trade;
        }

        let safe = !board.is_threatened(mv.to, mover.kind, player);
        let advancing = closes_in(state, mover, mv.to);
        match (safe, advancing) {
            (true, true) => Tier::SafeAdvance,
            (true, false) => Tier::Safe,
            (false, true) => Tier::UnsafeAdvance,
            (false, false) => Tier::Other,
        }
    }
}

/// Whether moving `mover` to `to` shortens its distance to the nearest
/// opposing piece.
fn closes_in(state: &GameState, mover: &Piece, to: Position) -> bool {
    let nearest = |from: Position| {
        state
            .board
            .pieces()
            .iter()
            .filter(|p| p.alive && p.owner != mover.owner)
            .map(|p| from.manhattan(p.position))
            .min()
    };
    match (nearest(mover.position), nearest(to)) {
        (Some(before), Some(after)) => after < before,
        _ => false,
    }
}

impl Strategy for BasicAi {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn choose_move(
        &mut self,
        rules: &RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> EngineResult<Move> {
        let moves = candidate_moves(rules, state, player)?;
        let (mv, _) = first_best(moves.iter().copied(), |mv| {
            Self::classify(state, player, &mv)
        })
        .ok_or(GameError::NoLegalMove { player })?;
        Ok(mv)
    }
}

//! Observable deltas raised by each state transition.
//!
//! The sound and animation layers consume these; the engine only records
//! them. Each transition replaces the previous batch (see
//! `GameState::events`).

use serde::{Deserialize, Serialize};

use super::action::{CombatOutcome, Move};
use super::piece::{PieceId, PieceKind};
use super::player::PlayerId;
use super::position::Position;
use super::state::GameResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The match left setup.
    MatchStarted { player_count: usize },

    /// A piece now stands on `mv.to` (relocation or won combat).
    PieceMoved { player: PlayerId, mv: Move },

    /// A move ran into an opposing piece.
    Combat {
        attacker: PieceId,
        attacker_kind: PieceKind,
        defender: PieceId,
        defender_kind: PieceKind,
        at: Position,
        outcome: CombatOutcome,
    },

    /// A player passed without changing the board.
    TurnForfeited { player: PlayerId },

    PlayerEliminated { player: PlayerId },

    TurnChanged { from: PlayerId, to: PlayerId },

    GameOver { result: GameResult },
}

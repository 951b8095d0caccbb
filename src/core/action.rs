//! Moves and the turn history.
//!
//! A `Move` names the piece, where it claims to stand and where it goes.
//! `TurnRecord` is what the history keeps per turn: either a move with its
//! outcome, or a forfeit.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use super::player::PlayerId;
use super::position::Position;

/// A single-step move of one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(piece: PieceId, from: Position, to: Position) -> Self {
        Self { piece, from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)
    }
}

/// Result of a combat between an attacker and a defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// Defender removed, attacker takes the cell.
    AttackerWins,
    /// Attacker removed, defender stays.
    DefenderWins,
    /// Same kind: both removed.
    Mutual,
}

/// What applying a move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Destination was empty.
    Relocated,
    /// Destination held an opposing piece.
    Combat {
        defender: PieceId,
        outcome: CombatOutcome,
    },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_combat(self) -> bool {
        matches!(self, MoveOutcome::Combat { .. })
    }
}

/// What a player did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Moved { mv: Move, outcome: MoveOutcome },
    Forfeited,
}

/// One entry of the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub action: TurnAction,
    /// Turn number at which the action was taken.
    pub turn: u32,
}

impl TurnRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: TurnAction, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(PieceId::new(4), pos(1, 2), pos(2, 2));
        assert_eq!(mv.to_string(), "#4 (1, 2) -> (2, 2)");
    }

    #[test]
    fn test_move_equality() {
        let a = Move::new(PieceId::new(1), pos(0, 0), pos(0, 1));
        let b = Move::new(PieceId::new(1), pos(0, 0), pos(0, 1));
        let c = Move::new(PieceId::new(1), pos(0, 0), pos(1, 0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_outcome_is_combat() {
        assert!(!MoveOutcome::Relocated.is_combat());
        assert!(MoveOutcome::Combat {
            defender: PieceId::new(0),
            outcome: CombatOutcome::Mutual,
        }
        .is_combat());
    }

    #[test]
    fn test_turn_record_serialization() {
        let mv = Move::new(PieceId::new(2), pos(4, 4), pos(3, 4));
        let record = TurnRecord::new(
            PlayerId::new(1),
            TurnAction::Moved {
                mv,
                outcome: MoveOutcome::Relocated,
            },
            7,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: TurnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}

//! Error types for the engine.
//!
//! Every gameplay error is recoverable: state is validated in full before it
//! is mutated, so a rejected command leaves the match untouched.

use crate::core::{Phase, PieceId, PlayerId, Position};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("piece {0} does not exist")]
    UnknownPiece(PieceId),

    #[error("piece {0} has been destroyed")]
    DeadPiece(PieceId),

    #[error("piece {piece} belongs to {owner}")]
    NotOwner { piece: PieceId, owner: PlayerId },

    #[error("piece {piece} is at {actual}, not {claimed}")]
    SourceMismatch {
        piece: PieceId,
        claimed: Position,
        actual: Position,
    },

    #[error("{to} is not one orthogonal step from {from}")]
    NotAdjacent { from: Position, to: Position },

    #[error("{0} is occupied by the mover's own piece")]
    OwnPieceAtDestination(Position),

    #[error("a turn may only be forfeited when no legal move exists")]
    HasLegalMoves,
}

/// Errors that can occur while setting up or playing a match.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Move violates adjacency, occupancy or ownership rules.
    #[error("invalid move by {player}: {reason}")]
    InvalidMove {
        player: PlayerId,
        reason: MoveRejection,
    },

    /// The player has no available move; resolved by the forfeit policy.
    #[error("{player} has no legal move")]
    NoLegalMove { player: PlayerId },

    /// A turn was attempted outside the in-progress phase.
    #[error("cannot apply a turn while the match is {phase}")]
    IllegalStateTransition { phase: Phase },

    /// An AI move was requested for a seat without a strategy.
    #[error("{player} is not AI-controlled")]
    NotAiControlled { player: PlayerId },

    /// A coordinate outside the board, as found in untrusted input.
    #[error("({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    #[error("invalid setup: {message}")]
    InvalidSetup { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl GameError {
    pub(crate) fn invalid_move(player: PlayerId, reason: MoveRejection) -> Self {
        GameError::InvalidMove { player, reason }
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::invalid_move(
            PlayerId::new(0),
            MoveRejection::NotAdjacent {
                from: Position::new(0, 0).unwrap(),
                to: Position::new(2, 0).unwrap(),
            },
        );
        assert_eq!(
            err.to_string(),
            "invalid move by Player 0: (2, 0) is not one orthogonal step from (0, 0)"
        );

        let err = GameError::NoLegalMove {
            player: PlayerId::new(2),
        };
        assert_eq!(err.to_string(), "Player 2 has no legal move");
    }

    #[test]
    fn test_state_transition_message() {
        let err = GameError::IllegalStateTransition {
            phase: Phase::Setup,
        };
        assert_eq!(err.to_string(), "cannot apply a turn while the match is in setup");
    }
}

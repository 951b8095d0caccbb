//! Piece kinds, identities and the dominance relation.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// One of the three piece kinds.
///
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Rock,
    Paper,
    Scissors,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::Rock, PieceKind::Paper, PieceKind::Scissors];

    /// The kind this one defeats.
    #[must_use]
    pub const fn prey(self) -> PieceKind {
        match self {
            PieceKind::Rock => PieceKind::Scissors,
            PieceKind::Paper => PieceKind::Rock,
            PieceKind::Scissors => PieceKind::Paper,
        }
    }

    /// The kind that defeats this one.
    #[must_use]
    pub const fn predator(self) -> PieceKind {
        match self {
            PieceKind::Rock => PieceKind::Paper,
            PieceKind::Paper => PieceKind::Scissors,
            PieceKind::Scissors => PieceKind::Rock,
        }
    }

    #[must_use]
    pub fn beats(self, other: PieceKind) -> bool {
        self.prey() == other
    }

    /// Slot of this kind in per-kind count arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Rock => 0,
            PieceKind::Paper => 1,
            PieceKind::Scissors => 2,
        }
    }

    /// Single-letter symbol: `R`, `P` or `S`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Rock => 'R',
            PieceKind::Paper => 'P',
            PieceKind::Scissors => 'S',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Rock => "Rock",
            PieceKind::Paper => "Paper",
            PieceKind::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Stable identifier of a piece for the whole match.
///
/// Ids are dense and 0-based, assigned in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on (or removed from) the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: PlayerId,
    pub kind: PieceKind,
    /// Last occupied cell. Meaningless once `alive` is false.
    pub position: Position,
    pub alive: bool,
}

impl Piece {
    #[must_use]
    pub fn new(id: PieceId, owner: PlayerId, kind: PieceKind, position: Position) -> Self {
        Self {
            id,
            owner,
            kind,
            position,
            alive: true,
        }
    }
}

//! The 6×6 board: occupancy grid plus the piece table.
//!
//! The board is the only owner of pieces. The grid maps each cell to the id
//! of the living piece standing on it; the piece table is indexed by
//! `PieceId` and keeps destroyed pieces (with `alive == false`) so ids stay
//! stable for the whole match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combat::resolve_combat;
use crate::core::{
    CombatOutcome, Move, MoveOutcome, Piece, PieceId, PieceKind, PlayerId, Position, CELL_COUNT,
};
use crate::error::{EngineResult, GameError, MoveRejection};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    grid: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    grid: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    /// Accept a snapshot only if it is a full grid whose occupancy agrees
    /// with the piece table.
    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let invalid = |message: String| GameError::InvalidSetup { message };

        if raw.grid.len() != CELL_COUNT {
            return Err(invalid(format!(
                "grid has {} cells, expected {CELL_COUNT}",
                raw.grid.len()
            )));
        }
        if let Some((index, piece)) = raw
            .pieces
            .iter()
            .enumerate()
            .find(|(index, piece)| piece.id.index() != *index)
        {
            return Err(invalid(format!("piece {} stored in slot {index}", piece.id)));
        }
        if let Some(id) = raw.grid.iter().flatten().find(|id| id.index() >= raw.pieces.len()) {
            return Err(invalid(format!("grid refers to unknown piece {id}")));
        }

        let board = Board {
            grid: raw.grid,
            pieces: raw.pieces,
        };
        if !board.is_consistent() {
            return Err(invalid("grid and piece table disagree".to_string()));
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: vec![None; CELL_COUNT],
            pieces: Vec::new(),
        }
    }

    /// Put a new piece on an empty cell and return its id.
    pub fn place(
        &mut self,
        owner: PlayerId,
        kind: PieceKind,
        position: Position,
    ) -> EngineResult<PieceId> {
        if let Some(existing) = self.grid[position.index()] {
            return Err(GameError::InvalidSetup {
                message: format!("{position} already holds piece {existing}"),
            });
        }
        let id = PieceId::new(self.pieces.len() as u16);
        self.pieces.push(Piece::new(id, owner, kind, position));
        self.grid[position.index()] = Some(id);
        Ok(id)
    }

    // === Queries ===

    /// Living piece on `position`, if any.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.grid[position.index()].map(|id| &self.pieces[id.index()])
    }

    /// Piece by id, living or destroyed.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Every piece ever placed, in id order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Living pieces of `player` in ascending id order.
    pub fn alive_pieces(&self, player: PlayerId) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.alive && p.owner == player)
    }

    #[must_use]
    pub fn count_alive(&self, player: PlayerId) -> usize {
        self.alive_pieces(player).count()
    }

    /// Living pieces of `player` per kind, indexed by `PieceKind::index`.
    #[must_use]
    pub fn kind_counts(&self, player: PlayerId) -> [usize; 3] {
        let mut counts = [0; 3];
        for piece in self.alive_pieces(player) {
            counts[piece.kind.index()] += 1;
        }
        counts
    }

    /// On-board orthogonal neighbors not held by a piece of the same owner.
    ///
    /// Destroyed pieces have no destinations.
    #[must_use]
    pub fn legal_destinations(&self, piece: &Piece) -> SmallVec<[Position; 4]> {
        if !piece.alive {
            return SmallVec::new();
        }
        piece
            .position
            .neighbors()
            .into_iter()
            .filter(|&cell| {
                self.piece_at(cell)
                    .map_or(true, |occupant| occupant.owner != piece.owner)
            })
            .collect()
    }

    /// True when a living piece not owned by `owner` can reach `position`
    /// next turn and beats `kind`.
    #[must_use]
    pub fn is_threatened(&self, position: Position, kind: PieceKind, owner: PlayerId) -> bool {
        position.neighbors().into_iter().any(|cell| {
            self.piece_at(cell)
                .is_some_and(|p| p.owner != owner && p.kind.beats(kind))
        })
    }

    // === Mutation ===

    /// Check `mv` against the board without touching it.
    pub fn validate_move(&self, mv: &Move, mover: PlayerId) -> EngineResult<&Piece> {
        let reject = |reason| GameError::invalid_move(mover, reason);

        let piece = self
            .piece(mv.piece)
            .ok_or_else(|| reject(MoveRejection::UnknownPiece(mv.piece)))?;
        if !piece.alive {
            return Err(reject(MoveRejection::DeadPiece(piece.id)));
        }
        if piece.owner != mover {
            return Err(reject(MoveRejection::NotOwner {
                piece: piece.id,
                owner: piece.owner,
            }));
        }
        if piece.position != mv.from {
            return Err(reject(MoveRejection::SourceMismatch {
                piece: piece.id,
                claimed: mv.from,
                actual: piece.position,
            }));
        }
        if !mv.from.is_adjacent(mv.to) {
            return Err(reject(MoveRejection::NotAdjacent {
                from: mv.from,
                to: mv.to,
            }));
        }
        if self.piece_at(mv.to).is_some_and(|p| p.owner == mover) {
            return Err(reject(MoveRejection::OwnPieceAtDestination(mv.to)));
        }
        Ok(piece)
    }

    /// Validate and apply `mv` for `mover`, resolving combat on contact.
    ///
    /// On error the board is unchanged.
    pub fn apply_move(&mut self, mv: &Move, mover: PlayerId) -> EngineResult<MoveOutcome> {
        let attacker = *self.validate_move(mv, mover)?;

        let Some(defender) = self.piece_at(mv.to).copied() else {
            self.relocate(attacker.id, mv.from, mv.to);
            return Ok(MoveOutcome::Relocated);
        };

        let outcome = resolve_combat(attacker.kind, defender.kind);
        match outcome {
            CombatOutcome::AttackerWins => {
                self.remove(defender.id);
                self.relocate(attacker.id, mv.from, mv.to);
            }
            CombatOutcome::DefenderWins => {
                self.remove(attacker.id);
            }
            CombatOutcome::Mutual => {
                self.remove(defender.id);
                self.remove(attacker.id);
            }
        }

        Ok(MoveOutcome::Combat {
            defender: defender.id,
            outcome,
        })
    }

    fn relocate(&mut self, id: PieceId, from: Position, to: Position) {
        self.grid[from.index()] = None;
        self.grid[to.index()] = Some(id);
        self.pieces[id.index()].position = to;
    }

    fn remove(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.index()];
        piece.alive = false;
        if self.grid[piece.position.index()] == Some(id) {
            self.grid[piece.position.index()] = None;
        }
    }

    /// Occupancy invariant: every occupied cell points at a living piece
    /// recorded on that cell, and every living piece is on its cell.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let cells_ok = Position::all().all(|cell| match self.grid[cell.index()] {
            Some(id) => self
                .piece(id)
                .is_some_and(|p| p.alive && p.position == cell),
            None => true,
        });
        let pieces_ok = self
            .pieces
            .iter()
            .filter(|p| p.alive)
            .all(|p| self.grid[p.position.index()] == Some(p.id));
        cells_ok && pieces_ok
    }
}

impl std::fmt::Display for Board {
    /// One row per line; each cell is `.` or kind symbol plus owner seat.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in Position::all() {
            match self.piece_at(cell) {
                Some(p) => write!(f, "{}{}", p.kind.symbol(), p.owner.0)?,
                None => f.write_str(" .")?,
            }
            if cell.col() as usize == crate::core::BOARD_SIZE as usize - 1 {
                writeln!(f)?;
            } else {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

//! Grid coordinates on the fixed 6×6 board.
//!
//! `Position` can only be built through the checked constructor, so an
//! off-board coordinate never reaches the board or the rules engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::GameError;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Orthogonal step direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All directions in neighbor enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }
}

/// A cell on the board, `0 <= row, col < BOARD_SIZE`.
///
/// ```
/// use rps_tactics::core::Position;
///
/// let corner = Position::new(0, 0).unwrap();
/// assert_eq!(corner.neighbors().len(), 2);
/// assert!(Position::new(6, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Position`.
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or(GameError::OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// Create a position, or `None` if it lies off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index, used to address the grid array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Position one step away in `dir`, if still on the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// On-board orthogonal neighbors in right, down, left, up order.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(dir))
            .collect()
    }

    /// True when `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Player identification, per-player storage and player records.
//!
//! ## PlayerId
//!
//! 0-based seat index. Matches have 2 or 3 seats.
//!
//! ## PlayerMap
//!
//! Per-seat data backed by a `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! Elimination flag and controller (human or AI with a difficulty).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a `player_count`-player match.
    ///
    /// ```
    /// use rps_tactics::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Next seat in round-robin order.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data with O(1) access.
///
/// ```
/// use rps_tactics::core::{PlayerId, PlayerMap};
///
/// let mut alive: PlayerMap<usize> = PlayerMap::with_value(3, 8);
/// alive[PlayerId::new(1)] -= 1;
/// assert_eq!(alive[PlayerId::new(1)], 7);
/// assert_eq!(alive.iter().map(|(_, n)| *n).sum::<usize>(), 23);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map from a per-seat factory.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= u8::MAX as usize, "Too many players");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(PlayerId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// AI difficulty level, mapped to a strategy by `ai::strategy_for`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Static capture/safety/advance priorities.
    Medium,
    /// One-ply weighted evaluation.
    Hard,
    /// Minimax with alpha-beta pruning.
    Expert,
}

/// Who decides a seat's moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    #[default]
    Human,
    Ai(Difficulty),
}

impl Controller {
    #[must_use]
    pub fn is_ai(self) -> bool {
        matches!(self, Controller::Ai(_))
    }

    #[must_use]
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Controller::Ai(difficulty) => Some(difficulty),
            Controller::Human => None,
        }
    }
}

/// A seat in the match.
///
/// Pieces are not stored here: the board owns them and is queried by owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub eliminated: bool,
    pub controller: Controller,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, controller: Controller) -> Self {
        Self {
            id,
            eliminated: false,
            controller,
        }
    }
}

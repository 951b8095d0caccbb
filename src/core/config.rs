//! Match configuration.
//!
//! `MatchConfig` fixes everything that cannot change once a match starts:
//! seat count, controllers, piece pool size, the per-turn time budget, the
//! forfeit cap, and the setup seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::{Controller, PlayerId};
use super::position::Position;
use crate::error::{EngineResult, GameError};

/// Default per-turn deadline, in seconds.
pub const DEFAULT_TURN_SECONDS: u64 = 15;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seats, 2 or 3.
    pub player_count: usize,

    /// Pieces of each kind in every player's pool.
    pub pieces_per_kind: usize,

    /// Deadline for a single turn (metadata only; the engine never sleeps).
    pub turn_time_limit: Duration,

    /// Consecutive forfeits allowed per active player before a draw.
    pub forfeit_cap_factor: u32,

    /// Seed for placement and every RNG forked from it.
    pub seed: u64,

    /// One controller per seat.
    pub controllers: Vec<Controller>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            pieces_per_kind: 4,
            turn_time_limit: Duration::from_secs(DEFAULT_TURN_SECONDS),
            forfeit_cap_factor: 2,
            seed: 42,
            controllers: vec![Controller::Human; 2],
        }
    }
}

impl MatchConfig {
    /// Config for `player_count` seats, all human.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            controllers: vec![Controller::Human; player_count],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_controller(mut self, player: PlayerId, controller: Controller) -> Self {
        if let Some(slot) = self.controllers.get_mut(player.index()) {
            *slot = controller;
        }
        self
    }

    #[must_use]
    pub fn with_controllers(mut self, controllers: Vec<Controller>) -> Self {
        self.controllers = controllers;
        self
    }

    #[must_use]
    pub fn with_pieces_per_kind(mut self, count: usize) -> Self {
        self.pieces_per_kind = count;
        self
    }

    #[must_use]
    pub fn with_turn_time_limit(mut self, limit: Duration) -> Self {
        self.turn_time_limit = limit;
        self
    }

    #[must_use]
    pub fn with_forfeit_cap_factor(mut self, factor: u32) -> Self {
        self.forfeit_cap_factor = factor;
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> EngineResult<()> {
        if !(2..=3).contains(&self.player_count) {
            return Err(GameError::InvalidConfig {
                message: format!("player count must be 2 or 3, got {}", self.player_count),
            });
        }
        if self.controllers.len() != self.player_count {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "expected {} controllers, got {}",
                    self.player_count,
                    self.controllers.len()
                ),
            });
        }
        if self.pieces_per_kind == 0 {
            return Err(GameError::InvalidConfig {
                message: "pieces_per_kind must be positive".to_string(),
            });
        }
        if self.forfeit_cap_factor == 0 {
            return Err(GameError::InvalidConfig {
                message: "forfeit_cap_factor must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Cells in which `player` places its pieces at setup.
///
/// Two players split the top and bottom two rows. Three players take the
/// top-left block, the right-hand strip and the bottom-left block.
#[must_use]
pub fn home_region(player_count: usize, player: PlayerId) -> Vec<Position> {
    let (rows, cols) = match (player_count, player.index()) {
        (2, 0) => (0..=1, 0..=5),
        (2, 1) => (4..=5, 0..=5),
        (3, 0) => (0..=1, 0..=3),
        (3, 1) => (0..=3, 4..=5),
        (3, 2) => (4..=5, 0..=3),
        _ => return Vec::new(),
    };

    rows.flat_map(|row| cols.clone().filter_map(move |col| Position::new(row, col)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use std::collections::HashSet;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.pieces_per_kind, 4);
        assert_eq!(config.turn_time_limit, Duration::from_secs(15));
        assert_eq!(config.forfeit_cap_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::new(3)
            .with_seed(123)
            .with_controller(PlayerId::new(2), Controller::Ai(Difficulty::Hard))
            .with_forfeit_cap_factor(3);

        assert_eq!(config.seed, 123);
        assert_eq!(config.controllers.len(), 3);
        assert_eq!(config.controllers[2], Controller::Ai(Difficulty::Hard));
        assert_eq!(config.forfeit_cap_factor, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert!(MatchConfig::new(4).validate().is_err());
        assert!(MatchConfig::new(1).validate().is_err());
        assert!(MatchConfig::new(2)
            .with_controllers(vec![Controller::Human])
            .validate()
            .is_err());
        assert!(MatchConfig::new(2).with_pieces_per_kind(0).validate().is_err());
        assert!(MatchConfig::new(2).with_forfeit_cap_factor(0).validate().is_err());
    }

    #[test]
    fn test_home_region_sizes() {
        for player in PlayerId::all(2) {
            assert_eq!(home_region(2, player).len(), 12);
        }
        for player in PlayerId::all(3) {
            assert_eq!(home_region(3, player).len(), 8);
        }
        assert!(home_region(4, PlayerId::new(0)).is_empty());
    }

    #[test]
    fn test_home_regions_disjoint() {
        for count in [2, 3] {
            let mut seen = HashSet::new();
            for player in PlayerId::all(count) {
                for cell in home_region(count, player) {
                    assert!(seen.insert(cell), "{cell} claimed twice");
                }
            }
        }
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new(3).with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

//! Match facade: rules, live state, AI seats and the match RNG in one place.
//!
//! ```
//! use rps_tactics::core::{Difficulty, PlayerId};
//! use rps_tactics::session::MatchBuilder;
//!
//! let mut session = MatchBuilder::new()
//!     .seed(7)
//!     .ai(PlayerId::new(1), Difficulty::Medium)
//!     .build()
//!     .unwrap();
//!
//! let mv = session.legal_moves(PlayerId::new(0))[0];
//! session.apply_turn(mv).unwrap();
//! assert_eq!(session.current_player(), PlayerId::new(1));
//!
//! session.play_ai_turn().unwrap();
//! assert_eq!(session.current_player(), PlayerId::new(0));
//! ```

use std::time::Duration;

use log::info;
use rustc_hash::FxHashMap;

use crate::ai::{strategy_with, MinimaxConfig, Strategy};
use crate::core::{
    Controller, Difficulty, GameEvent, GameResult, GameRng, GameState, MatchConfig, Move,
    MoveOutcome, PieceKind, PlayerId, PlayerMap, Position,
};
use crate::error::{EngineResult, GameError};
use crate::rules::RulesEngine;

/// Builder for a [`Session`].
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    config: MatchConfig,
    search: MinimaxConfig,
    placements: Option<Vec<(PlayerId, PieceKind, Position)>>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            search: MinimaxConfig::default(),
            placements: None,
        }
    }
}

impl MatchBuilder {
    /// Two human seats, default pool and timer, seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats. New seats are human-controlled.
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self.config.controllers.resize(count, Controller::Human);
        self
    }

    /// Set who controls `player`.
    pub fn controller(mut self, player: PlayerId, controller: Controller) -> Self {
        self.config = self.config.with_controller(player, controller);
        self
    }

    /// Shorthand for an AI controller.
    pub fn ai(self, player: PlayerId, difficulty: Difficulty) -> Self {
        self.controller(player, Controller::Ai(difficulty))
    }

    /// Seed for the setup shuffle, the AI seats and the timeout fallback.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Pieces of each kind in every player's pool.
    pub fn pieces_per_kind(mut self, count: usize) -> Self {
        self.config.pieces_per_kind = count;
        self
    }

    /// Per-turn deadline reported to the caller.
    pub fn turn_time_limit(mut self, limit: Duration) -> Self {
        self.config.turn_time_limit = limit;
        self
    }

    /// Consecutive forfeits per seat before the match is drawn.
    pub fn forfeit_cap_factor(mut self, factor: u32) -> Self {
        self.config.forfeit_cap_factor = factor;
        self
    }

    /// Search settings for `Expert` seats; the weights also drive `Hard`.
    pub fn search(mut self, search: MinimaxConfig) -> Self {
        self.search = search;
        self
    }

    /// Start from fixed placements instead of a random setup.
    pub fn placements(mut self, placements: Vec<(PlayerId, PieceKind, Position)>) -> Self {
        self.placements = Some(placements);
        self
    }

    /// Validate the configuration, place the pieces and seat the AIs.
    pub fn build(self) -> EngineResult<Session> {
        self.config.validate()?;
        let mut rng = GameRng::new(self.config.seed);

        let state = match &self.placements {
            Some(placements) => GameState::from_placements(&self.config, placements)?,
            None => GameState::setup(&self.config, &mut rng)?,
        };

        let mut strategies: FxHashMap<PlayerId, Box<dyn Strategy>> = FxHashMap::default();
        for (seat, controller) in self.config.controllers.iter().enumerate() {
            if let Controller::Ai(difficulty) = controller {
                let player = PlayerId::new(seat as u8);
                let strategy = strategy_with(*difficulty, rng.fork(), &self.search);
                info!("{player} seated as {} AI", strategy.name());
                strategies.insert(player, strategy);
            }
        }

        info!(
            "match started: {} players, seed {}",
            self.config.player_count, self.config.seed
        );

        Ok(Session {
            rules: RulesEngine::new(&self.config),
            state,
            strategies,
            rng,
            config: self.config,
        })
    }
}

/// A running match.
pub struct Session {
    rules: RulesEngine,
    state: GameState,
    strategies: FxHashMap<PlayerId, Box<dyn Strategy>>,
    rng: GameRng,
    config: MatchConfig,
}

impl Session {
    // === Queries ===

    /// Live match state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules engine configured from the match settings.
    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seat whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.state.current
    }

    /// Legal moves of `player` in enumeration order.
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        self.rules.legal_moves(&self.state, player)
    }

    /// Living pieces per seat.
    pub fn alive_counts(&self) -> PlayerMap<usize> {
        self.state.alive_counts()
    }

    /// Events emitted by the last transition.
    pub fn events(&self) -> &[GameEvent] {
        self.state.events()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Final result, once the match is finished.
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// True when `player` has a strategy seated.
    pub fn is_ai(&self, player: PlayerId) -> bool {
        self.strategies.contains_key(&player)
    }

    /// Name of the strategy playing `player`, if it is an AI seat.
    pub fn strategy_name(&self, player: PlayerId) -> Option<&'static str> {
        self.strategies.get(&player).map(|s| s.name())
    }

    // === Commands ===

    /// Apply a move for the current player.
    pub fn apply_turn(&mut self, mv: Move) -> EngineResult<MoveOutcome> {
        let outcome = self.rules.apply_turn(&mut self.state, &mv)?;
        self.log_if_finished();
        Ok(outcome)
    }

    /// Ask the AI of `player` for a move without applying it.
    pub fn suggest_move(&mut self, player: PlayerId) -> EngineResult<Move> {
        let strategy = self
            .strategies
            .get_mut(&player)
            .ok_or(GameError::NotAiControlled { player })?;
        strategy.choose_move(&self.rules, &self.state, player)
    }

    /// Let the current player's AI take its turn.
    ///
    /// Returns the move played, or `None` when the seat had to forfeit.
    pub fn play_ai_turn(&mut self) -> EngineResult<Option<Move>> {
        let player = self.state.current;
        if !self.is_ai(player) {
            return Err(GameError::NotAiControlled { player });
        }
        if self.state.is_finished() {
            return Err(GameError::IllegalStateTransition {
                phase: self.state.phase,
            });
        }
        if !self.rules.has_legal_move(&self.state, player) {
            self.rules.forfeit_turn(&mut self.state)?;
            self.log_if_finished();
            return Ok(None);
        }

        let mv = self.suggest_move(player)?;
        self.apply_turn(mv)?;
        Ok(Some(mv))
    }

    /// The current player ran out of time: play a random legal move or
    /// forfeit.
    pub fn handle_timeout(&mut self) -> EngineResult<Option<Move>> {
        let played = self.rules.apply_timeout(&mut self.state, &mut self.rng)?;
        self.log_if_finished();
        Ok(played)
    }

    /// Let AI seats play until the match ends, a human is to move, or
    /// `max_turns` AI turns have been taken.
    pub fn play_out(&mut self, max_turns: usize) -> EngineResult<Option<GameResult>> {
        for _ in 0..max_turns {
            if self.is_finished() || !self.is_ai(self.state.current) {
                break;
            }
            self.play_ai_turn()?;
        }
        Ok(self.result())
    }

    fn log_if_finished(&self) {
        if let Some(result) = self.state.result() {
            info!(
                "match finished after {} turns: {result:?}",
                self.state.turn_number
            );
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut seats: Vec<_> = self
            .strategies
            .iter()
            .map(|(player, s)| (*player, s.name()))
            .collect();
        seats.sort();
        f.debug_struct("Session")
            .field("current", &self.state.current)
            .field("phase", &self.state.phase)
            .field("turn", &self.state.turn_number)
            .field("ai_seats", &seats)
            .finish()
    }
}

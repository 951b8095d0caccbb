//! Match state: board, seats, turn bookkeeping and phase.
//!
//! ## Phase
//!
//! `Setup → InProgress → Finished(result)`. Nothing leaves `Finished`.
//!
//! ## GameState
//!
//! A value type. The rules engine mutates the live state once per turn;
//! AI strategies work on clones (`RulesEngine::simulate`). The history is an
//! `im::Vector` so those clones stay cheap as the match grows.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::config::{home_region, MatchConfig};
use super::event::GameEvent;
use super::piece::PieceKind;
use super::player::{Player, PlayerId, PlayerMap};
use super::position::Position;
use super::rng::GameRng;
use crate::board::Board;
use crate::error::{EngineResult, GameError};

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Lifecycle phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    InProgress,
    Finished(GameResult),
}

impl Phase {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Finished(_))
    }

    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => f.write_str("in setup"),
            Phase::InProgress => f.write_str("in progress"),
            Phase::Finished(GameResult::Winner(p)) => write!(f, "finished ({p} won)"),
            Phase::Finished(GameResult::Draw) => f.write_str("finished (draw)"),
        }
    }
}

/// Per-turn deadline exposed to the caller.
///
/// The engine never measures time; the presentation layer tracks elapsed
/// time and calls `RulesEngine::apply_timeout` once the budget runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnBudget {
    pub limit: Duration,
}

impl TurnBudget {
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.limit.saturating_sub(elapsed)
    }

    #[must_use]
    pub fn is_expired(&self, elapsed: Duration) -> bool {
        elapsed >= self.limit
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    players: PlayerMap<Player>,

    /// Whose turn it is.
    pub current: PlayerId,

    /// Moves applied so far (forfeits do not count).
    pub turn_number: u32,

    pub phase: Phase,

    pub budget: TurnBudget,

    /// Forfeits since the last applied move.
    pub consecutive_forfeits: u32,

    pub history: Vector<TurnRecord>,

    events: Vec<GameEvent>,
}

impl GameState {
    /// Empty board in `Setup` with one seat per configured controller.
    pub fn new(config: &MatchConfig) -> EngineResult<Self> {
        config.validate()?;
        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.controllers[id.index()])
        });

        Ok(Self {
            board: Board::new(),
            players,
            current: PlayerId::new(0),
            turn_number: 0,
            phase: Phase::Setup,
            budget: TurnBudget {
                limit: config.turn_time_limit,
            },
            consecutive_forfeits: 0,
            history: Vector::new(),
            events: Vec::new(),
        })
    }

    /// Random placement in each home region, then `InProgress`.
    ///
    /// Each player's pool of `pieces_per_kind` pieces per kind is shuffled
    /// together with its region; pieces are placed until either runs out.
    pub fn setup(config: &MatchConfig, rng: &mut GameRng) -> EngineResult<Self> {
        let mut state = Self::new(config)?;

        for player in PlayerId::all(config.player_count) {
            let mut region = home_region(config.player_count, player);
            let mut pool: Vec<PieceKind> = PieceKind::ALL
                .iter()
                .flat_map(|&kind| std::iter::repeat(kind).take(config.pieces_per_kind))
                .collect();

            rng.shuffle(&mut region);
            rng.shuffle(&mut pool);

            for (cell, kind) in region.into_iter().zip(pool) {
                state.board.place(player, kind, cell)?;
            }
        }

        state.start();
        Ok(state)
    }

    /// State from explicit `(owner, kind, cell)` placements.
    ///
    /// Used for scenarios; seats without pieces start eliminated. If at most
    /// one seat is left the match is already decided and starts `Finished`.
    pub fn from_placements(
        config: &MatchConfig,
        placements: &[(PlayerId, PieceKind, Position)],
    ) -> EngineResult<Self> {
        let mut state = Self::new(config)?;
        for &(owner, kind, cell) in placements {
            if owner.index() >= config.player_count {
                return Err(GameError::InvalidSetup {
                    message: format!("{owner} is not seated in a {}-player match", config.player_count),
                });
            }
            state.board.place(owner, kind, cell)?;
        }
        for player in PlayerId::all(config.player_count) {
            if state.board.count_alive(player) == 0 {
                state.players[player].eliminated = true;
            }
        }
        if let Some(first) = state.active_players().first() {
            state.current = *first;
        }
        state.start();
        if let Some(result) = state.standing_result() {
            state.phase = Phase::Finished(result);
            state.emit(GameEvent::GameOver { result });
        }
        Ok(state)
    }

    fn start(&mut self) {
        self.phase = Phase::InProgress;
        self.events = vec![GameEvent::MatchStarted {
            player_count: self.player_count(),
        }];
    }

    // === Seats ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn is_eliminated(&self, id: PlayerId) -> bool {
        self.players[id].eliminated
    }

    /// Non-eliminated seats in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.player_ids()
            .filter(|&p| !self.is_eliminated(p))
            .collect()
    }

    /// Opponents of `player` still in the match.
    pub fn opponents(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.player_ids()
            .filter(move |&p| p != player && !self.is_eliminated(p))
    }

    /// Living pieces per seat.
    #[must_use]
    pub fn alive_counts(&self) -> PlayerMap<usize> {
        PlayerMap::new(self.player_count(), |p| self.board.count_alive(p))
    }

    // === Phase ===

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.phase.result()
    }

    /// Result implied by the seats still standing: a win for the last one,
    /// a draw if none are left, `None` while two or more remain.
    #[must_use]
    pub fn standing_result(&self) -> Option<GameResult> {
        match self.active_players().as_slice() {
            [] => Some(GameResult::Draw),
            [winner] => Some(GameResult::Winner(*winner)),
            _ => None,
        }
    }

    // === Events ===

    /// Deltas produced by the most recent transition.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn begin_transition(&mut self) {
        self.events.clear();
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

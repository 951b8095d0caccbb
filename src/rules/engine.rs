//! Turn application, elimination and forfeit policy.
//!
//! The engine is stateless apart from its policy knobs: every operation
//! takes the `GameState` it acts on. Mutating operations validate fully
//! before touching the state, so an `Err` leaves it exactly as it was.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    GameEvent, GameResult, GameRng, GameState, MatchConfig, Move, MoveOutcome, Phase, PlayerId,
    TurnAction, TurnRecord,
};
use crate::error::{EngineResult, GameError, MoveRejection};

/// Rules of the game plus the forfeit-cap policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesEngine {
    forfeit_cap_factor: u32,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self {
            forfeit_cap_factor: 2,
        }
    }
}

impl RulesEngine {
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            forfeit_cap_factor: config.forfeit_cap_factor.max(1),
        }
    }

    #[must_use]
    pub fn with_forfeit_cap_factor(mut self, factor: u32) -> Self {
        self.forfeit_cap_factor = factor.max(1);
        self
    }

    /// Consecutive forfeits after which the match is drawn.
    #[must_use]
    pub fn forfeit_cap(&self, state: &GameState) -> u32 {
        self.forfeit_cap_factor * state.active_players().len() as u32
    }

    // === Queries ===

    /// Every legal move of `player`: pieces in ascending id order, each
    /// piece's destinations in right, down, left, up order.
    ///
    /// Empty outside `InProgress`, for eliminated players, and for players
    /// whose pieces are all boxed in by their own pieces.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        if state.phase != Phase::InProgress {
            return Vec::new();
        }
        let board = &state.board;
        board
            .alive_pieces(player)
            .flat_map(|piece| {
                board
                    .legal_destinations(piece)
                    .into_iter()
                    .map(move |to| Move::new(piece.id, piece.position, to))
            })
            .collect()
    }

    #[must_use]
    pub fn has_legal_move(&self, state: &GameState, player: PlayerId) -> bool {
        state
            .board
            .alive_pieces(player)
            .any(|piece| !state.board.legal_destinations(piece).is_empty())
    }

    /// `Some` once at most one player is left standing.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.standing_result()
    }

    // === Commands ===

    /// Apply the current player's move and advance the turn.
    ///
    /// After the move: players left without pieces are eliminated, the match
    /// finishes if at most one remains, otherwise play passes to the next
    /// seat with a legal move. Seats without one forfeit on the way; too many
    /// forfeits in a row draw the match.
    pub fn apply_turn(&self, state: &mut GameState, mv: &Move) -> EngineResult<MoveOutcome> {
        ensure_in_progress(state)?;
        let player = state.current;

        let attacker_kind = state.board.validate_move(mv, player)?.kind;
        let defender_kind = state.board.piece_at(mv.to).map(|p| p.kind);
        let outcome = state.board.apply_move(mv, player)?;

        state.begin_transition();
        debug!("{player} plays {mv}: {outcome:?}");

        if let (MoveOutcome::Combat { defender, outcome: combat }, Some(defender_kind)) =
            (outcome, defender_kind)
        {
            state.emit(GameEvent::Combat {
                attacker: mv.piece,
                attacker_kind,
                defender,
                defender_kind,
                at: mv.to,
                outcome: combat,
            });
        }
        if state.board.piece_at(mv.to).is_some_and(|p| p.id == mv.piece) {
            state.emit(GameEvent::PieceMoved { player, mv: *mv });
        }

        let turn = state.turn_number;
        state.history.push_back(TurnRecord::new(
            player,
            TurnAction::Moved { mv: *mv, outcome },
            turn,
        ));
        state.turn_number += 1;
        state.consecutive_forfeits = 0;

        self.settle(state);
        Ok(outcome)
    }

    /// Clone `state` and apply `mv` to the copy.
    pub fn simulate(&self, state: &GameState, mv: &Move) -> EngineResult<GameState> {
        let mut next = state.clone();
        self.apply_turn(&mut next, mv)?;
        Ok(next)
    }

    /// Explicitly pass the current player's turn.
    ///
    /// Only allowed when that player has no legal move; `apply_turn` already
    /// forfeits such seats automatically, so this is needed only when a
    /// match starts on a boxed-in player.
    pub fn forfeit_turn(&self, state: &mut GameState) -> EngineResult<()> {
        ensure_in_progress(state)?;
        let player = state.current;
        if self.has_legal_move(state, player) {
            return Err(GameError::invalid_move(player, MoveRejection::HasLegalMoves));
        }

        state.begin_transition();
        if self.record_forfeit(state, player) {
            return Ok(());
        }
        self.advance(state);
        Ok(())
    }

    /// Timeout fallback: a uniformly random legal move, or a forfeit.
    ///
    /// Returns the move that was played, `None` for a forfeit.
    pub fn apply_timeout(
        &self,
        state: &mut GameState,
        rng: &mut GameRng,
    ) -> EngineResult<Option<Move>> {
        ensure_in_progress(state)?;
        let moves = self.legal_moves(state, state.current);
        match rng.choose(&moves).copied() {
            Some(mv) => {
                debug!("{} timed out, playing {mv}", state.current);
                self.apply_turn(state, &mv)?;
                Ok(Some(mv))
            }
            None => {
                self.forfeit_turn(state)?;
                Ok(None)
            }
        }
    }

    // === Internals ===

    /// Eliminations, terminal check, then turn advancement.
    fn settle(&self, state: &mut GameState) {
        for player in PlayerId::all(state.player_count()) {
            if !state.is_eliminated(player) && state.board.count_alive(player) == 0 {
                state.player_mut(player).eliminated = true;
                debug!("{player} eliminated");
                state.emit(GameEvent::PlayerEliminated { player });
            }
        }

        if let Some(result) = self.is_terminal(state) {
            finish(state, result);
            return;
        }
        self.advance(state);
    }

    /// Hand the turn to the next non-eliminated seat that can move.
    fn advance(&self, state: &mut GameState) {
        let from = state.current;
        loop {
            let next = next_active(state, state.current);
            state.current = next;

            if self.has_legal_move(state, next) {
                if next != from {
                    state.emit(GameEvent::TurnChanged { from, to: next });
                }
                return;
            }
            if self.record_forfeit(state, next) {
                return;
            }
        }
    }

    /// Record a forfeit by `player`. Returns true if it ended the match.
    fn record_forfeit(&self, state: &mut GameState, player: PlayerId) -> bool {
        debug!("{player} has no legal move and forfeits");
        let turn = state.turn_number;
        state
            .history
            .push_back(TurnRecord::new(player, TurnAction::Forfeited, turn));
        state.emit(GameEvent::TurnForfeited { player });
        state.consecutive_forfeits += 1;

        let cap = self.forfeit_cap(state);
        trace!("consecutive forfeits {}/{cap}", state.consecutive_forfeits);
        if state.consecutive_forfeits >= cap {
            finish(state, GameResult::Draw);
            return true;
        }
        false
    }
}

fn ensure_in_progress(state: &GameState) -> EngineResult<()> {
    match state.phase {
        Phase::InProgress => Ok(()),
        phase => Err(GameError::IllegalStateTransition { phase }),
    }
}

/// First non-eliminated seat after `player` in round-robin order.
fn next_active(state: &GameState, player: PlayerId) -> PlayerId {
    let count = state.player_count();
    let mut next = player.next(count);
    for _ in 0..count {
        if !state.is_eliminated(next) {
            return next;
        }
        next = next.next(count);
    }
    player
}

fn finish(state: &mut GameState, result: GameResult) {
    debug!("match over: {result:?}");
    state.phase = Phase::Finished(result);
    state.emit(GameEvent::GameOver { result });
}

//! # rps-tactics
//!
//! Engine for a Rock-Paper-Scissors tactics game on a 6×6 board, with
//! computer opponents from random play up to alpha-beta search.
//!
//! ## Rules in brief
//!
//! Two or three players each start with a pool of Rocks, Papers and
//! Scissors placed in a home region. On their turn a player moves one piece
//! one step orthogonally. Moving onto an opposing piece fights it: Rock beats
//! Scissors, Scissors beat Paper, Paper beats Rock, and equal kinds destroy
//! each other. A player with no pieces left is eliminated; the last player
//! standing wins, and a match with nobody left is a draw.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: every API takes the seat from the state; nothing
//!    assumes exactly two players.
//!
//! 2. **Validate, then mutate**: a rejected command leaves the state exactly
//!    as it was.
//!
//! 3. **Deterministic**: setup, random AIs and the timeout fallback all draw
//!    from one seeded `GameRng`, so a seed replays a whole match.
//!
//! ## Modules
//!
//! - `core`: positions, pieces, players, moves, events, state, RNG, config
//! - `board`: the grid, move validation and combat resolution
//! - `rules`: turn order, elimination, win/draw, forfeits and timeouts
//! - `ai`: the four difficulties and the shared evaluation
//! - `session`: one match with its AI seats, built by `MatchBuilder`
//! - `error`: `GameError` and `MoveRejection`

pub mod ai;
pub mod board;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CombatOutcome, Controller, Difficulty, Direction, GameEvent, GameResult, GameRng, GameState,
    MatchConfig, Move, MoveOutcome, Phase, Piece, PieceId, PieceKind, PlayerId, PlayerMap,
    Position, TurnAction, TurnRecord, BOARD_SIZE,
};

pub use crate::board::{resolve_combat, Board};

pub use crate::rules::RulesEngine;

pub use crate::ai::{
    evaluate, strategy_for, AdvancedAi, BasicAi, EvalWeights, MinimaxAi, MinimaxConfig,
    RandomAi, SearchStats, Strategy,
};

pub use crate::session::{MatchBuilder, Session};

pub use crate::error::{EngineResult, GameError, MoveRejection};

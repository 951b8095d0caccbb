//! Core engine types: positions, pieces, players, moves, events, state,
//! RNG and configuration.

pub mod action;
pub mod config;
pub mod event;
pub mod piece;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{CombatOutcome, Move, MoveOutcome, TurnAction, TurnRecord};
pub use config::{home_region, MatchConfig, DEFAULT_TURN_SECONDS};
pub use event::GameEvent;
pub use piece::{Piece, PieceId, PieceKind};
pub use player::{Controller, Difficulty, Player, PlayerId, PlayerMap};
pub use position::{Direction, Position, BOARD_SIZE, CELL_COUNT};
pub use rng::GameRng;
pub use state::{GameResult, GameState, Phase, TurnBudget};

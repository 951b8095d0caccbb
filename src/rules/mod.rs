//! Rules engine: legal moves, turn application, elimination, win/draw
//! detection and the forfeit/timeout policies.
//!
//! Combat itself is resolved by the board (`board::resolve_combat`); the
//! engine decides whose turn it is and when the match is over.

pub mod engine;

pub use engine::RulesEngine;

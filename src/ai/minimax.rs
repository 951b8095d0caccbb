//! Expert difficulty: depth-limited minimax with alpha-beta pruning.
//!
//! The searching player maximizes; every other seat minimizes, so in a
//! three-player match the opponents are treated as a coalition. Turn order
//! inside the tree comes from the rules engine, which already skips
//! eliminated seats and applies automatic forfeits.
//!
//! Moves are ordered winning captures first, then trades, quiet moves and
//! losing attacks, each group in enumeration order. The root keeps the
//! first move with the highest score, so pruning on and off choose the same
//! move.
//!
//! The search deepens one ply at a time. Depth 1 always finishes; deeper
//! iterations stop when the time limit passes or the cancel flag is raised,
//! and the move from the deepest finished iteration is played.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};

use crate::core::{GameState, Move, PlayerId};
use crate::error::EngineResult;
use crate::rules::RulesEngine;

use super::config::MinimaxConfig;
use super::eval::{evaluate, EvalWeights};
use super::stats::SearchStats;
use super::strategy::{candidate_moves, Strategy};

/// Alpha-beta searcher.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAi {
    config: MinimaxConfig,
    cancel: Option<Arc<AtomicBool>>,
    stats: SearchStats,
}

impl MinimaxAi {
    #[must_use]
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            cancel: None,
            stats: SearchStats::default(),
        }
    }

    /// Share a flag that aborts the search when set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[must_use]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run the search and return the chosen move.
    pub fn search(
        &mut self,
        rules: &RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> EngineResult<Move> {
        let start = Instant::now();
        self.stats.reset();

        let root_moves = ordered_moves(rules, state, player)?;
        let mut best = root_moves[0];

        let deadline = self.config.time_limit.map(|limit| start + limit);
        let mut search = Search {
            rules,
            player,
            weights: self.config.weights,
            alpha_beta: self.config.alpha_beta,
            deadline,
            cancel: self.cancel.as_deref(),
            interruptible: false,
            stats: &mut self.stats,
        };

        for depth in 1..=self.config.depth.max(1) {
            search.interruptible = depth > 1;
            match search.root(state, &root_moves, depth) {
                Some((mv, score)) => {
                    best = mv;
                    search.stats.completed_depth = depth;
                    search.stats.best_score = score;
                    trace!("depth {depth}: {mv} scores {score}");
                }
                None => {
                    search.stats.truncated = true;
                    break;
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{player} minimax picked {best} (depth {}, {} nodes, {} cutoffs{})",
            self.stats.completed_depth,
            self.stats.nodes_visited,
            self.stats.cutoffs,
            if self.stats.truncated { ", truncated" } else { "" },
        );
        Ok(best)
    }
}

impl Strategy for MinimaxAi {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_move(
        &mut self,
        rules: &RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> EngineResult<Move> {
        self.search(rules, state, player)
    }
}

/// Legal moves of `player` in search order.
pub fn ordered_moves(
    rules: &RulesEngine,
    state: &GameState,
    player: PlayerId,
) -> EngineResult<Vec<Move>> {
    let mut moves = candidate_moves(rules, state, player)?;
    moves.sort_by_key(|mv| order_key(state, mv));
    Ok(moves)
}

/// 0 winning capture, 1 trade, 2 quiet, 3 losing attack.
fn order_key(state: &GameState, mv: &Move) -> u8 {
    let board = &state.board;
    let (Some(mover), Some(target)) = (board.piece(mv.piece), board.piece_at(mv.to)) else {
        return 2;
    };
    if mover.kind.beats(target.kind) {
        0
    } else if mover.kind == target.kind {
        1
    } else {
        3
    }
}

/// One decision's worth of search state.
struct Search<'a> {
    rules: &'a RulesEngine,
    player: PlayerId,
    weights: EvalWeights,
    alpha_beta: bool,
    deadline: Option<Instant>,
    cancel: Option<&'a AtomicBool>,
    interruptible: bool,
    stats: &'a mut SearchStats,
}

impl Search<'_> {
    /// Best root move at `depth`, `None` if the iteration was interrupted.
    fn root(&mut self, state: &GameState, moves: &[Move], depth: u8) -> Option<(Move, i32)> {
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let Ok(child) = self.rules.simulate(state, mv) else {
                continue;
            };
            let value = self.value(&child, depth - 1, alpha, beta)?;
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((*mv, value));
            }
            if self.alpha_beta {
                alpha = alpha.max(value);
            }
        }
        best
    }

    fn value(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<i32> {
        self.stats.nodes_visited += 1;
        if self.interrupted() {
            return None;
        }
        if depth == 0 || state.is_finished() {
            return Some(evaluate(state, self.player, &self.weights));
        }

        let mover = state.current;
        let Ok(moves) = ordered_moves(self.rules, state, mover) else {
            return Some(evaluate(state, self.player, &self.weights));
        };

        let maximizing = mover == self.player;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in &moves {
            let Ok(child) = self.rules.simulate(state, mv) else {
                continue;
            };
            let value = self.value(&child, depth - 1, alpha, beta)?;

            if maximizing {
                best = best.max(value);
                if self.alpha_beta {
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(value);
                if self.alpha_beta {
                    beta = beta.min(best);
                }
            }
            if self.alpha_beta && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Some(best)
    }

    fn interrupted(&self) -> bool {
        if !self.interruptible {
            return false;
        }
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

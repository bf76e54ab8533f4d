//! Depth-limited minimax over a mutable, reversible game state.
//!
//! The search never clones: every candidate move is applied to the
//! caller's state through an `AppliedMove` guard and undone before the
//! next one is tried.

use std::cmp::Ordering;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameState, PlayerId, SearchError};

use super::config::MinimaxConfig;
use super::guard::AppliedMove;

/// Statistics collected during one `best_move` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// Positions visited below the root.
    pub nodes_visited: u64,

    /// Positions scored without further recursion.
    pub leaf_evaluations: u64,

    /// Deepest ply reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl MinimaxStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Minimax search context.
///
/// `PlayerId::FIRST` maximises `evaluate()`, `PlayerId::SECOND` minimises it.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    config: MinimaxConfig,
    stats: MinimaxStats,
}

impl MinimaxSearch {
    /// Create a new minimax search context.
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            stats: MinimaxStats::default(),
        }
    }

    /// Best move for `player`, who must be on turn.
    ///
    /// Ties go to the first move in `valid_moves()` order. The state is
    /// mutated during the search and restored before returning.
    pub fn best_move<S: GameState>(
        &mut self,
        state: &mut S,
        player: PlayerId,
    ) -> Result<S::Move, SearchError> {
        let scored = self.score_moves(state, player)?;

        let mut best: Option<(S::Move, i32)> = None;
        for (mv, score) in scored {
            let improves = match &best {
                None => true,
                Some((_, best_score)) if player.is_maximizing() => score > *best_score,
                Some((_, best_score)) => score < *best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(SearchError::NoValidMoves)?;
        debug!(
            player = %player,
            mv = ?mv,
            score,
            nodes = self.stats.nodes_visited,
            time_us = self.stats.time_us,
            "minimax move selected"
        );
        Ok(mv)
    }

    /// Minimax score of every valid root move, in `valid_moves()` order.
    pub fn score_moves<S: GameState>(
        &mut self,
        state: &mut S,
        player: PlayerId,
    ) -> Result<Vec<(S::Move, i32)>, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        if state.winner().is_some() {
            return Err(SearchError::GameOver);
        }
        let moves = state.valid_moves();
        if moves.is_empty() {
            return Err(SearchError::NoValidMoves);
        }
        let to_move = state.current_player();
        if to_move != player {
            return Err(SearchError::NotOnTurn {
                requested: player,
                to_move,
            });
        }

        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            let score = {
                let mut child = AppliedMove::new(state, mv.clone());
                self.minimax(&mut *child, !player.is_maximizing(), 1)
            };
            trace!(mv = ?mv, score, "root move scored");
            scored.push((mv, score));
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(scored)
    }

    /// Score of `state` with the given side to optimise, `depth` plies below the root.
    fn minimax<S: GameState>(&mut self, state: &mut S, is_maximizing: bool, depth: u32) -> i32 {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let score = state.evaluate();
        let moves = if score == 0 && !self.config.is_depth_limit(depth) {
            state.valid_moves()
        } else {
            Vec::new()
        };

        if moves.is_empty() {
            self.stats.leaf_evaluations += 1;
            return damp(score, depth);
        }

        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let mut child = AppliedMove::new(state, mv);
            let child_score = self.minimax(&mut *child, !is_maximizing, depth + 1);
            best = if is_maximizing {
                best.max(child_score)
            } else {
                best.min(child_score)
            };
        }
        best
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &MinimaxStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }
}

/// Pull decided scores towards zero by `depth`: faster wins and slower
/// losses score better. Undecided (zero) scores are left alone.
///
/// A drawn line scores 0 at every depth; it is not shifted to `depth`.
fn damp(score: i32, depth: u32) -> i32 {
    let depth = depth as i32;
    match score.cmp(&0) {
        Ordering::Greater => score - depth,
        Ordering::Less => score + depth,
        Ordering::Equal => 0,
    }
}

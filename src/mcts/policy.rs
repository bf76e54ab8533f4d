//! MCTS policies for selection scoring and simulation.
//!
//! - `uct_score`: the UCT exploration/exploitation balance used by `best_child`
//! - `SimulationPolicy`: how to run playouts (random, heuristic, ...)

use crate::core::{GameOutcome, GameRng, GameState, PlayerId};

// =============================================================================
// Selection
// =============================================================================

/// UCT (Upper Confidence bound applied to Trees) score of a child.
///
/// Formula: Q + c * sqrt(ln(N) / n), where Q is the child's mean reward,
/// N the parent's visits and n the child's visits. Unvisited children
/// score `+inf` so they are tried before any visited sibling.
#[must_use]
pub fn uct_score(mean_reward: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }
    let exploration_term = if exploration == 0.0 {
        0.0
    } else {
        exploration * ((parent_visits.max(1) as f64).ln() / visits as f64).sqrt()
    };
    mean_reward + exploration_term
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy<S: GameState>: Send + Sync {
    /// Play the game out from `state` and report how it ended.
    ///
    /// The state is modified during simulation; callers pass a clone.
    fn simulate(&self, state: &mut S, rng: &mut GameRng) -> GameOutcome;
}

/// Random simulation policy.
///
/// Plays uniformly random valid moves until the game ends. A state that is
/// already terminal returns its outcome without touching the RNG.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayout;

impl<S: GameState> SimulationPolicy<S> for RandomPlayout {
    fn simulate(&self, state: &mut S, rng: &mut GameRng) -> GameOutcome {
        loop {
            if let Some(winner) = state.winner() {
                return GameOutcome::Winner(winner);
            }

            let moves = state.valid_moves();
            match rng.choose(&moves) {
                Some(mv) => state.apply(mv),
                // No legal actions - draw
                None => return GameOutcome::Draw,
            }
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Reward of a playout for the player who made the move into the evaluated node.
///
/// `to_move` is the player on turn at that node; the rewarded player is
/// their opponent.
#[must_use]
pub fn playout_reward(outcome: &GameOutcome, to_move: PlayerId) -> f64 {
    outcome.reward_for(to_move.opponent())
}

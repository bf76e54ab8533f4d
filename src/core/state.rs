//! The capability set every game must expose to the search engines.
//!
//! ## GameState
//!
//! Games implement `GameState` once; both engines are generic over it and
//! never see a concrete board type.
//!
//! ## GameOutcome
//!
//! Final result of a finished game, used to score random playouts.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// Board exhausted without a winner.
    Draw,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }

    /// Zero-sum reward for `player`: +1 win, -1 loss, 0 draw.
    #[must_use]
    pub fn reward_for(&self, player: PlayerId) -> f64 {
        match self {
            GameOutcome::Winner(p) if *p == player => 1.0,
            GameOutcome::Winner(_) => -1.0,
            GameOutcome::Draw => 0.0,
        }
    }
}

/// Game state contract.
///
/// The engines call these methods during search; `MinimaxSearch` mutates
/// the state in place through `apply`/`undo`, `MctsSearch` only ever works
/// on clones.
///
/// ## Implementation Notes
///
/// - `valid_moves`: deterministic, stable order; empty once the game is over
/// - `apply`: places a move for `current_player()` and advances the turn
/// - `undo`: exact inverse of the most recent `apply` with the same move;
///   `apply(m); undo(m)` must leave a state equal to the original
/// - `clone` (from `Clone`): deep and fully independent
/// - `Eq + Hash`: two states compare equal iff they are the same position
///   with the same player to move
pub trait GameState: Clone + Eq + Hash + Debug {
    /// A single move in this game.
    type Move: Clone + PartialEq + Debug;

    /// Legal moves for the player to move, in a stable order.
    ///
    /// Returns an empty list once the game is over.
    fn valid_moves(&self) -> Vec<Self::Move>;

    /// Apply a move for the current player and advance the turn.
    ///
    /// The move must come from `valid_moves()`.
    fn apply(&mut self, mv: &Self::Move);

    /// Revert the most recent `apply(mv)`.
    fn undo(&mut self, mv: &Self::Move);

    /// Whose turn is next.
    fn current_player(&self) -> PlayerId;

    /// The player who has completed a winning line, if any.
    fn winner(&self) -> Option<PlayerId>;

    /// Signed heuristic score.
    ///
    /// Large positive when `PlayerId::FIRST` has won, large negative when
    /// `PlayerId::SECOND` has won, zero otherwise.
    fn evaluate(&self) -> i32;

    /// True on a win or a full/blocked board.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.valid_moves().is_empty()
    }

    /// Final result, or `None` while the game continues.
    fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Winner(player))
        } else if self.valid_moves().is_empty() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let outcome = GameOutcome::Winner(PlayerId::SECOND);
        assert!(!outcome.is_winner(PlayerId::FIRST));
        assert!(outcome.is_winner(PlayerId::SECOND));

        let draw = GameOutcome::Draw;
        assert!(!draw.is_winner(PlayerId::FIRST));
        assert!(!draw.is_winner(PlayerId::SECOND));
    }

    #[test]
    fn test_outcome_rewards_are_zero_sum() {
        let outcome = GameOutcome::Winner(PlayerId::FIRST);
        assert_eq!(outcome.reward_for(PlayerId::FIRST), 1.0);
        assert_eq!(outcome.reward_for(PlayerId::SECOND), -1.0);

        let draw = GameOutcome::Draw;
        assert_eq!(draw.reward_for(PlayerId::FIRST), 0.0);
        assert_eq!(draw.reward_for(PlayerId::SECOND), 0.0);
    }
}

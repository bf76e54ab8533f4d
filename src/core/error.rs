//! Errors raised by the search engines.
//!
//! Every variant is an invariant violation: the caller broke the engine
//! contract (asked for a move in a finished game, for the wrong player, ...)
//! or the engine reached a state it should never reach. None of them are
//! retryable; the engines perform no I/O.

use thiserror::Error;

use super::player::PlayerId;
use crate::mcts::NodeId;

/// Invariant violation reported by a search call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The position has no legal moves to choose from.
    #[error("no valid moves available")]
    NoValidMoves,

    /// The position is already won or drawn.
    #[error("game is already over")]
    GameOver,

    /// A move was requested for the player who is not on turn.
    #[error("{requested} asked to move but {to_move} is on turn")]
    NotOnTurn {
        requested: PlayerId,
        to_move: PlayerId,
    },

    /// Expansion was attempted on a node with no untried moves left.
    #[error("{0} is already fully expanded")]
    FullyExpanded(NodeId),

    /// The search finished without any visited root child.
    #[error("search tree has no visited children at the root")]
    EmptyTree,

    /// No root move reproduces the chosen child's position.
    #[error("no move leads from the root to {0}")]
    MoveNotFound(NodeId),
}

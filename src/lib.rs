//! # gametree
//!
//! Adversarial game-tree search for two-player, zero-sum,
//! perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Engines only see the `GameState` trait. Boards,
//!    moves and scoring live entirely in the game implementation.
//!
//! 2. **Two Interchangeable Strategies**: exact/depth-bounded minimax and
//!    UCT Monte Carlo Tree Search answer the same question ("which move?")
//!    and can be swapped behind the `Agent` trait.
//!
//! 3. **Reproducible**: All randomness flows from a seeded `GameRng`.
//!    Equal seeds give equal searches.
//!
//! ## Architecture
//!
//! - **Minimax** mutates the caller's state in place. Every apply is paired
//!   with an undo by an RAII guard, so the state is restored on every path.
//!
//! - **MCTS** never touches the caller's state. The root is a clone, every
//!   node owns its own position, and the tree is an index-addressed arena
//!   dropped when the search returns.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, the `GameState` contract, errors
//! - `minimax`: Depth-limited minimax with depth damping
//! - `mcts`: Monte Carlo Tree Search with UCT selection
//! - `games`: Tic-Tac-Toe and Connect Four
//! - `arena`: Agents and a match loop

pub mod core;
pub mod minimax;
pub mod mcts;
pub mod games;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{GameOutcome, GameRng, GameState, PlayerId, SearchError};

pub use crate::minimax::{AppliedMove, MinimaxConfig, MinimaxSearch, MinimaxStats};

pub use crate::mcts::{
    MctsConfig, MctsSearch, MoveStats, NodeId, RandomPlayout, SearchNode, SearchResult,
    SearchStats, SearchTree, SimulationPolicy, TreeStats,
};

pub use crate::games::{BoardError, Connect4, TicTacToe, WIN_SCORE};

pub use crate::arena::{
    play_match, Agent, MatchRecord, MctsAgent, MinimaxAgent, RandomAgent, RecordError,
};

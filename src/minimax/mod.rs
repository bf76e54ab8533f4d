//! Depth-limited minimax search.
//!
//! ## Overview
//!
//! `MinimaxSearch` scores every valid move of the player on turn by
//! recursively applying and undoing moves on the caller's own state:
//!
//! - A position is a leaf when it is decided (`evaluate() != 0`), has no
//!   valid moves, or sits at `depth_max`.
//! - Leaf scores are damped by depth so faster wins and slower losses win ties.
//! - The first move (in `valid_moves()` order) with the best score is returned.
//!
//! ## Usage
//!
//! ```rust
//! use gametree::core::{GameState, PlayerId};
//! use gametree::games::TicTacToe;
//! use gametree::minimax::{MinimaxConfig, MinimaxSearch};
//!
//! let mut board = TicTacToe::new();
//! let mut search = MinimaxSearch::new(MinimaxConfig::unbounded());
//!
//! let mv = search.best_move(&mut board, PlayerId::FIRST).unwrap();
//! board.apply(&mv);
//! ```

pub mod config;
pub mod guard;
pub mod search;

pub use config::MinimaxConfig;
pub use guard::AppliedMove;
pub use search::{MinimaxSearch, MinimaxStats};

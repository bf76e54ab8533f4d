//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! Classic UCT over any [`GameState`](crate::core::GameState):
//!
//! - **Full-path selection**: `best_child` with exploration 1.4 from the root
//!   down to the first terminal or partially expanded node
//! - **One node per iteration**: the first untried move whose position is not
//!   already a child
//! - **Random playouts** from a clone, driven by a forked seeded RNG
//! - **Sign-flipping backpropagation** to the root
//! - **Arena tree**: nodes addressed by `NodeId`, dropped after each search
//!
//! ## Usage
//!
//! ```rust
//! use gametree::core::{GameState, PlayerId};
//! use gametree::games::TicTacToe;
//! use gametree::mcts::{MctsConfig, MctsSearch};
//!
//! // X can complete the top row.
//! let board = TicTacToe::from_rows(&["XX.", "OO.", "..."], PlayerId::FIRST).unwrap();
//!
//! let mut search = MctsSearch::new(MctsConfig::default().with_seed(7));
//! let result = search.analyze(&board, 500).unwrap();
//! assert_eq!(result.best_move, (0, 2));
//!
//! // Visit distribution over the root moves
//! for (mv, prob) in result.move_probabilities() {
//!     println!("{:?}: {:.2}%", mv, prob * 100.0);
//! }
//! ```
//!
//! ## Custom Policies
//!
//! Playouts can be replaced with any [`SimulationPolicy`]:
//!
//! ```rust,ignore
//! let search = MctsSearch::new(config).with_simulation(MyHeuristicPlayout);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{MctsConfig, DEFAULT_EXPLORATION};
pub use node::{NodeId, SearchNode};
pub use policy::{playout_reward, uct_score, RandomPlayout, SimulationPolicy};
pub use search::{MctsSearch, MoveStats, SearchResult};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};

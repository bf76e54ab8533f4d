//! Agents and a match loop for pitting strategies against each other.
//!
//! ## Overview
//!
//! - **Agent**: anything that picks a move for the player on turn
//! - **RandomAgent / MinimaxAgent / MctsAgent**: the built-in opponents
//! - **play_match**: alternates two agents until the game ends
//! - **MatchRecord**: moves and result, storable with bincode and replayable
//!
//! ## Usage
//!
//! ```rust
//! use gametree::arena::{play_match, MinimaxAgent, RandomAgent};
//! use gametree::games::TicTacToe;
//! use gametree::minimax::MinimaxConfig;
//!
//! let mut hard = MinimaxAgent::new(MinimaxConfig::unbounded());
//! let mut easy = RandomAgent::new(42);
//!
//! let record = play_match(TicTacToe::new(), &mut hard, &mut easy).unwrap();
//! assert_ne!(record.winner_name(), Some("random"));
//!
//! let bytes = record.to_bytes().unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod agent;
pub mod record;
pub mod runner;

// Re-export main types
pub use agent::{Agent, MctsAgent, MinimaxAgent, RandomAgent};
pub use record::{MatchRecord, RecordError};
pub use runner::play_match;

//! Core engine types: players, RNG, the game-state contract, errors.
//!
//! Everything here is game-agnostic. Concrete games implement
//! `GameState`; the engines in `minimax` and `mcts` depend on nothing else.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::SearchError;
pub use player::{InvalidPlayer, PlayerId};
pub use rng::GameRng;
pub use state::{GameOutcome, GameState};

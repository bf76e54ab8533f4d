//! Move-choosing agents that can sit at a board.

use crate::core::{GameRng, GameState, SearchError};
use crate::mcts::{MctsConfig, MctsSearch};
use crate::minimax::{MinimaxConfig, MinimaxSearch};

/// Something that picks a move for whoever is on turn.
pub trait Agent<S: GameState> {
    /// Short label used in logs and match records.
    fn name(&self) -> &str;

    /// Pick a move for `state.current_player()`.
    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError>;
}

/// Uniformly random legal moves ("easy" opponent).
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        if state.winner().is_some() {
            return Err(SearchError::GameOver);
        }
        let moves = state.valid_moves();
        self.rng
            .choose(&moves)
            .cloned()
            .ok_or(SearchError::NoValidMoves)
    }
}

/// Exhaustive or depth-bounded minimax ("hard" opponent).
pub struct MinimaxAgent {
    search: MinimaxSearch,
}

impl MinimaxAgent {
    /// Create a minimax agent.
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }

    /// Underlying search, for its statistics.
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        // Minimax searches in place; keep the caller's board out of it.
        let mut scratch = state.clone();
        let player = scratch.current_player();
        self.search.best_move(&mut scratch, player)
    }
}

/// UCT search with a fixed iteration budget per move.
pub struct MctsAgent {
    search: MctsSearch,
    iterations: u32,
}

impl MctsAgent {
    /// Create an MCTS agent spending `config.iterations` per move.
    pub fn new(config: MctsConfig) -> Self {
        let iterations = config.iterations;
        Self {
            search: MctsSearch::new(config),
            iterations,
        }
    }

    /// Underlying search, for its statistics.
    pub fn search(&self) -> &MctsSearch {
        &self.search
    }
}

impl<S: GameState> Agent<S> for MctsAgent {
    fn name(&self) -> &str {
        "mcts"
    }

    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        self.search.search(state, self.iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::{Connect4, TicTacToe};

    #[test]
    fn test_random_agent_picks_legal_moves() {
        let mut agent = RandomAgent::new(3);
        let board = Connect4::new();

        for _ in 0..50 {
            let mv = agent.choose_move(&board).unwrap();
            assert!(mv < 7);
        }
    }

    #[test]
    fn test_random_agent_is_seeded() {
        let board = TicTacToe::new();
        let mut a = RandomAgent::new(10);
        let mut b = RandomAgent::new(10);

        for _ in 0..10 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }

    #[test]
    fn test_random_agent_on_finished_game() {
        let mut agent = RandomAgent::new(0);
        let won = TicTacToe::from_rows(&["XXX", "OO.", "..."], PlayerId::SECOND).unwrap();
        assert_eq!(agent.choose_move(&won), Err(SearchError::GameOver));

        let full = TicTacToe::from_rows(&["XOX", "XOO", "OXX"], PlayerId::SECOND).unwrap();
        assert_eq!(agent.choose_move(&full), Err(SearchError::NoValidMoves));
    }

    #[test]
    fn test_minimax_agent_leaves_board_alone() {
        let board = TicTacToe::from_rows(&["XX.", "OO.", "..."], PlayerId::SECOND).unwrap();
        let before = board.clone();
        let mut agent = MinimaxAgent::new(MinimaxConfig::unbounded());

        assert_eq!(agent.choose_move(&board), Ok((1, 2)));
        assert_eq!(board, before);
        assert!(agent.search().stats().nodes_visited > 0);
    }

    #[test]
    fn test_mcts_agent_uses_configured_budget() {
        let mut agent = MctsAgent::new(MctsConfig::default().with_iterations(64));
        let board = Connect4::new();

        Agent::<Connect4>::choose_move(&mut agent, &board).unwrap();

        assert_eq!(agent.search().stats().iterations, 64);
        assert_eq!(Agent::<Connect4>::name(&agent), "mcts");
    }
}

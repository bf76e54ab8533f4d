//! Core MCTS search algorithm.
//!
//! Classic UCT: every iteration descends the whole tree with `best_child`,
//! grows it by one node, plays a random game out from there and pushes the
//! result back up to the root. The tree lives only for the duration of one
//! call; the caller's state is cloned once at the root and never touched.

use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameRng, GameState, SearchError};

use super::config::MctsConfig;
use super::node::NodeId;
use super::policy::{playout_reward, RandomPlayout, SimulationPolicy};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Visit statistics of one root move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveStats<M> {
    /// The move.
    pub mv: M,

    /// Simulations routed through the move's child.
    pub visits: u32,

    /// Mean reward for the player making the move.
    pub mean_reward: f64,
}

/// Outcome of an MCTS search: the recommendation plus the root statistics
/// it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<M> {
    /// Move with the best mean reward among visited root children.
    pub best_move: M,

    /// Every expanded root move, in expansion order.
    pub moves: Vec<MoveStats<M>>,

    /// Counters for the run.
    pub stats: SearchStats,
}

impl<M: Clone> SearchResult<M> {
    /// Visit counts normalised to a distribution (training labels).
    #[must_use]
    pub fn move_probabilities(&self) -> Vec<(M, f64)> {
        let total: u32 = self.moves.iter().map(|m| m.visits).sum();
        if total == 0 {
            return Vec::new();
        }

        self.moves
            .iter()
            .map(|m| (m.mv.clone(), m.visits as f64 / total as f64))
            .collect()
    }

    /// Visit count of a specific move, 0 if it was never expanded.
    #[must_use]
    pub fn visits_for(&self, mv: &M) -> u32
    where
        M: PartialEq,
    {
        self.moves
            .iter()
            .find(|m| &m.mv == mv)
            .map_or(0, |m| m.visits)
    }
}

/// Main MCTS search context.
///
/// Owns the configuration, the simulation RNG and the simulation policy.
/// The RNG carries over between calls, so a sequence of searches from one
/// engine is reproducible from `config.seed`.
pub struct MctsSearch<P = RandomPlayout> {
    /// Search configuration.
    config: MctsConfig,

    /// RNG for simulations.
    rng: GameRng,

    /// Simulation policy.
    simulation: P,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl MctsSearch<RandomPlayout> {
    /// Create a search context with uniformly random playouts.
    pub fn new(config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            rng,
            simulation: RandomPlayout,
            stats: SearchStats::default(),
        }
    }
}

impl Default for MctsSearch<RandomPlayout> {
    fn default() -> Self {
        Self::new(MctsConfig::default())
    }
}

impl<P> MctsSearch<P> {
    /// Set a custom simulation policy.
    pub fn with_simulation<Q>(self, simulation: Q) -> MctsSearch<Q> {
        MctsSearch {
            config: self.config,
            rng: self.rng,
            simulation,
            stats: self.stats,
        }
    }

    /// Run `iterations` UCT iterations from `state` and return the best move.
    ///
    /// `state` is cloned into the root and left untouched.
    pub fn search<S>(&mut self, state: &S, iterations: u32) -> Result<S::Move, SearchError>
    where
        S: GameState,
        P: SimulationPolicy<S>,
    {
        self.analyze(state, iterations).map(|result| result.best_move)
    }

    /// Like [`search`](Self::search), but also report the root statistics.
    pub fn analyze<S>(
        &mut self,
        state: &S,
        iterations: u32,
    ) -> Result<SearchResult<S::Move>, SearchError>
    where
        S: GameState,
        P: SimulationPolicy<S>,
    {
        let start = Instant::now();
        self.stats = SearchStats::default();

        if state.winner().is_some() {
            return Err(SearchError::GameOver);
        }
        let root_moves = state.valid_moves();
        if root_moves.is_empty() {
            return Err(SearchError::NoValidMoves);
        }

        let tree = self.build_tree(state, iterations)?;
        let root = tree.root();
        let best = tree.best_child(root, 0.0).ok_or(SearchError::EmptyTree)?;

        // Nodes store positions, not moves: map each child back to the move
        // that produces it from the root.
        let successors: Vec<(S::Move, S)> = root_moves
            .into_iter()
            .map(|mv| {
                let mut next = state.clone();
                next.apply(&mv);
                (mv, next)
            })
            .collect();
        let move_to = |child: NodeId| -> Result<S::Move, SearchError> {
            let target = &tree.get(child).state;
            successors
                .iter()
                .find(|(_, next)| next == target)
                .map(|(mv, _)| mv.clone())
                .ok_or(SearchError::MoveNotFound(child))
        };

        let best_move = move_to(best)?;
        let moves = tree
            .children(root)
            .map(|(child, node)| -> Result<MoveStats<S::Move>, SearchError> {
                Ok(MoveStats {
                    mv: move_to(child)?,
                    visits: node.visits,
                    mean_reward: node.mean_reward(),
                })
            })
            .collect::<Result<Vec<_>, SearchError>>()?;

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let tree_stats = tree.stats();
        debug!(
            iterations = self.stats.iterations,
            nodes = tree_stats.node_count,
            max_depth = tree_stats.max_depth,
            expansion_ratio = self.stats.expansion_ratio(),
            iterations_per_second = self.stats.iterations_per_second(),
            best = ?best_move,
            visits = tree.get(best).visits,
            mean = tree.get(best).mean_reward(),
            "mcts search complete"
        );

        Ok(SearchResult {
            best_move,
            moves,
            stats: self.stats.clone(),
        })
    }

    /// Grow a fresh tree rooted at a clone of `state`.
    fn build_tree<S>(&mut self, state: &S, iterations: u32) -> Result<SearchTree<S>, SearchError>
    where
        S: GameState,
        P: SimulationPolicy<S>,
    {
        if iterations == 0 {
            return Err(SearchError::EmptyTree);
        }

        let mut tree = SearchTree::new(state.clone());
        for _ in 0..iterations {
            self.iteration(&mut tree)?;
            self.stats.iterations += 1;
        }
        Ok(tree)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration<S>(&mut self, tree: &mut SearchTree<S>) -> Result<(), SearchError>
    where
        S: GameState,
        P: SimulationPolicy<S>,
    {
        // === SELECTION ===
        let mut current = tree.root();
        while !tree.get(current).is_terminal && tree.is_fully_expanded(current) {
            match tree.best_child(current, self.config.exploration_constant) {
                Some(child) => current = child,
                None => break,
            }
        }

        // === EXPANSION ===
        let leaf = if tree.is_fully_expanded(current) {
            self.stats.terminal_hits += 1;
            current
        } else {
            self.expand(tree, current)?
        };

        // === SIMULATION ===
        let node = tree.get(leaf);
        let mut scratch = node.state.clone();
        let mut rng = self.rng.fork();
        let outcome = self.simulation.simulate(&mut scratch, &mut rng);
        let reward = playout_reward(&outcome, node.state.current_player());
        self.stats.record_playout(node.depth);
        trace!(node = %leaf, depth = node.depth, ?outcome, reward, "playout");

        // === BACKPROPAGATION ===
        backpropagate(tree, leaf, reward);
        Ok(())
    }

    /// Attach a child for the first valid move whose position is not
    /// already among the node's children.
    fn expand<S: GameState>(
        &mut self,
        tree: &mut SearchTree<S>,
        id: NodeId,
    ) -> Result<NodeId, SearchError> {
        let next = {
            let node = tree.get(id);
            let existing: FxHashSet<&S> =
                node.children.iter().map(|&child| &tree.get(child).state).collect();

            node.state.valid_moves().iter().find_map(|mv| {
                let mut next = node.state.clone();
                next.apply(mv);
                (!existing.contains(&next)).then_some(next)
            })
        };

        let state = next.ok_or(SearchError::FullyExpanded(id))?;
        let child = tree.add_child(id, state);
        self.stats.nodes_expanded += 1;
        trace!(parent = %id, child = %child, "expanded");
        Ok(child)
    }

    /// Get search statistics from the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

/// Walk from `from` to the root, flipping the reward sign at every step.
fn backpropagate<S>(tree: &mut SearchTree<S>, from: NodeId, reward: f64)
where
    S: GameState,
{
    let mut reward = reward;
    let mut current = Some(from);

    while let Some(id) = current {
        let node = tree.get_mut(id);
        node.record(reward);
        reward = -reward;
        current = node.parent;
    }
}

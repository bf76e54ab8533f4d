//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references for efficiency,
//! cache-friendliness, and serializability. Parent links are plain indices,
//! so there are no reference cycles and no shared ownership.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, SearchNode};
use super::policy::uct_score;
use crate::core::GameState;

/// Arena-based MCTS tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// A tree is built for one search call and dropped afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree<S> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree whose root owns `root_state`.
    pub fn new(root_state: S) -> Self {
        Self::with_capacity(root_state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root_state: S, capacity: usize) -> Self {
        let is_terminal = root_state.is_terminal();
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::new(root_state, None, 0, is_terminal));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Attach a new child owning `state` under `parent`, returning its ID.
    pub fn add_child(&mut self, parent: NodeId, state: S) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        let depth = self.get(parent).depth + 1;
        let is_terminal = state.is_terminal();

        self.nodes.push(SearchNode::new(state, Some(parent), depth, is_terminal));
        self.get_mut(parent).children.push(id);
        id
    }

    /// True iff every valid move of the node's position has a child.
    #[must_use]
    pub fn is_fully_expanded(&self, id: NodeId) -> bool {
        let node = self.get(id);
        node.children.len() == node.state.valid_moves().len()
    }

    /// Child maximising the UCT score with the given exploration weight.
    ///
    /// With `exploration == 0.0` only visited children are considered and
    /// the choice is pure exploitation of mean reward. Ties go to the
    /// earliest child. Returns `None` when there is no candidate.
    #[must_use]
    pub fn best_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let parent = self.get(id);
        let mut best: Option<(NodeId, f64)> = None;

        for &child_id in &parent.children {
            let child = self.get(child_id);
            if exploration == 0.0 && child.visits == 0 {
                continue;
            }
            let score = uct_score(child.mean_reward(), child.visits, parent.visits, exploration);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }

        best.map(|(child_id, _)| child_id)
    }

    /// Children of a node in expansion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.get(id)
            .children
            .iter()
            .map(move |&child| (child, self.get(child)))
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal).count();
        let internal_count = self.nodes.iter().filter(|n| !n.children.is_empty()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            internal_count,
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Number of nodes with at least one child.
    pub internal_count: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.internal_count == 0 {
            0.0
        } else {
            // Every node except the root is someone's child.
            (self.node_count - 1) as f64 / self.internal_count as f64
        }
    }
}

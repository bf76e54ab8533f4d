//! MCTS node structure.
//!
//! Nodes live in the `SearchTree` arena and refer to each other by
//! `NodeId` index, so the parent back-reference never owns anything.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the MCTS tree.
///
/// Holds its own deep copy of the position. `reward_sum / visits` is the
/// node's value for the player who made the move leading into it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode<S> {
    /// Position snapshot, never shared with another node.
    pub state: S,

    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,

    /// Children in expansion order.
    /// SmallVec optimizes for typical branching factor < 8.
    pub children: SmallVec<[NodeId; 8]>,

    /// Simulations routed through this node.
    pub visits: u32,

    /// Signed sum of playout rewards.
    pub reward_sum: f64,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Is this a terminal game state?
    pub is_terminal: bool,
}

impl<S> SearchNode<S> {
    /// Create a new node.
    pub fn new(state: S, parent: Option<NodeId>, depth: u16, is_terminal: bool) -> Self {
        Self {
            state,
            parent,
            children: SmallVec::new(),
            visits: 0,
            reward_sum: 0.0,
            depth,
            is_terminal,
        }
    }

    /// Average reward, or 0 for an unvisited node.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward_sum / self.visits as f64
        }
    }

    /// Check if this is the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Record one simulation result.
    pub fn record(&mut self, reward: f64) {
        self.visits += 1;
        self.reward_sum += reward;
    }
}

//! MCTS node and edge structures.
//!
//! Uses arena-based allocation with index references (NodeId): parent
//! links are plain indices, so the tree is a flat vector with no
//! reference-counting overhead in the rollout hot path.

use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap};

/// Index into the MctsTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Edge representing a move from a parent node to a child.
#[derive(Clone, Debug)]
pub struct Edge<A> {
    /// The move this edge represents.
    pub action: A,

    /// Child node (NONE if not yet expanded).
    pub child: NodeId,

    /// Rollouts that passed through this edge.
    pub visits: u32,

    /// Total reward accumulated for this edge, per actor.
    pub total_reward: PlayerMap<f64>,
}

impl<A> Edge<A> {
    /// Create a new unexpanded edge.
    pub fn new(action: A, player_count: usize) -> Self {
        Self {
            action,
            child: NodeId::NONE,
            visits: 0,
            total_reward: PlayerMap::with_value(player_count, 0.0),
        }
    }

    /// Mean reward of this edge for an actor (0 before any visit).
    #[must_use]
    pub fn mean_reward(&self, player: PlayerId) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward[player] / f64::from(self.visits)
        }
    }

    /// Check if this edge has been expanded (child exists).
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct MctsNode<A> {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Index of the edge from parent that led to this node.
    pub parent_edge_idx: u16,

    /// Actor to move at this node.
    pub to_move: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Rollouts that visited this node.
    pub visits: u32,

    /// Terminal rewards, if this is a terminal game state.
    pub terminal: Option<PlayerMap<f64>>,

    /// Outgoing edges (legal moves).
    /// SmallVec optimizes for typical branching factor < 8.
    pub edges: SmallVec<[Edge<A>; 8]>,
}

impl<A> MctsNode<A> {
    /// Create a new node.
    pub fn new(parent: NodeId, parent_edge_idx: u16, to_move: PlayerId, depth: u16) -> Self {
        Self {
            parent,
            parent_edge_idx,
            to_move,
            depth,
            visits: 0,
            terminal: None,
            edges: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(to_move: PlayerId) -> Self {
        Self::new(NodeId::NONE, 0, to_move, 0)
    }

    /// Indices of edges without a child yet.
    pub fn unexpanded_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_expanded())
            .map(|(i, _)| i)
    }

    /// The edge with the most visits.
    #[must_use]
    pub fn best_edge_by_visits(&self) -> Option<&Edge<A>> {
        self.edges.iter().max_by_key(|e| e.visits)
    }
}

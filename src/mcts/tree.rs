//! Arena-based MCTS tree.
//!
//! Nodes live in a flat `Vec` and reference each other by `NodeId` index,
//! which keeps rollouts cache-friendly and cheap to allocate.

use crate::core::PlayerId;

use super::node::{MctsNode, NodeId};

/// Arena-based search tree, reset at the start of every search.
#[derive(Clone, Debug)]
pub struct MctsTree<A> {
    nodes: Vec<MctsNode<A>>,
    root: NodeId,
    player_count: usize,
}

impl<A> MctsTree<A> {
    /// Create a new tree with a root node.
    pub fn new(root_player: PlayerId, player_count: usize) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
            player_count,
        };
        tree.nodes.push(MctsNode::root(root_player));
        tree
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
    pub fn get(&self, id: NodeId) -> &MctsNode<A> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<A> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MctsNode<A>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
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

    /// Number of actors rewards are tracked for.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Clear the tree and start over with a new root.
    pub fn reset(&mut self, root_player: PlayerId, player_count: usize) {
        self.nodes.clear();
        self.nodes.push(MctsNode::root(root_player));
        self.root = NodeId::new(0);
        self.player_count = player_count;
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MctsNode<A> {
        self.get(self.root)
    }

    /// Get the root node mutably.
    pub fn root_node_mut(&mut self) -> &mut MctsNode<A> {
        self.get_mut(self.root)
    }
}

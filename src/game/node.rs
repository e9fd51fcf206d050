//! Game-tree nodes for adversarial search.
//!
//! Same chain shape as the goal-search node, with the actor to move in
//! place of a path cost: parent links point up the chain only, equality
//! and hashing consider state features alone.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::core::{PlayerId, Result};

use super::state::GameState;

/// An immutable game state snapshot with game-tree context.
pub struct GameNode<S: GameState> {
    /// The game state this node snapshots.
    pub state: S,

    /// The preceding node on the path here. `None` for a root.
    pub parent: Option<Arc<GameNode<S>>>,

    /// The move that produced this node from its parent. `None` for a root.
    pub last_action: Option<S::Action>,

    /// Ply count from the root (root = 0).
    pub depth: u32,

    /// The actor to move at this node.
    pub to_move: PlayerId,
}

impl<S: GameState> GameNode<S> {
    /// Create a root node for a state.
    #[must_use]
    pub fn root(state: S) -> Arc<Self> {
        let to_move = state.current_player();
        Arc::new(Self {
            state,
            parent: None,
            last_action: None,
            depth: 0,
            to_move,
        })
    }

    /// Apply a legal move to this node's state, producing the child node.
    pub fn child(self: &Arc<Self>, action: &S::Action) -> Result<Arc<Self>> {
        let state = self.state.apply(action)?;
        let to_move = state.current_player();

        Ok(Arc::new(Self {
            state,
            parent: Some(Arc::clone(self)),
            last_action: Some(action.clone()),
            depth: self.depth + 1,
            to_move,
        }))
    }

    /// The canonical projection of this node's state.
    #[must_use]
    pub fn features(&self) -> S::Features {
        self.state.features()
    }

    /// Whether this node is a root (has no parent).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The path from the root to this node, in root-first order.
    #[must_use]
    pub fn path(self: &Arc<Self>) -> Vec<Arc<Self>> {
        let mut path = vec![Arc::clone(self)];
        let mut cursor = self.parent.clone();
        while let Some(node) = cursor {
            cursor = node.parent.clone();
            path.push(node);
        }
        path.reverse();
        path
    }

    /// A new root node carrying this node's state, leaving the original
    /// untouched.
    #[must_use]
    pub fn as_root(&self) -> Arc<Self> {
        Self::root(self.state.clone())
    }
}

impl<S: GameState> PartialEq for GameNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.features() == other.features()
    }
}

impl<S: GameState> Eq for GameNode<S> {}

impl<S: GameState> Hash for GameNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.features().hash(state);
    }
}

impl<S: GameState> fmt::Debug for GameNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameNode")
            .field("depth", &self.depth)
            .field("to_move", &self.to_move)
            .field("last_action", &self.last_action)
            .field("is_root", &self.is_root())
            .finish()
    }
}

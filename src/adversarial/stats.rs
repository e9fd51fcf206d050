//! Node and evaluation counters for game-tree search.

use serde::{Deserialize, Serialize};

/// Counters for one search (or accumulated over an agent's lifetime).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCounters {
    /// Game-tree nodes visited.
    pub nodes: u64,

    /// Leaf evaluations performed (terminal or depth-limited).
    pub evals: u64,
}

impl NodeCounters {
    /// Create zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another set of counters into this one.
    pub fn absorb(&mut self, other: NodeCounters) {
        self.nodes += other.nodes;
        self.evals += other.evals;
    }
}

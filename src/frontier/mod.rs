//! Pluggable frontier strategies for goal search.
//!
//! A frontier is the working set of not-yet-expanded search nodes. Each
//! strategy defines which nodes are admitted (the cutoff rule) and in what
//! order they are removed, which is what turns the one traversal loop into
//! random walk, DFS, BFS, uniform-cost, greedy-best, or A* search.
//!
//! Cutoffs bound whichever quantity the strategy's admission rule checks:
//! depth for the uninformed strategies, accumulated path cost for the
//! cost-aware ones. The default cutoff is `f64::INFINITY` (no limit). A
//! cutoff only restricts admission; it never evicts nodes already enqueued.

pub mod informed;
pub mod uninformed;

use std::sync::Arc;

use crate::problem::{SearchNode, SearchState};

pub use informed::{AStarFrontier, GreedyBestFrontier, UniformCostFrontier};
pub use uninformed::{BreadthFirstFrontier, DepthFirstFrontier, RandomFrontier};

/// A mutable container of search nodes with strategy-defined order.
///
/// Lifecycle is scoped to one search invocation; traversal policies call
/// [`clear`](Frontier::clear) before starting.
pub trait Frontier<S: SearchState> {
    /// Add a node, unless the strategy's admission quantity reaches the
    /// cutoff.
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64);

    /// Choose, remove, and return a node, or `None` if empty.
    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>>;

    /// Number of nodes currently held.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all nodes.
    fn clear(&mut self);
}

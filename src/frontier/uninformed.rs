//! Uninformed frontier strategies: random, depth-first, breadth-first.
//!
//! All three admit a node while its depth is below the cutoff; they differ
//! only in removal order.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::core::SearchRng;
use crate::problem::{SearchNode, SearchState};

use super::Frontier;

/// Removes a uniformly random node.
///
/// Seeded: the same seed yields the same walk.
pub struct RandomFrontier<S: SearchState> {
    items: Vec<Arc<SearchNode<S>>>,
    rng: SearchRng,
}

impl<S: SearchState> RandomFrontier<S> {
    /// Create an empty random frontier with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            items: Vec::new(),
            rng: SearchRng::new(seed),
        }
    }
}

impl<S: SearchState> Frontier<S> for RandomFrontier<S> {
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64) {
        if f64::from(node.depth) < cutoff {
            self.items.push(node);
        }
    }

    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>> {
        self.rng.take_random(&mut self.items)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Removes the most recently inserted node (LIFO stack).
#[derive(Default)]
pub struct DepthFirstFrontier<S: SearchState> {
    items: Vec<Arc<SearchNode<S>>>,
}

impl<S: SearchState> DepthFirstFrontier<S> {
    /// Create an empty stack frontier.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<S: SearchState> Frontier<S> for DepthFirstFrontier<S> {
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64) {
        if f64::from(node.depth) < cutoff {
            self.items.push(node);
        }
    }

    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Removes the earliest inserted node (FIFO queue).
#[derive(Default)]
pub struct BreadthFirstFrontier<S: SearchState> {
    items: VecDeque<Arc<SearchNode<S>>>,
}

impl<S: SearchState> BreadthFirstFrontier<S> {
    /// Create an empty FIFO frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<S: SearchState> Frontier<S> for BreadthFirstFrontier<S> {
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64) {
        if f64::from(node.depth) < cutoff {
            self.items.push_back(node);
        }
    }

    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

//! Cost- and heuristic-ordered frontier strategies.
//!
//! All three admit a node while its accumulated path cost is below the
//! cutoff; they differ in the priority that drives removal:
//!
//! - uniform-cost: path cost
//! - greedy-best: heuristic estimate to goal
//! - A*: path cost + heuristic estimate
//!
//! Priorities are fixed at enqueue time. Ties are broken by insertion
//! order, so equal keys are handled deterministically and never panic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use crate::problem::{HeuristicFn, SearchNode, SearchState};

use super::Frontier;

/// Heap entry ordered as a min-heap over (priority, insertion sequence).
struct HeapEntry<S: SearchState> {
    priority: f64,
    seq: u64,
    node: Arc<SearchNode<S>>,
}

impl<S: SearchState> PartialEq for HeapEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal && self.seq == other.seq
    }
}

impl<S: SearchState> Eq for HeapEntry<S> {}

impl<S: SearchState> PartialOrd for HeapEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: SearchState> Ord for HeapEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both keys so that popping
        // yields the lowest priority, earliest-inserted first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Removes the node with the lowest accumulated path cost.
#[derive(Default)]
pub struct UniformCostFrontier<S: SearchState> {
    heap: BinaryHeap<HeapEntry<S>>,
    seq: u64,
}

impl<S: SearchState> UniformCostFrontier<S> {
    /// Create an empty uniform-cost frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<S: SearchState> Frontier<S> for UniformCostFrontier<S> {
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64) {
        if node.path_cost < cutoff {
            self.seq += 1;
            self.heap.push(HeapEntry {
                priority: node.path_cost,
                seq: self.seq,
                node,
            });
        }
    }

    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Removes the node with the lowest heuristic estimate to goal.
pub struct GreedyBestFrontier<S: SearchState> {
    heap: BinaryHeap<HeapEntry<S>>,
    seq: u64,
    heuristic: HeuristicFn<S>,
}

impl<S: SearchState> GreedyBestFrontier<S> {
    /// Create an empty greedy-best frontier driven by `heuristic`.
    #[must_use]
    pub fn new(heuristic: HeuristicFn<S>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            heuristic,
        }
    }
}

impl<S: SearchState> Frontier<S> for GreedyBestFrontier<S> {
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64) {
        if node.path_cost < cutoff {
            self.seq += 1;
            self.heap.push(HeapEntry {
                priority: (self.heuristic)(&node),
                seq: self.seq,
                node,
            });
        }
    }

    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Removes the node with the lowest estimated total path cost
/// (accumulated cost plus heuristic estimate).
pub struct AStarFrontier<S: SearchState> {
    heap: BinaryHeap<HeapEntry<S>>,
    seq: u64,
    heuristic: HeuristicFn<S>,
}

impl<S: SearchState> AStarFrontier<S> {
    /// Create an empty A* frontier driven by `heuristic`.
    #[must_use]
    pub fn new(heuristic: HeuristicFn<S>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            heuristic,
        }
    }
}

impl<S: SearchState> Frontier<S> for AStarFrontier<S> {
    fn enqueue(&mut self, node: Arc<SearchNode<S>>, cutoff: f64) {
        if node.path_cost < cutoff {
            self.seq += 1;
            self.heap.push(HeapEntry {
                priority: node.path_cost + (self.heuristic)(&node),
                seq: self.seq,
                node,
            });
        }
    }

    fn dequeue(&mut self) -> Option<Arc<SearchNode<S>>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

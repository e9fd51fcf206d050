//! Tree search: traversal without cycle elimination.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::core::Result;
use crate::frontier::Frontier;
use crate::problem::{SearchNode, SearchState};

use super::counters::SearchCounters;
use super::{is_backtrack, validate_cutoff, GoalSearch};

/// Traversal with no visited-state bookkeeping.
///
/// Only the immediate backtrack (a child equal to the expanded node's own
/// parent) is skipped, so the same state may be enqueued and expanded many
/// times along different paths.
pub struct TreeSearch<S: SearchState, F: Frontier<S>> {
    frontier: F,
    counters: SearchCounters,
    _state: PhantomData<S>,
}

impl<S: SearchState, F: Frontier<S>> TreeSearch<S, F> {
    /// Compose the tree traversal with a frontier strategy.
    pub fn new(frontier: F) -> Self {
        Self {
            frontier,
            counters: SearchCounters::new(),
            _state: PhantomData,
        }
    }
}

impl<S: SearchState, F: Frontier<S>> GoalSearch<S> for TreeSearch<S, F> {
    fn search_with(
        &mut self,
        root: Arc<SearchNode<S>>,
        on_visit: &mut dyn FnMut(&Arc<SearchNode<S>>) -> bool,
        cutoff: f64,
    ) -> Result<Option<Arc<SearchNode<S>>>> {
        validate_cutoff(cutoff)?;
        self.counters.reset();
        self.frontier.clear();
        self.frontier.enqueue(root, f64::INFINITY);

        while let Some(node) = self.frontier.dequeue() {
            if node.state.is_goal() {
                debug!(
                    depth = node.depth,
                    expansions = self.counters.expansions,
                    enqueues = self.counters.enqueues,
                    "tree search reached goal"
                );
                return Ok(Some(node));
            }
            if on_visit(&node) {
                return Ok(None);
            }

            let mut expanded = false;
            for action in node.state.actions() {
                let child = node.child(&action)?;
                if is_backtrack(&node, &child) {
                    continue;
                }
                self.frontier.enqueue(child, cutoff);
                self.counters.enqueues += 1;
                expanded = true;
            }
            if expanded {
                self.counters.expansions += 1;
            }
        }

        debug!(
            expansions = self.counters.expansions,
            enqueues = self.counters.enqueues,
            "tree search exhausted frontier"
        );
        Ok(None)
    }

    fn counters(&self) -> SearchCounters {
        self.counters
    }
}

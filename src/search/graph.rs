//! Graph search: traversal with a visited-state filter.

use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::Result;
use crate::frontier::Frontier;
use crate::problem::{SearchNode, SearchState};

use super::counters::SearchCounters;
use super::{is_backtrack, validate_cutoff, GoalSearch};

/// Traversal that never re-enqueues a previously seen state.
///
/// A set of state features tracks everything submitted to the frontier;
/// children are marked at enqueue time (optimistic marking), so the same
/// state can never hold two frontier entries. The filter is scoped to a
/// single search invocation.
pub struct GraphSearch<S: SearchState, F: Frontier<S>> {
    frontier: F,
    counters: SearchCounters,
    _state: PhantomData<S>,
}

impl<S: SearchState, F: Frontier<S>> GraphSearch<S, F> {
    /// Compose the graph traversal with a frontier strategy.
    pub fn new(frontier: F) -> Self {
        Self {
            frontier,
            counters: SearchCounters::new(),
            _state: PhantomData,
        }
    }
}

impl<S: SearchState, F: Frontier<S>> GoalSearch<S> for GraphSearch<S, F> {
    fn search_with(
        &mut self,
        root: Arc<SearchNode<S>>,
        on_visit: &mut dyn FnMut(&Arc<SearchNode<S>>) -> bool,
        cutoff: f64,
    ) -> Result<Option<Arc<SearchNode<S>>>> {
        validate_cutoff(cutoff)?;
        self.counters.reset();
        self.frontier.clear();

        let mut seen: FxHashSet<S::Features> = FxHashSet::default();
        seen.insert(root.features());
        self.frontier.enqueue(root, f64::INFINITY);

        while let Some(node) = self.frontier.dequeue() {
            if node.state.is_goal() {
                debug!(
                    depth = node.depth,
                    expansions = self.counters.expansions,
                    enqueues = self.counters.enqueues,
                    "graph search reached goal"
                );
                return Ok(Some(node));
            }
            if on_visit(&node) {
                return Ok(None);
            }

            let mut expanded = false;
            for action in node.state.actions() {
                let child = node.child(&action)?;
                if is_backtrack(&node, &child) || !seen.insert(child.features()) {
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
            "graph search exhausted frontier"
        );
        Ok(None)
    }

    fn counters(&self) -> SearchCounters {
        self.counters
    }
}

//! Anytime search: graph search with a usable best-so-far answer.

use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::Result;
use crate::frontier::Frontier;
use crate::problem::{HeuristicFn, SearchNode, SearchState};

use super::counters::SearchCounters;
use super::{is_backtrack, validate_cutoff, GoalSearch};

/// Graph search that tracks the node closest to the goal seen so far,
/// judged by a heuristic estimate.
///
/// When the frontier empties or the callback requests termination before a
/// goal is found, the best-so-far node is returned instead of no result,
/// making partial progress usable under a cutoff or time limit. The
/// tracker is a running minimum over the root, every dequeued node, and
/// every child submitted to the frontier.
pub struct AnytimeSearch<S: SearchState, F: Frontier<S>> {
    frontier: F,
    heuristic: HeuristicFn<S>,
    counters: SearchCounters,
    _state: PhantomData<S>,
}

impl<S: SearchState, F: Frontier<S>> AnytimeSearch<S, F> {
    /// Compose the anytime traversal with a frontier strategy and the
    /// heuristic that judges closeness to the goal.
    pub fn new(frontier: F, heuristic: HeuristicFn<S>) -> Self {
        Self {
            frontier,
            heuristic,
            counters: SearchCounters::new(),
            _state: PhantomData,
        }
    }
}

impl<S: SearchState, F: Frontier<S>> GoalSearch<S> for AnytimeSearch<S, F> {
    fn search_with(
        &mut self,
        root: Arc<SearchNode<S>>,
        on_visit: &mut dyn FnMut(&Arc<SearchNode<S>>) -> bool,
        cutoff: f64,
    ) -> Result<Option<Arc<SearchNode<S>>>> {
        validate_cutoff(cutoff)?;
        self.counters.reset();
        self.frontier.clear();

        let mut best = Arc::clone(&root);
        let mut best_estimate = (self.heuristic)(&root);

        let mut seen: FxHashSet<S::Features> = FxHashSet::default();
        seen.insert(root.features());
        self.frontier.enqueue(root, f64::INFINITY);

        while let Some(node) = self.frontier.dequeue() {
            if node.state.is_goal() {
                debug!(
                    depth = node.depth,
                    expansions = self.counters.expansions,
                    "anytime search reached goal"
                );
                return Ok(Some(node));
            }

            let estimate = (self.heuristic)(&node);
            if estimate < best_estimate {
                best_estimate = estimate;
                best = Arc::clone(&node);
            }

            if on_visit(&node) {
                debug!(best_estimate, "anytime search stopped by callback");
                return Ok(Some(best));
            }

            let mut expanded = false;
            for action in node.state.actions() {
                let child = node.child(&action)?;
                if is_backtrack(&node, &child) || !seen.insert(child.features()) {
                    continue;
                }

                let child_estimate = (self.heuristic)(&child);
                if child_estimate < best_estimate {
                    best_estimate = child_estimate;
                    best = Arc::clone(&child);
                }

                self.frontier.enqueue(child, cutoff);
                self.counters.enqueues += 1;
                expanded = true;
            }
            if expanded {
                self.counters.expansions += 1;
            }
        }

        debug!(best_estimate, "anytime search exhausted frontier");
        Ok(Some(best))
    }

    fn counters(&self) -> SearchCounters {
        self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::{AStarFrontier, BreadthFirstFrontier};

    /// Line world with the goal at 10.
    #[derive(Clone, Debug)]
    struct Line(i32);

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Step {
        Left,
        Right,
    }

    impl SearchState for Line {
        type Action = Step;
        type Features = i32;

        fn features(&self) -> i32 {
            self.0
        }

        fn is_goal(&self) -> bool {
            self.0 == 10
        }

        fn actions(&self) -> Vec<Step> {
            let mut actions = Vec::new();
            if self.0 > 0 {
                actions.push(Step::Left);
            }
            if self.0 < 10 {
                actions.push(Step::Right);
            }
            actions
        }

        fn apply(&self, action: &Step) -> Result<(Self, f64)> {
            let next = match action {
                Step::Left => self.0 - 1,
                Step::Right => self.0 + 1,
            };
            Ok((Line(next), 1.0))
        }
    }

    fn distance_left() -> HeuristicFn<Line> {
        Arc::new(|n| f64::from(10 - n.state.0))
    }

    #[test]
    fn test_anytime_returns_goal_when_reachable() {
        let mut search = AnytimeSearch::new(BreadthFirstFrontier::new(), distance_left());
        let result = search.search(SearchNode::root(Line(0))).unwrap().unwrap();

        assert!(result.state.is_goal());
    }

    #[test]
    fn test_anytime_returns_best_so_far_under_cutoff() {
        let mut search = AnytimeSearch::new(BreadthFirstFrontier::new(), distance_left());
        // Depth cutoff of 4: goal at depth 10 is unreachable.
        let result = search
            .search_with(SearchNode::root(Line(0)), &mut |_| false, 4.0)
            .unwrap()
            .unwrap();

        assert!(!result.state.is_goal());
        // Deepest admitted node is the closest.
        assert_eq!(result.state.0, 4);
    }

    #[test]
    fn test_anytime_returns_best_so_far_on_callback_stop() {
        let mut search = AnytimeSearch::new(AStarFrontier::new(distance_left()), distance_left());
        let mut visits = 0;
        let result = search
            .search_with(
                SearchNode::root(Line(0)),
                &mut |_| {
                    visits += 1;
                    visits >= 3
                },
                f64::INFINITY,
            )
            .unwrap()
            .unwrap();

        // Stopped early, still made progress toward the goal.
        assert!(!result.state.is_goal());
        assert!(result.state.0 > 0);
    }

    #[test]
    fn test_anytime_immediate_stop_returns_root() {
        let mut search = AnytimeSearch::new(BreadthFirstFrontier::new(), distance_left());
        let result = search
            .search_with(SearchNode::root(Line(0)), &mut |_| true, f64::INFINITY)
            .unwrap()
            .unwrap();

        assert!(result.is_root());
    }
}

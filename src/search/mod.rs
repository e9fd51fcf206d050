//! Single-agent goal-search traversals.
//!
//! Three traversal policies, each generic over a
//! [`Frontier`](crate::frontier::Frontier) strategy supplied at
//! construction:
//!
//! - [`TreeSearch`]: no cycle detection; the same state may be enqueued
//!   and expanded many times.
//! - [`GraphSearch`]: filters out previously expanded states.
//! - [`AnytimeSearch`]: graph search that always has a usable best-so-far
//!   answer, even when stopped early.
//!
//! Any policy/strategy pair composes; [`registry::build_goal_search`]
//! builds one by name.

pub mod anytime;
pub mod counters;
pub mod graph;
pub mod registry;
pub mod tree;

use std::sync::Arc;

use crate::core::{EngineError, Result};
use crate::problem::{SearchNode, SearchState};

pub use anytime::AnytimeSearch;
pub use counters::SearchCounters;
pub use graph::GraphSearch;
pub use registry::{build_goal_search, Algorithm, Strategy, ALGORITHMS, STRATEGIES};
pub use tree::TreeSearch;

/// A goal-search traversal composed with a frontier strategy.
///
/// `search_with` drives one search: it returns `Ok(Some(node))` on success,
/// `Ok(None)` when the frontier is exhausted or the callback requested
/// termination (the anytime traversal instead returns its best-so-far
/// node), and `Err` only for contract violations or misconfiguration.
pub trait GoalSearch<S: SearchState> {
    /// Search from `root`, invoking `on_visit` for each dequeued non-goal
    /// node. A `true` return from the callback requests early termination,
    /// honored before the next expansion. `cutoff` bounds frontier
    /// admission (depth or path cost, per the strategy).
    fn search_with(
        &mut self,
        root: Arc<SearchNode<S>>,
        on_visit: &mut dyn FnMut(&Arc<SearchNode<S>>) -> bool,
        cutoff: f64,
    ) -> Result<Option<Arc<SearchNode<S>>>>;

    /// Counters from the most recent search.
    fn counters(&self) -> SearchCounters;

    /// Search with no callback and no cutoff.
    fn search(&mut self, root: Arc<SearchNode<S>>) -> Result<Option<Arc<SearchNode<S>>>> {
        self.search_with(root, &mut |_| false, f64::INFINITY)
    }
}

/// Reject unusable cutoffs before any search work happens.
pub(crate) fn validate_cutoff(cutoff: f64) -> Result<()> {
    if cutoff.is_nan() || cutoff <= 0.0 {
        return Err(EngineError::Misconfiguration(format!(
            "cutoff must be a positive bound, got {cutoff}"
        )));
    }
    Ok(())
}

/// The no-backtrack rule: whether `child` merely undoes the transition
/// that produced `node`.
pub(crate) fn is_backtrack<S: SearchState>(
    node: &Arc<SearchNode<S>>,
    child: &Arc<SearchNode<S>>,
) -> bool {
    node.parent.as_ref().is_some_and(|parent| **parent == **child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cutoff() {
        assert!(validate_cutoff(f64::INFINITY).is_ok());
        assert!(validate_cutoff(3.0).is_ok());
        assert!(validate_cutoff(0.0).is_err());
        assert!(validate_cutoff(-1.0).is_err());
        assert!(validate_cutoff(f64::NAN).is_err());
    }
}

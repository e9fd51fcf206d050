//! The goal-search state/action contract.
//!
//! Concrete problems (grid mazes, sliding puzzles, ...) live outside this
//! crate and implement [`SearchState`]. The traversal algorithms are written
//! entirely against this trait and never inspect concrete state fields.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::core::Result;

use super::node::SearchNode;

/// A problem state for single-agent goal search.
///
/// ## Implementation Notes
///
/// - `actions` must return a deterministic order: it affects pruning and
///   reproducibility of tests.
/// - `apply` is assumed to be called only on legal actions; implementations
///   may return [`EngineError::IllegalAction`](crate::core::EngineError)
///   for anything else instead of silently producing a wrong state.
/// - `Features` is the canonical, immutable projection used for equality
///   and deduplication. Two states with equal features are the same state,
///   whatever path produced them.
pub trait SearchState: Clone {
    /// Opaque, value-comparable description of a transition.
    type Action: Clone + Eq + Hash + fmt::Debug;

    /// Canonical hashable projection of the state.
    type Features: Clone + Eq + Hash;

    /// The canonical projection of this state.
    fn features(&self) -> Self::Features;

    /// Whether this state satisfies the goal.
    fn is_goal(&self) -> bool;

    /// All legal actions from this state, in deterministic order.
    fn actions(&self) -> Vec<Self::Action>;

    /// Whether an action is legal from this state.
    fn is_legal(&self, action: &Self::Action) -> bool {
        self.actions().contains(action)
    }

    /// Apply a legal action, returning the successor state and the
    /// non-negative cost of the transition.
    fn apply(&self, action: &Self::Action) -> Result<(Self, f64)>;
}

/// A cost-to-goal estimate: pure, deterministic, no side effects.
///
/// Shared (`Arc`) so the same heuristic can drive both a priority frontier
/// and the anytime best-so-far tracker.
pub type HeuristicFn<S> = Arc<dyn Fn(&SearchNode<S>) -> f64 + Send + Sync>;

/// The trivial heuristic: estimates every state at zero.
pub fn zero_heuristic<S: SearchState>() -> HeuristicFn<S> {
    Arc::new(|_| 0.0)
}

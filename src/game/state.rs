//! The adversarial state/action contract.
//!
//! Concrete games (boards, races, pile games) live outside this crate and
//! implement [`GameState`]. The game-tree evaluators are written entirely
//! against this trait plus an opaque evaluation function supplied by the
//! caller.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::core::{PlayerId, Result};

use super::node::GameNode;

/// A game state for two-agent adversarial search.
///
/// ## Implementation Notes
///
/// - `actions` must return a deterministic order: it affects pruning
///   effectiveness and reproducibility.
/// - `Features` must distinguish states where a different actor is to
///   move, either implicitly or by encoding the actor directly.
/// - `utility` is defined only at terminal states. The convention is
///   zero-sum: +1 win, -1 loss, 0 tie from the asked actor's perspective.
pub trait GameState: Clone {
    /// Opaque, value-comparable description of a move.
    type Action: Clone + Eq + Hash + fmt::Debug;

    /// Canonical hashable projection of the state.
    type Features: Clone + Eq + Hash;

    /// The canonical projection of this state.
    fn features(&self) -> Self::Features;

    /// The actor whose turn it is at this state.
    fn current_player(&self) -> PlayerId;

    /// Number of actors in the game.
    fn player_count(&self) -> usize {
        2
    }

    /// Whether the game is over at this state.
    fn is_terminal(&self) -> bool;

    /// The endgame utility from `player`'s perspective, or `None` for a
    /// non-terminal state.
    fn utility(&self, player: PlayerId) -> Option<f64>;

    /// All legal moves from this state, in deterministic order.
    fn actions(&self) -> Vec<Self::Action>;

    /// Whether a move is legal from this state.
    fn is_legal(&self, action: &Self::Action) -> bool {
        self.actions().contains(action)
    }

    /// Apply a legal move, returning the successor state.
    fn apply(&self, action: &Self::Action) -> Result<Self>;
}

/// A position evaluation: pure, deterministic, no side effects.
///
/// Called with a node and the actor whose perspective is being evaluated
/// ("the maximizer"). Substitutes for utility at depth-limited leaves.
pub type EvalFn<S> = Arc<dyn Fn(&GameNode<S>, PlayerId) -> f64 + Send + Sync>;

/// Observation callback invoked while a game search runs.
///
/// Receives a visited node, its computed value, and an optional note (for
/// pruning cutoffs and similar events). Returning `true` requests early
/// termination, which the engines honor before their next recursive step.
pub type ObserverFn<S> = Box<dyn FnMut(&GameNode<S>, f64, Option<&str>) -> bool + Send>;

/// An observer that never requests termination.
pub fn silent_observer<S: GameState>() -> ObserverFn<S> {
    Box::new(|_, _, _| false)
}

/// Evaluate with the standard endgame utility: the terminal utility for
/// the asked actor, and 0 for any non-terminal state.
pub fn endgame_utility_eval<S: GameState>() -> EvalFn<S> {
    Arc::new(|node, player| node.state.utility(player).unwrap_or(0.0))
}

/// Like [`endgame_utility_eval`], but scaled by `1 + 1/(depth + 1)` so
/// that winning sooner and losing later score better.
///
/// The scaled value depends on the node's position in its search tree, so
/// searches from different roots legitimately score the same state
/// differently.
pub fn fast_win_utility_eval<S: GameState>() -> EvalFn<S> {
    Arc::new(|node, player| match node.state.utility(player) {
        Some(u) => u * (1.0 + 1.0 / f64::from(node.depth + 1)),
        None => 0.0,
    })
}

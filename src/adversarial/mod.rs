//! Adversarial game-tree search.
//!
//! Recursive, depth-bounded evaluators over the [`GameState`] contract:
//!
//! - [`MaximizingAgent`]: every ply maximizes for the fixed player
//! - [`MinimaxAgent`]: the opponent minimizes
//! - [`ExpectimaxAgent`]: the opponent plays uniformly at random
//! - [`AlphaBetaAgent`]: minimax with pruning, identical results
//! - [`MoveOrderingAlphaBetaAgent`]: pruning plus memoized best-move hints
//! - [`IterativeDeepening`]: anytime deepening over any of the above
//!
//! Plus the search-free [`RandomAgent`] and [`ReflexAgent`] baselines.
//! Leaf values come from a caller-supplied evaluation function; every
//! evaluator reports finalized node values to an observation callback
//! that can request early termination.
//!
//! The rollout-based planner lives in [`crate::mcts`].
//!
//! [`GameState`]: crate::game::GameState

pub mod agent;
pub mod alphabeta;
pub mod context;
pub mod deepening;
pub mod expectimax;
pub mod maximizing;
pub mod minimax;
pub mod stats;

#[cfg(test)]
pub(crate) mod testgames;

pub use agent::{Decision, GameAgent, RandomAgent, ReflexAgent};
pub use alphabeta::{AlphaBetaAgent, MoveOrderingAlphaBetaAgent};
pub use context::SearchContext;
pub use deepening::{DepthLimited, IterativeDeepening};
pub use expectimax::ExpectimaxAgent;
pub use maximizing::MaximizingAgent;
pub use minimax::MinimaxAgent;
pub use stats::NodeCounters;

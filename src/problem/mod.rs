//! Goal-search problem contract: states, actions, and search-tree nodes.

pub mod node;
pub mod state;

pub use node::SearchNode;
pub use state::{zero_heuristic, HeuristicFn, SearchState};

//! Monte Carlo tree search.
//!
//! ## Overview
//!
//! An anytime, rollout-based planner over the same state/action contract
//! as the recursive evaluators:
//!
//! - **Selection**: UCT from each node's own actor's perspective
//! - **Expansion**: one new child per rollout
//! - **Playout**: uniformly random by default, pluggable via
//!   [`RolloutPolicy`]
//! - **Backpropagation**: terminal rewards added along the explored path
//!
//! The tree is an arena of index-linked nodes, rebuilt per search.
//! Searches run within a wall-clock budget and/or rollout cap and return
//! the most-visited root move.
//!
//! ## Usage
//!
//! ```no_run
//! use statespace::adversarial::GameAgent;
//! use statespace::game::GameState;
//! use statespace::mcts::{MctsAgent, MctsConfig};
//!
//! fn example<S: GameState>(state: &S) {
//!     let config = MctsConfig::default().with_max_rollouts(Some(1000));
//!     let mut agent = MctsAgent::new(config).expect("bounded config");
//!
//!     if let Some(decision) = agent.pick_action(state).expect("contract holds") {
//!         println!("best move: {:?}", decision.action);
//!     }
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MctsConfig;
pub use node::{Edge, MctsNode, NodeId};
pub use policy::{RandomRollout, RolloutPolicy};
pub use search::MctsAgent;
pub use stats::MctsStats;
pub use tree::MctsTree;

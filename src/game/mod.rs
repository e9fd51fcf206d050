//! Adversarial game contract: states, moves, game-tree nodes, evaluation.

pub mod node;
pub mod state;

pub use node::GameNode;
pub use state::{
    endgame_utility_eval, fast_win_utility_eval, silent_observer, EvalFn, GameState, ObserverFn,
};

//! # statespace
//!
//! A general-purpose engine for exploring large implicit state spaces
//! under two objectives:
//!
//! 1. **Goal search**: find a path from an initial state to a goal,
//!    optimizing for existence, cost, or an informed estimate.
//! 2. **Adversarial search**: choose a move assuming an opponent who is
//!    optimal, random, or modeled by a heuristic.
//!
//! ## Design Principles
//!
//! 1. **Problem-Agnostic**: concrete environments (grids, puzzles, board
//!    games) live outside the crate and implement the [`SearchState`] or
//!    [`GameState`] contract; the engines never inspect concrete state
//!    fields.
//!
//! 2. **Composition Over Combination**: a traversal policy takes a
//!    frontier strategy by value, so every algorithm x strategy pair is
//!    an ordinary generic instantiation, enumerable through a static
//!    registry.
//!
//! 3. **Opaque Evaluation**: heuristics and evaluation functions are
//!    caller-supplied pure closures; panics in them propagate unmodified.
//!
//! 4. **Cooperative Interruption**: every engine reports progress to an
//!    observation callback that can request early termination, honored
//!    between expansion steps or recursive calls.
//!
//! ## Modules
//!
//! - `core`: actors, errors, deterministic RNG
//! - `problem`: the goal-search state/action contract and search nodes
//! - `game`: the adversarial contract, game nodes, evaluation functions
//! - `frontier`: pluggable frontier strategies (stack, queue, random,
//!   cost- and heuristic-priority)
//! - `search`: tree, graph, and anytime traversals plus the registry
//! - `adversarial`: maximizing, minimax, expectimax, alpha-beta (plain
//!   and move-ordering), iterative deepening, and baseline agents
//! - `mcts`: the rollout-based anytime planner
//!
//! All engines are single-threaded and synchronous; one agent instance
//! owns its lifetime state (counters, transposition table, tree) and is
//! not meant to be shared across threads without external serialization.

pub mod adversarial;
pub mod core;
pub mod frontier;
pub mod game;
pub mod mcts;
pub mod problem;
pub mod search;

// Re-export commonly used types
pub use crate::core::{EngineError, PlayerId, PlayerMap, SearchRng};

pub use crate::problem::{zero_heuristic, HeuristicFn, SearchNode, SearchState};

pub use crate::game::{
    endgame_utility_eval, fast_win_utility_eval, silent_observer, EvalFn, GameNode, GameState,
    ObserverFn,
};

pub use crate::frontier::{
    AStarFrontier, BreadthFirstFrontier, DepthFirstFrontier, Frontier, GreedyBestFrontier,
    RandomFrontier, UniformCostFrontier,
};

pub use crate::search::{
    build_goal_search, Algorithm, AnytimeSearch, GoalSearch, GraphSearch, SearchCounters,
    Strategy, TreeSearch,
};

pub use crate::adversarial::{
    AlphaBetaAgent, Decision, DepthLimited, ExpectimaxAgent, GameAgent, IterativeDeepening,
    MaximizingAgent, MinimaxAgent, MoveOrderingAlphaBetaAgent, NodeCounters, RandomAgent,
    ReflexAgent,
};

pub use crate::mcts::{MctsAgent, MctsConfig, MctsStats, RandomRollout, RolloutPolicy};

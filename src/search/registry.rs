//! Static registry of traversal/strategy combinations.
//!
//! Replaces dynamic class synthesis with a fixed set of names and one
//! factory: any [`Algorithm`] composes with any [`Strategy`] into a boxed
//! [`GoalSearch`]. Invalid combinations are rejected before any search
//! starts.

use std::str::FromStr;

use crate::core::{EngineError, Result};
use crate::frontier::{
    AStarFrontier, BreadthFirstFrontier, DepthFirstFrontier, Frontier, GreedyBestFrontier,
    RandomFrontier, UniformCostFrontier,
};
use crate::problem::{HeuristicFn, SearchState};

use super::{AnytimeSearch, GoalSearch, GraphSearch, TreeSearch};

/// Traversal policy names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Tree search: no cycle elimination.
    Tree,
    /// Graph search: visited-state filtering.
    Graph,
    /// Anytime search: graph search with a best-so-far answer.
    Anytime,
}

/// All traversal policies, in registry order.
pub const ALGORITHMS: [Algorithm; 3] = [Algorithm::Tree, Algorithm::Graph, Algorithm::Anytime];

impl Algorithm {
    /// The registry name of this traversal.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Tree => "tree",
            Algorithm::Graph => "graph",
            Algorithm::Anytime => "anytime",
        }
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        ALGORITHMS
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| EngineError::Misconfiguration(format!("unknown algorithm '{s}'")))
    }
}

/// Frontier strategy names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform random removal.
    Random,
    /// LIFO stack.
    DepthFirst,
    /// FIFO queue.
    BreadthFirst,
    /// Priority by path cost.
    UniformCost,
    /// Priority by heuristic estimate.
    GreedyBest,
    /// Priority by path cost plus heuristic estimate.
    AStar,
}

/// All frontier strategies, in registry order.
pub const STRATEGIES: [Strategy; 6] = [
    Strategy::Random,
    Strategy::DepthFirst,
    Strategy::BreadthFirst,
    Strategy::UniformCost,
    Strategy::GreedyBest,
    Strategy::AStar,
];

impl Strategy {
    /// The registry name of this strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::GreedyBest => "greedy",
            Strategy::AStar => "astar",
        }
    }

    /// Whether this strategy needs a heuristic to order its frontier.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Strategy::GreedyBest | Strategy::AStar)
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        STRATEGIES
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| EngineError::Misconfiguration(format!("unknown strategy '{s}'")))
    }
}

/// Compose one traversal policy with one frontier strategy.
///
/// `heuristic` is required by the informed strategies (greedy, A*) and by
/// the anytime traversal; combinations missing one are rejected with
/// [`EngineError::Misconfiguration`]. `seed` drives the random strategy
/// only.
pub fn build_goal_search<S: SearchState + 'static>(
    algorithm: Algorithm,
    strategy: Strategy,
    heuristic: Option<HeuristicFn<S>>,
    seed: u64,
) -> Result<Box<dyn GoalSearch<S>>> {
    let missing_heuristic = || {
        EngineError::Misconfiguration(format!(
            "strategy '{}' requires a heuristic",
            strategy.name()
        ))
    };

    match strategy {
        Strategy::Random => compose(algorithm, RandomFrontier::new(seed), heuristic),
        Strategy::DepthFirst => compose(algorithm, DepthFirstFrontier::new(), heuristic),
        Strategy::BreadthFirst => compose(algorithm, BreadthFirstFrontier::new(), heuristic),
        Strategy::UniformCost => compose(algorithm, UniformCostFrontier::new(), heuristic),
        Strategy::GreedyBest => {
            let h = heuristic.clone().ok_or_else(missing_heuristic)?;
            compose(algorithm, GreedyBestFrontier::new(h), heuristic)
        }
        Strategy::AStar => {
            let h = heuristic.clone().ok_or_else(missing_heuristic)?;
            compose(algorithm, AStarFrontier::new(h), heuristic)
        }
    }
}

fn compose<S, F>(
    algorithm: Algorithm,
    frontier: F,
    heuristic: Option<HeuristicFn<S>>,
) -> Result<Box<dyn GoalSearch<S>>>
where
    S: SearchState + 'static,
    F: Frontier<S> + 'static,
{
    Ok(match algorithm {
        Algorithm::Tree => Box::new(TreeSearch::new(frontier)),
        Algorithm::Graph => Box::new(GraphSearch::new(frontier)),
        Algorithm::Anytime => {
            let h = heuristic.ok_or_else(|| {
                EngineError::Misconfiguration("anytime traversal requires a heuristic".into())
            })?;
            Box::new(AnytimeSearch::new(frontier, h))
        }
    })
}

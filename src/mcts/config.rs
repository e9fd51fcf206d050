//! Monte Carlo tree search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
///
/// A search must be bounded by a wall-clock budget, a rollout cap, or
/// both; [`MctsAgent::new`](super::search::MctsAgent::new) rejects a
/// configuration with neither.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// UCT exploration bias (default: sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration_bias: f64,

    /// Wall-clock budget per search, re-checked every rollout.
    pub time_budget: Option<Duration>,

    /// Maximum rollouts per search.
    pub max_rollouts: Option<u32>,

    /// Maximum nodes to allocate in the tree.
    /// Prevents memory exhaustion on large searches.
    pub max_nodes: usize,

    /// Random seed for rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_bias: std::f64::consts::SQRT_2,
            time_budget: Some(Duration::from_millis(100)),
            max_rollouts: None,
            max_nodes: 100_000,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Set the exploration bias.
    #[must_use]
    pub fn with_exploration_bias(mut self, bias: f64) -> Self {
        self.exploration_bias = bias;
        self
    }

    /// Set the wall-clock budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    /// Set the rollout cap.
    #[must_use]
    pub fn with_max_rollouts(mut self, rollouts: Option<u32>) -> Self {
        self.max_rollouts = rollouts;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();

        assert!((config.exploration_bias - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.time_budget, Some(Duration::from_millis(100)));
        assert_eq!(config.max_rollouts, None);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_exploration_bias(2.0)
            .with_seed(123)
            .with_time_budget(None)
            .with_max_rollouts(Some(500));

        assert_eq!(config.exploration_bias, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.time_budget, None);
        assert_eq!(config.max_rollouts, Some(500));
    }

    #[test]
    fn test_serialization() {
        let config = MctsConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MctsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.time_budget, deserialized.time_budget);
    }
}

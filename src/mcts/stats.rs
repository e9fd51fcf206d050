//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one MCTS search.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MctsStats {
    /// Rollouts performed.
    pub rollouts: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Maximum tree depth reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl MctsStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rollouts per second during the last search.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.rollouts) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

//! Instrumentation counters for goal-search traversals.

use serde::{Deserialize, Serialize};

/// Counters collected during one search invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounters {
    /// Nodes expanded: dequeued nodes for which at least one child was
    /// submitted to the frontier.
    pub expansions: u64,

    /// Enqueue operations performed (after the no-backtrack and duplicate
    /// filters, before cutoff admission).
    pub enqueues: u64,
}

impl SearchCounters {
    /// Create zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

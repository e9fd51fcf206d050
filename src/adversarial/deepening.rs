//! Iterative deepening over any depth-limited game-tree agent.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::{EngineError, Result};
use crate::game::GameState;

use super::agent::{Decision, GameAgent};

/// A game-tree agent whose depth limit and deadline can be driven from
/// outside, which is what iterative deepening needs.
pub trait DepthLimited<S: GameState>: GameAgent<S> {
    /// Replace the depth limit (`None` = unbounded).
    fn set_depth_limit(&mut self, limit: Option<u32>);

    /// Replace the wall-clock deadline, honored within one node visit.
    fn set_deadline(&mut self, deadline: Option<Instant>);

    /// Whether the most recent search was cut short.
    fn interrupted(&self) -> bool;
}

/// Runs progressively deeper searches: depth 1, 2, 3, ...
///
/// An anytime strategy: each completed pass appends its `(action, value,
/// leaf)` decision to a history, and the deepest completed entry is the
/// usable result at whatever point the search stops. Stopping happens when
/// the observation callback or the time limit interrupts a pass (that
/// pass is discarded), or when the chosen action has been identical for
/// `plateau_cutoff` consecutive passes.
pub struct IterativeDeepening<S: GameState, A: DepthLimited<S>> {
    inner: A,
    plateau_cutoff: Option<u32>,
    time_limit: Option<Duration>,
    _state: PhantomData<S>,
}

impl<S: GameState, A: DepthLimited<S>> IterativeDeepening<S, A> {
    /// Wrap `inner`, stopping on an action plateau of `plateau_cutoff`
    /// passes and/or after `time_limit` of wall-clock time.
    ///
    /// At least one of the two must be given: with neither, only the
    /// inner agent's own observer could ever stop the deepening loop, and
    /// a blind unbounded run is rejected as a misconfiguration.
    pub fn new(
        inner: A,
        plateau_cutoff: Option<u32>,
        time_limit: Option<Duration>,
    ) -> Result<Self> {
        if plateau_cutoff.is_none() && time_limit.is_none() {
            return Err(EngineError::Misconfiguration(
                "iterative deepening needs a plateau cutoff or a time limit".into(),
            ));
        }
        if plateau_cutoff == Some(0) {
            return Err(EngineError::Misconfiguration(
                "plateau cutoff must be at least 1".into(),
            ));
        }
        Ok(Self {
            inner,
            plateau_cutoff,
            time_limit,
            _state: PhantomData,
        })
    }

    /// Access the wrapped agent (for counters and tables).
    #[must_use]
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Run deepening passes and return the decision of every completed
    /// pass: index `i` holds the result of the search with depth limit
    /// `i + 1`. An interrupted pass is not included.
    pub fn pick_action_iterative(&mut self, state: &S) -> Result<Vec<Decision<S>>> {
        let deadline = self.time_limit.map(|limit| Instant::now() + limit);
        self.inner.set_deadline(deadline);

        let mut history: Vec<Decision<S>> = Vec::new();
        let mut plateau_run = 0u32;
        let mut depth = 1u32;
        loop {
            self.inner.set_depth_limit(Some(depth));
            let picked = self.inner.pick_action(state);
            if picked.is_err() {
                self.inner.set_deadline(None);
            }
            let decision = match picked? {
                Some(decision) if !self.inner.interrupted() => decision,
                // Interrupted mid-pass (partial result discarded) or no
                // legal move at all.
                _ => break,
            };

            debug!(depth, value = ?decision.value, action = ?decision.action, "deepening pass complete");
            plateau_run = match history.last() {
                Some(previous) if previous.action == decision.action => plateau_run + 1,
                _ => 1,
            };
            history.push(decision);

            if self
                .plateau_cutoff
                .is_some_and(|cutoff| plateau_run >= cutoff)
            {
                debug!(depth, plateau_run, "deepening stopped on plateau");
                break;
            }
            depth += 1;
        }

        self.inner.set_deadline(None);
        Ok(history)
    }
}

impl<S: GameState, A: DepthLimited<S>> GameAgent<S> for IterativeDeepening<S, A> {
    /// The deepest completed pass, or `None` if no pass completed.
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        Ok(self.pick_action_iterative(state)?.pop())
    }
}

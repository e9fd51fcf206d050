//! Shared plumbing for the recursive game-tree evaluators.
//!
//! `SearchContext` bundles everything the depth-bounded evaluators have in
//! common: the fixed player, the evaluation function, the observation
//! callback, the depth limit and optional deadline, and the node/eval
//! counters. Early termination unwinds through `Result<_, Unwind>` and
//! `?`, so every evaluator stops between recursive steps without leaving
//! partial state behind.

use std::time::Instant;

use crate::core::{EngineError, PlayerId, Result};
use crate::game::{silent_observer, EvalFn, GameNode, GameState, ObserverFn};

use super::stats::NodeCounters;

/// Why a recursive search unwound before completing.
pub(crate) enum Unwind {
    /// The observation callback or deadline requested termination.
    Stopped,
    /// A contract violation surfaced by the problem implementation.
    Failed(EngineError),
}

impl From<EngineError> for Unwind {
    fn from(err: EngineError) -> Self {
        Unwind::Failed(err)
    }
}

/// Result type threaded through the recursive evaluators.
pub(crate) type Step<T> = std::result::Result<T, Unwind>;

/// Common state for one depth-bounded game-tree search agent.
pub struct SearchContext<S: GameState> {
    /// The actor this agent maximizes for.
    pub player: PlayerId,

    eval_fn: EvalFn<S>,
    observer: ObserverFn<S>,

    /// Max plies below the searched state, `None` for unbounded.
    pub depth_limit: Option<u32>,

    /// Wall-clock point after which the search unwinds, checked per node.
    pub deadline: Option<Instant>,

    totals: NodeCounters,
    lifetime: NodeCounters,
    interrupted: bool,
}

impl<S: GameState> SearchContext<S> {
    /// Create a context maximizing for `player` with the given evaluation
    /// function, no observer, and no depth limit.
    pub fn new(player: PlayerId, eval_fn: EvalFn<S>) -> Self {
        Self {
            player,
            eval_fn,
            observer: silent_observer(),
            depth_limit: None,
            deadline: None,
            totals: NodeCounters::new(),
            lifetime: NodeCounters::new(),
            interrupted: false,
        }
    }

    /// Replace the observation callback.
    pub fn set_observer(&mut self, observer: ObserverFn<S>) {
        self.observer = observer;
    }

    /// Counters from the most recent search.
    #[must_use]
    pub fn counters(&self) -> NodeCounters {
        self.totals
    }

    /// Counters accumulated over this agent's lifetime.
    #[must_use]
    pub fn lifetime(&self) -> NodeCounters {
        self.lifetime
    }

    /// Whether the most recent search was cut short by the observer or
    /// deadline.
    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Reject a search started on another actor's turn.
    pub(crate) fn check_turn(&self, state: &S) -> Result<()> {
        if state.current_player() != self.player {
            return Err(EngineError::Misconfiguration(format!(
                "agent plays {} but it is {}'s turn",
                self.player,
                state.current_player()
            )));
        }
        Ok(())
    }

    /// Start a search: zero the per-search counters.
    pub(crate) fn begin_search(&mut self) {
        self.totals.reset();
        self.interrupted = false;
    }

    /// Finish a search: fold the per-search counters into the lifetime.
    pub(crate) fn end_search(&mut self) {
        self.lifetime.absorb(self.totals);
    }

    /// Count a visited node and honor the deadline.
    pub(crate) fn visit(&mut self) -> Step<()> {
        self.totals.nodes += 1;
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(Unwind::Stopped);
        }
        Ok(())
    }

    /// Evaluate a leaf from the fixed player's perspective.
    pub(crate) fn evaluate(&mut self, node: &GameNode<S>) -> f64 {
        self.totals.evals += 1;
        (self.eval_fn)(node, self.player)
    }

    /// Report a node's finalized value to the observer; honors a
    /// termination request.
    pub(crate) fn observe(
        &mut self,
        node: &GameNode<S>,
        value: f64,
        note: Option<&str>,
    ) -> Step<()> {
        if (self.observer)(node, value, note) {
            return Err(Unwind::Stopped);
        }
        Ok(())
    }

    /// Whether `depth` plies below the searched root exhaust the limit.
    pub(crate) fn depth_exhausted(&self, depth: u32) -> bool {
        self.depth_limit.is_some_and(|limit| depth >= limit)
    }

    /// Map a finished search to the public result, recording interruption.
    pub(crate) fn resolve<T>(&mut self, outcome: Step<T>) -> Result<Option<T>> {
        match outcome {
            Ok(value) => Ok(Some(value)),
            Err(Unwind::Stopped) => {
                self.interrupted = true;
                Ok(None)
            }
            Err(Unwind::Failed(err)) => Err(err),
        }
    }
}

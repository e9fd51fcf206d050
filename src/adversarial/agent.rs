//! The game-agent interface and the search-free baseline agents.

use std::fmt;
use std::sync::Arc;

use crate::core::{PlayerId, Result, SearchRng};
use crate::game::{EvalFn, GameNode, GameState};

use super::stats::NodeCounters;

/// The outcome of picking an action: the chosen move, the computed value
/// of taking it (when the agent computes one), and the leaf state the
/// value was derived from (when a single leaf is meaningful).
pub struct Decision<S: GameState> {
    /// The chosen move.
    pub action: S::Action,

    /// Expected value of taking the move, from the agent's perspective.
    pub value: Option<f64>,

    /// The leaf at the end of the expected line of play.
    pub leaf: Option<Arc<GameNode<S>>>,
}

impl<S: GameState> Clone for Decision<S> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            value: self.value,
            leaf: self.leaf.clone(),
        }
    }
}

impl<S: GameState> fmt::Debug for Decision<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decision")
            .field("action", &self.action)
            .field("value", &self.value)
            .field("leaf_depth", &self.leaf.as_ref().map(|l| l.depth))
            .finish()
    }
}

/// A game-playing agent: anything that can pick a move for a state.
///
/// Returns `Ok(None)` when there is no result: no legal move exists, or
/// an observation callback / deadline terminated the search early (a
/// normal incomplete outcome, not an error). `Err` is reserved for
/// contract violations and misconfiguration.
pub trait GameAgent<S: GameState> {
    /// Choose a move for `state`.
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>>;
}

/// Picks a uniformly random legal move. No value, no leaf.
pub struct RandomAgent {
    rng: SearchRng,
}

impl RandomAgent {
    /// Create a random agent with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SearchRng::new(seed),
        }
    }
}

impl<S: GameState> GameAgent<S> for RandomAgent {
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        let actions = state.actions();
        Ok(self.rng.choose(&actions).map(|action| Decision {
            action: action.clone(),
            value: None,
            leaf: None,
        }))
    }
}

/// Evaluates each immediately reachable state and picks the best, with no
/// deeper search. A depth-one baseline for any evaluation function.
pub struct ReflexAgent<S: GameState> {
    player: PlayerId,
    eval_fn: EvalFn<S>,
    totals: NodeCounters,
    lifetime: NodeCounters,
}

impl<S: GameState> ReflexAgent<S> {
    /// Create a reflex agent maximizing `eval_fn` for `player`.
    pub fn new(player: PlayerId, eval_fn: EvalFn<S>) -> Self {
        Self {
            player,
            eval_fn,
            totals: NodeCounters::new(),
            lifetime: NodeCounters::new(),
        }
    }

    /// Counters from the most recent pick.
    #[must_use]
    pub fn counters(&self) -> NodeCounters {
        self.totals
    }

    /// Counters accumulated over this agent's lifetime.
    #[must_use]
    pub fn lifetime(&self) -> NodeCounters {
        self.lifetime
    }
}

impl<S: GameState> GameAgent<S> for ReflexAgent<S> {
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        self.totals.reset();
        let root = GameNode::root(state.clone());
        self.totals.nodes += 1;

        let mut best: Option<Decision<S>> = None;
        let mut best_value = f64::NEG_INFINITY;
        for action in root.state.actions() {
            let child = root.child(&action)?;
            self.totals.nodes += 1;
            self.totals.evals += 1;
            let value = (self.eval_fn)(&child, self.player);
            if best.is_none() || value > best_value {
                best_value = value;
                best = Some(Decision {
                    action,
                    value: Some(value),
                    leaf: Some(child),
                });
            }
        }

        self.lifetime.absorb(self.totals);
        Ok(best)
    }
}

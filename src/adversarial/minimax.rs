//! Minimax search: the standard pessimistic adversarial model.

use std::sync::Arc;

use crate::core::{PlayerId, Result};
use crate::game::{EvalFn, GameNode, GameState, ObserverFn};

use super::agent::{Decision, GameAgent};
use super::context::{SearchContext, Step};
use super::deepening::DepthLimited;
use super::stats::NodeCounters;

/// Depth-first search where the fixed player's turns maximize utility and
/// the opponent's turns minimize the same value.
pub struct MinimaxAgent<S: GameState> {
    ctx: SearchContext<S>,
}

impl<S: GameState> MinimaxAgent<S> {
    /// Create an agent maximizing `eval_fn` for `player`, unbounded depth.
    pub fn new(player: PlayerId, eval_fn: EvalFn<S>) -> Self {
        Self {
            ctx: SearchContext::new(player, eval_fn),
        }
    }

    /// Limit search depth (plies below the searched state).
    #[must_use]
    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.ctx.depth_limit = Some(limit);
        self
    }

    /// Attach an observation callback.
    #[must_use]
    pub fn with_observer(mut self, observer: ObserverFn<S>) -> Self {
        self.ctx.set_observer(observer);
        self
    }

    /// Counters from the most recent search.
    #[must_use]
    pub fn counters(&self) -> NodeCounters {
        self.ctx.counters()
    }

    /// Counters accumulated over this agent's lifetime.
    #[must_use]
    pub fn lifetime(&self) -> NodeCounters {
        self.ctx.lifetime()
    }

    fn search_root(&mut self, root: &Arc<GameNode<S>>) -> Step<Option<Decision<S>>> {
        self.ctx.visit()?;

        let mut best: Option<Decision<S>> = None;
        let mut best_value = f64::NEG_INFINITY;
        for action in root.state.actions() {
            let child = root.child(&action)?;
            let (value, leaf) = self.value_of(&child)?;
            if best.is_none() || value > best_value {
                best_value = value;
                best = Some(Decision {
                    action,
                    value: Some(value),
                    leaf: Some(leaf),
                });
            }
        }

        if best.is_some() {
            self.ctx.observe(root, best_value, None)?;
        }
        Ok(best)
    }

    fn value_of(&mut self, node: &Arc<GameNode<S>>) -> Step<(f64, Arc<GameNode<S>>)> {
        self.ctx.visit()?;

        if node.state.is_terminal() || self.ctx.depth_exhausted(node.depth) {
            let value = self.ctx.evaluate(node);
            self.ctx.observe(node, value, None)?;
            return Ok((value, Arc::clone(node)));
        }

        let actions = node.state.actions();
        if actions.is_empty() {
            let value = self.ctx.evaluate(node);
            self.ctx.observe(node, value, Some("no legal moves"))?;
            return Ok((value, Arc::clone(node)));
        }

        let maximizing = node.to_move == self.ctx.player;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_leaf = Arc::clone(node);
        for action in actions {
            let child = node.child(&action)?;
            let (value, leaf) = self.value_of(&child)?;
            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best_leaf = leaf;
            }
        }

        self.ctx.observe(node, best_value, None)?;
        Ok((best_value, best_leaf))
    }
}

impl<S: GameState> GameAgent<S> for MinimaxAgent<S> {
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        self.ctx.check_turn(state)?;
        self.ctx.begin_search();

        let root = GameNode::root(state.clone());
        let outcome = self.search_root(&root);
        let result = self.ctx.resolve(outcome).map(Option::flatten);

        self.ctx.end_search();
        result
    }
}

impl<S: GameState> DepthLimited<S> for MinimaxAgent<S> {
    fn set_depth_limit(&mut self, limit: Option<u32>) {
        self.ctx.depth_limit = limit;
    }

    fn set_deadline(&mut self, deadline: Option<std::time::Instant>) {
        self.ctx.deadline = deadline;
    }

    fn interrupted(&self) -> bool {
        self.ctx.interrupted()
    }
}

//! Maximizing search: every ply maximizes for the fixed player.

use std::sync::Arc;

use crate::core::{PlayerId, Result};
use crate::game::{EvalFn, GameNode, GameState, ObserverFn};

use super::agent::{Decision, GameAgent};
use super::context::{SearchContext, Step};
use super::deepening::DepthLimited;
use super::stats::NodeCounters;

/// Depth-first search that models every actor as maximizing utility for
/// the fixed player, an optimistic and non-adversarial opponent model.
pub struct MaximizingAgent<S: GameState> {
    ctx: SearchContext<S>,
}

impl<S: GameState> MaximizingAgent<S> {
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

        let mut best_value = f64::NEG_INFINITY;
        let mut best_leaf = Arc::clone(node);
        for action in actions {
            let child = node.child(&action)?;
            let (value, leaf) = self.value_of(&child)?;
            if value > best_value {
                best_value = value;
                best_leaf = leaf;
            }
        }

        self.ctx.observe(node, best_value, None)?;
        Ok((best_value, best_leaf))
    }
}

impl<S: GameState> GameAgent<S> for MaximizingAgent<S> {
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

impl<S: GameState> DepthLimited<S> for MaximizingAgent<S> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversarial::testgames::Pile;
    use crate::game::endgame_utility_eval;

    #[test]
    fn test_maximizing_assumes_cooperative_opponent() {
        // A pile of 3 is lost for the mover under best play, but the
        // maximizing model assumes the opponent hands over the win.
        let mut agent = MaximizingAgent::new(PlayerId::new(0), endgame_utility_eval());
        let decision = agent.pick_action(&Pile::new(3)).unwrap().unwrap();

        assert_eq!(decision.value, Some(1.0));
    }

    #[test]
    fn test_counts_nodes_and_evals() {
        let mut agent = MaximizingAgent::new(PlayerId::new(0), endgame_utility_eval());
        agent.pick_action(&Pile::new(4)).unwrap();

        let counters = agent.counters();
        assert!(counters.nodes > counters.evals);
        assert!(counters.evals > 0);
    }

    #[test]
    fn test_depth_limit_caps_search() {
        let mut shallow = MaximizingAgent::new(PlayerId::new(0), endgame_utility_eval())
            .with_depth_limit(1);
        let mut deep = MaximizingAgent::new(PlayerId::new(0), endgame_utility_eval());

        shallow.pick_action(&Pile::new(6)).unwrap();
        deep.pick_action(&Pile::new(6)).unwrap();

        assert!(shallow.counters().nodes < deep.counters().nodes);
    }

    #[test]
    fn test_wrong_turn_is_misconfiguration() {
        let mut agent = MaximizingAgent::new(PlayerId::new(1), endgame_utility_eval());
        let err = agent.pick_action(&Pile::new(3)).unwrap_err();

        assert!(matches!(
            err,
            crate::core::EngineError::Misconfiguration(_)
        ));
    }

    #[test]
    fn test_observer_stop_returns_none() {
        let mut agent = MaximizingAgent::new(PlayerId::new(0), endgame_utility_eval())
            .with_observer(Box::new(|_, _, _| true));

        assert!(agent.pick_action(&Pile::new(4)).unwrap().is_none());
    }
}

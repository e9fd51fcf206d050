//! Alpha-beta pruning, plain and with transposition-table move ordering.
//!
//! Pruning is a pure performance optimization: for any depth limit and
//! evaluation function, both agents here return exactly the same action
//! and value as [`MinimaxAgent`](super::minimax::MinimaxAgent), while
//! skipping subtrees that cannot affect the choice. On a requested early
//! termination mid-search, the best action and value found so far are
//! returned instead of no result.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{PlayerId, Result};
use crate::game::{EvalFn, GameNode, GameState, ObserverFn};

use super::agent::{Decision, GameAgent};
use super::context::{SearchContext, Step};
use super::deepening::DepthLimited;
use super::stats::NodeCounters;

/// Minimax with an admissible `[alpha, beta]` window.
pub struct AlphaBetaAgent<S: GameState> {
    ctx: SearchContext<S>,
}

impl<S: GameState> AlphaBetaAgent<S> {
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

    fn search_root(
        &mut self,
        root: &Arc<GameNode<S>>,
        best: &mut Option<Decision<S>>,
    ) -> Step<()> {
        self.ctx.visit()?;

        let mut alpha = f64::NEG_INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        for action in root.state.actions() {
            let child = root.child(&action)?;
            let (value, leaf) = self.value_of(&child, alpha, f64::INFINITY)?;
            if best.is_none() || value > best_value {
                best_value = value;
                *best = Some(Decision {
                    action,
                    value: Some(value),
                    leaf: Some(leaf),
                });
            }
            alpha = alpha.max(best_value);
        }

        if best.is_some() {
            self.ctx.observe(root, best_value, None)?;
        }
        Ok(())
    }

    fn value_of(
        &mut self,
        node: &Arc<GameNode<S>>,
        mut alpha: f64,
        mut beta: f64,
    ) -> Step<(f64, Arc<GameNode<S>>)> {
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
            let (value, leaf) = self.value_of(&child, alpha, beta)?;
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_leaf = leaf;
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_leaf = leaf;
                }
                beta = beta.min(best_value);
            }
            if beta <= alpha {
                trace!(alpha, beta, depth = node.depth, "pruned");
                self.ctx.observe(node, best_value, Some("pruned"))?;
                return Ok((best_value, best_leaf));
            }
        }

        self.ctx.observe(node, best_value, None)?;
        Ok((best_value, best_leaf))
    }
}

impl<S: GameState> GameAgent<S> for AlphaBetaAgent<S> {
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        self.ctx.check_turn(state)?;
        self.ctx.begin_search();

        let root = GameNode::root(state.clone());
        let mut best = None;
        let outcome = self.search_root(&root, &mut best);
        // Unlike the unpruned evaluators, a mid-search stop keeps the best
        // root decision found so far.
        let result = match self.ctx.resolve(outcome) {
            Ok(_) => Ok(best),
            Err(err) => Err(err),
        };

        self.ctx.end_search();
        result
    }
}

impl<S: GameState> DepthLimited<S> for AlphaBetaAgent<S> {
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

/// Alpha-beta with memoized best-move hints.
///
/// Keeps a transposition table mapping state features to the best action
/// found for that state so far. Before expanding a state's children, the
/// stored action (if any) is searched first; after the children complete
/// (even via a cutoff) the entry is updated. The table lives as long as
/// the agent, so move ordering improves over repeated searches on related
/// states, which is what makes this pair well with iterative deepening.
pub struct MoveOrderingAlphaBetaAgent<S: GameState> {
    ctx: SearchContext<S>,
    table: FxHashMap<S::Features, S::Action>,
}

impl<S: GameState> MoveOrderingAlphaBetaAgent<S> {
    /// Create an agent maximizing `eval_fn` for `player`, unbounded depth.
    pub fn new(player: PlayerId, eval_fn: EvalFn<S>) -> Self {
        Self {
            ctx: SearchContext::new(player, eval_fn),
            table: FxHashMap::default(),
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

    /// Number of states with a memoized best move.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Legal actions with the memoized best move (if any) hoisted first.
    fn ordered_actions(&self, node: &GameNode<S>) -> Vec<S::Action> {
        let mut actions = node.state.actions();
        if let Some(stored) = self.table.get(&node.features()) {
            if let Some(pos) = actions.iter().position(|a| a == stored) {
                actions.swap(0, pos);
            }
        }
        actions
    }

    fn search_root(
        &mut self,
        root: &Arc<GameNode<S>>,
        best: &mut Option<Decision<S>>,
    ) -> Step<()> {
        self.ctx.visit()?;

        let mut alpha = f64::NEG_INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        for action in self.ordered_actions(root) {
            let child = root.child(&action)?;
            let (value, leaf) = self.value_of(&child, alpha, f64::INFINITY)?;
            if best.is_none() || value > best_value {
                best_value = value;
                // Record the hint as soon as it is known, so a later stop
                // mid-search still leaves a usable entry.
                self.table.insert(root.features(), action.clone());
                *best = Some(Decision {
                    action,
                    value: Some(value),
                    leaf: Some(leaf),
                });
            }
            alpha = alpha.max(best_value);
        }

        if best.is_some() {
            self.ctx.observe(root, best_value, None)?;
        }
        Ok(())
    }

    fn value_of(
        &mut self,
        node: &Arc<GameNode<S>>,
        mut alpha: f64,
        mut beta: f64,
    ) -> Step<(f64, Arc<GameNode<S>>)> {
        self.ctx.visit()?;

        if node.state.is_terminal() || self.ctx.depth_exhausted(node.depth) {
            let value = self.ctx.evaluate(node);
            self.ctx.observe(node, value, None)?;
            return Ok((value, Arc::clone(node)));
        }

        let actions = self.ordered_actions(node);
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
        let mut best_action: Option<S::Action> = None;
        for action in actions {
            let child = node.child(&action)?;
            let (value, leaf) = self.value_of(&child, alpha, beta)?;
            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved {
                best_value = value;
                best_leaf = leaf;
                best_action = Some(action);
            }
            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            if beta <= alpha {
                trace!(alpha, beta, depth = node.depth, "pruned");
                if let Some(found) = best_action {
                    self.table.insert(node.features(), found);
                }
                self.ctx.observe(node, best_value, Some("pruned"))?;
                return Ok((best_value, best_leaf));
            }
        }

        if let Some(found) = best_action {
            self.table.insert(node.features(), found);
        }
        self.ctx.observe(node, best_value, None)?;
        Ok((best_value, best_leaf))
    }
}

impl<S: GameState> GameAgent<S> for MoveOrderingAlphaBetaAgent<S> {
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        self.ctx.check_turn(state)?;
        self.ctx.begin_search();

        let root = GameNode::root(state.clone());
        let mut best = None;
        let outcome = self.search_root(&root, &mut best);
        let result = match self.ctx.resolve(outcome) {
            Ok(_) => Ok(best),
            Err(err) => Err(err),
        };

        self.ctx.end_search();
        result
    }
}

impl<S: GameState> DepthLimited<S> for MoveOrderingAlphaBetaAgent<S> {
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

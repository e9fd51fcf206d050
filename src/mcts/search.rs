//! The Monte Carlo tree search agent.
//!
//! An anytime planner: repeated rollouts, each made of UCT-guided
//! selection, one-child expansion, a playout to a terminal state, and
//! backpropagation of the terminal rewards along the explored path. Runs
//! until the wall-clock budget or rollout cap is exhausted (re-checked
//! every rollout, so the budget is overrun by at most one rollout) or the
//! observer requests termination, then returns the most-visited root
//! move.

use std::time::Instant;

use tracing::debug;

use crate::adversarial::{Decision, GameAgent};
use crate::core::{EngineError, PlayerMap, Result, SearchRng};
use crate::game::{silent_observer, GameNode, GameState, ObserverFn};

use super::config::MctsConfig;
use super::node::{Edge, MctsNode, NodeId};
use super::policy::{no_move_rewards, terminal_rewards, RandomRollout, RolloutPolicy};
use super::stats::MctsStats;
use super::tree::MctsTree;

/// Monte Carlo tree search over the [`GameState`] contract.
///
/// Owns its tree, RNG, rollout policy, and counters. The tree is rebuilt
/// per search; the rollout counter also accumulates over the agent's
/// lifetime.
pub struct MctsAgent<S: GameState> {
    config: MctsConfig,
    tree: MctsTree<S::Action>,
    rng: SearchRng,
    rollout: Box<dyn RolloutPolicy<S>>,
    observer: ObserverFn<S>,
    stats: MctsStats,
    lifetime_rollouts: u64,
}

impl<S: GameState> MctsAgent<S> {
    /// Create an agent with the given configuration.
    ///
    /// Rejects a configuration with neither a time budget nor a rollout
    /// cap: such a search could never end on its own.
    pub fn new(config: MctsConfig) -> Result<Self> {
        if config.time_budget.is_none() && config.max_rollouts.is_none() {
            return Err(EngineError::Misconfiguration(
                "MCTS needs a time budget or a rollout cap".into(),
            ));
        }

        let rng = SearchRng::new(config.seed);
        Ok(Self {
            config,
            tree: MctsTree::new(crate::core::PlayerId::new(0), 2),
            rng,
            rollout: Box::new(RandomRollout),
            observer: silent_observer(),
            stats: MctsStats::default(),
            lifetime_rollouts: 0,
        })
    }

    /// Replace the rollout policy.
    #[must_use]
    pub fn with_rollout_policy<P: RolloutPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.rollout = Box::new(policy);
        self
    }

    /// Attach an observation callback, invoked once per rollout with the
    /// searched root and its current value estimate.
    #[must_use]
    pub fn with_observer(mut self, observer: ObserverFn<S>) -> Self {
        self.observer = observer;
        self
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &MctsStats {
        &self.stats
    }

    /// Rollouts accumulated over this agent's lifetime.
    #[must_use]
    pub fn lifetime_rollouts(&self) -> u64 {
        self.lifetime_rollouts
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// One rollout: select, expand, play out, backpropagate.
    fn rollout_once(&mut self, root_state: &S) -> Result<()> {
        let mut path: Vec<(NodeId, usize)> = Vec::new();
        let mut current = self.tree.root();
        let mut state = root_state.clone();

        let rewards = loop {
            if let Some(rewards) = self.tree.get(current).terminal.clone() {
                break rewards;
            }
            if self.tree.get(current).edges.is_empty() {
                // Non-terminal dead end: the actor to move forfeits.
                break no_move_rewards(&state);
            }

            if let Some(edge_idx) = self.pick_unexpanded(current) {
                // === EXPANSION ===
                path.push((current, edge_idx));
                let action = self.tree.get(current).edges[edge_idx].action.clone();
                state = state.apply(&action)?;
                let child = self.expand_child(current, edge_idx, &state);
                current = child;

                if let Some(rewards) = self.tree.get(child).terminal.clone() {
                    break rewards;
                }
                // === PLAYOUT ===
                let mut sim_rng = self.rng.fork();
                break self.rollout.rollout(&state, &mut sim_rng)?;
            }

            // === SELECTION ===
            let edge_idx = self.select_uct(current);
            path.push((current, edge_idx));
            let action = self.tree.get(current).edges[edge_idx].action.clone();
            state = state.apply(&action)?;
            current = self.tree.get(current).edges[edge_idx].child;
        };

        self.backpropagate(&path, current, &rewards);
        Ok(())
    }

    /// Fill a node's edges from the state's legal moves, or mark it
    /// terminal.
    fn expand_edges(&mut self, node_id: NodeId, state: &S) {
        if state.is_terminal() {
            self.tree.get_mut(node_id).terminal = Some(terminal_rewards(state));
            return;
        }

        let actions = state.actions();
        let player_count = self.tree.player_count();
        let node = self.tree.get_mut(node_id);
        for action in actions {
            node.edges.push(Edge::new(action, player_count));
        }

        self.stats.nodes_expanded += 1;
    }

    /// Allocate and initialize the child behind an edge.
    fn expand_child(&mut self, parent_id: NodeId, edge_idx: usize, state: &S) -> NodeId {
        let depth = self.tree.get(parent_id).depth + 1;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }

        let child = MctsNode::new(parent_id, edge_idx as u16, state.current_player(), depth);
        let child_id = self.tree.alloc(child);
        self.tree.get_mut(parent_id).edges[edge_idx].child = child_id;

        self.expand_edges(child_id, state);
        child_id
    }

    /// A random unexpanded edge of a node, if any.
    fn pick_unexpanded(&mut self, node_id: NodeId) -> Option<usize> {
        let unexpanded: Vec<usize> = self.tree.get(node_id).unexpanded_edges().collect();
        match unexpanded.len() {
            0 => None,
            1 => Some(unexpanded[0]),
            n => Some(unexpanded[self.rng.gen_range_usize(0..n)]),
        }
    }

    /// UCT: mean reward for the node's actor plus the exploration bonus.
    fn select_uct(&self, node_id: NodeId) -> usize {
        let node = self.tree.get(node_id);
        let ln_parent = f64::from(node.visits.max(1)).ln();

        node.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let exploitation = edge.mean_reward(node.to_move);
                let exploration = if edge.visits == 0 {
                    f64::INFINITY
                } else {
                    self.config.exploration_bias * (ln_parent / f64::from(edge.visits)).sqrt()
                };
                (i, exploitation + exploration)
            })
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(0, |(i, _)| i)
    }

    /// Add rewards to every node and edge on the explored path.
    fn backpropagate(&mut self, path: &[(NodeId, usize)], leaf: NodeId, rewards: &PlayerMap<f64>) {
        self.tree.get_mut(leaf).visits += 1;

        for &(node_id, edge_idx) in path.iter().rev() {
            let node = self.tree.get_mut(node_id);
            node.visits += 1;

            let edge = &mut node.edges[edge_idx];
            edge.visits += 1;
            for (player, &reward) in rewards.iter() {
                edge.total_reward[player] += reward;
            }
        }
    }
}

impl<S: GameState> GameAgent<S> for MctsAgent<S> {
    fn pick_action(&mut self, state: &S) -> Result<Option<Decision<S>>> {
        let start = Instant::now();
        self.stats.reset();

        let player = state.current_player();
        self.tree.reset(player, state.player_count());
        self.expand_edges(self.tree.root(), state);

        if self.tree.root_node().terminal.is_some() || self.tree.root_node().edges.is_empty() {
            return Ok(None);
        }

        let deadline = self.config.time_budget.map(|budget| start + budget);
        let root_node = GameNode::root(state.clone());

        loop {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break;
            }
            if self
                .config
                .max_rollouts
                .is_some_and(|cap| self.stats.rollouts >= cap)
            {
                break;
            }
            if self.tree.len() >= self.config.max_nodes {
                break;
            }

            self.rollout_once(state)?;
            self.stats.rollouts += 1;

            let estimate = self
                .tree
                .root_node()
                .best_edge_by_visits()
                .map_or(0.0, |edge| edge.mean_reward(player));
            if (self.observer)(&root_node, estimate, None) {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.lifetime_rollouts += u64::from(self.stats.rollouts);
        debug!(
            rollouts = self.stats.rollouts,
            nodes = self.tree.len(),
            max_depth = self.stats.max_depth,
            "MCTS search finished"
        );

        Ok(self.tree.root_node().best_edge_by_visits().map(|edge| {
            Decision {
                action: edge.action.clone(),
                value: Some(edge.mean_reward(player)),
                leaf: None,
            }
        }))
    }
}

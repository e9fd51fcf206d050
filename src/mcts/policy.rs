//! Rollout (playout) policies for Monte Carlo tree search.

use crate::core::{PlayerMap, Result, SearchRng};
use crate::game::GameState;

/// Policy for playing out a state to the end of the game.
///
/// Returns the terminal rewards per actor. The default is a uniformly
/// random playout; callers may supply anything smarter.
pub trait RolloutPolicy<S: GameState>: Send + Sync {
    /// Play out from `state` to a terminal state.
    fn rollout(&self, state: &S, rng: &mut SearchRng) -> Result<PlayerMap<f64>>;
}

/// Uniformly random playout.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl<S: GameState> RolloutPolicy<S> for RandomRollout {
    fn rollout(&self, state: &S, rng: &mut SearchRng) -> Result<PlayerMap<f64>> {
        let mut current = state.clone();

        loop {
            if current.is_terminal() {
                return Ok(terminal_rewards(&current));
            }

            let actions = current.actions();
            match rng.choose(&actions) {
                Some(action) => current = current.apply(action)?,
                None => return Ok(no_move_rewards(&current)),
            }
        }
    }
}

/// Per-actor rewards of a terminal state.
pub(crate) fn terminal_rewards<S: GameState>(state: &S) -> PlayerMap<f64> {
    PlayerMap::new(state.player_count(), |player| {
        state.utility(player).unwrap_or(0.0)
    })
}

/// Rewards for a non-terminal state with no legal moves: the actor to
/// move forfeits.
pub(crate) fn no_move_rewards<S: GameState>(state: &S) -> PlayerMap<f64> {
    let stuck = state.current_player();
    PlayerMap::new(state.player_count(), |player| {
        if player == stuck {
            -1.0
        } else {
            1.0
        }
    })
}

//! Tiny games used by the unit tests in this module tree.

use crate::core::{EngineError, PlayerId, Result};
use crate::game::GameState;

/// One-pile take-away: take 1 or 2 stones, taking the last stone wins.
///
/// With best play the mover loses exactly when the pile is a multiple of
/// 3, which makes expected values easy to assert.
#[derive(Clone, Debug)]
pub(crate) struct Pile {
    pub stones: u32,
    pub to_move: PlayerId,
}

impl Pile {
    pub fn new(stones: u32) -> Self {
        Self {
            stones,
            to_move: PlayerId::new(0),
        }
    }
}

impl GameState for Pile {
    type Action = u32;
    type Features = (u32, PlayerId);

    fn features(&self) -> Self::Features {
        (self.stones, self.to_move)
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.stones == 0
    }

    fn utility(&self, player: PlayerId) -> Option<f64> {
        if !self.is_terminal() {
            return None;
        }
        // The previous player took the last stone and won.
        Some(if player == self.to_move { -1.0 } else { 1.0 })
    }

    fn actions(&self) -> Vec<u32> {
        (1..=2).filter(|&n| n <= self.stones).collect()
    }

    fn apply(&self, action: &u32) -> Result<Self> {
        if !self.is_legal(action) {
            return Err(EngineError::illegal_action(action));
        }
        Ok(Self {
            stones: self.stones - action,
            to_move: self.to_move.next(2),
        })
    }
}

//! Concrete problems used by the integration tests.
//!
//! Problem definitions are deliberately not part of the crate: these
//! implementations exist to exercise the engines end to end.

#![allow(dead_code)]

use std::collections::BTreeSet;

use statespace::core::{EngineError, PlayerId, Result};
use statespace::game::GameState;
use statespace::problem::{HeuristicFn, SearchState};
use std::sync::Arc;

// =============================================================================
// Grid cleaning world (goal search)
// =============================================================================

/// Compass moves, in the deterministic order `actions` reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    North,
    East,
    South,
    West,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::North, Move::East, Move::South, Move::West];

    fn delta(self) -> (i8, i8) {
        match self {
            Move::North => (0, -1),
            Move::East => (1, 0),
            Move::South => (0, 1),
            Move::West => (-1, 0),
        }
    }
}

/// A robot cleaning dirty cells on a small grid with optional walls.
/// Entering a dirty cell cleans it; the goal is a fully clean grid.
#[derive(Clone, Debug)]
pub struct GridWorld {
    width: i8,
    height: i8,
    position: (i8, i8),
    dirty: BTreeSet<(i8, i8)>,
    walls: BTreeSet<(i8, i8)>,
}

impl GridWorld {
    pub fn new(width: i8, height: i8, start: (i8, i8), dirty: &[(i8, i8)]) -> Self {
        let mut dirty: BTreeSet<(i8, i8)> = dirty.iter().copied().collect();
        // The robot cleans the cell it starts on.
        dirty.remove(&start);
        Self {
            width,
            height,
            position: start,
            dirty,
            walls: BTreeSet::new(),
        }
    }

    pub fn with_walls(mut self, walls: &[(i8, i8)]) -> Self {
        self.walls = walls.iter().copied().collect();
        self
    }

    pub fn position(&self) -> (i8, i8) {
        self.position
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    pub fn dirty_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.dirty.iter().copied()
    }

    fn passable(&self, (x, y): (i8, i8)) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && !self.walls.contains(&(x, y))
    }
}

impl SearchState for GridWorld {
    type Action = Move;
    type Features = ((i8, i8), Vec<(i8, i8)>);

    fn features(&self) -> Self::Features {
        (self.position, self.dirty.iter().copied().collect())
    }

    fn is_goal(&self) -> bool {
        self.dirty.is_empty()
    }

    fn actions(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| {
                let (dx, dy) = m.delta();
                self.passable((self.position.0 + dx, self.position.1 + dy))
            })
            .collect()
    }

    fn apply(&self, action: &Move) -> Result<(Self, f64)> {
        let (dx, dy) = action.delta();
        let target = (self.position.0 + dx, self.position.1 + dy);
        if !self.passable(target) {
            return Err(EngineError::illegal_action(action));
        }

        let mut next = self.clone();
        next.position = target;
        next.dirty.remove(&target);
        Ok((next, 1.0))
    }
}

/// Remaining dirty cells: admissible for unit-cost moves, since each move
/// cleans at most one cell.
pub fn dirty_count_heuristic() -> HeuristicFn<GridWorld> {
    Arc::new(|node| node.state.dirty_count() as f64)
}

/// Walking distance to the nearest dirty cell plus the cells beyond it.
/// Admissible, and strictly decreasing as the robot closes in, which is
/// what the anytime best-so-far tracker needs to show progress.
pub fn nearest_dirty_heuristic() -> HeuristicFn<GridWorld> {
    Arc::new(|node| {
        let state = &node.state;
        let (x, y) = state.position();
        let nearest = state
            .dirty_cells()
            .map(|(dx, dy)| ((dx - x).abs() + (dy - y).abs()) as f64)
            .fold(f64::INFINITY, f64::min);
        if nearest.is_infinite() {
            0.0
        } else {
            nearest + (state.dirty_count() as f64 - 1.0)
        }
    })
}

// =============================================================================
// Misere Nim (game search)
// =============================================================================

/// Taking `stones` stones from pile `pile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NimMove {
    pub stones: u32,
    pub pile: usize,
}

/// Multi-pile Nim under the misere rule: whoever takes the last stone
/// loses.
#[derive(Clone, Debug)]
pub struct Nim {
    piles: Vec<u32>,
    to_move: PlayerId,
}

impl Nim {
    pub fn new(piles: &[u32]) -> Self {
        Self {
            piles: piles.to_vec(),
            to_move: PlayerId::new(0),
        }
    }

    pub fn piles(&self) -> &[u32] {
        &self.piles
    }
}

impl GameState for Nim {
    type Action = NimMove;
    type Features = (Vec<u32>, PlayerId);

    fn features(&self) -> Self::Features {
        (self.piles.clone(), self.to_move)
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&p| p == 0)
    }

    fn utility(&self, player: PlayerId) -> Option<f64> {
        if !self.is_terminal() {
            return None;
        }
        // Misere: the previous player took the last stone and lost, so
        // the actor now to move won.
        Some(if player == self.to_move { 1.0 } else { -1.0 })
    }

    fn actions(&self) -> Vec<NimMove> {
        let mut actions = Vec::new();
        for (pile, &stones) in self.piles.iter().enumerate() {
            for take in 1..=stones {
                actions.push(NimMove { stones: take, pile });
            }
        }
        actions
    }

    fn apply(&self, action: &NimMove) -> Result<Self> {
        if !self.is_legal(action) {
            return Err(EngineError::illegal_action(action));
        }
        let mut next = self.clone();
        next.piles[action.pile] -= action.stones;
        next.to_move = self.to_move.next(2);
        Ok(next)
    }
}

// =============================================================================
// Tic-tac-toe (game search)
// =============================================================================

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 tic-tac-toe. Moves are cell indices 0..9, row-major.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    cells: [Option<PlayerId>; 9],
    to_move: PlayerId,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            to_move: PlayerId::new(0),
        }
    }

    /// A mid-game position: `marks` assigns cells, `to_move` plays next.
    pub fn with_marks(marks: &[(usize, PlayerId)], to_move: PlayerId) -> Self {
        let mut cells = [None; 9];
        for &(cell, player) in marks {
            cells[cell] = Some(player);
        }
        Self { cells, to_move }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        for line in LINES {
            if let Some(player) = self.cells[line[0]] {
                if line.iter().all(|&c| self.cells[c] == Some(player)) {
                    return Some(player);
                }
            }
        }
        None
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl GameState for TicTacToe {
    type Action = usize;
    type Features = ([Option<PlayerId>; 9], PlayerId);

    fn features(&self) -> Self::Features {
        (self.cells, self.to_move)
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn utility(&self, player: PlayerId) -> Option<f64> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        })
    }

    fn actions(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&c| self.cells[c].is_none()).collect()
    }

    fn apply(&self, action: &usize) -> Result<Self> {
        if !self.is_legal(action) {
            return Err(EngineError::illegal_action(action));
        }
        let mut next = self.clone();
        next.cells[*action] = Some(self.to_move);
        next.to_move = self.to_move.next(2);
        Ok(next)
    }
}

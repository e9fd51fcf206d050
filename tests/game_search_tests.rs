//! Adversarial-search integration tests on misere Nim and tic-tac-toe.

mod common;

use std::time::Duration;

use common::{Nim, NimMove, TicTacToe};

use statespace::adversarial::{
    AlphaBetaAgent, ExpectimaxAgent, GameAgent, IterativeDeepening, MaximizingAgent, MinimaxAgent,
    MoveOrderingAlphaBetaAgent, RandomAgent, ReflexAgent,
};
use statespace::core::PlayerId;
use statespace::game::{endgame_utility_eval, fast_win_utility_eval, GameState};

fn p0() -> PlayerId {
    PlayerId::new(0)
}

// =============================================================================
// Scenario: two-pile misere Nim (1, 1), player 0 to move
// =============================================================================

#[test]
fn test_minimax_wins_two_single_stone_piles() {
    // Player 0 must take one stone; player 1 then takes the last stone
    // and loses under the misere rule.
    let mut agent = MinimaxAgent::new(p0(), endgame_utility_eval());
    let decision = agent.pick_action(&Nim::new(&[1, 1])).unwrap().unwrap();

    assert_eq!(decision.value, Some(1.0));

    // The expected line of play really ends in a player-0 win.
    let leaf = decision.leaf.unwrap();
    assert!(leaf.state.is_terminal());
    assert_eq!(leaf.state.utility(p0()), Some(1.0));
}

#[test]
fn test_minimax_finds_the_only_winning_take() {
    // (1, 2) is winning for the mover: take both stones of the second
    // pile, leaving the single forced stone to the opponent.
    let mut agent = MinimaxAgent::new(p0(), endgame_utility_eval());
    let decision = agent.pick_action(&Nim::new(&[1, 2])).unwrap().unwrap();

    assert_eq!(decision.action, NimMove { stones: 2, pile: 1 });
    assert_eq!(decision.value, Some(1.0));
}

// =============================================================================
// Scenario: tic-tac-toe one move from a win
// =============================================================================

/// Player 0 owns cells 0 and 1, player 1 owns 3 and 4; cell 2 completes
/// the top row for player 0.
fn one_move_from_win() -> TicTacToe {
    TicTacToe::with_marks(&[(0, p0()), (1, p0()), (3, PlayerId::new(1)), (4, PlayerId::new(1))], p0())
}

#[test]
fn test_minimax_takes_the_winning_cell() {
    let mut agent = MinimaxAgent::new(p0(), endgame_utility_eval());
    let decision = agent.pick_action(&one_move_from_win()).unwrap().unwrap();

    assert_eq!(decision.action, 2);
    assert_eq!(decision.value, Some(1.0));
}

#[test]
fn test_alphabeta_takes_the_winning_cell_with_fewer_evals() {
    let mut minimax = MinimaxAgent::new(p0(), endgame_utility_eval());
    let mut alphabeta = AlphaBetaAgent::new(p0(), endgame_utility_eval());

    let expected = minimax.pick_action(&one_move_from_win()).unwrap().unwrap();
    let pruned = alphabeta.pick_action(&one_move_from_win()).unwrap().unwrap();

    assert_eq!(pruned.action, expected.action);
    assert_eq!(pruned.action, 2);
    assert_eq!(pruned.value, Some(1.0));

    // Branching factor at the root exceeds 1, so pruning must pay off.
    assert!(alphabeta.counters().evals < minimax.counters().evals);
}

// =============================================================================
// Alpha-beta equals minimax everywhere
// =============================================================================

#[test]
fn test_alphabeta_matches_minimax_across_positions_and_depths() {
    let positions = vec![
        Nim::new(&[1, 1]),
        Nim::new(&[2, 1]),
        Nim::new(&[3, 2]),
        Nim::new(&[2, 2, 1]),
    ];

    for depth in [1, 2, 3, 6] {
        for position in &positions {
            let mut minimax =
                MinimaxAgent::new(p0(), endgame_utility_eval()).with_depth_limit(depth);
            let mut alphabeta =
                AlphaBetaAgent::new(p0(), endgame_utility_eval()).with_depth_limit(depth);

            let expected = minimax.pick_action(position).unwrap().unwrap();
            let pruned = alphabeta.pick_action(position).unwrap().unwrap();

            assert_eq!(
                pruned.action, expected.action,
                "action diverged at depth {depth} on {:?}",
                position.piles()
            );
            assert_eq!(
                pruned.value, expected.value,
                "value diverged at depth {depth} on {:?}",
                position.piles()
            );
            assert!(alphabeta.counters().nodes <= minimax.counters().nodes);
        }
    }
}

// =============================================================================
// Opponent models
// =============================================================================

#[test]
fn test_maximizing_is_optimistic_about_lost_positions() {
    // (2, 2) is lost for the mover under the misere rule with best play,
    // but the optimistic model still expects to win.
    let mut maximizing = MaximizingAgent::new(p0(), endgame_utility_eval());
    let mut minimax = MinimaxAgent::new(p0(), endgame_utility_eval());

    let optimistic = maximizing.pick_action(&Nim::new(&[2, 2])).unwrap().unwrap();
    let realistic = minimax.pick_action(&Nim::new(&[2, 2])).unwrap().unwrap();

    assert_eq!(optimistic.value, Some(1.0));
    assert_eq!(realistic.value, Some(-1.0));
}

#[test]
fn test_expectimax_sits_between_the_extremes() {
    let mut expectimax = ExpectimaxAgent::new(p0(), endgame_utility_eval());
    let decision = expectimax.pick_action(&Nim::new(&[2, 2])).unwrap().unwrap();

    let value = decision.value.unwrap();
    assert!(value > -1.0, "a random opponent sometimes blunders");
    assert!(value < 1.0, "the win is not guaranteed either");
    assert!(decision.leaf.is_none());
}

#[test]
fn test_models_agree_on_forced_wins() {
    let state = one_move_from_win();

    let mut maximizing = MaximizingAgent::new(p0(), endgame_utility_eval());
    let mut expectimax = ExpectimaxAgent::new(p0(), endgame_utility_eval());

    assert_eq!(maximizing.pick_action(&state).unwrap().unwrap().action, 2);
    assert_eq!(expectimax.pick_action(&state).unwrap().unwrap().action, 2);
}

// =============================================================================
// Depth limits and evaluation functions
// =============================================================================

#[test]
fn test_depth_limited_search_uses_evaluation_function() {
    // At depth 1 nothing is terminal yet on a big pile, so the zero
    // heuristic part of the endgame evaluation decides.
    let mut agent = MinimaxAgent::new(p0(), endgame_utility_eval()).with_depth_limit(1);
    let decision = agent.pick_action(&Nim::new(&[5, 5])).unwrap().unwrap();

    assert_eq!(decision.value, Some(0.0));
}

#[test]
fn test_fast_win_eval_prefers_quicker_wins() {
    // Both 2 and 6 complete a line eventually, but cell 2 wins now.
    let mut agent = MinimaxAgent::new(p0(), fast_win_utility_eval());
    let decision = agent.pick_action(&one_move_from_win()).unwrap().unwrap();

    assert_eq!(decision.action, 2);
    // Depth-1 win scales by 1 + 1/2.
    assert_eq!(decision.value, Some(1.5));
}

// =============================================================================
// Iterative deepening
// =============================================================================

#[test]
fn test_iterative_deepening_history_per_depth() {
    let inner = MinimaxAgent::new(p0(), endgame_utility_eval());
    let mut agent = IterativeDeepening::new(inner, Some(3), None).unwrap();

    let history = agent.pick_action_iterative(&Nim::new(&[1, 1])).unwrap();

    assert!(!history.is_empty());
    // Pass i ran with depth limit i + 1, so its expected leaf can never
    // sit deeper than that.
    for (i, decision) in history.iter().enumerate() {
        let leaf = decision.leaf.as_ref().unwrap();
        assert!(leaf.depth <= i as u32 + 1);
    }
}

#[test]
fn test_iterative_deepening_plateau_stops() {
    let inner = MinimaxAgent::new(p0(), endgame_utility_eval());
    let mut agent = IterativeDeepening::new(inner, Some(2), None).unwrap();

    let history = agent.pick_action_iterative(&Nim::new(&[1, 1])).unwrap();

    // The only sensible move repeats immediately: exactly two passes.
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, history[1].action);
}

#[test]
fn test_iterative_deepening_respects_time_budget() {
    let inner = MinimaxAgent::new(p0(), endgame_utility_eval());
    let mut agent =
        IterativeDeepening::new(inner, None, Some(Duration::from_millis(50))).unwrap();

    let started = std::time::Instant::now();
    let _history = agent.pick_action_iterative(&Nim::new(&[4, 4, 4])).unwrap();

    // Budget plus at most one node visit of overrun, generously bounded.
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_iterative_deepening_with_move_ordering() {
    let inner = MoveOrderingAlphaBetaAgent::new(p0(), endgame_utility_eval());
    let mut agent = IterativeDeepening::new(inner, Some(2), None).unwrap();

    let history = agent.pick_action_iterative(&Nim::new(&[2, 2])).unwrap();

    assert!(!history.is_empty());
    // Shallower passes seeded the transposition table.
    assert!(agent.inner().table_len() > 0);
}

// =============================================================================
// Move ordering
// =============================================================================

#[test]
fn test_move_ordering_reuses_hints_across_searches() {
    let mut plain = AlphaBetaAgent::new(p0(), endgame_utility_eval());
    let mut ordered = MoveOrderingAlphaBetaAgent::new(p0(), endgame_utility_eval());

    let state = Nim::new(&[3, 3]);

    let expected = plain.pick_action(&state).unwrap().unwrap();
    // Warm up the table, then search again.
    ordered.pick_action(&state).unwrap();
    let warm_nodes_before = ordered.counters().nodes;
    let repeat = ordered.pick_action(&state).unwrap().unwrap();

    assert_eq!(repeat.action, expected.action);
    assert_eq!(repeat.value, expected.value);
    assert!(ordered.counters().nodes <= warm_nodes_before);
}

// =============================================================================
// Baseline agents
// =============================================================================

#[test]
fn test_random_agent_is_legal_and_seeded() {
    let state = TicTacToe::new();

    let mut first = RandomAgent::new(99);
    let mut second = RandomAgent::new(99);

    let a = GameAgent::<TicTacToe>::pick_action(&mut first, &state)
        .unwrap()
        .unwrap();
    let b = GameAgent::<TicTacToe>::pick_action(&mut second, &state)
        .unwrap()
        .unwrap();

    assert!(state.is_legal(&a.action));
    assert_eq!(a.action, b.action);
}

#[test]
fn test_reflex_agent_takes_immediate_win() {
    let mut agent = ReflexAgent::new(p0(), endgame_utility_eval());
    let decision = agent.pick_action(&one_move_from_win()).unwrap().unwrap();

    assert_eq!(decision.action, 2);
    assert_eq!(decision.value, Some(1.0));
}

// =============================================================================
// Full-game sanity: minimax never loses tic-tac-toe to a random agent
// =============================================================================

#[test]
fn test_minimax_never_loses_tictactoe_as_second_player() {
    for seed in 0..5 {
        let mut random = RandomAgent::new(seed);
        let mut minimax = MinimaxAgent::new(PlayerId::new(1), endgame_utility_eval());

        let mut state = TicTacToe::new();
        while !state.is_terminal() {
            let decision = if state.current_player() == p0() {
                GameAgent::<TicTacToe>::pick_action(&mut random, &state)
            } else {
                minimax.pick_action(&state)
            }
            .unwrap()
            .unwrap();
            state = state.apply(&decision.action).unwrap();
        }

        // Player 1 (minimax) won or tied.
        assert!(state.utility(PlayerId::new(1)).unwrap() >= 0.0, "seed {seed}");
    }
}

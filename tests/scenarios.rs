//! End-to-end decision scenarios for the engine boundary:
//! a driver-shaped caller feeding `GameState` snapshots to `Engine`.

use connectk::{DecisionKind, Engine, GameConfig, GameState, Pos, Stone};

fn state_from_moves(config: GameConfig, moves: &[(u8, u8)]) -> GameState {
    let mut state = GameState::new(config).unwrap();
    for &(r, c) in moves {
        state.apply_move(Pos::new(r, c)).unwrap();
    }
    state
}

fn base_config() -> GameConfig {
    GameConfig {
        board_size: 15,
        win_length: 5,
        max_depth: 2,
        seed: Some(7),
        ..GameConfig::default()
    }
}

#[test]
fn empty_board_opens_at_center() {
    // Computer is the second mover, but asked to move on an empty board
    // it still bootstraps to the center cell.
    let config = base_config();
    assert_eq!(config.computer, Stone::White);
    assert_eq!(config.first_mover, Stone::Black);

    let state = GameState::new(config.clone()).unwrap();
    let mut engine = Engine::new(config).unwrap();

    let result = engine.next_move_with_stats(&state);
    assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    assert_eq!(result.kind, DecisionKind::Opening);
}

/// White (the computer) has four aligned stones with a single empty
/// completion at (7, 8): Black holds the other end.
fn four_with_one_completion(config: GameConfig) -> GameState {
    let state = state_from_moves(
        config,
        &[
            (7, 3), (7, 4),
            (0, 0), (7, 5),
            (0, 2), (7, 6),
            (0, 4), (7, 7),
            (0, 14),
        ],
    );
    assert_eq!(state.current_turn(), Stone::White);
    state
}

#[test]
fn completes_own_four_with_heuristics_enabled() {
    let config = base_config();
    let state = four_with_one_completion(config.clone());
    let mut engine = Engine::new(config).unwrap();

    let result = engine.next_move_with_stats(&state);
    assert_eq!(result.best_move, Some(Pos::new(7, 8)));
    assert_eq!(result.kind, DecisionKind::ImmediateWin);
}

#[test]
fn completes_own_four_with_heuristics_disabled() {
    // The win is taken regardless of heuristic settings.
    let config = GameConfig {
        high_impact_enabled: false,
        ..base_config()
    };
    let state = four_with_one_completion(config.clone());
    let mut engine = Engine::new(config).unwrap();

    let result = engine.next_move_with_stats(&state);
    assert_eq!(result.best_move, Some(Pos::new(7, 8)));
    assert_eq!(result.kind, DecisionKind::ImmediateWin);
}

#[test]
fn blocks_opponent_four_despite_own_open_three() {
    // Black is one move from winning; White has an open three whose
    // high-impact score would otherwise look attractive. Blocking wins
    // the priority: step 3 runs before the high-impact comparison.
    let config = base_config();
    let state = state_from_moves(
        config.clone(),
        &[
            (7, 4), (9, 4),
            (7, 5), (9, 5),
            (7, 6), (9, 6),
            (7, 7),
        ],
    );
    assert_eq!(state.current_turn(), Stone::White);

    let mut engine = Engine::new(config).unwrap();
    let result = engine.next_move_with_stats(&state);
    assert_eq!(result.kind, DecisionKind::Block);
    // Row-major order picks the left end of Black's open four.
    assert_eq!(result.best_move, Some(Pos::new(7, 3)));
}

#[test]
fn engine_finishes_a_full_game() {
    // Engine vs engine on a small board: the game must reach a win or a
    // draw without an illegal move.
    let config = GameConfig {
        board_size: 9,
        win_length: 5,
        max_depth: 1,
        seed: Some(3),
        ..GameConfig::default()
    };
    let mut game = GameState::new(config.clone()).unwrap();
    let mut engine = Engine::new(config).unwrap();

    while !game.is_over() {
        let pos = engine.next_move(&game).expect("playable board");
        game.apply_move(pos).expect("engine move is legal");
    }

    assert!(game.outcome().is_some());
    assert!(game.move_count() <= 81);
}

#[test]
fn applied_moves_round_trip_through_state() {
    // The driver applies the engine's move to the live state; the engine
    // never mutates the snapshot it was given.
    let config = base_config();
    let mut game = GameState::new(config.clone()).unwrap();
    let mut engine = Engine::new(config).unwrap();

    for _ in 0..6 {
        let before = game.board().stone_count();
        let pos = engine.next_move(&game).unwrap();
        assert_eq!(game.board().stone_count(), before);
        game.apply_move(pos).unwrap();
        assert_eq!(game.board().stone_count(), before + 1);
    }
    assert_eq!(game.move_count(), 6);
}

//! Tests for minimax move selection against live sessions.

use oxo_engine::{
    choose_for, choose_move, choose_scored_move, Board, GameSession, ScoredMove, SearchLevel,
    Side, Snapshot, WIN_SCORE,
};

/// Plays a whole game with each side using its own search level.
fn self_play(x_level: SearchLevel, o_level: SearchLevel) -> GameSession {
    let mut game = GameSession::new();
    while !game.is_over() {
        let side = game.current_side();
        let level = if side == Side::X { x_level } else { o_level };
        let index = choose_for(&game, level, side).expect("Game in progress has a move");
        game.make_move(index).expect("Selector returns legal moves");
    }
    game
}

#[test]
fn test_exhaustive_empty_board_scores_a_draw() {
    // Every opening draws under perfect play, so the first candidate keeps the tie
    let chosen =
        choose_scored_move(Snapshot::from(Board::new()), SearchLevel::Exhaustive, Side::X)
            .unwrap();
    assert_eq!(chosen, ScoredMove::new(0, 0));
}

#[test]
fn test_shallow_empty_board_picks_center() {
    let game = GameSession::new();
    assert_eq!(choose_for(&game, SearchLevel::Shallow, Side::X), Some(4));
}

#[test]
fn test_completes_top_row() {
    let board: Board = "XX..O....".parse().unwrap();
    let chosen =
        choose_scored_move(Snapshot::new(board, Side::X), SearchLevel::Exhaustive, Side::X)
            .unwrap();
    assert_eq!(chosen.index, 2);
    assert_eq!(chosen.score, WIN_SCORE);
}

#[test]
fn test_shallow_also_takes_immediate_win() {
    let board: Board = "XX..O....".parse().unwrap();
    assert_eq!(
        choose_move(Snapshot::new(board, Side::X), SearchLevel::Shallow, Side::X),
        Some(2)
    );
}

#[test]
fn test_prefers_faster_win() {
    // X can win now at 2, or set up a fork; the immediate win scores highest
    let board: Board = "XX.OO....".parse().unwrap();
    let chosen =
        choose_scored_move(Snapshot::new(board, Side::X), SearchLevel::Exhaustive, Side::X)
            .unwrap();
    assert_eq!(chosen, ScoredMove::new(2, WIN_SCORE));
}

#[test]
fn test_no_move_for_finished_session() {
    let mut game = GameSession::new();
    for index in [0, 3, 1, 4, 2] {
        game.make_move(index).unwrap();
    }
    assert_eq!(choose_for(&game, SearchLevel::Exhaustive, Side::O), None);
}

#[test]
fn test_search_does_not_touch_session() {
    let mut game = GameSession::new();
    game.make_move(4).unwrap();
    let before = game.clone();
    let _ = choose_for(&game, SearchLevel::Exhaustive, Side::O);
    assert_eq!(game, before);
}

#[test]
fn test_exhaustive_self_play_draws() {
    let game = self_play(SearchLevel::Exhaustive, SearchLevel::Exhaustive);
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.move_count(), 9);
}

#[test]
fn test_exhaustive_never_loses_to_shallow() {
    let game = self_play(SearchLevel::Shallow, SearchLevel::Exhaustive);
    assert_ne!(game.winner(), Some(Side::X));

    let game = self_play(SearchLevel::Exhaustive, SearchLevel::Shallow);
    assert_ne!(game.winner(), Some(Side::O));
}

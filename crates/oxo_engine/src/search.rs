//! Minimax move selection.
//!
//! The selector is a pure function of a [`Snapshot`]: it copies the board
//! once and explores the game tree by placing, recursing and clearing marks on
//! that single buffer. Scores are relative to the selector side: a win is
//! worth `10 - depth`, a loss `depth - 10` and a draw `0`, so faster wins and
//! slower losses are preferred.

use crate::{rules, Board, GameSession, GameStatus, Side, Snapshot, CELL_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// Plies searched past the candidate move before [`SearchLevel::Shallow`]
/// falls back to the static heuristic.
pub const SHALLOW_PLY_LIMIT: i32 = 2;

/// Static heuristic weights: center 3, corners 2, edges 1.
const CELL_WEIGHTS: [i32; CELL_COUNT] = [
    2, 1, 2, //
    1, 3, 1, //
    2, 1, 2,
];

/// How deep the selector searches.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchLevel {
    /// Two plies past the candidate, then the static heuristic.
    Shallow,
    /// Full-depth search to the end of the game.
    #[default]
    Exhaustive,
}

impl SearchLevel {
    /// Depth at which the search stops and scores statically, if any.
    pub fn ply_limit(self) -> Option<i32> {
        match self {
            SearchLevel::Shallow => Some(SHALLOW_PLY_LIMIT),
            SearchLevel::Exhaustive => None,
        }
    }
}

/// A chosen cell and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ScoredMove {
    /// Cell index (0-8).
    pub index: usize,
    /// Score relative to the selector side.
    pub score: i32,
}

/// Chooses a cell for the side to move, optimizing for `selector`.
///
/// Returns `None` if the position is already won or drawn.
pub fn choose_move(snapshot: Snapshot, level: SearchLevel, selector: Side) -> Option<usize> {
    choose_scored_move(snapshot, level, selector).map(|chosen| chosen.index)
}

/// Chooses a cell for the side to move in a live session.
pub fn choose_for(game: &GameSession, level: SearchLevel, selector: Side) -> Option<usize> {
    choose_move(game.snapshot(), level, selector)
}

/// Chooses a cell and reports its score.
///
/// Candidates are tried in ascending index order and only a strictly greater
/// score replaces the current best, so ties go to the lowest index.
#[instrument(skip(snapshot), fields(board = %snapshot.board, to_move = %snapshot.to_move))]
pub fn choose_scored_move(
    snapshot: Snapshot,
    level: SearchLevel,
    selector: Side,
) -> Option<ScoredMove> {
    let Snapshot { board, to_move } = snapshot;
    if rules::evaluate(&board).is_over() {
        debug!("Position is terminal, no move to choose");
        return None;
    }

    let mut work = board;
    let mut best: Option<ScoredMove> = None;
    for index in board.empty_cells() {
        work.place(index, to_move);
        let score = minimax(&mut work, to_move.opponent(), selector, level, 0);
        work.clear(index);

        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredMove::new(index, score));
        }
    }

    if let Some(chosen) = best {
        debug!(index = chosen.index, score = chosen.score, "Move chosen");
    }
    best
}

/// Scores `board` with `to_move` about to play, `depth` plies past the candidate.
fn minimax(board: &mut Board, to_move: Side, selector: Side, level: SearchLevel, depth: i32) -> i32 {
    match rules::evaluate(board) {
        GameStatus::Won { winner, .. } if winner == selector => return WIN_SCORE - depth,
        GameStatus::Won { .. } => return depth - WIN_SCORE,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    if level.ply_limit().is_some_and(|limit| depth >= limit) {
        return heuristic(board, selector);
    }

    let maximizing = to_move == selector;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, to_move);
        let score = minimax(board, to_move.opponent(), selector, level, depth + 1);
        board.clear(index);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Weighted occupancy: positive for the selector's marks, negative for the opponent's.
pub fn heuristic(board: &Board, selector: Side) -> i32 {
    board
        .cells()
        .iter()
        .zip(CELL_WEIGHTS)
        .map(|(cell, weight)| match cell.side() {
            Some(side) if side == selector => weight,
            Some(_) => -weight,
            None => 0,
        })
        .sum()
}

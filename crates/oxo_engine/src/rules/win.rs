//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Side, WIN_LINES};

/// Finds the first completed line in table order.
///
/// Returns the winning side and the line's position in [`WIN_LINES`].
pub fn check_winner(board: &Board) -> Option<(Side, usize)> {
    WIN_LINES.iter().enumerate().find_map(|(line, &[a, b, c])| {
        let cell = board[a];
        match cell {
            Cell::Taken(side) if cell == board[b] && cell == board[c] => Some((side, line)),
            _ => None,
        }
    })
}

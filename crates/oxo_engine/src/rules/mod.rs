//! Game rules for tic-tac-toe.
//!
//! Pure functions over raw board cells. Both the session and the move
//! selector evaluate positions through [`evaluate`], so they agree on
//! which line wins and when a position is drawn.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;

use crate::{Board, GameStatus};

/// Evaluates a board: first completed line wins, otherwise a full board is a draw.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        GameStatus::Won { winner, line }
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_evaluate_statuses() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(
            evaluate(&"OX.OX.O..".parse().unwrap()),
            GameStatus::Won { winner: Side::O, line: 3 }
        );
        assert_eq!(evaluate(&"XOXOXXOXO".parse().unwrap()), GameStatus::Draw);
    }
}

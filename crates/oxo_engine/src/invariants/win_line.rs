//! Win line invariant: a recorded win names a line its winner completed.

use super::Invariant;
use crate::{Cell, GameSession, GameStatus, WIN_LINES};

/// Invariant: a won game's line index is in range and all three of its cells
/// hold the winner's mark.
///
/// The converse is not required: retracting moves puts the game back in
/// progress without re-scanning, so an in-progress game may still show a
/// completed line.
pub struct WinLineInvariant;

impl Invariant<GameSession> for WinLineInvariant {
    fn holds(game: &GameSession) -> bool {
        match game.status() {
            GameStatus::Won { winner, line } => WIN_LINES.get(line).is_some_and(|cells| {
                let board = game.board_copy();
                cells.iter().all(|&i| board[i] == Cell::Taken(winner))
            }),
            GameStatus::Draw => game.board_copy().is_full(),
            GameStatus::InProgress => true,
        }
    }

    fn description() -> &'static str {
        "A won game's line is complete for the winner and a drawn board is full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionParts;
    use serde_json::json;

    #[test]
    fn test_won_game_holds() {
        let mut game = GameSession::new();
        for index in [2, 0, 4, 1, 6] {
            game.make_move(index).unwrap();
        }
        assert_eq!(game.winning_line(), Some(7));
        assert!(WinLineInvariant::holds(&game));
    }

    #[test]
    fn test_line_out_of_range_violates() {
        let mut game = GameSession::new();
        for index in [0, 3, 1, 4, 2] {
            game.make_move(index).unwrap();
        }

        let mut value = serde_json::to_value(&game).unwrap();
        value["status"]["Won"]["line"] = json!(8);
        let corrupted = serde_json::from_value::<SessionParts>(value).unwrap().assemble();

        assert!(!WinLineInvariant::holds(&corrupted));
    }
}

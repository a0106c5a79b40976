//! History consistency invariant: the history and the board describe the same marks.

use super::Invariant;
use crate::{Cell, GameSession};

/// Invariant: every recorded move's cell holds that move's mark, and no cell
/// is occupied without a recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(game: &GameSession) -> bool {
        let board = game.board_copy();
        game.history().len() == board.occupied()
            && game
                .history()
                .iter()
                .all(|record| board.get(record.index) == Some(Cell::Taken(record.side)))
    }

    fn description() -> &'static str {
        "History length matches occupied cells and each move's cell holds its mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionParts;
    use serde_json::json;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameSession::new();
        for index in [0, 4, 8, 2] {
            game.make_move(index).unwrap();
            assert!(HistoryConsistentInvariant::holds(&game));
        }
        assert_eq!(game.move_count(), 4);
    }

    #[test]
    fn test_missing_history_violates() {
        let mut game = GameSession::new();
        game.make_move(4).unwrap();

        let mut value = serde_json::to_value(&game).unwrap();
        value["history"] = json!([]);
        let corrupted = serde_json::from_value::<SessionParts>(value).unwrap().assemble();

        assert!(!HistoryConsistentInvariant::holds(&corrupted));
    }
}

//! Alternating turn invariant: X moves first and sides take turns.

use super::Invariant;
use crate::{GameSession, Side};

/// Invariant: recorded moves alternate X, O, X, ... and the side to move
/// follows the history.
///
/// While the game is in progress the side to move is the one after the last
/// recorded move. Once the game is over it stays on the side that made the
/// final move.
pub struct AlternatingTurnInvariant;

fn expected_side(ply: usize) -> Side {
    if ply % 2 == 0 { Side::X } else { Side::O }
}

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();
        let alternating = history
            .iter()
            .enumerate()
            .all(|(ply, record)| record.side == expected_side(ply));

        let to_move = match history.last() {
            Some(last) if game.is_over() => last.side,
            _ => expected_side(history.len()),
        };

        alternating && game.current_side() == to_move
    }

    fn description() -> &'static str {
        "Sides alternate starting with X and the side to move follows the history"
    }
}

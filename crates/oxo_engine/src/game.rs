//! Game session: the board state machine.
//!
//! A session owns the board, the side to move, the game status and the move
//! history. Moves are validated before anything is written, so a rejected
//! move never leaves partial state behind.

use crate::action::{MoveError, MoveRecord};
use crate::error::{CellIndexError, SessionDecodeError};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{rules, Board, Cell, GameStatus, Side, Snapshot, CELL_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game session.
///
/// Deserialization validates the session: every recorded move must be on the
/// board and the session invariants must hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct GameSession {
    board: Board,
    current_side: Side,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

/// Unvalidated session fields as they appear on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionParts {
    board: Board,
    current_side: Side,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl SessionParts {
    /// Builds the session without validation, so tests can inspect broken states.
    #[cfg(test)]
    pub(crate) fn assemble(self) -> GameSession {
        GameSession {
            board: self.board,
            current_side: self.current_side,
            status: self.status,
            history: self.history,
        }
    }
}

impl TryFrom<SessionParts> for GameSession {
    type Error = SessionDecodeError;

    fn try_from(parts: SessionParts) -> Result<Self, Self::Error> {
        if let Some(record) = parts.history.iter().find(|r| r.index >= CELL_COUNT) {
            return Err(SessionDecodeError::MoveOutOfRange(record.index));
        }

        let session = Self {
            board: parts.board,
            current_side: parts.current_side,
            status: parts.status,
            history: parts.history,
        };
        if let Err(violations) = SessionInvariants::check_all(&session) {
            let descriptions: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            warn!(violations = descriptions.len(), "Rejected deserialized session");
            return Err(SessionDecodeError::Inconsistent(descriptions.join("; ")));
        }
        Ok(session)
    }
}

impl GameSession {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_side: Side::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and history and gives the move back to X.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Session reset");
    }

    /// Gets the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CellIndexError::OutOfRange`] if `index` is not in 0-8.
    pub fn cell(&self, index: usize) -> Result<Cell, CellIndexError> {
        self.board.cell(index)
    }

    /// Places the current side's mark at `index`.
    ///
    /// The side to move only flips if the game continues after this move.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::GameOver`], [`MoveError::OutOfRange`],
    /// [`MoveError::Occupied`]. The session is unchanged on error.
    #[instrument(skip(self), fields(side = %self.current_side))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if let Err(e) = self.check_move(index) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let side = self.current_side;
        self.board.place(index, side);
        self.history.push(MoveRecord::new(index, side));
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => self.current_side = side.opponent(),
            GameStatus::Won { winner, line } => info!(%winner, line, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }

        self.debug_check_invariants();
        Ok(())
    }

    /// Validates a move without applying it.
    fn check_move(&self, index: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::Occupied(index));
        }
        Ok(())
    }

    /// Empty cells in ascending order. Empty once the game is over, even if
    /// cells remain.
    pub fn available_moves(&self) -> Vec<usize> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// Returns an independent copy of the board.
    pub fn board_copy(&self) -> Board {
        self.board
    }

    /// Returns a snapshot for the move selector.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.current_side)
    }

    /// Retracts up to `count` of the most recent moves.
    ///
    /// Each retracted move clears its cell and hands the turn back to the side
    /// that played it. Any retraction puts the game back in progress without
    /// re-scanning the board, so a line completed by an earlier move can stay
    /// on the board of an in-progress game.
    ///
    /// Returns the number of moves actually retracted.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo_moves(&mut self, count: usize) -> usize {
        let mut undone = 0;
        while undone < count {
            let Some(record) = self.history.pop() else {
                break;
            };
            self.board.clear(record.index);
            self.current_side = record.side;
            self.status = GameStatus::InProgress;
            undone += 1;
        }

        if undone > 0 {
            debug!(undone, "Moves retracted");
            self.debug_check_invariants();
        }
        undone
    }

    /// Side that made the most recent move.
    pub fn try_peek_last_move(&self) -> Option<Side> {
        self.history.last().map(|record| record.side)
    }

    /// Side that made the second most recent move.
    pub fn try_peek_previous_move(&self) -> Option<Side> {
        self.history
            .len()
            .checked_sub(2)
            .map(|i| self.history[i].side)
    }

    /// Number of moves in the history.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Sides of every move, oldest first.
    pub fn move_players_history(&self) -> Vec<Side> {
        self.history.iter().map(|record| record.side).collect()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the side to move.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    /// Checks if the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the completed line's position in [`crate::WIN_LINES`], if any.
    pub fn winning_line(&self) -> Option<usize> {
        self.status.line()
    }

    /// Winning line as a raw index, `-1` when there is none.
    pub fn winning_line_index(&self) -> i32 {
        self.winning_line().map_or(-1, |line| line as i32)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

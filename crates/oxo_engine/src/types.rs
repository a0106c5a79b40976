//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, CellIndexError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Winning lines in table order: rows, columns, main diagonal, anti-diagonal.
///
/// When several lines are complete, the first one in this order is reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Side X (moves first).
    X,
    /// Side O (moves second).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a side's mark.
    Taken(Side),
}

impl Cell {
    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Taken(side) => Some(side),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 board, cells in row-major order (0-8).
///
/// `Board` is `Copy`: every value handed out is an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, or `None` past the last cell.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`CellIndexError::OutOfRange`] if `index` is not in 0-8.
    pub fn cell(&self, index: usize) -> Result<Cell, CellIndexError> {
        self.get(index).ok_or(CellIndexError::OutOfRange(index))
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterates over empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Counts the marks of one side.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.side() == Some(side)).count()
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Side to move when X starts and sides alternate.
    pub fn side_to_move(&self) -> Side {
        if self.count(Side::X) > self.count(Side::O) {
            Side::O
        } else {
            Side::X
        }
    }

    /// Writes a mark. Callers have already checked the index.
    pub(crate) fn place(&mut self, index: usize, side: Side) {
        self.cells[index] = Cell::Taken(side);
    }

    /// Clears a cell. Callers have already checked the index.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Formats the board as a human-readable grid, empty cells showing their index.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => pos.to_string(),
                    Cell::Taken(side) => side.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

/// Compact form: nine characters, `X`, `O` or `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = match cell {
                Cell::Empty => '.',
                Cell::Taken(Side::X) => 'X',
                Cell::Taken(Side::O) => 'O',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the compact form. Row separators (`/`) and whitespace are ignored,
    /// and `-` or `_` are accepted for empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            match symbol {
                'X' | 'x' => board.place(index, Side::X),
                'O' | 'o' => board.place(index, Side::O),
                '.' | '-' | '_' => {}
                other => return Err(BoardParseError::InvalidSymbol(other)),
            }
        }
        Ok(board)
    }
}

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with `winner` completing the win line at table position `line`.
    Won {
        /// Side that completed the line.
        winner: Side,
        /// Index into [`WIN_LINES`].
        line: usize,
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Returns the completed win line, if any.
    pub fn line(self) -> Option<usize> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Read-only view of a position handed to the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// Board cells.
    pub board: Board,
    /// Side whose turn it is.
    pub to_move: Side,
}

impl From<Board> for Snapshot {
    /// Infers the side to move from mark counts.
    fn from(board: Board) -> Self {
        Self::new(board, board.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
        assert!(!board.is_full());
        assert_eq!(board.to_string(), ".........");
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(8), Ok(Cell::Empty));
        assert_eq!(board.cell(9), Err(CellIndexError::OutOfRange(9)));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let board = Board::new();
        let _ = board[9];
    }

    #[test]
    fn test_parse_compact_form() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board[0], Cell::Taken(Side::X));
        assert_eq!(board[1], Cell::Taken(Side::X));
        assert_eq!(board[4], Cell::Taken(Side::O));
        assert_eq!(board.to_string(), "XX..O....");
        assert_eq!(board.side_to_move(), Side::O);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XX..Q....".parse::<Board>(),
            Err(BoardParseError::InvalidSymbol('Q'))
        );
        // Whitespace is a separator, not an empty cell
        assert_eq!(
            "XX  O....".parse::<Board>(),
            Err(BoardParseError::WrongLength(7))
        );
        assert_eq!("XX. .O. ...".parse::<Board>().unwrap().to_string(), "XX..O....");
    }

    #[test]
    fn test_render_shows_indices_for_empty_cells() {
        let board: Board = "X...O...O".parse().unwrap();
        assert_eq!(board.render(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|O");
    }

    #[test]
    fn test_side_parses_case_insensitively() {
        assert_eq!("x".parse::<Side>().unwrap(), Side::X);
        assert_eq!("O".parse::<Side>().unwrap(), Side::O);
        assert_eq!(Side::X.opponent(), Side::O);
    }
}

//! Error types for board access and parsing.

/// Reading a cell that does not exist.
///
/// This is a contract violation by the caller, unlike a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CellIndexError {
    /// The index is not in 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
}

impl std::error::Error for CellIndexError {}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The input does not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character other than `X`, `O`, `.`, `-` or `_`.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidSymbol(char),
}

impl std::error::Error for BoardParseError {}

/// A deserialized session that could not have come from legal play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionDecodeError {
    /// A recorded move names a cell outside 0-8.
    #[display("Recorded move at cell {} is out of range (must be 0-8)", _0)]
    MoveOutOfRange(usize),

    /// The session breaks one or more invariants.
    #[display("Inconsistent session: {}", _0)]
    Inconsistent(String),
}

impl std::error::Error for SessionDecodeError {}

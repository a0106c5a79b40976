//! Tic-tac-toe engine: a board state machine and a minimax move selector.
//!
//! # Architecture
//!
//! - **Types**: sides, cells, the fixed 3x3 board and the win-line table
//! - **Rules**: pure win/draw evaluation over raw board cells
//! - **Game**: [`GameSession`], which enforces legal play, detects the end of
//!   the game and supports move retraction
//! - **Search**: [`choose_move`], a depth-bounded minimax over a [`Snapshot`]
//!
//! # Example
//!
//! ```
//! use oxo_engine::{choose_for, GameSession, SearchLevel, Side};
//!
//! let mut game = GameSession::new();
//! game.make_move(0)?;
//! let reply = choose_for(&game, SearchLevel::Exhaustive, Side::O).expect("game in progress");
//! game.make_move(reply)?;
//! assert_eq!(game.move_count(), 2);
//! # Ok::<(), oxo_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod search;
mod types;

pub use action::{MoveError, MoveRecord};
pub use error::{BoardParseError, CellIndexError, SessionDecodeError};
pub use game::GameSession;
pub use search::{
    choose_for, choose_move, choose_scored_move, heuristic, ScoredMove, SearchLevel,
    SHALLOW_PLY_LIMIT, WIN_SCORE,
};
pub use types::{Board, Cell, GameStatus, Side, Snapshot, CELL_COUNT, WIN_LINES};

//! Match events and the observers that receive them.
//!
//! Rendering, sound and other reactions to play hang off a [`MatchObserver`]
//! handed to the match, never off process-wide state.

use oxo_engine::{Board, GameStatus, MoveError, Side};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Something that happened during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A move was applied.
    MoveApplied {
        /// Cell index.
        index: usize,
        /// Side that moved.
        side: Side,
        /// Board after the move.
        board: Board,
    },
    /// A player chose a move the session rejected.
    MoveRejected {
        /// Cell index.
        index: usize,
        /// Side that tried to move.
        side: Side,
        /// Why the move was rejected.
        reason: MoveError,
    },
    /// Moves were retracted.
    Undone {
        /// Number of moves retracted.
        count: usize,
    },
    /// The game ended.
    GameOver {
        /// Final status, won or drawn.
        status: GameStatus,
    },
}

/// Receives match events.
pub trait MatchObserver: Send {
    /// Called after each event.
    fn notify(&mut self, event: &MatchEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn notify(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::MoveApplied { index, side, board } => {
                info!(%side, index, %board, "Move applied");
            }
            MatchEvent::MoveRejected { index, side, reason } => {
                info!(%side, index, %reason, "Move rejected");
            }
            MatchEvent::Undone { count } => info!(count, "Moves undone"),
            MatchEvent::GameOver { status } => info!(?status, "Game over"),
        }
    }
}

/// Forwards events to a channel, for UIs running on another task.
impl MatchObserver for mpsc::UnboundedSender<MatchEvent> {
    fn notify(&mut self, event: &MatchEvent) {
        if self.send(event.clone()).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

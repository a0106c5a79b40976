//! Match orchestration between two players.

use crate::observer::{MatchEvent, MatchObserver};
use crate::players::Player;
use oxo_engine::{GameSession, GameStatus, Side};
use tracing::{debug, info, instrument, warn};

/// Error that ends a match early.
#[derive(Debug, derive_more::Display)]
pub enum MatchError {
    /// A player kept choosing moves the session rejected.
    #[display("{} had {} moves rejected in a row", side, count)]
    TooManyRejections {
        /// Side whose moves were rejected.
        side: Side,
        /// Number of consecutive rejections.
        count: usize,
    },

    /// A player failed to produce a move.
    #[display("{} player failed: {}", side, source)]
    Player {
        /// Side whose player failed.
        side: Side,
        /// Underlying failure.
        source: anyhow::Error,
    },
}

impl std::error::Error for MatchError {}

/// Runs a game between two players, reporting every event to an observer.
pub struct Match {
    game: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    observer: Box<dyn MatchObserver>,
    max_rejections: usize,
}

impl Match {
    /// Creates a match on a fresh board.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        observer: Box<dyn MatchObserver>,
    ) -> Self {
        Self {
            game: GameSession::new(),
            player_x,
            player_o,
            observer,
            max_rejections: 3,
        }
    }

    /// Sets how many consecutive rejected moves end the match.
    pub fn with_max_rejections(mut self, max_rejections: usize) -> Self {
        self.max_rejections = max_rejections.max(1);
        self
    }

    /// Returns the game session.
    pub fn game(&self) -> &GameSession {
        &self.game
    }

    /// Plays until the game is won or drawn.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if a player fails or exceeds the rejection limit.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameStatus, MatchError> {
        info!("Starting match");
        let mut rejections = 0;

        while !self.game.is_over() {
            let side = self.game.current_side();
            let player = match side {
                Side::X => &mut self.player_x,
                Side::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let index = player
                .choose(&self.game)
                .await
                .map_err(|source| MatchError::Player { side, source })?;

            match self.game.make_move(index) {
                Ok(()) => {
                    rejections = 0;
                    self.observer.notify(&MatchEvent::MoveApplied {
                        index,
                        side,
                        board: self.game.board_copy(),
                    });
                }
                Err(reason) => {
                    rejections += 1;
                    warn!(%side, index, %reason, rejections, "Player chose an illegal move");
                    self.observer
                        .notify(&MatchEvent::MoveRejected { index, side, reason });
                    if rejections >= self.max_rejections {
                        return Err(MatchError::TooManyRejections {
                            side,
                            count: rejections,
                        });
                    }
                }
            }
        }

        let status = self.game.status();
        info!(?status, moves = self.game.move_count(), "Match finished");
        self.observer.notify(&MatchEvent::GameOver { status });
        Ok(status)
    }

    /// Retracts up to `count` moves; returns how many were retracted.
    pub fn undo(&mut self, count: usize) -> usize {
        let undone = self.game.undo_moves(count);
        if undone > 0 {
            self.observer.notify(&MatchEvent::Undone { count: undone });
        }
        undone
    }

    /// Starts over on an empty board with the same players.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}

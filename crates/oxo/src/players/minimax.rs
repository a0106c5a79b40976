//! Minimax player backed by the engine's move selector.

use super::Player;
use anyhow::{Context, Result};
use oxo_engine::{choose_move, GameSession, SearchLevel, Side};
use tracing::{debug, instrument};

/// Automated player searching on behalf of one side.
pub struct MinimaxPlayer {
    name: String,
    side: Side,
    level: SearchLevel,
}

impl MinimaxPlayer {
    /// Creates a player optimizing for `side` at the given search level.
    pub fn new(side: Side, level: SearchLevel) -> Self {
        Self {
            name: format!("Minimax {side} ({level})"),
            side,
            level,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    /// Runs the search on the blocking pool; only a board copy crosses over.
    #[instrument(skip(self, game), fields(player = %self.name))]
    async fn choose(&mut self, game: &GameSession) -> Result<usize> {
        let snapshot = game.snapshot();
        let (level, side) = (self.level, self.side);

        let chosen = tokio::task::spawn_blocking(move || choose_move(snapshot, level, side))
            .await
            .context("Search task failed")?;

        let index = chosen.with_context(|| format!("No move available for {}", self.name))?;
        debug!(index, "Search finished");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Player trait and implementations.

mod minimax;
mod scripted;

pub use minimax::MinimaxPlayer;
pub use scripted::ScriptedPlayer;

use anyhow::Result;
use oxo_engine::GameSession;

/// Trait for players that can choose moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses a cell (0-8) for the side to move.
    async fn choose(&mut self, game: &GameSession) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

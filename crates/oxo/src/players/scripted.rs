//! Scripted player that replays a fixed list of moves.

use super::Player;
use anyhow::Result;
use oxo_engine::GameSession;
use std::collections::VecDeque;

/// Plays the given cells in order, whether or not they are legal.
pub struct ScriptedPlayer {
    name: String,
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    /// Creates a scripted player.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn choose(&mut self, _game: &GameSession) -> Result<usize> {
        match self.moves.pop_front() {
            Some(index) => Ok(index),
            None => anyhow::bail!("{} has no scripted moves left", self.name),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

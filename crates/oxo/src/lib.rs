//! Match driver for the oxo tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML match configuration
//! - **Players**: move sources (minimax search, scripted moves)
//! - **Observer**: event sink injected into a match
//! - **Orchestrator**: alternates players against a [`GameSession`](oxo_engine::GameSession)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod observer;
mod orchestrator;
mod players;

pub use config::{ConfigError, MatchConfig};
pub use observer::{MatchEvent, MatchObserver, TracingObserver};
pub use orchestrator::{Match, MatchError};
pub use players::{MinimaxPlayer, Player, ScriptedPlayer};

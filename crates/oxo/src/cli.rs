//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_engine::{Board, SearchLevel, Side};

/// oxo - tic-tac-toe engine with minimax opponents
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe engine with minimax opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a full game between two minimax players
    SelfPlay {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Search level for X (shallow or exhaustive), overrides the config
        #[arg(long)]
        x_level: Option<SearchLevel>,

        /// Search level for O (shallow or exhaustive), overrides the config
        #[arg(long)]
        o_level: Option<SearchLevel>,
    },

    /// Suggest a move for a position
    Suggest {
        /// Board as nine cells, e.g. "XX..O...." (row separators "/" allowed)
        #[arg(short, long)]
        board: Board,

        /// Search level (shallow or exhaustive)
        #[arg(short, long, default_value = "exhaustive")]
        level: SearchLevel,

        /// Side to optimize for; defaults to the side to move
        #[arg(short, long)]
        side: Option<Side>,
    },
}

//! oxo - command-line front end
//!
//! Runs automated matches and move suggestions on the oxo engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use oxo::{Match, MatchConfig, MatchEvent, MatchObserver, MinimaxPlayer, TracingObserver};
use oxo_engine::{choose_scored_move, Board, GameStatus, SearchLevel, Side, Snapshot};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::SelfPlay {
            config,
            x_level,
            o_level,
        } => run_self_play(config, x_level, o_level).await,
        Command::Suggest { board, level, side } => run_suggest(board, level, side),
    }
}

/// Prints the board after every move and logs everything else.
struct ConsoleObserver;

impl MatchObserver for ConsoleObserver {
    fn notify(&mut self, event: &MatchEvent) {
        if let MatchEvent::MoveApplied { index, side, board } = event {
            println!("{side} plays {index}\n{}\n", board.render());
        }
        TracingObserver.notify(event);
    }
}

/// Play a full game between two minimax players
#[instrument]
async fn run_self_play(
    config: Option<PathBuf>,
    x_level: Option<SearchLevel>,
    o_level: Option<SearchLevel>,
) -> Result<()> {
    let config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    }
    .with_levels(x_level, o_level);

    info!(x_level = %config.x_level(), o_level = %config.o_level(), "Starting self-play");

    let mut game = Match::new(
        Box::new(MinimaxPlayer::new(Side::X, *config.x_level())),
        Box::new(MinimaxPlayer::new(Side::O, *config.o_level())),
        Box::new(ConsoleObserver),
    )
    .with_max_rejections(*config.max_rejections());

    match game.run().await? {
        GameStatus::Won { winner, line } => println!("{winner} wins on line {line}"),
        status => println!("{status:?}"),
    }
    Ok(())
}

/// Suggest a move for a position
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: Board, level: SearchLevel, side: Option<Side>) -> Result<()> {
    let snapshot = Snapshot::from(board);
    let selector = side.unwrap_or(snapshot.to_move);

    println!("{}\n", board.render());
    match choose_scored_move(snapshot, level, selector) {
        Some(chosen) => println!(
            "{} to move, best for {selector}: {} (score {})",
            snapshot.to_move, chosen.index, chosen.score
        ),
        None => println!("Position is already decided"),
    }
    Ok(())
}

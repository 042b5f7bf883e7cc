//! Strictly Minimax - CLI
//!
//! Non-interactive driver for the search: self-play and one-shot analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_minimax::{
    Board, SearchConfig, SelfPlay, analyze, initial_state, player, utility, validate, winner,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::SelfPlay {
            board,
            config,
            no_cutoff,
        } => run_self_play(board, config, no_cutoff),
        Command::Best { board, config } => run_best(board, config),
    }
}

/// Load the search config, falling back to defaults when no path is given.
fn load_config(path: Option<PathBuf>) -> Result<SearchConfig> {
    match path {
        Some(path) => Ok(SearchConfig::from_file(path)?),
        None => Ok(SearchConfig::default()),
    }
}

/// Parse a board argument and reject boards that cannot occur in play.
fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;

    if let Err(violations) = validate(&board) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Unreachable board: {}", descriptions);
    }

    Ok(board)
}

/// Play both sides perfectly and print every move.
#[instrument]
fn run_self_play(board: Option<String>, config: Option<PathBuf>, no_cutoff: bool) -> Result<()> {
    let mut config = load_config(config)?;
    if no_cutoff {
        config = config.with_early_cutoff(false);
    }

    let board = match board {
        Some(text) => parse_board(&text)?,
        None => initial_state(),
    };

    println!("{}\n", board);
    let mut last = board;
    for (action, next) in SelfPlay::new(board, config) {
        println!("{} plays {}\n{}\n", player(&last), action, next);
        last = next;
    }

    match winner(&last) {
        Some(mark) => println!("{} wins", mark),
        None => println!("Draw"),
    }
    info!(utility = utility(&last), "Game over");
    Ok(())
}

/// Print the optimal move, score and search statistics for one board.
#[instrument]
fn run_best(board: String, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    let board = parse_board(&board)?;

    let analysis = analyze(&board, &config);
    match analysis.action() {
        Some(action) => println!("{} to move: play {}", player(&board), action),
        None => println!("Game is already over"),
    }
    println!("Score: {}", analysis.score());
    println!("Search: {}", analysis.statistics());
    Ok(())
}

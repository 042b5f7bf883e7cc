//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - perfect tic-tac-toe play
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax search for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play both sides perfectly until the game ends
    SelfPlay {
        /// Starting board as nine symbols (X, O, .), e.g. "X../.O./..."
        #[arg(long)]
        board: Option<String>,

        /// Path to a TOML search config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Examine every move even after a forced win is found
        #[arg(long)]
        no_cutoff: bool,
    },

    /// Print the optimal move for a board
    Best {
        /// Board as nine symbols (X, O, .), e.g. "X../.O./..."
        board: String,

        /// Path to a TOML search config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

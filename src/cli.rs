//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::GameMode;

/// Tic-tac-toe in the terminal, against a friend or a random-move computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or a random-move computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Game mode (human-vs-human, human-vs-computer, computer-vs-computer)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print every state change as a JSON line instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Watch the computer play itself
    Watch {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print each final state as a JSON line instead of a board
        #[arg(long)]
        json: bool,
    },
}

//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::GameMode;
use std::path::PathBuf;
use std::str::FromStr;

/// Rewind - tic-tac-toe with time travel and a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and a machine opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (the default)
    Play {
        /// Starting mode: pvc (against the machine) or pvp (local)
        #[arg(short, long, value_parser = GameMode::from_str)]
        mode: Option<GameMode>,

        /// Machine thinking pause in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the machine's corner and side choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the heuristic play itself and report the results
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both sides
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

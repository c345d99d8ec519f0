//! Rewind - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{Config, selfplay, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        mode: None,
        delay_ms: None,
        seed: None,
    }) {
        Command::Play {
            mode,
            delay_ms,
            seed,
        } => {
            let mut config = config;
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_thinking_delay_ms(delay_ms);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(config).await
        }
        Command::Selfplay { games, seed, json } => run_selfplay(games, seed, json),
    }
}

/// Run the terminal UI, logging to a file so the screen stays clean
async fn run_play(config: Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(?config, "Starting rewind");
    tui::run_tui(&config).await
}

/// Run headless self-play
#[instrument]
fn run_selfplay(games: u32, seed: u64, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let tally = selfplay::run(games, seed);
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!(
            "{} games: X won {}, O won {}, {} draws",
            tally.games(),
            tally.x_wins,
            tally.o_wins,
            tally.draws
        );
    }
    Ok(())
}

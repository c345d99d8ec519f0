//! Rewind - terminal tic-tac-toe with time travel.
//!
//! # Architecture
//!
//! - **Session**: owns the game timeline and schedules the machine's
//!   deferred, cancellable moves.
//! - **TUI**: ratatui front end over a session.
//! - **Self-play**: headless heuristic-versus-heuristic runs.
//! - **Config**: optional TOML file with CLI overrides.
//!
//! Game rules, history, and the heuristic live in [`rewind_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
pub mod selfplay;
pub mod tui;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use session::{Session, SessionError, SessionEvent, status_message};

//! Pure tic-tac-toe logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies any board as won, drawn, or open.
//! - **Timeline**: [`Timeline`] keeps every snapshot of the game and a
//!   cursor into them, so play can resume from any earlier point.
//! - **Heuristic**: [`select_move`] picks a reply for the machine player
//!   without searching the game tree.
//!
//! Nothing here performs I/O or spawns tasks. Deferred machine moves are
//! made safe by [`MoveTicket`], which a timeline refuses once it has moved on.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameMode, Outcome, Position, Timeline};
//!
//! let mut timeline = Timeline::new(GameMode::PlayerVsPlayer);
//! timeline.play(Position::Center).unwrap();
//! timeline.play(Position::TopLeft).unwrap();
//! timeline.jump_to(1).unwrap();
//! assert_eq!(timeline.outcome(), Outcome::InProgress);
//! assert_eq!(timeline.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod heuristic;
mod history;
pub mod invariants;
mod mode;
mod position;
pub mod rules;
mod ticket;
mod types;

pub use action::{Move, PlayError};
pub use heuristic::{Decision, HeuristicOpponent, Rule, decide, find_critical_move, select_move};
pub use history::{Timeline, replay};
pub use mode::GameMode;
pub use position::{CellKind, Position};
pub use rules::{Line, Outcome, WINNING_LINES, evaluate};
pub use ticket::MoveTicket;
pub use types::{Board, BoardParseError, Player, Square};

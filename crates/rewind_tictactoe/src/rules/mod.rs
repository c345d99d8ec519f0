//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Nothing here is cached: every
//! caller evaluates the snapshot it is looking at.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{Line, WINNING_LINES, check_winner, winning_line};

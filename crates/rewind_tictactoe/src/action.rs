//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A rejected move is a value
//! describing why nothing happened.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a timeline operation left the game untouched.
///
/// None of these indicate a failure of the engine; each describes an input
/// the presentation layer should normally have prevented.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw cell index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// A history index past the last snapshot.
    #[display("No move #{} in a history of {} snapshots", requested, len)]
    NoSuchMove {
        /// The requested snapshot index.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// A deferred move whose snapshot is no longer current.
    #[display("Move ticket is stale")]
    StaleTicket,
}

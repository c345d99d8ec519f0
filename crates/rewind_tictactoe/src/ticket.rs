//! Generation-stamped permission for a deferred move.

use super::{Board, Player};
use derive_getters::Getters;

/// Snapshot of the timeline taken when a deferred move is scheduled.
///
/// A ticket is only honoured while the timeline's generation still equals
/// the one recorded here. Any mutation in between (a play, a jump, a reset)
/// makes it stale.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveTicket {
    /// Timeline generation the ticket was issued at.
    pub(crate) generation: u64,
    /// Cursor the ticket was issued at.
    pub(crate) cursor: usize,
    /// The board the deferred move must be computed against.
    pub(crate) board: Board,
    /// The mark that will be placed.
    pub(crate) mark: Player,
}

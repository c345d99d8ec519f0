//! Classification of a board snapshot.

use super::draw::is_full;
use super::win::{Line, winning_line};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a board stands: won, drawn, or still open.
///
/// Exactly one variant applies to any board. Outcomes are computed on
/// demand from a snapshot and never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player holds a complete line.
    Winner {
        /// The winning mark.
        mark: Player,
        /// The completed line.
        line: Line,
    },
    /// The board is full and nobody won.
    Draw,
    /// Moves remain and nobody has won yet.
    InProgress,
}

impl Outcome {
    /// True for `Winner` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates a board.
///
/// Lines are checked in [`super::WINNING_LINES`] order and the first complete
/// one wins. With no winner, a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Winner { mark, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

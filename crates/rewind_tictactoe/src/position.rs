//! Position enum for the nine cells of the board.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Strategic class of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum CellKind {
    /// The middle cell.
    Center,
    /// One of the four corners.
    Corner,
    /// One of the four edge midpoints.
    Side,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-based keypad digit (1-9).
    pub fn from_key(digit: u32) -> Option<Self> {
        digit
            .checked_sub(1)
            .and_then(|index| Self::from_index(index as usize))
    }

    /// Row (0-2) of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Strategic class of this cell.
    pub fn kind(self) -> CellKind {
        match self {
            Position::Center => CellKind::Center,
            Position::TopLeft
            | Position::TopRight
            | Position::BottomLeft
            | Position::BottomRight => CellKind::Corner,
            Position::TopCenter
            | Position::MiddleLeft
            | Position::MiddleRight
            | Position::BottomCenter => CellKind::Side,
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_row_major_layout() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(pos.row() * 3 + pos.col(), index);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_key_is_one_based() {
        assert_eq!(Position::from_key(1), Some(Position::TopLeft));
        assert_eq!(Position::from_key(9), Some(Position::BottomRight));
        assert_eq!(Position::from_key(0), None);
        assert_eq!(Position::from_key(10), None);
    }

    #[test]
    fn test_cell_kinds_partition_the_board() {
        let corners = Position::ALL.iter().filter(|p| p.kind() == CellKind::Corner).count();
        let sides = Position::ALL.iter().filter(|p| p.kind() == CellKind::Side).count();
        assert_eq!((corners, sides), (4, 4));
        assert_eq!(Position::TopRight.kind(), CellKind::Corner);
        assert_eq!(Position::BottomCenter.kind(), CellKind::Side);
        assert_eq!(Position::Center.kind(), CellKind::Center);
    }
}

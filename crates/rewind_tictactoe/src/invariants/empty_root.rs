//! Root invariant: the first snapshot is the empty board.

use super::Invariant;
use crate::{Board, Timeline};

/// Invariant: History index 0 is always the all-empty board.
pub struct EmptyRootInvariant;

impl Invariant<Timeline> for EmptyRootInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "First snapshot is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_default_holds() {
        assert!(EmptyRootInvariant::holds(&Timeline::default()));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut timeline = Timeline::default();
        timeline.history[0].set(Position::Center, Square::Occupied(Player::X));
        assert!(!EmptyRootInvariant::holds(&timeline));
    }
}

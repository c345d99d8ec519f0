//! Turn invariant: marks alternate starting with X.

use super::Invariant;
use crate::{Player, Timeline};

/// Invariant: the mark placed to reach snapshot `k` belongs to the player
/// whose turn it was at `k - 1` (X on even, O on odd).
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        (1..timeline.len()).all(|k| {
            timeline
                .move_at(k)
                .is_some_and(|mv| mv.player == Player::for_move_number(k - 1))
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... along the history"
    }
}

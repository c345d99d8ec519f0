//! Placement invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::Timeline;
use crate::history::is_single_placement;

/// Invariant: consecutive snapshots differ in exactly one cell, empty to marked.
///
/// Marks are never removed or overwritten, and no step places two at once.
pub struct SinglePlacementInvariant;

impl Invariant<Timeline> for SinglePlacementInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .all(|pair| is_single_placement(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty square"
    }
}

//! Cursor invariant.

use super::Invariant;
use crate::Timeline;

/// Invariant: `0 <= cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor < timeline.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}

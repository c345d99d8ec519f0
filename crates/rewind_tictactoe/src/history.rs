//! Rewindable move history.
//!
//! A [`Timeline`] owns every board snapshot of the current game plus a
//! cursor selecting the one on display. The side to move is never stored:
//! it is the parity of the cursor, so jumping back through history always
//! hands the turn to the right player.

use super::action::{Move, PlayError};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::mode::GameMode;
use super::rules::{Outcome, evaluate};
use super::ticket::MoveTicket;
use super::{Board, Player, Position, Square};
use tracing::{debug, info, instrument};

/// Board snapshots, the displayed index, and the active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
    pub(crate) mode: GameMode,
    pub(crate) generation: u64,
}

impl Timeline {
    /// Starts a game in the given mode with a single empty snapshot.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            mode,
            generation: 0,
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All snapshots, oldest first. Index 0 is the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; a timeline holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Active game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Mutation counter, bumped by every successful play, jump, and reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The player to move from the displayed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move_number(self.cursor)
    }

    /// Outcome of the displayed snapshot, evaluated fresh.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current())
    }

    /// Whether the cursor is on the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// The move that produced snapshot `index`.
    ///
    /// Returns `None` for the starting board and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        if index == 0 {
            return None;
        }
        let before = self.history.get(index - 1)?;
        let after = self.history.get(index)?;
        let position = *after.diff(before).first()?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// Places the mark of the side to move at `pos`.
    ///
    /// Any snapshots after the cursor are discarded before the new one is
    /// appended. The call is rejected, with no change, when the square is
    /// taken or the displayed snapshot already has a winner.
    ///
    /// # Errors
    ///
    /// [`PlayError::GameOver`] or [`PlayError::SquareOccupied`].
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        let current = self.current();

        if let Outcome::Winner { mark, .. } = evaluate(current) {
            debug!(winner = %mark, "Rejected move after game end");
            return Err(PlayError::GameOver);
        }

        if !current.is_empty(pos) {
            debug!("Rejected move on occupied square");
            return Err(PlayError::SquareOccupied(pos));
        }

        let next = current.with_mark(pos, self.to_move());
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
        self.generation += 1;

        debug!(new_cursor = self.cursor, "Move applied");
        self.debug_check();
        Ok(())
    }

    /// [`Timeline::play`] for a raw 0-8 cell index.
    ///
    /// # Errors
    ///
    /// [`PlayError::OutOfBounds`] for indices above 8, otherwise as `play`.
    pub fn play_index(&mut self, index: usize) -> Result<(), PlayError> {
        let pos = Position::from_index(index).ok_or(PlayError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Moves the cursor to snapshot `index` without touching the history.
    ///
    /// # Errors
    ///
    /// [`PlayError::NoSuchMove`] when `index` is past the last snapshot.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), PlayError> {
        if index >= self.history.len() {
            return Err(PlayError::NoSuchMove {
                requested: index,
                len: self.history.len(),
            });
        }

        self.cursor = index;
        self.generation += 1;
        debug!(to_move = %self.to_move(), "Cursor moved");
        self.debug_check();
        Ok(())
    }

    /// Clears the history, optionally switching mode.
    ///
    /// Changing mode always goes through here, so a game never carries
    /// snapshots across modes.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Option<GameMode>) {
        self.history.clear();
        self.history.push(Board::new());
        self.cursor = 0;
        self.generation += 1;
        if let Some(mode) = mode {
            self.mode = mode;
        }
        info!(mode = ?self.mode, "Game reset");
        self.debug_check();
    }

    /// Issues a ticket for a deferred move from the displayed snapshot.
    pub fn ticket(&self) -> MoveTicket {
        MoveTicket {
            generation: self.generation,
            cursor: self.cursor,
            board: self.current().clone(),
            mark: self.to_move(),
        }
    }

    /// Plays a deferred move if nothing has changed since `ticket` was issued.
    ///
    /// # Errors
    ///
    /// [`PlayError::StaleTicket`] when any mutation happened in between,
    /// otherwise as [`Timeline::play`].
    #[instrument(skip(self, ticket), fields(issued = ticket.generation, now = self.generation))]
    pub fn play_ticketed(&mut self, ticket: &MoveTicket, pos: Position) -> Result<(), PlayError> {
        if ticket.generation != self.generation {
            debug!("Discarding stale deferred move");
            return Err(PlayError::StaleTicket);
        }
        self.play(pos)
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimelineInvariants::check_all(self)
        {
            panic!("Timeline invariants violated: {violations:?}");
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

/// Replays indices from an empty board, stopping at the first rejection.
///
/// # Errors
///
/// The first [`PlayError`] encountered.
pub fn replay(mode: GameMode, indices: &[usize]) -> Result<Timeline, PlayError> {
    let mut timeline = Timeline::new(mode);
    for &index in indices {
        timeline.play_index(index)?;
    }
    Ok(timeline)
}

/// Whether two consecutive snapshots differ by exactly one placed mark.
pub(crate) fn is_single_placement(before: &Board, after: &Board) -> bool {
    match after.diff(before).as_slice() {
        [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timeline_has_one_empty_snapshot() {
        let timeline = Timeline::default();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.current(), &Board::new());
        assert_eq!(timeline.to_move(), Player::X);
        assert_eq!(timeline.mode(), GameMode::PlayerVsMachine);
    }

    #[test]
    fn test_play_alternates_marks_by_cursor_parity() {
        let mut timeline = Timeline::default();
        timeline.play(Position::Center).unwrap();
        timeline.play(Position::TopLeft).unwrap();
        assert_eq!(timeline.current().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(timeline.current().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(timeline.to_move(), Player::X);
    }

    #[test]
    fn test_play_occupied_is_noop() {
        let mut timeline = Timeline::default();
        timeline.play_index(0).unwrap();
        let before = timeline.clone();

        assert_eq!(timeline.play_index(0), Err(PlayError::SquareOccupied(Position::TopLeft)));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let mut timeline = replay(GameMode::PlayerVsPlayer, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(timeline.outcome().winner(), Some(Player::X));
        let before = timeline.clone();

        assert_eq!(timeline.play_index(8), Err(PlayError::GameOver));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_out_of_bounds_index_is_rejected() {
        let mut timeline = Timeline::default();
        assert_eq!(timeline.play_index(9), Err(PlayError::OutOfBounds(9)));
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_jump_changes_only_cursor() {
        let mut timeline = replay(GameMode::PlayerVsPlayer, &[4, 0, 8]).unwrap();
        let snapshots = timeline.history().to_vec();

        timeline.jump_to(1).unwrap();
        assert_eq!(timeline.cursor(), 1);
        assert_eq!(timeline.history(), snapshots.as_slice());
        assert_eq!(timeline.to_move(), Player::O);
        assert!(!timeline.is_latest());
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut timeline = replay(GameMode::PlayerVsPlayer, &[4]).unwrap();
        let before = timeline.clone();
        assert_eq!(
            timeline.jump_to(2),
            Err(PlayError::NoSuchMove { requested: 2, len: 2 })
        );
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_play_from_rewound_point_truncates_future() {
        let mut timeline = replay(GameMode::PlayerVsPlayer, &[4, 0, 8, 2]).unwrap();
        timeline.jump_to(1).unwrap();

        timeline.play(Position::BottomRight).unwrap();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(timeline.current().get(Position::BottomRight), Square::Occupied(Player::O));
        assert!(timeline.current().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_jump_back_from_win_allows_play_again() {
        let mut timeline = replay(GameMode::PlayerVsPlayer, &[0, 3, 1, 4, 2]).unwrap();
        timeline.jump_to(4).unwrap();
        assert_eq!(timeline.outcome(), Outcome::InProgress);
        timeline.play(Position::BottomRight).unwrap();
        assert_eq!(timeline.len(), 6);
    }

    #[test]
    fn test_reset_with_mode_switch() {
        let mut timeline = replay(GameMode::PlayerVsMachine, &[4, 0]).unwrap();
        timeline.reset(Some(GameMode::PlayerVsPlayer));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.mode(), GameMode::PlayerVsPlayer);

        timeline.reset(None);
        assert_eq!(timeline.mode(), GameMode::PlayerVsPlayer);
    }

    #[test]
    fn test_generation_bumps_on_every_mutation() {
        let mut timeline = Timeline::default();
        let g0 = timeline.generation();
        timeline.play(Position::Center).unwrap();
        let g1 = timeline.generation();
        timeline.jump_to(0).unwrap();
        let g2 = timeline.generation();
        timeline.reset(None);
        let g3 = timeline.generation();
        assert!(g0 < g1 && g1 < g2 && g2 < g3);

        let _ = timeline.play_index(42);
        assert_eq!(timeline.generation(), g3);
    }

    #[test]
    fn test_stale_ticket_is_refused() {
        let mut timeline = replay(GameMode::PlayerVsMachine, &[4]).unwrap();
        let ticket = timeline.ticket();
        assert_eq!(*ticket.mark(), Player::O);
        assert_eq!(*ticket.cursor(), 1);

        timeline.jump_to(0).unwrap();
        let before = timeline.clone();
        assert_eq!(
            timeline.play_ticketed(&ticket, Position::TopLeft),
            Err(PlayError::StaleTicket)
        );
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_fresh_ticket_plays() {
        let mut timeline = replay(GameMode::PlayerVsMachine, &[4]).unwrap();
        let ticket = timeline.ticket();
        timeline.play_ticketed(&ticket, Position::TopLeft).unwrap();
        assert_eq!(timeline.current().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_move_at_reports_each_placement() {
        let timeline = replay(GameMode::PlayerVsPlayer, &[4, 0]).unwrap();
        assert_eq!(timeline.move_at(0), None);
        assert_eq!(timeline.move_at(1), Some(Move::new(Player::X, Position::Center)));
        assert_eq!(timeline.move_at(2), Some(Move::new(Player::O, Position::TopLeft)));
        assert_eq!(timeline.move_at(3), None);
    }

    #[test]
    fn test_is_single_placement() {
        let empty = Board::new();
        let one = empty.with_mark(Position::Center, Player::X);
        let two = one.with_mark(Position::TopLeft, Player::O);
        assert!(is_single_placement(&empty, &one));
        assert!(!is_single_placement(&empty, &two));
        assert!(!is_single_placement(&one, &empty));
    }
}

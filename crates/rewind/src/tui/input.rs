//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Step one snapshot back.
    Back,
    /// Step one snapshot forward.
    Forward,
    /// Jump to the starting board.
    First,
    /// Jump to the newest snapshot.
    Latest,
    /// Start over in the same mode.
    Reset,
    /// Switch mode (starts over).
    ToggleMode,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::MoveCursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => c.to_digit(10).and_then(Position::from_key).map(Action::Play),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::Back),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::Forward),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Latest),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

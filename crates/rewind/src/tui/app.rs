//! Application state and logic.

use super::input::{Action, action_for, move_cursor};
use crate::session::{Session, SessionError, SessionEvent};
use crossterm::event::KeyCode;
use rewind_tictactoe::{PlayError, Position};
use tracing::{debug, warn};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the program.
    Quit,
}

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    notice: Option<String>,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            notice: None,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Why the last input was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let Some(action) = action_for(key) else {
            return Control::Continue;
        };
        debug!(?action, "Key action");
        self.notice = None;

        let timeline = self.session.timeline();
        let (cursor, last) = (timeline.cursor(), timeline.len() - 1);

        let result = match action {
            Action::Quit => return Control::Quit,
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                Ok(())
            }
            Action::PlayCursor => self.session.human_play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.session.human_play(pos)
            }
            Action::Back if cursor > 0 => self.session.jump_to(cursor - 1),
            Action::Forward if cursor < last => self.session.jump_to(cursor + 1),
            Action::Back | Action::Forward => Ok(()),
            Action::First => self.session.jump_to(0),
            Action::Latest => self.session.jump_to(last),
            Action::Reset => {
                self.session.reset(None);
                Ok(())
            }
            Action::ToggleMode => {
                self.session.toggle_mode();
                Ok(())
            }
        };

        if let Err(e) = result {
            debug!(error = %e, "Input ignored");
            self.notice = Some(e.to_string());
        }
        Control::Continue
    }

    /// Applies an event from the session's scheduled tasks.
    pub fn handle_session_event(&mut self, event: SessionEvent) {
        match self.session.handle_event(event) {
            Ok(_) => {}
            Err(SessionError::Play(PlayError::StaleTicket)) => {
                debug!("Dropped machine move for an outdated board");
            }
            Err(e) => warn!(error = %e, "Machine move failed"),
        }
    }
}

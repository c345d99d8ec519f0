//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, Control};
pub use input::{Action, action_for, move_cursor};
pub use ui::{draw, history_label};

use crate::config::Config;
use crate::session::{Session, SessionEvent};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Raw mode on the alternate screen. Restores the terminal on drop.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the terminal UI until the player quits.
#[instrument(skip_all, fields(mode = ?config.mode()))]
pub async fn run_tui(config: &Config) -> Result<()> {
    info!("Starting terminal UI");

    let (session, mut events) = Session::new(*config.mode(), config.thinking_delay(), *config.seed());
    let mut app = App::new(session);

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_loop(&mut terminal, &mut app, &mut events).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_session_event(event);
        }

        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

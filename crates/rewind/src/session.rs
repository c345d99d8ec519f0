//! Game orchestration between the human and the machine.
//!
//! A [`Session`] owns the [`Timeline`] and is its only writer. When the
//! machine is due it spawns a timer task that sleeps for the thinking delay
//! and then reports back over a channel; the session runs the heuristic and
//! plays the result. Any jump, reset, or mode change aborts the timer, and
//! the move ticket guards against an event that was already in flight.

use derive_more::{Display, Error, From};
use rewind_tictactoe::{
    Decision, GameMode, HeuristicOpponent, MoveTicket, Outcome, PlayError, Player, Position,
    Timeline,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Messages sent from scheduled tasks back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The thinking delay for this ticket has elapsed.
    MachineDue(MoveTicket),
}

/// Why a session request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// It is the machine's turn, or its move is pending.
    #[display("Waiting for the machine to move")]
    #[from(skip)]
    Busy,
    /// The timeline rejected the request.
    #[display("{}", _0)]
    Play(PlayError),
}

struct PendingMove {
    ticket: MoveTicket,
    handle: JoinHandle<()>,
}

/// One player's game against a partner or the machine.
pub struct Session {
    timeline: Timeline,
    opponent: HeuristicOpponent,
    thinking_delay: Duration,
    pending: Option<PendingMove>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl Session {
    /// Creates a session and the receiver its scheduled events arrive on.
    ///
    /// The machine always plays O.
    #[instrument(skip(seed))]
    pub fn new(
        mode: GameMode,
        thinking_delay: Duration,
        seed: Option<u64>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let opponent = match seed {
            Some(seed) => HeuristicOpponent::with_seed(Player::O, seed),
            None => HeuristicOpponent::new(Player::O),
        };
        let session = Self {
            timeline: Timeline::new(mode),
            opponent,
            thinking_delay,
            pending: None,
            events,
        };
        (session, rx)
    }

    /// The game history.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Active mode.
    pub fn mode(&self) -> GameMode {
        self.timeline.mode()
    }

    /// Mark played by the machine.
    pub fn machine_mark(&self) -> Player {
        self.opponent.mark()
    }

    /// Whether a machine move is scheduled.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the machine should move from the displayed snapshot.
    pub fn machine_due(&self) -> bool {
        self.mode().has_machine()
            && self.timeline.to_move() == self.opponent.mark()
            && self.timeline.outcome() == Outcome::InProgress
    }

    /// Whether the board accepts human input right now.
    pub fn accepts_input(&self) -> bool {
        !self.is_thinking() && !self.machine_due() && !self.timeline.outcome().is_terminal()
    }

    /// Plays a human move at `pos`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] on the machine's turn, otherwise whatever the
    /// timeline rejects.
    #[instrument(skip(self))]
    pub fn human_play(&mut self, pos: Position) -> Result<(), SessionError> {
        if self.is_thinking() || self.machine_due() {
            return Err(SessionError::Busy);
        }
        self.timeline.play(pos)?;
        self.after_mutation();
        Ok(())
    }

    /// Shows snapshot `index`, cancelling any pending machine move.
    ///
    /// # Errors
    ///
    /// [`PlayError::NoSuchMove`] when `index` is out of range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.timeline.len() {
            return Err(PlayError::NoSuchMove {
                requested: index,
                len: self.timeline.len(),
            }
            .into());
        }
        self.cancel_pending();
        self.timeline.jump_to(index)?;
        self.after_mutation();
        Ok(())
    }

    /// Starts over, optionally in another mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Option<GameMode>) {
        self.cancel_pending();
        self.timeline.reset(mode);
        self.after_mutation();
    }

    /// Switches between local and machine play. Always resets.
    pub fn toggle_mode(&mut self) {
        let mode = self.mode().toggle();
        self.reset(Some(mode));
    }

    /// Applies a scheduled event.
    ///
    /// Returns the machine's decision when a move was played.
    ///
    /// # Errors
    ///
    /// [`PlayError::StaleTicket`] when the event belongs to a cancelled or
    /// superseded schedule; nothing changes in that case.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<Option<Decision>, SessionError> {
        match event {
            SessionEvent::MachineDue(ticket) => {
                let is_current = self
                    .pending
                    .as_ref()
                    .is_some_and(|pending| pending.ticket == ticket);
                if !is_current {
                    debug!(generation = ticket.generation(), "Ignoring stale machine event");
                    return Err(PlayError::StaleTicket.into());
                }
                self.pending = None;

                let Some(decision) = self.opponent.decide(ticket.board()) else {
                    warn!("Machine was scheduled on a full board");
                    return Ok(None);
                };
                if let Err(e) = self.timeline.play_ticketed(&ticket, decision.position) {
                    warn!(error = %e, "Machine move rejected");
                    self.after_mutation();
                    return Err(e.into());
                }
                info!(position = %decision.position, rule = %decision.rule, "Machine moved");
                self.after_mutation();
                Ok(Some(decision))
            }
        }
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> String {
        status_message(&self.timeline.outcome(), self.mode(), self.timeline.to_move())
    }

    fn after_mutation(&mut self) {
        if let Outcome::Winner { mark, .. } = self.timeline.outcome() {
            info!(winner = %mark, "Game over");
        }
        if self.machine_due() && self.pending.is_none() {
            self.schedule_machine();
        }
    }

    fn schedule_machine(&mut self) {
        let ticket = self.timeline.ticket();
        let events = self.events.clone();
        let delay = self.thinking_delay;
        let sent = ticket.clone();
        debug!(generation = ticket.generation(), ?delay, "Scheduling machine move");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(SessionEvent::MachineDue(sent)).is_err() {
                debug!("Session gone before machine move");
            }
        });
        self.pending = Some(PendingMove { ticket, handle });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(generation = pending.ticket.generation(), "Cancelling machine move");
            pending.handle.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Translates an outcome into the status line shown to players.
pub fn status_message(outcome: &Outcome, mode: GameMode, to_move: Player) -> String {
    match (outcome, mode) {
        (Outcome::Winner { mark, .. }, GameMode::PlayerVsMachine) => match mark {
            Player::X => "You win!".to_string(),
            Player::O => "The machine wins!".to_string(),
        },
        (Outcome::Winner { mark, .. }, GameMode::PlayerVsPlayer) => format!("{mark} wins!"),
        (Outcome::Draw, _) => "Draw!".to_string(),
        (Outcome::InProgress, GameMode::PlayerVsMachine) => match to_move {
            Player::X => "Your turn (X)".to_string(),
            Player::O => "Thinking...".to_string(),
        },
        (Outcome::InProgress, GameMode::PlayerVsPlayer) => format!("Next: {to_move}"),
    }
}

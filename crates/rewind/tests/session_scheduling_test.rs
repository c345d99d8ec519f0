//! Tests for the deferred machine move.

use rewind::{Session, SessionError, SessionEvent};
use rewind_tictactoe::{GameMode, PlayError, Player, Position, Rule, Square};
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;

const DELAY: Duration = Duration::from_millis(600);

#[tokio::test(start_paused = true)]
async fn test_machine_moves_after_delay() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::TopLeft).unwrap();
    assert!(session.is_thinking());
    assert_eq!(session.status(), "Thinking...");

    // Nothing arrives before the delay.
    tokio::time::advance(Duration::from_millis(599)).await;
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

    let event = rx.recv().await.unwrap();
    let decision = session.handle_event(event).unwrap().unwrap();

    assert_eq!(decision.position, Position::Center);
    assert_eq!(decision.rule, Rule::Center);
    assert_eq!(
        session.timeline().current().get(Position::Center),
        Square::Occupied(Player::O)
    );
    assert!(!session.is_thinking());
    assert_eq!(session.status(), "Your turn (X)");
}

#[tokio::test(start_paused = true)]
async fn test_jump_cancels_pending_move() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::TopLeft).unwrap();
    session.jump_to(0).unwrap();
    assert!(!session.is_thinking());

    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(session.timeline().len(), 2);
    assert_eq!(session.timeline().cursor(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_move() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::Center).unwrap();
    session.reset(None);

    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(session.timeline().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_event_in_flight_is_discarded_after_reset() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::Center).unwrap();
    let event = rx.recv().await.unwrap();

    session.reset(None);
    let before = session.timeline().clone();
    assert_eq!(
        session.handle_event(event),
        Err(SessionError::Play(PlayError::StaleTicket))
    );
    assert_eq!(session.timeline(), &before);
}

#[tokio::test(start_paused = true)]
async fn test_jump_to_machine_turn_reschedules() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::TopLeft).unwrap();
    let event = rx.recv().await.unwrap();
    session.handle_event(event).unwrap();
    session.human_play(Position::BottomRight).unwrap();
    let event = rx.recv().await.unwrap();
    session.handle_event(event).unwrap();
    assert_eq!(session.timeline().len(), 5);

    // Back to O's turn after X's first move: the machine plays again from there.
    session.jump_to(1).unwrap();
    assert!(session.is_thinking());
    let event = rx.recv().await.unwrap();
    session.handle_event(event).unwrap();
    assert_eq!(session.timeline().len(), 3);
    assert_eq!(session.timeline().cursor(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_mode_toggle_resets_and_cancels() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::Center).unwrap();
    session.toggle_mode();
    assert_eq!(session.mode(), GameMode::PlayerVsPlayer);
    assert_eq!(session.timeline().len(), 1);
    assert!(!session.is_thinking());

    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test(start_paused = true)]
async fn test_machine_blocks_and_wins() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(11));

    // X: 0, O: 4 (center)
    session.human_play(Position::TopLeft).unwrap();
    let e = rx.recv().await.unwrap();
    session.handle_event(e).unwrap();

    // X: 1 threatens the top row; O must block at 2.
    session.human_play(Position::TopCenter).unwrap();
    let e = rx.recv().await.unwrap();
    let decision = session.handle_event(e).unwrap().unwrap();
    assert_eq!((decision.position, decision.rule), (Position::TopRight, Rule::Block));

    // X: 8; O holds 2 and 4 and completes the anti-diagonal at 6.
    session.human_play(Position::BottomRight).unwrap();
    let e = rx.recv().await.unwrap();
    let decision = session.handle_event(e).unwrap().unwrap();
    assert_eq!((decision.position, decision.rule), (Position::BottomLeft, Rule::Win));

    assert_eq!(session.timeline().outcome().winner(), Some(Player::O));
    assert_eq!(session.status(), "The machine wins!");
    assert!(!session.accepts_input());
    assert!(session.human_play(Position::MiddleLeft).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_event_sent_before_jump_to_same_snapshot_is_discarded() {
    let (mut session, mut rx) = Session::new(GameMode::PlayerVsMachine, DELAY, Some(5));
    session.human_play(Position::TopLeft).unwrap();
    let early = rx.recv().await.unwrap();

    // Jumping onto the snapshot the machine was already due on issues a new ticket.
    session.jump_to(1).unwrap();
    assert!(session.is_thinking());
    assert_eq!(
        session.handle_event(early),
        Err(SessionError::Play(PlayError::StaleTicket))
    );
    assert_eq!(session.timeline().len(), 2);
    assert!(session.is_thinking());

    let fresh = rx.recv().await.unwrap();
    let decision = session.handle_event(fresh).unwrap().unwrap();
    assert_eq!(decision.position, Position::Center);
    assert_eq!(session.timeline().len(), 3);
    assert_eq!(session.timeline().cursor(), 2);
}

//! Stateless UI rendering.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Outcome, Player, Position, Square, Timeline};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let session = app.session();
    let title = Paragraph::new(format!("Rewind Tic-Tac-Toe  ·  {}", session.mode().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(32)])
        .split(chunks[1]);
    draw_board(frame, body[0], app);
    draw_history(frame, body[1], session.timeline());

    let outcome = session.timeline().outcome();
    let status_style = match outcome {
        Outcome::Winner { .. } => Style::default().fg(Color::Green),
        Outcome::Draw => Style::default().fg(Color::Yellow),
        Outcome::InProgress => Style::default().fg(Color::White),
    };
    let status = match app.notice() {
        Some(notice) => format!("{}  ({})", session.status(), notice),
        None => session.status(),
    };
    let status = Paragraph::new(status)
        .style(status_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/1-9 move · enter play · [ ] history · home/end · r reset · m mode · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let timeline = app.session().timeline();
    let board = timeline.current();
    let outcome = timeline.outcome();
    let accepts_input = app.session().accepts_input();

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let Some(pos) = Position::from_index(row * 3 + col) else {
                continue;
            };
            let (symbol, mut style) = match board.get(pos) {
                Square::Empty => (
                    format!(" {} ", pos.to_index() + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Square::Occupied(Player::X) => (
                    " X ".to_string(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Square::Occupied(Player::O) => (
                    " O ".to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            if outcome.contains(pos) {
                style = style.bg(Color::Green).fg(Color::Black);
            } else if pos == app.cursor() && accepts_input {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(symbol, style));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray)));
        }
    }

    let board_area = center_rect(area, 15, 7);
    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(grid, board_area);
}

fn draw_history(frame: &mut Frame, area: Rect, timeline: &Timeline) {
    let lines: Vec<Line> = (0..timeline.len())
        .map(|index| {
            let label = history_label(timeline, index);
            if index == timeline.cursor() {
                Line::styled(
                    format!("▶ {label}"),
                    Style::default().fg(Color::White).bg(Color::Magenta).add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(format!("  {label}"), Style::default().fg(Color::Gray))
            }
        })
        .collect();

    // Keep the current entry visible in short terminals.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = timeline.cursor().saturating_sub(visible.saturating_sub(1));

    let list = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Label for one entry of the history list.
pub fn history_label(timeline: &Timeline, index: usize) -> String {
    match timeline.move_at(index) {
        None => "Game start".to_string(),
        Some(mv) => format!("Move #{index}: {} {}", mv.player, mv.position),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

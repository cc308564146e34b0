//! TUI rendering with ratatui
//!
//! Board of letter tiles, coloured keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{GuessResult, LetterState};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Colours for a tile or key in a given state
fn tile_style(state: Option<LetterState>) -> Style {
    match state {
        Some(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, state: Option<LetterState>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(state),
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GUESS 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn result_line(result: &GuessResult) -> Line<'static> {
    let mut spans = Vec::with_capacity(result.len() * 2);
    for t in result.tiles() {
        spans.push(tile(t.letter, Some(t.state)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn pending_line(pending: &str, word_length: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(word_length * 2);
    let mut letters = pending.chars();
    for _ in 0..word_length {
        let span = match letters.next() {
            Some(c) => Span::styled(
                format!(" {} ", c.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_line(word_length: usize) -> Line<'static> {
    Line::from(Span::styled(
        " ·  ".repeat(word_length),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let word_length = session.word_length();

    let mut lines: Vec<Line> = session.history().iter().map(result_line).collect();

    if session.status() == GameStatus::InProgress && lines.len() < session.max_attempts() {
        lines.push(pending_line(session.pending_input(), word_length));
    }

    while lines.len() < session.max_attempts() {
        lines.push(empty_line(word_length));
    }

    let title = format!(
        " Guess {}/{} ",
        session.attempts_used().min(session.max_attempts()),
        session.max_attempts()
    );

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .session
        .keyboard()
        .rows()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|(key, state)| [tile(key, state), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    if app.session.status().is_over() {
        for row in app.session.history() {
            items.push(ListItem::new(row.share_row()));
        }
    }

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Game: {}", app.session.status()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.status().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Type letters | Backspace | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

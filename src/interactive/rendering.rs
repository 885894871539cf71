//! TUI rendering with ratatui
//!
//! The whole screen is redrawn from session state after every transition.

use super::app::{App, MessageStyle};
use crate::core::{Correctness, Outcome, ROUNDS, Row};
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
            Constraint::Length(1), // Info bar
            Constraint::Min(14), // Board
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_info_bar(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Background colour for a tile
#[must_use]
pub fn tile_style(correctness: Correctness) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match correctness {
        Correctness::Correct => base.fg(Color::Black).bg(Color::Green),
        Correctness::Close => base.fg(Color::Black).bg(Color::Yellow),
        Correctness::Incorrect => base.fg(Color::White).bg(Color::DarkGray),
        Correctness::Invalid => base.fg(Color::White).bg(Color::Red),
        Correctness::None => base.fg(Color::White).bg(Color::Black),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let won = app.session.game().outcome() == Outcome::Won;
    let (title, color) = if won {
        ("🏆 WORD MASTERS 🏆", Color::Green)
    } else {
        ("WORD MASTERS", Color::Cyan)
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

fn render_info_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.session.is_loading() {
        "🌀 Loading..."
    } else {
        ""
    };
    let info = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(info, area);
}

fn board_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, letter) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", letter.letter()),
            tile_style(letter.correctness()),
        ));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(ROUNDS * 2);
    for row in app.session.board() {
        lines.push(board_line(&row));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Round {}/{ROUNDS} ", app.session.game().round()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.game().is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

//! TUI rendering with ratatui
//!
//! The guess grid on the left, candidates and messages on the right.

use super::app::{App, MessageStyle};
use crate::core::Feedback;
use crate::engine::{Row, SessionState};
use crate::output::formatters::status_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

const HELP: &str = "Enter: Submit | ←/→ Cell | Space/1/2/3: Color | ↑/↓ Tab: Pick | ^R Random | ^N New | Esc Quit";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(7)])
        .split(main_chunks[1]);

    render_candidates(f, app, side[0]);
    render_messages(f, app, side[1]);

    let help = Paragraph::new(HELP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE ASSIST")
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

const fn tile_color(color: Feedback) -> Color {
    match color {
        Feedback::Correct => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn row_line(row: &Row, cursor: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, (&cell, &color)) in row.cells().iter().zip(row.colors()).enumerate() {
        let mut style = Style::default()
            .fg(Color::Black)
            .bg(tile_color(color))
            .add_modifier(Modifier::BOLD);
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {} ", cell.map_or('·', char::from)), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let config = session.config();
    let cursor_row = (!session.game_over()).then(|| session.current_row_index());

    let mut lines = Vec::with_capacity(config.num_tries * 2);
    for index in 0..config.num_tries {
        let cursor = (cursor_row == Some(index)).then_some(app.color_cursor);
        let line = match session.rows().get(index) {
            Some(row) => row_line(row, cursor),
            None => row_line(&Row::new(config.word_length), None),
        };
        lines.push(line);
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title_color = match session.state() {
        SessionState::Solved => Color::Green,
        SessionState::Empty | SessionState::Exhausted => Color::Red,
        SessionState::Active => Color::Cyan,
    };

    let items: Vec<ListItem> = session
        .candidates()
        .iter()
        .map(|w| ListItem::new(w.text().to_string()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", status_text(session)),
                    Style::default()
                        .fg(title_color)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !session.candidates().is_empty() {
        state.select(Some(app.highlight));
    }
    f.render_stateful_widget(list, area, &mut state);
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

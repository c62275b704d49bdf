//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and a status bar.

use super::app::{App, MessageStyle, Statistics};
use super::board::{BoardView, KeyboardHints};
use crate::core::{LetterStatus, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.board.max_rows()).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(4),               // Messages
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.board, chunks[1]);
    render_keyboard(f, app.board.keyboard(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile colors for a status (or an unscored tile)
fn status_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {letter} "), status_style(status))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LEXIGUESS")
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

fn board_lines(board: &BoardView) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.max_rows());

    for guess in board.rows() {
        let spans: Vec<Span> = guess
            .word
            .chars()
            .iter()
            .zip(guess.feedback.statuses())
            .flat_map(|(&letter, &status)| [tile(char::from(letter), Some(status)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    if !board.is_locked() && board.current_row() < board.max_rows() {
        let mut letters = board.pending().chars();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [tile(letters.next().unwrap_or('_'), None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < board.max_rows() {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [tile('·', None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans).style(Style::default().fg(Color::DarkGray)));
    }

    lines
}

fn render_board(f: &mut Frame, board: &BoardView, area: Rect) {
    let paragraph = Paragraph::new(board_lines(board))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn keyboard_lines(hints: &KeyboardHints) -> Vec<Line<'static>> {
    KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| {
                    Span::styled(
                        format!(" {} ", char::from(key)),
                        status_style(hints.get(key)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, hints: &KeyboardHints, area: Rect) {
    let paragraph = Paragraph::new(keyboard_lines(hints))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(45),
            Constraint::Percentage(35),
        ])
        .split(area);

    let attempt_text = format!(
        "Guess {}/{}",
        (app.board.current_row() + 1).min(app.board.max_rows()),
        app.board.max_rows()
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(stats_text(&app.stats)).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.board.is_locked() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Ctrl-R: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn stats_text(stats: &Statistics) -> String {
    format!(
        "Games: {} | Wins: {} | {}",
        stats.total_games,
        stats.games_won,
        stats.distribution_summary()
    )
}

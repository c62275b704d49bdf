//! TUI application state and logic

use super::board::BoardView;
use crate::api::GameService;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, instrument};

/// Application state
pub struct App<'a> {
    pub service: &'a GameService,
    pub player: String,
    pub board: BoardView,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 counts one-guess wins
    guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Empty statistics for games of up to `max_attempts` guesses
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts],
        }
    }

    /// Count a finished game
    pub fn record(&mut self, won: bool, guesses: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            if let Some(slot) = guesses
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        }
    }

    /// Wins per guess count, starting at one guess
    #[must_use]
    pub fn distribution(&self) -> &[usize] {
        &self.guess_distribution
    }

    /// Distribution as `1:0 2:3 3:1 ...`
    #[must_use]
    pub fn distribution_summary(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .map(|(i, wins)| format!("{}:{wins}", i + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> App<'a> {
    /// Create the app and restore whatever game `player` already has
    #[must_use]
    pub fn new(service: &'a GameService, player: impl Into<String>) -> Self {
        let player = player.into();
        let board = BoardView::from_state(&service.state(&player), service.max_attempts());

        let mut app = Self {
            service,
            player,
            board,
            messages: Vec::new(),
            stats: Statistics::new(service.max_attempts()),
            should_quit: false,
        };

        if app.board.rows().is_empty() {
            app.add_message(
                "Guess the five-letter word in six tries.",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Restored your game in progress.", MessageStyle::Info);
        }
        app.announce_outcome();
        app
    }

    /// Submit the pending row
    pub fn submit(&mut self) {
        if !self.board.is_pending_complete() {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        match self.service.submit(&self.player, self.board.pending()) {
            Ok(response) => {
                self.board.apply_guess(&response);
                if self.board.is_locked() {
                    self.record_result();
                    self.announce_outcome();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        let response = self.service.reset(&self.player);
        self.board.reset();
        self.messages.clear();
        self.add_message(&response.message, MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.board.is_locked() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.board.pop_letter();
            }
            KeyCode::Char(c) => {
                self.board.push_letter(c);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn record_result(&mut self) {
        self.stats
            .record(self.board.is_won(), self.board.rows().len());
    }

    fn announce_outcome(&mut self) {
        if !self.board.is_locked() {
            return;
        }

        if self.board.is_won() {
            let celebration = match self.board.rows().len() {
                1 => "🎯 HOLE IN ONE! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let target = self
                .board
                .target()
                .map_or_else(|| "?????".to_string(), ToString::to_string);
            self.add_message(&format!("Word was: {target}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
#[instrument(skip(app), fields(player = %app.player))]
pub fn run_tui(app: App) -> Result<()> {
    info!("Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! Game session state machine
//!
//! A session starts `InProgress` and moves to `Won` or `Lost` exactly once.
//! History is append-only; terminal sessions accept nothing until replaced.

use super::GameError;
use crate::core::{Feedback, Word};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// A game must allow at least one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("A game must allow at least one guess")]
pub struct ZeroAttempts;

/// Tunable game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
}

impl GameConfig {
    /// Rules allowing `max_attempts` guesses per game
    ///
    /// # Errors
    ///
    /// Returns `ZeroAttempts` if `max_attempts` is zero.
    pub const fn new(max_attempts: usize) -> Result<Self, ZeroAttempts> {
        if max_attempts == 0 {
            return Err(ZeroAttempts);
        }
        Ok(Self { max_attempts })
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and lost are terminal
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One scored guess, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// One player's game
///
/// Fields are private so the only mutation path is [`Session::submit`], which
/// keeps `history.len() <= max_attempts` and the status in step with history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    target: Word,
    history: Vec<GuessRecord>,
    max_attempts: usize,
    status: GameStatus,
}

impl Session {
    /// Start a fresh game against `target`
    #[must_use]
    pub fn new(target: Word, config: GameConfig) -> Self {
        Self {
            target,
            history: Vec::with_capacity(config.max_attempts),
            max_attempts: config.max_attempts,
            status: GameStatus::InProgress,
        }
    }

    /// Score `guess`, record it and advance the state machine
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionTerminal` if the game is already won or
    /// lost, or has no attempts left. Nothing is recorded in that case.
    ///
    /// # Examples
    /// ```
    /// use lexiguess::core::Word;
    /// use lexiguess::game::{GameConfig, GameStatus, Session};
    ///
    /// let mut session = Session::new(Word::new("alloy").unwrap(), GameConfig::default());
    /// let record = session.submit(Word::new("alloy").unwrap()).unwrap();
    ///
    /// assert!(record.feedback().is_solved());
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, guess: Word) -> Result<GuessRecord, GameError> {
        if self.status.is_terminal() || self.history.len() >= self.max_attempts {
            return Err(GameError::SessionTerminal);
        }

        let feedback = Feedback::score(&self.target, &guess);
        let record = GuessRecord::new(guess, feedback);
        self.history.push(record.clone());

        if feedback.is_solved() {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.max_attempts {
            self.status = GameStatus::Lost;
        }

        Ok(record)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The target, but only once the game is lost
    ///
    /// There is no unconditional accessor.
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        (self.status == GameStatus::Lost).then_some(&self.target)
    }

    /// Emoji grid of the guesses so far, one row per guess
    ///
    /// The header reads `LexiGuess 3/6`, or `X/6` for a lost game.
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = match self.status {
            GameStatus::Won => self.history.len().to_string(),
            GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
        };

        let mut grid = format!("LexiGuess {score}/{}", self.max_attempts);
        for record in &self.history {
            grid.push('\n');
            grid.push_str(&record.feedback.to_emoji());
        }
        grid
    }
}

//! Game error types.

use crate::core::{WORD_LENGTH, WordError};
use derive_more::{Display, Error};

/// Rejection of a single request.
///
/// Every variant is recoverable: the request that produced it changed
/// nothing, and the session remains usable (or, for `SessionTerminal`,
/// resettable).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Guess is not exactly five characters long.
    #[display("Guess must be exactly {} letters, got {}", WORD_LENGTH, len)]
    InvalidLength { len: usize },
    /// Guess contains something other than A-Z.
    #[display("Guess must contain only the letters A-Z")]
    InvalidCharacters,
    /// Guess is well-formed but rejected by the dictionary policy.
    #[display("{} is not in the word list", word)]
    NotInWordList { word: String },
    /// Session already won or lost.
    #[display("Game is over. Reset to play again.")]
    SessionTerminal,
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { len } => Self::InvalidLength { len },
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

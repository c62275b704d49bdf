//! Core domain types for the game
//!
//! Words and the guess evaluator. Everything here is pure: no I/O, no shared
//! state, safe to call from any number of sessions at once.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};

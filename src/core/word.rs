//! Word representation
//!
//! A Word stores a validated 5-letter word, normalised to uppercase.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word made of the letters A-Z
///
/// Used for both the secret target and the player's guesses. Construction is
/// the only place where input is validated, so holding a `Word` means the
/// letters are already known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    #[display("Guess must be exactly {} letters, got {}", WORD_LENGTH, len)]
    InvalidLength { len: usize },
    #[display("Guess must contain only the letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive. Surrounding whitespace is not trimmed here;
    /// callers at the input boundary do that before constructing.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside A-Z / a-z
    ///
    /// # Examples
    /// ```
    /// use lexiguess::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength { len });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength { len })?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator to bound duplicate-letter marks.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength { len: 8 })
        );
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength { len: 4 }));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength { len: 0 }));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, but more than five bytes
        assert_eq!(Word::new("héllo"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(2), b'A');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("alloy").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'A'), Some(&1));
        assert_eq!(counts.get(&b'L'), Some(&2));
        assert_eq!(counts.get(&b'O'), Some(&1));
        assert_eq!(counts.get(&b'Y'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_letter_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_serializes_as_plain_string() {
        let word = Word::new("crane").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"CRANE\"");

        let back: Word = serde_json::from_str("\"slate\"").unwrap();
        assert_eq!(back.text(), "SLATE");
        assert!(serde_json::from_str::<Word>("\"sl4te\"").is_err());
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength { len: 4 }.to_string(),
            "Guess must be exactly 5 letters, got 4"
        );
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "Guess must contain only the letters A-Z"
        );
    }
}

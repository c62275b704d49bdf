//! Formatting utilities for terminal output

use crate::api::GuessView;
use crate::core::LetterStatus;
use crate::interactive::KeyboardHints;
use colored::{ColoredString, Colorize};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of tiles
#[must_use]
pub fn guess_row(guess: &GuessView) -> String {
    guess
        .word
        .chars()
        .iter()
        .zip(guess.feedback.statuses())
        .map(|(&letter, &status)| tile(char::from(letter), Some(status)).to_string())
        .collect()
}

/// The QWERTY keyboard, each key colored by its best known status
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|key| tile(char::from(key), hints.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

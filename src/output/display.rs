//! Printing boards and game outcomes

use super::formatters::{guess_row, keyboard_rows, tile};
use crate::api::StateResponse;
use crate::core::WORD_LENGTH;
use crate::interactive::KeyboardHints;
use colored::Colorize;

/// Print every row played so far, blank rows for the rest, then the keyboard
pub fn print_board(state: &StateResponse, max_rows: usize) {
    let mut hints = KeyboardHints::new();

    println!();
    for guess in &state.guesses {
        hints.observe_guess(guess);
        println!("  {}", guess_row(guess));
    }
    for _ in state.guesses.len()..max_rows {
        let blank: String = (0..WORD_LENGTH)
            .map(|_| tile('·', None).bright_black().to_string())
            .collect();
        println!("  {blank}");
    }

    println!();
    for row in keyboard_rows(&hints) {
        println!("  {row}");
    }
    println!();
}

/// Announce a finished game
pub fn print_outcome(state: &StateResponse, share_grid: &str) {
    println!("{}", "─".repeat(40).cyan());
    if state.win {
        let guesses = state.guesses.len();
        println!(
            "{}",
            format!(
                "🎉 Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else if let Some(target) = &state.target {
        println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            target.text().bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(40).cyan());
    println!("\n{share_grid}\n");
}

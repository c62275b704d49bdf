//! Simple line-based game
//!
//! Plays in the scrollback instead of a full-screen TUI.

use crate::api::GameService;
use crate::output::{print_board, print_outcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{info, instrument};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Guess(String),
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::NewGame),
            _ => Some(Self::Guess(line.to_string())),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
#[instrument(skip(service))]
pub fn run_simple(service: &GameService, player: &str) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║            LexiGuess - Simple            ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Guess the five-letter word in {} tries.",
        service.max_attempts()
    );
    println!("🟩 right letter, right spot  🟨 right letter, wrong spot  ⬜ not in the word");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let max_rows = service.max_attempts();
    let state = service.state(player);
    print_board(&state, max_rows);
    if state.is_over() {
        print_outcome(&state, &service.share_grid(player));
        if !play_again(service, player)? {
            return Ok(());
        }
    }

    loop {
        let Some(line) = get_user_input("Guess")? else {
            break;
        };

        match Input::parse(&line) {
            None => {}
            Some(Input::Quit) => break,
            Some(Input::NewGame) => {
                start_over(service, player);
            }
            Some(Input::Guess(guess)) => match service.submit(player, &guess) {
                Ok(response) => {
                    let state = service.state(player);
                    print_board(&state, max_rows);
                    println!(
                        "  {} in place, {} misplaced\n",
                        response.feedback.count_correct(),
                        response.feedback.count_present()
                    );
                    if response.win || response.lose {
                        info!(won = response.win, guesses = state.guesses.len(), "Game finished");
                        print_outcome(&state, &service.share_grid(player));
                        if !play_again(service, player)? {
                            break;
                        }
                    }
                }
                Err(err) => println!("{}\n", format!("❌ {err}").red()),
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Ask whether to start over; resets the game on yes
fn play_again(service: &GameService, player: &str) -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
        start_over(service, player);
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Reset the game and show the empty board
fn start_over(service: &GameService, player: &str) {
    let response = service.reset(player);
    println!("\n🔄 {}", response.message);
    print_board(&service.state(player), service.max_attempts());
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_case_insensitively() {
        assert_eq!(Input::parse("QUIT"), Some(Input::Quit));
        assert_eq!(Input::parse(" q \n"), Some(Input::Quit));
        assert_eq!(Input::parse("New"), Some(Input::NewGame));
        assert_eq!(Input::parse("   "), None);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(
            Input::parse(" Crane "),
            Some(Input::Guess("Crane".to_string()))
        );
        assert_eq!(Input::parse("ab1"), Some(Input::Guess("ab1".to_string())));
    }
}

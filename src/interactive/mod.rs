//! Interactive TUI mode
//!
//! Full-screen board with keyboard hints, built on ratatui.

mod app;
pub mod board;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use board::{BoardView, KeyboardHints};

//! Terminal output formatting
//!
//! Colored tiles and boards for the line-based front-end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome};

//! LexiGuess
//!
//! A five-letter word guessing game: a hidden target, six attempts, and
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use lexiguess::api::GameService;
//! use lexiguess::game::{AcceptAll, GameConfig, RandomSelector, SessionStore};
//! use lexiguess::wordlists::{WORDS, loader::words_from_slice};
//!
//! let selector = RandomSelector::new(words_from_slice(WORDS), Some(7)).unwrap();
//! let service = GameService::new(SessionStore::new(
//!     Box::new(selector),
//!     Box::new(AcceptAll),
//!     GameConfig::default(),
//! ));
//!
//! let response = service.submit("player-1", "crane").unwrap();
//! assert_eq!(response.guesses.len(), 1);
//! assert!(!response.lose);
//! assert_eq!(response.target, None);
//! ```

// Core domain types
pub mod core;

// Session state machine and store
pub mod game;

// Boundary payloads and service facade
pub mod api;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

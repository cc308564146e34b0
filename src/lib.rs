//! Word Guess
//!
//! The evaluation core of a word-guessing game: duplicate-aware guess scoring,
//! per-letter keyboard knowledge, and a session state machine with attempt
//! limits and shareable results.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::Word;
//! use wordle_clone::game::{Dictionary, GameSession, GameStatus, LengthBounds};
//!
//! let words = Dictionary::new(
//!     ["crane", "trace"].map(|w| Word::new(w).unwrap()),
//!     LengthBounds::default(),
//! );
//! let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
//!
//! session.submit_guess("trace").unwrap();
//! assert_eq!(session.submit_guess("crane"), Ok(GameStatus::Won));
//! println!("{}", session.share_text());
//! ```

// Core domain types
pub mod core;

// Session lifecycle
pub mod game;

// Shared settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

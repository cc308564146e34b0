//! Core domain types for the game
//!
//! Letter states, words, guess evaluation and keyboard knowledge. Everything
//! here is pure: no I/O, no randomness, no hidden state.

mod evaluation;
mod keyboard;
mod letter_state;
mod word;

pub use evaluation::{GuessResult, Tile};
pub use keyboard::{KEYBOARD_ROWS, KeyboardKnowledge};
pub use letter_state::LetterState;
pub use word::{Word, WordError};

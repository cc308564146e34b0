//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, plus loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

//! Game lifecycle
//!
//! Word sources, the guess-by-guess session state machine, and share text.

mod dictionary;
mod session;
mod share;

pub use dictionary::{Dictionary, LengthBounds, WordSource};
pub use session::{GameError, GameSession, GameStatus, GuessError};
pub use share::{SHARE_HEADER, render_share_text};

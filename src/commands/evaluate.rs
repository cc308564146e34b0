//! Single guess evaluation command
//!
//! Scores one guess against a chosen target without starting a game.

use crate::core::{GuessResult, Word};

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not made of letters only
/// - The two words differ in length
pub fn evaluate_guess(target: &str, guess: &str) -> Result<GuessResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    GuessResult::evaluate(target.text(), guess.text()).ok_or_else(|| {
        format!(
            "Guess has {} letters but the target has {}",
            guess.len(),
            target.len()
        )
    })
}

//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardKnowledge, LetterState};
use colored::{ColoredString, Colorize};

/// Format one letter as a coloured tile
#[must_use]
pub fn colored_tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Format a scored guess as a row of coloured tiles
#[must_use]
pub fn tile_row(result: &GuessResult) -> String {
    result
        .tiles()
        .iter()
        .map(|tile| colored_tile(tile.letter, Some(tile.state)).to_string())
        .collect()
}

/// Format the keyboard, one string per row, indented like a real keyboard
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardKnowledge) -> Vec<String> {
    keyboard
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .into_iter()
                .map(|(key, state)| colored_tile(key, state).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

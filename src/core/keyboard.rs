//! Keyboard knowledge
//!
//! Tracks the best `LetterState` seen for each letter across every guess in a
//! game. Each accepted guess is merged in once; a letter's state only ever
//! moves up (`Absent` -> `Present` -> `Correct`).

use super::{GuessResult, LetterState};
use rustc_hash::FxHashMap;

/// Keyboard rows in display order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known state per letter
///
/// Letters with no entry have not been guessed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardKnowledge {
    letters: FxHashMap<char, LetterState>,
}

impl KeyboardKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best known state for a letter, or `None` if it has never been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterState> {
        self.letters.get(&letter).copied()
    }

    /// Record one observation of a letter
    ///
    /// Characters outside `a`-`z` have no key and are ignored.
    pub fn record(&mut self, letter: char, state: LetterState) {
        if !letter.is_ascii_lowercase() {
            return;
        }

        self.letters
            .entry(letter)
            .and_modify(|known| *known = known.merge(state))
            .or_insert(state);
    }

    /// Fold every tile of a guess result into the knowledge
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{GuessResult, KeyboardKnowledge, LetterState};
    ///
    /// let mut keyboard = KeyboardKnowledge::new();
    /// keyboard.merge(&GuessResult::evaluate("crane", "trace").unwrap());
    ///
    /// assert_eq!(keyboard.get('r'), Some(LetterState::Correct));
    /// assert_eq!(keyboard.get('c'), Some(LetterState::Present));
    /// assert_eq!(keyboard.get('t'), Some(LetterState::Absent));
    /// assert_eq!(keyboard.get('z'), None);
    /// ```
    pub fn merge(&mut self, result: &GuessResult) {
        for tile in result.tiles() {
            self.record(tile.letter, tile.state);
        }
    }

    /// Number of letters with any information
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// All known letters with their state, sorted alphabetically
    #[must_use]
    pub fn known_letters(&self) -> Vec<(char, LetterState)> {
        let mut known: Vec<_> = self.letters.iter().map(|(&c, &s)| (c, s)).collect();
        known.sort_unstable_by_key(|&(c, _)| c);
        known
    }

    /// Keyboard rows paired with each key's state, ready for drawing
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(char, Option<LetterState>)>> {
        KEYBOARD_ROWS
            .iter()
            .map(|row| row.chars().map(|key| (key, self.get(key))).collect())
            .collect()
    }
}

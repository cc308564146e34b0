//! Guess evaluation
//!
//! Scores a guess against the target word letter by letter. Duplicate letters
//! are handled the same way the game has always done it: every physical
//! occurrence of a letter in the target can satisfy at most one guessed tile,
//! and exact matches claim their occurrence before anything else.

use super::LetterState;
use std::fmt;

/// One scored tile of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: char,
    pub state: LetterState,
}

/// The scored tiles of one guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    tiles: Vec<Tile>,
}

/// Letters that can ever match; anything else is scored `Absent`
#[inline]
const fn is_alphabet(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

impl GuessResult {
    /// Score `guess` against `target`
    ///
    /// Both words are compared case-insensitively and the tiles carry the
    /// lowercase letters. Returns `None` when the two differ in length;
    /// callers are expected to reject such guesses before scoring them.
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches are `Correct` and consume their
    ///    target occurrence
    /// 2. Second pass: each remaining tile takes the first unconsumed
    ///    occurrence of its letter in the target and becomes `Present`
    /// 3. Everything else is `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{GuessResult, LetterState::*};
    ///
    /// let result = GuessResult::evaluate("crane", "trace").unwrap();
    /// assert_eq!(result.states(), vec![Absent, Correct, Correct, Present, Correct]);
    ///
    /// assert!(GuessResult::evaluate("crane", "cranes").is_none());
    /// ```
    #[must_use]
    pub fn evaluate(target: &str, guess: &str) -> Option<Self> {
        let target: Vec<char> = target.chars().map(|c| c.to_ascii_lowercase()).collect();
        let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_lowercase()).collect();

        if target.len() != guess.len() {
            return None;
        }

        let mut states = vec![LetterState::Absent; guess.len()];
        let mut consumed = vec![false; target.len()];

        // First pass: greens
        for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
            if is_alphabet(g) && g == t {
                states[i] = LetterState::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: yellows from whatever the greens left over
        for (i, &g) in guess.iter().enumerate() {
            if states[i] == LetterState::Correct || !is_alphabet(g) {
                continue;
            }

            if let Some(j) = (0..target.len()).find(|&j| !consumed[j] && target[j] == g) {
                states[i] = LetterState::Present;
                consumed[j] = true;
            }
        }

        let tiles = guess
            .into_iter()
            .zip(states)
            .map(|(letter, state)| Tile { letter, state })
            .collect();

        Some(Self { tiles })
    }

    /// The scored tiles, in guess order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The state of each tile, in guess order
    #[must_use]
    pub fn states(&self) -> Vec<LetterState> {
        self.tiles.iter().map(|tile| tile.state).collect()
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True when every tile is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(|tile| tile.state.is_correct())
    }

    /// Number of tiles with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.tiles.iter().filter(|tile| tile.state == state).count()
    }

    /// The share-glyph row for this guess
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::GuessResult;
    ///
    /// let result = GuessResult::evaluate("crane", "crane").unwrap();
    /// assert_eq!(result.share_row(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_row(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| tile.state.share_glyph())
            .collect()
    }

    /// Whether `candidate`, were it the target, would have produced this result
    #[must_use]
    pub fn admits(&self, candidate: &str) -> bool {
        Self::evaluate(candidate, &self.word()).is_some_and(|scored| scored == *self)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            let marker = match tile.state {
                LetterState::Correct => tile.letter.to_ascii_uppercase(),
                LetterState::Present => tile.letter,
                LetterState::Absent => '-',
            };
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

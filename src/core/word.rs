//! Playable word representation
//!
//! A `Word` is a validated, lowercase, ASCII-alphabetic word. Unlike a guess
//! typed by a player, a `Word` is guaranteed to only contain letters that can
//! appear on the keyboard.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII characters
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // ASCII only, so bytes == chars
        self.text.len()
    }

    /// Always false; empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters of the word
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

//! Word sources
//!
//! A word source answers two questions for a game: which words may be picked
//! as the target, and whether a typed guess is a real word.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;

/// Inclusive bounds on playable word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    /// Shortest playable word by default
    pub const DEFAULT_MIN: usize = 4;
    /// Longest playable word by default
    pub const DEFAULT_MAX: usize = 6;

    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// Anything that can supply targets and validate guesses
pub trait WordSource {
    /// Whether `candidate` is an accepted guess
    fn is_valid_word(&self, candidate: &str) -> bool;

    /// Number of words that can be chosen as a target
    fn len(&self) -> usize;

    /// The target word at `index`, for `index` in `0..len()`
    fn word_at(&self, index: usize) -> Option<&Word>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Word list restricted to a length range
///
/// Keeps the words in their original order (duplicates dropped) so that a
/// seeded index always picks the same target.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
    bounds: LengthBounds,
}

impl Dictionary {
    /// Build a dictionary from words, keeping only those within `bounds`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    /// use wordle_clone::game::{Dictionary, LengthBounds, WordSource};
    ///
    /// let words = ["cat", "cake", "crane", "garden", "gardens"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words, LengthBounds::default());
    ///
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.is_valid_word("crane"));
    /// assert!(!dictionary.is_valid_word("cat"));
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>, bounds: LengthBounds) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| bounds.contains(word.len()))
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        Self {
            words,
            index,
            bounds,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// All words, in list order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words with exactly `len` letters
    pub fn words_of_length(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |word| word.len() == len)
    }
}

impl WordSource for Dictionary {
    fn is_valid_word(&self, candidate: &str) -> bool {
        self.index.contains(candidate)
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn word_at(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }
}

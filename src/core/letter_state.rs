//! Per-letter feedback state
//!
//! A `LetterState` is what the game knows about one guessed tile or one
//! keyboard key:
//! - `Absent`: the letter is not in the target (or every copy is already matched)
//! - `Present`: the letter is in the target at another position
//! - `Correct`: the letter is in the right position
//!
//! States are ordered by information, `Absent < Present < Correct`, so merging
//! two observations is simply taking the maximum.

use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Glyph used for this state in shared results
    ///
    /// The black square carries a trailing U+FE0F variation selector so it
    /// renders as an emoji next to the coloured squares.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::LetterState;
    ///
    /// assert_eq!(LetterState::Correct.share_glyph(), "🟩");
    /// assert_eq!(LetterState::Present.share_glyph(), "🟨");
    /// assert_eq!(LetterState::Absent.share_glyph(), "⬛\u{fe0f}");
    /// ```
    #[must_use]
    pub const fn share_glyph(self) -> &'static str {
        match self {
            Self::Correct => "🟩",
            Self::Present => "🟨",
            Self::Absent => "⬛\u{fe0f}",
        }
    }

    /// Combine two observations of the same letter, keeping the more informative one
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::LetterState;
    ///
    /// assert_eq!(LetterState::Present.merge(LetterState::Absent), LetterState::Present);
    /// assert_eq!(LetterState::Present.merge(LetterState::Correct), LetterState::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

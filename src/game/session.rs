//! Game session
//!
//! A `GameSession` owns everything about one game: the target word, the
//! attempt budget, the history of scored guesses, the keyboard knowledge and
//! the letters typed so far. Every rejected guess leaves the session exactly
//! as it was.

use super::dictionary::{Dictionary, WordSource};
use super::share::{SHARE_HEADER, render_share_text};
use crate::core::{GuessResult, KeyboardKnowledge, Word};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    NotAWord(String),
    #[error("all {0} attempts have been used")]
    AttemptsExhausted(usize),
    #[error("the game has already been won")]
    SessionAlreadyWon,
    #[error("the game has already been lost")]
    SessionAlreadyLost,
}

/// Why a session could not be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the word list has no playable words")]
    EmptyWordList,
}

/// One game against a fixed target word
#[derive(Debug, Clone)]
pub struct GameSession<'a, W: WordSource + ?Sized = Dictionary> {
    words: &'a W,
    target: Word,
    max_attempts: usize,
    history: Vec<GuessResult>,
    keyboard: KeyboardKnowledge,
    pending: String,
    status: GameStatus,
}

impl<'a, W: WordSource + ?Sized> GameSession<'a, W> {
    /// Start a game against `target`, validating guesses with `words`
    ///
    /// The attempt budget is one more than the target's length.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    /// use wordle_clone::game::{Dictionary, GameSession, GameStatus, LengthBounds};
    ///
    /// let words = Dictionary::new(
    ///     ["crane", "trace"].map(|w| Word::new(w).unwrap()),
    ///     LengthBounds::default(),
    /// );
    /// let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
    /// assert_eq!(session.max_attempts(), 6);
    ///
    /// assert_eq!(session.submit_guess("trace"), Ok(GameStatus::InProgress));
    /// assert_eq!(session.submit_guess("crane"), Ok(GameStatus::Won));
    /// ```
    #[must_use]
    pub fn new(target: Word, words: &'a W) -> Self {
        let max_attempts = target.len() + 1;
        Self {
            words,
            target,
            max_attempts,
            history: Vec::new(),
            keyboard: KeyboardKnowledge::new(),
            pending: String::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game against a target drawn uniformly from `words`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` has nothing to pick.
    pub fn start<R: Rng>(words: &'a W, rng: &mut R) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        let index = rng.random_range(0..words.len());
        let target = words
            .word_at(index)
            .cloned()
            .ok_or(GameError::EmptyWordList)?;

        Ok(Self::new(target, words))
    }

    /// Replace the attempt budget
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The target word
    ///
    /// Presentation layers should only reveal it once the game is over.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Scored guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardKnowledge {
        &self.keyboard
    }

    /// Letters typed since the last accepted guess
    #[inline]
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Submit a guess
    ///
    /// The candidate is lowercased before any check. On success the guess is
    /// scored, recorded, merged into the keyboard, the pending input is
    /// cleared and the new status is returned.
    ///
    /// # Errors
    /// - `SessionAlreadyWon` / `SessionAlreadyLost` once the game is over
    /// - `InvalidLength` if the guess length differs from the target's
    /// - `AttemptsExhausted` if the budget is already used up
    /// - `NotAWord` if the word source rejects the guess
    ///
    /// No state changes on error.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<GameStatus, GuessError> {
        match self.status {
            GameStatus::Won => return Err(GuessError::SessionAlreadyWon),
            GameStatus::Lost => return Err(GuessError::SessionAlreadyLost),
            GameStatus::InProgress => {}
        }

        let candidate = candidate.to_lowercase();
        let expected = self.word_length();
        let actual = candidate.chars().count();

        if actual != expected {
            return Err(GuessError::InvalidLength { expected, actual });
        }

        if self.history.len() >= self.max_attempts {
            return Err(GuessError::AttemptsExhausted(self.max_attempts));
        }

        if !self.words.is_valid_word(&candidate) {
            return Err(GuessError::NotAWord(candidate));
        }

        let result = GuessResult::evaluate(self.target.text(), &candidate)
            .ok_or(GuessError::InvalidLength { expected, actual })?;

        self.keyboard.merge(&result);
        let won = result.is_win();
        self.history.push(result);
        self.pending.clear();

        self.status = if won {
            GameStatus::Won
        } else if self.history.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Type one letter into the pending input
    ///
    /// Returns whether the letter was taken. Non-letters, letters beyond the
    /// target length and input after the game is over are ignored.
    pub fn append_char(&mut self, letter: char) -> bool {
        if self.status.is_over()
            || !letter.is_ascii_alphabetic()
            || self.pending.len() >= self.word_length()
        {
            return false;
        }

        self.pending.push(letter.to_ascii_lowercase());
        true
    }

    /// Delete the last typed letter
    pub fn remove_char(&mut self) -> Option<char> {
        if self.status.is_over() {
            return None;
        }
        self.pending.pop()
    }

    /// Submit the pending input as a guess
    ///
    /// # Errors
    /// Same as [`submit_guess`](Self::submit_guess); the pending input is kept
    /// on error.
    pub fn submit_pending(&mut self) -> Result<GameStatus, GuessError> {
        let candidate = self.pending.clone();
        self.submit_guess(&candidate)
    }

    /// Share text for the guesses made so far
    #[must_use]
    pub fn share_text(&self) -> String {
        render_share_text(SHARE_HEADER, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};
    use crate::game::LengthBounds;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "crane", "trace", "slate", "llama", "allow", "below", "bulky", "pious", "mound",
        "cake",
    ];

    fn words() -> Dictionary {
        Dictionary::new(
            WORDS.iter().map(|w| Word::new(*w).unwrap()),
            LengthBounds::default(),
        )
    }

    fn session<'a>(target: &str, words: &'a Dictionary) -> GameSession<'a> {
        GameSession::new(Word::new(target).unwrap(), words)
    }

    #[test]
    fn new_session_starts_empty() {
        let words = words();
        let game = session("crane", &words);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.max_attempts(), 6);
        assert_eq!(game.attempts_remaining(), 6);
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
        assert_eq!(game.pending_input(), "");
    }

    #[test]
    fn budget_follows_word_length() {
        let words = words();
        assert_eq!(session("cake", &words).max_attempts(), 5);
    }

    #[test]
    fn trace_then_crane_wins() {
        let words = words();
        let mut game = session("crane", &words);

        assert_eq!(game.submit_guess("trace"), Ok(GameStatus::InProgress));
        assert_eq!(
            game.history()[0].states(),
            vec![Absent, Correct, Correct, Present, Correct]
        );

        assert_eq!(game.submit_guess("crane"), Ok(GameStatus::Won));
        assert!(game.history()[1].is_win());
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.keyboard().get('c'), Some(Correct));
    }

    #[test]
    fn guess_is_lowercased() {
        let words = words();
        let mut game = session("crane", &words);
        assert_eq!(game.submit_guess("CRANE"), Ok(GameStatus::Won));
    }

    #[test]
    fn wrong_length_is_rejected_without_change() {
        let words = words();
        let mut game = session("crane", &words);
        game.append_char('c');

        assert_eq!(
            game.submit_guess("cake"),
            Err(GuessError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
        assert_eq!(game.pending_input(), "c");
    }

    #[test]
    fn unknown_word_is_rejected_without_change() {
        let words = words();
        let mut game = session("crane", &words);

        assert_eq!(
            game.submit_guess("zzzzz"),
            Err(GuessError::NotAWord("zzzzz".to_string()))
        );
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
    }

    #[test]
    fn length_is_checked_before_membership() {
        let words = words();
        let mut game = session("crane", &words);
        assert!(matches!(
            game.submit_guess("zz"),
            Err(GuessError::InvalidLength { .. })
        ));
    }

    #[test]
    fn losing_after_budget() {
        let words = words();
        let mut game = session("crane", &words);
        let misses = ["trace", "slate", "llama", "allow", "below", "bulky"];

        for (i, guess) in misses.iter().enumerate() {
            let status = game.submit_guess(guess).unwrap();
            if i + 1 < misses.len() {
                assert_eq!(status, GameStatus::InProgress);
            } else {
                assert_eq!(status, GameStatus::Lost);
            }
        }

        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.submit_guess("crane"), Err(GuessError::SessionAlreadyLost));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let words = words();
        let mut game = session("crane", &words).with_max_attempts(2);
        game.submit_guess("trace").unwrap();
        assert_eq!(game.submit_guess("crane"), Ok(GameStatus::Won));
    }

    #[test]
    fn zero_budget_exhausts_immediately() {
        let words = words();
        let mut game = session("crane", &words).with_max_attempts(0);
        assert_eq!(game.submit_guess("trace"), Err(GuessError::AttemptsExhausted(0)));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn terminal_session_ignores_everything() {
        let words = words();
        let mut game = session("crane", &words);
        game.submit_guess("crane").unwrap();

        let history = game.history().to_vec();
        let keyboard = game.keyboard().clone();

        assert_eq!(game.submit_guess("trace"), Err(GuessError::SessionAlreadyWon));
        assert!(!game.append_char('a'));
        assert_eq!(game.remove_char(), None);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.keyboard(), &keyboard);
        assert_eq!(game.pending_input(), "");
    }

    #[test]
    fn pending_input_caps_at_word_length() {
        let words = words();
        let mut game = session("cake", &words);

        for letter in "cakes".chars() {
            game.append_char(letter);
        }
        assert_eq!(game.pending_input(), "cake");
        assert!(!game.append_char('x'));
    }

    #[test]
    fn pending_input_ignores_non_letters_and_lowercases() {
        let words = words();
        let mut game = session("crane", &words);

        assert!(!game.append_char('1'));
        assert!(!game.append_char(' '));
        assert!(game.append_char('C'));
        assert_eq!(game.pending_input(), "c");
    }

    #[test]
    fn remove_char_pops_last() {
        let words = words();
        let mut game = session("crane", &words);
        game.append_char('c');
        game.append_char('r');

        assert_eq!(game.remove_char(), Some('r'));
        assert_eq!(game.remove_char(), Some('c'));
        assert_eq!(game.remove_char(), None);
    }

    #[test]
    fn submit_pending_clears_only_on_success() {
        let words = words();
        let mut game = session("crane", &words);

        for letter in "zzzzz".chars() {
            game.append_char(letter);
        }
        assert!(game.submit_pending().is_err());
        assert_eq!(game.pending_input(), "zzzzz");

        while game.remove_char().is_some() {}
        for letter in "trace".chars() {
            game.append_char(letter);
        }
        assert_eq!(game.submit_pending(), Ok(GameStatus::InProgress));
        assert_eq!(game.pending_input(), "");
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn start_picks_from_source_deterministically() {
        let words = words();
        let mut rng = StdRng::seed_from_u64(7);
        let first = GameSession::start(&words, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let second = GameSession::start(&words, &mut rng).unwrap();

        assert_eq!(first.target(), second.target());
        assert!(WORDS.contains(&first.target().text()));
    }

    #[test]
    fn start_on_empty_source_fails() {
        let empty = Dictionary::new(Vec::new(), LengthBounds::default());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            GameSession::start(&empty, &mut rng).err(),
            Some(GameError::EmptyWordList)
        );
    }

    #[test]
    fn share_text_tracks_history() {
        let words = words();
        let mut game = session("crane", &words);
        game.submit_guess("trace").unwrap();
        game.submit_guess("crane").unwrap();

        let text = game.share_text();
        assert!(text.starts_with(SHARE_HEADER));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert!(GameStatus::Lost.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }
}

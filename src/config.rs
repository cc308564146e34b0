//! Game configuration
//!
//! Settings shared by every front-end: playable word lengths, the attempt
//! budget and the random seed. The CLI fills this in from its flags.

use crate::game::{Dictionary, GameError, GameSession, LengthBounds};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum word length must be at least 1")]
    ZeroMinLength,
    #[error("minimum word length {min} is greater than maximum {max}")]
    InvertedBounds { min: usize, max: usize },
    #[error("attempt budget must be at least 1")]
    ZeroAttempts,
}

/// Settings for starting games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Playable word lengths
    pub bounds: LengthBounds,
    /// Attempt budget; `None` means word length + 1
    pub max_attempts: Option<usize>,
    /// Seed for target selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Check the values make sense together
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.min == 0 {
            return Err(ConfigError::ZeroMinLength);
        }

        if self.bounds.min > self.bounds.max {
            return Err(ConfigError::InvertedBounds {
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        if self.max_attempts == Some(0) {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }

    /// Random generator for target selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Base seed for batch runs: the configured seed, or a fresh one from the OS
    #[must_use]
    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| self.rng().random())
    }

    /// Start a new session with this configuration's attempt budget
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new_session<'a>(
        &self,
        words: &'a Dictionary,
        rng: &mut StdRng,
    ) -> Result<GameSession<'a>, GameError> {
        let session = GameSession::start(words, rng)?;
        Ok(match self.max_attempts {
            Some(max) => session.with_max_attempts(max),
            None => session,
        })
    }
}

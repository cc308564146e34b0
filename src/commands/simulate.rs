//! Batch simulation
//!
//! Plays many seeded games with a player that always guesses a random word
//! still consistent with every scored guess so far, then aggregates results.
//! Each game owns its session and generator; games run in parallel.

use crate::core::Word;
use crate::game::{Dictionary, GameError, GameSession, GameStatus, GuessError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why a simulation could not finish
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("simulated guess refused: {0}")]
    Guess(#[from] GuessError),
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub max_attempts: Option<usize>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            max_attempts: None,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub target: String,
    pub status: GameStatus,
    pub guesses: usize,
}

/// Aggregated simulation results
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Guess count -> number of games won with that many guesses
    pub distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Run `config.games` games against targets drawn from `words`
///
/// Game `i` uses seed `config.seed + i`, so results are repeatable.
///
/// # Errors
///
/// Returns `SimulationError::Game` if `words` is empty, or
/// `SimulationError::Guess` if a session refuses a guess (for example a
/// zero attempt budget).
pub fn run_simulation(
    words: &Dictionary,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_game(words, config.seed.wrapping_add(i as u64), config.max_attempts);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&records, start.elapsed()))
}

/// Play a single game with the consistent-random player
///
/// # Errors
///
/// Returns `SimulationError::Game` if `words` is empty, or
/// `SimulationError::Guess` if the session refuses a guess.
pub fn play_game(
    words: &Dictionary,
    seed: u64,
    max_attempts: Option<usize>,
) -> Result<GameRecord, SimulationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::start(words, &mut rng)?;
    if let Some(max) = max_attempts {
        session = session.with_max_attempts(max);
    }

    let mut candidates: Vec<&Word> = words.words_of_length(session.word_length()).collect();

    while !session.status().is_over() {
        let Some(&guess) = candidates.choose(&mut rng) else {
            break;
        };

        session.submit_guess(guess.text())?;

        if let Some(last) = session.history().last() {
            candidates.retain(|word| last.admits(word.text()));
        }
    }

    Ok(GameRecord {
        target: session.target().text().to_string(),
        status: session.status(),
        guesses: session.attempts_used(),
    })
}

fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let mut distribution = BTreeMap::new();
    let mut total_guesses = 0;

    for record in records.iter().filter(|r| r.status == GameStatus::Won) {
        *distribution.entry(record.guesses).or_insert(0) += 1;
        total_guesses += record.guesses;
    }

    let wins = distribution.values().sum::<usize>();
    let average_guesses = if wins > 0 {
        total_guesses as f64 / wins as f64
    } else {
        0.0
    };

    SimulationResult {
        games: records.len(),
        wins,
        losses: records.len() - wins,
        distribution,
        average_guesses,
        duration,
    }
}

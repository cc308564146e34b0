//! Word Guess - CLI
//!
//! Play in a full-screen TUI or line by line, score single guesses, or run
//! batch simulations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_clone::{
    commands::{SimulationConfig, evaluate_guess, run_simple, run_simulation},
    config::GameConfig,
    game::{Dictionary, LengthBounds},
    output::{print_evaluation, print_simulation_result},
    wordlists::loader::{embedded_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden word; tiles and keyboard show what you've learned",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Shortest playable word
    #[arg(long, global = true, default_value_t = LengthBounds::DEFAULT_MIN)]
    min_len: usize,

    /// Longest playable word
    #[arg(long, global = true, default_value_t = LengthBounds::DEFAULT_MAX)]
    max_len: usize,

    /// Guesses per game (default: word length + 1)
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Seed for picking target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score one guess against a target word
    Evaluate {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Play many games with a consistent random player
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            bounds: LengthBounds::new(self.min_len, self.max_len),
            max_attempts: self.attempts,
            seed: self.seed,
        }
    }
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str, bounds: LengthBounds) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => embedded_dictionary(bounds),
        path => Dictionary::new(load_from_file(path)?, bounds),
    };

    if dictionary.words().is_empty() {
        anyhow::bail!(
            "word list '{wordlist}' has no words of {} to {} letters",
            bounds.min,
            bounds.max
        );
    }

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Evaluate { target, guess } => run_evaluate_command(&target, &guess),
        Commands::Play => {
            let words = load_dictionary(&cli.wordlist, config.bounds)?;
            run_play_command(&words, config)
        }
        Commands::Simple => {
            let words = load_dictionary(&cli.wordlist, config.bounds)?;
            run_simple(&words, &config)
        }
        Commands::Simulate { games } => {
            let words = load_dictionary(&cli.wordlist, config.bounds)?;
            run_simulate_command(&words, &config, games)
        }
    }
}

fn run_evaluate_command(target: &str, guess: &str) -> Result<()> {
    let result = evaluate_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation(target, &result);
    Ok(())
}

fn run_simulate_command(words: &Dictionary, config: &GameConfig, games: usize) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Simulating {games} games ");
    println!("{}", "═".repeat(70));
    println!(
        "\nWord list: {} words of {} to {} letters",
        words.words().len(),
        config.bounds.min,
        config.bounds.max
    );

    let simulation = SimulationConfig {
        max_attempts: config.max_attempts,
        ..SimulationConfig::new(games, config.base_seed())
    };

    let result = run_simulation(words, &simulation)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(words: &Dictionary, config: GameConfig) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let app = App::new(words, config)?;
    run_tui(app)
}

//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: every line is a whole guess.

use crate::config::GameConfig;
use crate::game::{Dictionary, GameStatus};
use crate::output::{print_game_over, print_guess_result, print_keyboard, print_share_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    Keys,
    Share,
    New,
    Quit,
    Empty,
}

impl SimpleCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            ":keys" | ":k" => Self::Keys,
            ":share" | ":s" => Self::Share,
            ":new" | ":n" => Self::New,
            ":quit" | ":q" | ":exit" => Self::Quit,
            word => Self::Guess(word.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails, or if the word
/// list has no playable words.
pub fn run_simple(words: &Dictionary, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Guess - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a guess and press Enter.");
    println!("Commands: ':keys' keyboard, ':share' share text, ':new' new game, ':quit' exit\n");

    let mut rng = config.rng();
    let mut session = config.new_session(words, &mut rng)?;
    announce(session.word_length(), session.max_attempts());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(
            "Guess {}/{}: ",
            session.attempts_used() + 1,
            session.max_attempts()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        match SimpleCommand::parse(&line?) {
            SimpleCommand::Empty => {}
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Keys => print_keyboard(session.keyboard()),
            SimpleCommand::Share => print_share_text(&session.share_text()),
            SimpleCommand::New => {
                session = config.new_session(words, &mut rng)?;
                println!("\n🔄 New game started!");
                announce(session.word_length(), session.max_attempts());
            }
            SimpleCommand::Guess(word) => match session.submit_guess(&word) {
                Ok(status) => {
                    if let Some(result) = session.history().last() {
                        print_guess_result(result);
                    }

                    if status == GameStatus::InProgress {
                        continue;
                    }

                    print_game_over(&session);
                    println!("Type ':new' to play again or ':quit' to exit.");
                }
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
        }
    }
}

fn announce(word_length: usize, max_attempts: usize) {
    println!(
        "\nI'm thinking of a {} word. You have {} guesses.\n",
        format!("{word_length}-letter").bright_yellow().bold(),
        max_attempts
    );
}

//! Display functions for command results

use super::formatters::{create_progress_bar, keyboard_lines, tile_row};
use crate::commands::SimulationResult;
use crate::core::{GuessResult, KeyboardKnowledge};
use crate::game::{GameSession, GameStatus, WordSource};
use colored::Colorize;

/// Print one scored guess as coloured tiles
pub fn print_guess_result(result: &GuessResult) {
    println!("  {}", tile_row(result));
}

/// Print the keyboard coloured by what is known so far
pub fn print_keyboard(keyboard: &KeyboardKnowledge) {
    println!();
    for line in keyboard_lines(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print share text between rules
pub fn print_share_text(text: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    print!("{text}");
    println!("{}", "─".repeat(40).cyan());
}

/// Print the end-of-game banner and share text
pub fn print_game_over<W: WordSource + ?Sized>(session: &GameSession<'_, W>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let guesses = session.attempts_used();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} The word was {}",
                "❌ Out of guesses.".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    print_share_text(&session.share_text());
}

/// Print the evaluation of a single guess
pub fn print_evaluation(target: &str, result: &GuessResult) {
    println!(
        "\n{} {} → {}",
        "Target:".bright_cyan().bold(),
        target.to_uppercase().bright_yellow(),
        result.word().to_uppercase()
    );
    print_guess_result(result);
    println!("  {}", result.share_row());
    if result.is_win() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    if result.losses > 0 {
        println!(
            "   Lost:             {} {}",
            result.losses,
            format!("({:.1}%)", (1.0 - result.win_rate()) * 100.0).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let pct = count as f64 / result.games.max(1) as f64 * 100.0;
        println!("   {guesses}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

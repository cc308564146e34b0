//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_evaluation, print_game_over, print_guess_result, print_keyboard, print_share_text,
    print_simulation_result,
};

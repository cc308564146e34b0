//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod simulate;

pub use evaluate::evaluate_guess;
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationError, SimulationResult, run_simulation};

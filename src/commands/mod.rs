//! Command implementations

pub mod calculator;
pub mod guessing;

pub use calculator::run_calculator;
pub use guessing::{choose_difficulty, play_round, run_guessing_game};

//! Core domain types for the calculator and the guessing game
//!
//! Pure, dependency-light types: arithmetic with domain errors, difficulty
//! presets, hint bands and scoring. Nothing here touches I/O.

mod difficulty;
mod hint;
mod operation;
mod score;

pub use difficulty::{AttemptLimit, Difficulty, multiplier_for_upper};
pub use hint::{Direction, Proximity, praise};
pub use operation::{
    CalcError, CalcResult, MenuChoice, Operation, add, divide, multiply, power, square_root,
    subtract,
};
pub use score::calculate_score;

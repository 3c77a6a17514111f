//! Display functions for both programs
//!
//! Every function writes to the given writer so transcripts can be captured.

use super::formatters::{format_equation, format_history, format_progress};
use crate::core::{AttemptLimit, CalcResult, Difficulty, Direction, Operation, Proximity, praise};
use crate::game::PlayTally;
use colored::Colorize;
use std::io::{self, Write};

/// Print the calculator greeting
pub fn print_calculator_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "🎉 Welcome to the Console Calculator!".bright_green().bold()
    )
}

/// Print the operation menu
pub fn print_calculator_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "🧮 Simple Calculator".bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(20).cyan())?;
    for (i, operation) in Operation::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, operation.label())?;
    }
    writeln!(out, "7. Exit")?;
    writeln!(out, "{}", "=".repeat(20).cyan())
}

/// Print an evaluated equation, or the domain error in place of its result
///
/// Both use the same `✅` line; an error is coloured red.
pub fn print_calculation<W: Write>(
    out: &mut W,
    operation: Operation,
    x: f64,
    y: f64,
    result: &CalcResult,
) -> io::Result<()> {
    let equation = format_equation(operation, x, y, result);
    match result {
        Ok(_) => writeln!(out, "{}", format!("✅ {equation}").green()),
        Err(_) => writeln!(out, "{}", format!("✅ {equation}").red()),
    }
}

/// Print the calculator farewell
pub fn print_calculator_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "👋 Thanks for using the calculator!")
}

/// Print the guessing game greeting and rules
pub fn print_game_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "🎯 Welcome to the Number Guessing Game!".bright_green().bold()
    )?;
    writeln!(out, "{}", "=".repeat(40).cyan())?;
    writeln!(out, "🎮 How to play:")?;
    writeln!(out, "• I'll think of a number in your chosen range")?;
    writeln!(out, "• You guess the number")?;
    writeln!(out, "• I'll give you hints (higher/lower)")?;
    writeln!(out, "• Try to guess in as few attempts as possible!")?;
    writeln!(out, "{}", "=".repeat(40).cyan())
}

/// Print the difficulty menu
pub fn print_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n🎚️ Choose difficulty:")?;
    for (i, tier) in Difficulty::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, tier.description())?;
    }
    Ok(())
}

/// Print the round introduction
pub fn print_round_intro<W: Write>(out: &mut W, difficulty: Difficulty) -> io::Result<()> {
    writeln!(
        out,
        "\n🎲 I'm thinking of a number between {} and {}",
        difficulty.lower(),
        difficulty.upper()
    )?;
    if let AttemptLimit::Limited(max) = difficulty.attempt_limit() {
        writeln!(out, "⏰ You have {max} guesses!")?;
    }
    writeln!(out, "🚀 Let's start!\n")
}

/// Print attempt progress and the previous guesses
pub fn print_progress<W: Write>(
    out: &mut W,
    attempt: u32,
    limit: AttemptLimit,
    history: &[u32],
) -> io::Result<()> {
    writeln!(out, "📊 {}", format_progress(attempt, limit))?;
    if !history.is_empty() {
        writeln!(out, "🔍 Previous guesses: {}", format_history(history))?;
    }
    Ok(())
}

/// Print the hints for a missed guess
pub fn print_miss<W: Write>(
    out: &mut W,
    direction: Direction,
    proximity: Proximity,
) -> io::Result<()> {
    writeln!(out, "{direction} {proximity}\n")
}

/// Print the win celebration
pub fn print_win<W: Write>(out: &mut W, target: u32, attempts: u32, score: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "🎉".repeat(20))?;
    writeln!(
        out,
        "{}",
        "🏆 CONGRATULATIONS! You found the number!"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "🎯 The number was: {target}")?;
    writeln!(out, "📈 You guessed it in {attempts} attempts!")?;
    writeln!(
        out,
        "⭐ Your score: {} points",
        score.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", praise(attempts))
}

/// Print the out-of-attempts message
pub fn print_game_over<W: Write>(out: &mut W, target: u32, limit: AttemptLimit) -> io::Result<()> {
    writeln!(out, "\n{}", "💥 Game Over!".red().bold())?;
    writeln!(out, "😅 You've used all {limit} attempts!")?;
    writeln!(out, "🎯 The number was: {target}")?;
    writeln!(out, "💪 Better luck next time!")
}

/// Print the separator shown before the replay question
pub fn print_round_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(40).cyan())
}

/// Print the banner shown when a new round starts
pub fn print_replay_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "🎮".repeat(20))
}

/// Print the farewell with the session tally
pub fn print_game_goodbye<W: Write>(out: &mut W, tally: &PlayTally) -> io::Result<()> {
    writeln!(out, "\n👋 Thanks for playing!")?;
    writeln!(
        out,
        "📋 Rounds played: {}  Won: {}  Best score: {}",
        tally.rounds,
        tally.wins,
        tally.best_score.map_or_else(|| "-".to_string(), |s| s.to_string())
    )?;
    writeln!(out, "🎮 Come back anytime for more guessing fun!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn calculator_menu_lists_seven_choices() {
        let text = capture(print_calculator_menu);
        assert!(text.contains("1. Addition (+)"));
        assert!(text.contains("5. Power (**)"));
        assert!(text.contains("6. Square Root (√)"));
        assert!(text.contains("7. Exit"));
    }

    #[test]
    fn calculation_success_and_error() {
        let ok = capture(|out| print_calculation(out, Operation::Add, 1.0, 2.0, &Ok(3.0)));
        assert!(ok.contains("✅ 1.0 + 2.0 = 3.0"));

        let err = capture(|out| {
            print_calculation(
                out,
                Operation::SquareRoot,
                -4.0,
                0.0,
                &Err(crate::core::CalcError::NegativeSquareRoot),
            )
        });
        assert!(err.contains("✅ √-4.0 = Error: Cannot calculate square root of negative number!"));
    }

    #[test]
    fn difficulty_menu_lists_tiers() {
        let text = capture(print_difficulty_menu);
        assert!(text.contains("1. Easy (1-50, unlimited guesses)"));
        assert!(text.contains("2. Medium (1-100, 10 guesses)"));
        assert!(text.contains("3. Hard (1-500, 12 guesses)"));
        assert!(text.contains("4. Expert (1-1000, 15 guesses)"));
    }

    #[test]
    fn round_intro_mentions_budget_only_when_bounded() {
        let easy = capture(|out| print_round_intro(out, Difficulty::Easy));
        assert!(easy.contains("between 1 and 50"));
        assert!(!easy.contains("You have"));

        let hard = capture(|out| print_round_intro(out, Difficulty::Hard));
        assert!(hard.contains("⏰ You have 12 guesses!"));
    }

    #[test]
    fn progress_shows_history() {
        let text = capture(|out| print_progress(out, 3, AttemptLimit::Limited(10), &[40, 60]));
        assert!(text.contains("📊 Attempt 3/10 (Remaining: 8)"));
        assert!(text.contains("🔍 Previous guesses: 40, 60"));

        let first = capture(|out| print_progress(out, 1, AttemptLimit::Unbounded, &[]));
        assert!(!first.contains("Previous guesses"));
    }

    #[test]
    fn goodbye_without_wins() {
        let text = capture(|out| print_game_goodbye(out, &PlayTally::default()));
        assert!(text.contains("Rounds played: 0  Won: 0  Best score: -"));
    }
}

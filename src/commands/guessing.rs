//! Interactive number guessing game
//!
//! Difficulty selection, guess loop with hints, scoring and replay.

use crate::console::{Console, ConsoleResult};
use crate::core::Difficulty;
use crate::game::{GameSession, GuessOutcome, PlayTally, RoundState, SecretSource};
use crate::output::display::{
    print_difficulty_menu, print_game_goodbye, print_game_over, print_game_welcome, print_miss,
    print_progress, print_replay_banner, print_round_intro, print_round_separator, print_win,
};
use std::io::{BufRead, Write};

/// Run rounds until the player declines to play again
///
/// Returns the tally of the rounds played.
///
/// # Errors
///
/// Returns an error if input ends or the console cannot be read or written.
pub fn run_guessing_game<R: BufRead, W: Write, S: SecretSource>(
    console: &mut Console<R, W>,
    source: &mut S,
) -> ConsoleResult<PlayTally> {
    print_game_welcome(console.out())?;
    let mut tally = PlayTally::default();

    loop {
        let difficulty = choose_difficulty(console)?;
        let state = play_round(console, difficulty, &mut *source)?;
        tally.record(state);

        print_round_separator(console.out())?;
        if !console.confirm("🔄 Play again? (y/n): ")? {
            print_game_goodbye(console.out(), &tally)?;
            tracing::debug!(rounds = tally.rounds, wins = tally.wins, "game finished");
            return Ok(tally);
        }

        print_replay_banner(console.out())?;
    }
}

/// Prompt for a tier until a listed one is chosen
///
/// # Errors
///
/// Returns an error if input ends or the console cannot be read or written.
pub fn choose_difficulty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> ConsoleResult<Difficulty> {
    print_difficulty_menu(console.out())?;
    console.read_valid(
        "Select difficulty (1-4): ",
        "❌ Please choose 1-4!",
        Difficulty::from_number,
    )
}

/// Play one round at `difficulty` and return how it ended
///
/// # Errors
///
/// Returns an error if input ends or the console cannot be read or written.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    difficulty: Difficulty,
    source: impl SecretSource,
) -> ConsoleResult<RoundState> {
    let mut session = GameSession::new(difficulty, source);
    print_round_intro(console.out(), difficulty)?;

    let prompt = format!(
        "🤔 Enter your guess ({}-{}): ",
        difficulty.lower(),
        difficulty.upper()
    );
    let rejection = format!(
        "❌ Please guess between {} and {}!",
        difficulty.lower(),
        difficulty.upper()
    );

    while !session.is_over() {
        print_progress(
            console.out(),
            session.next_attempt(),
            session.limit(),
            session.history(),
        )?;

        let guess = console.read_valid(&prompt, &rejection, |n: i64| {
            u32::try_from(n).ok().filter(|&g| session.accepts(g))
        })?;

        match session.submit(guess) {
            Ok(GuessOutcome::Correct { attempts, score }) => {
                print_win(console.out(), session.target(), attempts, score)?;
            }
            Ok(GuessOutcome::Miss {
                direction,
                proximity,
            }) => print_miss(console.out(), direction, proximity)?,
            Err(error) => tracing::warn!(%error, "guess refused"),
        }
    }

    if session.state() == RoundState::Exhausted {
        print_game_over(console.out(), session.target(), session.limit())?;
    }

    Ok(session.state())
}

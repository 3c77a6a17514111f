//! Number guessing game
//!
//! Four difficulty tiers, proximity hints, scoring and replay.

use anyhow::{Context, Result};
use clap::Parser;
use console_classics::{
    commands::run_guessing_game, console::Console, game::RandomSecret, logging,
};

#[derive(Parser)]
#[command(
    name = "guessing_game",
    about = "Number guessing game with four difficulty tiers",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let mut console = Console::stdio();
    let mut source = RandomSecret::thread();
    let tally = run_guessing_game(&mut console, &mut source)
        .context("guessing game session ended")?;

    tracing::debug!(rounds = tally.rounds, wins = tally.wins, "exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn starts_without_arguments() {
        assert!(Cli::try_parse_from(["guessing_game"]).is_ok());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["guessing_game", "--seed", "4"]).is_err());
    }
}

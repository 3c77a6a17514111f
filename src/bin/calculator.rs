//! Console calculator
//!
//! Menu-driven calculator with power and square-root extensions.

use anyhow::{Context, Result};
use clap::Parser;
use console_classics::{commands::run_calculator, console::Console, logging};

#[derive(Parser)]
#[command(
    name = "calculator",
    about = "Menu-driven calculator (add, subtract, multiply, divide, power, square root)",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let mut console = Console::stdio();
    run_calculator(&mut console).context("calculator session ended")
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
        assert!(Cli::try_parse_from(["calculator"]).is_ok());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["calculator", "guess"]).is_err());
    }
}

//! Interactive calculator
//!
//! Menu-driven loop: pick an operation, enter operands, see the equation.

use crate::console::{Console, ConsoleResult, is_integer_literal};
use crate::core::{MenuChoice, Operation};
use crate::output::display::{
    print_calculation, print_calculator_goodbye, print_calculator_menu, print_calculator_welcome,
};
use std::io::{BufRead, Write};

/// Run the calculator until the player picks Exit
///
/// Bad menu choices and unparseable operands are rejected and re-prompted;
/// domain errors are shown in place of the result.
///
/// # Errors
///
/// Returns an error if input ends or the console cannot be read or written.
pub fn run_calculator<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ConsoleResult<()> {
    print_calculator_welcome(console.out())?;

    loop {
        print_calculator_menu(console.out())?;

        let number = match console.prompt_parsed::<i64>("Choose an operation (1-7): ")? {
            Ok(number) => Some(number),
            // Whole numbers past i64 are still off the menu
            Err(raw) if is_integer_literal(&raw) => None,
            Err(raw) => {
                tracing::debug!(input = %raw, "rejected menu choice");
                console.say("❌ Please enter a valid choice!")?;
                continue;
            }
        };

        match number.and_then(MenuChoice::from_number) {
            Some(MenuChoice::Exit) => {
                print_calculator_goodbye(console.out())?;
                return Ok(());
            }
            Some(MenuChoice::Compute(operation)) => calculate(console, operation)?,
            None => console.say("❌ Invalid choice! Please select 1-7.")?,
        }

        console.pause()?;
    }
}

/// Read the operands for `operation`, evaluate it and print the equation
fn calculate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    operation: Operation,
) -> ConsoleResult<()> {
    let (x, y) = if operation.arity() == 1 {
        (console.read_number("Enter a number: ")?, 0.0)
    } else {
        let x = console.read_number("Enter first number: ")?;
        let y = console.read_number("Enter second number: ")?;
        (x, y)
    };

    let result = operation.apply(x, y);
    match &result {
        Ok(value) => tracing::debug!(?operation, x, y, value, "evaluated"),
        Err(error) => tracing::info!(?operation, x, y, %error, "domain error"),
    }

    print_calculation(console.out(), operation, x, y, &result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ConsoleError;
    use std::io::Cursor;

    fn run(input: &str) -> (ConsoleResult<()>, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run_calculator(&mut console);
        let transcript = String::from_utf8(console.into_output()).unwrap();
        (result, transcript)
    }

    #[test]
    fn power_two_to_the_tenth() {
        let (result, out) = run("5\n2\n10\n\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("✅ 2.0 ^ 10.0 = 1024.0"));
        assert!(out.contains("👋 Thanks for using the calculator!"));
    }

    #[test]
    fn every_binary_operation() {
        let (_, out) = run("1\n2\n3\n\n2\n2\n3\n\n3\n2\n3\n\n4\n3\n2\n\n7\n");
        assert!(out.contains("✅ 2.0 + 3.0 = 5.0"));
        assert!(out.contains("✅ 2.0 - 3.0 = -1.0"));
        assert!(out.contains("✅ 2.0 × 3.0 = 6.0"));
        assert!(out.contains("✅ 3.0 ÷ 2.0 = 1.5"));
    }

    #[test]
    fn square_root_reads_one_operand() {
        let (result, out) = run("6\n81\n\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("✅ √81.0 = 9.0"));
        assert!(!out.contains("Enter first number"));
    }

    #[test]
    fn domain_errors_keep_the_loop_running() {
        let (result, out) = run("4\n5\n0\n\n6\n-9\n\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("✅ 5.0 ÷ 0.0 = Error: Cannot divide by zero!"));
        assert!(out.contains("✅ √-9.0 = Error: Cannot calculate square root of negative number!"));
        assert!(out.contains("Thanks for using the calculator!"));
    }

    #[test]
    fn invalid_choices_are_rejected() {
        let (result, out) = run("abc\n9\n\n0\n\n7\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("❌ Please enter a valid choice!").count(), 1);
        assert_eq!(out.matches("❌ Invalid choice! Please select 1-7.").count(), 2);
    }

    #[test]
    fn oversized_choice_is_out_of_range() {
        let (result, out) = run("99999999999999999999\n\n7\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("❌ Invalid choice! Please select 1-7.").count(), 1);
        assert!(!out.contains("❌ Please enter a valid choice!"));
        assert!(out.contains("Press Enter to continue..."));
    }

    #[test]
    fn invalid_operands_are_re_prompted() {
        let (_, out) = run("1\nten\n10\nfive\n5\n\n7\n");
        assert_eq!(out.matches("❌ Please enter a valid number!").count(), 2);
        assert!(out.contains("✅ 10.0 + 5.0 = 15.0"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (result, _) = run("1\n2\n");
        assert!(matches!(result, Err(ConsoleError::EndOfInput)));
    }
}

//! Line-oriented prompting over any reader/writer pair
//!
//! The interactive loops read through [`Console`] so they can run against
//! stdin/stdout or against in-memory buffers.

use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::str::FromStr;
use thiserror::Error;

/// Failures while talking to the player
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended while waiting for a response")]
    EndOfInput,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

const INVALID_NUMBER: &str = "❌ Please enter a valid number!";

/// Check for a whole-number literal, however large
///
/// Such input is an integer even when it does not fit the target type.
pub(crate) fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Prompted input and line output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for display helpers
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line
    ///
    /// # Errors
    /// Returns an error if the writer fails.
    pub fn say(&mut self, line: impl AsRef<str>) -> ConsoleResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// # Errors
    /// Returns [`ConsoleError::EndOfInput`] when the input is exhausted, or an
    /// I/O error.
    pub fn prompt(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }

    /// Read one line and parse it, without retrying
    ///
    /// The outer `Result` carries I/O failures; the inner one the raw line
    /// when it does not parse.
    ///
    /// # Errors
    /// Same as [`Console::prompt`].
    pub fn prompt_parsed<T: FromStr>(&mut self, prompt: &str) -> ConsoleResult<Result<T, String>> {
        let raw = self.prompt(prompt)?;
        Ok(raw.parse().map_err(|_| raw))
    }

    /// Read a floating-point number, re-prompting until one parses
    ///
    /// # Errors
    /// Same as [`Console::prompt`].
    pub fn read_number(&mut self, prompt: &str) -> ConsoleResult<f64> {
        loop {
            match self.prompt_parsed::<f64>(prompt)? {
                Ok(value) => return Ok(value),
                Err(raw) => {
                    tracing::debug!(input = %raw, "rejected number");
                    self.say(INVALID_NUMBER)?;
                }
            }
        }
    }

    /// Read a value and map it through `select`, re-prompting until it yields one
    ///
    /// Input that is not a number gets the generic rejection. Parsed values
    /// refused by `select`, and whole numbers too large to parse, get
    /// `rejection`.
    ///
    /// # Errors
    /// Same as [`Console::prompt`].
    pub fn read_valid<T: FromStr, U>(
        &mut self,
        prompt: &str,
        rejection: &str,
        mut select: impl FnMut(T) -> Option<U>,
    ) -> ConsoleResult<U> {
        loop {
            match self.prompt_parsed::<T>(prompt)? {
                Ok(value) => match select(value) {
                    Some(selected) => return Ok(selected),
                    None => self.say(rejection)?,
                },
                Err(raw) if is_integer_literal(&raw) => self.say(rejection)?,
                Err(raw) => {
                    tracing::debug!(input = %raw, "rejected input");
                    self.say(INVALID_NUMBER)?;
                }
            }
        }
    }

    /// Wait for the player to press Enter
    ///
    /// # Errors
    /// Same as [`Console::prompt`].
    pub fn pause(&mut self) -> ConsoleResult<()> {
        self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    /// Ask a yes/no question; any answer starting with `y` is yes
    ///
    /// # Errors
    /// Same as [`Console::prompt`].
    pub fn confirm(&mut self, prompt: &str) -> ConsoleResult<bool> {
        Ok(self.prompt(prompt)?.to_lowercase().starts_with('y'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn prompt_trims_line() {
        let mut c = console("  hello  \n");
        assert_eq!(c.prompt("> ").unwrap(), "hello");
        assert_eq!(transcript(c), "> ");
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let mut c = console("");
        assert!(matches!(c.prompt("> "), Err(ConsoleError::EndOfInput)));
    }

    #[test]
    fn read_number_retries_until_valid() {
        let mut c = console("abc\n\n3.5\n");
        assert_eq!(c.read_number("n: ").unwrap(), 3.5);

        let out = transcript(c);
        assert_eq!(out.matches(INVALID_NUMBER).count(), 2);
        assert_eq!(out.matches("n: ").count(), 3);
    }

    #[test]
    fn read_number_accepts_signs_and_exponents() {
        let mut c = console("-2\n1e3\n");
        assert_eq!(c.read_number("").unwrap(), -2.0);
        assert_eq!(c.read_number("").unwrap(), 1000.0);
    }

    #[test]
    fn read_valid_distinguishes_rejections() {
        let mut c = console("x\n9\n2\n");
        let value = c
            .read_valid("pick: ", "out of range", |n: i64| (1..=4).contains(&n).then_some(n * 10))
            .unwrap();
        assert_eq!(value, 20);

        let out = transcript(c);
        assert!(out.contains(INVALID_NUMBER));
        assert!(out.contains("out of range"));
    }

    #[test]
    fn read_integer_rejects_floats() {
        let mut c = console("2.5\n3\n");
        let value = c.read_valid("", "", |n: i64| Some(n)).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn oversized_integers_get_the_range_rejection() {
        let mut c = console("99999999999999999999\n-99999999999999999999\n4\n");
        let value = c
            .read_valid("", "out of range", |n: i64| (1..=4).contains(&n).then_some(n))
            .unwrap();
        assert_eq!(value, 4);

        let out = transcript(c);
        assert_eq!(out.matches("out of range").count(), 2);
        assert!(!out.contains(INVALID_NUMBER));
    }

    #[test]
    fn integer_literals() {
        assert!(is_integer_literal("7"));
        assert!(is_integer_literal("+12"));
        assert!(is_integer_literal("-99999999999999999999"));
        assert!(!is_integer_literal(""));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal("2.5"));
        assert!(!is_integer_literal("1e3"));
    }

    #[test]
    fn confirm_checks_first_letter() {
        for (answer, expected) in [
            ("y", true),
            ("Yes", true),
            ("  YEAH ", true),
            ("n", false),
            ("", false),
            ("sure", false),
        ] {
            let mut c = console(&format!("{answer}\n"));
            assert_eq!(c.confirm("? ").unwrap(), expected, "answer {answer:?}");
        }
    }
}

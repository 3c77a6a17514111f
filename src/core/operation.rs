//! Calculator operations
//!
//! Six arithmetic operations over `f64`. Operations whose mathematical result is
//! undefined or unrepresentable return a [`CalcError`] instead of a number.

use std::fmt;
use thiserror::Error;

/// Domain errors produced by calculator operations
///
/// The `Display` text is shown to the user in place of the numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Error: Cannot divide by zero!")]
    DivisionByZero,
    #[error("Error: Cannot calculate square root of negative number!")]
    NegativeSquareRoot,
    #[error("Error: Result is not a real number!")]
    NonRealResult,
    #[error("Error: Cannot raise zero to a negative power!")]
    ZeroToNegativePower,
    #[error("Error: Result is too large to represent!")]
    Overflow,
}

/// Result of a single calculator operation
pub type CalcResult = Result<f64, CalcError>;

#[must_use]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

#[must_use]
pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

#[must_use]
pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Divide `x` by `y`
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] when `y` is zero (either sign).
///
/// # Examples
/// ```
/// use console_classics::core::{CalcError, divide};
///
/// assert_eq!(divide(9.0, 3.0), Ok(3.0));
/// assert_eq!(divide(1.0, 0.0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(x: f64, y: f64) -> CalcResult {
    if y == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(x / y)
}

/// Raise `x` to the power `y`
///
/// Follows `f64::powf` except where it would hand back a value that is not a
/// real result of the inputs.
///
/// # Errors
/// - [`CalcError::ZeroToNegativePower`] for `0 ^ y` with `y < 0`
/// - [`CalcError::NonRealResult`] for a negative base with a fractional exponent
/// - [`CalcError::Overflow`] when finite inputs produce an infinite result
pub fn power(x: f64, y: f64) -> CalcResult {
    if x == 0.0 && y < 0.0 {
        return Err(CalcError::ZeroToNegativePower);
    }

    let result = x.powf(y);

    if result.is_nan() && !x.is_nan() && !y.is_nan() {
        return Err(CalcError::NonRealResult);
    }
    if result.is_infinite() && x.is_finite() && y.is_finite() {
        return Err(CalcError::Overflow);
    }

    Ok(result)
}

/// Non-negative square root of `x`
///
/// # Errors
/// Returns [`CalcError::NegativeSquareRoot`] when `x < 0`.
pub fn square_root(x: f64) -> CalcResult {
    if x < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    // sqrt(-0.0) is -0.0
    Ok(x.sqrt().abs())
}

/// A calculator operation selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl Operation {
    /// All operations in menu order (choices 1-6)
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::SquareRoot,
    ];

    /// Menu label, e.g. `Addition (+)`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition (+)",
            Self::Subtract => "Subtraction (-)",
            Self::Multiply => "Multiplication (*)",
            Self::Divide => "Division (/)",
            Self::Power => "Power (**)",
            Self::SquareRoot => "Square Root (√)",
        }
    }

    /// Symbol used when printing the equation
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::SquareRoot => "√",
        }
    }

    /// Number of operands the operation reads
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::SquareRoot => 1,
            _ => 2,
        }
    }

    /// Apply the operation
    ///
    /// `y` is ignored by unary operations.
    ///
    /// # Errors
    /// Propagates the domain error of the underlying operation.
    pub fn apply(self, x: f64, y: f64) -> CalcResult {
        match self {
            Self::Add => Ok(add(x, y)),
            Self::Subtract => Ok(subtract(x, y)),
            Self::Multiply => Ok(multiply(x, y)),
            Self::Divide => divide(x, y),
            Self::Power => power(x, y),
            Self::SquareRoot => square_root(x),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A parsed calculator menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute(Operation),
    Exit,
}

impl MenuChoice {
    /// Menu number of the exit entry
    pub const EXIT: i64 = 7;

    /// Map a menu number (1-7) to a choice
    ///
    /// Returns `None` for numbers outside the menu.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            Self::EXIT => Some(Self::Exit),
            1..=6 => usize::try_from(number - 1)
                .ok()
                .and_then(|i| Operation::ALL.get(i))
                .map(|&op| Self::Compute(op)),
            _ => None,
        }
    }
}

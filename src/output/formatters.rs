//! Formatting utilities for terminal output

use crate::core::{AttemptLimit, CalcResult, Operation};

/// Format a number in shortest round-trip form
///
/// Integral values keep a trailing `.0`, so `1024` prints as `1024.0`.
/// Exponents carry a sign and at least two digits (`1e+16`, `1e-05`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = exponent
        .strip_prefix('-')
        .map_or(('+', exponent), |digits| ('-', digits));
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Left-hand side of an equation, e.g. `2.0 ^ 10.0` or `√9.0`
#[must_use]
pub fn format_expression(operation: Operation, x: f64, y: f64) -> String {
    match operation.arity() {
        1 => format!("{}{}", operation.symbol(), format_number(x)),
        _ => format!(
            "{} {} {}",
            format_number(x),
            operation.symbol(),
            format_number(y)
        ),
    }
}

/// Full equation with its result or error message
#[must_use]
pub fn format_equation(operation: Operation, x: f64, y: f64, result: &CalcResult) -> String {
    let rhs = match result {
        Ok(value) => format_number(*value),
        Err(error) => error.to_string(),
    };
    format!("{} = {rhs}", format_expression(operation, x, y))
}

/// Comma-separated guess history
#[must_use]
pub fn format_history(guesses: &[u32]) -> String {
    guesses
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attempt progress line body, e.g. `Attempt 3/10 (Remaining: 8)`
#[must_use]
pub fn format_progress(attempt: u32, limit: AttemptLimit) -> String {
    match (limit, limit.remaining_at(attempt)) {
        (AttemptLimit::Limited(max), Some(remaining)) => {
            format!("Attempt {attempt}/{max} (Remaining: {remaining})")
        }
        _ => format!("Attempt {attempt}"),
    }
}

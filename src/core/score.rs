//! Round scoring
//!
//! Points depend on how quickly the target was found relative to the attempt
//! budget, scaled by the tier multiplier.

use super::AttemptLimit;

/// Which share of the budget a win must fit into to earn a band's points
#[derive(Debug, Clone, Copy)]
enum Band {
    FirstTry,
    Fraction(u32),
    WithinLimit,
}

/// Base points per band, evaluated top-down
const SCORE_BANDS: [(Band, u32); 4] = [
    (Band::FirstTry, 1000),
    (Band::Fraction(3), 750),
    (Band::Fraction(2), 500),
    (Band::WithinLimit, 250),
];

impl Band {
    const fn holds(self, attempts: u32, limit: AttemptLimit) -> bool {
        match self {
            Self::FirstTry => attempts == 1,
            Self::Fraction(divisor) => limit.permits_fraction(attempts, divisor),
            Self::WithinLimit => limit.permits(attempts),
        }
    }
}

/// Score for a win in `attempts` guesses
///
/// An unbounded limit has no thirds or halves, so an unbounded round scores
/// `1000 * multiplier` on the first guess and `250 * multiplier` after.
///
/// # Examples
/// ```
/// use console_classics::core::{AttemptLimit, calculate_score};
///
/// let medium = AttemptLimit::Limited(10);
/// assert_eq!(calculate_score(1, medium, 2), 2000);
/// assert_eq!(calculate_score(10, medium, 2), 500);
/// assert_eq!(calculate_score(11, medium, 2), 0);
/// ```
#[must_use]
pub fn calculate_score(attempts: u32, limit: AttemptLimit, multiplier: u32) -> u32 {
    SCORE_BANDS
        .iter()
        .find(|(band, _)| band.holds(attempts, limit))
        .map_or(0, |&(_, points)| points * multiplier)
}

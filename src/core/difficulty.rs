//! Difficulty tiers for the guessing game
//!
//! Each tier fixes the number range, the attempt budget and the score multiplier.

use std::fmt;
use std::ops::RangeInclusive;

/// Maximum number of guesses in a round
///
/// `Unbounded` is a sentinel, not a number: the budget itself is never
/// exceeded, but it has no fractions to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptLimit {
    Unbounded,
    Limited(u32),
}

impl AttemptLimit {
    /// Check whether `attempts` is within the budget
    ///
    /// # Examples
    /// ```
    /// use console_classics::core::AttemptLimit;
    ///
    /// assert!(AttemptLimit::Limited(10).permits(10));
    /// assert!(!AttemptLimit::Limited(10).permits(11));
    /// assert!(AttemptLimit::Unbounded.permits(u32::MAX));
    /// ```
    #[inline]
    #[must_use]
    pub const fn permits(self, attempts: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Limited(max) => attempts <= max,
        }
    }

    /// Check `attempts <= limit / divisor` using floor division
    ///
    /// Never holds for `Unbounded`, which cannot be divided.
    #[inline]
    #[must_use]
    pub const fn permits_fraction(self, attempts: u32, divisor: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Limited(max) => attempts <= max / divisor,
        }
    }

    /// Guesses left before attempt number `attempt` is played
    ///
    /// Counts the current attempt, so `remaining_at(1)` equals the full budget.
    #[must_use]
    pub const fn remaining_at(self, attempt: u32) -> Option<u32> {
        match self {
            Self::Unbounded => None,
            Self::Limited(max) => Some((max + 1).saturating_sub(attempt)),
        }
    }

    #[must_use]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::Limited(_))
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unlimited"),
            Self::Limited(max) => write!(f, "{max}"),
        }
    }
}

/// Score multiplier keyed by upper bound, evaluated top-down
const MULTIPLIERS: [(u32, u32); 4] = [(50, 1), (100, 2), (500, 3), (1000, 4)];

/// Look up the score multiplier for a range's upper bound
///
/// Returns `None` for upper bounds outside the table.
#[must_use]
pub fn multiplier_for_upper(upper: u32) -> Option<u32> {
    MULTIPLIERS
        .iter()
        .find(|&&(bound, _)| bound == upper)
        .map(|&(_, multiplier)| multiplier)
}

/// The four selectable difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All tiers in menu order (choices 1-4)
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Map a menu number (1-4) to a tier
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    #[must_use]
    pub const fn lower(self) -> u32 {
        1
    }

    #[must_use]
    pub const fn upper(self) -> u32 {
        match self {
            Self::Easy => 50,
            Self::Medium => 100,
            Self::Hard => 500,
            Self::Expert => 1000,
        }
    }

    #[must_use]
    pub const fn attempt_limit(self) -> AttemptLimit {
        match self {
            Self::Easy => AttemptLimit::Unbounded,
            Self::Medium => AttemptLimit::Limited(10),
            Self::Hard => AttemptLimit::Limited(12),
            Self::Expert => AttemptLimit::Limited(15),
        }
    }

    /// Score multiplier, derived from the upper bound
    #[must_use]
    pub fn multiplier(self) -> u32 {
        // Every preset's upper bound is in the table
        multiplier_for_upper(self.upper()).unwrap_or(1)
    }

    /// Inclusive range of valid guesses
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u32> {
        self.lower()..=self.upper()
    }

    /// Menu description, e.g. `Medium (1-100, 10 guesses)`
    #[must_use]
    pub fn description(self) -> String {
        let guesses = match self.attempt_limit() {
            AttemptLimit::Unbounded => "unlimited guesses".to_string(),
            AttemptLimit::Limited(max) => format!("{max} guesses"),
        };
        format!(
            "{} ({}-{}, {guesses})",
            self.name(),
            self.lower(),
            self.upper()
        )
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_maps_menu_entries() {
        assert_eq!(Difficulty::from_number(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_number(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_number(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_number(4), Some(Difficulty::Expert));
    }

    #[test]
    fn from_number_rejects_outside_menu() {
        for n in [0, 5, -1, 100, i64::MIN, i64::MAX] {
            assert_eq!(Difficulty::from_number(n), None, "accepted {n}");
        }
    }

    #[test]
    fn tier_presets() {
        assert_eq!(Difficulty::Easy.range(), 1..=50);
        assert_eq!(Difficulty::Easy.attempt_limit(), AttemptLimit::Unbounded);
        assert_eq!(Difficulty::Medium.range(), 1..=100);
        assert_eq!(Difficulty::Medium.attempt_limit(), AttemptLimit::Limited(10));
        assert_eq!(Difficulty::Hard.range(), 1..=500);
        assert_eq!(Difficulty::Hard.attempt_limit(), AttemptLimit::Limited(12));
        assert_eq!(Difficulty::Expert.range(), 1..=1000);
        assert_eq!(Difficulty::Expert.attempt_limit(), AttemptLimit::Limited(15));
    }

    #[test]
    fn multiplier_follows_upper_bound() {
        assert_eq!(Difficulty::Easy.multiplier(), 1);
        assert_eq!(Difficulty::Medium.multiplier(), 2);
        assert_eq!(Difficulty::Hard.multiplier(), 3);
        assert_eq!(Difficulty::Expert.multiplier(), 4);
        assert_eq!(multiplier_for_upper(75), None);
    }

    #[test]
    fn limit_comparisons() {
        let limit = AttemptLimit::Limited(10);
        assert!(limit.permits_fraction(3, 3));
        assert!(!limit.permits_fraction(4, 3));
        assert!(limit.permits_fraction(5, 2));
        assert!(!limit.permits_fraction(6, 2));

        let unbounded = AttemptLimit::Unbounded;
        assert!(!unbounded.permits_fraction(1, 3));
        assert!(!unbounded.permits_fraction(1, 2));
        assert!(unbounded.permits(1_000_000));
    }

    #[test]
    fn remaining_counts_current_attempt() {
        let limit = AttemptLimit::Limited(10);
        assert_eq!(limit.remaining_at(1), Some(10));
        assert_eq!(limit.remaining_at(10), Some(1));
        assert_eq!(AttemptLimit::Unbounded.remaining_at(3), None);
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            Difficulty::Easy.description(),
            "Easy (1-50, unlimited guesses)"
        );
        assert_eq!(
            Difficulty::Expert.description(),
            "Expert (1-1000, 15 guesses)"
        );
    }
}

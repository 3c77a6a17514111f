//! Feedback for guesses
//!
//! Direction and proximity hints for a missed guess, and the praise line for a win.
//! Both banded lookups are ordered `(threshold, result)` tables evaluated top-down.

use std::cmp::Ordering;
use std::fmt;

/// Which way the player should move after a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TooLow,
    TooHigh,
}

impl Direction {
    /// Compare a guess against the target
    ///
    /// Returns `None` on an exact match.
    #[must_use]
    pub fn of(guess: u32, target: u32) -> Option<Self> {
        match guess.cmp(&target) {
            Ordering::Less => Some(Self::TooLow),
            Ordering::Greater => Some(Self::TooHigh),
            Ordering::Equal => None,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooLow => "📈 Too low! Go higher.",
            Self::TooHigh => "📉 Too high! Go lower.",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// How close a guess landed, from exact to very cold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Proximity {
    Exact,
    VeryClose,
    Warm,
    Cold,
    VeryCold,
}

/// Closed distance bands; anything past the last is `VeryCold`
const PROXIMITY_BANDS: [(u32, Proximity); 4] = [
    (0, Proximity::Exact),
    (5, Proximity::VeryClose),
    (10, Proximity::Warm),
    (25, Proximity::Cold),
];

impl Proximity {
    /// Band for an absolute distance between guess and target
    ///
    /// # Examples
    /// ```
    /// use console_classics::core::Proximity;
    ///
    /// assert_eq!(Proximity::from_distance(0), Proximity::Exact);
    /// assert_eq!(Proximity::from_distance(5), Proximity::VeryClose);
    /// assert_eq!(Proximity::from_distance(6), Proximity::Warm);
    /// ```
    #[must_use]
    pub fn from_distance(distance: u32) -> Self {
        PROXIMITY_BANDS
            .iter()
            .find(|&&(threshold, _)| distance <= threshold)
            .map_or(Self::VeryCold, |&(_, band)| band)
    }

    /// Band for a guess against the target
    #[must_use]
    pub fn of(guess: u32, target: u32) -> Self {
        Self::from_distance(guess.abs_diff(target))
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "🎉 Correct!",
            Self::VeryClose => "🔥 Very close!",
            Self::Warm => "🌡️ Getting warm!",
            Self::Cold => "❄️ Getting cold!",
            Self::VeryCold => "🧊 Very cold!",
        }
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Praise keyed by the number of attempts a win took
const PRAISE: [(u32, &str); 3] = [
    (1, "🎭 INCREDIBLE! First try - you're a mind reader!"),
    (3, "🌟 AMAZING! You're really good at this!"),
    (5, "👏 GREAT JOB! Nice guessing skills!"),
];

const BASE_PRAISE: &str = "🎯 WELL DONE! You got there in the end!";

/// Congratulatory line for a win in `attempts` guesses
#[must_use]
pub fn praise(attempts: u32) -> &'static str {
    PRAISE
        .iter()
        .find(|&&(threshold, _)| attempts <= threshold)
        .map_or(BASE_PRAISE, |&(_, line)| line)
}

//! A single guessing-game round
//!
//! Holds the secret target, the attempt counter and the guess history, and
//! resolves each guess into a hint or a win.

use super::SecretSource;
use crate::core::{AttemptLimit, Difficulty, Direction, Proximity, calculate_score};
use thiserror::Error;

/// Reasons a guess is refused by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("guess {guess} is outside {lower}-{upper}")]
    OutOfRange { guess: u32, lower: u32, upper: u32 },
    #[error("the round is already over")]
    RoundOver,
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the round is won
    Correct { attempts: u32, score: u32 },
    /// The guess missed
    Miss {
        direction: Direction,
        proximity: Proximity,
    },
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Won { attempts: u32, score: u32 },
    Exhausted,
}

/// State of one round, discarded when it ends
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    target: u32,
    attempts: u32,
    history: Vec<u32>,
    state: RoundState,
}

impl GameSession {
    /// Start a round, drawing the target from `source`
    pub fn new(difficulty: Difficulty, mut source: impl SecretSource) -> Self {
        let target = source.draw(difficulty.range());
        tracing::debug!(%difficulty, "round started");

        Self {
            difficulty,
            target,
            attempts: 0,
            history: Vec::new(),
            state: RoundState::Playing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number the next guess will carry
    #[inline]
    #[must_use]
    pub const fn next_attempt(&self) -> u32 {
        self.attempts + 1
    }

    /// Prior guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, RoundState::Playing)
    }

    #[must_use]
    pub const fn limit(&self) -> AttemptLimit {
        self.difficulty.attempt_limit()
    }

    /// Check whether `guess` lies within the round's range
    #[must_use]
    pub fn accepts(&self, guess: u32) -> bool {
        self.difficulty.range().contains(&guess)
    }

    /// Submit a guess and advance the round
    ///
    /// # Errors
    /// - [`SessionError::RoundOver`] if the round already ended
    /// - [`SessionError::OutOfRange`] if `guess` is outside the tier's range;
    ///   the attempt is not counted
    pub fn submit(&mut self, guess: u32) -> Result<GuessOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::RoundOver);
        }
        if !self.accepts(guess) {
            return Err(SessionError::OutOfRange {
                guess,
                lower: self.difficulty.lower(),
                upper: self.difficulty.upper(),
            });
        }

        self.attempts += 1;
        self.history.push(guess);

        let Some(direction) = Direction::of(guess, self.target) else {
            let score = calculate_score(self.attempts, self.limit(), self.difficulty.multiplier());
            self.state = RoundState::Won {
                attempts: self.attempts,
                score,
            };
            tracing::info!(attempts = self.attempts, score, "round won");
            return Ok(GuessOutcome::Correct {
                attempts: self.attempts,
                score,
            });
        };

        // A full budget ends the round after this miss
        if !self.limit().permits(self.next_attempt()) {
            self.state = RoundState::Exhausted;
            tracing::info!(attempts = self.attempts, "round lost");
        }

        Ok(GuessOutcome::Miss {
            direction,
            proximity: Proximity::of(guess, self.target),
        })
    }
}

//! Guessing-game rounds
//!
//! A round draws its target through a [`SecretSource`] and tracks guesses until
//! it is won or the attempt budget runs out.

mod secret;
mod session;
mod tally;

pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use session::{GameSession, GuessOutcome, RoundState, SessionError};
pub use tally::PlayTally;

//! Console Classics
//!
//! Two interactive console programs: a calculator with power and square-root
//! extensions, and a number guessing game with difficulty tiers and scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use console_classics::core::{Difficulty, Proximity};
//! use console_classics::game::{FixedSecret, GameSession, GuessOutcome};
//!
//! let mut session = GameSession::new(Difficulty::Easy, FixedSecret(27));
//! let outcome = session.submit(30).unwrap();
//! assert!(matches!(
//!     outcome,
//!     GuessOutcome::Miss { proximity: Proximity::VeryClose, .. }
//! ));
//! ```

// Core domain types
pub mod core;

// Guessing-game rounds
pub mod game;

// Prompted line I/O
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;

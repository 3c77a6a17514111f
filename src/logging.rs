//! Diagnostic logging
//!
//! Quiet by default so the interactive transcript stays clean. Log lines go to
//! stderr; `RUST_LOG` overrides the default filter:
//!
//! ```bash
//! RUST_LOG=debug guessing_game
//! RUST_LOG=console_classics::game=info guessing_game
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Build the level filter, preferring `RUST_LOG` over `default`
#[must_use]
pub fn filter_from_env(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// Call once at startup. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(filter_from_env(DEFAULT_FILTER))
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .init();
    });
}

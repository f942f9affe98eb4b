//! Common test utilities and logging infrastructure
//!
//! Integration tests log through `tracing`. Library code logs through the
//! `log` facade; `tracing-subscriber` forwards those records as well, so
//! layout and render diagnostics show up next to the test's own output.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//!
//! #[test]
//! fn my_test() {
//!     init_test_logging();
//!     // test code...
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=console_tables::table=trace` - Module-specific tracing
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;

use console_tables::table::Table;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Idempotent; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("console_tables=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Log test context information.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}

// ============================================================================
// Fixtures
// ============================================================================

/// The three-row table used throughout the rendering tests.
pub fn numbers_table() -> Table {
    let mut table = Table::new();
    table.add_row_cells(["one", "ichi", "eins"]);
    table.add_row_cells(["two", "ni", "zwei"]);
    table.add_row_cells(["three", "san", "drei"]);
    table
}

/// Table used by the padding tests.
pub fn padding_table() -> Table {
    let mut table = Table::new().title("My Title");
    table.add_row_cells(["1234567", "123456", "one two"]);
    table.add_row_cells(["1", "asd", "asas"]);
    table.add_row_cells(["12", "a", "errr"]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_phase_logging() {
        init_test_logging();
        {
            let _setup = test_phase("setup");
            tracing::debug!("Setting up test resources");
        }
        {
            let _verify = test_phase("verify");
            tracing::debug!("Verifying results");
        }
    }
}

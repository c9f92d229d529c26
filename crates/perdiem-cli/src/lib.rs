//! perdiem-cli
//!
//! Command-line front end for the perdiem budgeting engine. Owns argument
//! parsing, input validation, presentation, and load/save timing; all budget
//! math lives in perdiem-core.

pub mod commands;
pub mod context;
pub mod error;
pub mod format;

use std::sync::Once;

pub use commands::run_cli;
pub use context::AppContext;
pub use error::CliError;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("perdiem=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

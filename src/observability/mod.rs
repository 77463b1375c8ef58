//! Tracing setup for embedders and tests.
//!
//! The engine only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. [`init_tracing`] installs a plain `fmt`
//! subscriber filtered by the `UNIT_ECONOMICS_LOG` environment variable:
//!
//! ```text
//! UNIT_ECONOMICS_LOG=unit_economics::cohort=trace,unit_economics=debug
//! ```

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives
pub const LOG_ENV_VAR: &str = "UNIT_ECONOMICS_LOG";

/// Filter used when the variable is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call has any effect, and an already-installed subscriber from the
/// host application is left in place.
pub fn init_tracing() {
    init_with(|| {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });
}

/// Like [`init_tracing`] but with explicit filter directives.
pub fn init_tracing_with_filter(directives: &str) {
    init_with(|| {
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });
}

fn init_with(filter: impl FnOnce() -> EnvFilter) {
    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter())
            .try_init();
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}

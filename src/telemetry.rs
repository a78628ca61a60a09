//! Structured logging set-up.
//!
//! Diagnostics go to stderr so report output on stdout stays clean for
//! piping. The filter comes from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    filter_from_env(EnvFilter::DEFAULT_ENV)
}

/// Builds the filter from the named variable; unset or invalid values fall
/// back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn filter_from_env(variable: &str) -> EnvFilter {
    EnvFilter::try_from_env(variable).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber once. Later calls are no-ops.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A racing initialiser may win between the check and here.
    let _ignored = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init();
}

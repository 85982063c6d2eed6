//! crates/logging/src/tracing_bridge.rs
//! Installs the global `tracing` subscriber for the rdiff binary.
//!
//! Events are written to standard error by a `fmt` layer. Which events are
//! kept is decided by an [`EnvFilter`]: the `RDIFF_LOG` environment variable
//! when it holds a valid directive string, otherwise the directives rendered
//! from a [`VerbosityConfig`].
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "rdiff::delta", "scan finished");
//! ```

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Environment variable holding `EnvFilter` directives that override `-v`.
pub const LOG_ENV_VAR: &str = "RDIFF_LOG";

/// Builds the filter for `config`, preferring `RDIFF_LOG` when it is set.
#[must_use]
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    filter_from(env::var(LOG_ENV_VAR).ok().as_deref(), config)
}

/// Builds the filter from an explicit directive string, falling back to
/// `config` when `directives` is absent, blank or unparsable.
#[must_use]
pub fn filter_from(directives: Option<&str>, config: &VerbosityConfig) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.directives()))
}

/// Installs a stderr subscriber filtered by [`env_filter`].
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is left in place.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let filter = env_filter(&config);
    init_tracing_with_filter(config, filter)
}

/// Installs a stderr subscriber filtered by `filter`.
///
/// `config` only shapes the output: event targets are printed once any
/// component runs at debug level or above.
pub fn init_tracing_with_filter(config: VerbosityConfig, filter: EnvFilter) -> bool {
    let show_targets = config.max_level() >= tracing::Level::DEBUG;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(show_targets)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).try_init().is_ok()
}

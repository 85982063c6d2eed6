#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the command line's verbosity into a `tracing` subscriber.
//! The library crates emit structured events under the `rdiff::signature`,
//! `rdiff::delta` and `rdiff::persist` targets; this crate decides which of
//! them reach standard error.
//!
//! # Design
//!
//! [`VerbosityConfig`] holds one [`LevelFilter`](tracing::level_filters::LevelFilter)
//! per [`Component`] and renders itself as `EnvFilter` directives.
//! [`init_tracing`] installs a registry with a single `fmt` layer; the
//! `RDIFF_LOG` variable ([`LOG_ENV_VAR`]) replaces the computed directives
//! entirely when set.
//!
//! # Examples
//!
//! ```
//! use logging::{Component, VerbosityConfig};
//! use tracing::level_filters::LevelFilter;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level(Component::Delta), LevelFilter::DEBUG);
//! assert!(config.directives().contains("rdiff::delta=debug"));
//! ```

mod config;
mod tracing_bridge;

pub use config::{Component, VerbosityConfig};
pub use tracing_bridge::{
    LOG_ENV_VAR, env_filter, filter_from, init_tracing, init_tracing_with_filter,
};

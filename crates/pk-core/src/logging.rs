//! Tracing bootstrap.
//!
//! Libraries only emit `tracing` events; binaries and test harnesses call
//! [`init`] once to install a formatting subscriber.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

const FALLBACK_FILTER: &str = "info";

/// Installs a global `fmt` subscriber filtered by `config.filter`.
///
/// Configuration built through [`crate::Config`] is validated, so the filter
/// parses. A hand-built config with a bad filter falls back to `info` and a
/// `warn` event records the rejected directive.
///
/// Returns `false` when a global subscriber was already installed, which
/// makes the call safe to repeat from several tests.
pub fn init(config: &LoggingConfig) -> bool {
    let (filter, rejected) = build_filter(config);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if let Some(error) = rejected {
        tracing::warn!(
            filter = %config.filter,
            %error,
            fallback = FALLBACK_FILTER,
            "invalid log filter"
        );
    }
    installed
}

fn build_filter(config: &LoggingConfig) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new(FALLBACK_FILTER), Some(error)),
    }
}

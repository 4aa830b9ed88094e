//! Tracing subscriber setup

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. The `pretty`
/// format gives human-readable output; anything else logs JSON lines.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("pretty") {
        registry.with(fmt::layer().with_target(true)).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}

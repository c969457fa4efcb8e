//! Logging setup

use aerogen_core::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the effective level: `-v` flags win over the configured level
pub fn effective_level(verbosity: u8, configured: LogLevel) -> LogLevel {
    LogLevel::from_verbosity(verbosity).map_or(configured, |level| level.min(configured))
}

/// Install the global subscriber; `RUST_LOG` overrides `level`
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!("logging initialized at level {level}");
    }
}

//! Tracing subscriber setup
//!
//! Events go to stderr so walkthrough output on stdout stays clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber filtered at `level`
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?;

    let subscriber = tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

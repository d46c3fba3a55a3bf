//! Diagnostic logging for the command front end
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for
//! command results. `RUST_LOG` takes precedence over the `--verbose` level.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, SemverError};

/// Install the global subscriber. Call once, before dispatching.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| SemverError::config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(verbose, "logging initialized");
    Ok(())
}

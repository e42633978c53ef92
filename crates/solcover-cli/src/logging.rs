// crates/solcover-cli/src/logging.rs
// ============================================================================
// Module: CLI Logging
// Description: Tracing subscriber setup for the Solcover CLI.
// Purpose: Route library tracing events to stderr with a configurable filter.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! Events are written to stderr so stdout stays reserved for command output.
//! The filter comes from `SOLCOVER_LOG` when set and valid; otherwise from the
//! number of `-v` flags (warn, info, debug, trace).

use thiserror::Error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable holding tracing filter directives.
pub const LOG_ENV: &str = "SOLCOVER_LOG";

/// Errors raised while configuring logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Filter directives could not be parsed.
    #[error("invalid SOLCOVER_LOG directives: {0}")]
    Filter(String),
    /// A global subscriber was already installed.
    #[error("subscriber init failed: {0}")]
    Init(String),
}

/// Returns the default filter directive for a `-v` count.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the event filter from explicit directives or the verbosity level.
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] when `directives` cannot be parsed.
pub fn build_filter(directives: Option<&str>, verbosity: u8) -> Result<EnvFilter, LoggingError> {
    match directives {
        Some(value) if !value.trim().is_empty() => {
            EnvFilter::try_new(value).map_err(|err| LoggingError::Filter(err.to_string()))
        }
        _ => Ok(EnvFilter::new(default_directive(verbosity))),
    }
}

/// Installs the global stderr subscriber.
///
/// Unparseable `SOLCOVER_LOG` directives do not block the command: the filter
/// falls back to the `-v` level and a warning names the rejected value.
///
/// # Errors
///
/// Returns [`LoggingError::Init`] when a subscriber is already installed.
pub fn init_logging(directives: Option<&str>, verbosity: u8) -> Result<(), LoggingError> {
    let (filter, rejected) = match build_filter(directives, verbosity) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(default_directive(verbosity)), Some(err)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))?;
    if let Some(err) = rejected {
        warn!(error = %err, fallback = default_directive(verbosity), "ignoring SOLCOVER_LOG");
    }
    Ok(())
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::LogConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install global subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter for `level`, letting `RUST_LOG` directives extend it.
pub fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = match std::env::var("RUST_LOG") {
        Ok(extra) if !extra.is_empty() => format!("{},{}", level, extra),
        _ => level.to_string(),
    };

    EnvFilter::try_new(&directives).map_err(|source| LoggingError::InvalidLogLevel {
        level: directives,
        source,
    })
}

/// Install the global subscriber.
///
/// Output goes to stderr so command output on stdout stays machine-readable.
///
/// # Examples
/// ```no_run
/// use switchboard_aptos::logging;
///
/// logging::init(&config::LogConfig::default())?;
/// # Ok::<(), logging::LoggingError>(())
/// ```
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(!config.strip_ansi)
            .with_writer(std::io::stderr);

        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Where and how the SDK writes its logs. Output always goes to stderr.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter, in `RUST_LOG` syntax. `RUST_LOG` directives are added
    /// on top at startup.
    ///
    /// Env: SWITCHBOARD_LOG_LEVEL
    /// Examples: `debug`, `info,switchboard_aptos::client=trace`
    /// Default: info
    #[serde(default = "default_level")]
    pub level: String,

    /// One JSON object per line instead of human-readable output
    ///
    /// Env: SWITCHBOARD_LOG_JSON
    /// Default: false
    #[serde(default)]
    pub json: bool,

    /// Env: SWITCHBOARD_LOG_STRIP_ANSI
    /// Default: false
    #[serde(default)]
    pub strip_ansi: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    /// Every comma-separated directive must end in a level, so a bare word
    /// like `loud` is not silently taken as a target name.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| {
            ConfigError::ValidateError(format!("Invalid log level '{}': {}", self.level, reason))
        };

        if self.level.trim().is_empty() {
            return Err(invalid("no directives".to_string()));
        }

        for directive in self.level.split(',') {
            let level = directive
                .rsplit_once('=')
                .map_or(directive, |(_, level)| level)
                .trim();
            if level.parse::<LevelFilter>().is_err() {
                return Err(invalid(format!("'{}' is not a level", level)));
            }
        }

        EnvFilter::try_new(&self.level).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(level: &str) -> LogConfig {
        LogConfig {
            level: level.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
        assert!(!config.strip_ansi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bare_levels() {
        for l in ["trace", "debug", "info", "warn", "error", "off"] {
            assert!(level(l).validate().is_ok(), "{} should be accepted", l);
        }
    }

    #[test]
    fn test_target_directives() {
        for l in [
            "info,switchboard_aptos=debug",
            "warn,switchboard_aptos::client=trace,reqwest=off",
            "switchboard_aptos=debug",
        ] {
            assert!(level(l).validate().is_ok(), "{} should be accepted", l);
        }
    }

    #[test]
    fn test_rejects_unknown_levels() {
        for l in ["", " ", "verbose", "loud", "info,switchboard_aptos=loud", "info,"] {
            assert!(
                matches!(level(l).validate(), Err(ConfigError::ValidateError(_))),
                "{:?} should be rejected",
                l
            );
        }
    }
}

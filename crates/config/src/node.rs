// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Fullnode REST endpoint, including the API version path
    ///
    /// Env: APTOS_NODE_URL
    /// Valid schemes: http://, https://
    /// Default: https://fullnode.devnet.aptoslabs.com/v1
    #[serde(default = "default_node_url")]
    pub node_url: String,

    /// Faucet endpoint used to fund accounts on test networks
    ///
    /// Env: APTOS_FAUCET_URL
    /// Default: https://faucet.devnet.aptoslabs.com
    #[serde(default = "default_faucet_url")]
    pub faucet_url: String,

    /// Per-request HTTP timeout in seconds
    ///
    /// Env: APTOS_REQUEST_TIMEOUT_SECS
    /// Default: 30
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_node_url() -> String {
    "https://fullnode.devnet.aptoslabs.com/v1".to_string()
}

fn default_faucet_url() -> String {
    "https://faucet.devnet.aptoslabs.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl NodeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_url("node", &self.node_url)?;
        Self::validate_url("faucet", &self.faucet_url)?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Request timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url(what: &str, url_str: &str) -> Result<(), ConfigError> {
        if url_str.is_empty() {
            return Err(ConfigError::ValidateError(format!(
                "{} URL cannot be empty",
                what
            )));
        }

        let parsed = url::Url::parse(url_str).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid {} URL '{}': {}", what, url_str, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::ValidateError(format!(
                "Invalid {} URL scheme '{}'. Must be http:// or https://",
                what, scheme
            ))),
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            faucet_url: default_faucet_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_node_config() {
        let config = NodeConfig::default();
        assert_eq!(config.node_url, "https://fullnode.devnet.aptoslabs.com/v1");
        assert_eq!(config.faucet_url, "https://faucet.devnet.aptoslabs.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_url() {
        let config = NodeConfig {
            node_url: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_url_format() {
        let config = NodeConfig {
            node_url: "not-a-valid-url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_scheme() {
        let config = NodeConfig {
            faucet_url: "ws://localhost:8081".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_local_http_url() {
        let config = NodeConfig {
            node_url: "http://127.0.0.1:8080/v1".to_string(),
            faucet_url: "http://127.0.0.1:8081".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = NodeConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

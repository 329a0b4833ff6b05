// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::Deserialize;

/// Where the Switchboard Move modules live on chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Account that published the Switchboard modules
    ///
    /// Env: SWITCHBOARD_ADDRESS
    /// Required
    pub address: String,

    /// Account holding the Switchboard state resource
    ///
    /// Env: SWITCHBOARD_STATE_ADDRESS
    /// Default: same as SWITCHBOARD_ADDRESS
    #[serde(default)]
    pub state_address: Option<String>,
}

impl ContractConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state_address: None,
        }
    }

    /// State account, falling back to the module publisher.
    pub fn state_address(&self) -> &str {
        self.state_address.as_deref().unwrap_or(&self.address)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        validate_hex_address("Switchboard address", &self.address)?;
        if let Some(state) = &self.state_address {
            validate_hex_address("Switchboard state address", state)?;
        }
        Ok(())
    }
}

/// Accepts `0x`-optional account address literals of 1 to 64 hex digits.
pub(crate) fn validate_hex_address(what: &str, value: &str) -> Result<(), ConfigError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);

    if digits.is_empty() || digits.len() > 64 {
        return Err(ConfigError::ValidateError(format!(
            "{} '{}' must have between 1 and 64 hex digits",
            what, value
        )));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::ValidateError(format!(
            "{} '{}' is not valid hex",
            what, value
        )));
    }

    Ok(())
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use crate::contract::validate_hex_address;
use serde::Deserialize;

/// Signing account used for submitting transactions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountConfig {
    /// Hex-encoded 32-byte ed25519 seed
    ///
    /// Env: APTOS_ACCOUNT_PRIVATE_KEY
    /// Default: unset (read-only usage)
    #[serde(default)]
    pub private_key: Option<String>,

    /// On-chain address of the signing account
    ///
    /// Env: APTOS_ACCOUNT_ADDRESS
    /// Default: unset
    #[serde(default)]
    pub address: Option<String>,
}

impl AccountConfig {
    pub fn is_configured(&self) -> bool {
        self.private_key.is_some() && self.address.is_some()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match (&self.private_key, &self.address) {
            (None, None) => Ok(()),
            (Some(key), Some(address)) => {
                let digits = key.strip_prefix("0x").unwrap_or(key);
                if digits.len() != 64 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ConfigError::ValidateError(
                        "Account private key must be 32 hex-encoded bytes".to_string(),
                    ));
                }
                validate_hex_address("Account address", address)
            }
            _ => Err(ConfigError::ValidateError(
                "Account private key and address must be set together".to_string(),
            )),
        }
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionConfig {
    /// Maximum gas units a single transaction may consume
    ///
    /// Env: SWITCHBOARD_TX_MAX_GAS_AMOUNT
    /// Default: 200000
    #[serde(default = "default_max_gas_amount")]
    pub max_gas_amount: u64,

    /// Price per gas unit, in octas
    ///
    /// Env: SWITCHBOARD_TX_GAS_UNIT_PRICE
    /// Default: 100
    #[serde(default = "default_gas_unit_price")]
    pub gas_unit_price: u64,

    /// Seconds from submission after which the node drops the transaction
    ///
    /// Env: SWITCHBOARD_TX_EXPIRATION_SECS
    /// Default: 20
    #[serde(default = "default_expiration_secs")]
    pub expiration_secs: u64,

    /// How long to wait for a submitted transaction to be confirmed
    ///
    /// Env: SWITCHBOARD_TX_WAIT_TIMEOUT_SECS
    /// Default: 20
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    /// Delay between confirmation polls, in milliseconds
    ///
    /// Env: SWITCHBOARD_TX_POLL_INTERVAL_MS
    /// Default: 500
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_max_gas_amount() -> u64 {
    200_000
}

fn default_gas_unit_price() -> u64 {
    100
}

fn default_expiration_secs() -> u64 {
    20
}

fn default_wait_timeout_secs() -> u64 {
    20
}

fn default_poll_interval_ms() -> u64 {
    500
}

impl TransactionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_gas_amount == 0 {
            return Err(ConfigError::ValidateError(
                "Max gas amount cannot be 0".to_string(),
            ));
        }

        if self.expiration_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Transaction expiration cannot be 0".to_string(),
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Poll interval cannot be 0".to_string(),
            ));
        }

        if self.poll_interval_ms > self.wait_timeout_secs.saturating_mul(1000) {
            return Err(ConfigError::ValidateError(format!(
                "Poll interval ({}ms) exceeds wait timeout ({}s)",
                self.poll_interval_ms, self.wait_timeout_secs
            )));
        }

        Ok(())
    }
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            max_gas_amount: default_max_gas_amount(),
            gas_unit_price: default_gas_unit_price(),
            expiration_secs: default_expiration_secs(),
            wait_timeout_secs: default_wait_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

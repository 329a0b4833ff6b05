// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod account;
mod contract;
mod error;
mod log;
mod node;
mod transaction;

pub use account::AccountConfig;
pub use contract::ContractConfig;
pub use error::ConfigError;
pub use log::LogConfig;
pub use node::NodeConfig;
pub use transaction::TransactionConfig;

use std::path::Path;

const NODE_PREFIX: &str = "APTOS_";
const ACCOUNT_PREFIX: &str = "APTOS_ACCOUNT_";
const CONTRACT_PREFIX: &str = "SWITCHBOARD_";
const TRANSACTION_PREFIX: &str = "SWITCHBOARD_TX_";
const LOG_PREFIX: &str = "SWITCHBOARD_LOG_";

#[derive(Debug, Clone)]
pub struct SdkConfig {
    pub node: NodeConfig,
    pub contract: ContractConfig,
    pub transaction: TransactionConfig,
    pub account: AccountConfig,
    pub log: LogConfig,
}

impl SdkConfig {
    pub fn new(contract: ContractConfig) -> Self {
        Self {
            node: NodeConfig::default(),
            contract,
            transaction: TransactionConfig::default(),
            account: AccountConfig::default(),
            log: LogConfig::default(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_iter(std::env::vars())
    }

    /// Load `path` into the process environment, then read the config from it.
    ///
    /// Variables already present in the environment take precedence.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_env()
    }

    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        let config = Self {
            node: envy::prefixed(NODE_PREFIX).from_iter(vars.clone())?,
            contract: envy::prefixed(CONTRACT_PREFIX).from_iter(vars.clone())?,
            transaction: envy::prefixed(TRANSACTION_PREFIX).from_iter(vars.clone())?,
            account: envy::prefixed(ACCOUNT_PREFIX).from_iter(vars.clone())?,
            log: envy::prefixed(LOG_PREFIX).from_iter(vars)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.node.validate()?;
        self.contract.validate()?;
        self.transaction.validate()?;
        self.account.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

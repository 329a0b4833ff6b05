// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ClientError, read_json};
use crate::types::AccountAddress;
use config::NodeConfig;
use reqwest::Client;
use std::time::Duration;

/// Client for the test-network faucet.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    base_url: String,
    http: Client,
}

impl FaucetClient {
    pub fn new(node: &NodeConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(node.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: node.faucet_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Mint `amount` octas into `address`, creating the account if needed.
    ///
    /// Returns the hashes of the faucet's transactions.
    pub async fn fund_account(
        &self,
        address: &AccountAddress,
        amount: u64,
    ) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/mint", self.base_url);
        tracing::debug!(address = %address, amount, "Requesting faucet funds");

        let response = self
            .http
            .post(&url)
            .query(&[("amount", amount.to_string()), ("address", address.to_string())])
            .send()
            .await?;

        read_json(&url, response).await
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fullnode REST client.
//!
//! Submission follows the node-side encoding flow: the unsigned transaction
//! is posted to `/transactions/encode_submission`, the returned signing
//! message is signed locally, and the signed transaction is posted to
//! `/transactions`.

mod error;
mod faucet;
mod signer;
pub mod types;

pub use error::ClientError;
pub use faucet::FaucetClient;
pub use signer::{Ed25519Signer, Signer};
pub use types::{
    AccountData, Ed25519Signature, PendingTransaction, SignedTransaction, TransactionInfo,
    UnsignedTransaction,
};

use crate::transaction::EntryFunctionPayload;
use crate::types::AccountAddress;
use config::{NodeConfig, TransactionConfig};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use types::ApiErrorBody;

#[derive(Debug, Clone)]
pub struct AptosClient {
    base_url: String,
    http: Client,
    transaction: TransactionConfig,
}

impl AptosClient {
    pub fn new(node: &NodeConfig, transaction: TransactionConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(node.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: node.node_url.trim_end_matches('/').to_string(),
            http,
            transaction,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transaction_config(&self) -> &TransactionConfig {
        &self.transaction
    }

    pub async fn account(&self, address: &AccountAddress) -> Result<AccountData, ClientError> {
        self.get_json(&format!("/accounts/{}", address)).await
    }

    pub async fn sequence_number(&self, address: &AccountAddress) -> Result<u64, ClientError> {
        let account = self.account(address).await?;
        account
            .sequence_number
            .parse()
            .map_err(|_| ClientError::Decode {
                url: self.url(&format!("/accounts/{}", address)),
                cause: format!("invalid sequence number '{}'", account.sequence_number),
            })
    }

    /// Ask the node for the bytes to sign.
    pub async fn encode_submission(
        &self,
        transaction: &UnsignedTransaction,
    ) -> Result<Vec<u8>, ClientError> {
        let path = "/transactions/encode_submission";
        let encoded: String = self.post_json(path, transaction).await?;
        let digits = encoded.strip_prefix("0x").unwrap_or(&encoded);

        hex::decode(digits).map_err(|e| ClientError::Decode {
            url: self.url(path),
            cause: format!("signing message is not hex: {}", e),
        })
    }

    pub async fn submit(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<PendingTransaction, ClientError> {
        self.post_json("/transactions", transaction).await
    }

    /// `None` while the node has not seen the transaction yet.
    pub async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionInfo>, ClientError> {
        let url = self.url(&format!("/transactions/by_hash/{}", hash));
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        read_json(&url, response).await.map(Some)
    }

    /// Poll until the transaction leaves the mempool or the wait timeout elapses.
    pub async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionInfo, ClientError> {
        let timeout = Duration::from_secs(self.transaction.wait_timeout_secs);
        let interval = Duration::from_millis(self.transaction.poll_interval_ms);
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            match self.transaction_by_hash(hash).await? {
                Some(info) if !info.is_pending() => return Ok(info),
                _ => tracing::trace!(hash, "Transaction still pending"),
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(ClientError::Timeout {
                    hash: hash.to_string(),
                    timeout_secs: self.transaction.wait_timeout_secs,
                });
            }

            tokio::time::sleep(interval).await;
        }
    }

    pub async fn build_transaction(
        &self,
        sender: AccountAddress,
        payload: EntryFunctionPayload,
    ) -> Result<UnsignedTransaction, ClientError> {
        let sequence_number = self.sequence_number(&sender).await?;
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Ok(UnsignedTransaction {
            sender,
            sequence_number: sequence_number.to_string(),
            max_gas_amount: self.transaction.max_gas_amount.to_string(),
            gas_unit_price: self.transaction.gas_unit_price.to_string(),
            expiration_timestamp_secs: (now + self.transaction.expiration_secs).to_string(),
            payload,
        })
    }

    pub async fn sign_transaction(
        &self,
        signer: &dyn Signer,
        transaction: UnsignedTransaction,
    ) -> Result<SignedTransaction, ClientError> {
        let message = self.encode_submission(&transaction).await?;
        let signature = Ed25519Signature {
            public_key: format!("0x{}", hex::encode(signer.public_key())),
            signature: format!("0x{}", hex::encode(signer.sign(&message))),
        };

        Ok(SignedTransaction {
            transaction,
            signature,
        })
    }

    /// Build, sign, submit and wait for an entry-function transaction.
    ///
    /// Returns the committed transaction. A transaction that commits but
    /// aborts during execution is reported as [`ClientError::ExecutionFailed`].
    pub async fn send_entry_function(
        &self,
        signer: &dyn Signer,
        payload: EntryFunctionPayload,
    ) -> Result<TransactionInfo, ClientError> {
        let sender = signer.address();
        tracing::debug!(function = %payload.function, sender = %sender, "Building transaction");

        let unsigned = self.build_transaction(sender, payload).await?;
        let signed = self.sign_transaction(signer, unsigned).await?;
        let pending = self.submit(&signed).await?;
        tracing::info!(hash = %pending.hash, "Transaction submitted");

        let info = self.wait_for_transaction(&pending.hash).await?;
        if info.success == Some(false) {
            let vm_status = info.vm_status.unwrap_or_default();
            tracing::warn!(hash = %info.hash, vm_status = %vm_status, "Transaction failed");
            return Err(ClientError::ExecutionFailed {
                hash: info.hash,
                vm_status,
            });
        }

        tracing::info!(hash = %info.hash, version = ?info.version, "Transaction committed");
        Ok(info)
    }

    // ================================================================================================
    // HTTP helpers
    // ================================================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        let response = self.http.get(&url).send().await?;
        read_json(&url, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.http.post(&url).json(body).send().await?;
        read_json(&url, response).await
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(ClientError::Api {
            status: status.as_u16(),
            url: url.to_string(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        cause: e.to_string(),
    })
}

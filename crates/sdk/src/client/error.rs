// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::transaction::PayloadError;
use crate::types::AddressParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Node returned {status} for {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Failed to decode node response from {url}: {cause}")]
    Decode { url: String, cause: String },

    #[error("Transaction {hash} was not confirmed within {timeout_secs}s")]
    Timeout { hash: String, timeout_secs: u64 },

    #[error("Transaction {hash} failed: {vm_status}")]
    ExecutionFailed { hash: String, vm_status: String },

    #[error("{0} Error: No Payer Found")]
    MissingSigner(&'static str),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressParseError),

    #[error("Cannot build payload: {0}")]
    Payload(#[from] PayloadError),
}

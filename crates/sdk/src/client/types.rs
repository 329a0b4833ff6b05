// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request and response bodies of the fullnode REST API.
//!
//! The node serializes 64-bit integers as decimal strings.

use crate::transaction::EntryFunctionPayload;
use crate::types::AccountAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AccountData {
    pub sequence_number: String,
    pub authentication_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnsignedTransaction {
    pub sender: AccountAddress,
    pub sequence_number: String,
    pub max_gas_amount: String,
    pub gas_unit_price: String,
    pub expiration_timestamp_secs: String,
    pub payload: EntryFunctionPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ed25519_signature")]
pub struct Ed25519Signature {
    pub public_key: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub transaction: UnsignedTransaction,
    pub signature: Ed25519Signature,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Transaction as returned by `/transactions/by_hash`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub vm_status: Option<String>,
}

impl TransactionInfo {
    pub fn is_pending(&self) -> bool {
        self.kind == "pending_transaction"
    }
}

/// Error body the node attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

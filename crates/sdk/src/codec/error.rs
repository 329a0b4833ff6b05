// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::AddressParseError;
use thiserror::Error;

/// Failures on the decode paths (`from_json`, `from_move_struct`).
///
/// `field` is the key as it appears in the input, qualified with its parent
/// for nested records (`variance_tolerance_multiplier.value`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    #[error("Malformed integer in `{field}`: '{value}' is not an unsigned decimal integer of at most 256 bits")]
    MalformedInteger { field: String, value: String },

    #[error("Malformed byte array in `{field}`: element {index} ({value}) is not in 0..=255")]
    MalformedByteArray {
        field: String,
        index: usize,
        value: String,
    },

    #[error("Malformed address in `{field}`: '{value}': {source}")]
    MalformedAddress {
        field: String,
        value: String,
        source: AddressParseError,
    },

    #[error("Malformed hex in `{field}`: '{value}'")]
    MalformedHex { field: String, value: String },

    #[error("Missing field `{0}`")]
    MissingField(String),

    #[error("Invalid type for `{field}`: expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Expected a JSON object")]
    ExpectedObject,
}

impl TranscodeError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedInteger { field, .. }
            | Self::MalformedByteArray { field, .. }
            | Self::MalformedAddress { field, .. }
            | Self::MalformedHex { field, .. }
            | Self::InvalidType { field, .. } => Some(field),
            Self::MissingField(field) => Some(field),
            Self::ExpectedObject => None,
        }
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ADDRESS_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,

    #[error("address has {0} hex digits, at most 64 allowed")]
    TooLong(usize),

    #[error("address has {0} hex digits, expected 64")]
    WrongLength(usize),

    #[error("address contains non-hex characters")]
    InvalidHex,
}

/// 32-byte on-chain account address.
///
/// Always displayed as `0x` followed by 64 lowercase hex digits. Wire input
/// must be full width; `FromStr` additionally accepts the short literal forms
/// used by Move (`0x1`, `1`) for config and command-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct AccountAddress(pub H256);

impl AccountAddress {
    pub const ZERO: Self = Self(H256::zero());

    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(H256(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        self.0.as_fixed_bytes()
    }

    pub fn into_inner(self) -> H256 {
        self.0
    }

    /// Parse exactly 64 hex digits, with or without the `0x` prefix.
    pub fn from_hex_literal(literal: &str) -> Result<Self, AddressParseError> {
        let digits = literal.strip_prefix("0x").unwrap_or(literal);

        if digits.is_empty() {
            return Err(AddressParseError::Empty);
        }
        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressParseError::WrongLength(digits.len()));
        }

        Self::decode_digits(digits)
    }

    /// Parse a Move short literal such as `0x1`, left-padding with zeros.
    pub fn from_short_literal(literal: &str) -> Result<Self, AddressParseError> {
        let digits = literal.strip_prefix("0x").unwrap_or(literal);

        if digits.is_empty() {
            return Err(AddressParseError::Empty);
        }
        if digits.len() > ADDRESS_LENGTH * 2 {
            return Err(AddressParseError::TooLong(digits.len()));
        }

        Self::decode_digits(&format!("{:0>64}", digits))
    }

    fn decode_digits(digits: &str) -> Result<Self, AddressParseError> {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressParseError::InvalidHex)?;
        Ok(Self::new(bytes))
    }
}

impl From<H256> for AccountAddress {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl From<AccountAddress> for H256 {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

impl FromStr for AccountAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_short_literal(s)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_bytes()))
    }
}

impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_literal(&s).map_err(serde::de::Error::custom)
    }
}

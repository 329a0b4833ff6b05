// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry-function payloads built from parameter records.
//!
//! Each record knows the Move module it targets and the positional argument
//! list that module's `run` function takes. The Switchboard state address is
//! always the first argument.

use crate::codec::MoveParams;
use crate::types::{AccountAddress, AddressParseError};
use config::ContractConfig;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("`{field}` cannot be negative: {module} takes no sign argument for it")]
    NegativeDecimal {
        module: &'static str,
        field: &'static str,
    },
}

/// A single positional argument to an entry function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveArg {
    Address(AccountAddress),
    /// `vector<u8>`, sent as `0x` hex.
    Bytes(Vec<u8>),
    /// `u64`/`u128`, sent as a decimal string.
    Integer(U256),
    U8(u8),
    Bool(bool),
}

impl MoveArg {
    /// Encoding expected by the node's JSON transaction API.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Address(address) => Value::String(address.to_string()),
            Self::Bytes(bytes) => Value::String(format!("0x{}", hex::encode(bytes))),
            Self::Integer(n) => Value::String(n.to_string()),
            Self::U8(n) => Value::from(*n),
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

impl From<AccountAddress> for MoveArg {
    fn from(value: AccountAddress) -> Self {
        Self::Address(value)
    }
}

impl From<Vec<u8>> for MoveArg {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<U256> for MoveArg {
    fn from(value: U256) -> Self {
        Self::Integer(value)
    }
}

impl From<u8> for MoveArg {
    fn from(value: u8) -> Self {
        Self::U8(value)
    }
}

impl From<bool> for MoveArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "entry_function_payload")]
pub struct EntryFunctionPayload {
    /// Fully qualified `address::module::function`.
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

/// Addresses of the deployed program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramAddresses {
    /// Account the Switchboard modules are published under.
    pub contract: AccountAddress,
    /// Account holding the Switchboard state resource.
    pub state: AccountAddress,
}

impl ProgramAddresses {
    pub fn from_config(config: &ContractConfig) -> Result<Self, AddressParseError> {
        Ok(Self {
            contract: config.address.parse()?,
            state: config.state_address().parse()?,
        })
    }
}

/// A parameter record that maps onto one Switchboard entry function.
pub trait EntryCall: MoveParams {
    /// Move module name, e.g. `AggregatorInitAction`.
    const MODULE: &'static str;
    const FUNCTION: &'static str = "run";

    /// Positional arguments after the state address.
    fn arguments(&self) -> Vec<MoveArg>;

    /// Reject values the entry function cannot represent.
    fn check(&self) -> Result<(), PayloadError> {
        Ok(())
    }

    fn function_id(contract: &AccountAddress) -> String {
        format!("{}::{}::{}", contract, Self::MODULE, Self::FUNCTION)
    }

    fn payload(&self, program: &ProgramAddresses) -> Result<EntryFunctionPayload, PayloadError> {
        self.check()?;

        let arguments = std::iter::once(MoveArg::Address(program.state))
            .chain(self.arguments())
            .map(|arg| arg.to_json())
            .collect();

        Ok(EntryFunctionPayload {
            function: Self::function_id(&program.contract),
            type_arguments: vec![],
            arguments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_arg_encoding() {
        assert_eq!(MoveArg::Bytes(vec![0x0a, 0x0b]).to_json(), json!("0x0a0b"));
        assert_eq!(MoveArg::Bytes(vec![]).to_json(), json!("0x"));
        assert_eq!(
            MoveArg::Integer(U256::from(u64::MAX)).to_json(),
            json!("18446744073709551615")
        );
        assert_eq!(MoveArg::U8(3).to_json(), json!(3));
        assert_eq!(MoveArg::Bool(false).to_json(), json!(false));
    }

    #[test]
    fn test_payload_serialization() {
        let payload = EntryFunctionPayload {
            function: "0x1::Mod::run".to_string(),
            type_arguments: vec![],
            arguments: vec![json!("1")],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "entry_function_payload",
                "function": "0x1::Mod::run",
                "type_arguments": [],
                "arguments": ["1"]
            })
        );

        let back: EntryFunctionPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_program_addresses_from_config() {
        let config = ContractConfig::new("0x7");
        let program = ProgramAddresses::from_config(&config).unwrap();
        assert_eq!(program.contract, program.state);
        assert_eq!(program.contract.as_bytes()[31], 7);

        assert!(ProgramAddresses::from_config(&ContractConfig::new("BLAHBLAHBLAH")).is_err());
    }
}

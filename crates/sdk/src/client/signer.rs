// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ClientError;
use crate::types::AccountAddress;
use config::AccountConfig;
use sp_core::crypto::ByteArray;
use sp_core::{Pair, ed25519};
use std::fmt;

/// Signs transactions on behalf of one account.
pub trait Signer: Send + Sync {
    fn address(&self) -> AccountAddress;

    fn public_key(&self) -> Vec<u8>;

    fn sign(&self, message: &[u8]) -> Vec<u8>;
}

/// ed25519 key pair bound to an account address.
///
/// The address is supplied rather than derived, since an account keeps its
/// address across key rotations.
#[derive(Clone)]
pub struct Ed25519Signer {
    address: AccountAddress,
    pair: ed25519::Pair,
}

impl Ed25519Signer {
    pub fn from_seed(seed: [u8; 32], address: AccountAddress) -> Self {
        Self {
            address,
            pair: ed25519::Pair::from_seed(&seed),
        }
    }

    /// Build from a hex-encoded 32-byte seed (`0x` prefix optional).
    pub fn from_hex(private_key: &str, address: AccountAddress) -> Result<Self, ClientError> {
        let digits = private_key.strip_prefix("0x").unwrap_or(private_key);
        let mut seed = [0u8; 32];
        hex::decode_to_slice(digits, &mut seed)
            .map_err(|e| ClientError::InvalidKey(e.to_string()))?;
        Ok(Self::from_seed(seed, address))
    }

    /// `None` when no signing account is configured.
    pub fn from_config(config: &AccountConfig) -> Result<Option<Self>, ClientError> {
        match (&config.private_key, &config.address) {
            (Some(key), Some(address)) => Ok(Some(Self::from_hex(key, address.parse()?)?)),
            _ => Ok(None),
        }
    }
}

impl Signer for Ed25519Signer {
    fn address(&self) -> AccountAddress {
        self.address
    }

    fn public_key(&self) -> Vec<u8> {
        self.pair.public().to_raw_vec()
    }

    fn sign(&self, message: &[u8]) -> Vec<u8> {
        let signature = self.pair.sign(message);
        let bytes: &[u8] = signature.as_ref();
        bytes.to_vec()
    }
}

impl fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Signer")
            .field("address", &self.address)
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_verifies() {
        let signer = Ed25519Signer::from_seed([7; 32], AccountAddress::new([1; 32]));
        let message = b"switchboard";
        let signature = signer.sign(message);

        assert_eq!(signature.len(), 64);
        assert_eq!(signer.public_key().len(), 32);

        let public = ed25519::Public::from_slice(&signer.public_key()).unwrap();
        let signature = ed25519::Signature::from_slice(&signature).unwrap();
        assert!(ed25519::Pair::verify(&signature, message, &public));
    }

    #[test]
    fn test_from_hex_matches_seed() {
        let from_hex =
            Ed25519Signer::from_hex(&format!("0x{}", "07".repeat(32)), AccountAddress::ZERO).unwrap();
        let from_seed = Ed25519Signer::from_seed([7; 32], AccountAddress::ZERO);
        assert_eq!(from_hex.public_key(), from_seed.public_key());
    }

    #[test]
    fn test_from_hex_rejects_short_key() {
        assert!(matches!(
            Ed25519Signer::from_hex("0x1234", AccountAddress::ZERO),
            Err(ClientError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_from_config() {
        assert!(Ed25519Signer::from_config(&AccountConfig::default()).unwrap().is_none());

        let config = AccountConfig {
            private_key: Some("01".repeat(32)),
            address: Some("0x42".to_string()),
        };
        let signer = Ed25519Signer::from_config(&config).unwrap().unwrap();
        assert_eq!(signer.address().as_bytes()[31], 0x42);
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = Ed25519Signer::from_seed([9; 32], AccountAddress::ZERO);
        let debug = format!("{:?}", signer);
        assert!(!debug.contains(&"09".repeat(32)));
    }
}

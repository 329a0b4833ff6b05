// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Byte-vector fields on the decode path.
//!
//! Nodes have returned `vector<u8>` struct fields both as hex strings and as
//! plain arrays across releases, so the Move-struct decoder accepts either.

use super::TranscodeError;
use serde_json::Value;

/// A byte-vector field as it arrived, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ByteField {
    /// Hex string, `0x` prefix optional.
    Hex(String),
    /// Array of JSON numbers, one per byte.
    Array(Vec<Value>),
}

impl ByteField {
    pub fn from_value(value: &Value, field: &str) -> Result<Self, TranscodeError> {
        match value {
            Value::String(s) => Ok(Self::Hex(s.clone())),
            Value::Array(items) => Ok(Self::Array(items.clone())),
            _ => Err(TranscodeError::InvalidType {
                field: field.to_string(),
                expected: "hex string or byte array",
            }),
        }
    }

    pub fn into_bytes(self, field: &str) -> Result<Vec<u8>, TranscodeError> {
        match self {
            Self::Hex(s) => decode_hex(&s, field),
            Self::Array(items) => decode_byte_array(&items, field),
        }
    }
}

pub(crate) fn decode_hex(s: &str, field: &str) -> Result<Vec<u8>, TranscodeError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|_| TranscodeError::MalformedHex {
        field: field.to_string(),
        value: s.to_string(),
    })
}

pub(crate) fn decode_byte_array(items: &[Value], field: &str) -> Result<Vec<u8>, TranscodeError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| TranscodeError::MalformedByteArray {
                    field: field.to_string(),
                    index,
                    value: item.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hex_and_array_agree() {
        let from_hex = ByteField::from_value(&json!("0a0b"), "name")
            .unwrap()
            .into_bytes("name")
            .unwrap();
        let from_array = ByteField::from_value(&json!([10, 11]), "name")
            .unwrap()
            .into_bytes("name")
            .unwrap();

        assert_eq!(from_hex, vec![10, 11]);
        assert_eq!(from_hex, from_array);
    }

    #[test]
    fn test_hex_prefix_is_optional() {
        assert_eq!(decode_hex("0xff00", "f").unwrap(), vec![0xff, 0x00]);
        assert_eq!(decode_hex("ff00", "f").unwrap(), vec![0xff, 0x00]);
        assert_eq!(decode_hex("0x", "f").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_bad_hex() {
        assert!(matches!(
            decode_hex("0xZZ", "metadata"),
            Err(TranscodeError::MalformedHex { field, value }) if field == "metadata" && value == "0xZZ"
        ));
        assert!(matches!(
            decode_hex("abc", "metadata"),
            Err(TranscodeError::MalformedHex { .. })
        ));
    }

    #[test]
    fn test_byte_out_of_range() {
        let err = decode_byte_array(&[json!(1), json!(256)], "name").unwrap_err();
        assert_eq!(
            err,
            TranscodeError::MalformedByteArray {
                field: "name".to_string(),
                index: 1,
                value: "256".to_string(),
            }
        );
    }

    #[test]
    fn test_byte_array_rejects_non_integers() {
        assert!(decode_byte_array(&[json!(-1)], "name").is_err());
        assert!(decode_byte_array(&[json!(1.5)], "name").is_err());
        assert!(decode_byte_array(&[json!("1")], "name").is_err());
    }

    #[test]
    fn test_byte_field_rejects_other_types() {
        assert!(matches!(
            ByteField::from_value(&json!(null), "name"),
            Err(TranscodeError::InvalidType { .. })
        ));
    }
}

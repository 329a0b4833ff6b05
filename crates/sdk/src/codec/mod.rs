// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Table-driven transcoding of parameter records.
//!
//! Every record crosses three boundaries: application code (native Rust
//! values), storage/transport (`JsonForm`) and the contract itself
//! (`MoveStruct`). A record type describes its fields once in a static
//! `FieldSpec` table and converts itself to and from `FieldValues`; the
//! encoders and decoders here do the rest.
//!
//! Decoding is all-or-nothing: the first malformed field aborts the whole
//! record.

mod bytes;
mod error;
mod field;
mod form;

pub use bytes::ByteField;
pub use error::TranscodeError;
pub use field::{FieldKind, FieldSpec, FieldValue, FieldValues};
pub use form::{JsonForm, MoveStruct};

use crate::types::AccountAddress;
use primitive_types::U256;
use serde_json::{Map, Value};

/// The four conversions every parameter record supports.
pub trait MoveParams: Sized {
    /// Mapping table, in Move-struct field order.
    const FIELDS: &'static [FieldSpec];

    fn to_values(&self) -> FieldValues;

    fn from_values(values: FieldValues) -> Result<Self, TranscodeError>;

    fn to_json(&self) -> JsonForm {
        JsonForm::new(encode(Self::FIELDS, &self.to_values(), Representation::Json))
    }

    fn from_json(json: &JsonForm) -> Result<Self, TranscodeError> {
        let values = decode(Self::FIELDS, json.as_map(), Representation::Json, None)?;
        Self::from_values(values)
    }

    fn to_move_struct(&self) -> MoveStruct {
        MoveStruct::new(encode(
            Self::FIELDS,
            &self.to_values(),
            Representation::MoveStruct,
        ))
    }

    fn from_move_struct(move_struct: &MoveStruct) -> Result<Self, TranscodeError> {
        let values = decode(
            Self::FIELDS,
            move_struct.as_map(),
            Representation::MoveStruct,
            None,
        )?;
        Self::from_values(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    MoveStruct,
}

impl Representation {
    pub fn key(self, spec: &FieldSpec) -> &'static str {
        match self {
            Self::Json => spec.json,
            Self::MoveStruct => spec.chain,
        }
    }
}

/// Encode `values` following `fields`. Values without a table row are ignored.
pub fn encode(fields: &[FieldSpec], values: &FieldValues, repr: Representation) -> Map<String, Value> {
    let mut map = Map::with_capacity(fields.len());

    for spec in fields {
        let Some(value) = values.get(spec.name) else {
            continue;
        };
        if let Some(encoded) = encode_field(spec, value, repr) {
            map.insert(repr.key(spec).to_string(), encoded);
        }
    }

    map
}

/// `None` when the value does not fit the table row, which is a bug in the
/// record's `to_values`.
fn encode_field(spec: &FieldSpec, value: &FieldValue, repr: Representation) -> Option<Value> {
    let encoded = match (spec.kind, value) {
        (FieldKind::Address, FieldValue::Address(address)) => Value::String(address.to_string()),
        (FieldKind::Bytes, FieldValue::Bytes(bytes)) => match repr {
            Representation::Json => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
            Representation::MoveStruct => Value::String(hex::encode(bytes)),
        },
        (FieldKind::Integer, FieldValue::Integer(n)) => Value::String(n.to_string()),
        (FieldKind::U8, FieldValue::U8(n)) => Value::from(*n),
        (FieldKind::Bool, FieldValue::Bool(b)) => Value::Bool(*b),
        (FieldKind::Struct(fields), FieldValue::Struct(nested)) => {
            Value::Object(encode(fields, nested, repr))
        }
        (kind, value) => {
            debug_assert!(
                false,
                "value {:?} for `{}` does not match {:?}",
                value, spec.name, kind
            );
            return None;
        }
    };

    Some(encoded)
}

/// Decode `map` following `fields`. `parent` qualifies field names in errors.
pub fn decode(
    fields: &'static [FieldSpec],
    map: &Map<String, Value>,
    repr: Representation,
    parent: Option<&str>,
) -> Result<FieldValues, TranscodeError> {
    let mut values = FieldValues::decoded(fields, repr, parent);

    for spec in fields {
        let key = repr.key(spec);
        let path = match parent {
            Some(parent) => format!("{}.{}", parent, key),
            None => key.to_string(),
        };
        let raw = map
            .get(key)
            .ok_or_else(|| TranscodeError::MissingField(path.clone()))?;
        values.insert(spec.name, decode_field(spec.kind, raw, repr, &path)?);
    }

    Ok(values)
}

fn decode_field(
    kind: FieldKind,
    raw: &Value,
    repr: Representation,
    field: &str,
) -> Result<FieldValue, TranscodeError> {
    let invalid = |expected: &'static str| TranscodeError::InvalidType {
        field: field.to_string(),
        expected,
    };

    match kind {
        FieldKind::Address => {
            let s = raw.as_str().ok_or_else(|| invalid("hex address string"))?;
            AccountAddress::from_hex_literal(s)
                .map(FieldValue::Address)
                .map_err(|source| TranscodeError::MalformedAddress {
                    field: field.to_string(),
                    value: s.to_string(),
                    source,
                })
        }
        FieldKind::Bytes => {
            let bytes = match repr {
                Representation::Json => {
                    let items = raw.as_array().ok_or_else(|| invalid("byte array"))?;
                    bytes::decode_byte_array(items, field)?
                }
                Representation::MoveStruct => ByteField::from_value(raw, field)?.into_bytes(field)?,
            };
            Ok(FieldValue::Bytes(bytes))
        }
        FieldKind::Integer => {
            let s = raw.as_str().ok_or_else(|| invalid("decimal string"))?;
            parse_integer(s, field).map(FieldValue::Integer)
        }
        FieldKind::U8 => {
            let n = raw.as_number().ok_or_else(|| invalid("number"))?;
            n.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .map(FieldValue::U8)
                .ok_or_else(|| TranscodeError::MalformedInteger {
                    field: field.to_string(),
                    value: n.to_string(),
                })
        }
        FieldKind::Bool => raw.as_bool().map(FieldValue::Bool).ok_or_else(|| invalid("bool")),
        FieldKind::Struct(fields) => {
            let map = raw.as_object().ok_or_else(|| invalid("object"))?;
            decode(fields, map, repr, Some(field)).map(FieldValue::Struct)
        }
    }
}

/// Parse an unsigned decimal string. Only ASCII digits are accepted.
pub fn parse_integer(s: &str, field: &str) -> Result<U256, TranscodeError> {
    let malformed = || TranscodeError::MalformedInteger {
        field: field.to_string(),
        value: s.to_string(),
    };

    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    U256::from_dec_str(s).map_err(|_| malformed())
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MoveParams, Representation, TranscodeError};
use crate::types::AccountAddress;
use primitive_types::U256;

/// How a field is encoded in each representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 32-byte address. `0x` hex in both forms.
    Address,
    /// `vector<u8>`. Number array in JSON, hex string in the Move struct.
    Bytes,
    /// Unsigned integer up to 256 bits. Decimal string in both forms.
    Integer,
    /// `u8`. JSON number in both forms.
    U8,
    Bool,
    /// Embedded record with its own table.
    Struct(&'static [FieldSpec]),
}

/// One row of a record's mapping table.
///
/// The JSON and Move-struct names are spelled out per row because contract
/// field names do not always follow mechanically from the native ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used in `FieldValues`.
    pub name: &'static str,
    pub json: &'static str,
    pub chain: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        json: &'static str,
        chain: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            json,
            chain,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Address(AccountAddress),
    Bytes(Vec<u8>),
    Integer(U256),
    U8(u8),
    Bool(bool),
    Struct(FieldValues),
}

impl FieldValue {
    pub fn nested<T: MoveParams>(record: &T) -> Self {
        Self::Struct(record.to_values())
    }

    /// Whether this value can be encoded as a field of `kind`.
    pub fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (kind, self),
            (FieldKind::Address, Self::Address(_))
                | (FieldKind::Bytes, Self::Bytes(_))
                | (FieldKind::Integer, Self::Integer(_))
                | (FieldKind::U8, Self::U8(_))
                | (FieldKind::Bool, Self::Bool(_))
                | (FieldKind::Struct(_), Self::Struct(_))
        )
    }
}

impl From<AccountAddress> for FieldValue {
    fn from(value: AccountAddress) -> Self {
        Self::Address(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<U256> for FieldValue {
    fn from(value: U256) -> Self {
        Self::Integer(value)
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        Self::U8(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Field values of one record, keyed by `FieldSpec::name`.
///
/// This is the representation-neutral middle step: encoders read it, decoders
/// fill it, and each record type only converts itself to and from it.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: Vec<(&'static str, FieldValue)>,
    source: Option<Source>,
}

/// Where decoded values came from, so errors name the input key.
#[derive(Debug, Clone)]
struct Source {
    fields: &'static [FieldSpec],
    repr: Representation,
    parent: Option<String>,
}

impl PartialEq for FieldValues {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for FieldValues {}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn decoded(
        fields: &'static [FieldSpec],
        repr: Representation,
        parent: Option<&str>,
    ) -> Self {
        Self {
            values: Vec::with_capacity(fields.len()),
            source: Some(Source {
                fields,
                repr,
                parent: parent.map(str::to_string),
            }),
        }
    }

    /// Input key for `name`, qualified with its parent. Falls back to `name`
    /// for values that were not decoded.
    fn key(&self, name: &str) -> String {
        let Some(source) = &self.source else {
            return name.to_string();
        };
        let Some(spec) = source.fields.iter().find(|spec| spec.name == name) else {
            return name.to_string();
        };

        let key = source.repr.key(spec);
        match &source.parent {
            Some(parent) => format!("{}.{}", parent, key),
            None => key.to_string(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn take(&mut self, name: &str) -> Result<FieldValue, TranscodeError> {
        let index = self
            .values
            .iter()
            .position(|(n, _)| *n == name)
            .ok_or_else(|| TranscodeError::MissingField(self.key(name)))?;
        Ok(self.values.remove(index).1)
    }

    fn mismatch(&self, name: &str, expected: &'static str) -> TranscodeError {
        TranscodeError::InvalidType {
            field: self.key(name),
            expected,
        }
    }

    pub fn address(&mut self, name: &str) -> Result<AccountAddress, TranscodeError> {
        match self.take(name)? {
            FieldValue::Address(v) => Ok(v),
            _ => Err(self.mismatch(name, "address")),
        }
    }

    pub fn bytes(&mut self, name: &str) -> Result<Vec<u8>, TranscodeError> {
        match self.take(name)? {
            FieldValue::Bytes(v) => Ok(v),
            _ => Err(self.mismatch(name, "bytes")),
        }
    }

    pub fn integer(&mut self, name: &str) -> Result<U256, TranscodeError> {
        match self.take(name)? {
            FieldValue::Integer(v) => Ok(v),
            _ => Err(self.mismatch(name, "integer")),
        }
    }

    pub fn u8(&mut self, name: &str) -> Result<u8, TranscodeError> {
        match self.take(name)? {
            FieldValue::U8(v) => Ok(v),
            _ => Err(self.mismatch(name, "u8")),
        }
    }

    pub fn flag(&mut self, name: &str) -> Result<bool, TranscodeError> {
        match self.take(name)? {
            FieldValue::Bool(v) => Ok(v),
            _ => Err(self.mismatch(name, "bool")),
        }
    }

    pub fn nested<T: MoveParams>(&mut self, name: &str) -> Result<T, TranscodeError> {
        match self.take(name)? {
            FieldValue::Struct(values) => T::from_values(values),
            _ => Err(self.mismatch(name, "struct")),
        }
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::TranscodeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-safe form of a record: camelCase keys, integers as decimal strings,
/// bytes as number arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonForm(Map<String, Value>);

/// Move-struct form of a record: the contract's snake_case keys, integers as
/// decimal strings, bytes as hex strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveStruct(Map<String, Value>);

impl JsonForm {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl MoveStruct {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for JsonForm {
    type Error = TranscodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(TranscodeError::ExpectedObject),
        }
    }
}

impl TryFrom<Value> for MoveStruct {
    type Error = TranscodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(TranscodeError::ExpectedObject),
        }
    }
}

impl From<JsonForm> for Value {
    fn from(form: JsonForm) -> Self {
        form.into_value()
    }
}

impl From<MoveStruct> for Value {
    fn from(form: MoveStruct) -> Self {
        form.into_value()
    }
}

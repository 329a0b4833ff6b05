// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{FieldKind, FieldSpec, FieldValues, MoveParams, TranscodeError};
use crate::transaction::{EntryCall, MoveArg};
use crate::types::AccountAddress;

/// Registers a job definition in the Switchboard resource account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobInitParams {
    pub address: AccountAddress,
    pub name: Vec<u8>,
    pub metadata: Vec<u8>,
    pub authority: AccountAddress,
    /// Serialized job definition (tasks the oracle runs).
    pub data: Vec<u8>,
}

impl MoveParams for JobInitParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("address", "address", "addr", FieldKind::Address),
        FieldSpec::new("name", "name", "name", FieldKind::Bytes),
        FieldSpec::new("metadata", "metadata", "metadata", FieldKind::Bytes),
        FieldSpec::new("authority", "authority", "authority", FieldKind::Address),
        FieldSpec::new("data", "data", "data", FieldKind::Bytes),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("address", self.address)
            .with("name", self.name.clone())
            .with("metadata", self.metadata.clone())
            .with("authority", self.authority)
            .with("data", self.data.clone())
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            address: values.address("address")?,
            name: values.bytes("name")?,
            metadata: values.bytes("metadata")?,
            authority: values.address("authority")?,
            data: values.bytes("data")?,
        })
    }
}

impl EntryCall for JobInitParams {
    const MODULE: &'static str = "JobInitAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![
            self.address.into(),
            self.name.clone().into(),
            self.metadata.clone().into(),
            self.authority.into(),
            self.data.clone().into(),
        ]
    }
}

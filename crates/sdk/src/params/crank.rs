// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{FieldKind, FieldSpec, FieldValues, MoveParams, TranscodeError};
use crate::transaction::{EntryCall, MoveArg};
use crate::types::AccountAddress;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrankInitParams {
    pub address: AccountAddress,
    pub queue_address: AccountAddress,
}

impl MoveParams for CrankInitParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("address", "address", "addr", FieldKind::Address),
        FieldSpec::new("queue_address", "queueAddress", "queue_addr", FieldKind::Address),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("address", self.address)
            .with("queue_address", self.queue_address)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            address: values.address("address")?,
            queue_address: values.address("queue_address")?,
        })
    }
}

impl EntryCall for CrankInitParams {
    const MODULE: &'static str = "CrankInitAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![self.address.into(), self.queue_address.into()]
    }
}

/// Adds an aggregator to a crank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrankPushParams {
    pub crank_address: AccountAddress,
    pub aggregator_address: AccountAddress,
}

impl MoveParams for CrankPushParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("crank_address", "crankAddress", "crank_addr", FieldKind::Address),
        FieldSpec::new("aggregator_address", "aggregatorAddress", "aggregator_addr", FieldKind::Address),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("crank_address", self.crank_address)
            .with("aggregator_address", self.aggregator_address)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            crank_address: values.address("crank_address")?,
            aggregator_address: values.address("aggregator_address")?,
        })
    }
}

impl EntryCall for CrankPushParams {
    const MODULE: &'static str = "CrankPushAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![self.crank_address.into(), self.aggregator_address.into()]
    }
}

/// Pops the next due aggregator off a crank, triggering its update round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrankPopParams {
    pub crank_address: AccountAddress,
}

impl MoveParams for CrankPopParams {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new(
        "crank_address",
        "crankAddress",
        "crank_addr",
        FieldKind::Address,
    )];

    fn to_values(&self) -> FieldValues {
        FieldValues::new().with("crank_address", self.crank_address)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            crank_address: values.address("crank_address")?,
        })
    }
}

impl EntryCall for CrankPopParams {
    const MODULE: &'static str = "CrankPopAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![self.crank_address.into()]
    }
}

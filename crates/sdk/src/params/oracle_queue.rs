// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{FieldKind, FieldSpec, FieldValue, FieldValues, MoveParams, TranscodeError};
use crate::transaction::{EntryCall, MoveArg};
use crate::types::{AccountAddress, SwitchboardDecimal};
use primitive_types::U256;

/// New configuration for an oracle queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleQueueSetConfigsParams {
    pub address: AccountAddress,
    pub name: Vec<u8>,
    pub metadata: Vec<u8>,
    pub authority: AccountAddress,
    pub oracle_timeout: U256,
    pub reward: U256,
    pub min_stake: U256,
    pub slashing_enabled: bool,
    pub variance_tolerance_multiplier: SwitchboardDecimal,
    pub feed_probation_period: U256,
    pub consecutive_feed_failure_limit: U256,
    pub consecutive_oracle_failure_limit: U256,
    pub unpermissioned_feeds_enabled: bool,
    pub lock_lease_funding: bool,
    pub max_size: U256,
}

impl MoveParams for OracleQueueSetConfigsParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("address", "addr", "addr", FieldKind::Address),
        FieldSpec::new("name", "name", "name", FieldKind::Bytes),
        FieldSpec::new("metadata", "metadata", "metadata", FieldKind::Bytes),
        FieldSpec::new("authority", "authority", "authority", FieldKind::Address),
        FieldSpec::new("oracle_timeout", "oracleTimeout", "oracle_timeout", FieldKind::Integer),
        FieldSpec::new("reward", "reward", "reward", FieldKind::Integer),
        FieldSpec::new("min_stake", "minStake", "min_stake", FieldKind::Integer),
        FieldSpec::new("slashing_enabled", "slashingEnabled", "slashing_enabled", FieldKind::Bool),
        FieldSpec::new(
            "variance_tolerance_multiplier",
            "varianceToleranceMultiplier",
            "variance_tolerance_multiplier",
            FieldKind::Struct(SwitchboardDecimal::FIELDS),
        ),
        FieldSpec::new(
            "feed_probation_period",
            "feedProbationPeriod",
            "feed_probation_period",
            FieldKind::Integer,
        ),
        FieldSpec::new(
            "consecutive_feed_failure_limit",
            "consecutiveFeedFailureLimit",
            "consecutive_feed_failure_limit",
            FieldKind::Integer,
        ),
        FieldSpec::new(
            "consecutive_oracle_failure_limit",
            "consecutiveOracleFailureLimit",
            "consecutive_oracle_failure_limit",
            FieldKind::Integer,
        ),
        FieldSpec::new(
            "unpermissioned_feeds_enabled",
            "unpermissionedFeedsEnabled",
            "unpermissioned_feeds_enabled",
            FieldKind::Bool,
        ),
        FieldSpec::new("lock_lease_funding", "lockLeaseFunding", "lock_lease_funding", FieldKind::Bool),
        FieldSpec::new("max_size", "maxSize", "max_size", FieldKind::Integer),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("address", self.address)
            .with("name", self.name.clone())
            .with("metadata", self.metadata.clone())
            .with("authority", self.authority)
            .with("oracle_timeout", self.oracle_timeout)
            .with("reward", self.reward)
            .with("min_stake", self.min_stake)
            .with("slashing_enabled", self.slashing_enabled)
            .with(
                "variance_tolerance_multiplier",
                FieldValue::nested(&self.variance_tolerance_multiplier),
            )
            .with("feed_probation_period", self.feed_probation_period)
            .with("consecutive_feed_failure_limit", self.consecutive_feed_failure_limit)
            .with("consecutive_oracle_failure_limit", self.consecutive_oracle_failure_limit)
            .with("unpermissioned_feeds_enabled", self.unpermissioned_feeds_enabled)
            .with("lock_lease_funding", self.lock_lease_funding)
            .with("max_size", self.max_size)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            address: values.address("address")?,
            name: values.bytes("name")?,
            metadata: values.bytes("metadata")?,
            authority: values.address("authority")?,
            oracle_timeout: values.integer("oracle_timeout")?,
            reward: values.integer("reward")?,
            min_stake: values.integer("min_stake")?,
            slashing_enabled: values.flag("slashing_enabled")?,
            variance_tolerance_multiplier: values.nested("variance_tolerance_multiplier")?,
            feed_probation_period: values.integer("feed_probation_period")?,
            consecutive_feed_failure_limit: values.integer("consecutive_feed_failure_limit")?,
            consecutive_oracle_failure_limit: values.integer("consecutive_oracle_failure_limit")?,
            unpermissioned_feeds_enabled: values.flag("unpermissioned_feeds_enabled")?,
            lock_lease_funding: values.flag("lock_lease_funding")?,
            max_size: values.integer("max_size")?,
        })
    }
}

impl EntryCall for OracleQueueSetConfigsParams {
    const MODULE: &'static str = "OracleQueueSetConfigsAction";

    fn arguments(&self) -> Vec<MoveArg> {
        let multiplier = &self.variance_tolerance_multiplier;
        vec![
            self.address.into(),
            self.name.clone().into(),
            self.metadata.clone().into(),
            self.authority.into(),
            self.oracle_timeout.into(),
            self.reward.into(),
            self.min_stake.into(),
            self.slashing_enabled.into(),
            multiplier.value.into(),
            multiplier.dec.into(),
            multiplier.neg.into(),
            self.feed_probation_period.into(),
            self.consecutive_feed_failure_limit.into(),
            self.consecutive_oracle_failure_limit.into(),
            self.unpermissioned_feeds_enabled.into(),
            self.lock_lease_funding.into(),
            self.max_size.into(),
        ]
    }
}

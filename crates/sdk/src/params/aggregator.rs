// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{FieldKind, FieldSpec, FieldValue, FieldValues, MoveParams, TranscodeError};
use crate::transaction::{EntryCall, MoveArg, PayloadError};
use crate::types::{AccountAddress, SwitchboardDecimal};
use primitive_types::U256;

// ================================================================================================
// Aggregator configuration (init / set_config)
// ================================================================================================

/// Parameters for creating an aggregator.
///
/// Fields the caller does not care about can be left at `Default`: empty name
/// and metadata, the zero queue address and zero for every numeric option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorInitParams {
    /// Arbitrary key the aggregator is stored under. Cannot be changed later.
    pub address: AccountAddress,
    pub authority: AccountAddress,
    pub name: Vec<u8>,
    pub metadata: Vec<u8>,
    pub queue_address: AccountAddress,
    pub batch_size: U256,
    pub min_oracle_results: U256,
    pub min_job_results: U256,
    pub min_update_delay_seconds: U256,
    pub start_after: U256,
    pub variance_threshold: SwitchboardDecimal,
    pub force_report_period: U256,
    pub expiration: U256,
}

/// Parameters for reconfiguring an existing aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorSetConfigParams {
    pub address: AccountAddress,
    pub authority: AccountAddress,
    pub name: Vec<u8>,
    pub metadata: Vec<u8>,
    pub queue_address: AccountAddress,
    pub batch_size: U256,
    pub min_oracle_results: U256,
    pub min_job_results: U256,
    pub min_update_delay_seconds: U256,
    pub start_after: U256,
    pub variance_threshold: SwitchboardDecimal,
    pub force_report_period: U256,
    pub expiration: U256,
}

const AGGREGATOR_CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("address", "address", "addr", FieldKind::Address),
    FieldSpec::new("authority", "authority", "authority", FieldKind::Address),
    FieldSpec::new("name", "name", "name", FieldKind::Bytes),
    FieldSpec::new("metadata", "metadata", "metadata", FieldKind::Bytes),
    FieldSpec::new("queue_address", "queueAddress", "queue_addr", FieldKind::Address),
    FieldSpec::new("batch_size", "batchSize", "batch_size", FieldKind::Integer),
    FieldSpec::new("min_oracle_results", "minOracleResults", "min_oracle_results", FieldKind::Integer),
    FieldSpec::new("min_job_results", "minJobResults", "min_job_results", FieldKind::Integer),
    FieldSpec::new(
        "min_update_delay_seconds",
        "minUpdateDelaySeconds",
        "min_update_delay_seconds",
        FieldKind::Integer,
    ),
    FieldSpec::new("start_after", "startAfter", "start_after", FieldKind::Integer),
    FieldSpec::new(
        "variance_threshold",
        "varianceThreshold",
        "variance_threshold",
        FieldKind::Struct(SwitchboardDecimal::FIELDS),
    ),
    FieldSpec::new("force_report_period", "forceReportPeriod", "force_report_period", FieldKind::Integer),
    FieldSpec::new("expiration", "expiration", "expiration", FieldKind::Integer),
];

/// Both aggregator configuration records share one table and one argument
/// layout; only the target module differs.
macro_rules! impl_aggregator_config {
    ($params:ty, $module:literal) => {
        impl MoveParams for $params {
            const FIELDS: &'static [FieldSpec] = AGGREGATOR_CONFIG_FIELDS;

            fn to_values(&self) -> FieldValues {
                FieldValues::new()
                    .with("address", self.address)
                    .with("authority", self.authority)
                    .with("name", self.name.clone())
                    .with("metadata", self.metadata.clone())
                    .with("queue_address", self.queue_address)
                    .with("batch_size", self.batch_size)
                    .with("min_oracle_results", self.min_oracle_results)
                    .with("min_job_results", self.min_job_results)
                    .with("min_update_delay_seconds", self.min_update_delay_seconds)
                    .with("start_after", self.start_after)
                    .with("variance_threshold", FieldValue::nested(&self.variance_threshold))
                    .with("force_report_period", self.force_report_period)
                    .with("expiration", self.expiration)
            }

            fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
                Ok(Self {
                    address: values.address("address")?,
                    authority: values.address("authority")?,
                    name: values.bytes("name")?,
                    metadata: values.bytes("metadata")?,
                    queue_address: values.address("queue_address")?,
                    batch_size: values.integer("batch_size")?,
                    min_oracle_results: values.integer("min_oracle_results")?,
                    min_job_results: values.integer("min_job_results")?,
                    min_update_delay_seconds: values.integer("min_update_delay_seconds")?,
                    start_after: values.integer("start_after")?,
                    variance_threshold: values.nested("variance_threshold")?,
                    force_report_period: values.integer("force_report_period")?,
                    expiration: values.integer("expiration")?,
                })
            }
        }

        impl EntryCall for $params {
            const MODULE: &'static str = $module;

            fn check(&self) -> Result<(), PayloadError> {
                if self.variance_threshold.neg && !self.variance_threshold.is_zero() {
                    return Err(PayloadError::NegativeDecimal {
                        module: Self::MODULE,
                        field: "variance_threshold",
                    });
                }
                Ok(())
            }

            /// The entry function takes the variance threshold as value and
            /// scale only; negative thresholds are rejected by `check`.
            fn arguments(&self) -> Vec<MoveArg> {
                vec![
                    self.address.into(),
                    self.name.clone().into(),
                    self.metadata.clone().into(),
                    self.queue_address.into(),
                    self.batch_size.into(),
                    self.min_oracle_results.into(),
                    self.min_job_results.into(),
                    self.min_update_delay_seconds.into(),
                    self.start_after.into(),
                    self.variance_threshold.value.into(),
                    self.variance_threshold.dec.into(),
                    self.force_report_period.into(),
                    self.expiration.into(),
                    self.authority.into(),
                ]
            }
        }
    };
}

impl_aggregator_config!(AggregatorInitParams, "AggregatorInitAction");
impl_aggregator_config!(AggregatorSetConfigParams, "AggregatorSetConfigAction");

// ================================================================================================
// Job management
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorAddJobParams {
    pub aggregator_address: AccountAddress,
    pub job: AccountAddress,
    pub weight: u8,
}

impl MoveParams for AggregatorAddJobParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("aggregator_address", "aggregatorAddress", "aggregator_addr", FieldKind::Address),
        FieldSpec::new("job", "job", "job", FieldKind::Address),
        FieldSpec::new("weight", "weight", "weight", FieldKind::U8),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("aggregator_address", self.aggregator_address)
            .with("job", self.job)
            .with("weight", self.weight)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            aggregator_address: values.address("aggregator_address")?,
            job: values.address("job")?,
            weight: values.u8("weight")?,
        })
    }
}

impl EntryCall for AggregatorAddJobParams {
    const MODULE: &'static str = "AggregatorAddJobAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![
            self.aggregator_address.into(),
            self.job.into(),
            self.weight.into(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorRemoveJobParams {
    pub aggregator_address: AccountAddress,
    pub job: AccountAddress,
}

impl MoveParams for AggregatorRemoveJobParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("aggregator_address", "aggregatorAddress", "aggregator_addr", FieldKind::Address),
        FieldSpec::new("job", "job", "job", FieldKind::Address),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("aggregator_address", self.aggregator_address)
            .with("job", self.job)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            aggregator_address: values.address("aggregator_address")?,
            job: values.address("job")?,
        })
    }
}

impl EntryCall for AggregatorRemoveJobParams {
    const MODULE: &'static str = "AggregatorRemoveJobAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![self.aggregator_address.into(), self.job.into()]
    }
}

// ================================================================================================
// Rounds
// ================================================================================================

/// An oracle's response for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorSaveResultParams {
    pub oracle_address: AccountAddress,
    pub aggregator_address: AccountAddress,
    /// Position of the oracle in the round's oracle list.
    pub oracle_idx: U256,
    /// Set when the oracle failed to produce a value.
    pub error: bool,
    pub value: SwitchboardDecimal,
    /// Checksum of the job definitions the oracle ran.
    pub jobs_checksum: Vec<u8>,
}

impl MoveParams for AggregatorSaveResultParams {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("oracle_address", "oracleAddress", "oracle_addr", FieldKind::Address),
        FieldSpec::new("aggregator_address", "aggregatorAddress", "aggregator_addr", FieldKind::Address),
        FieldSpec::new("oracle_idx", "oracleIdx", "oracle_idx", FieldKind::Integer),
        FieldSpec::new("error", "error", "error", FieldKind::Bool),
        FieldSpec::new("value", "value", "value", FieldKind::Struct(SwitchboardDecimal::FIELDS)),
        FieldSpec::new("jobs_checksum", "jobsChecksum", "jobs_checksum", FieldKind::Bytes),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("oracle_address", self.oracle_address)
            .with("aggregator_address", self.aggregator_address)
            .with("oracle_idx", self.oracle_idx)
            .with("error", self.error)
            .with("value", FieldValue::nested(&self.value))
            .with("jobs_checksum", self.jobs_checksum.clone())
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            oracle_address: values.address("oracle_address")?,
            aggregator_address: values.address("aggregator_address")?,
            oracle_idx: values.integer("oracle_idx")?,
            error: values.flag("error")?,
            value: values.nested("value")?,
            jobs_checksum: values.bytes("jobs_checksum")?,
        })
    }
}

impl EntryCall for AggregatorSaveResultParams {
    const MODULE: &'static str = "AggregatorSaveResultAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![
            self.oracle_address.into(),
            self.aggregator_address.into(),
            self.oracle_idx.into(),
            self.error.into(),
            self.value.value.into(),
            self.value.dec.into(),
            self.value.neg.into(),
            self.jobs_checksum.clone().into(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorOpenRoundParams {
    pub aggregator_address: AccountAddress,
}

impl MoveParams for AggregatorOpenRoundParams {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new(
        "aggregator_address",
        "aggregatorAddress",
        "aggregator_addr",
        FieldKind::Address,
    )];

    fn to_values(&self) -> FieldValues {
        FieldValues::new().with("aggregator_address", self.aggregator_address)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            aggregator_address: values.address("aggregator_address")?,
        })
    }
}

impl EntryCall for AggregatorOpenRoundParams {
    const MODULE: &'static str = "AggregatorOpenRoundAction";

    fn arguments(&self) -> Vec<MoveArg> {
        vec![self.aggregator_address.into()]
    }
}

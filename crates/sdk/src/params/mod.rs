// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parameter records, one per Switchboard entry point.

pub mod aggregator;
pub mod crank;
pub mod job;
pub mod oracle_queue;

pub use aggregator::{
    AggregatorAddJobParams, AggregatorInitParams, AggregatorOpenRoundParams,
    AggregatorRemoveJobParams, AggregatorSaveResultParams, AggregatorSetConfigParams,
};
pub use crank::{CrankInitParams, CrankPopParams, CrankPushParams};
pub use job::JobInitParams;
pub use oracle_queue::OracleQueueSetConfigsParams;

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client SDK for the Switchboard oracle program on Aptos.

pub mod client;
pub mod codec;
pub mod logging;
pub mod params;
pub mod resources;
pub mod transaction;
pub mod types;

pub use codec::{JsonForm, MoveParams, MoveStruct, TranscodeError};
pub use transaction::{EntryCall, EntryFunctionPayload, ProgramAddresses};
pub use types::{AccountAddress, SwitchboardDecimal};

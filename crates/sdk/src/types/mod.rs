// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain value types shared by every parameter record.

pub mod address;
pub mod decimal;

pub use address::{AccountAddress, AddressParseError};
pub use decimal::{DecimalParseError, SwitchboardDecimal};

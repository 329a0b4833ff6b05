// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{FieldKind, FieldSpec, FieldValues, MoveParams, TranscodeError};
use primitive_types::U256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    #[error("decimal literal is empty")]
    Empty,

    #[error("decimal literal contains an invalid character")]
    InvalidDigit,

    #[error("decimal literal has {0} fractional digits, at most 255 allowed")]
    ScaleTooLarge(usize),

    #[error("decimal mantissa does not fit in 256 bits")]
    Overflow,
}

/// Signed fixed-point number as stored by the Switchboard program:
/// `value * 10^-dec`, negated when `neg` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwitchboardDecimal {
    pub value: U256,
    pub dec: u8,
    pub neg: bool,
}

impl SwitchboardDecimal {
    pub fn new(value: impl Into<U256>, dec: u8, neg: bool) -> Self {
        Self {
            value: value.into(),
            dec,
            neg,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl MoveParams for SwitchboardDecimal {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("value", "value", "value", FieldKind::Integer),
        FieldSpec::new("dec", "dec", "dec", FieldKind::U8),
        FieldSpec::new("neg", "neg", "neg", FieldKind::Bool),
    ];

    fn to_values(&self) -> FieldValues {
        FieldValues::new()
            .with("value", self.value)
            .with("dec", self.dec)
            .with("neg", self.neg)
    }

    fn from_values(mut values: FieldValues) -> Result<Self, TranscodeError> {
        Ok(Self {
            value: values.integer("value")?,
            dec: values.u8("dec")?,
            neg: values.flag("neg")?,
        })
    }
}

impl FromStr for SwitchboardDecimal {
    type Err = DecimalParseError;

    /// Parses `[+-]digits[.digits]`, keeping every written fractional digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (neg, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(DecimalParseError::Empty);
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(DecimalParseError::InvalidDigit);
        }

        let dec = u8::try_from(fraction.len())
            .map_err(|_| DecimalParseError::ScaleTooLarge(fraction.len()))?;
        let digits = format!("{}{}", whole, fraction);
        let value = U256::from_dec_str(&digits).map_err(|_| DecimalParseError::Overflow)?;

        Ok(Self {
            value,
            dec,
            neg: neg && !value.is_zero(),
        })
    }
}

impl fmt::Display for SwitchboardDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.value.to_string();
        let dec = self.dec as usize;
        let sign = if self.neg && !self.is_zero() { "-" } else { "" };

        if dec == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let padded = format!("{:0>width$}", digits, width = dec + 1);
        let (whole, fraction) = padded.split_at(padded.len() - dec);
        write!(f, "{}{}.{}", sign, whole, fraction)
    }
}

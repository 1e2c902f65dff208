//! Shared newtypes and utilities used across the encoding and ledger layers.
//!
//! Both types here serialize as plain JSON strings, so they can be used
//! directly in config files and wire types without conversion overhead.

pub mod scaling;
pub mod serde_util;

pub use scaling::{scale_amount, unscale_amount, ScalingError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::EncodeError;

/// Byte length of an on-chain account address.
pub const ADDRESS_LENGTH: usize = 32;

// ─── AccountAddress ──────────────────────────────────────────────────────────

/// A normalized 32-byte account address.
///
/// Parsed from hex with an optional `0x` prefix. The digits must form whole
/// bytes; inputs shorter than 32 bytes (`0x01`) are left-padded with zeros.
/// Odd digit counts, non-hex characters and more than 32 bytes are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if digits.is_empty() {
            return Err(EncodeError::MissingHexDigits);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EncodeError::InvalidHex(input.to_string()));
        }
        if digits.len() % 2 != 0 {
            return Err(EncodeError::OddLength(input.to_string()));
        }
        if digits.len() > ADDRESS_LENGTH * 2 {
            return Err(EncodeError::AddressTooLong {
                input: input.to_string(),
                len: digits.len() / 2,
            });
        }

        let padded = format!("{:0>width$}", digits, width = ADDRESS_LENGTH * 2);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| EncodeError::InvalidHex(input.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Full-width `0x`-prefixed lowercase hex (64 digits).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for AccountAddress {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Amount ──────────────────────────────────────────────────────────────────

/// An unsigned integer quantity as handed over by a caller.
///
/// Callers at a JSON or form boundary often hold large integers as decimal
/// strings; both shapes are accepted and converted losslessly. Range checks
/// happen at encode time, so a negative or oversized value fails the payload
/// builder instead of being truncated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Amount {
    Int(i128),
    Decimal(String),
}

impl Amount {
    pub const ZERO: Self = Amount::Int(0);

    pub fn to_u64(&self) -> Result<u64, EncodeError> {
        self.to_unsigned(u64::MAX as u128, "u64").map(|v| v as u64)
    }

    pub fn to_u8(&self) -> Result<u8, EncodeError> {
        self.to_unsigned(u8::MAX as u128, "u8").map(|v| v as u8)
    }

    fn to_unsigned(&self, max: u128, width: &'static str) -> Result<u128, EncodeError> {
        let value = match self {
            Amount::Int(v) => {
                if *v < 0 {
                    return Err(EncodeError::Negative { value: v.to_string(), width });
                }
                *v as u128
            }
            Amount::Decimal(s) => parse_unsigned_decimal(s, width)?,
        };

        if value > max {
            return Err(EncodeError::OutOfRange { value: value.to_string(), width });
        }
        Ok(value)
    }
}

/// Plain ASCII digits with an optional leading `-`; no whitespace, sign `+`,
/// separators or fraction.
fn parse_unsigned_decimal(text: &str, width: &'static str) -> Result<u128, EncodeError> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if let Some(rest) = text.strip_prefix('-') {
        if all_digits(rest) {
            return Err(EncodeError::Negative { value: text.to_string(), width });
        }
        return Err(EncodeError::InvalidInteger(text.to_string()));
    }
    if !all_digits(text) {
        return Err(EncodeError::InvalidInteger(text.to_string()));
    }

    // Only digits remain, so the sole parse failure is overflow.
    text.parse::<u128>()
        .map_err(|_| EncodeError::OutOfRange { value: text.to_string(), width })
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Int(v) => write!(f, "{}", v),
            Amount::Decimal(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! amount_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Amount {
            fn from(v: $t) -> Self {
                Amount::Int(v as i128)
            }
        })*
    };
}

amount_from_int!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount::Decimal(s.to_string())
    }
}

impl From<String> for Amount {
    fn from(s: String) -> Self {
        Amount::Decimal(s)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Unsigned(v) => Amount::from(v),
            Raw::Signed(v) => Amount::from(v),
            Raw::Text(s) => Amount::Decimal(s),
        })
    }
}

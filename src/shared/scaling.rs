//! Pure conversion between human-readable token quantities and raw base units.
//!
//! All math uses `rust_decimal::Decimal` for exact integer arithmetic, so no
//! floating-point value ever reaches the `u64` encoders. No async, no network calls.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Largest supported decimals count (`10^19` no longer fits in `u64`).
pub const MAX_DECIMALS: u8 = 19;

/// Errors that can occur during quantity scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    NegativeQuantity(String),
    Overflow { context: String },
    FractionalAmount { value: String },
    UnsupportedDecimals(u8),
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NegativeQuantity(v) => write!(f, "Quantity must not be negative, got {}", v),
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::FractionalAmount { value } => {
                write!(f, "Fractional base units not allowed: {}", value)
            }
            ScalingError::UnsupportedDecimals(d) => {
                write!(f, "Unsupported decimals {} (max {})", d, MAX_DECIMALS)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

fn multiplier(decimals: u8) -> Result<Decimal, ScalingError> {
    if decimals > MAX_DECIMALS {
        return Err(ScalingError::UnsupportedDecimals(decimals));
    }
    10u64
        .checked_pow(decimals as u32)
        .map(Decimal::from)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("10^{} overflow", decimals),
        })
}

/// Convert a human-readable quantity into raw base units.
///
/// ```text
/// base_units = quantity * 10^decimals
/// ```
///
/// Zero is allowed (it is the default for minimum-output fields).
pub fn scale_amount(quantity: Decimal, decimals: u8) -> Result<u64, ScalingError> {
    if quantity.is_sign_negative() && !quantity.is_zero() {
        return Err(ScalingError::NegativeQuantity(quantity.to_string()));
    }

    let base_units = quantity
        .checked_mul(multiplier(decimals)?)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", quantity, decimals),
        })?;

    if base_units.fract() != Decimal::ZERO {
        return Err(ScalingError::FractionalAmount {
            value: base_units.to_string(),
        });
    }

    base_units.to_u64().ok_or_else(|| ScalingError::Overflow {
        context: format!("{} does not fit in u64", base_units),
    })
}

/// Convert raw base units back into a human-readable quantity.
pub fn unscale_amount(base_units: u64, decimals: u8) -> Result<Decimal, ScalingError> {
    Ok(Decimal::from(base_units) / multiplier(decimals)?)
}

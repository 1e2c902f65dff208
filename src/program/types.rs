//! Parameter types for the payload builders.
//!
//! Addresses are hex strings as callers receive them from forms and APIs;
//! quantities are [`Amount`]s so decimal-string inputs stay lossless. Both are
//! validated by the builders, never here.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::shared::Amount;

// ============================================================================
// Enums
// ============================================================================

/// Comparison applied by the oracle between the observed and target values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ComparisonOperator {
    /// Resolves YES when the observed value is greater than the target.
    GreaterThan = 0,
    /// Resolves YES when the observed value is less than the target.
    LessThan = 1,
}

impl TryFrom<u8> for ComparisonOperator {
    type Error = BuildError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ComparisonOperator::GreaterThan),
            1 => Ok(ComparisonOperator::LessThan),
            _ => Err(BuildError::UnknownOperator(value)),
        }
    }
}

/// Swap direction within a two-asset pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// First asset in, second asset out (encoded `0x01`).
    AToB,
    /// Second asset in, first asset out (encoded `0x00`).
    BToA,
}

impl SwapDirection {
    pub fn is_a_to_b(&self) -> bool {
        matches!(self, SwapDirection::AToB)
    }
}

impl From<bool> for SwapDirection {
    fn from(a_to_b: bool) -> Self {
        if a_to_b {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        }
    }
}

// ============================================================================
// Router Operations
// ============================================================================

/// Parameters for `router::create_pool`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePoolParams {
    pub token_a: String,
    pub token_b: String,
    /// Defaults to the prediction-market hook.
    #[serde(default)]
    pub hook_type: Option<u8>,
    /// Defaults to 3000 (0.3%).
    #[serde(default)]
    pub fee_rate: Option<Amount>,
}

/// Parameters for `router::add_liquidity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidityParams {
    pub pool: String,
    /// Existing position object to add to; `None` opens a new position.
    #[serde(default)]
    pub position: Option<String>,
    pub amount_a: Amount,
    pub amount_b: Amount,
    /// Defaults to 0 (no slippage floor).
    #[serde(default)]
    pub min_output: Option<Amount>,
}

/// Parameters for `router::swap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapParams {
    pub pool: String,
    pub direction: SwapDirection,
    pub amount_in: Amount,
    /// Defaults to 0 (no slippage floor).
    #[serde(default)]
    pub min_amount_out: Option<Amount>,
}

// ============================================================================
// Market Operations
// ============================================================================

/// Parameters for `market::buy_shares` and `market::sell_shares`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSharesParams {
    pub market: String,
    pub amount: Amount,
    /// `true` trades YES shares, `false` trades NO shares.
    pub is_yes: bool,
}

pub type BuySharesParams = TradeSharesParams;
pub type SellSharesParams = TradeSharesParams;

/// Parameters for `market::create_market`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMarketParams {
    pub description: String,
    /// Unix seconds.
    pub resolution_time: Amount,
    pub resolver: String,
    pub oracle_id: String,
    pub target_address: String,
    /// Kept for older resolver contracts; may be empty.
    #[serde(default)]
    pub target_function: String,
    pub target_value: Amount,
    /// Raw [`ComparisonOperator`] code (0 or 1).
    pub operator: u8,
}

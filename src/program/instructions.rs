//! Payload builders for the router and market entry functions.
//!
//! Router functions take one packed `vector<u8>` argument; market functions
//! take individually typed arguments. In both cases the field order below is
//! the on-chain parameter order and must not change.
//!
//! Builders are pure: identical params produce identical payloads, and any
//! encoding failure aborts the build before a payload exists.

use crate::error::BuildError;
use crate::program::config::ProtocolConfig;
use crate::program::constants::{
    function, DEFAULT_FEE_RATE, DEFAULT_MIN_OUTPUT, HOOK_TYPE_PREDICTION_MARKET, POOL_ASSET_COUNT,
};
use crate::program::encoding::{
    concat_bytes, encode_address, encode_bool, encode_option_address, encode_sequence_length,
    encode_u64_le, encode_u8,
};
use crate::program::payload::{Argument, EntryFunctionPayload, FunctionId};
use crate::program::types::{
    AddLiquidityParams, ComparisonOperator, CreateMarketParams, CreatePoolParams, SwapParams,
    TradeSharesParams,
};
use crate::shared::{AccountAddress, Amount};

// ============================================================================
// Helper Functions
// ============================================================================

fn blob_payload(function: FunctionId, blob: Vec<u8>) -> EntryFunctionPayload {
    tracing::debug!(function = %function, len = blob.len(), "Built router payload");
    EntryFunctionPayload::new(function, vec![Argument::Bytes(blob)])
}

fn typed_payload(function: FunctionId, arguments: Vec<Argument>) -> EntryFunctionPayload {
    tracing::debug!(function = %function, args = arguments.len(), "Built market payload");
    EntryFunctionPayload::new(function, arguments)
}

fn amount_or(value: &Option<Amount>, default: u64) -> Amount {
    value.clone().unwrap_or_else(|| Amount::from(default))
}

fn require(value: &str, field: &'static str) -> Result<(), BuildError> {
    if value.trim().is_empty() {
        return Err(BuildError::MissingField(field));
    }
    Ok(())
}

// ============================================================================
// Router Payloads
// ============================================================================

/// Build `router::create_pool`.
///
/// Blob: [hook_type (1), asset count (ULEB128, = 2), token_a (32), token_b (32), fee_rate (8 LE)]
pub fn build_create_pool_payload(
    params: &CreatePoolParams,
    config: &ProtocolConfig,
) -> Result<EntryFunctionPayload, BuildError> {
    let hook_type = encode_u8(params.hook_type.unwrap_or(HOOK_TYPE_PREDICTION_MARKET))?;
    let asset_count = encode_sequence_length(POOL_ASSET_COUNT);
    let token_a = encode_address(&params.token_a)?;
    let token_b = encode_address(&params.token_b)?;
    let fee_rate = encode_u64_le(amount_or(&params.fee_rate, DEFAULT_FEE_RATE))?;

    let blob = concat_bytes(&[&hook_type, &asset_count, &token_a, &token_b, &fee_rate]);

    Ok(blob_payload(config.router_function(function::CREATE_POOL)?, blob))
}

/// Build `router::add_liquidity`.
///
/// Blob: [pool (32), position (Option<address>), amount_a (8 LE), amount_b (8 LE), min_output (8 LE)]
pub fn build_add_liquidity_payload(
    params: &AddLiquidityParams,
    config: &ProtocolConfig,
) -> Result<EntryFunctionPayload, BuildError> {
    let pool = encode_address(&params.pool)?;
    let position = encode_option_address(params.position.as_deref())?;
    let amount_a = encode_u64_le(params.amount_a.clone())?;
    let amount_b = encode_u64_le(params.amount_b.clone())?;
    let min_output = encode_u64_le(amount_or(&params.min_output, DEFAULT_MIN_OUTPUT))?;

    let blob = concat_bytes(&[&pool, &position, &amount_a, &amount_b, &min_output]);

    Ok(blob_payload(config.router_function(function::ADD_LIQUIDITY)?, blob))
}

/// Build `router::swap`.
///
/// Blob: [pool (32), a_to_b (1), amount_in (8 LE), min_amount_out (8 LE)]
pub fn build_swap_payload(
    params: &SwapParams,
    config: &ProtocolConfig,
) -> Result<EntryFunctionPayload, BuildError> {
    let pool = encode_address(&params.pool)?;
    let direction = encode_bool(params.direction.is_a_to_b());
    let amount_in = encode_u64_le(params.amount_in.clone())?;
    let min_amount_out = encode_u64_le(amount_or(&params.min_amount_out, DEFAULT_MIN_OUTPUT))?;

    let blob = concat_bytes(&[&pool, &direction, &amount_in, &min_amount_out]);

    Ok(blob_payload(config.router_function(function::SWAP)?, blob))
}

// ============================================================================
// Market Payloads
// ============================================================================

fn trade_shares_arguments(params: &TradeSharesParams) -> Result<Vec<Argument>, BuildError> {
    let market = AccountAddress::parse(&params.market)?;
    let amount = params.amount.to_u64()?;
    Ok(vec![
        Argument::Address(market),
        Argument::U64(amount),
        Argument::Bool(params.is_yes),
    ])
}

/// Build `market::buy_shares`.
///
/// Args: [market (address), amount (u64), is_yes (bool)]
pub fn build_buy_shares_payload(
    params: &TradeSharesParams,
    config: &ProtocolConfig,
) -> Result<EntryFunctionPayload, BuildError> {
    let arguments = trade_shares_arguments(params)?;
    Ok(typed_payload(config.market_function(function::BUY_SHARES)?, arguments))
}

/// Build `market::sell_shares`.
///
/// Args: [market (address), amount (u64), is_yes (bool)]
pub fn build_sell_shares_payload(
    params: &TradeSharesParams,
    config: &ProtocolConfig,
) -> Result<EntryFunctionPayload, BuildError> {
    let arguments = trade_shares_arguments(params)?;
    Ok(typed_payload(config.market_function(function::SELL_SHARES)?, arguments))
}

/// Build `market::create_market`.
///
/// Args: [description (string), resolution_time (u64), resolver (address),
/// oracle_id (string), target_address (address), target_function (string),
/// target_value (u64), operator (u8)]
///
/// Numeric arguments serialize as decimal strings.
pub fn build_create_market_payload(
    params: &CreateMarketParams,
    config: &ProtocolConfig,
) -> Result<EntryFunctionPayload, BuildError> {
    require(&params.description, "description")?;
    require(&params.oracle_id, "oracle_id")?;
    let operator = ComparisonOperator::try_from(params.operator)?;

    let resolution_time = params.resolution_time.to_u64()?;
    let resolver = AccountAddress::parse(&params.resolver)?;
    let target_address = AccountAddress::parse(&params.target_address)?;
    let target_value = params.target_value.to_u64()?;

    let arguments = vec![
        Argument::String(params.description.clone()),
        Argument::U64(resolution_time),
        Argument::Address(resolver),
        Argument::String(params.oracle_id.clone()),
        Argument::Address(target_address),
        Argument::String(params.target_function.clone()),
        Argument::U64(target_value),
        Argument::U8(operator as u8),
    ];

    Ok(typed_payload(config.market_function(function::CREATE_MARKET)?, arguments))
}

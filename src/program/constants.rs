//! Constants for the prediction-market and AMM router modules.
//!
//! Module names, entry function names, and the tags packed into router blobs
//! must match the deployed Move modules exactly.

// ============================================================================
// Modules & Functions
// ============================================================================

pub const ROUTER_MODULE: &str = "router";
pub const MARKET_MODULE: &str = "market";

/// Entry function names.
pub mod function {
    // Router (single `vector<u8>` blob argument)
    pub const CREATE_POOL: &str = "create_pool";
    pub const ADD_LIQUIDITY: &str = "add_liquidity";
    pub const SWAP: &str = "swap";

    // Market (individually typed arguments)
    pub const BUY_SHARES: &str = "buy_shares";
    pub const SELL_SHARES: &str = "sell_shares";
    pub const CREATE_MARKET: &str = "create_market";
}

// ============================================================================
// Router Blob Fields
// ============================================================================

/// Hook-type tag identifying prediction-market pools.
pub const HOOK_TYPE_PREDICTION_MARKET: u8 = 4;

/// Number of assets in a pool (YES/NO); encoded as the sequence length prefix.
pub const POOL_ASSET_COUNT: usize = 2;

/// Default pool fee rate (3000 = 0.3%).
pub const DEFAULT_FEE_RATE: u64 = 3000;

/// Default minimum output: no slippage floor.
pub const DEFAULT_MIN_OUTPUT: u64 = 0;

// ============================================================================
// Size Constants
// ============================================================================

/// hook (1) + seq len (1) + 2 addresses (64) + fee (8)
pub const CREATE_POOL_BLOB_SIZE: usize = 74;

/// pool (32) + direction (1) + amount in (8) + min out (8)
pub const SWAP_BLOB_SIZE: usize = 49;

/// pool (32) + option tag (1) + amounts (3 * 8), plus 32 when a position is given
pub const ADD_LIQUIDITY_BLOB_BASE_SIZE: usize = 57;

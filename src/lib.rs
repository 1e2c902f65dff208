//! # Predmarket SDK
//!
//! Client-side Rust SDK for an AMM router and a prediction-market module on a
//! Move ledger.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, primitive encoding, entry-function payload builders
//! 2. **Ledger**: `LedgerQuery` capability, transaction outcomes, confirmation poller
//! 3. **REST**: `RestLedgerClient` over the node's REST API
//! 4. **High-Level Client**: `PredmarketClient` binding config, payloads and confirmation
//!
//! Signing and submission are left to the caller's wallet: builders return an
//! [`program::EntryFunctionPayload`] and the poller takes the resulting hash.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use predmarket_sdk::prelude::*;
//!
//! let protocol = ProtocolConfig::new(router_address, market_address);
//! let client = PredmarketClient::builder()
//!     .protocol(protocol)
//!     .node_url(TESTNET_NODE_URL)
//!     .build()?;
//!
//! let payload = client.payloads().swap(&SwapParams {
//!     pool: pool_address.into(),
//!     direction: SwapDirection::AToB,
//!     amount_in: 1_000_000u64.into(),
//!     min_amount_out: None,
//! })?;
//!
//! let hash = wallet.sign_and_submit(payload.to_json()?).await?;
//! let record = client.confirm_transaction(&hash).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and utilities.
pub mod shared;

/// Primitive encoding, payload types and builders, deployment config.
pub mod program;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Ledger ──────────────────────────────────────────────────────────

/// Ledger query capability and transaction confirmation.
pub mod ledger;

// ── Layer 3/4: REST + High-Level Client ──────────────────────────────────────

/// `PredmarketClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{scale_amount, AccountAddress, Amount};

    // Payloads
    pub use crate::program::{
        build_add_liquidity_payload, build_buy_shares_payload, build_create_market_payload,
        build_create_pool_payload, build_sell_shares_payload, build_swap_payload, Argument,
        EntryFunctionPayload, FunctionId, ProtocolConfig,
    };
    pub use crate::program::types::{
        AddLiquidityParams, BuySharesParams, ComparisonOperator, CreateMarketParams,
        CreatePoolParams, SellSharesParams, SwapDirection, SwapParams, TradeSharesParams,
    };

    // Errors
    pub use crate::error::{BuildError, ConfirmError, EncodeError, LedgerError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_NODE_URL, TESTNET_NODE_URL};

    // Ledger + confirmation
    pub use crate::ledger::{
        confirm_transaction, LedgerQuery, PollConfig, TransactionOutcome, TransactionPoller,
        TransactionRecord,
    };

    // REST + high-level client
    #[cfg(feature = "http")]
    pub use crate::client::{Payloads, PredmarketClient, PredmarketClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::ledger::RestLedgerClient;
}

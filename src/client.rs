//! High-level client: `PredmarketClient` with a payload sub-client.
//!
//! Binds a [`ProtocolConfig`], a REST ledger client and a [`PollConfig`] so
//! callers can build payloads and confirm their transactions without passing
//! configuration around. Submission itself stays with the caller's wallet.

use std::sync::Arc;

use crate::error::{BuildError, ConfirmError, SdkError};
use crate::ledger::{
    PollConfig, RestLedgerClient, TransactionOutcome, TransactionPoller, TransactionRecord,
};
use crate::program::config::ProtocolConfig;
use crate::program::instructions::{
    build_add_liquidity_payload, build_buy_shares_payload, build_create_market_payload,
    build_create_pool_payload, build_sell_shares_payload, build_swap_payload,
};
use crate::program::payload::EntryFunctionPayload;
use crate::program::types::{
    AddLiquidityParams, CreateMarketParams, CreatePoolParams, SwapParams, TradeSharesParams,
};

/// The primary entry point for the SDK.
#[derive(Debug, Clone)]
pub struct PredmarketClient {
    pub(crate) protocol: ProtocolConfig,
    pub(crate) poller: TransactionPoller<Arc<RestLedgerClient>>,
}

impl PredmarketClient {
    pub fn builder() -> PredmarketClientBuilder {
        PredmarketClientBuilder::default()
    }

    pub fn protocol(&self) -> &ProtocolConfig {
        &self.protocol
    }

    pub fn poll_config(&self) -> &PollConfig {
        self.poller.config()
    }

    /// Shared handle to the ledger client, for callers running their own polls.
    pub fn ledger(&self) -> Arc<RestLedgerClient> {
        self.poller.ledger().clone()
    }

    pub fn payloads(&self) -> Payloads<'_> {
        Payloads { client: self }
    }

    /// Poll until a terminal outcome (`Succeeded`, `Failed`, `TimedOut`).
    pub async fn poll_transaction(&self, hash: &str) -> Result<TransactionOutcome, ConfirmError> {
        self.poller.poll(hash).await
    }

    /// Wait for `hash` to execute successfully.
    pub async fn confirm_transaction(&self, hash: &str) -> Result<TransactionRecord, ConfirmError> {
        self.poller.confirm(hash).await
    }
}

/// Payload builders bound to the client's [`ProtocolConfig`].
pub struct Payloads<'a> {
    client: &'a PredmarketClient,
}

impl Payloads<'_> {
    pub fn create_pool(&self, params: &CreatePoolParams) -> Result<EntryFunctionPayload, BuildError> {
        build_create_pool_payload(params, &self.client.protocol)
    }

    pub fn add_liquidity(
        &self,
        params: &AddLiquidityParams,
    ) -> Result<EntryFunctionPayload, BuildError> {
        build_add_liquidity_payload(params, &self.client.protocol)
    }

    pub fn swap(&self, params: &SwapParams) -> Result<EntryFunctionPayload, BuildError> {
        build_swap_payload(params, &self.client.protocol)
    }

    pub fn buy_shares(&self, params: &TradeSharesParams) -> Result<EntryFunctionPayload, BuildError> {
        build_buy_shares_payload(params, &self.client.protocol)
    }

    pub fn sell_shares(
        &self,
        params: &TradeSharesParams,
    ) -> Result<EntryFunctionPayload, BuildError> {
        build_sell_shares_payload(params, &self.client.protocol)
    }

    pub fn create_market(
        &self,
        params: &CreateMarketParams,
    ) -> Result<EntryFunctionPayload, BuildError> {
        build_create_market_payload(params, &self.client.protocol)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`PredmarketClient`]. The deployment ([`ProtocolConfig`]) has
/// no default and must be set before [`build`](Self::build).
pub struct PredmarketClientBuilder {
    node_url: String,
    protocol: Option<ProtocolConfig>,
    poll_config: PollConfig,
}

impl Default for PredmarketClientBuilder {
    fn default() -> Self {
        Self {
            node_url: crate::network::DEFAULT_NODE_URL.to_string(),
            protocol: None,
            poll_config: PollConfig::default(),
        }
    }
}

impl PredmarketClientBuilder {
    pub fn node_url(mut self, url: &str) -> Self {
        self.node_url = url.to_string();
        self
    }

    pub fn protocol(mut self, protocol: ProtocolConfig) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn poll_config(mut self, config: PollConfig) -> Self {
        self.poll_config = config;
        self
    }

    pub fn build(self) -> Result<PredmarketClient, SdkError> {
        let protocol = self.protocol.ok_or_else(|| {
            SdkError::Validation("protocol config is required".to_string())
        })?;
        protocol.validate()?;
        if self.node_url.trim().is_empty() {
            return Err(SdkError::Validation("node_url must not be empty".to_string()));
        }

        let ledger = Arc::new(RestLedgerClient::new(&self.node_url)?);
        Ok(PredmarketClient {
            protocol,
            poller: TransactionPoller::with_config(ledger, self.poll_config),
        })
    }
}

//! Network URL constants for the ledger REST API.

/// Default ledger REST API base URL (mainnet).
pub const DEFAULT_NODE_URL: &str = "https://fullnode.mainnet.aptoslabs.com/v1";

/// Testnet ledger REST API base URL.
pub const TESTNET_NODE_URL: &str = "https://fullnode.testnet.aptoslabs.com/v1";

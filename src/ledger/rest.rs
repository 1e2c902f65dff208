//! REST ledger client for a node REST API.
//!
//! Implements [`LedgerQuery`] over the node's REST API. No retries here: the
//! poller decides what is retry-worthy, and only a 404 is.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::LedgerError;
use crate::ledger::{LedgerQuery, TransactionRecord};

/// Per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ledger query client for a node REST endpoint (e.g. `https://…/v1`).
#[derive(Debug, Clone)]
pub struct RestLedgerClient {
    base_url: String,
    client: Client,
}

impl RestLedgerClient {
    pub fn new(base_url: &str) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| LedgerError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Use a caller-configured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transaction_url(&self, hash: &str) -> String {
        format!(
            "{}/transactions/by_hash/{}",
            self.base_url,
            urlencoding::encode(hash)
        )
    }
}

#[async_trait]
impl LedgerQuery for RestLedgerClient {
    async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionRecord, LedgerError> {
        let url = self.transaction_url(hash);
        tracing::debug!(url = %url, "Querying transaction");

        // Transport timeouts land here too and are fatal, not "not found".
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LedgerError::NotFound(hash.to_string()));
        }
        if status.is_success() {
            return resp
                .json::<TransactionRecord>()
                .await
                .map_err(|e| LedgerError::Decode(e.to_string()));
        }

        let body = resp.text().await.unwrap_or_default();
        Err(LedgerError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_url() {
        let client = RestLedgerClient::new("https://node.example/v1/").unwrap();
        assert_eq!(client.base_url(), "https://node.example/v1");
        assert_eq!(
            client.transaction_url("0xabc"),
            "https://node.example/v1/transactions/by_hash/0xabc"
        );
    }

    #[test]
    fn test_transaction_url_escapes_hash() {
        let client = RestLedgerClient::new("https://node.example/v1").unwrap();
        assert_eq!(
            client.transaction_url("0xab/../cd"),
            "https://node.example/v1/transactions/by_hash/0xab%2F..%2Fcd"
        );
    }
}

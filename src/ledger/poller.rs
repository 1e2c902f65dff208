//! Transaction confirmation poller.
//!
//! Queries the ledger on a fixed cadence until the transaction reaches a
//! terminal outcome or the attempt budget runs out.
//!
//! | Ledger answer | Action |
//! |---------------|--------|
//! | not found / pending record | keep polling |
//! | executed, success | return `Succeeded` |
//! | executed, failure | return `Failed(vm_status)`, no retry |
//! | anything else | return `ConfirmError::LedgerQuery` immediately |
//! | budget exhausted | return `TimedOut` |
//!
//! Each poll owns only its attempt counter and timer. Dropping the future
//! abandons the poll without leaving anything locked.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfirmError, LedgerError};
use crate::ledger::outcome::{TrackedTransaction, TransactionOutcome};
use crate::ledger::{LedgerQuery, RecordStatus, TransactionRecord};
use crate::shared::serde_util;

/// Default delay between ledger queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Default number of ledger queries before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Polling cadence and budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Delay between consecutive queries.
    #[serde(rename = "interval_ms", with = "serde_util::duration_ms")]
    pub interval: Duration,
    /// Total number of queries, including the first. Zero is treated as one.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PollConfig {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Upper bound on time spent sleeping between queries.
    pub fn total_budget(&self) -> Duration {
        self.interval.saturating_mul(self.attempts() - 1)
    }
}

/// Polls a [`LedgerQuery`] for transaction outcomes.
#[derive(Debug, Clone)]
pub struct TransactionPoller<L> {
    ledger: L,
    config: PollConfig,
}

impl<L: LedgerQuery> TransactionPoller<L> {
    pub fn new(ledger: L) -> Self {
        Self::with_config(ledger, PollConfig::default())
    }

    pub fn with_config(ledger: L, config: PollConfig) -> Self {
        Self { ledger, config }
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Poll until a terminal outcome: `Succeeded`, `Failed`, or `TimedOut`.
    ///
    /// Only unexpected ledger errors are returned as `Err`.
    pub async fn poll(&self, hash: &str) -> Result<TransactionOutcome, ConfirmError> {
        let max_attempts = self.config.attempts();
        let mut tracked = TrackedTransaction::new(hash);

        for attempt in 1..=max_attempts {
            if let Some(outcome) = self.query_once(hash, attempt, max_attempts).await? {
                tracked.observe(outcome);
                return Ok(tracked.into_outcome());
            }

            if attempt < max_attempts && !self.config.interval.is_zero() {
                futures_timer::Delay::new(self.config.interval).await;
            }
        }

        tracing::warn!(
            hash,
            attempts = max_attempts,
            "Transaction not confirmed before retry budget ran out"
        );
        tracked.observe(TransactionOutcome::TimedOut {
            attempts: max_attempts,
        });
        Ok(tracked.into_outcome())
    }

    /// Poll and convert the outcome: `Ok` only for a successful execution.
    pub async fn confirm(&self, hash: &str) -> Result<TransactionRecord, ConfirmError> {
        self.poll(hash).await?.into_result(hash)
    }

    /// One ledger query. `Ok(None)` means keep polling.
    async fn query_once(
        &self,
        hash: &str,
        attempt: u32,
        max_attempts: u32,
    ) -> Result<Option<TransactionOutcome>, ConfirmError> {
        let record = match self.ledger.get_transaction_by_hash(hash).await {
            Ok(record) => record,
            Err(e) if e.is_not_found() => {
                tracing::debug!(hash, attempt, max = max_attempts, "Transaction not found yet");
                return Ok(None);
            }
            Err(e) => return Err(ConfirmError::LedgerQuery(e)),
        };

        match record.status() {
            RecordStatus::Pending => {
                tracing::debug!(hash, attempt, max = max_attempts, "Transaction pending");
                Ok(None)
            }
            RecordStatus::Succeeded => {
                tracing::info!(hash, attempt, version = ?record.version, "Transaction succeeded");
                Ok(Some(TransactionOutcome::Succeeded(record)))
            }
            RecordStatus::Failed(reason) => {
                tracing::info!(hash, attempt, vm_status = %reason, "Transaction failed");
                Ok(Some(TransactionOutcome::Failed { reason }))
            }
            RecordStatus::Unrecognized => Err(ConfirmError::LedgerQuery(LedgerError::Decode(
                format!("record for {} has no execution status", hash),
            ))),
        }
    }
}

/// Confirm a transaction against `ledger` with the given cadence.
///
/// Returns the executed record, or `ExecutionFailed` / `Timeout` /
/// `LedgerQuery` as appropriate.
pub async fn confirm_transaction<L: LedgerQuery>(
    ledger: &L,
    hash: &str,
    config: &PollConfig,
) -> Result<TransactionRecord, ConfirmError> {
    TransactionPoller::with_config(ledger, config.clone())
        .confirm(hash)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Answers `NotFound` until `succeed_on`, then success.
    struct SlowLedger {
        calls: AtomicU32,
        succeed_on: u32,
    }

    #[async_trait]
    impl LedgerQuery for SlowLedger {
        async fn get_transaction_by_hash(
            &self,
            hash: &str,
        ) -> Result<TransactionRecord, LedgerError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n >= self.succeed_on {
                Ok(TransactionRecord::succeeded(hash, n as u64))
            } else {
                Err(LedgerError::NotFound(hash.to_string()))
            }
        }
    }

    #[test]
    fn test_poll_config_defaults() {
        let config = PollConfig::default();
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.max_attempts, 30);
        assert_eq!(config.total_budget(), Duration::from_secs(58));
    }

    #[test]
    fn test_poll_config_zero_attempts_clamped() {
        let config = PollConfig::new(Duration::from_millis(5), 0);
        assert_eq!(config.attempts(), 1);
        assert_eq!(config.total_budget(), Duration::ZERO);
    }

    #[test]
    fn test_poll_config_from_json() {
        let config: PollConfig = serde_json::from_str(r#"{"interval_ms": 250}"#).unwrap();
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_poll_succeeds_after_not_found() {
        let ledger = SlowLedger {
            calls: AtomicU32::new(0),
            succeed_on: 3,
        };
        let poller = TransactionPoller::with_config(&ledger, PollConfig::new(Duration::ZERO, 5));

        let outcome = poller.poll("0xabc").await.unwrap();

        assert!(outcome.is_success());
        assert_eq!(ledger.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_zero_attempts_still_queries_once() {
        let ledger = SlowLedger {
            calls: AtomicU32::new(0),
            succeed_on: u32::MAX,
        };
        let poller = TransactionPoller::with_config(&ledger, PollConfig::new(Duration::ZERO, 0));

        let outcome = tokio_test::block_on(poller.poll("0xabc")).unwrap();

        assert_eq!(outcome, TransactionOutcome::TimedOut { attempts: 1 });
        assert_eq!(ledger.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_confirm_times_out() {
        let ledger = SlowLedger {
            calls: AtomicU32::new(0),
            succeed_on: u32::MAX,
        };
        let result =
            confirm_transaction(&ledger, "0xabc", &PollConfig::new(Duration::ZERO, 4)).await;

        assert!(matches!(result, Err(ConfirmError::Timeout { attempts: 4, .. })));
        assert_eq!(ledger.calls.load(Ordering::SeqCst), 4);
    }
}

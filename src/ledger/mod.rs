//! Ledger queries and transaction confirmation.
//!
//! The poller never talks to a node directly; it goes through the
//! [`LedgerQuery`] capability, so tests can script a fake ledger and hosts
//! can share one client across any number of concurrent polls.

pub mod outcome;
pub mod poller;
#[cfg(feature = "http")]
pub mod rest;

pub use outcome::{TrackedTransaction, TransactionOutcome};
pub use poller::{confirm_transaction, PollConfig, TransactionPoller};
#[cfg(feature = "http")]
pub use rest::RestLedgerClient;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::LedgerError;
use crate::shared::serde_util;

/// `type` of a record that is still in the mempool.
pub const PENDING_TRANSACTION_TYPE: &str = "pending_transaction";
/// `type` of an executed user transaction.
pub const USER_TRANSACTION_TYPE: &str = "user_transaction";

// ─── TransactionRecord ───────────────────────────────────────────────────────

/// A transaction as reported by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    pub hash: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Present once the transaction has been executed.
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub vm_status: Option<String>,
    #[serde(default, deserialize_with = "serde_util::u64_string_opt::deserialize")]
    pub version: Option<u64>,
    #[serde(default, deserialize_with = "serde_util::timestamp_us_opt::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// What a [`TransactionRecord`] says about execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// Known to the ledger but not executed yet.
    Pending,
    Succeeded,
    Failed(String),
    /// Executed record without a success flag.
    Unrecognized,
}

impl TransactionRecord {
    pub fn pending(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            kind: PENDING_TRANSACTION_TYPE.to_string(),
            success: None,
            vm_status: None,
            version: None,
            timestamp: None,
        }
    }

    pub fn succeeded(hash: impl Into<String>, version: u64) -> Self {
        Self {
            hash: hash.into(),
            kind: USER_TRANSACTION_TYPE.to_string(),
            success: Some(true),
            vm_status: Some("Executed successfully".to_string()),
            version: Some(version),
            timestamp: None,
        }
    }

    pub fn failed(hash: impl Into<String>, vm_status: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            kind: USER_TRANSACTION_TYPE.to_string(),
            success: Some(false),
            vm_status: Some(vm_status.into()),
            version: None,
            timestamp: None,
        }
    }

    pub fn status(&self) -> RecordStatus {
        if self.kind == PENDING_TRANSACTION_TYPE {
            return RecordStatus::Pending;
        }
        match self.success {
            Some(true) => RecordStatus::Succeeded,
            Some(false) => RecordStatus::Failed(
                self.vm_status
                    .clone()
                    .unwrap_or_else(|| "unknown failure".to_string()),
            ),
            None => RecordStatus::Unrecognized,
        }
    }
}

// ─── LedgerQuery ─────────────────────────────────────────────────────────────

/// Read access to transactions on the ledger.
///
/// Implementations return [`LedgerError::NotFound`] when the ledger has no
/// record of the hash; every other error is treated as fatal by the poller.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionRecord, LedgerError>;
}

#[async_trait]
impl<T: LedgerQuery + ?Sized> LedgerQuery for Arc<T> {
    async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionRecord, LedgerError> {
        (**self).get_transaction_by_hash(hash).await
    }
}

#[async_trait]
impl<'a, T: LedgerQuery + ?Sized> LedgerQuery for &'a T {
    async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionRecord, LedgerError> {
        (**self).get_transaction_by_hash(hash).await
    }
}

//! Transaction outcome state.

use crate::error::ConfirmError;
use crate::ledger::TransactionRecord;

/// Where a submitted transaction stands.
///
/// `Pending` is the only non-terminal state. Once terminal, an outcome never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionOutcome {
    Pending,
    Succeeded(TransactionRecord),
    /// Executed and reverted; carries the ledger's status text.
    Failed { reason: String },
    /// Retry budget exhausted without a terminal observation.
    TimedOut { attempts: u32 },
}

impl TransactionOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionOutcome::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionOutcome::Succeeded(_))
    }

    /// Map a terminal outcome to `Ok(record)` or the matching [`ConfirmError`].
    ///
    /// `Pending` maps to a zero-attempt timeout; callers only see it if they
    /// convert an outcome that was never polled.
    pub fn into_result(self, hash: &str) -> Result<TransactionRecord, ConfirmError> {
        match self {
            TransactionOutcome::Succeeded(record) => Ok(record),
            TransactionOutcome::Failed { reason } => Err(ConfirmError::ExecutionFailed {
                hash: hash.to_string(),
                vm_status: reason,
            }),
            TransactionOutcome::TimedOut { attempts } => Err(ConfirmError::Timeout {
                hash: hash.to_string(),
                attempts,
            }),
            TransactionOutcome::Pending => Err(ConfirmError::Timeout {
                hash: hash.to_string(),
                attempts: 0,
            }),
        }
    }
}

/// One transaction's outcome, advanced by observations.
///
/// Starts `Pending` as soon as the hash is known and moves to a terminal
/// state at most once; later observations are ignored.
#[derive(Debug, Clone)]
pub struct TrackedTransaction {
    hash: String,
    outcome: TransactionOutcome,
}

impl TrackedTransaction {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            outcome: TransactionOutcome::Pending,
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn outcome(&self) -> &TransactionOutcome {
        &self.outcome
    }

    /// Record an observation. Returns `true` if it changed the outcome.
    pub fn observe(&mut self, next: TransactionOutcome) -> bool {
        if self.outcome.is_terminal() || !next.is_terminal() {
            return false;
        }
        self.outcome = next;
        true
    }

    pub fn into_outcome(self) -> TransactionOutcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        let tracked = TrackedTransaction::new("0xabc");
        assert_eq!(tracked.hash(), "0xabc");
        assert_eq!(tracked.outcome(), &TransactionOutcome::Pending);
        assert!(!tracked.outcome().is_terminal());
    }

    #[test]
    fn test_terminal_transition_happens_once() {
        let mut tracked = TrackedTransaction::new("0xabc");

        assert!(!tracked.observe(TransactionOutcome::Pending));
        assert!(tracked.observe(TransactionOutcome::Failed { reason: "abort".into() }));

        // Neither Pending nor a different terminal state overrides it.
        assert!(!tracked.observe(TransactionOutcome::Pending));
        assert!(!tracked.observe(TransactionOutcome::Succeeded(TransactionRecord::succeeded(
            "0xabc", 1
        ))));
        assert_eq!(
            tracked.into_outcome(),
            TransactionOutcome::Failed { reason: "abort".into() }
        );
    }

    #[test]
    fn test_into_result_distinguishes_failure_and_timeout() {
        let failed = TransactionOutcome::Failed { reason: "abort".into() }.into_result("0x1");
        let timed_out = TransactionOutcome::TimedOut { attempts: 30 }.into_result("0x1");

        assert!(matches!(failed, Err(ConfirmError::ExecutionFailed { vm_status, .. }) if vm_status == "abort"));
        assert!(matches!(timed_out, Err(ConfirmError::Timeout { attempts: 30, .. })));

        let record = TransactionRecord::succeeded("0x1", 9);
        assert_eq!(
            TransactionOutcome::Succeeded(record.clone()).into_result("0x1"),
            Ok(record)
        );
    }
}

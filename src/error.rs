//! Unified SDK error types.
//!
//! Errors are split by the layer that raises them:
//!
//! | Layer | Error | Retried? |
//! |-------|-------|----------|
//! | Primitive encoding | [`EncodeError`] | never |
//! | Payload builders | [`BuildError`] | never |
//! | Ledger queries | [`LedgerError`] | only `NotFound`, by the poller |
//! | Confirmation | [`ConfirmError`] | never |

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Confirm error: {0}")]
    Confirm(#[from] ConfirmError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Coarse classification of an [`EncodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// Malformed input text (bad hex, bad digits, too many bytes).
    Format,
    /// A well-formed number outside the target width.
    Range,
}

/// Primitive encoding errors. Raised locally, before anything reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid hex in address '{0}'")]
    InvalidHex(String),

    #[error("Address '{input}' decodes to {len} bytes (max 32)")]
    AddressTooLong { input: String, len: usize },

    #[error("Address has no hex digits")]
    MissingHexDigits,

    #[error("Odd number of hex digits in address '{0}'")]
    OddLength(String),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid integer '{0}'")]
    InvalidInteger(String),

    #[error("Negative value {value} for unsigned {width}")]
    Negative { value: String, width: &'static str },

    #[error("Value {value} out of range for {width}")]
    OutOfRange { value: String, width: &'static str },
}

impl EncodeError {
    pub fn kind(&self) -> EncodeErrorKind {
        match self {
            EncodeError::InvalidHex(_)
            | EncodeError::AddressTooLong { .. }
            | EncodeError::MissingHexDigits
            | EncodeError::OddLength(_)
            | EncodeError::InvalidLength { .. }
            | EncodeError::InvalidInteger(_) => EncodeErrorKind::Format,
            EncodeError::Negative { .. } | EncodeError::OutOfRange { .. } => EncodeErrorKind::Range,
        }
    }
}

/// Payload construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Unknown comparison operator code: {0} (must be 0 or 1)")]
    UnknownOperator(u8),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid function id: {0}")]
    InvalidFunctionId(String),
}

/// Errors returned by a ledger query capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The ledger has no record of the transaction (yet).
    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// The query never got an answer (connect failure, transport timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Ledger returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Could not decode ledger response: {0}")]
    Decode(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound(_))
    }
}

/// Terminal confirmation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfirmError {
    #[error("Ledger query failed: {0}")]
    LedgerQuery(LedgerError),

    #[error("Transaction {hash} failed: {vm_status}")]
    ExecutionFailed { hash: String, vm_status: String },

    #[error("Transaction {hash} not confirmed after {attempts} attempts")]
    Timeout { hash: String, attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_kinds() {
        assert_eq!(
            EncodeError::InvalidHex("0xzz".into()).kind(),
            EncodeErrorKind::Format
        );
        assert_eq!(EncodeError::MissingHexDigits.kind(), EncodeErrorKind::Format);
        assert_eq!(
            EncodeError::OutOfRange { value: "256".into(), width: "u8" }.kind(),
            EncodeErrorKind::Range
        );
        assert_eq!(
            EncodeError::Negative { value: "-1".into(), width: "u64" }.kind(),
            EncodeErrorKind::Range
        );
    }

    #[test]
    fn test_build_error_wraps_encode_error() {
        let err: BuildError = EncodeError::MissingHexDigits.into();
        assert!(matches!(err, BuildError::Encode(EncodeError::MissingHexDigits)));

        let sdk: SdkError = err.into();
        assert!(matches!(sdk, SdkError::Build(_)));
    }

    #[test]
    fn test_confirm_error_messages_are_distinct() {
        let failed = ConfirmError::ExecutionFailed {
            hash: "0xabc".into(),
            vm_status: "Move abort".into(),
        };
        let timeout = ConfirmError::Timeout { hash: "0xabc".into(), attempts: 30 };
        assert!(failed.to_string().contains("Move abort"));
        assert!(timeout.to_string().contains("30 attempts"));
        assert_ne!(failed, timeout);
    }
}

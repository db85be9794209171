//! Error types for safe-quorum

use alloy::primitives::Address;
use thiserror::Error;

/// Result type alias for safe-quorum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deploying a Safe or coordinating a
/// threshold-signed transaction.
///
/// Relay variants are non-fatal by policy: the coordinator absorbs them into
/// warnings and continues to direct execution. Everything else aborts the
/// current operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration, rejected before any network call
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to reach the RPC provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Failed to fetch data from the blockchain
    #[error("Failed to fetch {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    /// No Safe contract code at the given address
    #[error("Safe not deployed at {0}")]
    SafeNotDeployed(Address),

    /// Deployment transaction was rejected or could not be confirmed
    #[error("Deployment failed: {reason}")]
    Submission { reason: String },

    /// Transaction service answered with a non-success status
    #[error("Relay rejected request (HTTP {status}): {body}")]
    RelayStatus { status: u16, body: String },

    /// Transaction service could not be reached at all
    #[error("Relay transport error: {0}")]
    RelayTransport(String),

    /// On-chain execution failed or produced no usable receipt
    #[error("Execution failed: {reason}")]
    Execution { reason: String },

    /// Signature generation or structure failure
    #[error("Failed to sign: {0}")]
    Signing(String),
}

impl Error {
    /// True for errors the coordinator downgrades to warnings.
    pub fn is_relay(&self) -> bool {
        matches!(self, Error::RelayStatus { .. } | Error::RelayTransport(_))
    }
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for Error {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(err: alloy::contract::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Error::Signing(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::RelayTransport(err.to_string())
    }
}

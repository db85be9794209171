//! Best-effort client for the Safe Transaction Service.
//!
//! The service stores proposed transactions and partial signatures so owners
//! can confirm asynchronously out-of-band. Nothing in the local pipeline
//! depends on it: every error returned here is downgraded to a warning by
//! the coordinator.

use alloy::primitives::{Address, Bytes, B256};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::chain::ChainConfig;
use crate::error::{Error, Result};
use crate::types::SafeTransaction;

/// Body of the multisig-transaction proposal endpoint.
///
/// Numeric fields travel as decimal strings and byte fields as 0x-hex, per
/// the service schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProposeRequest {
    to: Address,
    value: String,
    data: String,
    operation: u8,
    safe_tx_gas: String,
    base_gas: String,
    gas_price: String,
    gas_token: Address,
    refund_receiver: Address,
    nonce: String,
    contract_transaction_hash: B256,
    sender: Address,
    signature: String,
}

/// Body of the confirmation endpoint
#[derive(Debug, Serialize)]
struct ConfirmRequest {
    signature: String,
}

/// HTTP client for one transaction-service deployment
pub struct RelayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RelayClient {
    /// Creates a client for an explicit service URL
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client for the chain's known public service, if any
    pub fn for_chain(config: &ChainConfig) -> Option<Self> {
        config.transaction_service().map(Self::new)
    }

    /// The service URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::RelayTransport(format!("invalid relay URL: {e}")))
    }

    /// Submits a proposed transaction together with the proposer's
    /// signature, so other owners can confirm it through the service.
    pub async fn propose_transaction(
        &self,
        safe: Address,
        tx: &SafeTransaction,
        sender: Address,
        signature: &Bytes,
    ) -> Result<()> {
        let url = self.endpoint(&format!("api/v1/safes/{safe}/multisig-transactions/"))?;

        let body = ProposeRequest {
            to: tx.params.to,
            value: tx.params.value.to_string(),
            data: tx.params.data.to_string(),
            operation: tx.params.operation.as_u8(),
            safe_tx_gas: tx.params.safe_tx_gas.to_string(),
            base_gas: tx.params.base_gas.to_string(),
            gas_price: tx.params.gas_price.to_string(),
            gas_token: tx.params.gas_token,
            refund_receiver: tx.params.refund_receiver,
            nonce: tx.params.nonce.to_string(),
            contract_transaction_hash: tx.hash,
            sender,
            signature: signature.to_string(),
        };

        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "transaction service rejected proposal");
            return Err(Error::RelayStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%safe, hash = %tx.hash, %sender, "proposal accepted by transaction service");
        Ok(())
    }

    /// Submits one additional owner confirmation for an already-proposed
    /// transaction, keyed by its hash.
    pub async fn confirm_transaction(
        &self,
        safe_tx_hash: B256,
        signer: Address,
        signature: &Bytes,
    ) -> Result<()> {
        let url = self.endpoint(&format!(
            "api/v1/multisig-transactions/{safe_tx_hash}/confirmations/"
        ))?;

        let body = ConfirmRequest {
            signature: signature.to_string(),
        };

        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, %signer, "transaction service rejected confirmation");
            return Err(Error::RelayStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!(hash = %safe_tx_hash, %signer, "confirmation accepted by transaction service");
        Ok(())
    }
}

//! Building transaction proposals: intent parameters sealed under the
//! EIP-712 Safe transaction hash

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use tracing::debug;

use crate::encoding::compute_safe_transaction_hash;
use crate::error::Result;
use crate::safe::SafeClient;
use crate::types::{Operation, SafeTransaction, SafeTxParams};

/// Builder for a Safe transaction proposal.
///
/// Gas parameters default to zero (auto) and may be overridden before the
/// proposal is built. The Safe nonce is deliberately not a builder input: it
/// is read from the chain at build time, immediately before hashing, so the
/// hash reflects the freshest nonce this flow can observe. Concurrent
/// proposals against the same Safe are an operator error.
#[derive(Debug, Clone)]
pub struct ProposalBuilder {
    to: Address,
    value: U256,
    data: Bytes,
    operation: Operation,
    safe_tx_gas: U256,
    base_gas: U256,
    gas_price: U256,
    gas_token: Address,
    refund_receiver: Address,
}

impl ProposalBuilder {
    /// Starts a proposal for an arbitrary call
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
        }
    }

    /// Starts a proposal for a plain ETH transfer
    pub fn transfer(to: Address, value: U256) -> Self {
        Self::new(to, value, Bytes::new(), Operation::Call)
    }

    /// Overrides the Safe transaction gas limit
    pub fn with_safe_tx_gas(mut self, gas: U256) -> Self {
        self.safe_tx_gas = gas;
        self
    }

    /// Overrides the base gas overhead
    pub fn with_base_gas(mut self, gas: U256) -> Self {
        self.base_gas = gas;
        self
    }

    /// Enables gas refunds at `gas_price` in `gas_token` to `refund_receiver`
    pub fn with_refund(mut self, gas_price: U256, gas_token: Address, refund_receiver: Address) -> Self {
        self.gas_price = gas_price;
        self.gas_token = gas_token;
        self.refund_receiver = refund_receiver;
        self
    }

    /// Reads the Safe's current nonce and seals the intent into a hashed,
    /// signable transaction. The parameters are immutable from here on.
    pub async fn build<P>(self, safe: &SafeClient<P>) -> Result<SafeTransaction>
    where
        P: Provider<AnyNetwork> + Clone + 'static,
    {
        let nonce = safe.nonce().await?;

        let params = SafeTxParams {
            to: self.to,
            value: self.value,
            data: self.data,
            operation: self.operation,
            safe_tx_gas: self.safe_tx_gas,
            base_gas: self.base_gas,
            gas_price: self.gas_price,
            gas_token: self.gas_token,
            refund_receiver: self.refund_receiver,
            nonce,
        };

        let hash = compute_safe_transaction_hash(safe.chain_id(), safe.address(), &params);
        debug!(safe = %safe.address(), %nonce, hash = %hash, "built transaction proposal");

        Ok(SafeTransaction::new(params, hash))
    }
}

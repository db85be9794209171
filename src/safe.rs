//! Read-side client for a deployed Safe, including the on-chain signature
//! validity predicate

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;

use crate::chain::ChainConfig;
use crate::contracts::ISafe;
use crate::error::{Error, Result};
use crate::types::SafeTransaction;

/// Verdict of the Safe's own signature-check predicate.
///
/// Advisory only: a negative verdict is surfaced as a warning by the
/// coordinator, since execution is the authoritative rejection point.
#[derive(Debug, Clone)]
pub struct Validity {
    /// Whether the Safe accepted the aggregated signatures
    pub valid: bool,
    /// Revert reason reported by the contract when invalid
    pub reason: Option<String>,
}

/// Client for reading state from a deployed Safe.
///
/// The provider doubles as the submission path for `execTransaction` when it
/// carries a wallet, so one client serves the whole pipeline.
pub struct SafeClient<P> {
    provider: P,
    address: Address,
    config: ChainConfig,
}

impl<P> SafeClient<P>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    /// Creates a client without touching the network
    pub fn new(provider: P, address: Address, config: ChainConfig) -> Self {
        Self {
            provider,
            address,
            config,
        }
    }

    /// Connects to a deployed Safe: auto-detects the chain id and verifies
    /// that contract code exists at `address`.
    pub async fn connect(provider: P, address: Address) -> Result<Self> {
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        let client = Self::new(provider, address, ChainConfig::new(chain_id));
        if !client.is_deployed().await? {
            return Err(Error::SafeNotDeployed(address));
        }
        Ok(client)
    }

    /// The Safe contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// The chain this client is bound to
    pub fn chain_id(&self) -> u64 {
        self.config.chain_id
    }

    /// Chain configuration (canonical contract addresses, service URL)
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// True when contract code exists at the Safe address
    pub async fn is_deployed(&self) -> Result<bool> {
        let code = self
            .provider
            .get_code_at(self.address)
            .await
            .map_err(|e| Error::Fetch {
                what: "code",
                reason: e.to_string(),
            })?;
        Ok(!code.is_empty())
    }

    /// Current ETH balance of the Safe
    pub async fn balance(&self) -> Result<U256> {
        self.provider
            .get_balance(self.address)
            .await
            .map_err(|e| Error::Fetch {
                what: "balance",
                reason: e.to_string(),
            })
    }

    /// Current Safe nonce
    pub async fn nonce(&self) -> Result<U256> {
        let safe = ISafe::new(self.address, &self.provider);
        safe.nonce().call().await.map_err(|e| Error::Fetch {
            what: "nonce",
            reason: e.to_string(),
        })
    }

    /// The Safe's signature threshold
    pub async fn threshold(&self) -> Result<u64> {
        let safe = ISafe::new(self.address, &self.provider);
        let threshold = safe.getThreshold().call().await.map_err(|e| Error::Fetch {
            what: "threshold",
            reason: e.to_string(),
        })?;
        Ok(threshold.to::<u64>())
    }

    /// The Safe's owner addresses
    pub async fn owners(&self) -> Result<Vec<Address>> {
        let safe = ISafe::new(self.address, &self.provider);
        safe.getOwners().call().await.map_err(|e| Error::Fetch {
            what: "owners",
            reason: e.to_string(),
        })
    }

    /// Checks if an address is an owner of the Safe
    pub async fn is_owner(&self, address: Address) -> Result<bool> {
        let safe = ISafe::new(self.address, &self.provider);
        safe.isOwner(address).call().await.map_err(|e| Error::Fetch {
            what: "is_owner",
            reason: e.to_string(),
        })
    }

    /// Runs the Safe's `checkSignatures` predicate against the aggregated
    /// transaction via `eth_call`. The contract reverts on invalid or
    /// insufficient signatures; the revert reason becomes the verdict's
    /// reason.
    pub async fn check_signatures(&self, tx: &SafeTransaction) -> Validity {
        let safe = ISafe::new(self.address, &self.provider);
        match safe
            .checkSignatures(tx.hash, Bytes::new(), tx.signatures.encode())
            .call()
            .await
        {
            Ok(_) => Validity {
                valid: true,
                reason: None,
            },
            Err(e) => Validity {
                valid: false,
                reason: Some(e.to_string()),
            },
        }
    }
}

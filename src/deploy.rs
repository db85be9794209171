//! Deterministic Safe deployment through the proxy factory

use alloy::network::primitives::ReceiptResponse;
use alloy::network::AnyNetwork;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::Provider;
use tracing::{debug, info};

use crate::chain::ChainConfig;
use crate::contracts::ISafeProxyFactory;
use crate::create2::{compute_create2_address, encode_setup_call};
use crate::error::{Error, Result};
use crate::types::{PendingSafe, SafeAccountConfig};

/// Outcome of a deployment attempt
#[derive(Debug, Clone)]
pub struct DeployedSafe {
    /// Address the Safe lives at (always the predicted address)
    pub address: Address,
    /// Deployment transaction hash; `None` when the Safe already existed
    pub tx_hash: Option<TxHash>,
    /// True when the predicted address already carried code
    pub already_deployed: bool,
}

/// Deploys Safes at CREATE2-predicted addresses.
///
/// The provider must carry the deployer credential as its wallet; the
/// deployer pays for the broadcast and does not need to be an owner.
pub struct SafeDeployer<P> {
    provider: P,
    config: ChainConfig,
}

impl<P> SafeDeployer<P>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    /// Creates a deployer bound to an explicit chain configuration
    pub fn new(provider: P, config: ChainConfig) -> Self {
        Self { provider, config }
    }

    /// Creates a deployer with the chain id auto-detected from the provider
    pub async fn connect(provider: P) -> Result<Self> {
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;
        Ok(Self::new(provider, ChainConfig::new(chain_id)))
    }

    /// Chain configuration in use
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Computes the deterministic address the Safe will deploy at, without
    /// broadcasting anything. Validates the account configuration first.
    pub async fn predict(
        &self,
        account: &SafeAccountConfig,
        salt_nonce: U256,
    ) -> Result<PendingSafe> {
        account.validate()?;

        let addresses = &self.config.addresses;
        let initializer = encode_setup_call(account, addresses.fallback_handler);

        let factory = ISafeProxyFactory::new(addresses.proxy_factory, &self.provider);
        let creation_code = factory
            .proxyCreationCode()
            .call()
            .await
            .map_err(|e| Error::Fetch {
                what: "proxy creation code",
                reason: e.to_string(),
            })?;

        let address = compute_create2_address(
            addresses.proxy_factory,
            addresses.safe_singleton,
            &initializer,
            salt_nonce,
            &creation_code,
        );

        debug!(%address, threshold = account.threshold, owners = account.owners.len(), "predicted Safe address");

        Ok(PendingSafe {
            config: account.clone(),
            salt_nonce,
            address,
        })
    }

    /// True when contract code exists at `address`
    pub async fn is_deployed(&self, address: Address) -> Result<bool> {
        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|e| Error::Fetch {
                what: "code",
                reason: e.to_string(),
            })?;
        Ok(!code.is_empty())
    }

    /// Deploys the predicted Safe. Idempotent: if the predicted address
    /// already carries code the existing deployment is reported instead of
    /// re-broadcasting or failing.
    pub async fn deploy(&self, pending: &PendingSafe) -> Result<DeployedSafe> {
        if self.is_deployed(pending.address).await? {
            info!(address = %pending.address, "Safe already deployed");
            return Ok(DeployedSafe {
                address: pending.address,
                tx_hash: None,
                already_deployed: true,
            });
        }

        let addresses = &self.config.addresses;
        let initializer = encode_setup_call(&pending.config, addresses.fallback_handler);

        let factory = ISafeProxyFactory::new(addresses.proxy_factory, &self.provider);
        let pending_tx = factory
            .createProxyWithNonce(addresses.safe_singleton, initializer, pending.salt_nonce)
            .send()
            .await
            .map_err(|e| Error::Submission {
                reason: format!("failed to send deployment transaction: {e}"),
            })?;

        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| Error::Submission {
                reason: format!("failed to await deployment receipt: {e}"),
            })?;

        if !receipt.status() {
            return Err(Error::Submission {
                reason: format!(
                    "deployment transaction {} reverted",
                    receipt.transaction_hash()
                ),
            });
        }

        // re-query deployment status: the proxy must now exist at the
        // predicted address
        if !self.is_deployed(pending.address).await? {
            return Err(Error::Submission {
                reason: format!("no code at predicted address {}", pending.address),
            });
        }

        info!(address = %pending.address, tx = %receipt.transaction_hash(), "Safe deployed");

        Ok(DeployedSafe {
            address: pending.address,
            tx_hash: Some(receipt.transaction_hash()),
            already_deployed: false,
        })
    }

    /// Predict-and-deploy in one step
    pub async fn deploy_account(
        &self,
        account: &SafeAccountConfig,
        salt_nonce: U256,
    ) -> Result<DeployedSafe> {
        let pending = self.predict(account, salt_nonce).await?;
        self.deploy(&pending).await
    }
}

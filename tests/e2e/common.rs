//! Common test utilities for E2E tests

use alloy::network::{AnyNetwork, EthereumWallet};
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use safe_quorum::{DeployedSafe, SafeAccountConfig, SafeClient, SafeDeployer};

/// Macro to skip tests when ETH_RPC_URL is not set
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {
        if std::env::var("ETH_RPC_URL").is_err() {
            eprintln!("Skipping test: ETH_RPC_URL not set");
            return;
        }
    };
}

/// Type alias for the wallet provider used in tests
pub type TestProvider = alloy::providers::fillers::FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::fillers::JoinFill<
            alloy::providers::Identity,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::GasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::BlobGasFiller,
                    alloy::providers::fillers::JoinFill<
                        alloy::providers::fillers::NonceFiller,
                        alloy::providers::fillers::ChainIdFiller,
                    >,
                >,
            >,
        >,
        alloy::providers::fillers::WalletFiller<EthereumWallet>,
    >,
    alloy::providers::RootProvider<AnyNetwork>,
    AnyNetwork,
>;

/// Test harness that spawns Anvil forking from ETH_RPC_URL (so the canonical
/// Safe contracts exist) and exposes the default accounts as owner signers.
///
/// The first account doubles as the deployer and as the relayer wallet on
/// the shared provider.
pub struct TestHarness {
    pub provider: TestProvider,
    pub signers: Vec<PrivateKeySigner>,
    pub _anvil: AnvilInstance,
}

impl TestHarness {
    /// Creates a new test harness with Anvil forking from ETH_RPC_URL
    pub async fn new() -> Self {
        let rpc_url = std::env::var("ETH_RPC_URL").expect("ETH_RPC_URL must be set");

        // cancun hardfork for PUSH0 opcode support in the Safe contracts
        let anvil = Anvil::new()
            .fork(rpc_url)
            .args(["--hardfork", "cancun"])
            .spawn();

        let signers: Vec<PrivateKeySigner> = anvil
            .keys()
            .iter()
            .take(4)
            .map(|key| key.clone().into())
            .collect();

        let wallet = EthereumWallet::from(signers[0].clone());
        let provider = ProviderBuilder::new()
            .network::<AnyNetwork>()
            .wallet(wallet)
            .connect_http(anvil.endpoint_url());

        Self {
            provider,
            signers,
            _anvil: anvil,
        }
    }

    /// Addresses of the first `count` harness signers
    pub fn owner_addresses(&self, count: usize) -> Vec<Address> {
        self.signers
            .iter()
            .take(count)
            .map(|signer| signer.address())
            .collect()
    }

    /// Creates a deployer using the harness provider (account 0 pays)
    pub async fn deployer(&self) -> SafeDeployer<TestProvider> {
        SafeDeployer::connect(self.provider.clone())
            .await
            .expect("Failed to connect deployer")
    }

    /// Deploys a Safe owned by the first `owners` harness accounts
    pub async fn deploy_safe(&self, owners: usize, threshold: u64, salt_nonce: U256) -> DeployedSafe {
        let account = SafeAccountConfig::new(self.owner_addresses(owners), threshold)
            .expect("Invalid account config");
        self.deployer()
            .await
            .deploy_account(&account, salt_nonce)
            .await
            .expect("Failed to deploy Safe")
    }

    /// Creates a Safe client for the given Safe address
    pub async fn safe_client(&self, address: Address) -> SafeClient<TestProvider> {
        SafeClient::connect(self.provider.clone(), address)
            .await
            .expect("Failed to connect Safe client")
    }

    /// Sets an address's ETH balance using anvil_setBalance
    pub async fn mint_eth(&self, to: Address, amount: U256) {
        let params = serde_json::json!([format!("{:?}", to), format!("0x{:x}", amount)]);

        // anvil_setBalance returns null on success
        self.provider
            .client()
            .request::<_, Option<bool>>("anvil_setBalance", params)
            .await
            .expect("Failed to set balance");
    }

    /// Gets the ETH balance of an address
    pub async fn get_balance(&self, address: Address) -> U256 {
        self.provider
            .get_balance(address)
            .await
            .expect("Failed to get balance")
    }
}

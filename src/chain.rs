//! Chain configuration: canonical Safe contract addresses and the
//! per-network transaction-service endpoints

use alloy::primitives::{address, Address};
use url::Url;

/// Canonical Safe v1.4.1 contract addresses
/// These addresses are the same across all supported chains (CREATE2 deployment)
#[derive(Debug, Clone)]
pub struct ChainAddresses {
    /// Safe singleton address
    pub safe_singleton: Address,
    /// Safe proxy factory address
    pub proxy_factory: Address,
    /// Compatibility fallback handler
    pub fallback_handler: Address,
}

impl Default for ChainAddresses {
    fn default() -> Self {
        Self::v1_4_1()
    }
}

impl ChainAddresses {
    /// Returns the canonical Safe v1.4.1 addresses
    pub fn v1_4_1() -> Self {
        Self {
            safe_singleton: address!("41675C099F32341bf84BFc5382aF534df5C7461a"),
            proxy_factory: address!("4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67"),
            fallback_handler: address!("fd0732Dc9E303f09fCEf3a7388Ad10A83459Ec99"),
        }
    }

    /// Creates a custom address configuration
    pub fn custom(safe_singleton: Address, proxy_factory: Address, fallback_handler: Address) -> Self {
        Self {
            safe_singleton,
            proxy_factory,
            fallback_handler,
        }
    }
}

/// Chain configuration including addresses and chain ID
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Contract addresses
    pub addresses: ChainAddresses,
}

impl ChainConfig {
    /// Creates a new chain configuration with canonical v1.4.1 addresses
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            addresses: ChainAddresses::v1_4_1(),
        }
    }

    /// Creates a chain configuration with custom addresses
    pub fn with_addresses(chain_id: u64, addresses: ChainAddresses) -> Self {
        Self { chain_id, addresses }
    }

    /// Returns configuration for Ethereum mainnet
    pub fn mainnet() -> Self {
        Self::new(chain_ids::MAINNET)
    }

    /// Returns configuration for Sepolia testnet
    pub fn sepolia() -> Self {
        Self::new(chain_ids::SEPOLIA)
    }

    /// Returns configuration for Gnosis Chain
    pub fn gnosis() -> Self {
        Self::new(chain_ids::GNOSIS)
    }

    /// Returns configuration for Base
    pub fn base() -> Self {
        Self::new(chain_ids::BASE)
    }

    /// The public Safe Transaction Service endpoint for this chain, if one
    /// is known. Used as the default relay when no explicit URL is given.
    pub fn transaction_service(&self) -> Option<Url> {
        let host = match self.chain_id {
            chain_ids::MAINNET => "safe-transaction-mainnet.safe.global",
            chain_ids::SEPOLIA => "safe-transaction-sepolia.safe.global",
            chain_ids::GNOSIS => "safe-transaction-gnosis-chain.safe.global",
            chain_ids::POLYGON => "safe-transaction-polygon.safe.global",
            chain_ids::ARBITRUM => "safe-transaction-arbitrum.safe.global",
            chain_ids::OPTIMISM => "safe-transaction-optimism.safe.global",
            chain_ids::BASE => "safe-transaction-base.safe.global",
            _ => return None,
        };
        // host strings above always parse
        Url::parse(&format!("https://{host}/")).ok()
    }
}

/// Well-known chain IDs
pub mod chain_ids {
    pub const MAINNET: u64 = 1;
    pub const SEPOLIA: u64 = 11155111;
    pub const ARBITRUM: u64 = 42161;
    pub const OPTIMISM: u64 = 10;
    pub const BASE: u64 = 8453;
    pub const POLYGON: u64 = 137;
    pub const GNOSIS: u64 = 100;
}

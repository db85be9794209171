//! # safe-quorum
//!
//! Deploy Safe v1.4.1 smart accounts and coordinate k-of-n signed
//! transactions against them.
//!
//! ## Features
//!
//! - Deterministic (CREATE2) Safe deployment with idempotent retry
//! - EIP-712 transaction hashing matching the on-chain verification rule
//! - Threshold signature collection from locally available credentials
//! - Best-effort sharing with the Safe Transaction Service so remaining
//!   owners can confirm asynchronously
//! - Single-shot on-chain execution once the threshold is met
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_quorum::{Coordinator, ProposalBuilder, RelayClient, SafeClient};
//! use alloy::primitives::U256;
//!
//! // Connect to a deployed Safe (provider carries the relayer wallet)
//! let safe = SafeClient::connect(provider, safe_address).await?;
//! let relay = RelayClient::for_chain(safe.config());
//!
//! // Propose, collect 2-of-3 signatures, relay, execute
//! let coordinator = Coordinator::new(safe, signers, relay)?;
//! let report = coordinator
//!     .transfer(ProposalBuilder::transfer(recipient, U256::from(10_000_000_000_000_000u64)))
//!     .await?;
//!
//! println!("executed in tx {}", report.execution.tx_hash);
//! for warning in &report.warnings {
//!     println!("warning: {warning}");
//! }
//! ```
//!
//! Deployment is a separate, one-shot flow:
//!
//! ```rust,ignore
//! use safe_quorum::{SafeAccountConfig, SafeDeployer};
//!
//! let deployer = SafeDeployer::connect(provider).await?;
//! let account = SafeAccountConfig::new(owners, 2)?;
//! let pending = deployer.predict(&account, U256::ZERO).await?;
//! let deployed = deployer.deploy(&pending).await?;
//! ```

pub mod chain;
pub mod collect;
pub mod contracts;
pub mod coordinator;
pub mod create2;
pub mod deploy;
pub mod encoding;
pub mod error;
pub mod execute;
pub mod proposal;
pub mod relay;
pub mod safe;
pub mod signing;
pub mod types;

// Re-export main types at crate root
pub use chain::{ChainAddresses, ChainConfig};
pub use collect::SignatureCollector;
pub use contracts::{ISafe, ISafeProxyFactory, ISafeSetup};
pub use coordinator::{Coordinator, TransferReport, Warning};
pub use create2::{compute_create2_address, encode_setup_call};
pub use deploy::{DeployedSafe, SafeDeployer};
pub use encoding::compute_safe_transaction_hash;
pub use error::{Error, Result};
pub use execute::{execute_transaction, normalize_receipt, ExecutionResult};
pub use proposal::ProposalBuilder;
pub use relay::RelayClient;
pub use safe::{SafeClient, Validity};
pub use signing::{sign_hash, validate_signature};
pub use types::{
    Operation, PendingSafe, SafeAccountConfig, SafeTransaction, SafeTxParams, SignatureSet,
};

// Re-export alloy types that are commonly used
pub use alloy::network::AnyNetwork;
pub use alloy::primitives::{Address, Bytes, U256};
pub use alloy::providers::Provider;

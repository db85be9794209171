//! Owner-set configuration and pre-deployment Safe state

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Owner set and signature threshold for a Safe.
///
/// Deployment and coordination both start from this configuration; it is
/// validated once, up front, and treated as immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeAccountConfig {
    /// Owner addresses, in setup order
    pub owners: Vec<Address>,
    /// Number of owner signatures required to execute a transaction
    pub threshold: u64,
}

impl SafeAccountConfig {
    /// Creates a validated configuration.
    pub fn new(owners: Vec<Address>, threshold: u64) -> Result<Self> {
        let config = Self { owners, threshold };
        config.validate()?;
        Ok(config)
    }

    /// Checks the owner-set invariants: at least one owner, no zero or
    /// duplicate addresses, and 1 <= threshold <= owner count.
    pub fn validate(&self) -> Result<()> {
        if self.owners.is_empty() {
            return Err(Error::Config("owner set is empty".into()));
        }
        if self.threshold == 0 {
            return Err(Error::Config("threshold must be at least 1".into()));
        }
        if self.threshold as usize > self.owners.len() {
            return Err(Error::Config(format!(
                "threshold {} exceeds owner count {}",
                self.threshold,
                self.owners.len()
            )));
        }
        for (i, owner) in self.owners.iter().enumerate() {
            if owner.is_zero() {
                return Err(Error::Config("owner address cannot be zero".into()));
            }
            if self.owners[..i].contains(owner) {
                return Err(Error::Config(format!("duplicate owner {owner}")));
            }
        }
        Ok(())
    }
}

/// A Safe that exists only as a predicted CREATE2 address.
///
/// Superseded by an on-chain handle once deployment is confirmed. The
/// prediction is a pure function of the configuration and salt nonce, so a
/// failed deployment can be retried against the same address.
#[derive(Debug, Clone)]
pub struct PendingSafe {
    /// Owner set and threshold the Safe will be initialized with
    pub config: SafeAccountConfig,
    /// CREATE2 salt nonce used for address derivation
    pub salt_nonce: U256,
    /// The address the proxy will be deployed at
    pub address: Address,
}

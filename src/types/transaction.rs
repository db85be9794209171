//! Safe transaction records: intent parameters, collected signatures, and
//! the combination the executor and relay operate on

use std::collections::BTreeMap;

use alloy::primitives::{Address, Bytes, B256, U256};

use crate::error::Result;
use crate::signing::validate_signature;
use crate::types::Operation;

/// Safe transaction parameters.
///
/// Immutable once the transaction hash has been computed from them; the hash
/// binds every field, so changing any of them afterwards would invalidate
/// collected signatures.
#[derive(Debug, Clone)]
pub struct SafeTxParams {
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead)
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for ETH)
    pub gas_token: Address,
    /// Address to receive gas refund
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl SafeTxParams {
    /// Creates new SafeTxParams with minimal parameters; gas fields default
    /// to zero (the Safe treats zero safeTxGas as "use all available gas").
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
            nonce: U256::ZERO,
        }
    }

    /// Sets the safe transaction gas
    pub fn with_safe_tx_gas(mut self, gas: U256) -> Self {
        self.safe_tx_gas = gas;
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }
}

/// Signatures collected for one Safe transaction hash, keyed by signer.
///
/// Insertion order is irrelevant: the wire encoding consumed by the Safe's
/// `checkSignatures` must be sorted ascending by signer address, which the
/// underlying map gives us for free.
#[derive(Debug, Clone, Default)]
pub struct SignatureSet {
    entries: BTreeMap<Address, Bytes>,
}

impl SignatureSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a signature for `signer`, replacing any previous one.
    ///
    /// The signature is structurally validated (65 bytes, known v value);
    /// cryptographic verification is left to the Safe contract.
    pub fn insert(&mut self, signer: Address, signature: Bytes) -> Result<()> {
        validate_signature(&signature)?;
        self.entries.insert(signer, signature);
        Ok(())
    }

    /// True if `signer` has already contributed a signature
    pub fn contains(&self, signer: &Address) -> bool {
        self.entries.contains_key(signer)
    }

    /// Number of collected signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no signatures have been collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once at least `threshold` signatures are present
    pub fn meets_threshold(&self, threshold: u64) -> bool {
        self.entries.len() as u64 >= threshold
    }

    /// Iterates entries in ascending signer-address order
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Bytes)> {
        self.entries.iter()
    }

    /// Returns the signature contributed by `signer`, if any
    pub fn get(&self, signer: &Address) -> Option<&Bytes> {
        self.entries.get(signer)
    }

    /// Concatenates all signatures sorted ascending by signer address, the
    /// layout `execTransaction` expects.
    pub fn encode(&self) -> Bytes {
        let mut encoded = Vec::with_capacity(self.entries.len() * 65);
        for signature in self.entries.values() {
            encoded.extend_from_slice(signature);
        }
        Bytes::from(encoded)
    }
}

/// A proposed Safe transaction: sealed parameters, their hash, and the
/// signatures collected so far.
#[derive(Debug, Clone)]
pub struct SafeTransaction {
    /// Transaction parameters the hash was computed over
    pub params: SafeTxParams,
    /// EIP-712 Safe transaction hash, the identifier signatures are made over
    pub hash: B256,
    /// Owner signatures collected so far
    pub signatures: SignatureSet,
}

impl SafeTransaction {
    /// Wraps hashed parameters with an empty signature set
    pub fn new(params: SafeTxParams, hash: B256) -> Self {
        Self {
            params,
            hash,
            signatures: SignatureSet::new(),
        }
    }

    /// Attaches a signature from `signer`
    pub fn add_signature(&mut self, signer: Address, signature: Bytes) -> Result<()> {
        self.signatures.insert(signer, signature)
    }

    /// Number of attached signatures
    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    /// True once the transaction carries enough signatures to execute
    pub fn is_executable(&self, threshold: u64) -> bool {
        self.signatures.meets_threshold(threshold)
    }
}

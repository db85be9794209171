//! EIP-712 hashing for Safe transactions.
//!
//! The hash computed here must byte-match the Safe v1.4.1 contract's
//! `getTransactionHash`: it is what owners sign and what `checkSignatures`
//! verifies against, so any deviation invalidates every collected signature.

use alloy::primitives::{keccak256, Address, B256, U256};

use crate::contracts::{DOMAIN_SEPARATOR_TYPEHASH, SAFE_TX_TYPEHASH};
use crate::types::SafeTxParams;

fn left_pad_address(address: Address) -> [u8; 32] {
    let mut padded = [0u8; 32];
    padded[12..].copy_from_slice(address.as_slice());
    padded
}

/// Computes the domain separator for a Safe
///
/// domain_separator = keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, safeAddress))
pub fn compute_domain_separator(chain_id: u64, safe_address: Address) -> B256 {
    let mut encoded = Vec::with_capacity(96);
    encoded.extend_from_slice(&DOMAIN_SEPARATOR_TYPEHASH);
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    encoded.extend_from_slice(&left_pad_address(safe_address));
    keccak256(&encoded)
}

/// Computes the struct hash for SafeTx
///
/// safeTxHash = keccak256(abi.encode(
///     SAFE_TX_TYPEHASH,
///     to, value, keccak256(data), operation,
///     safeTxGas, baseGas, gasPrice, gasToken, refundReceiver, nonce
/// ))
pub fn compute_safe_tx_hash(params: &SafeTxParams) -> B256 {
    let mut encoded = Vec::with_capacity(384);

    encoded.extend_from_slice(&SAFE_TX_TYPEHASH);
    encoded.extend_from_slice(&left_pad_address(params.to));
    encoded.extend_from_slice(&params.value.to_be_bytes::<32>());

    // dynamic bytes are represented by their hash in EIP-712
    encoded.extend_from_slice(keccak256(&params.data).as_slice());

    let mut op_word = [0u8; 32];
    op_word[31] = params.operation.as_u8();
    encoded.extend_from_slice(&op_word);

    encoded.extend_from_slice(&params.safe_tx_gas.to_be_bytes::<32>());
    encoded.extend_from_slice(&params.base_gas.to_be_bytes::<32>());
    encoded.extend_from_slice(&params.gas_price.to_be_bytes::<32>());
    encoded.extend_from_slice(&left_pad_address(params.gas_token));
    encoded.extend_from_slice(&left_pad_address(params.refund_receiver));
    encoded.extend_from_slice(&params.nonce.to_be_bytes::<32>());

    keccak256(&encoded)
}

/// Computes the final EIP-712 hash to sign
///
/// hash = keccak256("\x19\x01" || domainSeparator || safeTxHash)
pub fn compute_transaction_hash(domain_separator: B256, safe_tx_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(66);
    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_separator.as_slice());
    encoded.extend_from_slice(safe_tx_hash.as_slice());
    keccak256(&encoded)
}

/// Computes the complete transaction hash for signing, domain-separated by
/// chain id and Safe address
pub fn compute_safe_transaction_hash(
    chain_id: u64,
    safe_address: Address,
    params: &SafeTxParams,
) -> B256 {
    let domain_separator = compute_domain_separator(chain_id, safe_address);
    let safe_tx_hash = compute_safe_tx_hash(params);
    compute_transaction_hash(domain_separator, safe_tx_hash)
}

//! ECDSA signature generation and validation for Safe transactions

use alloy::primitives::{Bytes, B256};
use alloy::signers::Signer;

use crate::error::{Error, Result};

/// Signs a transaction hash and formats the result for Safe.
///
/// Safe expects signatures as r (32 bytes) || s (32 bytes) || v (1 byte)
/// with v adjusted to 27 or 28. Signing is deterministic for a given
/// credential and hash (RFC 6979 nonces), so re-running collection yields
/// the same bytes.
pub async fn sign_hash<S: Signer>(signer: &S, hash: B256) -> Result<Bytes> {
    let signature = signer.sign_hash(&hash).await?;

    let r = signature.r();
    let s = signature.s();
    // v is a bool (y_parity) in alloy - true means odd (28), false means even (27)
    let v_byte = if signature.v() { 28u8 } else { 27u8 };

    let mut sig_bytes = Vec::with_capacity(65);
    sig_bytes.extend_from_slice(&r.to_be_bytes::<32>());
    sig_bytes.extend_from_slice(&s.to_be_bytes::<32>());
    sig_bytes.push(v_byte);

    Ok(Bytes::from(sig_bytes))
}

/// Validates that a signature is 65 bytes and has a valid v value
pub fn validate_signature(signature: &[u8]) -> Result<()> {
    if signature.len() != 65 {
        return Err(Error::Signing(format!(
            "Invalid signature length: expected 65, got {}",
            signature.len()
        )));
    }

    let v = signature[64];
    // Valid v values: 0, 1 (pre-validated), 27, 28 (ECDSA), 31, 32 (eth_sign)
    if !matches!(v, 0 | 1 | 27 | 28 | 31 | 32) {
        return Err(Error::Signing(format!("Invalid signature v value: {}", v)));
    }

    Ok(())
}

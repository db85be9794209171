//! Collecting owner signatures for a proposed transaction

use alloy::signers::local::PrivateKeySigner;
use tracing::debug;

use crate::error::Result;
use crate::signing::sign_hash;
use crate::types::SafeTransaction;

/// Collects signatures over a transaction hash from locally available
/// signer credentials.
///
/// Signers are invoked independently, in the order given, until the
/// threshold is met; remaining credentials are not asked. Signatures beyond
/// the threshold (e.g. attached by the caller beforehand) are kept.
pub struct SignatureCollector<'a> {
    signers: &'a [PrivateKeySigner],
    threshold: u64,
}

impl<'a> SignatureCollector<'a> {
    /// Creates a collector over the given credentials
    pub fn new(signers: &'a [PrivateKeySigner], threshold: u64) -> Self {
        Self { signers, threshold }
    }

    /// Signs `tx.hash` with each credential until the threshold is met and
    /// attaches the signatures. Returns the total number of signatures on
    /// the transaction afterwards, which may still be below the threshold
    /// when too few credentials are available; execution is where that is
    /// rejected.
    pub async fn collect(&self, tx: &mut SafeTransaction) -> Result<usize> {
        for signer in self.signers {
            if tx.signatures.meets_threshold(self.threshold) {
                break;
            }

            let address = signer.address();
            if tx.signatures.contains(&address) {
                continue;
            }

            let signature = sign_hash(signer, tx.hash).await?;
            tx.add_signature(address, signature)?;
            debug!(signer = %address, collected = tx.signature_count(), "signature collected");
        }

        Ok(tx.signature_count())
    }
}

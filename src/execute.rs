//! On-chain execution of a fully-signed Safe transaction

use alloy::network::primitives::ReceiptResponse;
use alloy::network::AnyNetwork;
use alloy::primitives::{Address, TxHash};
use alloy::providers::Provider;
use tracing::info;

use crate::contracts::ISafe;
use crate::error::{Error, Result};
use crate::types::SafeTransaction;

/// Result of executing a Safe transaction on chain
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Hash of the on-chain transaction that carried the execution
    pub tx_hash: TxHash,
    /// Whether the receipt reported success
    pub success: bool,
    /// Block the transaction was included in
    pub block_number: Option<u64>,
    /// Gas consumed by the on-chain transaction
    pub gas_used: u64,
}

/// Maps a provider receipt into the internal execution result.
///
/// All knowledge about the client's response shape lives here; the rest of
/// the pipeline only ever sees `ExecutionResult`.
pub fn normalize_receipt<R: ReceiptResponse>(receipt: &R) -> ExecutionResult {
    ExecutionResult {
        tx_hash: receipt.transaction_hash(),
        success: receipt.status(),
        block_number: receipt.block_number(),
        gas_used: receipt.gas_used(),
    }
}

/// Submits a threshold-signed transaction through `execTransaction` and
/// waits for inclusion.
///
/// The provider must carry a wallet; its signer acts as the relayer of the
/// outer call and does not need to be an owner once enough signatures are
/// attached. Refuses to broadcast below the threshold. No retry is attempted
/// here; a failed receipt is fatal to the caller.
pub async fn execute_transaction<P>(
    provider: &P,
    safe_address: Address,
    threshold: u64,
    tx: &SafeTransaction,
) -> Result<ExecutionResult>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    if !tx.is_executable(threshold) {
        return Err(Error::Execution {
            reason: format!(
                "only {} of {} required signatures collected",
                tx.signature_count(),
                threshold
            ),
        });
    }

    let safe = ISafe::new(safe_address, provider);
    let pending = safe
        .execTransaction(
            tx.params.to,
            tx.params.value,
            tx.params.data.clone(),
            tx.params.operation.as_u8(),
            tx.params.safe_tx_gas,
            tx.params.base_gas,
            tx.params.gas_price,
            tx.params.gas_token,
            tx.params.refund_receiver,
            tx.signatures.encode(),
        )
        .send()
        .await
        .map_err(|e| Error::Execution {
            reason: format!("failed to submit execTransaction: {e}"),
        })?;

    let receipt = pending.get_receipt().await.map_err(|e| Error::Execution {
        reason: format!("failed to await execution receipt: {e}"),
    })?;

    let result = normalize_receipt(&receipt);
    if !result.success {
        return Err(Error::Execution {
            reason: format!("transaction {} reverted on chain", result.tx_hash),
        });
    }

    info!(tx = %result.tx_hash, block = ?result.block_number, gas = result.gas_used, "Safe transaction executed");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Operation, SafeTxParams, SafeTransaction};
    use alloy::primitives::{address, Bytes, B256, U256};

    #[tokio::test]
    async fn test_refuses_below_threshold_before_any_rpc() {
        // a provider that would fail on use; refusal must happen first
        let provider = alloy::providers::ProviderBuilder::new()
            .network::<AnyNetwork>()
            .connect_http("http://127.0.0.1:9/".parse().unwrap());

        let params = SafeTxParams::new(
            address!("0x4444444444444444444444444444444444444444"),
            U256::from(1000),
            vec![],
            Operation::Call,
        );
        let mut tx = SafeTransaction::new(params, B256::repeat_byte(0x42));
        let mut sig = vec![0u8; 64];
        sig.push(27);
        tx.add_signature(
            address!("0x1111111111111111111111111111111111111111"),
            Bytes::from(sig),
        )
        .unwrap();

        let err = execute_transaction(
            &provider,
            address!("0x5555555555555555555555555555555555555555"),
            2,
            &tx,
        )
        .await
        .unwrap_err();

        match err {
            Error::Execution { reason } => {
                assert!(reason.contains("1 of 2"), "unexpected reason: {reason}");
            }
            other => panic!("expected Execution error, got {other:?}"),
        }
    }
}

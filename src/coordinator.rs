//! The transaction-approval workflow: propose, collect signatures, relay
//! best-effort, execute once.

use std::fmt;

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use alloy::signers::local::PrivateKeySigner;
use tracing::{info, warn};

use crate::collect::SignatureCollector;
use crate::error::{Error, Result};
use crate::execute::{execute_transaction, ExecutionResult};
use crate::proposal::ProposalBuilder;
use crate::relay::RelayClient;
use crate::safe::SafeClient;
use crate::types::SafeTransaction;

/// Non-fatal condition observed during a pipeline run.
///
/// Warnings are accumulated on the report instead of interrupting the flow;
/// the caller decides whether they matter.
#[derive(Debug, Clone)]
pub enum Warning {
    /// A transaction-service call failed and was bypassed
    Relay {
        /// Which relay call failed ("propose" or "confirm")
        stage: &'static str,
        reason: String,
    },
    /// The Safe's signature-check predicate rejected the aggregate
    Validity { reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Relay { stage, reason } => {
                write!(f, "relay {stage} skipped: {reason}")
            }
            Warning::Validity { reason } => {
                write!(f, "local validity check failed: {reason}")
            }
        }
    }
}

/// Outcome of one transfer pipeline run
#[derive(Debug)]
pub struct TransferReport {
    /// Hash the owners signed
    pub safe_tx_hash: B256,
    /// Safe nonce the proposal was sealed with
    pub nonce: U256,
    /// Safe balance observed before execution
    pub balance_before: U256,
    /// Number of signatures attached at execution time
    pub signatures: usize,
    /// Whether the transaction service accepted the proposal
    pub relayed: bool,
    /// Non-fatal conditions encountered along the way
    pub warnings: Vec<Warning>,
    /// The on-chain execution result
    pub execution: ExecutionResult,
}

/// Coordinates the full approval workflow for one Safe.
///
/// Owns the client, the locally available signer credentials, and an
/// optional relay. One instance runs one flow at a time; the Safe nonce is
/// read once per proposal and never re-checked, so concurrent coordinators
/// against the same Safe are the operator's problem, not this type's.
pub struct Coordinator<P> {
    safe: SafeClient<P>,
    signers: Vec<PrivateKeySigner>,
    relay: Option<RelayClient>,
}

impl<P> Coordinator<P>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    /// Creates a coordinator. At least one signer credential is required;
    /// the first one doubles as the relayer of the final on-chain call.
    pub fn new(
        safe: SafeClient<P>,
        signers: Vec<PrivateKeySigner>,
        relay: Option<RelayClient>,
    ) -> Result<Self> {
        if signers.is_empty() {
            return Err(Error::Config("at least one signer credential is required".into()));
        }
        Ok(Self {
            safe,
            signers,
            relay,
        })
    }

    /// The Safe this coordinator operates on
    pub fn safe(&self) -> &SafeClient<P> {
        &self.safe
    }

    /// Runs the full pipeline once: propose → collect → relay (best-effort)
    /// → execute. Returns a report carrying the execution result and any
    /// warnings; fails only on fatal stages (proposal, signing, execution).
    pub async fn transfer(&self, proposal: ProposalBuilder) -> Result<TransferReport> {
        let threshold = self.safe.threshold().await?;
        let balance_before = self.safe.balance().await?;
        info!(safe = %self.safe.address(), %balance_before, threshold, "starting approval workflow");

        let mut tx = proposal.build(&self.safe).await?;
        let nonce = tx.params.nonce;
        let safe_tx_hash = tx.hash;

        let signatures = SignatureCollector::new(&self.signers, threshold)
            .collect(&mut tx)
            .await?;

        let mut warnings = Vec::new();

        // advisory check; execution is the authoritative rejection point
        let verdict = self.safe.check_signatures(&tx).await;
        if !verdict.valid {
            let reason = verdict.reason.unwrap_or_else(|| "unknown".into());
            warn!(%reason, "aggregated transaction failed local validity check; continuing");
            warnings.push(Warning::Validity { reason });
        }

        let relayed = match &self.relay {
            Some(relay) => self.relay_best_effort(relay, &tx, &mut warnings).await,
            None => false,
        };

        let execution =
            execute_transaction(self.safe.provider(), self.safe.address(), threshold, &tx).await?;

        Ok(TransferReport {
            safe_tx_hash,
            nonce,
            balance_before,
            signatures,
            relayed,
            warnings,
            execution,
        })
    }

    /// Shares the proposal and collected signatures with the transaction
    /// service. Never fails: every error is downgraded to a warning.
    /// Confirmations are only attempted after an accepted proposal, since
    /// the service keys them on a stored record.
    async fn relay_best_effort(
        &self,
        relay: &RelayClient,
        tx: &SafeTransaction,
        warnings: &mut Vec<Warning>,
    ) -> bool {
        // the proposer is the first credential that actually signed
        let Some((sender, first_signature)) = self.first_collected_signature(tx) else {
            return false;
        };

        if let Err(e) = relay
            .propose_transaction(self.safe.address(), tx, sender, first_signature)
            .await
        {
            warnings.push(Warning::Relay {
                stage: "propose",
                reason: e.to_string(),
            });
            return false;
        }

        for (signer, signature) in tx.signatures.iter() {
            if *signer == sender {
                continue;
            }
            if let Err(e) = relay.confirm_transaction(tx.hash, *signer, signature).await {
                warnings.push(Warning::Relay {
                    stage: "confirm",
                    reason: e.to_string(),
                });
            }
        }

        true
    }

    /// The earliest credential (in configured order) that has a signature on
    /// the transaction, together with that signature.
    fn first_collected_signature<'t>(
        &self,
        tx: &'t SafeTransaction,
    ) -> Option<(Address, &'t Bytes)> {
        self.signers.iter().find_map(|signer| {
            let address = signer.address();
            tx.signatures.get(&address).map(|sig| (address, sig))
        })
    }
}

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::ProviderBuilder;
use color_eyre::eyre::{eyre, Result};
use safe_quorum::{Coordinator, Operation, ProposalBuilder, RelayClient, SafeClient};

use crate::cli::TransferArgs;
use crate::output::{confirm_prompt, TransferOutput};
use crate::wallet::parse_signer_list;

pub async fn run(args: TransferArgs, json: bool) -> Result<()> {
    let safe_address: Address = args.safe.parse()?;
    let to: Address = args.to.parse()?;
    let value: U256 = args.value.parse()?;

    let signers = parse_signer_list(&args.owner_keys)?;

    // the first owner credential relays the final on-chain call
    let relayer = signers[0].clone();
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .wallet(alloy::network::EthereumWallet::from(relayer))
        .connect_http(args.rpc_url.parse()?);

    let safe = SafeClient::connect(provider, safe_address).await?;
    if let Some(expected) = args.chain_id {
        if safe.chain_id() != expected {
            return Err(eyre!(
                "Chain id mismatch: expected {}, provider reports {}",
                expected,
                safe.chain_id()
            ));
        }
    }

    let relay = if args.no_relay {
        None
    } else if let Some(url) = &args.relay_url {
        Some(RelayClient::new(url.parse()?))
    } else {
        RelayClient::for_chain(safe.config())
    };

    if !json {
        println!("Safe: {}", safe_address);
        println!("Balance: {} wei", safe.balance().await?);
        println!("Threshold: {}", safe.threshold().await?);
        println!("Signers available: {}", signers.len());
        match &relay {
            Some(relay) => println!("Relay: {}", relay.base_url()),
            None => println!("Relay: disabled"),
        }
        println!();
    }

    let mut proposal = match &args.data {
        Some(data) => ProposalBuilder::new(to, value, data.parse::<Bytes>()?, Operation::Call),
        None => ProposalBuilder::transfer(to, value),
    };
    if let Some(gas) = &args.safe_tx_gas {
        proposal = proposal.with_safe_tx_gas(gas.parse()?);
    }

    if !args.no_confirm && !json && !confirm_prompt(&format!("Transfer {value} wei to {to}?")) {
        println!("Aborted");
        return Ok(());
    }

    let coordinator = Coordinator::new(safe, signers, relay)?;
    let report = coordinator.transfer(proposal).await?;

    let output = TransferOutput {
        safe_tx_hash: report.safe_tx_hash,
        nonce: report.nonce,
        signatures: report.signatures,
        relayed: report.relayed,
        warnings: report.warnings.iter().map(|w| w.to_string()).collect(),
        tx_hash: report.execution.tx_hash,
        success: report.execution.success,
        block_number: report.execution.block_number,
        gas_used: report.execution.gas_used,
    };
    output.print(json);

    Ok(())
}

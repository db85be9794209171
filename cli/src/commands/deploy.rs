use alloy::network::AnyNetwork;
use alloy::primitives::{Address, U256};
use alloy::providers::ProviderBuilder;
use color_eyre::eyre::{eyre, Result};
use safe_quorum::{SafeAccountConfig, SafeDeployer};

use crate::cli::DeployArgs;
use crate::output::{confirm_prompt, DeployOutput};
use crate::wallet::create_signer;

fn check_chain_id(expected: Option<u64>, actual: u64) -> Result<()> {
    match expected {
        Some(expected) if expected != actual => Err(eyre!(
            "Chain id mismatch: expected {}, provider reports {}",
            expected,
            actual
        )),
        _ => Ok(()),
    }
}

pub async fn run(args: DeployArgs, json: bool) -> Result<()> {
    let mut owners = Vec::with_capacity(args.owners.len());
    for owner_str in &args.owners {
        let owner: Address = owner_str
            .parse()
            .map_err(|e| eyre!("Invalid owner address '{}': {}", owner_str, e))?;
        owners.push(owner);
    }

    // validates threshold bounds and owner uniqueness
    let account = SafeAccountConfig::new(owners, args.threshold)?;
    let salt_nonce: U256 = args.salt_nonce.parse()?;

    if args.compute_only {
        let provider = ProviderBuilder::new()
            .network::<AnyNetwork>()
            .connect_http(args.rpc_url.parse()?);

        let deployer = SafeDeployer::connect(provider).await?;
        check_chain_id(args.chain_id, deployer.config().chain_id)?;
        let pending = deployer.predict(&account, salt_nonce).await?;
        let already_deployed = deployer.is_deployed(pending.address).await?;

        let output = DeployOutput {
            safe_address: pending.address,
            tx_hash: None,
            owners: account.owners,
            threshold: account.threshold,
            already_deployed,
        };
        output.print(json);
        return Ok(());
    }

    let signer = create_signer(args.deployer_key.as_deref(), args.interactive)?;
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .wallet(alloy::network::EthereumWallet::from(signer))
        .connect_http(args.rpc_url.parse()?);

    let deployer = SafeDeployer::connect(provider).await?;
    check_chain_id(args.chain_id, deployer.config().chain_id)?;
    let pending = deployer.predict(&account, salt_nonce).await?;

    if !json {
        println!("Predicted Safe address: {}", pending.address);
        println!("  Threshold: {}", account.threshold);
        println!("  Owners: {:?}", account.owners);
        println!("  Salt Nonce: {}", salt_nonce);
        println!();
    }

    if !args.no_confirm && !json && !confirm_prompt("Deploy new Safe?") {
        println!("Aborted");
        return Ok(());
    }

    let deployed = deployer.deploy(&pending).await?;

    let output = DeployOutput {
        safe_address: deployed.address,
        tx_hash: deployed.tx_hash,
        owners: account.owners,
        threshold: account.threshold,
        already_deployed: deployed.already_deployed,
    };
    output.print(json);

    Ok(())
}

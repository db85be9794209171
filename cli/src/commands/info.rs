use alloy::network::AnyNetwork;
use alloy::primitives::Address;
use alloy::providers::ProviderBuilder;
use color_eyre::eyre::Result;
use safe_quorum::SafeClient;

use crate::cli::InfoArgs;
use crate::output::SafeInfoOutput;

pub async fn run(args: InfoArgs, json: bool) -> Result<()> {
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(args.rpc_url.parse()?);

    let safe_address: Address = args.safe.parse()?;
    let safe = SafeClient::connect(provider, safe_address).await?;

    let output = SafeInfoOutput {
        address: safe_address,
        balance: safe.balance().await?,
        nonce: safe.nonce().await?,
        threshold: safe.threshold().await?,
        owners: safe.owners().await?,
    };

    output.print(json);

    Ok(())
}

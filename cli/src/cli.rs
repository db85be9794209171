use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safe-quorum")]
#[command(about = "Deploy Safes and coordinate threshold-signed transfers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy a new Safe deterministically (same address across chains)
    Deploy(DeployArgs),

    /// Propose, sign, relay and execute a transfer from a Safe
    Transfer(TransferArgs),

    /// Display Safe information (balance, nonce, threshold, owners)
    Info(InfoArgs),
}

#[derive(Parser, Clone)]
pub struct DeployArgs {
    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// Owner address (repeatable)
    #[arg(long = "owner", value_name = "ADDR", required = true)]
    pub owners: Vec<String>,

    /// Signature threshold
    #[arg(long, default_value = "1")]
    pub threshold: u64,

    /// Salt nonce for CREATE2 (default: 0)
    #[arg(long, default_value = "0")]
    pub salt_nonce: String,

    /// Expected chain id; checked against the provider's answer
    #[arg(long, env = "CHAIN_ID")]
    pub chain_id: Option<u64>,

    /// Only compute and display the predicted address, don't deploy
    #[arg(long)]
    pub compute_only: bool,

    /// Deployer private key; pays for the broadcast, need not be an owner
    #[arg(long, env = "DEPLOYER_KEY")]
    pub deployer_key: Option<String>,

    /// Prompt for the deployer key interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Skip confirmation prompt
    #[arg(long)]
    pub no_confirm: bool,
}

#[derive(Parser, Clone)]
pub struct TransferArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// Recipient address
    #[arg(long, env = "RECIPIENT")]
    pub to: String,

    /// Amount to transfer (in wei)
    #[arg(long, env = "TRANSFER_AMOUNT")]
    pub value: String,

    /// Raw calldata to attach (0x-hex)
    #[arg(long)]
    pub data: Option<String>,

    /// Owner private key (repeatable; comma-separated in OWNER_KEYS)
    #[arg(
        long = "owner-key",
        value_name = "KEY",
        env = "OWNER_KEYS",
        value_delimiter = ',',
        required = true
    )]
    pub owner_keys: Vec<String>,

    /// Expected chain id; checked against the provider's answer
    #[arg(long, env = "CHAIN_ID")]
    pub chain_id: Option<u64>,

    /// Transaction service URL (chain default when omitted)
    #[arg(long, env = "SAFE_TX_SERVICE_URL")]
    pub relay_url: Option<String>,

    /// Skip the transaction service entirely
    #[arg(long)]
    pub no_relay: bool,

    /// Override Safe transaction gas limit (0 = use all available gas)
    #[arg(long)]
    pub safe_tx_gas: Option<String>,

    /// Skip confirmation prompt
    #[arg(long)]
    pub no_confirm: bool,
}

#[derive(Parser, Clone)]
pub struct InfoArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

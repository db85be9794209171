use alloy::primitives::{Address, TxHash, B256, U256};
use serde::Serialize;

#[derive(Serialize)]
pub struct DeployOutput {
    pub safe_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<TxHash>,
    pub owners: Vec<Address>,
    pub threshold: u64,
    pub already_deployed: bool,
}

impl DeployOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe Address: {}", self.safe_address);
            if self.already_deployed {
                println!("  Status: Already deployed");
            } else if let Some(tx_hash) = self.tx_hash {
                println!("  Tx Hash: {}", tx_hash);
            }
            println!("  Threshold: {}", self.threshold);
            println!("  Owners:");
            for (i, owner) in self.owners.iter().enumerate() {
                println!("    {}: {}", i + 1, owner);
            }
        }
    }
}

#[derive(Serialize)]
pub struct TransferOutput {
    pub safe_tx_hash: B256,
    pub nonce: U256,
    pub signatures: usize,
    pub relayed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub tx_hash: TxHash,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl TransferOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Transfer Executed:");
            println!("  Safe Tx Hash: {}", self.safe_tx_hash);
            println!("  Nonce: {}", self.nonce);
            println!("  Signatures: {}", self.signatures);
            println!("  Relayed: {}", self.relayed);
            println!("  Tx Hash: {}", self.tx_hash);
            println!("  Success: {}", self.success);
            if let Some(block) = self.block_number {
                println!("  Block: {}", block);
            }
            println!("  Gas Used: {}", self.gas_used);
            for warning in &self.warnings {
                println!("  Warning: {}", warning);
            }
        }
    }
}

#[derive(Serialize)]
pub struct SafeInfoOutput {
    pub address: Address,
    pub balance: U256,
    pub nonce: U256,
    pub threshold: u64,
    pub owners: Vec<Address>,
}

impl SafeInfoOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe: {}", self.address);
            println!("Balance: {} wei", self.balance);
            println!("Nonce: {}", self.nonce);
            println!("Threshold: {}", self.threshold);
            println!("Owners:");
            for (i, owner) in self.owners.iter().enumerate() {
                println!("  {}: {}", i + 1, owner);
            }
        }
    }
}

pub fn confirm_prompt(message: &str) -> bool {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}

use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{eyre, Result};

/// Loads the deployer credential from a flag/env value or an interactive
/// prompt.
pub fn create_signer(private_key: Option<&str>, interactive: bool) -> Result<PrivateKeySigner> {
    if interactive {
        let key = rpassword::prompt_password("Enter private key: ")?;
        parse_private_key(&key)
    } else if let Some(private_key) = private_key {
        parse_private_key(private_key)
    } else {
        Err(eyre!(
            "No deployer key specified. Use --deployer-key, DEPLOYER_KEY or --interactive"
        ))
    }
}

/// Parses owner credentials in the order given; order determines signing
/// order and which signer relays the final call.
pub fn parse_signer_list(keys: &[String]) -> Result<Vec<PrivateKeySigner>> {
    if keys.is_empty() {
        return Err(eyre!("No owner keys specified. Use --owner-key or OWNER_KEYS"));
    }
    keys.iter().map(|key| parse_private_key(key)).collect()
}

fn parse_private_key(key: &str) -> Result<PrivateKeySigner> {
    let key = key.trim();
    // Strip 0x prefix if present
    let key = key.strip_prefix("0x").unwrap_or(key);

    key.parse::<PrivateKeySigner>()
        .map_err(|e| eyre!("Invalid private key: {}", e))
}

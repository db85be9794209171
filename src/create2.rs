//! CREATE2 address computation for Safe proxy deployment
//!
//! The proxy factory deploys Safes at deterministic addresses derived from
//! the singleton address, the setup initializer, and a salt nonce. Predicting
//! the address requires no broadcast, which is what makes deployment
//! idempotent and retryable.

use alloy::primitives::{keccak256, Address, Bytes, U256};
use alloy::sol_types::SolCall;

use crate::contracts::ISafeSetup;
use crate::types::SafeAccountConfig;

/// Encodes the Safe.setup() call that initializes a freshly deployed proxy
/// with the given owner set and threshold.
pub fn encode_setup_call(account: &SafeAccountConfig, fallback_handler: Address) -> Bytes {
    let setup_call = ISafeSetup::setupCall {
        _owners: account.owners.clone(),
        _threshold: U256::from(account.threshold),
        to: Address::ZERO,
        data: Bytes::new(),
        fallbackHandler: fallback_handler,
        paymentToken: Address::ZERO,
        payment: U256::ZERO,
        paymentReceiver: Address::ZERO,
    };

    Bytes::from(setup_call.abi_encode())
}

/// Computes the CREATE2 address for a Safe proxy
///
/// The Safe proxy factory uses a specific CREATE2 formula:
/// ```text
/// salt = keccak256(keccak256(initializer) ++ saltNonce)
/// init_code = proxyCreationCode ++ singleton_address_padded
/// address = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12:]
/// ```
pub fn compute_create2_address(
    factory: Address,
    singleton: Address,
    initializer: &Bytes,
    salt_nonce: U256,
    creation_code: &Bytes,
) -> Address {
    // salt = keccak256(keccak256(initializer) ++ saltNonce)
    let initializer_hash = keccak256(initializer);

    let mut salt_input = [0u8; 64];
    salt_input[..32].copy_from_slice(initializer_hash.as_slice());
    salt_input[32..64].copy_from_slice(&salt_nonce.to_be_bytes::<32>());

    let salt = keccak256(salt_input);

    // init_code_hash = keccak256(creation_code ++ singleton_padded)
    let mut init_code = creation_code.to_vec();
    let mut singleton_padded = [0u8; 32];
    singleton_padded[12..].copy_from_slice(singleton.as_slice());
    init_code.extend_from_slice(&singleton_padded);

    let init_code_hash = keccak256(&init_code);

    let mut create2_input = Vec::with_capacity(1 + 20 + 32 + 32);
    create2_input.push(0xff);
    create2_input.extend_from_slice(factory.as_slice());
    create2_input.extend_from_slice(salt.as_slice());
    create2_input.extend_from_slice(init_code_hash.as_slice());

    let hash = keccak256(&create2_input);

    Address::from_slice(&hash[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn two_of_three() -> SafeAccountConfig {
        SafeAccountConfig::new(
            vec![
                address!("1111111111111111111111111111111111111111"),
                address!("2222222222222222222222222222222222222222"),
                address!("3333333333333333333333333333333333333333"),
            ],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_encode_setup_call_selector() {
        let fallback_handler = address!("fd0732Dc9E303f09fCEf3a7388Ad10A83459Ec99");
        let data = encode_setup_call(&two_of_three(), fallback_handler);

        // setup() selector is 0xb63e800d
        assert!(!data.is_empty());
        assert_eq!(&data[0..4], &[0xb6, 0x3e, 0x80, 0x0d]);
    }

    #[test]
    fn test_setup_call_binds_threshold() {
        let fallback_handler = address!("fd0732Dc9E303f09fCEf3a7388Ad10A83459Ec99");
        let mut other = two_of_three();
        other.threshold = 3;

        let a = encode_setup_call(&two_of_three(), fallback_handler);
        let b = encode_setup_call(&other, fallback_handler);
        assert_ne!(a, b);
    }

    #[test]
    fn test_compute_create2_address_deterministic() {
        let factory = address!("4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67");
        let singleton = address!("41675C099F32341bf84BFc5382aF534df5C7461a");
        let initializer = encode_setup_call(&two_of_three(), Address::ZERO);
        let creation_code = Bytes::from(vec![0x60, 0x80, 0x60, 0x40]);

        let addr1 =
            compute_create2_address(factory, singleton, &initializer, U256::from(42), &creation_code);
        let addr2 =
            compute_create2_address(factory, singleton, &initializer, U256::from(42), &creation_code);

        assert_eq!(addr1, addr2, "CREATE2 address should be deterministic");
    }

    #[test]
    fn test_compute_create2_address_different_nonce() {
        let factory = address!("4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67");
        let singleton = address!("41675C099F32341bf84BFc5382aF534df5C7461a");
        let initializer = encode_setup_call(&two_of_three(), Address::ZERO);
        let creation_code = Bytes::from(vec![0x60, 0x80, 0x60, 0x40]);

        let addr1 =
            compute_create2_address(factory, singleton, &initializer, U256::from(1), &creation_code);
        let addr2 =
            compute_create2_address(factory, singleton, &initializer, U256::from(2), &creation_code);

        assert_ne!(addr1, addr2, "Different salt nonces should produce different addresses");
    }

    #[test]
    fn test_compute_create2_address_different_owner_set() {
        let factory = address!("4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67");
        let singleton = address!("41675C099F32341bf84BFc5382aF534df5C7461a");
        let creation_code = Bytes::from(vec![0x60, 0x80, 0x60, 0x40]);

        let mut other = two_of_three();
        other.owners.pop();
        other.threshold = 2;

        let init_a = encode_setup_call(&two_of_three(), Address::ZERO);
        let init_b = encode_setup_call(&other, Address::ZERO);

        let addr_a =
            compute_create2_address(factory, singleton, &init_a, U256::ZERO, &creation_code);
        let addr_b =
            compute_create2_address(factory, singleton, &init_b, U256::ZERO, &creation_code);

        assert_ne!(addr_a, addr_b, "Owner set is part of the address derivation");
    }
}

//! Safe deployment E2E tests

use alloy::primitives::U256;

use crate::common::TestHarness;
use crate::skip_if_no_rpc;
use safe_quorum::{Error, SafeAccountConfig};

/// Predicting an address is a pure function of owners, threshold, and salt
#[tokio::test]
async fn test_predict_is_deterministic() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployer = harness.deployer().await;
    let account = SafeAccountConfig::new(harness.owner_addresses(3), 2).unwrap();

    let first = deployer.predict(&account, U256::from(1001)).await.unwrap();
    let second = deployer.predict(&account, U256::from(1001)).await.unwrap();
    assert_eq!(
        first.address, second.address,
        "same inputs must predict the same address"
    );

    let other_salt = deployer.predict(&account, U256::from(1002)).await.unwrap();
    assert_ne!(
        first.address, other_salt.address,
        "different salt must predict a different address"
    );
}

/// Deploying lands the Safe at the predicted address with the configured
/// owner set and threshold
#[tokio::test]
async fn test_deploy_two_of_three() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployer = harness.deployer().await;
    let account = SafeAccountConfig::new(harness.owner_addresses(3), 2).unwrap();

    let pending = deployer.predict(&account, U256::from(2001)).await.unwrap();
    let deployed = deployer.deploy(&pending).await.expect("deployment failed");

    assert_eq!(deployed.address, pending.address);
    assert!(!deployed.already_deployed);
    assert!(deployed.tx_hash.is_some());

    let safe = harness.safe_client(deployed.address).await;
    assert_eq!(safe.threshold().await.unwrap(), 2);

    let owners = safe.owners().await.unwrap();
    assert_eq!(owners.len(), 3);
    for owner in harness.owner_addresses(3) {
        assert!(owners.contains(&owner), "owner {owner} missing from Safe");
    }
}

/// A second deployment of the same configuration detects the existing Safe
/// instead of re-deploying or erroring
#[tokio::test]
async fn test_deploy_is_idempotent() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let salt_nonce = U256::from(3001);

    let first = harness.deploy_safe(3, 2, salt_nonce).await;
    assert!(!first.already_deployed);

    let second = harness.deploy_safe(3, 2, salt_nonce).await;
    assert!(second.already_deployed, "existing deployment must be detected");
    assert_eq!(first.address, second.address);
    assert!(second.tx_hash.is_none());
}

/// Invalid owner/threshold combinations are rejected before any broadcast
#[tokio::test]
async fn test_predict_rejects_invalid_config() {
    skip_if_no_rpc!();

    let harness = TestHarness::new().await;
    let deployer = harness.deployer().await;

    let too_high = SafeAccountConfig {
        owners: harness.owner_addresses(2),
        threshold: 3,
    };
    let err = deployer.predict(&too_high, U256::ZERO).await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let zero = SafeAccountConfig {
        owners: harness.owner_addresses(2),
        threshold: 0,
    };
    let err = deployer.predict(&zero, U256::ZERO).await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
